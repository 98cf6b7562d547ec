pub mod process_dump_runner;

pub use process_dump_runner::ProcessDumpRunner;
