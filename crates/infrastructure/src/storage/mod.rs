pub mod fs_backup_store;

pub use fs_backup_store::FsBackupStore;
