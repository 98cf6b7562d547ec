mod fixtures;
mod log_capture;
mod mock_ports;

pub use fixtures::*;
pub use log_capture::*;
pub use mock_ports::*;
