mod log_file;
mod lookup;
mod parser;
mod time_window;

pub use log_file::{DEFAULT_SEPARATOR, LogFile};
