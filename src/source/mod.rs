mod log_source;

pub use log_source::LogSource;
