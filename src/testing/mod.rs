mod log_writer;

pub use log_writer::LogWriter;
