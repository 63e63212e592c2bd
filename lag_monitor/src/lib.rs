pub mod alert;
pub mod classifier;
pub mod error;
pub mod log_sink;
pub mod partitions;
pub mod registry;
pub mod report;
pub mod scheduler;
pub mod settings;
pub mod severity;
pub mod source;
