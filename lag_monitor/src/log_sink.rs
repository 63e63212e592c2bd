mod config;
mod record;
mod sink;
mod worker;

pub use config::*;
pub use record::*;
pub use sink::*;
