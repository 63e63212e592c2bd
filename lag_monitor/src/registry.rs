mod consumer_entry;
mod consumer_registry;
mod group_config;

pub use consumer_entry::*;
pub use consumer_registry::*;
pub use group_config::*;
