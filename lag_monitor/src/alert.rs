mod notifier;
mod routing;
mod telegram;

pub use notifier::*;
pub use routing::*;
pub use telegram::*;
