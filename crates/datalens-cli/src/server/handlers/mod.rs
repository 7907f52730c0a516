//! API request handlers.

mod configs;
mod dataset;
mod example;

pub use configs::*;
pub use dataset::*;
pub use example::*;
