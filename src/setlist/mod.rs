pub mod config;
pub mod generator;
pub mod layout;
pub mod metadata;
pub mod partition;

#[cfg(test)]
mod config_tests;

pub use config::*;
pub use generator::*;
pub use layout::*;
pub use metadata::*;
pub use partition::*;
