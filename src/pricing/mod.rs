#[cfg(feature = "serde")]
pub mod config;
#[cfg(feature = "serde")]
pub mod pipeline;
pub mod types;
