pub mod config;
pub mod error;
pub mod fetch;
pub mod reference;
pub mod s3;

pub use fetch::{fetch_secret, write_secret};
pub use reference::SecretRef;
