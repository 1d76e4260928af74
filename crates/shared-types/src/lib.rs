pub mod config;
pub mod contact;
pub mod error;
pub mod status;

pub use config::*;
pub use contact::*;
pub use error::*;
pub use status::*;
