// Standalone components
pub mod button;
pub mod card;
pub mod form;
pub mod input;
pub mod textarea;

// Composite components
pub mod navbar;
pub mod status_region;

// Re-exports for convenience
pub use button::*;
pub use card::*;
pub use form::*;
pub use input::*;
pub use navbar::*;
pub use status_region::*;
pub use textarea::*;
