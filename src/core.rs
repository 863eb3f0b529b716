//! Core functionality used across the crate.

pub mod splice;
pub mod window;

pub use splice::SitePosition;
pub use splice::SpliceType;
pub use window::Window;
