//! Builder API for ergonomic container construction.
//!
//! The builder gathers slot resources, listeners and settings, validates
//! them, and registers every slot in one go.

pub mod container;
pub mod error;

pub use container::ContainerBuilder;
pub use error::BuildError;
