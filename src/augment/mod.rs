//! Augment bundles and their registry.
//!
//! - `bundle`: the named, shareable `Augment` and its persistence
//! - `registry`: name-keyed template store used by the content loader

pub mod bundle;
pub mod registry;

pub use bundle::{Augment, FORMAT_VERSION};
pub use registry::AugmentRegistry;
