//! Domain logic - pure version and tag rules independent of git and the filesystem

pub mod tag;
pub mod version;

pub use tag::TagPattern;
pub use version::{Baseline, Version};
