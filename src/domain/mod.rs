//! Domain layer: namespace hierarchy and comment association
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config
//! loading). Everything operates on in-memory lines and dotted label paths.

pub mod builder;
pub mod describe;
pub mod error;
pub mod hierarchy;
pub mod walk;

pub use builder::{build_hierarchy, set_descriptions};
pub use describe::DescriptionExtractor;
pub use error::{DocError, DocResult};
pub use hierarchy::HierarchyNode;
pub use walk::{visit, WalkEvent, Walker};

/// Contract for turning a raw listing line into its logical source text.
///
/// The logical text is the code plus any trailing same-line comment, with
/// listing-specific metadata columns (line number, address, object bytes)
/// removed. The domain layer never parses listing columns itself.
pub trait LogicalText {
    fn logical_text<'a>(&self, raw: &'a str) -> &'a str;
}
