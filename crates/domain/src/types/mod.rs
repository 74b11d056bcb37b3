//! Story block vocabulary types
//!
//! The closed taxonomy of story blocks and the pure classification
//! functions over it. These types are used by both the editor and the
//! runtime, serving as the stable contract between them.

mod block_category;
pub use block_category::BlockCategory;

mod block_kind;
pub use block_kind::StoryBlockKind;
