//! # StoryBldr Domain
//!
//! Shared vocabulary types for StoryBldr stories. This is the innermost
//! layer of the architecture: the story editor, the chat runtime and the
//! persistence adapters all consume these types, but this crate depends on
//! none of them.
//!
//! ## Architecture Role
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ domain (THIS CRATE)                     │  ← Innermost layer, zero internal deps
//! │   Story block vocabulary                │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//!    ┌─────────┐            ┌──────────┐
//!    │ editor  │            │ runtime  │
//!    │ (uses)  │            │ (uses)   │
//!    └─────────┘            └──────────┘
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure data types** - No I/O, no async, no side effects
//! 2. **Closed taxonomy** - The block kind set is fixed; no dynamic registration
//! 3. **Serializable** - Blocks serialize as their historical integer codes

pub mod error;
pub mod types;

pub use error::DomainError;
pub use types::{BlockCategory, StoryBlockKind};
