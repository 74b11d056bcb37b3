//! Story block category enumeration
//!
//! The coarse role a block plays in a conversation. The editor groups its
//! block palette by category; the runtime uses it to decide whether a block
//! sends, waits, or redirects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse interaction role of a story block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockCategory {
    /// Marks story boundaries and error states (anchor, end, error)
    Lifecycle,
    /// Emits content and never waits for user input
    Output,
    /// Waits for user input with no leading message
    Input,
    /// Sends a message, then waits for the reply
    OutputInput,
    /// Control-flow redirection or side-effecting action
    Structural,
    /// Blocks that fit none of the above (location sharing)
    Special,
}

impl BlockCategory {
    /// Get all categories for palette grouping
    pub fn all() -> &'static [BlockCategory] {
        &[
            BlockCategory::Lifecycle,
            BlockCategory::Output,
            BlockCategory::Input,
            BlockCategory::OutputInput,
            BlockCategory::Structural,
            BlockCategory::Special,
        ]
    }

    /// Get a display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            BlockCategory::Lifecycle => "Lifecycle",
            BlockCategory::Output => "Output",
            BlockCategory::Input => "Input",
            BlockCategory::OutputInput => "Output & Input",
            BlockCategory::Structural => "Structural",
            BlockCategory::Special => "Special",
        }
    }
}

impl fmt::Display for BlockCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
