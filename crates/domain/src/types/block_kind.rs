//! Story block kind enumeration
//!
//! The closed set of node kinds a story flow graph can contain, plus the
//! pure classification predicates the editor and runtime dispatch on.
//!
//! Each kind carries a `u16` code that is the wire and persistence
//! representation (stories written by older builds store these numbers).
//! Identity is by name; the code is a serialization detail. The historical
//! numbering is sparse and out of declaration order, which is why the codes
//! below are explicit rather than derived.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::types::BlockCategory;

/// Kind of a story block - one node in a conversational flow graph
///
/// Serializes as its integer code, not its name, to stay compatible with
/// persisted stories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u16", into = "u16")]
#[repr(u16)]
pub enum StoryBlockKind {
    /// Marks the beginning of a story.
    /// Automatically loaded on the editor when the user creates a story.
    #[default]
    AnchorBlock = 0,

    /// Only produces message output and will not wait for input.
    /// Usage: operator sends a message, terminal chatflow, ...
    TextMessage = 1,

    /// Only waits for input and has no leading message.
    /// Usage: operator awaits feedback, ...
    Input = 2,

    /// Sends a message then expects input (buttons question, ...).
    /// Usage: bot scenario-designs
    Io = 3,

    /// Sends a location to the user
    Location = 4,

    /// Sends an image and expects no input from the user
    Image = 5,

    QuestionBlock = 6,

    /// Sends a document to the user as output
    Document = 7,

    /// Sends an audio as output to the user
    Audio = 8,

    /// Redirects to a story section with another scenario.
    /// Usage: structuring and reusing scenario-designs
    Structural = 9,

    /// Waits for the user to return their name as input
    Name = 10,

    /// Waits for the user to enter their email address as input
    Email = 11,

    /// Waits for the user to enter their phone number as input
    PhoneNumber = 12,

    /// Sends a message to the user in form of a video
    Video = 13,

    /// Sends a sticker to the user as a message
    Sticker = 15,

    ListBlock = 16,

    /// Expects input from the user by replying to a message
    Reply = 17,

    /// Links a different story within the same story
    JumpBlock = 18,

    /// Sends a list of items for the user to choose from and asks whether
    /// they want to choose again
    MultipleInput = 19,

    FailBlock = 20,

    AudioInput = 21,

    LocationInputBlock = 22,

    VideoInput = 23,

    /// Calls a specified URL endpoint when hit
    WebhookBlock = 25,

    /// Sends a message to the user and expects a list of items back.
    /// Historically shared code 16 with [`StoryBlockKind::ListBlock`]; it
    /// now owns 26 so the code space stays bijective.
    List = 26,

    /// Accepts an open-ended answer from the user
    OpenEndedQuestion = 27,

    /// Accepts any type of input
    MultiContentInput = 28,

    /// Processes a user response and determines the next step/block
    Keyword = 29,

    /// Tracks when a user reaches a certain action
    Event = 30,

    ImageInput = 50,

    ErrorBlock = 999,

    /// Marks the end of a story
    EndStoryAnchorBlock = 9999,
}

impl StoryBlockKind {
    /// Get all block kinds, for editor palettes and dropdowns
    pub fn all() -> &'static [StoryBlockKind] {
        &[
            StoryBlockKind::AnchorBlock,
            StoryBlockKind::TextMessage,
            StoryBlockKind::Input,
            StoryBlockKind::Io,
            StoryBlockKind::Location,
            StoryBlockKind::Image,
            StoryBlockKind::QuestionBlock,
            StoryBlockKind::Document,
            StoryBlockKind::Audio,
            StoryBlockKind::Structural,
            StoryBlockKind::Name,
            StoryBlockKind::Email,
            StoryBlockKind::PhoneNumber,
            StoryBlockKind::Video,
            StoryBlockKind::Sticker,
            StoryBlockKind::ListBlock,
            StoryBlockKind::Reply,
            StoryBlockKind::JumpBlock,
            StoryBlockKind::MultipleInput,
            StoryBlockKind::FailBlock,
            StoryBlockKind::AudioInput,
            StoryBlockKind::LocationInputBlock,
            StoryBlockKind::VideoInput,
            StoryBlockKind::WebhookBlock,
            StoryBlockKind::List,
            StoryBlockKind::OpenEndedQuestion,
            StoryBlockKind::MultiContentInput,
            StoryBlockKind::Keyword,
            StoryBlockKind::Event,
            StoryBlockKind::ImageInput,
            StoryBlockKind::ErrorBlock,
            StoryBlockKind::EndStoryAnchorBlock,
        ]
    }

    /// The wire/persistence integer code for this kind
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Look up a kind by its integer code
    ///
    /// Unknown codes are an explicit error rather than a silent default:
    /// a persisted story referencing a code outside the set is corrupt.
    pub fn from_code(code: u16) -> Result<Self, DomainError> {
        match code {
            0 => Ok(StoryBlockKind::AnchorBlock),
            1 => Ok(StoryBlockKind::TextMessage),
            2 => Ok(StoryBlockKind::Input),
            3 => Ok(StoryBlockKind::Io),
            4 => Ok(StoryBlockKind::Location),
            5 => Ok(StoryBlockKind::Image),
            6 => Ok(StoryBlockKind::QuestionBlock),
            7 => Ok(StoryBlockKind::Document),
            8 => Ok(StoryBlockKind::Audio),
            9 => Ok(StoryBlockKind::Structural),
            10 => Ok(StoryBlockKind::Name),
            11 => Ok(StoryBlockKind::Email),
            12 => Ok(StoryBlockKind::PhoneNumber),
            13 => Ok(StoryBlockKind::Video),
            15 => Ok(StoryBlockKind::Sticker),
            16 => Ok(StoryBlockKind::ListBlock),
            17 => Ok(StoryBlockKind::Reply),
            18 => Ok(StoryBlockKind::JumpBlock),
            19 => Ok(StoryBlockKind::MultipleInput),
            20 => Ok(StoryBlockKind::FailBlock),
            21 => Ok(StoryBlockKind::AudioInput),
            22 => Ok(StoryBlockKind::LocationInputBlock),
            23 => Ok(StoryBlockKind::VideoInput),
            25 => Ok(StoryBlockKind::WebhookBlock),
            26 => Ok(StoryBlockKind::List),
            27 => Ok(StoryBlockKind::OpenEndedQuestion),
            28 => Ok(StoryBlockKind::MultiContentInput),
            29 => Ok(StoryBlockKind::Keyword),
            30 => Ok(StoryBlockKind::Event),
            50 => Ok(StoryBlockKind::ImageInput),
            999 => Ok(StoryBlockKind::ErrorBlock),
            9999 => Ok(StoryBlockKind::EndStoryAnchorBlock),
            _ => Err(DomainError::UnknownBlockCode { code }),
        }
    }

    /// Get a display name for the kind
    pub fn display_name(&self) -> &'static str {
        match self {
            StoryBlockKind::AnchorBlock => "AnchorBlock",
            StoryBlockKind::TextMessage => "TextMessage",
            StoryBlockKind::Input => "Input",
            StoryBlockKind::Io => "IO",
            StoryBlockKind::Location => "Location",
            StoryBlockKind::Image => "Image",
            StoryBlockKind::QuestionBlock => "QuestionBlock",
            StoryBlockKind::Document => "Document",
            StoryBlockKind::Audio => "Audio",
            StoryBlockKind::Structural => "Structural",
            StoryBlockKind::Name => "Name",
            StoryBlockKind::Email => "Email",
            StoryBlockKind::PhoneNumber => "PhoneNumber",
            StoryBlockKind::Video => "Video",
            StoryBlockKind::Sticker => "Sticker",
            StoryBlockKind::ListBlock => "ListBlock",
            StoryBlockKind::Reply => "Reply",
            StoryBlockKind::JumpBlock => "JumpBlock",
            StoryBlockKind::MultipleInput => "MultipleInput",
            StoryBlockKind::FailBlock => "FailBlock",
            StoryBlockKind::AudioInput => "AudioInput",
            StoryBlockKind::LocationInputBlock => "LocationInputBlock",
            StoryBlockKind::VideoInput => "VideoInput",
            StoryBlockKind::WebhookBlock => "WebhookBlock",
            StoryBlockKind::List => "List",
            StoryBlockKind::OpenEndedQuestion => "OpenEndedQuestion",
            StoryBlockKind::MultiContentInput => "MultiContentInput",
            StoryBlockKind::Keyword => "Keyword",
            StoryBlockKind::Event => "Event",
            StoryBlockKind::ImageInput => "ImageInput",
            StoryBlockKind::ErrorBlock => "ErrorBlock",
            StoryBlockKind::EndStoryAnchorBlock => "EndStoryAnchorBlock",
        }
    }

    /// The coarse interaction role of this kind
    pub fn category(&self) -> BlockCategory {
        match self {
            StoryBlockKind::AnchorBlock
            | StoryBlockKind::ErrorBlock
            | StoryBlockKind::EndStoryAnchorBlock => BlockCategory::Lifecycle,

            StoryBlockKind::TextMessage
            | StoryBlockKind::Image
            | StoryBlockKind::Audio
            | StoryBlockKind::Video
            | StoryBlockKind::Sticker
            | StoryBlockKind::Document => BlockCategory::Output,

            StoryBlockKind::Input
            | StoryBlockKind::Name
            | StoryBlockKind::Email
            | StoryBlockKind::PhoneNumber
            | StoryBlockKind::AudioInput
            | StoryBlockKind::VideoInput
            | StoryBlockKind::LocationInputBlock
            | StoryBlockKind::ImageInput
            | StoryBlockKind::MultiContentInput => BlockCategory::Input,

            StoryBlockKind::Io
            | StoryBlockKind::QuestionBlock
            | StoryBlockKind::ListBlock
            | StoryBlockKind::List
            | StoryBlockKind::Reply
            | StoryBlockKind::MultipleInput
            | StoryBlockKind::OpenEndedQuestion => BlockCategory::OutputInput,

            StoryBlockKind::Structural
            | StoryBlockKind::JumpBlock
            | StoryBlockKind::FailBlock
            | StoryBlockKind::WebhookBlock
            | StoryBlockKind::Keyword
            | StoryBlockKind::Event => BlockCategory::Structural,

            StoryBlockKind::Location => BlockCategory::Special,
        }
    }

    /// Check if this block only emits content and never waits for input
    ///
    /// Deliberately narrower than "has output": kinds that send a message
    /// and then wait (QuestionBlock, ListBlock, ...) are NOT output blocks.
    pub fn is_output(&self) -> bool {
        matches!(
            self,
            Self::TextMessage
                | Self::Image
                | Self::Audio
                | Self::Video
                | Self::Sticker
                | Self::Document
        )
    }

    /// Check if this block performs control-flow redirection or a
    /// side-effecting action rather than user-facing messaging
    pub fn is_operation(&self) -> bool {
        matches!(
            self,
            Self::JumpBlock
                | Self::EndStoryAnchorBlock
                | Self::FailBlock
                | Self::WebhookBlock
                | Self::Keyword
                | Self::Event
        )
    }

    /// Check if this block's payload is a non-text media asset
    pub fn is_media(&self) -> bool {
        matches!(
            self,
            Self::Image | Self::Audio | Self::Video | Self::Sticker | Self::Document
        )
    }
}

impl fmt::Display for StoryBlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for StoryBlockKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        StoryBlockKind::all()
            .iter()
            .find(|kind| kind.display_name().to_lowercase() == lower)
            .copied()
            .ok_or_else(|| DomainError::UnknownBlockName(s.to_string()))
    }
}

impl TryFrom<u16> for StoryBlockKind {
    type Error = DomainError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        StoryBlockKind::from_code(code)
    }
}

impl From<StoryBlockKind> for u16 {
    fn from(kind: StoryBlockKind) -> Self {
        kind.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const OUTPUT_KINDS: [StoryBlockKind; 6] = [
        StoryBlockKind::TextMessage,
        StoryBlockKind::Image,
        StoryBlockKind::Audio,
        StoryBlockKind::Video,
        StoryBlockKind::Sticker,
        StoryBlockKind::Document,
    ];

    const OPERATION_KINDS: [StoryBlockKind; 6] = [
        StoryBlockKind::JumpBlock,
        StoryBlockKind::EndStoryAnchorBlock,
        StoryBlockKind::FailBlock,
        StoryBlockKind::WebhookBlock,
        StoryBlockKind::Keyword,
        StoryBlockKind::Event,
    ];

    const MEDIA_KINDS: [StoryBlockKind; 5] = [
        StoryBlockKind::Image,
        StoryBlockKind::Audio,
        StoryBlockKind::Video,
        StoryBlockKind::Sticker,
        StoryBlockKind::Document,
    ];

    #[test]
    fn test_output_kinds_exact() {
        for kind in StoryBlockKind::all() {
            assert_eq!(
                kind.is_output(),
                OUTPUT_KINDS.contains(kind),
                "is_output mismatch for {kind}"
            );
        }
        assert!(StoryBlockKind::TextMessage.is_output());
        assert!(!StoryBlockKind::Input.is_output());
        // Output-then-input kinds stay false: "output" means output-only
        assert!(!StoryBlockKind::QuestionBlock.is_output());
        assert!(!StoryBlockKind::ListBlock.is_output());
    }

    #[test]
    fn test_operation_kinds_exact() {
        for kind in StoryBlockKind::all() {
            assert_eq!(
                kind.is_operation(),
                OPERATION_KINDS.contains(kind),
                "is_operation mismatch for {kind}"
            );
        }
        assert!(StoryBlockKind::WebhookBlock.is_operation());
        assert!(!StoryBlockKind::TextMessage.is_operation());
        assert!(!StoryBlockKind::Structural.is_operation());
    }

    #[test]
    fn test_media_kinds_exact() {
        for kind in StoryBlockKind::all() {
            assert_eq!(
                kind.is_media(),
                MEDIA_KINDS.contains(kind),
                "is_media mismatch for {kind}"
            );
        }
        assert!(StoryBlockKind::Document.is_media());
        assert!(!StoryBlockKind::QuestionBlock.is_media());
    }

    #[test]
    fn test_media_implies_output() {
        for kind in StoryBlockKind::all() {
            if kind.is_media() {
                assert!(kind.is_output(), "{kind} is media but not output");
            }
        }
    }

    #[test]
    fn test_codes_are_unique_and_round_trip() {
        let mut seen = HashSet::new();
        for kind in StoryBlockKind::all() {
            assert!(seen.insert(kind.code()), "duplicate code {}", kind.code());
            assert_eq!(StoryBlockKind::from_code(kind.code()), Ok(*kind));
        }
        assert_eq!(seen.len(), 32);
    }

    #[test]
    fn test_list_block_owns_the_legacy_code() {
        // ListBlock and List both carried 16 in old stories; 16 resolves to
        // ListBlock and List lives at 26.
        assert_eq!(
            StoryBlockKind::from_code(16),
            Ok(StoryBlockKind::ListBlock)
        );
        assert_eq!(StoryBlockKind::List.code(), 26);
    }

    #[test]
    fn test_unknown_code_is_an_error() {
        assert_eq!(
            StoryBlockKind::from_code(14),
            Err(DomainError::UnknownBlockCode { code: 14 })
        );
        assert!(StoryBlockKind::from_code(1000).is_err());
    }

    #[test]
    fn test_serde_round_trip_as_integer_code() {
        let json = serde_json::to_string(&StoryBlockKind::WebhookBlock).unwrap();
        assert_eq!(json, "25");

        let kind: StoryBlockKind = serde_json::from_str("9999").unwrap();
        assert_eq!(kind, StoryBlockKind::EndStoryAnchorBlock);

        assert!(serde_json::from_str::<StoryBlockKind>("14").is_err());
    }

    #[test]
    fn test_parse_from_name() {
        assert_eq!(
            "TextMessage".parse::<StoryBlockKind>().unwrap(),
            StoryBlockKind::TextMessage
        );
        assert_eq!(
            "webhookblock".parse::<StoryBlockKind>().unwrap(),
            StoryBlockKind::WebhookBlock
        );
        assert_eq!(
            "IO".parse::<StoryBlockKind>().unwrap(),
            StoryBlockKind::Io
        );
        assert!("unknown".parse::<StoryBlockKind>().is_err());
    }

    #[test]
    fn test_category_covers_every_kind() {
        // Spot checks per category; the match in category() is exhaustive,
        // so the compiler guards totality.
        assert_eq!(
            StoryBlockKind::AnchorBlock.category(),
            BlockCategory::Lifecycle
        );
        assert_eq!(StoryBlockKind::Sticker.category(), BlockCategory::Output);
        assert_eq!(StoryBlockKind::Email.category(), BlockCategory::Input);
        assert_eq!(
            StoryBlockKind::OpenEndedQuestion.category(),
            BlockCategory::OutputInput
        );
        assert_eq!(
            StoryBlockKind::Keyword.category(),
            BlockCategory::Structural
        );
        assert_eq!(StoryBlockKind::Location.category(), BlockCategory::Special);
    }

    #[test]
    fn test_operation_kinds_are_structural_or_lifecycle() {
        for kind in OPERATION_KINDS {
            assert!(
                matches!(
                    kind.category(),
                    BlockCategory::Structural | BlockCategory::Lifecycle
                ),
                "{kind} is an operation but categorized as {}",
                kind.category()
            );
        }
    }

    #[test]
    fn test_default_is_anchor() {
        assert_eq!(StoryBlockKind::default(), StoryBlockKind::AnchorBlock);
    }
}
