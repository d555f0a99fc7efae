//! String literal toggling
//!
//! Everything needed to find the string under the cursor, turn it into the
//! one-word-per-line form and back, keep the cursor on the same word, and
//! remember which strings were split so they can be collapsed later.

mod attribute;
mod cursor_map;
mod locator;
mod registry;
mod rules;
mod span;
mod transform;

pub use attribute::{in_attribute_assignment, AttributeContext, HeuristicAttributeContext};
pub use cursor_map::{map_from_word, map_to_word, WordAnchor};
pub use locator::{locate, locate_in, MULTILINE_SCAN_LIMIT};
pub use registry::{EntryKey, Registry, TrackedEntry};
pub use rules::QuoteRuleSet;
pub use span::StringSpan;
pub use transform::{
    fingerprint, merge, resolve_split_quote, split, split_words, MergeOutput, SplitOutput,
    WORD_INDENT,
};
