//! Utility modules

pub mod text;

pub use text::{
    delimiter_at, is_escaped, leading_whitespace, normalize_whitespace, token_at, word_ranges,
};
