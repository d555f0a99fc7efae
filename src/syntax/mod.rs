//! Language detection and syntax-aware helpers
//!
//! - Language identification from file extensions and editor language ids
//! - Tree-sitter parsing to tell tag attribute values from ordinary strings
//!
//! ## Supported Grammars
//!
//! - HTML (also used for Vue and Svelte templates)
//! - JavaScript / JSX
//! - TSX

mod attribute;
mod languages;

pub use attribute::SyntaxAttributeContext;
pub use languages::LanguageId;
