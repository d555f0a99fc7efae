//! Language identification and detection
//!
//! Maps file extensions and host language identifiers to language IDs.

use std::path::Path;

/// Supported language identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageId {
    #[default]
    PlainText,
    // Template-literal languages
    JavaScript,
    Jsx,
    TypeScript,
    Tsx,
    Vue,
    Svelte,
    // Triple-quote languages
    Python,
    Java,
    Kotlin,
    Swift,
    CSharp,
    Dart,
    // Raw-string languages
    Go,
    // Languages whose ordinary strings may span lines
    Rust,
    Ruby,
    Php,
    Bash,
    Yaml,
    Markdown,
    Html,
    Xml,
    Css,
    // No multi-line literal form
    C,
    Cpp,
    Json,
    Toml,
}

impl LanguageId {
    /// Detect language from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "js" | "mjs" | "cjs" => LanguageId::JavaScript,
            "jsx" => LanguageId::Jsx,
            "ts" | "mts" | "cts" => LanguageId::TypeScript,
            "tsx" => LanguageId::Tsx,
            "vue" => LanguageId::Vue,
            "svelte" => LanguageId::Svelte,
            "py" | "pyi" => LanguageId::Python,
            "java" => LanguageId::Java,
            "kt" | "kts" => LanguageId::Kotlin,
            "swift" => LanguageId::Swift,
            "cs" => LanguageId::CSharp,
            "dart" => LanguageId::Dart,
            "go" => LanguageId::Go,
            "rs" => LanguageId::Rust,
            "rb" => LanguageId::Ruby,
            "php" => LanguageId::Php,
            "sh" | "bash" | "zsh" => LanguageId::Bash,
            "yaml" | "yml" => LanguageId::Yaml,
            "md" | "markdown" => LanguageId::Markdown,
            "html" | "htm" => LanguageId::Html,
            "xml" | "svg" => LanguageId::Xml,
            "css" | "scss" | "less" => LanguageId::Css,
            "c" | "h" => LanguageId::C,
            "cpp" | "cc" | "cxx" | "hpp" | "hxx" | "hh" => LanguageId::Cpp,
            "json" | "jsonc" => LanguageId::Json,
            "toml" => LanguageId::Toml,
            _ => LanguageId::PlainText,
        }
    }

    /// Detect language from file path
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(LanguageId::PlainText)
    }

    /// Map an editor language identifier (e.g. `"typescriptreact"`)
    pub fn from_language_id(id: &str) -> Self {
        match id.to_lowercase().as_str() {
            "javascript" => LanguageId::JavaScript,
            "javascriptreact" | "jsx" => LanguageId::Jsx,
            "typescript" => LanguageId::TypeScript,
            "typescriptreact" | "tsx" => LanguageId::Tsx,
            "vue" => LanguageId::Vue,
            "svelte" => LanguageId::Svelte,
            "python" => LanguageId::Python,
            "java" => LanguageId::Java,
            "kotlin" => LanguageId::Kotlin,
            "swift" => LanguageId::Swift,
            "csharp" => LanguageId::CSharp,
            "dart" => LanguageId::Dart,
            "go" => LanguageId::Go,
            "rust" => LanguageId::Rust,
            "ruby" => LanguageId::Ruby,
            "php" => LanguageId::Php,
            "shellscript" | "bash" | "sh" => LanguageId::Bash,
            "yaml" => LanguageId::Yaml,
            "markdown" => LanguageId::Markdown,
            "html" => LanguageId::Html,
            "xml" => LanguageId::Xml,
            "css" | "scss" | "less" => LanguageId::Css,
            "c" => LanguageId::C,
            "cpp" => LanguageId::Cpp,
            "json" | "jsonc" => LanguageId::Json,
            "toml" => LanguageId::Toml,
            _ => LanguageId::PlainText,
        }
    }

    /// Get display name for the language
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageId::PlainText => "Plain Text",
            LanguageId::JavaScript => "JavaScript",
            LanguageId::Jsx => "JavaScript React",
            LanguageId::TypeScript => "TypeScript",
            LanguageId::Tsx => "TypeScript React",
            LanguageId::Vue => "Vue",
            LanguageId::Svelte => "Svelte",
            LanguageId::Python => "Python",
            LanguageId::Java => "Java",
            LanguageId::Kotlin => "Kotlin",
            LanguageId::Swift => "Swift",
            LanguageId::CSharp => "C#",
            LanguageId::Dart => "Dart",
            LanguageId::Go => "Go",
            LanguageId::Rust => "Rust",
            LanguageId::Ruby => "Ruby",
            LanguageId::Php => "PHP",
            LanguageId::Bash => "Bash",
            LanguageId::Yaml => "YAML",
            LanguageId::Markdown => "Markdown",
            LanguageId::Html => "HTML",
            LanguageId::Xml => "XML",
            LanguageId::Css => "CSS",
            LanguageId::C => "C",
            LanguageId::Cpp => "C++",
            LanguageId::Json => "JSON",
            LanguageId::Toml => "TOML",
        }
    }

    /// Languages that embed markup tags in ordinary source
    pub fn has_markup(&self) -> bool {
        matches!(
            self,
            LanguageId::Jsx
                | LanguageId::Tsx
                | LanguageId::JavaScript
                | LanguageId::Vue
                | LanguageId::Svelte
                | LanguageId::Html
                | LanguageId::Xml
                | LanguageId::Php
        )
    }
}

impl std::fmt::Display for LanguageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(LanguageId::from_extension("js"), LanguageId::JavaScript);
        assert_eq!(LanguageId::from_extension("TSX"), LanguageId::Tsx);
        assert_eq!(LanguageId::from_extension("py"), LanguageId::Python);
        assert_eq!(LanguageId::from_extension("rs"), LanguageId::Rust);
        assert_eq!(LanguageId::from_extension("txt"), LanguageId::PlainText);
        assert_eq!(LanguageId::from_extension("unknown"), LanguageId::PlainText);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            LanguageId::from_path(Path::new("src/App.tsx")),
            LanguageId::Tsx
        );
        assert_eq!(
            LanguageId::from_path(Path::new("/path/to/main.go")),
            LanguageId::Go
        );
        assert_eq!(
            LanguageId::from_path(Path::new("no_extension")),
            LanguageId::PlainText
        );
    }

    #[test]
    fn test_from_language_id() {
        assert_eq!(
            LanguageId::from_language_id("typescriptreact"),
            LanguageId::Tsx
        );
        assert_eq!(LanguageId::from_language_id("csharp"), LanguageId::CSharp);
        assert_eq!(
            LanguageId::from_language_id("brainfuck"),
            LanguageId::PlainText
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(LanguageId::Cpp.to_string(), "C++");
        assert_eq!(LanguageId::PlainText.to_string(), "Plain Text");
    }
}
