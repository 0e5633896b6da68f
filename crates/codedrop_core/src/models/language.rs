//! Closed set of language tags understood by the editor and read view.

use std::fmt;

/// A language tag as sent to and received from the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    JavaScript,
    TypeScript,
    Python,
    Go,
    Rust,
    C,
    Cpp,
    CSharp,
    Java,
    Php,
    Ruby,
    Swift,
    Kotlin,
    Bash,
    Sql,
    Json,
    Yaml,
    Markdown,
    Markup,
    Css,
    /// Generic tag for absent or unrecognized languages.
    PlainText,
}

impl Language {
    /// Languages offered in the editor selector, in display order.
    pub const SELECTABLE: [Language; 20] = [
        Language::JavaScript,
        Language::TypeScript,
        Language::Python,
        Language::Go,
        Language::Rust,
        Language::C,
        Language::Cpp,
        Language::CSharp,
        Language::Java,
        Language::Php,
        Language::Ruby,
        Language::Swift,
        Language::Kotlin,
        Language::Bash,
        Language::Sql,
        Language::Json,
        Language::Yaml,
        Language::Markdown,
        Language::Markup,
        Language::Css,
    ];

    /// Wire tag for this language.
    pub fn tag(self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Python => "python",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::CSharp => "csharp",
            Language::Java => "java",
            Language::Php => "php",
            Language::Ruby => "ruby",
            Language::Swift => "swift",
            Language::Kotlin => "kotlin",
            Language::Bash => "bash",
            Language::Sql => "sql",
            Language::Json => "json",
            Language::Yaml => "yaml",
            Language::Markdown => "markdown",
            Language::Markup => "markup",
            Language::Css => "css",
            Language::PlainText => "plaintext",
        }
    }

    /// Human-readable name shown in selectors and headers.
    pub fn label(self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Python => "Python",
            Language::Go => "Go",
            Language::Rust => "Rust",
            Language::C => "C",
            Language::Cpp => "C++",
            Language::CSharp => "C#",
            Language::Java => "Java",
            Language::Php => "PHP",
            Language::Ruby => "Ruby",
            Language::Swift => "Swift",
            Language::Kotlin => "Kotlin",
            Language::Bash => "Bash",
            Language::Sql => "SQL",
            Language::Json => "JSON",
            Language::Yaml => "YAML",
            Language::Markdown => "Markdown",
            Language::Markup => "HTML",
            Language::Css => "CSS",
            Language::PlainText => "Plain Text",
        }
    }

    /// Map a wire tag (case-insensitive, trimmed) onto the known set.
    ///
    /// A few common aliases are accepted. Anything else is
    /// [`Language::PlainText`].
    pub fn from_tag(raw: &str) -> Language {
        let normalized = raw.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "javascript" | "js" => Language::JavaScript,
            "typescript" | "ts" => Language::TypeScript,
            "python" | "py" => Language::Python,
            "go" | "golang" => Language::Go,
            "rust" | "rs" => Language::Rust,
            "c" => Language::C,
            "cpp" | "c++" => Language::Cpp,
            "csharp" | "cs" | "c#" => Language::CSharp,
            "java" => Language::Java,
            "php" => Language::Php,
            "ruby" | "rb" => Language::Ruby,
            "swift" => Language::Swift,
            "kotlin" | "kt" => Language::Kotlin,
            "bash" | "sh" | "shell" => Language::Bash,
            "sql" => Language::Sql,
            "json" => Language::Json,
            "yaml" | "yml" => Language::Yaml,
            "markdown" | "md" => Language::Markdown,
            "markup" | "html" | "xml" => Language::Markup,
            "css" => Language::Css,
            _ => Language::PlainText,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::Language;

    #[test]
    fn every_selectable_tag_round_trips() {
        for language in Language::SELECTABLE {
            assert_eq!(Language::from_tag(language.tag()), language);
        }
    }

    #[test]
    fn from_tag_normalizes_case_and_aliases() {
        assert_eq!(Language::from_tag("  Rust "), Language::Rust);
        assert_eq!(Language::from_tag("HTML"), Language::Markup);
        assert_eq!(Language::from_tag("c++"), Language::Cpp);
    }

    #[test]
    fn unknown_tags_map_to_plaintext() {
        assert_eq!(Language::from_tag("brainfuck"), Language::PlainText);
        assert_eq!(Language::from_tag(""), Language::PlainText);
        assert!(!Language::SELECTABLE.contains(&Language::PlainText));
    }

    #[test]
    fn default_selection_is_javascript() {
        assert_eq!(Language::default(), Language::JavaScript);
    }
}
