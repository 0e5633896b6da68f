//! Grammar resolution from language tags to syntect syntax definitions.

use crate::models::Language;
use syntect::parsing::{SyntaxReference, SyntaxSet};

fn normalized_syntax_key(value: &str) -> String {
    value
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

fn find_candidate<'a>(ps: &'a SyntaxSet, candidate: &str) -> Option<&'a SyntaxReference> {
    if let Some(syntax) = ps
        .find_syntax_by_name(candidate)
        .or_else(|| ps.find_syntax_by_extension(candidate))
    {
        return Some(syntax);
    }

    let normalized = normalized_syntax_key(candidate);
    ps.syntaxes().iter().find(|syntax| {
        normalized_syntax_key(&syntax.name) == normalized
            || syntax
                .file_extensions
                .iter()
                .any(|ext| ext.eq_ignore_ascii_case(candidate))
    })
}

/// Grammar names/extensions to try for `language`, best match first.
///
/// The bundled syntect set has no TypeScript, Kotlin, or Swift grammar, so
/// those borrow a close relative.
pub(crate) fn candidates(language: Language) -> &'static [&'static str] {
    match language {
        Language::JavaScript => &["JavaScript", "js"],
        Language::TypeScript => &["TypeScript", "ts", "JavaScript", "js"],
        Language::Python => &["Python", "py"],
        Language::Go => &["Go", "go"],
        Language::Rust => &["Rust", "rs"],
        Language::C => &["C", "c"],
        Language::Cpp => &["C++", "cpp", "cc"],
        Language::CSharp => &["C#", "cs"],
        Language::Java => &["Java", "java"],
        Language::Php => &["PHP", "php"],
        Language::Ruby => &["Ruby", "rb"],
        Language::Swift => &["Swift", "swift", "Rust", "rs", "Go", "go"],
        Language::Kotlin => &["Kotlin", "kt", "Java", "java"],
        Language::Bash => &["Bourne Again Shell (bash)", "bash", "sh"],
        Language::Sql => &["SQL", "sql"],
        Language::Json => &["JSON", "json"],
        Language::Yaml => &["YAML", "yaml"],
        Language::Markdown => &["Markdown", "md"],
        Language::Markup => &["HTML", "html"],
        Language::Css => &["CSS", "css"],
        Language::PlainText => &[],
    }
}

/// Resolve the grammar for `language`.
///
/// # Returns
/// `None` for plain text and for languages with no usable grammar.
pub(crate) fn resolve_syntax(ps: &SyntaxSet, language: Language) -> Option<&SyntaxReference> {
    candidates(language)
        .iter()
        .find_map(|candidate| find_candidate(ps, candidate))
}
