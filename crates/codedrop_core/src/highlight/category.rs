//! Mapping from TextMate scopes to display categories.

use syntect::parsing::ScopeStack;

/// Display category of a highlighted token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Plain,
    Comment,
    Keyword,
    String,
    Number,
    Constant,
    Function,
    Type,
    Tag,
    Attribute,
    Operator,
    Punctuation,
    Variable,
    Parameter,
    Regex,
}

// Checked in order; the first matching prefix wins for a given scope.
const SCOPE_RULES: &[(&str, TokenCategory)] = &[
    ("comment", TokenCategory::Comment),
    ("string.regexp", TokenCategory::Regex),
    ("string", TokenCategory::String),
    ("markup.raw", TokenCategory::String),
    ("markup.underline.link", TokenCategory::String),
    ("constant.numeric", TokenCategory::Number),
    ("constant", TokenCategory::Constant),
    ("keyword.operator", TokenCategory::Operator),
    ("keyword", TokenCategory::Keyword),
    ("markup.heading", TokenCategory::Keyword),
    ("storage.type", TokenCategory::Keyword),
    ("storage", TokenCategory::Keyword),
    ("entity.name.function", TokenCategory::Function),
    ("support.function", TokenCategory::Function),
    ("variable.function", TokenCategory::Function),
    ("entity.name.tag", TokenCategory::Tag),
    ("entity.other.attribute-name", TokenCategory::Attribute),
    ("entity.name.type", TokenCategory::Type),
    ("entity.name.class", TokenCategory::Type),
    ("entity.name.struct", TokenCategory::Type),
    ("entity.name.enum", TokenCategory::Type),
    ("entity.other.inherited-class", TokenCategory::Type),
    ("support.type", TokenCategory::Type),
    ("support.class", TokenCategory::Type),
    ("variable.parameter", TokenCategory::Parameter),
    ("variable", TokenCategory::Variable),
    ("punctuation", TokenCategory::Punctuation),
];

fn scope_matches(scope: &str, prefix: &str) -> bool {
    scope == prefix
        || scope
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('.'))
}

/// Category for a single scope name, if any rule applies.
pub(crate) fn category_for_scope(scope: &str) -> Option<TokenCategory> {
    SCOPE_RULES
        .iter()
        .find(|(prefix, _)| scope_matches(scope, prefix))
        .map(|(_, category)| *category)
}

// These win over any nested scope, so delimiters inside comments and strings
// keep the enclosing color.
const ENCLOSING_RULES: &[(&str, TokenCategory)] = &[
    ("comment", TokenCategory::Comment),
    ("string.regexp", TokenCategory::Regex),
    ("string", TokenCategory::String),
];

/// Category for `stack`: an enclosing comment or string first, otherwise the
/// innermost scope that maps to a category.
pub(crate) fn category_for_stack(stack: &ScopeStack) -> TokenCategory {
    let scopes: Vec<String> = stack
        .as_slice()
        .iter()
        .map(|scope| scope.build_string())
        .collect();
    for (prefix, category) in ENCLOSING_RULES {
        if scopes.iter().any(|scope| scope_matches(scope, prefix)) {
            return *category;
        }
    }
    scopes
        .iter()
        .rev()
        .find_map(|scope| category_for_scope(scope))
        .unwrap_or(TokenCategory::Plain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn more_specific_prefixes_win() {
        assert_eq!(
            category_for_scope("string.regexp.js"),
            Some(TokenCategory::Regex)
        );
        assert_eq!(
            category_for_scope("string.quoted.double.rust"),
            Some(TokenCategory::String)
        );
        assert_eq!(
            category_for_scope("constant.numeric.integer.decimal"),
            Some(TokenCategory::Number)
        );
        assert_eq!(
            category_for_scope("keyword.operator.arithmetic"),
            Some(TokenCategory::Operator)
        );
        assert_eq!(
            category_for_scope("variable.parameter.function"),
            Some(TokenCategory::Parameter)
        );
    }

    #[test]
    fn prefix_must_end_at_segment_boundary() {
        assert_eq!(category_for_scope("stringly.typed"), None);
        assert_eq!(category_for_scope("source.rust"), None);
        assert_eq!(category_for_scope("comment"), Some(TokenCategory::Comment));
    }

    #[test]
    fn innermost_scope_decides() {
        let stack: ScopeStack = "source.js meta.function string.quoted.double"
            .parse()
            .expect("scope stack");
        assert_eq!(category_for_stack(&stack), TokenCategory::String);

        let delimiter: ScopeStack = "source.rust comment.line.double-slash punctuation.definition.comment"
            .parse()
            .expect("scope stack");
        assert_eq!(category_for_stack(&delimiter), TokenCategory::Comment);

        let plain: ScopeStack = "source.js meta.block".parse().expect("scope stack");
        assert_eq!(category_for_stack(&plain), TokenCategory::Plain);
    }
}
