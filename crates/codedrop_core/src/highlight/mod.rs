//! Syntax highlighting adapter.
//!
//! Turns `(text, language tag)` into a flat token stream. The adapter never
//! fails: unknown tags, tokenizer errors, and grammars that have not finished
//! loading all produce [`HighlightOutcome::Fallback`] carrying the input
//! verbatim.

mod category;
mod syntax;

pub use category::TokenCategory;

use crate::models::Language;
use std::sync::{Arc, OnceLock};
use std::thread::JoinHandle;
use syntect::easy::ScopeRegionIterator;
use syntect::parsing::{ParseState, ScopeStack, SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;
use tracing::{debug, info, warn};

/// A run of text sharing one display category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightToken {
    pub category: TokenCategory,
    pub text: String,
}

/// Result of a highlight request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HighlightOutcome {
    /// Styled tokens whose texts concatenate to the input.
    Highlighted(Vec<HighlightToken>),
    /// Unstyled input, returned unchanged.
    Fallback(String),
}

impl HighlightOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, HighlightOutcome::Fallback(_))
    }

    /// Reassemble the source text.
    pub fn text(&self) -> String {
        match self {
            HighlightOutcome::Highlighted(tokens) => {
                tokens.iter().map(|token| token.text.as_str()).collect()
            }
            HighlightOutcome::Fallback(raw) => raw.clone(),
        }
    }
}

/// Shared handle to the grammar set.
///
/// Clones share one lazily-populated [`SyntaxSet`]. Until it is populated the
/// engine is uninitialized and every request falls back.
#[derive(Clone, Default)]
pub struct HighlightEngine {
    syntaxes: Arc<OnceLock<SyntaxSet>>,
}

impl std::fmt::Debug for HighlightEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HighlightEngine")
            .field("ready", &self.is_ready())
            .finish()
    }
}

impl HighlightEngine {
    /// Engine with no grammars yet.
    pub fn uninitialized() -> Self {
        Self::default()
    }

    /// Engine with the bundled grammars loaded on the calling thread.
    pub fn loaded() -> Self {
        let engine = Self::default();
        engine.load();
        engine
    }

    pub fn is_ready(&self) -> bool {
        self.syntaxes.get().is_some()
    }

    /// Load the bundled grammars if nobody has yet.
    pub fn load(&self) {
        self.syntaxes.get_or_init(|| {
            let started = std::time::Instant::now();
            let set = SyntaxSet::load_defaults_newlines();
            info!(
                grammars = set.syntaxes().len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "syntax grammars loaded"
            );
            set
        });
    }

    /// Load grammars on a background thread.
    ///
    /// # Errors
    /// Returns an error if the OS refuses to spawn the thread.
    pub fn spawn_loader(&self) -> std::io::Result<JoinHandle<()>> {
        let engine = self.clone();
        std::thread::Builder::new()
            .name("codedrop-highlight-loader".to_string())
            .spawn(move || engine.load())
    }

    /// Highlight `text` as the language named by `tag`.
    pub fn highlight(&self, text: &str, tag: &str) -> HighlightOutcome {
        self.highlight_language(text, Language::from_tag(tag))
    }

    /// Highlight `text` as `language`.
    pub fn highlight_language(&self, text: &str, language: Language) -> HighlightOutcome {
        let Some(ps) = self.syntaxes.get() else {
            return HighlightOutcome::Fallback(text.to_string());
        };
        let Some(syntax) = syntax::resolve_syntax(ps, language) else {
            debug!(language = language.tag(), "no grammar; rendering plain");
            return HighlightOutcome::Fallback(text.to_string());
        };
        match tokenize(ps, syntax, text) {
            Ok(tokens) => HighlightOutcome::Highlighted(tokens),
            Err(err) => {
                warn!(language = language.tag(), "highlighting failed: {}", err);
                HighlightOutcome::Fallback(text.to_string())
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum TokenizeError {
    #[error("parse error: {0}")]
    Parse(#[from] syntect::parsing::ParsingError),
    #[error("scope error: {0:?}")]
    Scope(syntect::parsing::ScopeError),
}

fn push_token(tokens: &mut Vec<HighlightToken>, category: TokenCategory, text: &str) {
    if let Some(last) = tokens.last_mut() {
        if last.category == category {
            last.text.push_str(text);
            return;
        }
    }
    tokens.push(HighlightToken {
        category,
        text: text.to_string(),
    });
}

fn tokenize(
    ps: &SyntaxSet,
    syntax: &SyntaxReference,
    text: &str,
) -> Result<Vec<HighlightToken>, TokenizeError> {
    let mut parse_state = ParseState::new(syntax);
    let mut stack = ScopeStack::new();
    let mut tokens = Vec::new();

    for line in LinesWithEndings::from(text) {
        let ops = parse_state.parse_line(line, ps)?;
        for (region, op) in ScopeRegionIterator::new(&ops, line) {
            stack.apply(op).map_err(TokenizeError::Scope)?;
            if region.is_empty() {
                continue;
            }
            push_token(&mut tokens, category::category_for_stack(&stack), region);
        }
    }

    Ok(tokens)
}
