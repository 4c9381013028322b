//! Report rendering: plain text summary or JSON

use crate::classifier::ClassificationResult;
use crate::lexical::TokenCounts;
use crate::logging::{codes, Code};
use indexmap::IndexSet;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OutputError {
    #[error("Failed to serialize result: {message}")]
    Serialization { message: String },
}

impl OutputError {
    pub fn error_code(&self) -> Code {
        match self {
            OutputError::Serialization { .. } => codes::output::SERIALIZATION_FAILED,
        }
    }
}

impl From<serde_json::Error> for OutputError {
    fn from(e: serde_json::Error) -> Self {
        OutputError::Serialization {
            message: e.to_string(),
        }
    }
}

/// What gets rendered: the result plus an optional raw token listing
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutput<'a> {
    #[serde(flatten)]
    pub result: &'a ClassificationResult,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<&'a [String]>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_counts: Option<TokenCounts>,
}

impl<'a> AnalysisOutput<'a> {
    pub fn new(result: &'a ClassificationResult) -> Self {
        Self {
            result,
            tokens: None,
            token_counts: None,
        }
    }

    pub fn with_tokens(mut self, tokens: &'a [String], counts: TokenCounts) -> Self {
        self.tokens = Some(tokens);
        self.token_counts = Some(counts);
        self
    }
}

pub fn render_json(output: &AnalysisOutput<'_>, pretty: bool) -> Result<String, OutputError> {
    let json = if pretty {
        serde_json::to_string_pretty(output)?
    } else {
        serde_json::to_string(output)?
    };
    Ok(json)
}

/// Human-readable report, one category per line
pub fn render_text(output: &AnalysisOutput<'_>) -> String {
    output.to_string()
}

impl fmt::Display for AnalysisOutput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tokens) = self.tokens {
            writeln!(f, "Tokens: {}", tokens.join(" "))?;
            if let Some(counts) = &self.token_counts {
                writeln!(
                    f,
                    "Token shapes: open-tag={}, close-tag={}, variable={}, number={}, operator={}, word={}, other={}",
                    counts.open_tags,
                    counts.close_tags,
                    counts.variables,
                    counts.numbers,
                    counts.operators,
                    counts.words,
                    counts.other
                )?;
            }
            writeln!(f)?;
        }

        let result = self.result;
        writeln!(f, "Reserved words: {}", join_or_none(&result.reserved_words))?;
        writeln!(f, "Identifiers: {}", join_or_none(&result.identifiers))?;
        writeln!(f, "Symbols: {}", join_or_none(&result.symbols))?;
        writeln!(f, "Numbers: {}", join_or_none(&result.numbers))?;
        writeln!(f, "Total tokens: {}", result.total_tokens)?;

        if result.has_errors() {
            writeln!(f, "Errors found:")?;
            for diagnostic in &result.errors {
                writeln!(f, "  - {}", diagnostic)?;
            }
        }

        Ok(())
    }
}

fn join_or_none(items: &IndexSet<String>) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
    }
}
