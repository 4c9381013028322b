//! End-to-end run: input -> tokenize -> classify -> render

mod error;
pub mod output;
mod result;

pub use error::AnalyzerError;
pub use output::{render_json, render_text, AnalysisOutput, OutputError};
pub use result::AnalysisReport;

use crate::classifier::{self, ClassificationResult};
use crate::config::runtime::{ReportFormat, ReportPreferences};
use crate::input::{self, SourceInput, SourceOrigin};
use crate::lexical::{self, TokenCounts};
use crate::logging::codes;
use std::time::Instant;

/// Tokenize then classify a string
pub fn analyze(text: &str) -> ClassificationResult {
    classifier::classify(&lexical::tokenize_raw(text))
}

/// Analyze already-loaded source
pub fn process_input(source: SourceInput) -> AnalysisReport {
    let start_time = Instant::now();

    let tokens = lexical::tokenize_raw(&source.text);
    let token_counts = TokenCounts::from_tokens(&tokens);
    crate::log_debug!("Token shapes",
        "words" => token_counts.words,
        "variables" => token_counts.variables,
        "numbers" => token_counts.numbers,
        "operators" => token_counts.operators,
        "other" => token_counts.other,
        "tags_balanced" => token_counts.tags_balanced()
    );
    let result = classifier::classify(&tokens);
    let tokens = tokens.iter().map(ToString::to_string).collect();

    let report = AnalysisReport {
        source,
        result,
        tokens,
        token_counts,
        processing_duration: start_time.elapsed(),
    };
    report.log_success();
    report
}

/// Load from `origin` and analyze
pub fn process_source(origin: SourceOrigin) -> Result<AnalysisReport, AnalyzerError> {
    let source = input::read_source(origin)?;
    Ok(process_input(source))
}

/// Render a report per the given preferences
pub fn render(report: &AnalysisReport, preferences: &ReportPreferences) -> Result<String, AnalyzerError> {
    let mut output = AnalysisOutput::new(&report.result);
    if preferences.show_tokens {
        output = output.with_tokens(&report.tokens, report.token_counts);
    }

    let rendered = match preferences.format {
        ReportFormat::Text => render_text(&output),
        ReportFormat::Json => render_json(&output, preferences.pretty_json).map_err(|e| {
            crate::log_error!(e.error_code(), &e.to_string());
            e
        })?,
    };

    crate::log_success!(codes::success::REPORT_RENDERED, "Report rendered",
        "format" => preferences.format.as_str(),
        "bytes" => rendered.len()
    );

    Ok(rendered)
}
