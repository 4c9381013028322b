use crate::classifier::ClassificationResult;
use crate::input::SourceInput;
use crate::lexical::TokenCounts;
use std::time::Duration;

/// Everything one run produces for a single source
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub source: SourceInput,
    pub result: ClassificationResult,
    pub tokens: Vec<String>,
    pub token_counts: TokenCounts,
    pub processing_duration: Duration,
}

impl AnalysisReport {
    pub fn log_success(&self) {
        crate::log_info!("Analysis finished",
            "origin" => self.source.origin,
            "tokens" => self.result.total_tokens,
            "diagnostics" => self.result.errors.len(),
            "duration_ms" => format!("{:.2}", self.processing_duration.as_secs_f64() * 1000.0)
        );
    }
}
