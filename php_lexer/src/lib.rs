// Internal modules
pub mod classifier;
pub mod config;
pub mod grammar;
pub mod input;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod pipeline;

// Re-export key types for library consumers
pub use classifier::{classify, ClassificationResult, Diagnostic};
pub use lexical::{tokenize_raw, Token};
pub use pipeline::{analyze, AnalyzerError};
