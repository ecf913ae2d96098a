pub mod analyzer;
pub mod report;

pub use analyzer::{Analysis, Analyzer, EncodedAnalysis};
pub use report::{AccessibilityReport, ReportError, ReportLevel};
