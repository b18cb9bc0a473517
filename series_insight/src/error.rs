use thiserror::Error;

/// Analytics-stage failures.
///
/// These surface to the presentation layer as explanatory messages. A
/// too-short series or a degenerate fit is an answer, not a crash, and never
/// yields a partial result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InsightError {
    /// The series is shorter than the decomposition precondition allows.
    #[error("Not enough data for decomposition. Required: {required}, Available: {available}")]
    InsufficientData {
        /// Minimum number of observations for the requested periodicity.
        required: usize,
        /// Observations actually available.
        available: usize,
    },

    /// The forecast model could not be fitted with the given orders.
    #[error("Model fit failed: {0}")]
    ModelFit(String),

    /// The store holds no summary records yet.
    #[error("No summary data available")]
    EmptySeries,
}
