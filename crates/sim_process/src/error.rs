//! Process evaluation error types.

use sim_core::market_data::MarketDataError;
use thiserror::Error;

/// Errors from process evaluation.
///
/// Computational methods never catch or retry: a failing collaborator
/// (curve lookup, quote read, day-count mapping) propagates unchanged to
/// the simulation engine, which decides whether to abort the batch or skip
/// a path.
///
/// # Examples
///
/// ```
/// use sim_core::market_data::MarketDataError;
/// use sim_process::ProcessError;
///
/// let err = ProcessError::from(MarketDataError::UnlinkedHandle);
/// assert!(format!("{}", err).contains("not linked"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProcessError {
    /// A market data collaborator failed (unlinked handle, unset quote,
    /// invalid maturity, date before reference).
    #[error("Market data error: {0}")]
    MarketData(#[from] MarketDataError),

    /// The process has no term structure and cannot map calendar dates to
    /// model time.
    #[error("Date to model time conversion is not supported by this process")]
    TimeNotSupported,
}
