use thiserror::Error;

use crate::revenue::RevenueParseError;

#[derive(Debug, Error)]
pub enum NormalizeError {
    /// A revenue string failed to parse under the strict policy.
    #[error("row {row}: {source}")]
    Revenue {
        row: usize,
        #[source]
        source: RevenueParseError,
    },
}
