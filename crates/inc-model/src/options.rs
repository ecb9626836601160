//! Configuration options for record normalization.

use serde::{Deserialize, Serialize};

/// How revenue strings that carry a magnitude suffix but fail to parse are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RevenuePolicy {
    /// Treat the field as undefined, log a warning and keep going.
    #[default]
    Lenient,
    /// Abort normalization on the first unparseable revenue.
    Strict,
}

/// Options controlling the field normalizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizationOptions {
    pub revenue_policy: RevenuePolicy,

    /// Log a warning for every recovered field error.
    ///
    /// When false, recovered errors are only counted in the summary.
    pub warn_on_recovery: bool,
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        Self {
            revenue_policy: RevenuePolicy::Lenient,
            warn_on_recovery: true,
        }
    }
}

impl NormalizationOptions {
    /// Options under which a revenue parse failure aborts normalization.
    pub fn strict() -> Self {
        Self {
            revenue_policy: RevenuePolicy::Strict,
            ..Self::default()
        }
    }
}
