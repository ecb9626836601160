//! Revenue string parsing.
//!
//! Source revenue is human-readable currency text such as `"$1.2 Billion"` or
//! `"500 Thousand"`. Only the three magnitude suffixes below are recognized;
//! text without one of them (including bare numbers) has no defined revenue.

use thiserror::Error;

/// A textual unit multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Magnitude {
    Billion,
    Million,
    Thousand,
}

impl Magnitude {
    /// Suffixes in match order. The first one found anywhere in the text wins.
    pub const ALL: [Magnitude; 3] = [Self::Billion, Self::Million, Self::Thousand];

    pub fn suffix(self) -> &'static str {
        match self {
            Self::Billion => "Billion",
            Self::Million => "Million",
            Self::Thousand => "Thousand",
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            Self::Billion => 1e9,
            Self::Million => 1e6,
            Self::Thousand => 1e3,
        }
    }

    /// Find the first recognized suffix in `text`.
    pub fn detect(text: &str) -> Option<(Self, usize)> {
        Self::ALL
            .into_iter()
            .find_map(|magnitude| text.find(magnitude.suffix()).map(|pos| (magnitude, pos)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RevenueParseError {
    #[error("revenue {input:?}: {number:?} is not a number")]
    InvalidNumber { input: String, number: String },
    #[error("revenue {input:?} is negative")]
    Negative { input: String },
    #[error("revenue {input:?} is not finite")]
    NonFinite { input: String },
}

/// Parse a revenue cell into base currency units.
///
/// Returns `Ok(None)` when the cell is absent or carries no magnitude suffix,
/// and an error when a suffix is present but the number in front of it is not
/// a finite, non-negative float.
///
/// # Examples
///
/// ```
/// use inc_normalization::parse_revenue;
///
/// assert_eq!(parse_revenue(Some("$1.2 Billion")), Ok(Some(1.2e9)));
/// assert_eq!(parse_revenue(Some("500 Thousand")), Ok(Some(5e5)));
/// assert_eq!(parse_revenue(Some("N/A")), Ok(None));
/// assert_eq!(parse_revenue(None), Ok(None));
/// assert!(parse_revenue(Some("$abc Million")).is_err());
/// ```
pub fn parse_revenue(value: Option<&str>) -> Result<Option<f64>, RevenueParseError> {
    let Some(input) = value else {
        return Ok(None);
    };
    let trimmed = input.trim();
    let text = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();
    let Some((magnitude, pos)) = Magnitude::detect(text) else {
        return Ok(None);
    };
    let head = &text[..pos];
    let head = head.strip_suffix(' ').unwrap_or(head);
    let tail = &text[pos + magnitude.suffix().len()..];
    let number = format!("{head}{tail}");
    let number = number.trim();
    let amount = number
        .parse::<f64>()
        .map_err(|_| RevenueParseError::InvalidNumber {
            input: input.to_string(),
            number: number.to_string(),
        })?;
    if amount.is_sign_negative() && amount != 0.0 {
        return Err(RevenueParseError::Negative {
            input: input.to_string(),
        });
    }
    // -0.0 reads as 0.0 from here on
    let value = amount.abs() * magnitude.multiplier();
    if !value.is_finite() {
        return Err(RevenueParseError::NonFinite {
            input: input.to_string(),
        });
    }
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_after_scaling_is_non_finite() {
        assert!(matches!(
            parse_revenue(Some("$1e300 Billion")),
            Err(RevenueParseError::NonFinite { .. })
        ));
        assert_eq!(parse_revenue(Some("1e3 Thousand")), Ok(Some(1e6)));
    }

    #[test]
    fn suffix_match_is_case_sensitive() {
        assert_eq!(parse_revenue(Some("$3 million")), Ok(None));
        assert_eq!(parse_revenue(Some("$3 BILLION")), Ok(None));
    }

    #[test]
    fn billion_is_checked_before_million() {
        assert_eq!(Magnitude::detect("1 Million Billion"), Some((Magnitude::Billion, 10)));
    }

    #[test]
    fn suffix_without_space_still_parses() {
        assert_eq!(parse_revenue(Some("$7Million")), Ok(Some(7e6)));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(parse_revenue(Some("  $ 2.5 Million  ")), Ok(Some(2.5e6)));
    }

    #[test]
    fn empty_text_is_undefined() {
        assert_eq!(parse_revenue(Some("")), Ok(None));
        assert_eq!(parse_revenue(Some("$")), Ok(None));
    }

    #[test]
    fn rejects_negative_and_non_finite_amounts() {
        assert!(matches!(
            parse_revenue(Some("$-5 Million")),
            Err(RevenueParseError::Negative { .. })
        ));
        assert!(matches!(
            parse_revenue(Some("inf Million")),
            Err(RevenueParseError::NonFinite { .. })
        ));
        assert!(matches!(
            parse_revenue(Some("NaN Thousand")),
            Err(RevenueParseError::NonFinite { .. })
        ));
    }

    #[test]
    fn missing_number_is_an_error() {
        assert_eq!(
            parse_revenue(Some("Million")),
            Err(RevenueParseError::InvalidNumber {
                input: "Million".to_string(),
                number: String::new(),
            })
        );
    }
}
