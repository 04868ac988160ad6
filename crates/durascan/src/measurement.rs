//! Bottle measurements and reading parsers.

use std::fmt;

use crate::diagnostic::DurascanError;
use crate::score::{self, ScoreResult};

/// A measured property of the bottle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    /// Shell thickness in centimetres.
    Thickness,
    /// Bottle weight in grams.
    Weight,
}

impl Criterion {
    pub fn unit(self) -> &'static str {
        match self {
            Criterion::Thickness => "cm",
            Criterion::Weight => "grams",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::Thickness => f.write_str("thickness"),
            Criterion::Weight => f.write_str("weight"),
        }
    }
}

/// The two readings collected for one assessment run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Shell thickness in centimetres.
    pub thickness: f64,
    /// Bottle weight in grams.
    pub weight: f64,
}

impl Measurement {
    pub fn new(thickness: f64, weight: f64) -> Self {
        Self { thickness, weight }
    }

    /// Scores this measurement.
    pub fn score(&self) -> ScoreResult {
        score::score(self.thickness, self.weight)
    }

    pub fn reading(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Thickness => self.thickness,
            Criterion::Weight => self.weight,
        }
    }
}

/// Parses one line of user input as a reading.
///
/// Surrounding whitespace is ignored. Anything that is not a finite decimal
/// number is rejected; there is no range check.
pub fn parse_reading(criterion: Criterion, raw: &str) -> Result<f64, DurascanError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(DurascanError::InvalidNumber {
            criterion,
            input: trimmed.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_padded() {
        assert_eq!(parse_reading(Criterion::Thickness, "2.5").unwrap(), 2.5);
        assert_eq!(parse_reading(Criterion::Weight, "  90\n").unwrap(), 90.0);
        assert_eq!(parse_reading(Criterion::Weight, "-4").unwrap(), -4.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_reading(Criterion::Thickness, "thick\n").unwrap_err();
        match err {
            DurascanError::InvalidNumber { criterion, input } => {
                assert_eq!(criterion, Criterion::Thickness);
                assert_eq!(input, "thick");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(parse_reading(Criterion::Weight, "NaN").is_err());
        assert!(parse_reading(Criterion::Weight, "inf").is_err());
        assert!(parse_reading(Criterion::Weight, "").is_err());
    }

    #[test]
    fn test_error_message_names_criterion() {
        let err = parse_reading(Criterion::Weight, "heavy").unwrap_err();
        assert_eq!(err.to_string(), "Invalid weight reading: 'heavy' is not a number");
    }

    #[test]
    fn test_reading_by_criterion() {
        let m = Measurement::new(1.5, 42.0);
        assert_eq!(m.reading(Criterion::Thickness), 1.5);
        assert_eq!(m.reading(Criterion::Weight), 42.0);
        assert_eq!(Criterion::Weight.unit(), "grams");
    }
}
