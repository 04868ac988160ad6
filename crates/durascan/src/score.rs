//! Threshold-based durability scoring.
//!
//! Each criterion contributes 1 to 3 points:
//!
//! | thickness (cm)  | weight (g)       | points |
//! |-----------------|------------------|--------|
//! | `< 2`           | `< 11`           | 1      |
//! | `2 ..= 3`       | `11 .. 81`       | 2      |
//! | `> 3`           | `>= 81`          | 3      |
//!
//! Weight thresholds are published as `<= 10`, `11 ..= 80` and `>= 81`.
//! Readings between those integers belong to the lower bucket, so every
//! finite reading scores.

use std::fmt;

/// Thickness below this scores 1 point.
pub const THICKNESS_MEDIUM_FROM: f64 = 2.0;
/// Thickness above this scores 3 points.
pub const THICKNESS_HIGH_ABOVE: f64 = 3.0;
/// Weight below this scores 1 point.
pub const WEIGHT_MEDIUM_FROM: f64 = 11.0;
/// Weight at or above this scores 3 points.
pub const WEIGHT_HIGH_FROM: f64 = 81.0;

/// Highest possible total.
pub const MAX_SCORE: u8 = 6;

/// Points awarded for one measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    pub thickness_points: u8,
    pub weight_points: u8,
    /// Always `thickness_points + weight_points`.
    pub total: u8,
}

impl ScoreResult {
    fn new(thickness_points: u8, weight_points: u8) -> Self {
        Self {
            thickness_points,
            weight_points,
            total: thickness_points + weight_points,
        }
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_total(self.total)
    }
}

/// Classification of a total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Max score.
    HighlyDurable,
    /// 3 to 5 points.
    Medium,
    /// 2 points.
    Low,
}

impl Verdict {
    pub fn from_total(total: u8) -> Self {
        if total >= MAX_SCORE {
            Verdict::HighlyDurable
        } else if total >= 3 {
            Verdict::Medium
        } else {
            Verdict::Low
        }
    }

    /// Low results unlock the problem finder.
    pub fn is_low(self) -> bool {
        self == Verdict::Low
    }

    pub fn label(self) -> &'static str {
        match self {
            Verdict::HighlyDurable => "highly durable",
            Verdict::Medium => "medium durability",
            Verdict::Low => "low durability",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn thickness_points(thickness: f64) -> u8 {
    if thickness < THICKNESS_MEDIUM_FROM {
        1
    } else if thickness <= THICKNESS_HIGH_ABOVE {
        2
    } else {
        3
    }
}

pub fn weight_points(weight: f64) -> u8 {
    if weight < WEIGHT_MEDIUM_FROM {
        1
    } else if weight < WEIGHT_HIGH_FROM {
        2
    } else {
        3
    }
}

/// Scores a thickness (cm) and weight (grams) pair.
pub fn score(thickness: f64, weight: f64) -> ScoreResult {
    ScoreResult::new(thickness_points(thickness), weight_points(weight))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(thickness_points: u8, weight_points: u8, total: u8) -> ScoreResult {
        ScoreResult {
            thickness_points,
            weight_points,
            total,
        }
    }

    #[test]
    fn test_thickness_boundaries() {
        assert_eq!(thickness_points(1.99), 1);
        assert_eq!(thickness_points(2.0), 2);
        assert_eq!(thickness_points(3.0), 2);
        assert_eq!(thickness_points(3.01), 3);
        assert_eq!(thickness_points(-1.0), 1);
    }

    #[test]
    fn test_weight_boundaries() {
        assert_eq!(weight_points(10.0), 1);
        assert_eq!(weight_points(11.0), 2);
        assert_eq!(weight_points(80.0), 2);
        assert_eq!(weight_points(81.0), 3);
    }

    #[test]
    fn test_weight_gaps_fall_into_lower_bucket() {
        assert_eq!(weight_points(10.5), 1);
        assert_eq!(weight_points(10.999), 1);
        assert_eq!(weight_points(80.5), 2);
    }

    #[test]
    fn test_max_score() {
        assert_eq!(score(3.5, 90.0), points(3, 3, 6));
        assert_eq!(score(3.5, 90.0).verdict(), Verdict::HighlyDurable);
    }

    #[test]
    fn test_min_score() {
        assert_eq!(score(1.0, 5.0), points(1, 1, 2));
        assert_eq!(score(1.0, 5.0).verdict(), Verdict::Low);
    }

    #[test]
    fn test_verdict_buckets() {
        assert_eq!(Verdict::from_total(2), Verdict::Low);
        for total in 3..=5 {
            assert_eq!(Verdict::from_total(total), Verdict::Medium);
        }
        assert_eq!(Verdict::from_total(6), Verdict::HighlyDurable);
        assert!(Verdict::Low.is_low());
        assert!(!Verdict::Medium.is_low());
    }

    #[test]
    fn test_verdict_labels() {
        assert_eq!(Verdict::HighlyDurable.to_string(), "highly durable");
        assert_eq!(Verdict::Medium.to_string(), "medium durability");
        assert_eq!(Verdict::Low.to_string(), "low durability");
    }
}
