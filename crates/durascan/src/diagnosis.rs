//! Problem finder for low-durability results.
//!
//! Only the 1-point bucket of a criterion counts as a problem.

use crate::measurement::{Criterion, Measurement};
use crate::score;

/// Outcome of inspecting one criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding {
    pub criterion: Criterion,
    pub problem: bool,
}

impl Finding {
    /// Headline printed after the criterion's analysis animation.
    pub fn headline(&self) -> &'static str {
        match (self.criterion, self.problem) {
            (Criterion::Thickness, true) => "Problem Found At Thickness --",
            (Criterion::Thickness, false) => "Thickness OK -- No Problem Found At Thickness",
            (Criterion::Weight, true) => "Problem Found At Weight --",
            (Criterion::Weight, false) => "Weight OK -- No Problem Found At Weight",
        }
    }

    /// Remedy for a problem, `None` when the criterion is fine.
    pub fn advice(&self) -> Option<&'static str> {
        match (self.criterion, self.problem) {
            (Criterion::Thickness, true) => Some("Low thickness - Increase Thickness --"),
            (Criterion::Weight, true) => Some("Low weight - Increase Weight --"),
            _ => None,
        }
    }

    /// One line of the final report.
    pub fn summary_line(&self) -> &'static str {
        match (self.criterion, self.problem) {
            (Criterion::Thickness, true) => "LOW THICKNESS - Increase thickness",
            (Criterion::Thickness, false) => "THICKNESS OK",
            (Criterion::Weight, true) => "LOW WEIGHT - Increase weight",
            (Criterion::Weight, false) => "WEIGHT OK",
        }
    }
}

pub fn inspect_thickness(measurement: &Measurement) -> Finding {
    Finding {
        criterion: Criterion::Thickness,
        problem: score::thickness_points(measurement.thickness) == 1,
    }
}

pub fn inspect_weight(measurement: &Measurement) -> Finding {
    Finding {
        criterion: Criterion::Weight,
        problem: score::weight_points(measurement.weight) == 1,
    }
}

/// Inspects every criterion, thickness first.
pub fn inspect(measurement: &Measurement) -> [Finding; 2] {
    [inspect_thickness(measurement), inspect_weight(measurement)]
}
