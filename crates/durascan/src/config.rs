//! Assessment timing configuration.

use std::ops::RangeInclusive;
use std::time::Duration;

/// One timed progress animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    /// Label drawn next to the bar while the phase runs.
    pub label: &'static str,
    /// First step drawn. The startup sequence begins at 0, task bars at 1.
    pub first_step: u64,
    /// Last step drawn, also the bar total.
    pub steps: u64,
    /// Pause after each frame.
    pub frame: Duration,
    /// Label for a closing frame redrawn at 100%, if any.
    pub finish_label: Option<&'static str>,
}

impl Phase {
    /// Steps drawn by this phase, in order.
    pub fn frames(&self) -> RangeInclusive<u64> {
        self.first_step..=self.steps
    }

    /// Wall-clock duration of the animation.
    pub fn duration(&self) -> Duration {
        let count = self.frames().count() as u32;
        self.frame * count
    }
}

/// Timing of every animation in an assessment run.
#[derive(Debug, Clone)]
pub struct AssessmentConfig {
    /// Startup sequence drawn with the wide bar and status schedule.
    pub startup: Phase,
    pub thickness: Phase,
    pub weight: Phase,
    /// "Connecting to AI Core" sync before scoring.
    pub sync: Phase,
    /// Problem finder pass over thickness.
    pub thickness_probe: Phase,
    /// Problem finder pass over weight.
    pub weight_probe: Phase,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            startup: Phase {
                label: "Starting up...",
                first_step: 0,
                steps: 100,
                frame: Duration::from_millis(50),
                finish_label: None,
            },
            thickness: Phase {
                label: "Analyzing Thickness",
                first_step: 1,
                steps: 50,
                frame: Duration::from_millis(20),
                finish_label: Some("Thickness Done!"),
            },
            weight: Phase {
                label: "Analyzing Weight",
                first_step: 1,
                steps: 40,
                frame: Duration::from_millis(50),
                finish_label: Some("Weight Done!"),
            },
            sync: Phase {
                label: "Final Sync",
                first_step: 1,
                steps: 20,
                frame: Duration::from_millis(100),
                finish_label: Some("Evaluation..."),
            },
            thickness_probe: Phase {
                label: "Analyzing Thickness",
                first_step: 1,
                steps: 50,
                frame: Duration::from_millis(200),
                finish_label: Some("Thickness Done!"),
            },
            weight_probe: Phase {
                label: "Analyzing Weight",
                first_step: 1,
                steps: 40,
                frame: Duration::from_millis(50),
                finish_label: Some("Weight Done!"),
            },
        }
    }
}
