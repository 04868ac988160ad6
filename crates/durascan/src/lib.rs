//! # DuraScan
//!
//! Core of the DuraScan bottle assessment demo: progress bar rendering and
//! threshold-based durability scoring. The interactive flow lives in the
//! `durascan-cli` crate; everything here is pure and free of terminal state.
//!
//! ## Pipeline
//!
//! ```text
//! stdin lines
//!      │
//!      ▼
//! ┌──────────────┐
//! │ measurement  │  parse thickness / weight readings
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │    score     │  thresholds → points → verdict
//! └──────┬───────┘
//!        │  (low verdict only)
//!        ▼
//! ┌──────────────┐
//! │  diagnosis   │  per-criterion findings
//! └──────────────┘
//! ```
//!
//! `progress` renders the bars drawn between those stages, timed by
//! `config`.
//!
//! ## Usage
//!
//! ```rust
//! use durascan::{parse_reading, BarStyle, Criterion, Measurement, Verdict};
//!
//! let thickness = parse_reading(Criterion::Thickness, "3.5").unwrap();
//! let weight = parse_reading(Criterion::Weight, "90").unwrap();
//! let result = Measurement::new(thickness, weight).score();
//!
//! assert_eq!(result.total, 6);
//! assert_eq!(result.verdict(), Verdict::HighlyDurable);
//! assert!(BarStyle::INLINE.render(20, 20, "Final Sync").ends_with("100.0%"));
//! ```

pub mod config;
pub mod diagnosis;
pub mod diagnostic;
pub mod measurement;
pub mod progress;
pub mod score;

pub use config::{AssessmentConfig, Phase};
pub use diagnosis::Finding;
pub use diagnostic::DurascanError;
pub use measurement::{parse_reading, Criterion, Measurement};
pub use progress::{BarStyle, ProgressState, StatusSchedule};
pub use score::{score, ScoreResult, Verdict};
