//! The interactive assessment flow.
//!
//! Banner, startup sequence, the two readings with their analysis bars, the
//! verdict and, for low scores, the optional problem finder. Input, output
//! and pacing are injected so the whole run can be replayed in tests.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use durascan::diagnosis;
use durascan::{
    parse_reading, AssessmentConfig, BarStyle, Criterion, DurascanError, Finding, Measurement,
    Phase, ScoreResult, StatusSchedule,
};
use tracing::{debug, info, trace};

use crate::ui::{self, colors};

/// Waits between animation frames.
pub trait Pacer {
    fn pause(&mut self, frame: Duration);
}

/// Sleeps the current thread for each frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, frame: Duration) {
        thread::sleep(frame);
    }
}

impl<P: Pacer + ?Sized> Pacer for &mut P {
    fn pause(&mut self, frame: Duration) {
        (**self).pause(frame);
    }
}

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub measurement: Measurement,
    pub score: ScoreResult,
    /// Present only when the problem finder ran.
    pub findings: Option<[Finding; 2]>,
}

/// One assessment run over injected I/O.
pub struct Assessment<R, W, P> {
    input: R,
    out: W,
    pacer: P,
    config: AssessmentConfig,
}

impl<R: BufRead, W: Write, P: Pacer> Assessment<R, W, P> {
    pub fn new(input: R, out: W, pacer: P, config: AssessmentConfig) -> Self {
        Self {
            input,
            out,
            pacer,
            config,
        }
    }

    /// Runs the full flow. Malformed readings abort the run.
    pub fn run(&mut self) -> Result<Report, DurascanError> {
        ui::banner(&mut self.out)?;
        self.startup()?;

        let thickness = self.read_reading(Criterion::Thickness)?;
        ui::stage(&mut self.out, "THICKNESS CALCULATING...")?;
        self.play(self.config.thickness)?;
        ui::success(&mut self.out, "Thickness analysis complete.")?;

        let weight = self.read_reading(Criterion::Weight)?;
        ui::stage(&mut self.out, "WEIGHT DATA PROCESSING...")?;
        self.play(self.config.weight)?;
        ui::success(&mut self.out, "Weight data acquisition finished.")?;

        writeln!(self.out)?;
        ui::info(&mut self.out, "Connecting to AI Core...")?;
        self.play(self.config.sync)?;

        let measurement = Measurement::new(thickness, weight);
        let score = measurement.score();
        let verdict = score.verdict();
        info!(
            thickness,
            weight,
            thickness_points = score.thickness_points,
            weight_points = score.weight_points,
            total = score.total,
            %verdict,
            "assessment scored"
        );
        self.print_assessment(&measurement, &score)?;

        let findings = if verdict.is_low() {
            self.offer_problem_finder(&measurement)?
        } else {
            writeln!(self.out)?;
            ui::dim(&mut self.out, "Analysis complete. No further problem solving needed.")?;
            None
        };

        self.out.flush()?;
        Ok(Report {
            measurement,
            score,
            findings,
        })
    }

    fn startup(&mut self) -> Result<(), DurascanError> {
        let phase = self.config.startup;
        let schedule = StatusSchedule::STARTUP;
        debug!(steps = phase.steps, "startup sequence");

        for step in phase.frames() {
            if schedule.changes_at(step) {
                trace!(step, status = schedule.message_at(step), "status changed");
            }
            BarStyle::STARTUP.draw(&mut self.out, step, phase.steps, schedule.message_at(step))?;
            self.pacer.pause(phase.frame);
        }

        writeln!(self.out)?;
        writeln!(self.out)?;
        ui::success(&mut self.out, "AI ready to use!")?;
        Ok(())
    }

    /// Draws an inline bar through every step of `phase`.
    fn play(&mut self, phase: Phase) -> Result<(), DurascanError> {
        debug!(label = phase.label, steps = phase.steps, "phase started");
        for step in phase.frames() {
            BarStyle::INLINE.draw(&mut self.out, step, phase.steps, phase.label)?;
            self.pacer.pause(phase.frame);
        }
        if let Some(done) = phase.finish_label {
            BarStyle::INLINE.draw(&mut self.out, phase.steps, phase.steps, done)?;
        }
        writeln!(self.out)?;
        debug!(label = phase.label, "phase finished");
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>, DurascanError> {
        write!(self.out, "\n{}", text)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn read_reading(&mut self, criterion: Criterion) -> Result<f64, DurascanError> {
        let text = match criterion {
            Criterion::Thickness => "Enter thickness of shell (cm): ",
            Criterion::Weight => "Enter weight of bottle (grams): ",
        };
        let line = self
            .prompt(text)?
            .ok_or_else(|| DurascanError::input_closed(format!("{criterion} reading")))?;

        parse_reading(criterion, &line).inspect_err(|err| {
            debug!(%criterion, input = line.trim(), %err, "rejected reading");
        })
    }

    fn print_assessment(
        &mut self,
        measurement: &Measurement,
        score: &ScoreResult,
    ) -> Result<(), DurascanError> {
        writeln!(self.out)?;
        ui::box_header(&mut self.out, "AI DURABILITY ASSESSMENT")?;
        ui::box_line(&mut self.out, "")?;
        for criterion in [Criterion::Thickness, Criterion::Weight] {
            let points = match criterion {
                Criterion::Thickness => score.thickness_points,
                Criterion::Weight => score.weight_points,
            };
            let label = match criterion {
                Criterion::Thickness => "Thickness",
                Criterion::Weight => "Weight",
            };
            ui::box_line(
                &mut self.out,
                &format!(
                    "{} = {} {}   ({} pts)",
                    label,
                    measurement.reading(criterion),
                    criterion.unit(),
                    points
                ),
            )?;
        }
        ui::box_line(&mut self.out, &format!("Score = {} / 6", score.total))?;
        ui::box_line(&mut self.out, "")?;
        ui::box_footer(&mut self.out)?;
        writeln!(self.out)?;
        ui::verdict(&mut self.out, score.verdict())?;
        Ok(())
    }

    /// Asks whether to look for the problem; only an exact `yes` proceeds.
    fn offer_problem_finder(
        &mut self,
        measurement: &Measurement,
    ) -> Result<Option<[Finding; 2]>, DurascanError> {
        writeln!(self.out)?;
        writeln!(self.out, "To Find Problem --")?;
        writeln!(self.out, "Enter - 'yes' to start ai to find problem --")?;
        writeln!(self.out, "Enter - 'no' to stop the ai")?;

        let answer = self.prompt("Enter Option - ")?;
        if answer.as_deref().map(str::trim) != Some("yes") {
            debug!(answer = answer.as_deref().map(str::trim), "problem finder declined");
            return Ok(None);
        }

        ui::notice(&mut self.out, colors::AMBER, "AI ANALYZING.....")?;

        ui::stage(&mut self.out, "THICKNESS CALCULATING...")?;
        self.play(self.config.thickness_probe)?;
        ui::notice(&mut self.out, colors::AMBER, "Thickness Analysis Complete ...")?;
        let thickness = diagnosis::inspect_thickness(measurement);
        self.print_finding(&thickness)?;

        writeln!(self.out)?;
        ui::notice(&mut self.out, colors::STEEL_BLUE, "AI Trying to check problem in Weight...")?;
        ui::stage(&mut self.out, "WEIGHT DATA PROCESSING...")?;
        self.play(self.config.weight_probe)?;
        ui::notice(&mut self.out, colors::AMBER, "Weight data acquisition finished.")?;
        let weight = diagnosis::inspect_weight(measurement);
        self.print_finding(&weight)?;

        let findings = [thickness, weight];
        writeln!(self.out)?;
        ui::box_header(&mut self.out, "FINAL OUTPUT")?;
        for finding in &findings {
            let color = if finding.problem {
                colors::ALERT_RED
            } else {
                colors::NEON_GREEN
            };
            ui::box_line(
                &mut self.out,
                &console::style(finding.summary_line()).fg(color).to_string(),
            )?;
        }
        ui::box_footer(&mut self.out)?;

        info!(
            thickness_problem = thickness.problem,
            weight_problem = weight.problem,
            "problem finder finished"
        );
        Ok(Some(findings))
    }

    fn print_finding(&mut self, finding: &Finding) -> Result<(), DurascanError> {
        writeln!(self.out)?;
        if finding.problem {
            ui::notice(&mut self.out, colors::ALERT_RED, finding.headline())?;
        } else {
            ui::notice(&mut self.out, colors::NEON_GREEN, finding.headline())?;
        }
        if let Some(advice) = finding.advice() {
            ui::notice(&mut self.out, colors::ALERT_RED, advice)?;
        }
        Ok(())
    }
}
