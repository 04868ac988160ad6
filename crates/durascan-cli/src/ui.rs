//! DuraScan CLI UI primitives.
//!
//! Every helper writes to a caller-supplied writer so the flow can be
//! rendered into a buffer under test.

use std::io::{self, Write};

use console::{style, Style};
use durascan::Verdict;

/// Lab-console palette
pub mod colors {
    use console::Color;

    pub const CYAN: Color = Color::Color256(51); // Scanner cyan
    pub const NEON_GREEN: Color = Color::Color256(82); // Pass
    pub const AMBER: Color = Color::Color256(214); // Warning
    pub const ALERT_RED: Color = Color::Color256(196); // Failure
    pub const STEEL_BLUE: Color = Color::Color256(75); // Secondary status
    pub const DIM: Color = Color::Color256(240); // Dim gray
}

pub mod symbols {
    pub const DIAMOND: &str = "\u{25C6}"; // ◆
    pub const DIAMOND_OUTLINE: &str = "\u{25C7}"; // ◇
    pub const TARGET_FILLED: &str = "\u{25C9}"; // ◉
    pub const TRIANGLE: &str = "\u{25B8}"; // ▸
}

const BOX_WIDTH: usize = 55;

/// HSL to RGB conversion for gradients
fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    )
}

/// Colors text with a green -> cyan gradient.
///
/// Plain text is returned when the terminal does not take colors.
pub fn gradient_text(text: &str) -> String {
    if !console::colors_enabled() {
        return text.to_string();
    }
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len().max(1) as f32;
    chars
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if c.is_whitespace() {
                c.to_string()
            } else {
                // Hue 120 (green) to 190 (cyan)
                let hue = 120.0 + (i as f32 / len) * 70.0;
                let (r, g, b) = hsl_to_rgb(hue, 1.0, 0.55);
                format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, c)
            }
        })
        .collect()
}

/// Print the DuraScan banner
pub fn banner<W: Write>(out: &mut W) -> io::Result<()> {
    let logo = r#"
       ╔═══════════════════════════════════════════════════════╗
       ║                                                       ║
       ║     D U R A S C A N                                   ║
       ║     Bottle durability lab                             ║
       ║                                                       ║
       ╚═══════════════════════════════════════════════════════╝"#;

    for line in logo.lines() {
        writeln!(out, "{}", gradient_text(line))?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "  {} {}",
        style(symbols::DIAMOND).fg(colors::CYAN),
        style("WELCOME to the AI durability assessment").bold()
    )?;
    writeln!(out)
}

/// Print a success message
pub fn success<W: Write>(out: &mut W, msg: &str) -> io::Result<()> {
    writeln!(
        out,
        "  {} {}",
        style(symbols::TARGET_FILLED).fg(colors::NEON_GREEN),
        msg
    )
}

/// Print an info message
pub fn info<W: Write>(out: &mut W, msg: &str) -> io::Result<()> {
    writeln!(
        out,
        "  {} {}",
        style(symbols::DIAMOND_OUTLINE).fg(colors::CYAN),
        msg
    )
}

/// Print a dim/secondary message
pub fn dim<W: Write>(out: &mut W, msg: &str) -> io::Result<()> {
    writeln!(out, "  {}", style(msg).fg(colors::DIM))
}

/// Print a stage heading such as `THICKNESS CALCULATING...`
pub fn stage<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "  {} {}",
        style(symbols::TRIANGLE).fg(colors::CYAN),
        style(title).fg(colors::CYAN).bold()
    )
}

/// Print a notice in the given color
pub fn notice<W: Write>(out: &mut W, color: console::Color, msg: &str) -> io::Result<()> {
    writeln!(out, "  {}", style(msg).fg(color))
}

/// Print a box header
pub fn box_header<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    let title_padded = format!(" {} ", title);
    let title_len = title_padded.chars().count();
    let dashes = BOX_WIDTH.saturating_sub(title_len + 3);

    writeln!(
        out,
        "  {}{}{}{}",
        style("\u{256D}\u{2500}").fg(colors::CYAN), // ╭─
        style(title_padded).fg(colors::CYAN).bold(),
        style("\u{2500}".repeat(dashes)).fg(colors::CYAN),
        style("\u{256E}").fg(colors::CYAN) // ╮
    )
}

/// Print a box line
pub fn box_line<W: Write>(out: &mut W, content: &str) -> io::Result<()> {
    let width: usize = BOX_WIDTH - 3;
    let padding = width.saturating_sub(console::measure_text_width(content));
    writeln!(
        out,
        "  {} {}{}{}",
        style("\u{2502}").fg(colors::CYAN), // │
        content,
        " ".repeat(padding),
        style("\u{2502}").fg(colors::CYAN)
    )
}

/// Print a box footer
pub fn box_footer<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "  {}{}{}",
        style("\u{2570}").fg(colors::CYAN), // ╰
        style("\u{2500}".repeat(BOX_WIDTH - 2)).fg(colors::CYAN),
        style("\u{256F}").fg(colors::CYAN) // ╯
    )
}

/// Color for a verdict: green bold, amber or red.
pub fn verdict_style(verdict: Verdict) -> Style {
    match verdict {
        Verdict::HighlyDurable => Style::new().fg(colors::NEON_GREEN).bold(),
        Verdict::Medium => Style::new().fg(colors::AMBER),
        Verdict::Low => Style::new().fg(colors::ALERT_RED),
    }
}

pub fn verdict_message(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::HighlyDurable => "AI Result: The bottle is highly durable! (Max Score)",
        Verdict::Medium => "AI Result: Durability is medium. One criterion met.",
        Verdict::Low => "AI Result: Low durability. Improve material thickness and/or weight.",
    }
}

/// Print the color-coded verdict line
pub fn verdict<W: Write>(out: &mut W, verdict: Verdict) -> io::Result<()> {
    writeln!(
        out,
        "  {} {}",
        verdict_style(verdict).apply_to(symbols::DIAMOND),
        verdict_style(verdict).apply_to(verdict_message(verdict))
    )
}
