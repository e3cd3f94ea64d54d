//
//  render.rs
//  saloon-inspect
//

use colored::Colorize;

use super::line::{join_text, visible_width, ReportLine, Span, Tone};
use super::Report;

/// Blank columns kept on each side of a detail line.
const MARGIN: usize = 2;

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Total line width the fill dots stretch to
    pub width: usize,
    /// Emit ANSI colors
    pub color: bool,
}

/// Render the report as console text: a blank line, the banner, a blank
/// line, then every integration block.
pub fn render(report: &Report, options: &RenderOptions) -> String {
    let mut lines = report.lines();
    lines.insert(1, ReportLine::Blank);
    lines.insert(0, ReportLine::Blank);

    let mut out = String::new();
    for line in &lines {
        match line {
            ReportLine::Detail { left, right } => out.push_str(&render_detail(left, right, options)),
            ReportLine::Blank => {}
        }
        out.push('\n');
    }
    out
}

/// `  left ........ right`, dots filling the line to the render width.
fn render_detail(left: &[Span], right: &[Span], options: &RenderOptions) -> String {
    let inner = options.width.saturating_sub(MARGIN * 2);
    let left_width = visible_width(left);
    let right_width = visible_width(right);
    let separators = if right_width > 0 { 2 } else { 1 };
    let fill = inner.saturating_sub(left_width + right_width + separators);

    let mut line = " ".repeat(MARGIN);
    line.push_str(&paint_all(left, options.color));
    if fill > 0 {
        line.push(' ');
        line.push_str(&paint(&".".repeat(fill), Tone::Muted, options.color));
    }
    if right_width > 0 {
        line.push(' ');
        line.push_str(&paint_all(right, options.color));
    }
    line
}

fn paint_all(spans: &[Span], color: bool) -> String {
    if !color {
        return join_text(spans);
    }
    spans.iter().map(|s| paint(&s.text, s.tone, true)).collect()
}

fn paint(text: &str, tone: Tone, color: bool) -> String {
    if !color || text.is_empty() {
        return text.to_string();
    }
    match tone {
        Tone::Plain => text.to_string(),
        Tone::Heading => text.green().bold().to_string(),
        Tone::Text => text.white().to_string(),
        Tone::Muted => text.bright_black().to_string(),
        Tone::Red => text.red().to_string(),
        Tone::Green => text.green().to_string(),
        Tone::Blue => text.blue().to_string(),
        Tone::Magenta => text.magenta().to_string(),
        Tone::Cyan => text.cyan().to_string(),
        Tone::Yellow => text.yellow().to_string(),
    }
}
