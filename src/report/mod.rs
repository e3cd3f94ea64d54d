//! Integration report.
//!
//! [`Report`] is the structured result of a scan. [`Report::lines`] lays it
//! out as styled two-column lines; [`render`] turns those into terminal text.

mod line;
mod render;

use serde::Serialize;
use std::path::Path;

use crate::integration::{scan_integrations, Artifact, ArtifactKind, Category, Integration};
use crate::method::Method;

pub use line::{ReportLine, Span, Tone};
pub use render::{render, RenderOptions};

/// Width of the label gutter on artifact lines, dots included.
const LABEL_GUTTER: usize = 16;

/// Everything discovered under an integrations root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub integrations: Vec<Integration>,
}

impl Report {
    /// Scan `root` and extract every integration beneath it.
    ///
    /// Never fails: a missing root is an empty report.
    pub fn build(root: &Path, connector_suffix: &str) -> Self {
        Self {
            integrations: scan_integrations(root, connector_suffix),
        }
    }

    /// Banner, then per integration a summary line, its artifacts in
    /// category order, and a blank separator.
    pub fn lines(&self) -> Vec<ReportLine> {
        let mut lines = vec![ReportLine::detail(
            vec![Span::new("General", Tone::Heading)],
            vec![Span::new(
                format!("Integrations: {}", self.integrations.len()),
                Tone::Text,
            )],
        )];

        for integration in &self.integrations {
            lines.push(summary_line(integration));
            lines.extend(integration.all_artifacts().map(artifact_line));
            lines.push(ReportLine::Blank);
        }

        lines
    }
}

fn summary_line(integration: &Integration) -> ReportLine {
    let counts = Category::ALL
        .iter()
        .map(|c| format!("{}: {}", c.plural(), integration.count(*c)))
        .collect::<Vec<_>>()
        .join(" / ");

    ReportLine::detail(
        vec![Span::new(integration.name.clone(), Tone::Heading)],
        vec![Span::new(counts, Tone::Text)],
    )
}

fn category_tone(category: Category) -> Tone {
    match category {
        Category::Authenticator => Tone::Red,
        Category::Connector => Tone::Blue,
        Category::Request => Tone::Magenta,
        Category::Plugin => Tone::Cyan,
        Category::Response => Tone::Yellow,
    }
}

/// GET blue, writes green, DELETE red, anything else magenta.
pub fn method_tone(method: Option<Method>) -> Tone {
    match method {
        Some(Method::Get) => Tone::Blue,
        Some(Method::Post | Method::Put | Method::Patch) => Tone::Green,
        Some(Method::Delete) => Tone::Red,
        _ => Tone::Magenta,
    }
}

fn artifact_line(artifact: &Artifact) -> ReportLine {
    let category = artifact.kind.category();
    let label = category.label();
    let left = vec![
        Span::new(label, category_tone(category)),
        Span::plain(" "),
        Span::new(".".repeat(LABEL_GUTTER.saturating_sub(label.len())), Tone::Muted),
        Span::plain(" "),
        Span::plain(artifact.name.clone()),
    ];

    let right = match &artifact.kind {
        ArtifactKind::Connector(facts) => vec![Span::new(facts.base_url.clone(), Tone::Muted)],
        ArtifactKind::Request(facts) => vec![
            Span::plain(" "),
            Span::new(facts.endpoint.clone(), Tone::Muted),
            Span::plain(" "),
            Span::new(facts.method.clone(), method_tone(facts.known_method())),
            Span::plain(" "),
        ],
        ArtifactKind::Authenticator | ArtifactKind::Plugin | ArtifactKind::Response => Vec::new(),
    };

    ReportLine::detail(left, right)
}
