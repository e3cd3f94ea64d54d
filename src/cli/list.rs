//! `saloon list`: print the integration report.

use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use super::Format;
use crate::report::{render, RenderOptions};
use crate::Project;

/// Per-invocation overrides for the report.
#[derive(Debug, Default)]
pub struct ListOptions {
    pub path: Option<PathBuf>,
    pub format: Option<Format>,
    pub width: Option<usize>,
    pub no_color: bool,
}

/// Scan the project's integrations and write the report to `out`.
pub fn list(project: &mut Project, options: &ListOptions, out: &mut impl Write) -> Result<()> {
    if let Some(path) = &options.path {
        project.config_mut().integrations.path = path.to_string_lossy().to_string();
    }
    if let Some(width) = options.width {
        project.config_mut().output.width = Some(width);
    }

    info!(path = %project.integrations_path().display(), "scanning integrations");
    let report = project.report();

    match options.format.unwrap_or(Format::Text) {
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        Format::Text => {
            let render_options = RenderOptions {
                width: project.config().resolve_width(),
                color: project.config().output.color && !options.no_color,
            };
            write!(out, "{}", render(&report, &render_options))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn seed(root: &std::path::Path) {
        let requests = root.join("app/Http/Integrations/Forge/Requests");
        fs::create_dir_all(&requests).unwrap();
        fs::write(
            requests.join("GetServer.php"),
            "protected Method $method = Method::GET;\npublic function resolveEndpoint(): string { return '/servers/' . $this->id; }",
        )
        .unwrap();
    }

    #[test]
    fn test_text_output_without_color() {
        let dir = tempdir().unwrap();
        seed(dir.path());
        let mut project = Project::open(dir.path(), None);

        let mut out = Vec::new();
        let options = ListOptions { width: Some(80), no_color: true, ..Default::default() };
        list(&mut project, &options, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(" Integrations: 1\n"));
        assert!(text.contains("  Request ......... GetServer.php "));
        assert!(text.ends_with(" /servers/{id} GET \n\n"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_json_output() {
        let dir = tempdir().unwrap();
        seed(dir.path());
        let mut project = Project::open(dir.path(), None);

        let mut out = Vec::new();
        let options = ListOptions { format: Some(Format::Json), ..Default::default() };
        list(&mut project, &options, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["integrations"][0]["name"], "Forge");
        assert_eq!(value["integrations"][0]["requests"][0]["endpoint"], "/servers/{id}");
    }

    #[test]
    fn test_path_override_to_missing_directory() {
        let dir = tempdir().unwrap();
        let mut project = Project::open(dir.path(), None);

        let mut out = Vec::new();
        let options = ListOptions {
            path: Some(PathBuf::from("does/not/exist")),
            width: Some(40),
            no_color: true,
            ..Default::default()
        };
        list(&mut project, &options, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("Integrations: 0"));
    }
}
