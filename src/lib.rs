//! # saloon-inspect
//!
//! Introspection and scaffolding for Saloon API integrations in a Laravel
//! project.
//!
//! Integrations live one directory each under the integrations root
//! (`app/Http/Integrations` by default):
//!
//! ```text
//! app/Http/Integrations/
//! └── Forge/
//!     ├── ForgeConnector.php   # connector: base URL
//!     ├── Auth/                # authenticators
//!     ├── Requests/            # requests: method + endpoint
//!     ├── Plugins/
//!     └── Responses/
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use saloon_inspect::{Project, RenderOptions, render};
//!
//! let project = Project::open(".", None);
//! let report = project.report();
//! print!("{}", render(&report, &RenderOptions { width: 100, color: false }));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod integration;
pub mod method;
pub mod report;
pub mod scaffold;

// Re-exports for convenience
pub use config::SaloonConfig;
pub use error::{Result, SaloonError};
pub use integration::{Artifact, ArtifactKind, Category, Integration};
pub use method::Method;
pub use report::{render, RenderOptions, Report};
pub use scaffold::RequestSpec;

use std::path::{Path, PathBuf};

/// A Laravel project with its Saloon settings.
pub struct Project {
    /// Project root directory
    root: PathBuf,
    config: SaloonConfig,
}

impl Project {
    /// Open a project, reading `config_path` (default `<root>/saloon.toml`).
    ///
    /// Never fails: a missing or malformed config means defaults.
    pub fn open<P: Into<PathBuf>>(root: P, config_path: Option<&Path>) -> Self {
        let root = root.into();
        let config_path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.join(config::CONFIG_FILE));
        let config = SaloonConfig::load(&config_path);

        Self { root, config }
    }

    /// Use an explicit configuration.
    pub fn with_config<P: Into<PathBuf>>(root: P, config: SaloonConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Scan every integration and extract its facts.
    pub fn report(&self) -> Report {
        Report::build(
            &self.integrations_path(),
            &self.config.integrations.connector_suffix,
        )
    }

    /// Generate a request class inside an integration.
    pub fn make_request(&self, spec: &RequestSpec, force: bool) -> Result<PathBuf> {
        scaffold::make_request(
            &self.integrations_path(),
            &self.config.integrations.namespace,
            spec,
            force,
        )
    }

    pub fn integrations_path(&self) -> PathBuf {
        self.config.resolve_integrations_path(&self.root)
    }

    pub fn config(&self) -> &SaloonConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SaloonConfig {
        &mut self.config
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_generated_request_shows_in_report() {
        let dir = tempdir().unwrap();
        let project = Project::open(dir.path(), None);

        assert!(project.report().integrations.is_empty());

        project
            .make_request(
                &RequestSpec {
                    integration: "Forge".to_string(),
                    name: "DeleteServerRequest".to_string(),
                    method: Method::Delete,
                },
                false,
            )
            .unwrap();

        let report = project.report();
        assert_eq!(report.integrations.len(), 1);
        let forge = &report.integrations[0];
        assert_eq!(forge.name, "Forge");
        assert_eq!(forge.requests[0].name, "DeleteServerRequest.php");
        match &forge.requests[0].kind {
            ArtifactKind::Request(facts) => {
                assert_eq!(facts.known_method(), Some(Method::Delete));
                assert_eq!(facts.endpoint, "/example");
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn test_config_file_moves_integrations_root() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("saloon.toml"),
            "[integrations]\npath = \"src/Saloon\"\n",
        )
        .unwrap();
        std::fs::create_dir_all(dir.path().join("src/Saloon/Github/Plugins")).unwrap();

        let project = Project::open(dir.path(), None);
        assert_eq!(project.integrations_path(), dir.path().join("src/Saloon"));
        assert_eq!(project.report().integrations[0].name, "Github");
    }
}
