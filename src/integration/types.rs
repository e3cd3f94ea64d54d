//! Integration and artifact types.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::extractor::{ConnectorFacts, RequestFacts};

/// The five artifact categories, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Authenticator,
    Connector,
    Request,
    Plugin,
    Response,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Authenticator,
        Category::Connector,
        Category::Request,
        Category::Plugin,
        Category::Response,
    ];

    /// Subdirectory holding this category, `None` for connectors
    /// (which sit at the integration root).
    pub fn subdirectory(&self) -> Option<&'static str> {
        match self {
            Category::Authenticator => Some("Auth"),
            Category::Connector => None,
            Category::Request => Some("Requests"),
            Category::Plugin => Some("Plugins"),
            Category::Response => Some("Responses"),
        }
    }

    /// Singular label used on artifact lines.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Authenticator => "Authenticator",
            Category::Connector => "Connector",
            Category::Request => "Request",
            Category::Plugin => "Plugin",
            Category::Response => "Response",
        }
    }

    /// Plural label used on summary lines.
    pub fn plural(&self) -> &'static str {
        match self {
            Category::Authenticator => "Authenticators",
            Category::Connector => "Connectors",
            Category::Request => "Requests",
            Category::Plugin => "Plugins",
            Category::Response => "Responses",
        }
    }
}

/// What an artifact is, with whatever was extracted for its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum ArtifactKind {
    Authenticator,
    Connector(ConnectorFacts),
    Request(RequestFacts),
    Plugin,
    Response,
}

impl ArtifactKind {
    pub fn category(&self) -> Category {
        match self {
            ArtifactKind::Authenticator => Category::Authenticator,
            ArtifactKind::Connector(_) => Category::Connector,
            ArtifactKind::Request(_) => Category::Request,
            ArtifactKind::Plugin => Category::Plugin,
            ArtifactKind::Response => Category::Response,
        }
    }
}

/// A single discovered file (or directory) inside an integration.
///
/// The kind comes from where the entry was found, never from its contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Full path as discovered
    pub path: PathBuf,
    /// Last path segment, extension included
    pub name: String,
    #[serde(flatten)]
    pub kind: ArtifactKind,
}

impl Artifact {
    pub fn new(path: PathBuf, kind: ArtifactKind) -> Self {
        let name = display_name(&path);
        Self { path, name, kind }
    }
}

/// One integration directory and everything found in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Integration {
    pub path: PathBuf,
    pub name: String,
    pub authenticators: Vec<Artifact>,
    pub connectors: Vec<Artifact>,
    pub requests: Vec<Artifact>,
    pub plugins: Vec<Artifact>,
    pub responses: Vec<Artifact>,
}

impl Integration {
    /// An integration with nothing discovered yet.
    pub fn empty(path: PathBuf) -> Self {
        let name = display_name(&path);
        Self {
            path,
            name,
            authenticators: Vec::new(),
            connectors: Vec::new(),
            requests: Vec::new(),
            plugins: Vec::new(),
            responses: Vec::new(),
        }
    }

    pub fn artifacts(&self, category: Category) -> &[Artifact] {
        match category {
            Category::Authenticator => &self.authenticators,
            Category::Connector => &self.connectors,
            Category::Request => &self.requests,
            Category::Plugin => &self.plugins,
            Category::Response => &self.responses,
        }
    }

    pub fn artifacts_mut(&mut self, category: Category) -> &mut Vec<Artifact> {
        match category {
            Category::Authenticator => &mut self.authenticators,
            Category::Connector => &mut self.connectors,
            Category::Request => &mut self.requests,
            Category::Plugin => &mut self.plugins,
            Category::Response => &mut self.responses,
        }
    }

    pub fn count(&self, category: Category) -> usize {
        self.artifacts(category).len()
    }

    /// All artifacts in report order.
    pub fn all_artifacts(&self) -> impl Iterator<Item = &Artifact> {
        Category::ALL
            .into_iter()
            .flat_map(move |category| self.artifacts(category).iter())
    }
}

/// Last path segment as a display string.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
