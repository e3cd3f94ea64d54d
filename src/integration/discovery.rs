//
//  discovery.rs
//  saloon-inspect
//

use ignore::WalkBuilder;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::types::{Artifact, ArtifactKind, Category, Integration};
use crate::extractor::{extract_connector, extract_request};

/// Non-recursive, name-ordered listing of a directory, like a shell `*` glob:
/// hidden entries skipped, ignore files not consulted. A missing or
/// unreadable directory lists as empty.
fn list_entries(dir: &Path) -> Vec<PathBuf> {
    WalkBuilder::new(dir)
        .max_depth(Some(1))
        .hidden(true)
        .parents(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.depth() == 1)
        .map(|entry| entry.into_path())
        .collect()
}

/// Integration directories directly beneath `root`, in name order.
pub fn list_integrations(root: &Path) -> Vec<PathBuf> {
    list_entries(root)
        .into_iter()
        .filter(|path| path.is_dir())
        .collect()
}

/// Entries belonging to one category of an integration.
///
/// Connectors are files at the integration root ending in `connector_suffix`;
/// every other category is whatever sits in its subdirectory.
pub fn list_category(integration: &Path, category: Category, connector_suffix: &str) -> Vec<PathBuf> {
    match category.subdirectory() {
        Some(subdir) => list_entries(&integration.join(subdir)),
        None => list_entries(integration)
            .into_iter()
            .filter(|path| {
                path.file_name()
                    .map(|f| f.to_string_lossy().ends_with(connector_suffix))
                    .unwrap_or(false)
            })
            .collect(),
    }
}

/// Build an artifact for a discovered path, extracting facts where the
/// category has any.
fn inspect_artifact(path: PathBuf, category: Category) -> Artifact {
    let kind = match category {
        Category::Authenticator => ArtifactKind::Authenticator,
        Category::Connector => ArtifactKind::Connector(extract_connector(&path)),
        Category::Request => ArtifactKind::Request(extract_request(&path)),
        Category::Plugin => ArtifactKind::Plugin,
        Category::Response => ArtifactKind::Response,
    };
    Artifact::new(path, kind)
}

/// Discover and extract one integration.
pub fn inspect_integration(path: &Path, connector_suffix: &str) -> Integration {
    let mut integration = Integration::empty(path.to_path_buf());

    for category in Category::ALL {
        let artifacts = list_category(path, category, connector_suffix)
            .into_iter()
            .map(|entry| inspect_artifact(entry, category))
            .collect();
        *integration.artifacts_mut(category) = artifacts;
    }

    debug!(
        integration = %integration.name,
        authenticators = integration.authenticators.len(),
        connectors = integration.connectors.len(),
        requests = integration.requests.len(),
        plugins = integration.plugins.len(),
        responses = integration.responses.len(),
        "inspected integration"
    );

    integration
}

/// Discover and extract every integration under `root`.
///
/// Integrations are inspected in parallel; the result keeps discovery order.
pub fn scan_integrations(root: &Path, connector_suffix: &str) -> Vec<Integration> {
    let paths = list_integrations(root);
    debug!(root = %root.display(), count = paths.len(), "discovered integrations");

    paths
        .par_iter()
        .map(|path| inspect_integration(path, connector_suffix))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_missing_root_is_empty() {
        let dir = tempdir().unwrap();
        assert!(list_integrations(&dir.path().join("nope")).is_empty());
        assert!(scan_integrations(&dir.path().join("nope"), "Connector.php").is_empty());
    }

    #[test]
    fn test_integrations_are_directories_in_name_order() {
        let dir = tempdir().unwrap();
        for name in ["Stripe", "Forge", "Github"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        touch(&dir.path().join("README.md"), "");
        fs::create_dir(dir.path().join(".cache")).unwrap();

        let names: Vec<_> = list_integrations(dir.path())
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["Forge", "Github", "Stripe"]);
    }

    #[test]
    fn test_connectors_match_suffix_at_root_only() {
        let dir = tempdir().unwrap();
        let forge = dir.path().join("Forge");
        touch(&forge.join("ForgeConnector.php"), "");
        touch(&forge.join("ForgeConnector.php.bak"), "");
        touch(&forge.join("Helpers.php"), "");
        touch(&forge.join("Requests/NestedConnector.php"), "");

        let connectors = list_category(&forge, Category::Connector, "Connector.php");
        assert_eq!(connectors, vec![forge.join("ForgeConnector.php")]);
    }

    #[test]
    fn test_category_lists_files_and_directories() {
        let dir = tempdir().unwrap();
        let forge = dir.path().join("Forge");
        touch(&forge.join("Requests/ListServers.php"), "");
        touch(&forge.join("Requests/Servers/GetServer.php"), "");

        let requests = list_category(&forge, Category::Request, "Connector.php");
        assert_eq!(
            requests,
            vec![forge.join("Requests/ListServers.php"), forge.join("Requests/Servers")]
        );
        assert!(list_category(&forge, Category::Plugin, "Connector.php").is_empty());
    }

    #[test]
    fn test_inspect_partially_populated_integration() {
        let dir = tempdir().unwrap();
        let forge = dir.path().join("Forge");
        touch(
            &forge.join("ForgeConnector.php"),
            "public function resolveBaseUrl(): string { return 'https://forge.laravel.com/api/v1'; }",
        );
        touch(
            &forge.join("Requests/GetServer.php"),
            "protected Method $method = Method::GET;\npublic function resolveEndpoint(): string { return '/servers/' . $this->id; }",
        );
        touch(&forge.join("Responses/ServerResponse.php"), "");

        let integration = inspect_integration(&forge, "Connector.php");
        assert_eq!(integration.name, "Forge");
        assert_eq!(integration.count(Category::Authenticator), 0);
        assert_eq!(integration.count(Category::Plugin), 0);
        assert_eq!(integration.count(Category::Response), 1);

        match &integration.connectors[0].kind {
            ArtifactKind::Connector(facts) => assert_eq!(facts.base_url, "forge.laravel.com/api/v1"),
            other => panic!("unexpected kind {other:?}"),
        }
        match &integration.requests[0].kind {
            ArtifactKind::Request(facts) => {
                assert_eq!(facts.method, "GET");
                assert_eq!(facts.endpoint, "/servers/{id}");
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn test_scan_keeps_discovery_order() {
        let dir = tempdir().unwrap();
        let names = ["Alpha", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot"];
        for name in names {
            touch(&dir.path().join(name).join("Plugins/Retry.php"), "");
        }

        let scanned: Vec<_> = scan_integrations(dir.path(), "Connector.php")
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(scanned, names);
    }
}
