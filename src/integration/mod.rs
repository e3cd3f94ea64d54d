//! Integration discovery.
//!
//! An integration is a directory under the integrations root. Its artifacts
//! are classified purely by where they sit:
//! - `*Connector.php` at the integration root
//! - `Auth/`, `Requests/`, `Plugins/`, `Responses/` entries

pub mod discovery;
mod types;

pub use discovery::{inspect_integration, list_category, list_integrations, scan_integrations};
pub use types::{display_name, Artifact, ArtifactKind, Category, Integration};
