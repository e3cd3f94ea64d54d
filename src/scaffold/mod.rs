//
//  mod.rs
//  saloon-inspect
//
//  Request class generation.
//

mod stub;

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, SaloonError};
use crate::method::Method;
use stub::{fill, REQUEST_STUB};

/// What to generate and where.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    /// Integration directory name, e.g. `Forge`
    pub integration: String,
    /// Class name, e.g. `GetServerRequest`
    pub name: String,
    pub method: Method,
}

/// Generate a request class under `<integrations_root>/<integration>/Requests/`.
///
/// Returns the path written. Fails if the target exists and `force` is off.
pub fn make_request(
    integrations_root: &Path,
    namespace: &str,
    spec: &RequestSpec,
    force: bool,
) -> Result<PathBuf> {
    validate_name(&spec.integration)?;
    validate_name(&spec.name)?;

    let dir = integrations_root.join(&spec.integration).join("Requests");
    let target = dir.join(format!("{}.php", spec.name));

    if target.exists() && !force {
        return Err(SaloonError::AlreadyExists(target));
    }

    let namespace = format!(
        "{}\\{}\\Requests",
        namespace.trim_end_matches('\\'),
        spec.integration
    );
    let content = fill(
        REQUEST_STUB,
        &[
            ("namespace", namespace.as_str()),
            ("class", spec.name.as_str()),
            ("method", spec.method.as_str()),
        ],
    );

    fs::create_dir_all(&dir)?;

    // Write to temp, then rename; no temp file survives a failure.
    let temp_path = target.with_extension("php.tmp");
    if let Err(e) = write_atomic(&temp_path, &target, content.as_bytes()) {
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }

    debug!(path = %target.display(), method = %spec.method, "generated request");
    Ok(target)
}

fn write_atomic(temp_path: &Path, target: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(temp_path)?;
    file.write_all(content)?;
    file.sync_all()?;
    fs::rename(temp_path, target)
}

/// Class and directory names must be plain identifiers.
fn validate_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if !valid {
        return Err(SaloonError::InvalidName(name.to_string()));
    }
    Ok(())
}
