//! `saloon request`: generate a request class.

use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use tracing::info;

use crate::{Project, RequestSpec};

pub fn request(project: &Project, spec: &RequestSpec, force: bool, out: &mut impl Write) -> Result<()> {
    info!(integration = %spec.integration, name = %spec.name, method = %spec.method, "generating request");
    let path = project.make_request(spec, force)?;

    writeln!(
        out,
        "\n  {} Saloon Request [{}] created successfully.\n",
        " INFO ".on_blue().bold(),
        path.display()
    )?;
    Ok(())
}
