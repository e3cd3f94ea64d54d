//! saloon CLI - inspect and scaffold Saloon integrations.

use clap::Parser;
use saloon_inspect::cli::list::{list, ListOptions};
use saloon_inspect::cli::make::request;
use saloon_inspect::cli::{Cli, Commands};
use saloon_inspect::{Project, RequestSpec};
use std::env;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let mut filter = EnvFilter::from_default_env();

    if env::var("RUST_LOG").is_err() {
        let level = if verbose { "debug" } else { "warn" };
        if let Ok(directive) = format!("saloon_inspect={level}").parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    debug!(?cli, "parsed arguments");
    let mut project = Project::open(&cli.root, cli.config.as_deref());
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::List {
            path,
            format,
            width,
            no_color,
        } => {
            let options = ListOptions {
                path,
                format: Some(format),
                width,
                no_color,
            };
            list(&mut project, &options, &mut stdout)?;
        }

        Commands::Request {
            integration,
            name,
            method,
            force,
        } => {
            let spec = RequestSpec {
                integration,
                name,
                method,
            };
            request(&project, &spec, force, &mut stdout)?;
        }
    }

    Ok(())
}
