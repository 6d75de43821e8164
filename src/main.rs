//! docgate CLI - checklist completion and status transition gates

use clap::Parser;
use docgate::cli::{Cli, Commands};
use docgate::errors::to_exit_code;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Exit code for a transition the gates denied
const EXIT_DENIED: i32 = 2;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing; flags win over RUST_LOG
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else if cli.quiet {
        EnvFilter::new("warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error [{}]: {}", e.code(), e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

async fn run(cli: Cli) -> docgate::Result<i32> {
    let cwd = cli.cwd.as_deref();
    match cli.command {
        Some(Commands::Init { force }) => docgate::cli::commands::init::run(cwd, force).await?,
        Some(Commands::Checklists { entity_type, json }) => {
            docgate::cli::commands::checklists::run(cwd, entity_type.as_deref(), json).await?
        }
        Some(Commands::Progress {
            entity_type,
            entity_id,
            checklist,
            json,
        }) => {
            docgate::cli::commands::progress::run(
                cwd,
                &entity_type,
                &entity_id,
                checklist.as_deref(),
                json,
            )
            .await?
        }
        Some(Commands::Transition {
            entity_type,
            entity_id,
            from,
            to,
            json,
        }) => {
            let allowed = docgate::cli::commands::transition::run(
                cwd,
                &entity_type,
                &entity_id,
                &from,
                &to,
                json,
            )
            .await?;
            if !allowed {
                return Ok(EXIT_DENIED);
            }
        }
        Some(Commands::Doctor) => docgate::cli::commands::doctor::run(cwd).await?,
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
        }
    }
    Ok(0)
}
