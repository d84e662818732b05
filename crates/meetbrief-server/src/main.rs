//! Meetbrief: meeting transcript to structured brief.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use meetbrief_core::BriefConfig;
use meetbrief_runtime::Orchestrator;
use meetbrief_server::{build_router, cli, AppState};

fn print_help() {
    println!("Meetbrief: meeting transcript to structured brief");
    println!();
    println!("Usage: meetbrief [command]");
    println!();
    println!("Commands:");
    println!("  (none)                   Start the server");
    println!("  summarize [file|-]       Print the brief for a transcript file or stdin");
    println!("  help                     Show this help message");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `summarize` output stays clean JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = BriefConfig::from_env()?;
    let engine = meetbrief_nlp::create_engine();

    if args.len() > 1 {
        match args[1].as_str() {
            "summarize" => {
                let source = args.get(2).map(String::as_str).unwrap_or("-");
                let orchestrator = Orchestrator::new(config.pipeline.clone(), engine)?;
                match cli::summarize_source(&orchestrator, source) {
                    Ok(json) => {
                        println!("{}", json);
                        return Ok(());
                    }
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                }
            }
            "--help" | "-h" | "help" => {
                print_help();
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'meetbrief help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    let port = config.port;
    let state = Arc::new(AppState::new(config, engine)?);
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Meetbrief server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
