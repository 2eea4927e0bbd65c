use std::net::SocketAddr;

use clap::Parser;
use colored::Colorize;
use dotenv::dotenv;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use plan_m::api;
use plan_m::commands::{food_cmd, CommandHandler, CommandOutcome};
use plan_m::config::{ConfigError, EndpointConfig, SessionConfig};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Plan M: meal plans with photos and shopping links", long_about = None)]
struct Args {
    #[arg(long)]
    openai_api_key: Option<String>,

    #[arg(long)]
    serpapi_api_key: Option<String>,

    /// Run a single plan request and exit
    #[arg(short, long)]
    request: Option<String>,

    #[arg(long)]
    api: bool,

    #[arg(long, default_value = "3000")]
    port: u16,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("Plan error: {0}")]
    PlanError(String),
    #[error("Server error: {0}")]
    ServerError(String),
    #[error("Terminal error: {0}")]
    TerminalError(#[from] ReadlineError),
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("plan_m=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let result = if args.api {
        run_api_server(&args).await
    } else {
        run_cli_mode(&args).await
    };

    if let Err(e) = result {
        eprintln!("{}", e.to_string().red());
        std::process::exit(1);
    }
}

fn session_keys(args: &Args) -> (Option<String>, Option<String>) {
    let (env_openai, env_serpapi) = SessionConfig::keys_from_env();
    (
        args.openai_api_key.clone().or(env_openai),
        args.serpapi_api_key.clone().or(env_serpapi),
    )
}

async fn run_cli_mode(args: &Args) -> Result<(), AppError> {
    let endpoints = EndpointConfig::from_env()?;
    let (openai_key, serpapi_key) = session_keys(args);

    if let Some(request) = &args.request {
        let session = SessionConfig::new(openai_key, serpapi_key, request.as_str());
        return food_cmd::handle_command(session, &endpoints)
            .await
            .map_err(AppError::PlanError);
    }

    let mut command_handler = CommandHandler::new(openai_key, serpapi_key, endpoints);

    // Show initial help menu
    command_handler.handle_command("help").await.map_err(AppError::PlanError)?;

    let mut rl = Editor::<(), DefaultHistory>::new()?;

    loop {
        match rl.readline("🥗 ") {
            Ok(line) => {
                let input = line.trim();
                let _ = rl.add_history_entry(input);

                match command_handler.handle_command(input).await {
                    Ok(CommandOutcome::Exit) => break,
                    Ok(CommandOutcome::Continue) => {}
                    Err(e) => println!("{}", format!("❗ {}", e).red()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

async fn run_api_server(args: &Args) -> Result<(), AppError> {
    let endpoints = EndpointConfig::from_env()?;
    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));

    let app = api::create_api(endpoints);

    let listener = TcpListener::bind(&addr).await
        .map_err(|e| AppError::ServerError(format!("Failed to bind to {}: {}", addr, e)))?;

    info!(%addr, "API server listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::ServerError(e.to_string()))?;

    Ok(())
}
