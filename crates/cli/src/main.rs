//! # campusbot-cli
//!
//! This is the main entry point for the campus chatbot command-line interface.

use anyhow::{bail, Result};
use campusbot::{respond, ExportKind, Formality, Hierarchy, ReplyMetadata};
use campusbot_cli::{api_client::ApiClient, check::run_check, DEFAULT_SERVER_URL};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use std::{path::PathBuf, time::Instant};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask the chatbot a question locally, without a server
    Ask(AskArgs),
    /// Replay the validation scenarios against a running server
    Check(ServerArgs),
    /// Print the research summary of a running server
    Summary(ServerArgs),
    /// Download a research data set from a running server
    Export(ExportArgs),
}

#[derive(Args, Debug)]
struct AskArgs {
    /// The message to send
    message: String,
    /// Who the user is talking to
    #[arg(long, default_value = "student-to-staff")]
    hierarchy: Hierarchy,
    /// How formally the bot should reply
    #[arg(long, default_value = "casual")]
    formality: Formality,
}

#[derive(Args, Debug)]
struct ServerArgs {
    /// Base URL of the campusbot server
    #[arg(long, env = "CAMPUSBOT_URL", default_value = DEFAULT_SERVER_URL)]
    url: String,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// The data set to download: sessions, ratings or analytics
    kind: ExportKind,
    #[command(flatten)]
    server: ServerArgs,
    /// Where to write the file; defaults to the server's suggested name
    #[arg(long)]
    out: Option<PathBuf>,
}

// --- Main Application Entry ---

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Ask(args) => handle_ask(&args)?,
        Commands::Check(args) => handle_check(&args).await?,
        Commands::Summary(args) => handle_summary(&args).await?,
        Commands::Export(args) => handle_export(&args).await?,
    }

    Ok(())
}

// --- Command Handlers ---

fn handle_ask(args: &AskArgs) -> Result<()> {
    let started = Instant::now();
    let reply = respond(&args.message, args.hierarchy, args.formality);
    let metadata = ReplyMetadata::new(
        &args.message,
        &reply,
        args.hierarchy,
        args.formality,
        started.elapsed(),
    );

    println!("{}", reply.text);
    println!();
    println!("{}", serde_json::to_string_pretty(&metadata)?);
    Ok(())
}

async fn handle_check(args: &ServerArgs) -> Result<()> {
    let client = ApiClient::new(&args.url);
    info!("Running validation scenarios against {}", client.base_url());

    let report = run_check(&client).await?;
    println!("{report}");

    if report.failed() > 0 {
        bail!(
            "{} of {} scenarios failed",
            report.failed(),
            report.total()
        );
    }
    Ok(())
}

async fn handle_summary(args: &ServerArgs) -> Result<()> {
    let client = ApiClient::new(&args.url);
    let summary = client.research_summary().await?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

async fn handle_export(args: &ExportArgs) -> Result<()> {
    let client = ApiClient::new(&args.server.url);
    let export = client.export(args.kind).await?;

    let out = match &args.out {
        Some(path) => path.clone(),
        None => PathBuf::from(
            export
                .file_name
                .unwrap_or_else(|| args.kind.download_name(Utc::now().date_naive())),
        ),
    };
    tokio::fs::write(&out, serde_json::to_string_pretty(&export.data)?).await?;

    println!("Saved {} export to {}", args.kind, out.display());
    Ok(())
}
