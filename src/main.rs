//! # HacknHost Assistant
//!
//! Help-desk chatbot for the HacknHost events platform.
//!
//! Usage:
//!   hacknhost serve                         # Start the chat gateway (default port 3000)
//!   hacknhost serve --port 8080             # Custom port
//!   hacknhost ask "how do i submit"         # One-off answer
//!   hacknhost ask --offline --explain "..." # Offline scorer, show the matching stage
//!   hacknhost chat                          # Interactive session
//!   hacknhost init                          # Write the default config

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hacknhost_chat::{Matcher, Stage, strategy_for};
use hacknhost_core::config::{HacknHostConfig, ScoringKind};
use hacknhost_knowledge::KnowledgeBase;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::AsyncBufReadExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hacknhost",
    version,
    about = "🤖 HacknHost Assistant: FAQ chatbot for events and hackathons"
)]
struct Cli {
    /// Config file (defaults to $HACKNHOST_CONFIG or ~/.hacknhost/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP chat gateway
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,
        /// Port
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Answer a single question
    Ask {
        /// Question text
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
        /// Use the offline scorer
        #[arg(long)]
        offline: bool,
        /// Print which stage produced the answer
        #[arg(long)]
        explain: bool,
    },
    /// Interactive chat on stdin (exit with "exit", "quit" or Ctrl+D)
    Chat {
        /// Use the offline scorer
        #[arg(long)]
        offline: bool,
    },
    /// Write the default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn config_path(cli: &Cli) -> PathBuf {
    cli.config.clone().unwrap_or_else(HacknHostConfig::default_path)
}

/// An explicit `--config` file must exist; the default location may be absent.
fn load_config(explicit: Option<&Path>) -> Result<HacknHostConfig> {
    match explicit {
        Some(path) => HacknHostConfig::load_from(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => HacknHostConfig::load().context("loading default config"),
    }
}

fn build_matcher(config: &HacknHostConfig, offline: bool) -> Result<Matcher> {
    let knowledge = Arc::new(KnowledgeBase::from_config(&config.knowledge)?);
    let scoring = if offline { ScoringKind::Offline } else { config.chat.scoring };
    Ok(Matcher::with_scorer(knowledge, strategy_for(scoring)))
}

fn describe(stage: &Stage) -> String {
    match stage {
        Stage::Exact => "exact question match".into(),
        Stage::Template => "category template".into(),
        Stage::Similarity { score } => format!("similarity {score:.3}"),
        Stage::Fallback => "fallback".into(),
    }
}

async fn run_chat(matcher: &Matcher) -> Result<()> {
    println!(
        "🤖 HacknHost Assistant ({} entries, {} scorer)",
        matcher.knowledge().len(),
        matcher.scorer_name()
    );
    println!("   Type your question, or \"exit\" to quit.\n");

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("you> ");
        std::io::Write::flush(&mut std::io::stdout())?;
        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line.to_lowercase().as_str(), "exit" | "quit") {
            break;
        }
        println!("bot> {}\n", matcher.resolve(line));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "hacknhost=debug,hacknhost_core=debug,hacknhost_chat=debug,hacknhost_gateway=debug,\
hacknhost_knowledge=debug,tower_http=debug"
    } else {
        "hacknhost=info,hacknhost_gateway=info,hacknhost_knowledge=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let path = config_path(&cli);

    match cli.command {
        Command::Serve { host, port } => {
            let mut config = load_config(cli.config.as_deref())?;
            if let Some(host) = host {
                config.gateway.host = host;
            }
            if let Some(port) = port {
                config.gateway.port = port;
            }
            println!("🤖 HacknHost Assistant v{}", env!("CARGO_PKG_VERSION"));
            println!(
                "   🌐 Chat API: http://{}:{}/api/chat",
                config.gateway.host, config.gateway.port
            );
            println!("   ⚙️  Config:   {}", path.display());
            println!("   🧮 Scorer:   {}", config.chat.scoring);
            println!();
            hacknhost_gateway::start(&config).await?;
        }
        Command::Ask { message, offline, explain } => {
            let config = load_config(cli.config.as_deref())?;
            let matcher = build_matcher(&config, offline)?;
            let resolution = matcher.explain(&message.join(" "));
            println!("{}", resolution.answer);
            if explain {
                let category = resolution
                    .category
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "none".into());
                println!(
                    "\n[stage: {}, category: {}, scorer: {}]",
                    describe(&resolution.stage),
                    category,
                    matcher.scorer_name()
                );
            }
        }
        Command::Chat { offline } => {
            let config = load_config(cli.config.as_deref())?;
            let matcher = build_matcher(&config, offline)?;
            run_chat(&matcher).await?;
        }
        Command::Init { force } => {
            if path.exists() && !force {
                println!(
                    "⚠️  Config already exists at {} (use --force to overwrite)",
                    path.display()
                );
                return Ok(());
            }
            HacknHostConfig::default().save_to(&path)?;
            println!("✅ Default config written to {}", path.display());
        }
    }

    Ok(())
}
