/// Click wheel simulator - drive the player from the terminal
use clap::{Parser, Subcommand};
use clickwheel_playback::Backends;
use clickwheel_sim::{
    execute, parse_line, Outcome, Runtime, RuntimeHandle, Session, SimConfig, StaticLibrary,
    TracingDisplay, TracingHaptics, DEMO_SCRIPT,
};
use std::{path::PathBuf, sync::Arc};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "clickwheel-sim")]
#[command(about = "Click wheel player simulator", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "CLICKWHEEL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read line commands from stdin
    Run,
    /// Play the built-in scenario
    Demo,
    /// Print the effective configuration as TOML
    PrintConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "clickwheel_sim=info,clickwheel_playback=info,clickwheel_menu=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = SimConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Run => {
            let handle = start(&config)?;
            run_stdin(&handle, &config).await?;
            handle.shutdown().await?;
        }
        Commands::Demo => {
            let handle = start(&config)?;
            run_demo(&handle, &config).await?;
            handle.shutdown().await?;
        }
        Commands::PrintConfig => {
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}

fn start(config: &SimConfig) -> anyhow::Result<RuntimeHandle> {
    let session = Session::new(
        config,
        Backends::silent(),
        Arc::new(TracingHaptics::default()),
        Arc::new(TracingDisplay::default()),
    )?;
    let library = Arc::new(StaticLibrary::from_settings(&config.library));

    tracing::info!(source = ?config.library.source, "Starting simulator");
    Ok(Runtime::spawn(session, library))
}

async fn run_stdin(handle: &RuntimeHandle, config: &SimConfig) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        match execute(handle, &config.wheel, command).await? {
            Outcome::Continue => {}
            Outcome::Show(snapshot) => println!("{snapshot}\n"),
            Outcome::Quit => break,
        }
    }

    Ok(())
}

async fn run_demo(handle: &RuntimeHandle, config: &SimConfig) -> anyhow::Result<()> {
    for line in DEMO_SCRIPT.lines() {
        let Some(command) = parse_line(line)? else {
            continue;
        };
        println!("> {}", line.trim());

        match execute(handle, &config.wheel, command).await? {
            Outcome::Continue => {}
            Outcome::Show(snapshot) => println!("{snapshot}\n"),
            Outcome::Quit => break,
        }
    }

    Ok(())
}
