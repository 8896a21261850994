use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mvp_board::board::messages::{ResetBoard, UploadLog};
use mvp_board::board::mvp_board::podium_if_uploaded;
use mvp_board::config::BoardConfig;
use mvp_board::export::export_error::ExportError;
use mvp_board::export::podium_exporter::{export_podium, DEFAULT_EXPORT_FILE};
use mvp_board::leaderboard::podium_renderer::{render, NO_DATA_MESSAGE};
use mvp_board::MvpBoard;

use actix::Addr;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Accumulate match logs into an MVP leaderboard
#[derive(Parser)]
#[command(name = "mvp-board")]
#[command(about = "Accumulate match logs into an MVP leaderboard", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory of the accumulated players (overrides MVP_STORE_DIR)
    #[arg(long, global = true)]
    store_dir: Option<PathBuf>,

    /// Threads used to classify log lines (overrides MVP_PARSE_THREADS)
    #[arg(long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add one or more match logs to the accumulated players, in order
    Upload {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Show the MVP podium
    Show,

    /// Delete every accumulated player
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Write the MVP podium to a JSON file
    Export {
        #[arg(default_value = DEFAULT_EXPORT_FILE)]
        out: PathBuf,
    },
}

#[actix_rt::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = BoardConfig::from_env().with_overrides(cli.store_dir, cli.threads);
    let board = MvpBoard::open(&config).context("failed to open the MVP store")?;

    match cli.command {
        Command::Upload { files } => upload_files(&board, files).await,
        Command::Show => show(&board).await,
        Command::Reset { yes } => reset(&board, yes).await,
        Command::Export { out } => export(&board, out).await,
    }
}

/// Reads and uploads each file in turn.
///
/// A file that cannot be read is logged and skipped; the store is left as it
/// was for that file.
async fn upload_files(board: &Addr<MvpBoard>, files: Vec<PathBuf>) -> Result<()> {
    for path in files {
        tracing::info!("Selected file: {}", path.display());

        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(err) => {
                tracing::error!("File read failed for {}: {}", path.display(), err);
                continue;
            }
        };

        board
            .send(UploadLog {
                source: path.display().to_string(),
                text,
            })
            .await?
            .with_context(|| format!("failed to upload {}", path.display()))?;
        println!("File uploaded successfully ✓");
    }
    Ok(())
}

async fn show(board: &Addr<MvpBoard>) -> Result<()> {
    let podium = podium_if_uploaded(board).await?.and_then(|snapshot| snapshot.podium);
    print!("{}", render(podium.as_ref()));
    Ok(())
}

async fn reset(board: &Addr<MvpBoard>, yes: bool) -> Result<()> {
    if !yes && !confirm("Reset MVP data?")? {
        println!("Reset cancelled");
        return Ok(());
    }
    board.send(ResetBoard).await??;
    println!("MVP data reset");
    Ok(())
}

async fn export(board: &Addr<MvpBoard>, out: PathBuf) -> Result<()> {
    let snapshot = match podium_if_uploaded(board).await? {
        Some(snapshot) => snapshot,
        None => {
            println!("{NO_DATA_MESSAGE}");
            return Ok(());
        }
    };
    match export_podium(&out, snapshot.podium.as_ref(), snapshot.total_players) {
        Ok(()) => println!("Podium exported to {}", out.display()),
        Err(ExportError::NoData) => println!("{NO_DATA_MESSAGE}"),
        Err(err) => return Err(err).context("failed to export podium"),
    }
    Ok(())
}

/// Asks a yes/no question on stdin. Anything but `y`/`yes` is a no.
fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
