//! kotoba-drill: study loop in the terminal.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use kotoba_core::{
    Heartbeat, KakasiTransliterator, SessionFingerprint, Sha256Fingerprint, StudyStats, LIVENESS_WINDOW,
};
use kotoba_server::config::ServerConfig;
use kotoba_server::AppState;
use rand::seq::IteratorRandom;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

#[derive(Parser)]
#[command(name = "kotoba-drill", version, about = "Vocabulary drill in the terminal")]
struct Cli {
    /// Dictionary name or file (defaults to the catalog default)
    #[arg(long)]
    dict: Option<String>,

    /// Dictionary catalog file
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Base directory for relative dictionary paths
    #[arg(long, default_value = "dictionaries")]
    dictionary_dir: PathBuf,

    /// Hide the reading hint
    #[arg(long)]
    hide_reading: bool,

    /// Hide the romanization hint
    #[arg(long)]
    hide_romaji: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = ServerConfig {
        catalog_path: cli.config,
        dictionary_dir: cli.dictionary_dir,
        ..ServerConfig::default()
    };

    let state = AppState::new(&config, Arc::new(KakasiTransliterator::new()));
    let loaded = state.dictionaries.load(cli.dict.as_deref()).await?;

    let user = std::env::var("USER").unwrap_or_default();
    let session_id = Sha256Fingerprint.session_id("local", &user);
    let heartbeat = Heartbeat::spawn(state.presence.clone(), session_id, LIVENESS_WINDOW / 2);

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stats = StudyStats::default();

    stdout
        .write_all(format!("{} ({} words). Empty line to quit.\n", loaded.name, loaded.dictionary.len()).as_bytes())
        .await?;

    loop {
        let Some(entry) = loaded.dictionary.entries().choose(&mut rand::thread_rng()).cloned() else {
            break;
        };

        let mut prompt = format!("\n{}", entry.surface);
        if !cli.hide_reading {
            prompt.push_str(&format!("  [{}]", entry.reading));
        }
        if !cli.hide_romaji {
            prompt.push_str(&format!("  ({})", entry.romanization));
        }
        prompt.push_str(&format!("\n{}\n> ", entry.meaning));
        stdout.write_all(prompt.as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            break;
        }

        let correct = state.matcher.is_equivalent(&line, &entry);
        stats.record(correct);

        let verdict = if correct {
            "Correct!".to_string()
        } else {
            format!("Wrong: {} / {}", entry.reading, entry.romanization)
        };
        stdout
            .write_all(
                format!(
                    "{}  (correct {}, wrong {}, online {})\n",
                    verdict,
                    stats.correct,
                    stats.wrong,
                    state.presence.active_count()
                )
                .as_bytes(),
            )
            .await?;
    }

    heartbeat.stop().await;

    stdout
        .write_all(
            format!(
                "\n{} answered, {:.0}% correct\n",
                stats.total(),
                stats.accuracy() * 100.0
            )
            .as_bytes(),
        )
        .await?;

    Ok(())
}
