//! `yo`: resolve short keywords to URLs from the terminal

mod cli;
mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::io::{self, BufRead};
use std::sync::Arc;

use yo_core::{Collaborators, Config, Entry, Launcher};

use crate::cli::{Action, Cli};
use crate::terminal::Terminal;

#[derive(Serialize)]
struct Listed<'a> {
    keyword: &'a str,
    #[serde(flatten)]
    entry: &'a Entry,
}

#[tokio::main]
async fn main() -> Result<()> {
    yo_core::init_logging();

    let cli = Cli::parse();

    let mut config = Config::default();
    if let Some(db) = cli.db {
        config.database_path = db;
    }
    if cli.no_seed {
        config.seed_on_first_run = false;
    }

    if let Action::Config = cli.command {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let launcher = Launcher::open(&config, Collaborators::from_one(Arc::new(Terminal)))
        .with_context(|| format!("Failed to open {}", config.database_path.display()))?;
    launcher
        .initialize()
        .await
        .context("Failed to initialize mappings")?;

    run(&launcher, cli.command).await?;

    launcher.shutdown().await?;
    Ok(())
}

async fn run(launcher: &Launcher, action: Action) -> Result<()> {
    match action {
        Action::Go { text } => {
            launcher.submit(&text.join(" ")).await?;
        }
        Action::Suggest { text } => {
            launcher.input_changed(&text.join(" ")).await?;
        }
        Action::List { ranked, json } => {
            let rows = if ranked {
                launcher.ranked().await?
            } else {
                launcher.mappings().await?.into_iter().collect()
            };
            print_rows(&rows, json)?;
        }
        Action::Shell => {
            let failed = run_shell(launcher, io::stdin().lock()).await?;
            if failed > 0 {
                tracing::warn!(failed, "Some submissions failed");
            }
        }
        Action::Config => {}
    }
    Ok(())
}

/// Submit each input line; returns how many submissions failed. Failures
/// are already logged by the launcher, so the loop just keeps reading.
async fn run_shell<R: BufRead>(launcher: &Launcher, input: R) -> Result<usize> {
    let mut failed = 0;
    for line in input.lines() {
        let line = line.context("Failed to read stdin")?;
        if launcher.submit(&line).await.is_err() {
            failed += 1;
        }
    }
    Ok(failed)
}

fn print_rows(rows: &[(String, Entry)], json: bool) -> Result<()> {
    if json {
        let listed: Vec<Listed> = rows
            .iter()
            .map(|(keyword, entry)| Listed { keyword, entry })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listed)?);
        return Ok(());
    }

    let width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (keyword, entry) in rows {
        println!("{keyword:<width$}  {:>5}  {}", entry.count, entry.url);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use yo_core::{MemoryStore, Recorder};

    fn setup() -> (Arc<MemoryStore>, Arc<Recorder>, Launcher) {
        let store = Arc::new(MemoryStore::new());
        let recorder = Arc::new(Recorder::new());
        let launcher =
            Launcher::with_store(store.clone(), Collaborators::from_one(recorder.clone()));
        (store, recorder, launcher)
    }

    #[tokio::test]
    async fn test_shell_submits_every_line() {
        let (store, recorder, launcher) = setup();
        let input = "set wiki en.wikipedia.org\n\nwi\n".as_bytes();

        assert_eq!(run_shell(&launcher, input).await.unwrap(), 0);
        assert_eq!(store.snapshot()["wiki"].count, 2);
        assert_eq!(recorder.navigations(), vec!["http://en.wikipedia.org"]);
    }

    #[tokio::test]
    async fn test_shell_keeps_going_after_failures() {
        let (store, recorder, launcher) = setup();
        store.set_unavailable(true);

        let input = "mail\nset a b\n".as_bytes();
        assert_eq!(run_shell(&launcher, input).await.unwrap(), 2);
        assert!(recorder.events().is_empty());
    }
}
