//! Launcher: the top-level entry point for typed input
//!
//! Submitted text is either a legal command, executed and reported, or a
//! keyword, resolved and navigated to. Commands never fall through to a
//! lookup.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use yo_mappings::{
    suggest, CommandOutcome, Dispatch, Entry, Interpreter, MappingStore, Mappings, MatchKind,
    Resolution, Resolver, SqliteStore, StoreHandle,
};
use yo_storage::Database;

use crate::config::Config;
use crate::notices::Notice;
use crate::ports::Collaborators;
use crate::Result;

const SEEDED_AT_KEY: &str = "seeded_at";

/// What a submission did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Command(CommandOutcome),
    Navigated {
        /// The stored keyword that matched
        keyword: String,
        url: String,
        guessed: bool,
    },
    NotFound(String),
    /// Blank input; nothing happened
    Ignored,
}

pub struct Launcher {
    store: StoreHandle,
    resolver: Resolver,
    interpreter: Interpreter,
    collaborators: Collaborators,
    /// Present when backed by SQLite; holds the settings table
    db: Option<Database>,
    seed_on_first_run: bool,
}

impl Launcher {
    /// Open the SQLite-backed launcher described by `config`.
    pub fn open(config: &Config, collaborators: Collaborators) -> Result<Self> {
        let db = Database::open(&config.database_path)?;
        let store = StoreHandle::new(SqliteStore::new(db.clone()));

        tracing::info!(path = %config.database_path.display(), "Opened mapping store");

        let mut launcher = Self::build(store, collaborators);
        launcher.db = Some(db);
        launcher.seed_on_first_run = config.seed_on_first_run;
        Ok(launcher)
    }

    /// Run on top of any store implementation.
    pub fn with_store(store: Arc<dyn MappingStore>, collaborators: Collaborators) -> Self {
        Self::build(StoreHandle::from_arc(store), collaborators)
    }

    fn build(store: StoreHandle, collaborators: Collaborators) -> Self {
        Self {
            resolver: Resolver::new(store.clone()),
            interpreter: Interpreter::new(store.clone()),
            store,
            collaborators,
            db: None,
            seed_on_first_run: true,
        }
    }

    /// First-run setup: seed the defaults if the store is empty and greet
    /// the user. Returns whether seeding happened.
    pub async fn initialize(&self) -> Result<bool> {
        if !self.seed_on_first_run {
            return Ok(false);
        }

        let seeded = self.interpreter.seed_if_empty().await.inspect_err(|e| {
            tracing::error!(error = %e, "Could not check the store for first-run seeding");
        })?;

        if seeded {
            self.record_seeded_at().await?;
            self.send(Notice::welcome());
        }

        tracing::info!(seeded, "Launcher initialized");
        Ok(seeded)
    }

    /// Handle submitted text.
    pub async fn submit(&self, text: &str) -> Result<Outcome> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Outcome::Ignored);
        }

        self.dispatch(text).await.inspect_err(|e| {
            tracing::error!(input = text, error = %e, "Submission failed");
        })
    }

    async fn dispatch(&self, text: &str) -> Result<Outcome> {
        if let Dispatch::Executed(outcome) = self.interpreter.run(text).await? {
            self.announce(&outcome).await?;
            return Ok(Outcome::Command(outcome));
        }

        match self.resolver.resolve(text).await? {
            Resolution::Found(hit) => {
                let guessed = hit.kind == MatchKind::Guessed;
                if guessed {
                    self.send(Notice::guessed(text, &hit.keyword));
                }
                self.collaborators.navigator.navigate(&hit.entry.url);

                Ok(Outcome::Navigated {
                    keyword: hit.keyword,
                    url: hit.entry.url,
                    guessed,
                })
            }
            Resolution::NotFound => {
                self.send(Notice::not_found(text));
                Ok(Outcome::NotFound(text.to_string()))
            }
        }
    }

    async fn announce(&self, outcome: &CommandOutcome) -> Result<()> {
        match outcome {
            CommandOutcome::Mapped { keyword, raw, .. } => self.send(Notice::mapped(keyword, raw)),
            CommandOutcome::Cleared => self.send(Notice::cleared()),
            CommandOutcome::ClearIgnored(_) => {}
            CommandOutcome::Seeded(_) => {
                self.record_seeded_at().await?;
                self.send(Notice::welcome());
            }
        }
        Ok(())
    }

    /// Preview for in-progress input. Never touches counts.
    pub async fn input_changed(&self, text: &str) -> Result<Option<String>> {
        let suggestion = suggest(&self.store, text).await?;
        if let Some(keyword) = &suggestion {
            self.collaborators.suggestions.set_suggestion(keyword);
        }
        Ok(suggestion)
    }

    /// Snapshot of every mapping in keyword order.
    pub async fn mappings(&self) -> Result<Mappings> {
        Ok(self.store.read_all().await?)
    }

    /// Mappings by usage, most used first; ties in keyword order.
    pub async fn ranked(&self) -> Result<Vec<(String, Entry)>> {
        let mut ranked: Vec<(String, Entry)> = self.mappings().await?.into_iter().collect();
        ranked.sort_by(|a, b| b.1.count.cmp(&a.1.count));
        Ok(ranked)
    }

    /// When the default mappings were last loaded, if known.
    pub fn seeded_at(&self) -> Result<Option<DateTime<Utc>>> {
        let Some(db) = &self.db else {
            return Ok(None);
        };

        Ok(db
            .get_setting(SEEDED_AT_KEY)?
            .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
            .map(|dt| dt.with_timezone(&Utc)))
    }

    async fn record_seeded_at(&self) -> Result<()> {
        if let Some(db) = self.db.clone() {
            let now = Utc::now().to_rfc3339();
            tokio::task::spawn_blocking(move || db.set_setting(SEEDED_AT_KEY, &now)).await??;
        }
        Ok(())
    }

    /// Wait for any in-flight mutation, then release the store.
    pub async fn shutdown(self) -> Result<()> {
        {
            let _guard = self.store.exclusive().await;
        }
        tracing::info!("Launcher shut down");
        Ok(())
    }

    fn send(&self, notice: Notice) {
        self.collaborators
            .notifier
            .notify(notice.title, &notice.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{Event, Recorder};
    use yo_mappings::{default_mappings, MemoryStore};

    fn setup(mappings: Mappings) -> (Arc<MemoryStore>, Arc<Recorder>, Launcher) {
        let store = Arc::new(MemoryStore::with_mappings(mappings));
        let recorder = Arc::new(Recorder::new());
        let launcher =
            Launcher::with_store(store.clone(), Collaborators::from_one(recorder.clone()));
        (store, recorder, launcher)
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let (store, recorder, launcher) = setup(default_mappings());

        assert_eq!(launcher.submit("   ").await.unwrap(), Outcome::Ignored);
        assert!(recorder.events().is_empty());
        assert_eq!(store.snapshot(), default_mappings());
    }

    #[tokio::test]
    async fn test_exact_hit_navigates_without_guess_notice() {
        let (_, recorder, launcher) = setup(default_mappings());

        let outcome = launcher.submit("mail").await.unwrap();
        assert_eq!(
            outcome,
            Outcome::Navigated {
                keyword: "mail".to_string(),
                url: "https://mail.google.com/mail/u/0/".to_string(),
                guessed: false,
            }
        );
        assert_eq!(
            recorder.events(),
            vec![Event::Navigated("https://mail.google.com/mail/u/0/".to_string())]
        );
    }

    #[tokio::test]
    async fn test_clear_with_other_scope_is_silent() {
        let (store, recorder, launcher) = setup(default_mappings());

        let outcome = launcher.submit("clear newdoc").await.unwrap();
        assert_eq!(
            outcome,
            Outcome::Command(CommandOutcome::ClearIgnored("newdoc".to_string()))
        );
        assert!(recorder.events().is_empty());
        assert_eq!(store.snapshot().len(), 4);
    }

    #[tokio::test]
    async fn test_illegal_command_falls_back_to_lookup() {
        let mut mappings = default_mappings();
        mappings.insert("set".to_string(), Entry::new("https://settings.example"));
        let (_, recorder, launcher) = setup(mappings);

        // "set" alone has the wrong arity, so it is looked up as a keyword
        let outcome = launcher.submit("set").await.unwrap();
        assert!(matches!(outcome, Outcome::Navigated { guessed: false, .. }));
        assert_eq!(recorder.navigations(), vec!["https://settings.example"]);
    }

    #[tokio::test]
    async fn test_legal_command_never_looks_up() {
        let mut mappings = default_mappings();
        mappings.insert("init".to_string(), Entry::new("https://init.example"));
        mappings.insert("clear".to_string(), Entry::new("https://clear.example"));
        let (store, recorder, launcher) = setup(mappings);

        // Legal arity: runs as a command even though a keyword matches
        let outcome = launcher.submit("init").await.unwrap();
        assert_eq!(outcome, Outcome::Command(CommandOutcome::Seeded(4)));
        assert!(recorder.navigations().is_empty());
        assert_eq!(store.snapshot()["init"].count, 1);

        // Wrong arity: dropped as a command, resolved as a keyword
        let outcome = launcher.submit("clear").await.unwrap();
        assert_eq!(
            outcome,
            Outcome::Navigated {
                keyword: "clear".to_string(),
                url: "https://clear.example".to_string(),
                guessed: false,
            }
        );
        assert_eq!(store.snapshot().len(), 6);
    }

    #[tokio::test]
    async fn test_store_failure_surfaces_as_error_without_notices() {
        let (store, recorder, launcher) = setup(default_mappings());
        store.set_unavailable(true);

        assert!(launcher.submit("mail").await.is_err());
        assert!(launcher.input_changed("ma").await.is_err());
        assert!(recorder.events().is_empty());
    }

    #[tokio::test]
    async fn test_ranked_orders_by_usage() {
        let (_, _, launcher) = setup(default_mappings());
        launcher.submit("newsheet").await.unwrap();
        launcher.submit("newsheet").await.unwrap();
        launcher.submit("mail").await.unwrap();

        let order: Vec<String> = launcher
            .ranked()
            .await
            .unwrap()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(order, ["newsheet", "mail", "newdoc", "newslides"]);
    }

    #[tokio::test]
    async fn test_in_memory_launcher_has_no_seed_timestamp() {
        let (_, _, launcher) = setup(Mappings::new());
        assert!(launcher.initialize().await.unwrap());
        assert!(launcher.seeded_at().unwrap().is_none());
    }
}
