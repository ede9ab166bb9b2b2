//! Executes parsed commands against the store

use url::Url;

use crate::command::{ClearScope, Command, CommandError};
use crate::entry::{default_mappings, Entry, Mappings};
use crate::store::StoreHandle;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// `set` stored `keyword` → `url`; `raw` is the URL as typed
    Mapped {
        keyword: String,
        url: String,
        raw: String,
    },
    Cleared,
    /// `clear` with a scope other than `all`
    ClearIgnored(String),
    /// The default table was (re)loaded with this many entries
    Seeded(usize),
}

/// Result of handing raw text to the interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Executed(CommandOutcome),
    Illegal(CommandError),
}

#[derive(Clone)]
pub struct Interpreter {
    store: StoreHandle,
}

impl Interpreter {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    /// Parse and execute `text`. Text that isn't a legal command is
    /// reported back and otherwise dropped.
    pub async fn run(&self, text: &str) -> Result<Dispatch> {
        match Command::parse(text) {
            Ok(command) => Ok(Dispatch::Executed(self.execute(command).await?)),
            Err(err) => {
                tracing::debug!(input = text, error = %err, "Dropping illegal command");
                Ok(Dispatch::Illegal(err))
            }
        }
    }

    pub async fn execute(&self, command: Command) -> Result<CommandOutcome> {
        match command {
            Command::Set { keyword, url } => self.set(keyword, url).await,
            Command::Clear { scope } => self.clear(scope).await,
            Command::Init => self.seed().await.map(CommandOutcome::Seeded),
        }
    }

    async fn set(&self, keyword: String, raw: String) -> Result<CommandOutcome> {
        let entry = Entry::new(&raw);
        if let Err(e) = Url::parse(&entry.url) {
            tracing::warn!(keyword = %keyword, url = %entry.url, error = %e, "Storing a URL that does not parse");
        }

        let url = entry.url.clone();
        let mut update = Mappings::new();
        update.insert(keyword.clone(), entry);

        {
            let _guard = self.store.exclusive().await;
            self.store.write_all(update).await?;
        }

        tracing::info!(keyword = %keyword, url = %url, "Set mapping");

        Ok(CommandOutcome::Mapped { keyword, url, raw })
    }

    async fn clear(&self, scope: ClearScope) -> Result<CommandOutcome> {
        match scope {
            ClearScope::All => {
                let _guard = self.store.exclusive().await;
                self.store.clear().await?;
                tracing::info!("Cleared all mappings");
                Ok(CommandOutcome::Cleared)
            }
            ClearScope::Other(scope) => {
                tracing::debug!(scope = %scope, "Ignoring clear with unknown scope");
                Ok(CommandOutcome::ClearIgnored(scope))
            }
        }
    }

    /// Merge the default table into the store, resetting those keywords.
    /// Other keywords are left alone.
    pub async fn seed(&self) -> Result<usize> {
        let seeds = default_mappings();
        let count = seeds.len();

        let _guard = self.store.exclusive().await;
        self.store.write_all(seeds).await?;

        tracing::info!(entries = count, "Seeded default mappings");
        Ok(count)
    }

    /// Seed only when the store is observed empty. A failed read is an
    /// error, not an empty store, so it never triggers seeding.
    pub async fn seed_if_empty(&self) -> Result<bool> {
        let _guard = self.store.exclusive().await;

        if !self.store.read_all().await?.is_empty() {
            return Ok(false);
        }

        let seeds = default_mappings();
        let count = seeds.len();
        self.store.write_all(seeds).await?;

        tracing::info!(entries = count, "Seeded empty store");
        Ok(true)
    }
}
