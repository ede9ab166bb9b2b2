//! Yo Core
//!
//! Coordination layer: owns the store service, routes submitted text to the
//! command interpreter or the resolver, and reports results to the
//! notification, navigation and suggestion ports.

mod config;
mod error;
mod launcher;
mod notices;
mod ports;

pub use config::Config;
pub use error::CoreError;
pub use launcher::{Launcher, Outcome};
pub use notices::Notice;
pub use ports::{Collaborators, Event, Navigator, Notifier, Recorder, SuggestionSink};

// Re-export mapping components
pub use yo_mappings::{
    default_mappings, normalize_url, ClearScope, Command, CommandError, CommandOutcome, Entry,
    MappingError, MappingStore, Mappings, MemoryStore, SqliteStore, StoreHandle,
};
pub use yo_storage::{Database, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging. Output goes to stderr so stdout stays clean for URLs.
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
