//! Yo Mappings
//!
//! Short keywords resolve to URLs:
//!   1. Exact keyword → that entry
//!   2. Otherwise the first keyword (lexicographic) the input is a prefix of
//!   3. `set`, `clear` and `init` manage the table instead of looking up
//!
//! Every resolution bumps the matched entry's usage count.

mod command;
mod entry;
mod error;
mod interpreter;
mod resolver;
mod sqlite;
mod store;
mod suggest;

pub use command::{ClearScope, Command, CommandError};
pub use entry::{default_mappings, normalize_url, Entry, Mappings, DEFAULT_SCHEME};
pub use error::MappingError;
pub use interpreter::{CommandOutcome, Dispatch, Interpreter};
pub use resolver::{first_prefix_match, Hit, MatchKind, Resolution, Resolver};
pub use sqlite::SqliteStore;
pub use store::{MappingStore, MemoryStore, StoreHandle};
pub use suggest::suggest;

pub type Result<T> = std::result::Result<T, MappingError>;
