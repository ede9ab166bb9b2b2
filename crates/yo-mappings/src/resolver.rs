//! Keyword resolution
//!
//! Exact keyword first, then the first keyword (in table order) that the
//! input is a prefix of. A hit bumps the matched entry's count and writes it
//! back; a miss touches nothing.

use crate::entry::{Entry, Mappings};
use crate::store::StoreHandle;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The input was a stored keyword verbatim
    Exact,
    /// The input was only a prefix of the stored keyword
    Guessed,
}

/// A successful resolution. `entry` already carries the bumped count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub keyword: String,
    pub entry: Entry,
    pub kind: MatchKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(Hit),
    NotFound,
}

/// First keyword in table order that `text` is a prefix of.
///
/// An empty `text` is a prefix of everything and so matches the first key.
pub fn first_prefix_match<'a>(mappings: &'a Mappings, text: &str) -> Option<&'a str> {
    mappings
        .keys()
        .map(String::as_str)
        .find(|keyword| keyword.starts_with(text))
}

#[derive(Clone)]
pub struct Resolver {
    store: StoreHandle,
}

impl Resolver {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    /// Resolve `keyword` and record the use.
    ///
    /// Callers that don't want an empty keyword to guess the first entry must
    /// filter it out before calling.
    pub async fn resolve(&self, keyword: &str) -> Result<Resolution> {
        let _guard = self.store.exclusive().await;

        let mappings = self.store.read_all().await?;

        let (matched, kind) = if mappings.contains_key(keyword) {
            (keyword.to_string(), MatchKind::Exact)
        } else {
            match first_prefix_match(&mappings, keyword) {
                Some(found) => (found.to_string(), MatchKind::Guessed),
                None => {
                    tracing::debug!(keyword, "No mapping matched");
                    return Ok(Resolution::NotFound);
                }
            }
        };

        // The snapshot is ours; the bump only counts once it is written back.
        let entry = mappings[&matched].bumped();
        let mut update = Mappings::new();
        update.insert(matched.clone(), entry.clone());
        self.store.write_all(update).await?;

        tracing::info!(
            keyword,
            matched = %matched,
            count = entry.count,
            guessed = kind == MatchKind::Guessed,
            "Resolved mapping"
        );

        Ok(Resolution::Found(Hit {
            keyword: matched,
            entry,
            kind,
        }))
    }
}
