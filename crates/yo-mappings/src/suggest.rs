//! Completion preview for in-progress input

use crate::resolver::first_prefix_match;
use crate::store::StoreHandle;
use crate::Result;

/// The keyword the current input would complete to, if any. Read-only:
/// never bumps a count or writes to the store.
pub async fn suggest(store: &StoreHandle, text: &str) -> Result<Option<String>> {
    let mappings = store.read_all().await?;
    Ok(first_prefix_match(&mappings, text).map(str::to_string))
}
