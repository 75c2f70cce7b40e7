//! Atomic snapshot persistence for the ledger.
//!
//! The entire ledger is stored as one pretty-printed JSON document
//! mapping player id to record. A commit writes a sibling temp file,
//! flushes it to disk, and renames it over the previous snapshot, so a
//! crash mid-write never leaves a corrupt or partially written snapshot
//! and a reader never observes a half-written file.

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use roshambo_ledger::Ledger;

use crate::error::StoreError;

/// Suffix appended to the snapshot path for the in-flight temp file.
const TMP_SUFFIX: &str = ".tmp";

/// Sibling temp path used for the write-then-rename commit.
///
/// Kept in the same directory as the snapshot so the rename stays on
/// one filesystem and is atomic.
fn tmp_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_owned();
    os.push(TMP_SUFFIX);
    PathBuf::from(os)
}

/// Load the ledger snapshot at `path`.
///
/// Returns `Ok(None)` if no snapshot exists yet.
pub(crate) async fn load(path: &Path) -> Result<Option<Ledger>, StoreError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(StoreError::Io(e)),
    };

    Ok(Some(serde_json::from_slice(&bytes)?))
}

/// Durably commit `ledger` as the snapshot at `path`.
///
/// The previous snapshot stays intact until the final rename; a failure
/// at any earlier step leaves it untouched.
pub(crate) async fn commit(path: &Path, ledger: &Ledger) -> Result<(), StoreError> {
    let bytes = serde_json::to_vec_pretty(ledger)?;
    let tmp = tmp_path(path);

    let mut file = tokio::fs::File::create(&tmp).await?;
    file.write_all(&bytes).await?;
    file.sync_all().await?;
    drop(file);

    tokio::fs::rename(&tmp, path).await?;

    tracing::debug!(
        players = ledger.len(),
        path = %path.display(),
        "Committed ledger snapshot"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tmp_path_is_a_sibling_of_the_snapshot() {
        let tmp = tmp_path(Path::new("/var/lib/roshambo/ledger.json"));
        assert_eq!(tmp, PathBuf::from("/var/lib/roshambo/ledger.json.tmp"));
    }
}
