//! File collaborator: the read-modify-write cycle around the pure patchers.
//!
//! The core never touches a file handle; this module resolves the target,
//! reads it (a missing file degrades to an empty string), hands the text to
//! a patch closure, and reports or writes back the outcome.

use std::path::Path;

use ngsmith_core::patch::Patched;
use ngsmith_core::prelude::*;

/// Read a file's contents, degrading a missing or unreadable file to an
/// empty string.
pub fn read_or_empty(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!("failed to read {}: {}", path.display(), e);
            String::new()
        }
    }
}

/// Run one read-patch-report/write cycle against `path`.
///
/// Without `write` the resulting text goes to stdout and the outcome to
/// stderr. With `write` the file is rewritten only when the patch applied;
/// a file that was missing and received no patch is never created.
pub fn apply_patch(path: &Path, write: bool, patch: impl FnOnce(&str) -> Patched) -> Result<()> {
    let existed = path.exists();
    let original = read_or_empty(path);
    let outcome = patch(&original);

    if !write {
        print!("{}", outcome.text);
        eprintln!(
            "{}: {}",
            if outcome.applied { "patched" } else { "unchanged" },
            path.display()
        );
        return Ok(());
    }

    if outcome.applied {
        std::fs::write(path, &outcome.text)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("patched {}", path.display());
        eprintln!("patched: {}", path.display());
    } else if existed {
        eprintln!("unchanged: {}", path.display());
    } else {
        eprintln!("skipped: {} (missing, nothing to apply)", path.display());
    }
    Ok(())
}
