use std::fs::{self, FileType};
use std::io;
use std::path::Path;
use std::time::Duration;
use walkdir::WalkDir;
use crate::utils::error::{Result, ScaffoldError};

#[cfg(windows)]
use std::os::windows::fs::FileTypeExt;

/// Check whether `path` can be scaffolded into without losing anything.
///
/// True when the path does not exist or is a directory with no entries.
/// Only the immediate listing is inspected.
pub fn can_safely_overwrite(path: &Path) -> Result<bool> {
    match fs::read_dir(path) {
        Ok(mut entries) => Ok(entries.next().is_none()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(true),
        Err(e) => Err(ScaffoldError::Io(e)),
    }
}

/// Walk `dir` depth-first, calling `on_dir` for each subdirectory after all of
/// its children and `on_leaf` for everything else.
///
/// Symbolic links are reported as leaves and never descended into. `dir`
/// itself is not reported.
pub fn post_order_traverse<D, L>(dir: &Path, on_dir: &mut D, on_leaf: &mut L) -> io::Result<()>
where
    D: FnMut(&Path) -> io::Result<()>,
    L: FnMut(&Path, FileType) -> io::Result<()>,
{
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .contents_first(true)
        .follow_links(false)
    {
        let entry = entry.map_err(io::Error::from)?;
        // Without follow_links this is the type of the link itself
        let file_type = entry.file_type();

        if file_type.is_dir() {
            on_dir(entry.path())?;
        } else {
            on_leaf(entry.path(), file_type)?;
        }
    }
    Ok(())
}

/// Delete everything inside `path`, leaving `path` itself in place.
///
/// Returns how many entries were removed, so a second call on the same
/// directory returns 0. Stops at the first failed deletion; entries removed
/// before the failure stay removed.
pub fn empty_directory(path: &Path) -> Result<usize> {
    let mut removed = 0;
    let mut remove_dir = |dir: &Path| -> io::Result<()> {
        fs::remove_dir(dir)?;
        removed += 1;
        Ok(())
    };
    let mut removed_leaves = 0;
    let mut remove_leaf = |leaf: &Path, file_type: FileType| -> io::Result<()> {
        remove_leaf_entry(leaf, file_type)?;
        removed_leaves += 1;
        Ok(())
    };

    post_order_traverse(path, &mut remove_dir, &mut remove_leaf)?;
    tracing::debug!(
        "Emptied {} ({} directories, {} files)",
        path.display(),
        removed,
        removed_leaves
    );
    Ok(removed + removed_leaves)
}

/// Delete `path` and everything below it. Missing paths are not an error.
///
/// Returns whether anything was there to remove.
pub fn remove_directory(path: &Path) -> Result<bool> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(ScaffoldError::Io(e)),
    };

    if metadata.is_dir() {
        empty_directory(path)?;
        fs::remove_dir(path)?;
    } else {
        remove_leaf_entry(path, metadata.file_type())?;
    }
    Ok(true)
}

fn remove_leaf_entry(path: &Path, file_type: FileType) -> io::Result<()> {
    // Directory symlinks on Windows are unlinked with remove_dir
    #[cfg(windows)]
    {
        if file_type.is_symlink_dir() {
            return fs::remove_dir(path);
        }
    }
    #[cfg(not(windows))]
    let _ = file_type;

    fs::remove_file(path)
}

/// Whether `path` holds anything besides the VCS metadata directory
pub fn is_populated(path: &Path, vcs_metadata_dir: &str) -> bool {
    fs::read_dir(path).is_ok_and(|entries| {
        entries
            .filter_map(std::result::Result::ok)
            .any(|entry| entry.file_name() != vcs_metadata_dir)
    })
}

/// Poll `path` until [`is_populated`] holds, checking at most `max_attempts`
/// times with `interval` between checks.
///
/// Returns the attempt on which population was observed.
pub async fn wait_until_populated(
    path: &Path,
    vcs_metadata_dir: &str,
    interval: Duration,
    max_attempts: u32,
) -> Result<u32> {
    let max_attempts = max_attempts.max(1);

    for attempt in 1..=max_attempts {
        if is_populated(path, vcs_metadata_dir) {
            return Ok(attempt);
        }
        tracing::debug!(
            "Waiting for {} to be populated (check {}/{})",
            path.display(),
            attempt,
            max_attempts
        );
        if attempt < max_attempts {
            tokio::time::sleep(interval).await;
        }
    }

    Err(ScaffoldError::PopulationTimeout {
        path: path.to_path_buf(),
        attempts: max_attempts,
    })
}
