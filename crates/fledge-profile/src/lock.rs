use std::ffi::OsStr;
use std::path::Path;
use tokio::fs;

/// File name Chrome uses to mark a profile as held by a running process.
pub const SINGLETON_LOCK: &str = "SingletonLock";

/// Suffix of auxiliary lock files found throughout a profile tree.
pub const LOCK_SUFFIX: &str = ".lock";

/// Returns true if a directory entry name denotes a lock marker.
///
/// Shared by the standalone scrubber and the clone copy filter so both
/// agree on what counts as a marker. Non-UTF-8 names are never markers.
pub fn is_lock_marker(name: &OsStr) -> bool {
    let Some(name) = name.to_str() else {
        return false;
    };
    name == SINGLETON_LOCK || name.ends_with(LOCK_SUFFIX)
}

/// Delete lock markers from `dir` and every directory beneath it.
///
/// Removal is best-effort: a missing directory counts as already clean, and
/// individual failures are logged as warnings without aborting the walk.
pub async fn scrub_lock_files(dir: &Path) {
    if !fs::try_exists(dir).await.unwrap_or(false) {
        return;
    }

    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        let mut entries = match fs::read_dir(&current).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Could not scan {} for lock files: {}", current.display(), e);
                continue;
            }
        };

        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!(
                        "Could not read an entry under {}: {}",
                        current.display(),
                        e
                    );
                    break;
                }
            };

            let path = entry.path();
            let file_type = match entry.file_type().await {
                Ok(file_type) => file_type,
                Err(e) => {
                    tracing::warn!("Could not stat {}: {}", path.display(), e);
                    continue;
                }
            };

            if file_type.is_dir() {
                pending.push(path);
            } else if is_lock_marker(&entry.file_name()) {
                match fs::remove_file(&path).await {
                    Ok(()) => tracing::debug!("Removed lock file: {}", path.display()),
                    Err(e) => {
                        tracing::warn!("Could not remove lock file {}: {}", path.display(), e)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognizes_singleton_lock() {
        assert!(is_lock_marker(OsStr::new("SingletonLock")));
    }

    #[test]
    fn test_recognizes_lock_suffix() {
        assert!(is_lock_marker(OsStr::new("lockfile.lock")));
        assert!(is_lock_marker(OsStr::new(".lock")));
    }

    #[test]
    fn test_rejects_ordinary_names() {
        assert!(!is_lock_marker(OsStr::new("Cookies")));
        assert!(!is_lock_marker(OsStr::new("SingletonCookie")));
        assert!(!is_lock_marker(OsStr::new("SingletonLock2")));
        assert!(!is_lock_marker(OsStr::new("lock")));
        assert!(!is_lock_marker(OsStr::new("foo.LOCK")));
    }

    #[cfg(unix)]
    #[test]
    fn test_rejects_non_utf8_names() {
        use std::os::unix::ffi::OsStrExt;

        assert!(!is_lock_marker(OsStr::from_bytes(b"\xff.lock")));
        assert!(!is_lock_marker(OsStr::from_bytes(b"Singleton\xffLock")));
    }

    #[tokio::test]
    async fn test_scrubs_markers_at_every_level() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        std::fs::create_dir_all(root.join("Extensions/ext1")).unwrap();
        std::fs::write(root.join("SingletonLock"), b"").unwrap();
        std::fs::write(root.join("Cookies"), b"cookie jar").unwrap();
        std::fs::write(root.join("Extensions/ext1/state.lock"), b"").unwrap();
        std::fs::write(root.join("Extensions/ext1/manifest.json"), b"{}").unwrap();

        scrub_lock_files(root).await;

        assert!(!root.join("SingletonLock").exists());
        assert!(!root.join("Extensions/ext1/state.lock").exists());
        assert!(root.join("Cookies").exists());
        assert!(root.join("Extensions/ext1/manifest.json").exists());
    }

    #[tokio::test]
    async fn test_missing_directory_is_already_clean() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("never-created");

        scrub_lock_files(&gone).await;

        assert!(!gone.exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_removes_symlinked_markers() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        // Chrome's SingletonLock is a symlink to "<hostname>-<pid>" on Linux.
        std::os::unix::fs::symlink("somehost-12345", root.join("SingletonLock")).unwrap();

        scrub_lock_files(root).await;

        assert!(root.join("SingletonLock").symlink_metadata().is_err());
    }
}
