use crate::{Error, Result};
use std::path::Path;
use tokio::fs;

/// Delete a cloned profile.
///
/// An empty or whitespace-only path is a no-op, as is a path that does not
/// exist; cleaning twice in a row is safe. A target that is not a directory
/// (a stray file or symlink left at the profile path) is removed too. A
/// deletion failure is logged and returned as [`Error::CleanupFailed`].
pub async fn clean_profile(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() || path.to_string_lossy().trim().is_empty() {
        return Ok(());
    }

    // Stat without following so a dangling symlink still counts as present.
    let Ok(meta) = fs::symlink_metadata(path).await else {
        return Ok(());
    };

    let removed = if meta.is_dir() {
        fs::remove_dir_all(path).await
    } else {
        fs::remove_file(path).await
    };

    match removed {
        Ok(()) => {
            tracing::info!("Removed profile at {}", path.display());
            Ok(())
        }
        Err(e) => {
            tracing::warn!("Failed to remove profile at {}: {}", path.display(), e);
            Err(Error::CleanupFailed {
                path: path.to_path_buf(),
                source: e,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clean_removes_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let profile = tmp.path().join("profile");
        std::fs::create_dir_all(profile.join("Extensions")).unwrap();
        std::fs::write(profile.join("Cookies"), b"x").unwrap();

        clean_profile(&profile).await.unwrap();

        assert!(!profile.exists());
    }

    #[tokio::test]
    async fn test_clean_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let profile = tmp.path().join("profile");
        std::fs::create_dir_all(&profile).unwrap();

        clean_profile(&profile).await.unwrap();
        clean_profile(&profile).await.unwrap();

        assert!(!profile.exists());
    }

    #[tokio::test]
    async fn test_clean_removes_regular_file_target() {
        let tmp = tempfile::tempdir().unwrap();
        let stray = tmp.path().join("profile");
        std::fs::write(&stray, b"not a directory").unwrap();

        clean_profile(&stray).await.unwrap();

        assert!(!stray.exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_clean_removes_dangling_symlink_target() {
        let tmp = tempfile::tempdir().unwrap();
        let link = tmp.path().join("profile");
        std::os::unix::fs::symlink("gone", &link).unwrap();

        clean_profile(&link).await.unwrap();

        assert!(link.symlink_metadata().is_err());
    }

    #[tokio::test]
    async fn test_clean_ignores_empty_and_whitespace_paths() {
        clean_profile(Path::new("")).await.unwrap();
        clean_profile(Path::new("   ")).await.unwrap();
    }
}
