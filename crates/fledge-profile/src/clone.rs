use crate::lock::{is_lock_marker, scrub_lock_files};
use crate::{Error, Result};
use std::io;
use std::path::Path;
use tokio::fs;

/// Summary of what a clone copied.
#[derive(Debug, Clone, Copy, Default)]
pub struct CloneReport {
    /// Files and symlinks written to the destination.
    pub files: u64,
    /// Bytes of regular-file content copied.
    pub bytes: u64,
}

impl CloneReport {
    /// Copied file content in megabytes.
    pub fn megabytes(&self) -> f64 {
        self.bytes as f64 / 1_048_576.0
    }
}

/// Clone a Chrome profile directory into `dest`.
///
/// A clone is a replacement, never a merge: a pre-existing destination is
/// deleted wholesale first. Lock markers are scrubbed from `source` in
/// place before copying, excluded from the copy itself, and scrubbed once
/// more from the finished destination. The in-place scrub mutates the
/// source profile, so a browser currently holding that profile open may
/// see its lock vanish.
///
/// On any failure during the scrub/copy phase the partially-written
/// destination is deleted and the cause is surfaced as
/// [`Error::CloneFailed`].
pub async fn clone_profile(source: &Path, dest: &Path) -> Result<CloneReport> {
    if !fs::try_exists(source).await.unwrap_or(false) {
        return Err(Error::SourceNotFound(source.to_path_buf()));
    }

    // Refuse overlapping trees before touching anything; replacing a dest
    // that contains the source would otherwise delete the real profile.
    if source.starts_with(dest) || dest.starts_with(source) {
        return Err(Error::CloneFailed {
            dest: dest.to_path_buf(),
            source: io::Error::other("source and destination must not overlap"),
        });
    }

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).await?;
    }

    if let Ok(meta) = fs::symlink_metadata(dest).await {
        if meta.is_dir() {
            fs::remove_dir_all(dest).await?;
        } else {
            fs::remove_file(dest).await?;
        }
    }

    match copy_scrubbed(source, dest).await {
        Ok(report) => {
            tracing::info!(
                "Cloned profile to {} ({} files, {:.1} MB)",
                dest.display(),
                report.files,
                report.megabytes()
            );
            Ok(report)
        }
        Err(e) => {
            roll_back(dest).await;
            Err(Error::CloneFailed {
                dest: dest.to_path_buf(),
                source: e,
            })
        }
    }
}

/// Scrub the source, copy with the lock filter, scrub the destination.
///
/// The trailing scrub catches markers the filter could miss when the
/// browser recreates one mid-walk.
async fn copy_scrubbed(source: &Path, dest: &Path) -> io::Result<CloneReport> {
    scrub_lock_files(source).await;
    let report = copy_filtered(source, dest).await?;
    scrub_lock_files(dest).await;
    Ok(report)
}

/// Recursive copy that skips any entry named like a lock marker.
async fn copy_filtered(source: &Path, dest: &Path) -> io::Result<CloneReport> {
    let mut report = CloneReport::default();
    fs::create_dir_all(dest).await?;

    let mut pending = vec![(source.to_path_buf(), dest.to_path_buf())];

    while let Some((src_dir, dst_dir)) = pending.pop() {
        let mut entries = fs::read_dir(&src_dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            if is_lock_marker(&name) {
                tracing::debug!("Skipping lock marker: {}", entry.path().display());
                continue;
            }

            let src_path = entry.path();
            let dst_path = dst_dir.join(&name);
            let file_type = entry.file_type().await?;

            if file_type.is_dir() {
                fs::create_dir_all(&dst_path).await?;
                pending.push((src_path, dst_path));
            } else if file_type.is_symlink() {
                if copy_symlink(&src_path, &dst_path).await? {
                    report.files += 1;
                }
            } else {
                report.bytes += fs::copy(&src_path, &dst_path).await?;
                report.files += 1;
            }
        }
    }

    Ok(report)
}

/// Replicate a symlink without following it, returning whether a link was
/// written. Chrome profiles carry dangling singleton links on Linux, so the
/// target is not required to resolve.
#[cfg(unix)]
async fn copy_symlink(src: &Path, dst: &Path) -> io::Result<bool> {
    let target = fs::read_link(src).await?;
    fs::symlink(target, dst).await?;
    Ok(true)
}

#[cfg(not(unix))]
async fn copy_symlink(src: &Path, _dst: &Path) -> io::Result<bool> {
    tracing::warn!("Skipping symlink {}: not supported on this platform", src.display());
    Ok(false)
}

/// Delete a half-written destination after a copy failure. Best-effort:
/// a rollback failure is logged and never masks the original error.
async fn roll_back(dest: &Path) {
    if !fs::try_exists(dest).await.unwrap_or(false) {
        return;
    }
    match fs::remove_dir_all(dest).await {
        Ok(()) => tracing::debug!("Cleaned up incomplete profile at {}", dest.display()),
        Err(e) => tracing::warn!(
            "Could not clean up incomplete profile at {}: {}",
            dest.display(),
            e
        ),
    }
}
