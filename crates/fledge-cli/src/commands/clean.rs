use anyhow::{Result, anyhow};
use console::style;
use fledge_profile::{clean_profile, default_profile_dir};
use std::path::PathBuf;
use tokio::fs;

pub async fn execute(dest: Option<PathBuf>, force: bool) -> Result<()> {
    let path = match dest {
        Some(path) => path,
        None => default_profile_dir()
            .ok_or_else(|| anyhow!("Could not determine home directory"))?,
    };

    tracing::debug!("Cleaning profile at {}", path.display());

    // The refusal is unconditional: no path inspection before the gate.
    if !force {
        println!(
            "{}",
            style(format!(
                "⚠️  This will permanently delete {}",
                path.display()
            ))
            .yellow()
        );
        return Err(anyhow!(
            "Deletion cannot be undone. Re-run with --force to confirm."
        ));
    }

    if !fs::try_exists(&path).await.unwrap_or(false) {
        println!("Nothing to clean at {}", path.display());
        return Ok(());
    }

    clean_profile(&path).await?;
    println!("✅ Removed {}", path.display());

    Ok(())
}
