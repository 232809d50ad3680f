use anyhow::{Result, anyhow};
use console::style;
use fledge_profile::{chrome_default_profile, clone_profile, default_profile_dir};
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::time::Duration;

pub async fn execute(dest: Option<PathBuf>) -> Result<()> {
    let source = chrome_default_profile().ok_or_else(|| {
        anyhow!("Could not determine the Chrome profile location on this platform")
    })?;

    let dest = match dest {
        Some(dest) => dest,
        None => default_profile_dir()
            .ok_or_else(|| anyhow!("Could not determine home directory"))?,
    };

    tracing::info!(
        "Cloning profile from {} to {}",
        source.display(),
        dest.display()
    );

    println!("🔍 Source: {}", style(source.display()).dim());
    println!("📁 Destination: {}", style(dest.display()).dim());

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Cloning profile...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = clone_profile(&source, &dest).await;
    spinner.finish_and_clear();

    let report = result?;
    println!(
        "✅ Cloned {} files ({:.1} MB)",
        report.files,
        report.megabytes()
    );

    Ok(())
}
