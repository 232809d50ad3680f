use anyhow::Result;
use console::style;
use fledge_browser::{LaunchConfig, LaunchOptions, ProfileMode, launch};
use std::path::PathBuf;
use std::time::Duration;

pub async fn execute(
    dest: Option<PathBuf>,
    headless: bool,
    no_extensions: bool,
    temp: bool,
    url: Option<String>,
    chrome_path: Option<PathBuf>,
    launch_timeout: Option<u64>,
) -> Result<()> {
    let mut options = LaunchOptions::new()
        .with_headless(headless)
        .with_extensions(!no_extensions);

    if let Some(url) = url {
        options = options.with_start_url(url);
    }
    if let Some(path) = chrome_path {
        options = options.with_chrome_executable(path);
    }
    if let Some(secs) = launch_timeout {
        options = options.with_launch_timeout(Duration::from_secs(secs));
    }

    let profile = if temp {
        if dest.is_some() {
            println!(
                "{}",
                style("⚠️  --temp overrides the destination argument; using a temporary profile")
                    .yellow()
            );
        }
        ProfileMode::Temporary
    } else {
        ProfileMode::Fixed(dest)
    };

    tracing::debug!("Launch options: {:?}", options);

    println!("🚀 Launching Chrome...");

    let mut session = launch(LaunchConfig { profile, options }).await?;

    println!(
        "✅ Chrome started with profile {}",
        style(session.profile_dir().display()).dim()
    );
    println!("   Press Ctrl-C to close the browser and exit");

    let interrupted = tokio::select! {
        _ = tokio::signal::ctrl_c() => true,
        _ = session.wait_disconnected() => false,
    };

    if interrupted {
        println!("\n🛑 Closing browser...");
        session.close().await?;
        println!("✅ Browser closed");
    } else {
        println!("\n🛑 Browser disconnected");
    }

    Ok(())
}
