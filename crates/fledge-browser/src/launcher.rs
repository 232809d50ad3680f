use crate::chrome_finder::ChromeFinder;
use crate::options::LaunchOptions;
use crate::session::BrowserSession;
use crate::{Error, Result};
use chromiumoxide::browser::Browser;
use fledge_profile::{
    chrome_default_profile, clean_profile, clone_profile, default_profile_dir, temp_profile_dir,
};
use std::path::PathBuf;

/// Where the cloned working profile for a session lives.
#[derive(Debug, Clone)]
pub enum ProfileMode {
    /// Re-clone into a fixed directory, `~/AutomationProfile` when `None`.
    Fixed(Option<PathBuf>),
    /// Clone into a fresh throwaway directory under the system temp dir.
    Temporary,
}

impl Default for ProfileMode {
    fn default() -> Self {
        ProfileMode::Fixed(None)
    }
}

/// Everything a session launch needs: profile placement plus Chrome options.
#[derive(Debug, Clone, Default)]
pub struct LaunchConfig {
    pub profile: ProfileMode,
    pub options: LaunchOptions,
}

/// Clone the live Chrome profile and start Chrome against the copy.
///
/// The working directory is freshly cloned on every call, so each session
/// starts from the current state of the real profile. When Chrome itself
/// fails to start, the clone is removed again so no half-started working
/// copy is left behind.
pub async fn launch(config: LaunchConfig) -> Result<BrowserSession> {
    let finder = ChromeFinder::new(config.options.chrome_executable.clone());
    let chrome_binary = finder.find()?;
    tracing::debug!("Using Chrome at {}", chrome_binary.display());

    let source = chrome_default_profile().ok_or_else(|| {
        Error::Browser("Could not determine the Chrome profile location on this platform".to_string())
    })?;

    let work_dir = match config.profile {
        ProfileMode::Fixed(Some(path)) => path,
        ProfileMode::Fixed(None) => default_profile_dir()
            .ok_or_else(|| Error::Browser("Could not determine home directory".to_string()))?,
        ProfileMode::Temporary => temp_profile_dir()?,
    };

    let report = clone_profile(&source, &work_dir).await?;
    tracing::info!(
        "Cloned {} files ({:.1} MB) into {}",
        report.files,
        report.megabytes(),
        work_dir.display()
    );

    let browser_config = config
        .options
        .to_browser_config(&chrome_binary, &work_dir)?;

    match Browser::launch(browser_config).await {
        Ok((browser, handler)) => {
            tracing::info!("Chrome started with profile {}", work_dir.display());
            Ok(BrowserSession::new(browser, handler, work_dir))
        }
        Err(e) => {
            // The clone is useless without a browser on top of it
            if let Err(cleanup) = clean_profile(&work_dir).await {
                tracing::warn!("Failed to remove profile after launch error: {}", cleanup);
            }
            Err(Error::Launch(e.to_string()))
        }
    }
}

/// Launch against the fixed profile directory, `~/AutomationProfile` by default.
pub async fn launch_with_fixed_profile(
    dest: Option<PathBuf>,
    options: LaunchOptions,
) -> Result<BrowserSession> {
    launch(LaunchConfig {
        profile: ProfileMode::Fixed(dest),
        options,
    })
    .await
}

/// Launch against a throwaway profile under the system temp dir.
pub async fn launch_with_temp_profile(options: LaunchOptions) -> Result<BrowserSession> {
    launch(LaunchConfig {
        profile: ProfileMode::Temporary,
        options,
    })
    .await
}
