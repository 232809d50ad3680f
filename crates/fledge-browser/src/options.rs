use crate::{Error, Result};
use chromiumoxide::browser::BrowserConfig;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Switches passed to every Chrome launch so a cloned profile starts
/// quietly: no first-run bubbles, no background sync against the real
/// account, no crash reporter, no popup blocking surprises.
pub const DEFAULT_ARGS: &[&str] = &[
    "--disable-background-networking",
    "--disable-background-timer-throttling",
    "--disable-breakpad",
    "--disable-component-update",
    "--disable-default-apps",
    "--disable-dev-shm-usage",
    "--disable-extensions",
    "--disable-hang-monitor",
    "--disable-popup-blocking",
    "--disable-prompt-on-repost",
    "--disable-sync",
    "--no-default-browser-check",
    "--no-first-run",
];

/// How Chrome is started on top of a cloned profile.
///
/// Defaults match an interactive automation run: a visible window, the
/// sandbox off, and extensions from the cloned profile enabled.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    /// Run without a visible window.
    pub headless: bool,
    /// Keep the Chrome sandbox on.
    pub sandbox: bool,
    /// Load the extensions present in the cloned profile.
    pub extensions: bool,
    /// Explicit Chrome binary instead of automatic discovery.
    pub chrome_executable: Option<PathBuf>,
    /// Page to open once the browser is up.
    pub start_url: Option<String>,
    /// Extra switches appended after the defaults.
    pub extra_args: Vec<String>,
    /// Entries from [`DEFAULT_ARGS`] to leave out.
    pub ignored_default_args: Vec<String>,
    /// How long to wait for Chrome to come up.
    pub launch_timeout: Option<Duration>,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            headless: false,
            sandbox: false,
            extensions: true,
            chrome_executable: None,
            start_url: None,
            extra_args: Vec::new(),
            ignored_default_args: Vec::new(),
            launch_timeout: None,
        }
    }
}

impl LaunchOptions {
    /// Create options with the interactive defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run Chrome without a visible window.
    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Keep the Chrome sandbox enabled.
    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Control whether the cloned profile's extensions are loaded.
    pub fn with_extensions(mut self, extensions: bool) -> Self {
        self.extensions = extensions;
        self
    }

    /// Use a specific Chrome binary.
    pub fn with_chrome_executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.chrome_executable = Some(path.into());
        self
    }

    /// Open this page once the browser is up.
    pub fn with_start_url(mut self, url: impl Into<String>) -> Self {
        self.start_url = Some(url.into());
        self
    }

    /// Append extra Chrome switches after the defaults.
    pub fn with_extra_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }

    /// Leave out specific entries from [`DEFAULT_ARGS`].
    pub fn with_ignored_default_args(mut self, args: Vec<String>) -> Self {
        self.ignored_default_args = args;
        self
    }

    /// Wait this long for Chrome to come up before failing the launch.
    pub fn with_launch_timeout(mut self, timeout: Duration) -> Self {
        self.launch_timeout = Some(timeout);
        self
    }

    /// The full argument list handed to Chrome.
    pub fn chrome_args(&self) -> Vec<String> {
        let mut args: Vec<String> = Vec::new();

        for arg in DEFAULT_ARGS {
            if !self.is_ignored(arg) {
                args.push((*arg).to_string());
            }
        }

        args.extend(self.extra_args.iter().cloned());

        if let Some(url) = &self.start_url {
            // A bare hostname gets a scheme so Chrome opens a page, not a search
            let url = if !url.starts_with("http://") && !url.starts_with("https://") {
                format!("https://{}", url)
            } else {
                url.clone()
            };
            args.push(url);
        }

        args
    }

    fn is_ignored(&self, arg: &str) -> bool {
        if self.extensions && arg == "--disable-extensions" {
            return true;
        }
        self.ignored_default_args.iter().any(|ignored| ignored == arg)
    }

    /// Build the chromiumoxide config for a resolved binary and profile dir.
    pub fn to_browser_config(
        &self,
        chrome_binary: &Path,
        user_data_dir: &Path,
    ) -> Result<BrowserConfig> {
        let mut builder = BrowserConfig::builder()
            .chrome_executable(chrome_binary)
            .user_data_dir(user_data_dir)
            .disable_default_args()
            .args(self.chrome_args());

        if !self.headless {
            builder = builder.with_head();
        }

        if !self.sandbox {
            builder = builder.no_sandbox();
        }

        if let Some(timeout) = self.launch_timeout {
            builder = builder.launch_timeout(timeout);
        }

        builder.build().map_err(Error::Browser)
    }
}
