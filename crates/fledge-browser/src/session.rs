use crate::Result;
use chromiumoxide::browser::Browser;
use chromiumoxide::handler::Handler;
use futures::StreamExt;
use std::path::{Path, PathBuf};
use tokio::task::JoinHandle;

/// A running Chrome instance bound to its cloned profile directory.
///
/// The CDP message loop runs on a spawned task for the lifetime of the
/// session; it ends when the browser goes away, which is how
/// [`wait_disconnected`](BrowserSession::wait_disconnected) notices.
#[derive(Debug)]
pub struct BrowserSession {
    browser: Browser,
    handler: JoinHandle<()>,
    profile_dir: PathBuf,
}

impl BrowserSession {
    pub(crate) fn new(browser: Browser, mut handler: Handler, profile_dir: PathBuf) -> Self {
        // Drive the CDP message loop; browser commands stall without it
        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!("CDP handler event error (continuing): {}", e);
                }
            }
        });

        Self {
            browser,
            handler,
            profile_dir,
        }
    }

    /// The cloned profile directory this session runs against.
    pub fn profile_dir(&self) -> &Path {
        &self.profile_dir
    }

    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    pub fn browser_mut(&mut self) -> &mut Browser {
        &mut self.browser
    }

    /// Resolves once the browser is gone, whether the user closed the last
    /// window or the process died.
    pub async fn wait_disconnected(&mut self) {
        let _ = (&mut self.handler).await;
    }

    /// Close the browser and wait for the process to exit.
    pub async fn close(mut self) -> Result<()> {
        self.browser.close().await?;
        let _ = self.browser.wait().await;
        self.handler.abort();
        Ok(())
    }
}
