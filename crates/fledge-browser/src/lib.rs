mod chrome_finder;
mod error;
mod launcher;
mod options;
mod session;

pub use chrome_finder::ChromeFinder;
pub use error::{Error, Result};
pub use launcher::{
    LaunchConfig, ProfileMode, launch, launch_with_fixed_profile, launch_with_temp_profile,
};
pub use options::{DEFAULT_ARGS, LaunchOptions};
pub use session::BrowserSession;
