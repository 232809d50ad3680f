mod clean;
mod clone;
mod error;
mod lock;
mod paths;

pub use clean::clean_profile;
pub use clone::{CloneReport, clone_profile};
pub use error::{Error, Result};
pub use lock::{LOCK_SUFFIX, SINGLETON_LOCK, is_lock_marker, scrub_lock_files};
pub use paths::{chrome_default_profile, default_profile_dir, temp_profile_dir};
