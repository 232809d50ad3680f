use crate::Result;
use std::path::PathBuf;

/// Locate the default Chrome user profile for the current platform.
///
/// Returns `None` when the platform is unsupported or the user directories
/// cannot be resolved. The directory is not checked for existence; callers
/// get a `SourceNotFound` from the clone step if Chrome was never run.
pub fn chrome_default_profile() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    return dirs::config_dir().map(|dir| dir.join("Google").join("Chrome").join("Default"));

    #[cfg(target_os = "linux")]
    return dirs::config_dir().map(|dir| dir.join("google-chrome").join("Default"));

    #[cfg(target_os = "windows")]
    return dirs::data_local_dir()
        .map(|dir| dir.join("Google").join("Chrome").join("User Data").join("Default"));

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    return None;
}

/// The fixed clone destination used when none is given: `~/AutomationProfile`.
pub fn default_profile_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|dir| dir.join("AutomationProfile"))
}

/// Create a fresh uniquely-named profile directory under the system temp dir.
///
/// The directory is named `fledge-profile-<millis>-<random>` and is NOT
/// removed automatically; callers delete it once the session ends.
pub fn temp_profile_dir() -> Result<PathBuf> {
    let temp_dir = tempfile::Builder::new()
        .prefix(&format!(
            "fledge-profile-{}-",
            chrono::Utc::now().timestamp_millis()
        ))
        .tempdir()?;

    Ok(temp_dir.keep())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chrome_default_profile_points_at_default_dir() {
        if let Some(path) = chrome_default_profile() {
            assert!(path.ends_with("Default"));
        }
    }

    #[test]
    fn test_default_profile_dir_is_under_home() {
        if let Some(path) = default_profile_dir() {
            assert!(path.ends_with("AutomationProfile"));
            assert!(path.starts_with(dirs::home_dir().unwrap()));
        }
    }

    #[test]
    fn test_temp_profile_dirs_are_unique() {
        let first = temp_profile_dir().unwrap();
        let second = temp_profile_dir().unwrap();

        assert!(first.exists());
        assert!(second.exists());
        assert_ne!(first, second);

        let name = first.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("fledge-profile-"));

        std::fs::remove_dir_all(&first).unwrap();
        std::fs::remove_dir_all(&second).unwrap();
    }
}
