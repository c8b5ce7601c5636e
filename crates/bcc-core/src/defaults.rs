//! Default location of the Burp Suite user configuration file.
//!
//! The Pro file wins when it exists, otherwise the Community path is used
//! even if that file is missing too. Unknown platforms get a relative
//! fallback. Nothing else in the crate depends on this module.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

pub const PRO_FILE: &str = "UserConfigPro.json";
pub const COMMUNITY_FILE: &str = "UserConfigCommunity.json";
pub const FALLBACK_FILE: &str = "./user-options.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Platform::Windows,
            "linux" => Platform::Linux,
            "macos" => Platform::MacOs,
            _ => Platform::Other,
        }
    }
}

/// Environment variables and file existence, as seen by path detection.
/// Detection treats a variable set to the empty string as unset.
pub trait Environment {
    fn var(&self, name: &str) -> Option<OsString>;
    fn exists(&self, path: &Path) -> bool;
}

pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, name: &str) -> Option<OsString> {
        std::env::var_os(name)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

pub fn default_config_path() -> PathBuf {
    default_config_path_for(Platform::current(), &SystemEnvironment)
}

pub fn default_config_path_for(platform: Platform, env: &impl Environment) -> PathBuf {
    let Some(dir) = config_dir(platform, env) else {
        debug!(?platform, "no config directory for platform, using fallback");
        return PathBuf::from(FALLBACK_FILE);
    };
    let pro = dir.join(PRO_FILE);
    if env.exists(&pro) {
        debug!(path = %pro.display(), "using Pro config");
        pro
    } else {
        dir.join(COMMUNITY_FILE)
    }
}

fn config_dir(platform: Platform, env: &impl Environment) -> Option<PathBuf> {
    match platform {
        Platform::Linux => Some(home(env).join(".BurpSuite")),
        Platform::MacOs => Some(
            home(env)
                .join("Library")
                .join("Application Support")
                .join("BurpSuite"),
        ),
        Platform::Windows => {
            windows_home(env).map(|h| h.join("AppData").join("Roaming").join("BurpSuite"))
        }
        Platform::Other => None,
    }
}

fn non_empty_var(env: &impl Environment, name: &str) -> Option<OsString> {
    env.var(name).filter(|v| !v.is_empty())
}

fn home(env: &impl Environment) -> PathBuf {
    PathBuf::from(non_empty_var(env, "HOME").unwrap_or_default())
}

// PowerShell sets PSModulePath; CMD sets ComSpec.
fn windows_home(env: &impl Environment) -> Option<PathBuf> {
    if non_empty_var(env, "PSModulePath").is_some() {
        let mut home = non_empty_var(env, "HOMEDRIVE").unwrap_or_default();
        home.push(non_empty_var(env, "HOMEPATH").unwrap_or_default());
        Some(PathBuf::from(home))
    } else if non_empty_var(env, "ComSpec").is_some() {
        Some(PathBuf::from(non_empty_var(env, "USERPROFILE").unwrap_or_default()))
    } else {
        None
    }
}
