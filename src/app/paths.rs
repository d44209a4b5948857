// SPDX-License-Identifier: MPL-2.0
//! Directory resolution for settings and stored preferences.
//!
//! Two directories are used: the config directory holds `settings.toml`, the
//! data directory holds the preference store (`storage.cbor`), the on-disk
//! counterpart of browser local storage.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** passed to [`resolve_dir`] (tests, embedding)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) set via [`init_cli_overrides`]
//! 3. **Environment variables** (`VITRINE_DATA_DIR`, `VITRINE_CONFIG_DIR`)
//! 4. **Platform default** from the `dirs` crate, with the app name appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "Vitrine";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "VITRINE_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "VITRINE_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Which directory is being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirKind {
    /// Stored preferences.
    Data,
    /// `settings.toml`.
    Config,
}

impl DirKind {
    fn env_var(self) -> &'static str {
        match self {
            DirKind::Data => ENV_DATA_DIR,
            DirKind::Config => ENV_CONFIG_DIR,
        }
    }

    fn cli_override(self) -> Option<PathBuf> {
        let cell = match self {
            DirKind::Data => &CLI_DATA_DIR,
            DirKind::Config => &CLI_CONFIG_DIR,
        };
        cell.get().and_then(Clone::clone)
    }

    fn platform_default(self) -> Option<PathBuf> {
        let base = match self {
            DirKind::Data => dirs::data_dir(),
            DirKind::Config => dirs::config_dir(),
        };
        base.map(|mut path| {
            path.push(APP_NAME);
            path
        })
    }
}

/// Records `--data-dir` / `--config-dir` once at startup.
///
/// Returns `false` (and keeps the first values) if called again.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) -> bool {
    let data_set = CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_ok();
    let config_set = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok();
    if !(data_set && config_set) {
        tracing::warn!("directory overrides were already initialized");
    }
    data_set && config_set
}

/// Resolves a directory following the documented priority order.
///
/// Returns `None` only when the platform has no such directory.
pub fn resolve_dir(kind: DirKind, override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }
    if let Some(path) = kind.cli_override() {
        return Some(path);
    }
    match std::env::var(kind.env_var()) {
        Ok(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => kind.platform_default(),
    }
}

/// Data directory (preference store) with an optional explicit override.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve_dir(DirKind::Data, override_path)
}

/// Config directory (`settings.toml`) with an optional explicit override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve_dir(DirKind::Config, override_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests touching process-wide env vars must not interleave.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn platform_defaults_end_with_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_DATA_DIR);
        std::env::remove_var(ENV_CONFIG_DIR);

        for kind in [DirKind::Data, DirKind::Config] {
            if let Some(path) = resolve_dir(kind, None) {
                assert!(path.ends_with(APP_NAME), "{kind:?} dir should end with app name");
                assert!(path.is_absolute());
            }
        }
    }

    #[test]
    fn explicit_override_wins() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/env/path");

        let override_path = PathBuf::from("/override/path");
        assert_eq!(
            get_app_data_dir_with_override(Some(override_path.clone())),
            Some(override_path)
        );

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn env_var_overrides_platform_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/test/config/dir");

        assert_eq!(
            get_app_config_dir_with_override(None),
            Some(PathBuf::from("/test/config/dir"))
        );

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "");

        if let Some(path) = get_app_data_dir_with_override(None) {
            assert!(path.ends_with(APP_NAME));
        }

        std::env::remove_var(ENV_DATA_DIR);
    }
}
