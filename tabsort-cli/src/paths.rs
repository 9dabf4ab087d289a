//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "tabsort";
const APPLICATION: &str = "tabsort";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory, where log files live.
///
/// - Linux: `$XDG_CACHE_HOME/tabsort` or `~/.cache/tabsort`
/// - macOS: `~/Library/Caches/dev.tabsort.tabsort`
/// - Windows: `C:\Users\<User>\AppData\Local\tabsort\tabsort\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/tabsort` or `~/.config/tabsort`
/// - macOS: `~/Library/Application Support/dev.tabsort.tabsort`
/// - Windows: `C:\Users\<User>\AppData\Roaming\tabsort\tabsort\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the default config file.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}
