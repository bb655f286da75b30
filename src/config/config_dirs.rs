use directories_next::ProjectDirs;
use std::fs;
use std::io;
use std::path::PathBuf;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "scrollist", "scrollist")
}

/// Per-user configuration directory, if the platform has one.
pub fn project_config_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().to_path_buf())
}

/// Per-user cache directory (log files live here).
pub fn user_cache_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.cache_dir().to_path_buf())
}

/// Default location of `settings.toml`.
pub fn settings_path() -> Option<PathBuf> {
    project_config_dir().map(|d| d.join("settings.toml"))
}

/// Create the config and cache directories if they are missing.
pub fn ensure_dirs_exist() -> io::Result<()> {
    for dir in [project_config_dir(), user_cache_dir()].into_iter().flatten() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
