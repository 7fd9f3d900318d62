use std::sync::Once;
use std::{env, path::PathBuf};

use dirs::home_dir;

const DEFAULT_DIR_NAME: &str = ".project_core";
const WORKSPACE_DIR: &str = "workspaces";
const BACKUP_DIR: &str = "backups";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("project_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Returns the application-specific data directory, defaulting to
/// `~/.project_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("PROJECT_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Absolute path to the managed workspaces directory.
pub fn workspaces_dir_in(base: &std::path::Path) -> PathBuf {
    base.join(WORKSPACE_DIR)
}

/// Base directory for backup snapshots.
pub fn backups_dir_in(base: &std::path::Path) -> PathBuf {
    base.join(BACKUP_DIR)
}

/// Path to the active configuration file.
pub fn config_file_in(base: &std::path::Path) -> PathBuf {
    base.join("config.json")
}

/// Creates a directory (and parents) when it does not exist yet.
pub fn ensure_dir(path: &std::path::Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
