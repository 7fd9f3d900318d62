pub mod json_backend;
pub mod live;

use std::path::Path;

use crate::{domain::Workspace, errors::DomainError};

pub type Result<T> = std::result::Result<T, DomainError>;

/// Abstraction over persistence backends capable of storing workspaces and
/// snapshots.
pub trait StorageBackend: Send + Sync {
    fn save(&self, workspace: &Workspace, name: &str) -> Result<()>;
    fn load(&self, name: &str) -> Result<Workspace>;
    fn list_backups(&self, name: &str) -> Result<Vec<String>>;
    fn backup(&self, workspace: &Workspace, name: &str, note: Option<&str>) -> Result<()>;
    fn restore(&self, name: &str, backup_name: &str) -> Result<Workspace>;

    /// Optional helpers for ad-hoc file operations. Default implementations
    /// forward to the JSON codec when not overridden.
    fn save_to_path(&self, workspace: &Workspace, path: &Path) -> Result<()> {
        json_backend::save_workspace_to_path(workspace, path)
    }

    fn load_from_path(&self, path: &Path) -> Result<Workspace> {
        json_backend::load_workspace_from_path(path)
    }
}

pub use json_backend::{workspace_warnings, JsonStorage};
pub use live::{LiveFeed, SubscriptionId};
