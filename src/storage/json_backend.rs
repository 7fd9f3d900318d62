use chrono::{DateTime, NaiveDateTime, Utc};
use std::{
    collections::HashSet,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    domain::Workspace,
    errors::DomainError,
    utils::{app_data_dir, backups_dir_in, ensure_dir, workspaces_dir_in},
};

use super::{Result, StorageBackend};

const BACKUP_EXTENSION: &str = "json";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M";
const TMP_SUFFIX: &str = "tmp";
const DEFAULT_RETENTION: usize = 5;

/// File-based workspace store: one pretty-printed JSON document per
/// workspace, written atomically, with timestamped backups pruned to a
/// retention limit.
#[derive(Clone)]
pub struct JsonStorage {
    workspaces_dir: PathBuf,
    backups_dir: PathBuf,
    retention: usize,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>, retention: Option<usize>) -> Result<Self> {
        let base = root.unwrap_or_else(app_data_dir);
        ensure_dir(&base)?;
        let workspaces_dir = workspaces_dir_in(&base);
        let backups_dir = backups_dir_in(&base);
        ensure_dir(&workspaces_dir)?;
        ensure_dir(&backups_dir)?;
        Ok(Self {
            workspaces_dir,
            backups_dir,
            retention: retention.unwrap_or(DEFAULT_RETENTION).max(1),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None, None)
    }

    pub fn workspace_path(&self, name: &str) -> PathBuf {
        self.workspaces_dir
            .join(format!("{}.json", canonical_name(name)))
    }

    fn backup_dir(&self, name: &str) -> PathBuf {
        self.backups_dir.join(canonical_name(name))
    }

    pub fn backup_path(&self, name: &str, backup_name: &str) -> PathBuf {
        self.backup_dir(name).join(backup_name)
    }

    fn write_backup_file(
        &self,
        workspace: &Workspace,
        name: &str,
        note: Option<&str>,
    ) -> Result<()> {
        let json = serde_json::to_string_pretty(workspace)?;
        self.write_backup_raw(name, note, &json)
    }

    fn write_backup_raw(&self, name: &str, note: Option<&str>, json: &str) -> Result<()> {
        let dir = self.backup_dir(name);
        ensure_dir(&dir)?;
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let mut file_stem = format!("{}_{}", canonical_name(name), timestamp);
        if let Some(label) = sanitize_backup_note(note) {
            file_stem.push('_');
            file_stem.push_str(&label);
        }
        let path = dir.join(format!("{}.{}", file_stem, BACKUP_EXTENSION));
        write_atomic(&path, json)?;
        self.prune_backups(name)?;
        Ok(())
    }

    fn prune_backups(&self, name: &str) -> Result<()> {
        let backups = self.list_backups(name)?;
        if backups.len() <= self.retention {
            return Ok(());
        }
        for entry in backups.iter().skip(self.retention) {
            let path = self.backup_path(name, entry);
            let _ = fs::remove_file(path);
        }
        Ok(())
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, workspace: &Workspace, name: &str) -> Result<()> {
        let path = self.workspace_path(name);
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        // Back up the on-disk revision, not the one about to replace it.
        if path.exists() {
            let existing = fs::read_to_string(&path)?;
            self.write_backup_raw(name, Some("presave"), &existing)?;
        }
        let json = serde_json::to_string_pretty(workspace)?;
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Workspace> {
        let path = self.workspace_path(name);
        load_workspace_from_path(&path)
    }

    fn list_backups(&self, name: &str) -> Result<Vec<String>> {
        let dir = self.backup_dir(name);
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(BACKUP_EXTENSION) {
                continue;
            }
            let file_name = match path.file_name().and_then(|stem| stem.to_str()) {
                Some(name) => name.to_string(),
                None => continue,
            };
            entries.push(file_name);
        }
        entries.sort_by(|a, b| parse_backup_timestamp(b).cmp(&parse_backup_timestamp(a)));
        Ok(entries)
    }

    fn backup(&self, workspace: &Workspace, name: &str, note: Option<&str>) -> Result<()> {
        self.write_backup_file(workspace, name, note)
    }

    fn restore(&self, name: &str, backup_name: &str) -> Result<Workspace> {
        let backup_path = self.backup_path(name, backup_name);
        if !backup_path.exists() {
            return Err(DomainError::Storage(format!(
                "backup `{}` not found",
                backup_name
            )));
        }
        let target = self.workspace_path(name);
        fs::copy(&backup_path, &target)?;
        load_workspace_from_path(&target)
    }
}

pub fn save_workspace_to_path(workspace: &Workspace, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = serde_json::to_string_pretty(workspace)?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

pub fn load_workspace_from_path(path: &Path) -> Result<Workspace> {
    let data = fs::read_to_string(path)?;
    let workspace: Workspace = serde_json::from_str(&data)?;
    Ok(workspace)
}

/// Scans a loaded workspace for referential gaps. Gaps are data-quality
/// concerns, not load failures; the aggregators exclude them from totals.
pub fn workspace_warnings(workspace: &Workspace) -> Vec<String> {
    let customer_ids: HashSet<&str> = workspace
        .customers
        .iter()
        .filter_map(|customer| customer.id.persisted())
        .collect();
    let project_ids: HashSet<&str> = workspace
        .projects
        .iter()
        .filter_map(|project| project.id.persisted())
        .collect();
    let catalog_ids: HashSet<&str> = workspace
        .catalog
        .iter()
        .filter_map(|item| item.id.persisted())
        .collect();
    let mut warnings = Vec::new();

    for project in &workspace.projects {
        if !customer_ids.contains(project.customer_id.as_str()) {
            warnings.push(format!(
                "project {} references unknown customer {}",
                project.id, project.customer_id
            ));
        }
    }
    for receipt in &workspace.receipts {
        if !customer_ids.contains(receipt.customer_id.as_str()) {
            warnings.push(format!(
                "receipt {} references unknown customer {}",
                receipt.id, receipt.customer_id
            ));
        }
        for allocation in &receipt.allocations {
            if !project_ids.contains(allocation.project_id.as_str()) {
                warnings.push(format!(
                    "receipt {} allocates to unknown project {}",
                    receipt.id, allocation.project_id
                ));
            }
        }
    }
    for expense in &workspace.expenses {
        if !project_ids.contains(expense.project_id.as_str()) {
            warnings.push(format!(
                "expense {} references unknown project {}",
                expense.id, expense.project_id
            ));
        }
    }
    for labor in &workspace.labors {
        if !project_ids.contains(labor.project_id.as_str()) {
            warnings.push(format!(
                "labor {} references unknown project {}",
                labor.id, labor.project_id
            ));
        }
    }
    for item in &workspace.checklists {
        if !project_ids.contains(item.project_id.as_str()) {
            warnings.push(format!(
                "checklist item {} references unknown project {}",
                item.id, item.project_id
            ));
        }
    }
    for document in &workspace.stock_documents {
        if !customer_ids.contains(document.owner_customer_id.as_str()) {
            warnings.push(format!(
                "stock document {} references unknown owner {}",
                document.id, document.owner_customer_id
            ));
        }
        if let Some(project_id) = document.project_id.as_deref() {
            if !project_ids.contains(project_id) {
                warnings.push(format!(
                    "stock document {} references unknown project {}",
                    document.id, project_id
                ));
            }
        }
        for row in &document.rows {
            if !catalog_ids.contains(row.catalog_item_id.as_str()) {
                warnings.push(format!(
                    "stock document {} references unknown catalog item {}",
                    document.id, row.catalog_item_id
                ));
            }
        }
    }
    warnings
}

fn canonical_name(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "workspace".into()
    } else {
        sanitized
    }
}

fn sanitize_backup_note(note: Option<&str>) -> Option<String> {
    let raw = note?.trim();
    if raw.is_empty() {
        return None;
    }
    let mut sanitized = String::new();
    let mut last_dash = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            sanitized.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if ch.is_whitespace() || matches!(ch, '-' | '.') {
            if !sanitized.is_empty() && !last_dash {
                sanitized.push('-');
                last_dash = true;
            }
        }
    }
    let trimmed = sanitized.trim_matches('-').to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

fn parse_backup_timestamp(name: &str) -> Option<DateTime<Utc>> {
    let trimmed = name.strip_suffix(&format!(".{}", BACKUP_EXTENSION))?;
    let segments: Vec<&str> = trimmed.split('_').collect();
    if segments.len() < 2 {
        return None;
    }
    let mut date_part = None;
    let mut time_part = None;
    for window in segments.windows(2) {
        if is_digits(window[0], 8) && is_digits(window[1], 4) {
            date_part = Some(window[0]);
            time_part = Some(window[1]);
        }
    }
    let raw = format!("{}{}", date_part?, time_part?);
    NaiveDateTime::parse_from_str(&raw, "%Y%m%d%H%M")
        .ok()
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
