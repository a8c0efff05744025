//! Date-keyed reminder notes backed by a single JSON file.
//!
//! Every mutation is written through to disk before it returns. Loading is
//! forgiving: a missing or corrupt file yields an empty store.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use color_eyre::eyre::{Result, WrapErr};

type Entries = BTreeMap<NaiveDate, Vec<String>>;

#[derive(Debug)]
pub struct ReminderStore {
    path: PathBuf,
    /// Never holds an empty list.
    entries: Entries,
}

impl ReminderStore {
    /// Load the store from `path`. Never fails; unreadable content starts empty.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let entries = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Entries>(&content) {
                Ok(entries) => normalize(entries),
                Err(err) => {
                    log::warn!(
                        "Ignoring unparsable reminders file {} ({}); it will be replaced on the next save",
                        path.display(),
                        err
                    );
                    Entries::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("No reminders file at {}, starting empty", path.display());
                Entries::new()
            }
            Err(err) => {
                log::warn!(
                    "Could not read reminders file {}: {}",
                    path.display(),
                    err
                );
                Entries::new()
            }
        };

        log::info!(
            "Loaded reminders for {} date(s) from {}",
            entries.len(),
            path.display()
        );
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the backing file with the full store.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let mut json = serde_json::to_string_pretty(&self.entries)
            .wrap_err("Failed to serialize reminders")?;
        json.push('\n');

        // Write beside the real file and rename so a failed write never truncates it.
        let target = self.resolved_path();
        let mut tmp = target.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        if let Err(err) = fs::write(&tmp, json).and_then(|()| fs::rename(&tmp, &target)) {
            let _ = fs::remove_file(&tmp);
            return Err(err)
                .wrap_err_with(|| format!("Failed to save reminders to {}", self.path.display()));
        }

        log::debug!(
            "Saved {} date(s) to {}",
            self.entries.len(),
            self.path.display()
        );
        Ok(())
    }

    /// The file a save should replace. A symlinked path resolves to its
    /// target, so the rename updates the target and leaves the link in place.
    fn resolved_path(&self) -> PathBuf {
        fs::canonicalize(&self.path)
            .or_else(|_| {
                // Dangling link: the target does not exist yet.
                fs::read_link(&self.path).map(|target| match self.path.parent() {
                    Some(parent) => parent.join(target),
                    None => target,
                })
            })
            .unwrap_or_else(|_| self.path.clone())
    }

    /// Append a note to `date`. Blank text (after trimming) is ignored.
    pub fn add_reminder(&mut self, date: NaiveDate, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }

        self.entries.entry(date).or_default().push(text.to_string());

        if let Err(err) = self.save() {
            self.pop_last(date);
            return Err(err);
        }

        log::info!("Added reminder on {}", date);
        Ok(())
    }

    /// Remove the first note on `date` equal to `text`, then persist.
    ///
    /// Returns whether a note was removed. A miss still rewrites the file.
    pub fn delete_reminder(&mut self, date: NaiveDate, text: &str) -> Result<bool> {
        let removed_at = self.take_first(date, text);

        if let Err(err) = self.save() {
            if let Some(index) = removed_at {
                self.entries
                    .entry(date)
                    .or_default()
                    .insert(index, text.to_string());
            }
            return Err(err);
        }

        match removed_at {
            Some(_) => log::info!("Deleted reminder on {}", date),
            None => log::debug!("No matching reminder on {} to delete", date),
        }
        Ok(removed_at.is_some())
    }

    /// Notes for `date` in insertion order; empty if there are none.
    pub fn reminders(&self, date: NaiveDate) -> &[String] {
        self.entries.get(&date).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn dates_with_reminders(&self) -> BTreeSet<NaiveDate> {
        self.entries.keys().copied().collect()
    }

    fn pop_last(&mut self, date: NaiveDate) {
        if let Some(notes) = self.entries.get_mut(&date) {
            notes.pop();
            if notes.is_empty() {
                self.entries.remove(&date);
            }
        }
    }

    fn take_first(&mut self, date: NaiveDate, text: &str) -> Option<usize> {
        let notes = self.entries.get_mut(&date)?;
        let index = notes.iter().position(|note| note == text)?;
        notes.remove(index);
        if notes.is_empty() {
            self.entries.remove(&date);
        }
        Some(index)
    }
}

/// Trim notes and drop blanks so hand-edited files still satisfy the invariants.
fn normalize(entries: Entries) -> Entries {
    entries
        .into_iter()
        .filter_map(|(date, notes)| {
            let notes: Vec<String> = notes
                .into_iter()
                .map(|note| note.trim().to_string())
                .filter(|note| !note.is_empty())
                .collect();
            (!notes.is_empty()).then_some((date, notes))
        })
        .collect()
}
