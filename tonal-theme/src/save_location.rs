//! Model behind the one-time save location picker.
//!
//! The picker lists recently used folders, the folder picked in this session
//! and the configured default folder, and lets the user pick one of them for a
//! single save. A `None` uri stands for the system's default folder.

use chrono::DateTime;
use tracing::trace;

const DEFAULT_FOLDER_TITLE: &str = "Default folder";
const DEFAULT_SUBTITLE: &str = "Default";

/// A folder that was used for a one-time save.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OneTimeSaveLocation {
    /// Folder uri.
    pub uri: String,
    /// Last use, in milliseconds since the Unix epoch.
    pub date: Option<i64>,
    /// Number of saves into the folder.
    pub count: u32,
}

impl OneTimeSaveLocation {
    /// A location that has not been used yet.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            date: None,
            count: 0,
        }
    }
}

/// Selection state of the picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveLocationSelection {
    history: Vec<OneTimeSaveLocation>,
    default_folder: Option<String>,
    temp_selected: Option<String>,
    selected: Option<String>,
}

impl SaveLocationSelection {
    /// Opens the picker with the configured default folder preselected.
    pub fn new(history: Vec<OneTimeSaveLocation>, default_folder: Option<String>) -> Self {
        Self {
            history,
            temp_selected: default_folder.clone(),
            selected: default_folder.clone(),
            default_folder,
        }
    }

    /// Listed entries: history, then the folder picked in this session, then
    /// the default folder, without repeated uris. `None` is the system
    /// default folder.
    pub fn entries(&self) -> Vec<Option<OneTimeSaveLocation>> {
        let extra = [&self.temp_selected, &self.default_folder]
            .into_iter()
            .map(|uri| uri.as_deref().map(OneTimeSaveLocation::new));

        let mut entries: Vec<Option<OneTimeSaveLocation>> = Vec::new();
        for entry in self.history.iter().cloned().map(Some).chain(extra) {
            let uri = entry.as_ref().map(|e| e.uri.as_str());
            if !entries.iter().any(|e| e.as_ref().map(|e| e.uri.as_str()) == uri) {
                entries.push(entry);
            }
        }
        entries
    }

    /// Selects the entry at `index` of [`entries`](Self::entries).
    ///
    /// Returns `false` when `index` is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(entry) = self.entries().into_iter().nth(index) else {
            return false;
        };
        let uri = entry.map(|e| e.uri);
        trace!(?uri, "save location selected");
        if uri.is_some() {
            self.temp_selected.clone_from(&uri);
        }
        self.selected = uri;
        true
    }

    /// Adds a folder chosen through the system folder picker and selects it.
    pub fn add_path(&mut self, uri: impl Into<String>) {
        let uri = uri.into();
        self.temp_selected = Some(uri.clone());
        self.selected = Some(uri);
    }

    /// Folder the system picker should open in.
    pub fn picker_start(&self) -> Option<&str> {
        self.selected.as_deref().or(self.default_folder.as_deref())
    }

    /// Whether `entry` is the selected one.
    pub fn is_selected(&self, entry: Option<&OneTimeSaveLocation>) -> bool {
        self.selected.as_deref() == entry.map(|e| e.uri.as_str())
    }

    /// Human readable folder name of `entry`.
    pub fn title(&self, entry: Option<&OneTimeSaveLocation>) -> String {
        entry
            .and_then(|e| readable_path(&e.uri))
            .unwrap_or_else(|| DEFAULT_FOLDER_TITLE.to_string())
    }

    /// `"Default"` for the configured folder, otherwise the last use date and
    /// save count, e.g. `"05 March 2024 (3)"`. `None` when there is nothing to
    /// show.
    pub fn subtitle(&self, entry: Option<&OneTimeSaveLocation>) -> Option<String> {
        if entry.map(|e| e.uri.as_str()) == self.default_folder.as_deref() {
            return Some(DEFAULT_SUBTITLE.to_string());
        }
        let entry = entry?;
        let date = entry
            .date
            .and_then(DateTime::from_timestamp_millis)
            .map(|date| date.format("%d %B %Y").to_string())
            .unwrap_or_default();
        let count = if entry.count > 0 {
            format!("({})", entry.count)
        } else {
            String::new()
        };
        let subtitle = format!("{date} {count}");
        let subtitle = subtitle.trim();
        (!subtitle.is_empty()).then(|| subtitle.to_string())
    }

    /// The uri to save into; `None` for the system default folder.
    pub fn confirm(self) -> Option<String> {
        self.selected
    }
}

/// `content://…/tree/primary%3APictures%2FExports` → `Pictures/Exports`.
fn readable_path(uri: &str) -> Option<String> {
    let encoded = uri.rsplit('/').next().unwrap_or(uri);
    let decoded = urlencoding::decode(encoded).ok()?;
    let path = match decoded.split_once(':') {
        Some(("primary", path)) => path.to_string(),
        Some((volume, path)) => format!("{volume}/{path}"),
        None if uri.starts_with('/') => uri.to_string(),
        None => decoded.into_owned(),
    };
    let path = path.trim_matches('/');
    (!path.is_empty()).then(|| path.to_string())
}
