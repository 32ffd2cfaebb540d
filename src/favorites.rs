//! File-backed set of favorited card ids.
//!
//! The whole set is rewritten on every toggle as a pretty-printed JSON array.
//! One mutex covers load, mutation and write, so concurrent toggles serialize.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tempfile::NamedTempFile;

use crate::error::Result;

/// Durable, thread-safe favorites set backed by a single JSON file.
#[derive(Debug)]
pub struct FavoritesStore {
    path: PathBuf,
    set: Mutex<HashSet<String>>,
}

impl FavoritesStore {
    /// Open the store at `path`, loading any existing favorites.
    ///
    /// A missing, empty or unparseable file yields an empty set. The file
    /// and its parent directory are only created by the first toggle.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let set = load_ids(&path);
        Self {
            path,
            set: Mutex::new(set),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // The guarded set is only replaced after a successful write, so a
    // poisoned lock still holds a consistent value.
    fn lock(&self) -> MutexGuard<'_, HashSet<String>> {
        self.set.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current favorites, each mapped to `true`.
    pub fn snapshot(&self) -> HashMap<String, bool> {
        self.lock().iter().map(|id| (id.clone(), true)).collect()
    }

    /// Favorite ids in ascending order.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.lock().iter().cloned().collect();
        ids.sort();
        ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lock().contains(id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Flip membership of `id` and persist the result.
    ///
    /// Returns whether `id` is a favorite afterwards. If the file cannot be
    /// written the in-memory set is left untouched and
    /// [`CatalogError::Persistence`](crate::CatalogError::Persistence) is returned.
    pub fn toggle(&self, id: &str) -> Result<bool> {
        let mut set = self.lock();

        let mut next = set.clone();
        let now_favorite = if next.remove(id) {
            false
        } else {
            next.insert(id.to_string());
            true
        };

        write_ids(&self.path, &next)?;
        *set = next;
        Ok(now_favorite)
    }
}

fn load_ids(path: &Path) -> HashSet<String> {
    let Ok(contents) = fs::read_to_string(path) else {
        return HashSet::new();
    };
    if contents.trim().is_empty() {
        return HashSet::new();
    }
    serde_json::from_str::<Vec<String>>(&contents)
        .map(|ids| ids.into_iter().collect())
        .unwrap_or_default()
}

/// Replace the file at `path` with `ids` via a temp file in the same directory.
fn write_ids(path: &Path, ids: &HashSet<String>) -> io::Result<()> {
    let mut sorted: Vec<&String> = ids.iter().collect();
    sorted.sort();
    let json = serde_json::to_string_pretty(&sorted).map_err(io::Error::other)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(json.as_bytes())?;
    tmp.write_all(b"\n")?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
