use std::path::PathBuf;

use crate::{config, types::LibraryPlaylist};

/// Snapshot of the user's playlists, stored as JSON in the data directory.
pub struct LibraryManager {
    playlists: Vec<LibraryPlaylist>,
}

impl LibraryManager {
    /// Wraps freshly fetched playlists; nothing is written until [`Self::persist`].
    pub fn new(playlists: Vec<LibraryPlaylist>) -> Self {
        Self { playlists }
    }

    /// Reads the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns a message when the file is missing or not valid JSON.
    pub async fn load() -> Result<Self, String> {
        let content = async_fs::read_to_string(Self::library_path())
            .await
            .map_err(|e| e.to_string())?;
        let playlists: Vec<LibraryPlaylist> =
            serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { playlists })
    }

    /// Writes the snapshot and returns where it went.
    pub async fn persist(&self) -> Result<PathBuf, String> {
        let path = Self::library_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.playlists).map_err(|e| e.to_string())?;
        async_fs::write(&path, json)
            .await
            .map_err(|e| e.to_string())?;
        Ok(path)
    }

    /// Stored playlists in the order they were fetched.
    pub fn playlists(&self) -> &[LibraryPlaylist] {
        &self.playlists
    }

    pub fn count_playlists(&self) -> usize {
        self.playlists.len()
    }

    /// Number of stored playlist entries; playlists stored without their
    /// entries count as zero.
    pub fn count_items(&self) -> usize {
        self.playlists
            .iter()
            .map(|p| p.items.as_ref().map_or(0, Vec::len))
            .sum()
    }

    fn library_path() -> PathBuf {
        config::data_dir().join("library/playlists.json")
    }
}
