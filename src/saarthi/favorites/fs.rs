use super::FavoritesBackend;
use crate::error::{Result, SaarthiError};
use crate::model::PropertyId;
use std::fs;
use std::path::PathBuf;

const FAVORITES_FILENAME: &str = "favorites.json";

/// File-based favorites persistence: one JSON array of ids.
pub struct FileBackend {
    data_dir: PathBuf,
}

impl FileBackend {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn favorites_path(&self) -> PathBuf {
        self.data_dir.join(FAVORITES_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(SaarthiError::Io)?;
        }
        Ok(())
    }
}

impl FavoritesBackend for FileBackend {
    fn load(&self) -> Result<Vec<PropertyId>> {
        let path = self.favorites_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path).map_err(SaarthiError::Io)?;
        let ids: Vec<PropertyId> =
            serde_json::from_str(&content).map_err(SaarthiError::Serialization)?;
        Ok(ids)
    }

    fn save(&mut self, ids: &[PropertyId]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string(ids).map_err(SaarthiError::Serialization)?;
        fs::write(self.favorites_path(), content).map_err(SaarthiError::Io)?;
        Ok(())
    }
}
