//! Bundled dataset files: read-only JSON arrays shipped next to the binary.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tokio::fs;
use tracing::{debug, warn};

use super::record::CropCategory;
use crate::error::DatasetError;

/// File names tried, in order, for each category.
const fn candidate_names(category: CropCategory) -> &'static [&'static str] {
    match category {
        CropCategory::Kharif => &["kharifData.json"],
        CropCategory::Rabi => &["rabiData.json"],
        CropCategory::Cash => &["cash crops.json", "cashCrops.json"],
        CropCategory::Fruit => &["fruitcrops.json", "jsonfruitcrop.json"],
    }
}

/// One dataset file for one category, resolved against a base directory.
#[derive(Debug, Clone)]
pub struct DatasetSource {
    pub category: CropCategory,
    candidates: Vec<PathBuf>,
}

impl DatasetSource {
    /// The default source for `category` under `dir`.
    pub fn for_category(dir: &Path, category: CropCategory) -> Self {
        Self {
            category,
            candidates: candidate_names(category)
                .iter()
                .map(|name| dir.join(name))
                .collect(),
        }
    }

    /// A source reading exactly one file.
    pub fn from_path(category: CropCategory, path: impl Into<PathBuf>) -> Self {
        Self {
            category,
            candidates: vec![path.into()],
        }
    }

    /// First candidate that exists on disk.
    fn existing_path(&self) -> Option<&Path> {
        self.candidates
            .iter()
            .map(PathBuf::as_path)
            .find(|p| p.is_file())
    }

    /// Read the dataset as raw JSON documents.
    pub async fn load(&self) -> Result<Vec<Value>, DatasetError> {
        let path = self.existing_path().ok_or_else(|| DatasetError::NotFound {
            checked: self.candidates.clone(),
        })?;

        let raw = fs::read_to_string(path)
            .await
            .map_err(|source| DatasetError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let parsed: Value = serde_json::from_str(&raw).map_err(|e| DatasetError::Malformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        match parsed {
            Value::Array(items) => {
                debug!(path = %path.display(), count = items.len(), "Dataset loaded");
                Ok(items)
            }
            _ => Err(DatasetError::NotAnArray {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Read the dataset, treating any failure as "no records".
    ///
    /// A missing file is expected (datasets are optional) and only logged at
    /// debug; unreadable or malformed files are logged as warnings.
    pub async fn load_or_empty(&self) -> Vec<Value> {
        match self.load().await {
            Ok(items) => items,
            Err(DatasetError::NotFound { .. }) => {
                debug!(category = %self.category, "No dataset file for category");
                Vec::new()
            }
            Err(e) => {
                warn!(category = %self.category, error = %e, "Dataset unusable, treating as empty");
                Vec::new()
            }
        }
    }
}
