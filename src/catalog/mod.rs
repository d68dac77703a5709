//! Content catalog: crop records merged from bundled datasets and the
//! document store.
//!
//! Per category, dataset records come first and store records after them.
//! Entries are deduplicated by normalized name with the first one winning,
//! so list numbering is stable for a given set of sources.

pub mod dataset;
pub mod record;

use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

pub use dataset::DatasetSource;
pub use record::{CropCategory, CropKind, CropRecord, FertilizerStep, LocalizedText, PestEntry, normalize_name};

use crate::error::CatalogError;
use crate::store::{CASH_CROPS, CROPS, DocumentStore, FRUIT_CROPS};

/// One numbered entry of a category list.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub display_name: String,
    pub record: CropRecord,
}

/// Where a search hit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Dataset(CropCategory),
    Store(&'static str),
}

/// Result of an exact-name search.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogMatch {
    pub heading: String,
    pub record: CropRecord,
    pub origin: Origin,
}

/// Every category's deduplicated entries.
pub type CatalogSnapshot = BTreeMap<CropCategory, Vec<CatalogEntry>>;

/// Store collection backing `category`, and the field that names its records.
const fn collection_for(category: CropCategory) -> (&'static str, &'static str) {
    match category {
        CropCategory::Kharif | CropCategory::Rabi => (CROPS, "name"),
        CropCategory::Cash => (CASH_CROPS, "crop_name"),
        CropCategory::Fruit => (FRUIT_CROPS, "crop_name"),
    }
}

/// Whether a `crops` document belongs to a season category.
fn in_season_category(document: &Value, category: CropCategory) -> bool {
    let wanted = category.to_string();
    let text = |field: &str| {
        document
            .get(field)
            .and_then(Value::as_str)
            .map(|s| s.trim().to_lowercase())
    };
    text("category").is_some_and(|c| c == wanted)
        || text("season").is_some_and(|s| s.contains(&wanted))
}

pub struct Catalog {
    sources: Vec<DatasetSource>,
    store: Arc<dyn DocumentStore>,
}

impl Catalog {
    /// A catalog reading the default dataset files under `dataset_dir`.
    pub fn new(dataset_dir: &Path, store: Arc<dyn DocumentStore>) -> Self {
        let sources = CropCategory::ALL
            .into_iter()
            .map(|category| DatasetSource::for_category(dataset_dir, category))
            .collect();
        Self::with_sources(sources, store)
    }

    pub fn with_sources(sources: Vec<DatasetSource>, store: Arc<dyn DocumentStore>) -> Self {
        Self { sources, store }
    }

    /// Normalized dataset records for `category`, in file order.
    async fn dataset_records(&self, category: CropCategory) -> Vec<CropRecord> {
        let mut records = Vec::new();
        for source in self.sources.iter().filter(|s| s.category == category) {
            records.extend(
                source
                    .load_or_empty()
                    .await
                    .iter()
                    .filter_map(|v| CropRecord::from_value(v, category.kind()))
                    .map(|r| r.with_default_season(category.default_season())),
            );
        }
        records
    }

    /// Normalized store records for `category`, in insertion order.
    async fn store_records(&self, category: CropCategory) -> Result<Vec<CropRecord>, CatalogError> {
        let (collection, _) = collection_for(category);
        let documents = self.store.find_all(collection).await?;
        Ok(documents
            .iter()
            .filter(|d| collection != CROPS || in_season_category(d, category))
            .filter_map(|d| CropRecord::from_value(d, category.kind()))
            .collect())
    }

    /// Deduplicated entries for one category: datasets first, then the store.
    pub async fn list_by_category(
        &self,
        category: CropCategory,
    ) -> Result<Vec<CatalogEntry>, CatalogError> {
        let mut records = self.dataset_records(category).await;
        records.extend(self.store_records(category).await?);

        let mut seen = HashSet::new();
        let entries: Vec<CatalogEntry> = records
            .into_iter()
            .filter(|r| seen.insert(r.normalized_name()))
            .map(|record| CatalogEntry {
                display_name: record.display_name().to_string(),
                record,
            })
            .collect();

        debug!(category = %category, count = entries.len(), "Category listed");
        Ok(entries)
    }

    /// Every category, in menu order.
    pub async fn load_all(&self) -> Result<CatalogSnapshot, CatalogError> {
        let mut snapshot = CatalogSnapshot::new();
        for category in CropCategory::ALL {
            snapshot.insert(category, self.list_by_category(category).await?);
        }
        Ok(snapshot)
    }

    /// Exact, case-insensitive, trimmed name match. Dataset sources are
    /// searched in category order before the store collections.
    pub async fn find_by_exact_name(&self, name: &str) -> Result<Option<CatalogMatch>, CatalogError> {
        let wanted = normalize_name(name);
        if wanted.is_empty() {
            return Ok(None);
        }

        for category in CropCategory::ALL {
            if let Some(record) = self
                .dataset_records(category)
                .await
                .into_iter()
                .find(|r| r.normalized_name() == wanted)
            {
                return Ok(Some(CatalogMatch {
                    heading: record.display_name().to_string(),
                    record,
                    origin: Origin::Dataset(category),
                }));
            }
        }

        for category in [CropCategory::Kharif, CropCategory::Cash, CropCategory::Fruit] {
            let (collection, field) = collection_for(category);
            let Some(document) = self.store.find_by_field(collection, field, name).await? else {
                continue;
            };
            if let Some(record) = CropRecord::from_value(&document, category.kind()) {
                return Ok(Some(CatalogMatch {
                    heading: record.display_name().to_string(),
                    record,
                    origin: Origin::Store(collection),
                }));
            }
        }

        Ok(None)
    }
}
