//! Dictionary catalog configuration.
//!
//! # Format
//! ```json
//! {
//!   "dictionaries": [
//!     { "path": "dictionaries/base.json", "name": "Base" },
//!     { "path": "dictionaries/n5.json", "name": "JLPT N5" }
//!   ],
//!   "default_dictionary": "dictionaries/base.json"
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// One selectable dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionarySource {
    pub path: String,
    pub name: String,
}

impl DictionarySource {
    /// File name of the source, e.g. `base.json`.
    pub fn file_name(&self) -> &str {
        Path::new(&self.path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.path)
    }

    /// Identity under which a built dictionary is cached.
    pub fn cache_key(&self) -> String {
        format!("cached_dict_{}", self.file_name())
    }
}

/// The set of dictionaries a learner can switch between.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryCatalog {
    dictionaries: Vec<DictionarySource>,
    default_dictionary: String,
}

impl Default for DictionaryCatalog {
    fn default() -> Self {
        Self {
            dictionaries: vec![DictionarySource {
                path: "dictionaries/base.json".to_string(),
                name: "Base".to_string(),
            }],
            default_dictionary: "dictionaries/base.json".to_string(),
        }
    }
}

impl DictionaryCatalog {
    /// Build a catalog, checking that the default is one of the sources.
    pub fn new(dictionaries: Vec<DictionarySource>, default_dictionary: &str) -> Result<Self, CatalogError> {
        let catalog = Self {
            dictionaries,
            default_dictionary: default_dictionary.to_string(),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.dictionaries.is_empty() {
            return Err(CatalogError::Empty);
        }
        if !self.dictionaries.iter().any(|d| d.path == self.default_dictionary) {
            return Err(CatalogError::UnknownDefault(self.default_dictionary.clone()));
        }
        Ok(())
    }

    pub fn sources(&self) -> &[DictionarySource] {
        &self.dictionaries
    }

    pub fn default_source(&self) -> &DictionarySource {
        self.dictionaries
            .iter()
            .find(|d| d.path == self.default_dictionary)
            .unwrap_or(&self.dictionaries[0])
    }

    /// Find a dictionary by display name or file name.
    ///
    /// Unknown or missing requests resolve to the default dictionary.
    pub fn resolve(&self, requested: Option<&str>) -> &DictionarySource {
        requested
            .and_then(|wanted| {
                self.dictionaries
                    .iter()
                    .find(|d| d.name == wanted || d.file_name() == wanted)
            })
            .unwrap_or_else(|| self.default_source())
    }
}
