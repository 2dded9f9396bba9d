//! Dictionary loading and caching.
//!
//! Dictionaries are built once per source and cached by the source's cache
//! key. A cached dictionary is never patched; switching sources swaps in a
//! different `Arc<Dictionary>`.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use kotoba_core::{parse_glossary, Dictionary, DictionaryCatalog, DictionarySource, Transliterator};

use crate::error::{ApiError, Result};

/// A dictionary together with the catalog source it came from.
#[derive(Debug, Clone)]
pub struct LoadedDictionary {
    pub name: String,
    pub source: DictionarySource,
    pub dictionary: Arc<Dictionary>,
}

/// Loads dictionaries named in the catalog and keeps them for reuse.
pub struct DictionaryStore {
    catalog: DictionaryCatalog,
    dictionary_dir: PathBuf,
    transliterator: Arc<dyn Transliterator>,
    cache: Mutex<HashMap<String, Arc<Dictionary>>>,
}

impl DictionaryStore {
    pub fn new(
        catalog: DictionaryCatalog,
        dictionary_dir: PathBuf,
        transliterator: Arc<dyn Transliterator>,
    ) -> Self {
        Self {
            catalog,
            dictionary_dir,
            transliterator,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn catalog(&self) -> &DictionaryCatalog {
        &self.catalog
    }

    /// Get the requested dictionary (or the default), building it on first use.
    pub async fn load(&self, requested: Option<&str>) -> Result<LoadedDictionary> {
        let source = self.catalog.resolve(requested).clone();
        let key = source.cache_key();

        let cached = self
            .cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned();
        if let Some(dictionary) = cached {
            tracing::debug!("Dictionary {} served from cache", source.name);
            return Ok(LoadedDictionary {
                name: source.name.clone(),
                source,
                dictionary,
            });
        }

        let built = Arc::new(self.build(&source).await?);
        let dictionary = self
            .cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_insert(built)
            .clone();

        Ok(LoadedDictionary {
            name: source.name.clone(),
            source,
            dictionary,
        })
    }

    /// Number of dictionaries currently cached.
    pub fn cached_count(&self) -> usize {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    async fn build(&self, source: &DictionarySource) -> Result<Dictionary> {
        let path = self.source_path(source);

        let json = match tokio::fs::read_to_string(&path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!("Dictionary file {} not found, using built-in words", path.display());
                return Ok(Dictionary::builtin(self.transliterator.as_ref()));
            }
            Err(e) => {
                return Err(ApiError::Internal(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let glossary = parse_glossary(&json)?;
        let (dictionary, rejected) = Dictionary::build(glossary, self.transliterator.as_ref());
        for error in &rejected {
            tracing::warn!("Skipping entry in {}: {}", source.name, error);
        }

        if dictionary.is_empty() {
            tracing::warn!("Dictionary {} has no usable words, using built-in words", source.name);
            return Ok(Dictionary::builtin(self.transliterator.as_ref()));
        }

        tracing::info!(
            "Dictionary {} loaded from {} with {} words",
            source.name,
            path.display(),
            dictionary.len()
        );
        Ok(dictionary)
    }

    /// Relative paths are looked up under the dictionary directory unless
    /// they already point into it.
    fn source_path(&self, source: &DictionarySource) -> PathBuf {
        let path = Path::new(&source.path);
        if path.is_absolute() || path.starts_with(&self.dictionary_dir) {
            path.to_path_buf()
        } else {
            self.dictionary_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kotoba_core::StaticTransliterator;

    fn transliterator() -> Arc<dyn Transliterator> {
        Arc::new(
            StaticTransliterator::new()
                .with("猫", &[("猫", "ねこ", "neko")])
                .with("私", &[("私", "わたし", "watashi")])
                .with("犬", &[("犬", "いぬ", "inu")]),
        )
    }

    fn catalog() -> DictionaryCatalog {
        DictionaryCatalog::new(
            vec![
                DictionarySource {
                    path: "animals.json".to_string(),
                    name: "Animals".to_string(),
                },
                DictionarySource {
                    path: "missing.json".to_string(),
                    name: "Missing".to_string(),
                },
            ],
            "animals.json",
        )
        .unwrap()
    }

    fn store(dir: &Path) -> DictionaryStore {
        DictionaryStore::new(catalog(), dir.to_path_buf(), transliterator())
    }

    #[tokio::test]
    async fn test_load_and_cache() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("animals.json"), r#"{"猫": "(ねこ) cat", "犬": "dog"}"#).unwrap();
        let store = store(dir.path());

        let first = store.load(None).await.unwrap();
        assert_eq!(first.name, "Animals");
        assert_eq!(first.dictionary.len(), 2);
        assert_eq!(first.dictionary.get("猫").unwrap().meaning, "cat");

        let second = store.load(Some("animals.json")).await.unwrap();
        assert!(Arc::ptr_eq(&first.dictionary, &second.dictionary));
        assert_eq!(store.cached_count(), 1);
    }

    #[tokio::test]
    async fn test_missing_file_uses_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path());

        let loaded = store.load(Some("Missing")).await.unwrap();
        assert_eq!(loaded.name, "Missing");
        assert!(loaded.dictionary.get("私").is_some());
        assert!(loaded.dictionary.get("猫").is_some());
    }

    #[tokio::test]
    async fn test_unusable_entries_fall_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("animals.json"), r#"{"鳥": "bird"}"#).unwrap();
        let store = store(dir.path());

        let loaded = store.load(None).await.unwrap();
        assert_eq!(loaded.dictionary.len(), 2);
        assert!(loaded.dictionary.get("鳥").is_none());
    }

    #[tokio::test]
    async fn test_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("animals.json"), "not json").unwrap();
        let store = store(dir.path());

        let result = store.load(None).await;
        assert!(matches!(result, Err(ApiError::Dictionary(_))));
        assert_eq!(store.cached_count(), 0);
    }

    #[test]
    fn test_source_path_resolution() {
        let store = DictionaryStore::new(catalog(), PathBuf::from("dictionaries"), transliterator());
        let source = |path: &str| DictionarySource {
            path: path.to_string(),
            name: "x".to_string(),
        };

        assert_eq!(store.source_path(&source("base.json")), PathBuf::from("dictionaries/base.json"));
        assert_eq!(
            store.source_path(&source("dictionaries/base.json")),
            PathBuf::from("dictionaries/base.json")
        );
        assert_eq!(store.source_path(&source("/srv/n5.json")), PathBuf::from("/srv/n5.json"));
    }
}
