use std::path::{Path, PathBuf};

use crate::error::AppResult;

use super::StorageBackend;

/// File-backed storage, one JSON file per key under a data directory
///
/// The directory is created lazily on first write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

#[async_trait::async_trait]
impl StorageBackend for FileStorage {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn put(&self, key: &str, value: &str) -> AppResult<()> {
        tokio::fs::create_dir_all(&self.data_dir).await?;
        tokio::fs::write(self.path_for(key), value).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_storage() -> FileStorage {
        let dir = std::env::temp_dir().join(format!("edumarket-test-{}", uuid::Uuid::new_v4()));
        FileStorage::new(dir)
    }

    #[tokio::test]
    async fn test_get_missing_key_is_none() {
        let storage = temp_storage();
        assert_eq!(storage.get("favorites").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let storage = temp_storage();
        storage.put("favorites", r#"["1","2"]"#).await.unwrap();
        assert_eq!(
            storage.get("favorites").await.unwrap().as_deref(),
            Some(r#"["1","2"]"#)
        );
        tokio::fs::remove_dir_all(&storage.data_dir).await.unwrap();
    }
}
