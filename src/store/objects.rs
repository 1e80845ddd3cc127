//! Object store collaborator
//!
//! Filesystem-backed store for binary resources (PDFs). Keys look like
//! `pdfs/1700000000000_report.pdf`; the public URL for a key is
//! `{public_base_url}/{key}`. Key segments are validated before any
//! filesystem access to rule out path traversal.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info};

use super::error::{Result, StoreError};

/// One listed object.
#[derive(Debug, Clone)]
pub struct ObjectEntry {
    pub key: String,
    pub size: u64,
}

#[derive(Debug, Clone)]
pub struct ObjectStore {
    base_path: PathBuf,
    public_base_url: String,
}

impl ObjectStore {
    pub async fn new(base_path: PathBuf, public_base_url: String) -> Result<Self> {
        fs::create_dir_all(&base_path).await?;
        info!(path = %base_path.display(), "Object store initialized");
        Ok(Self {
            base_path,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Store `bytes` under `key`. The content type is accepted for
    /// contract compatibility; the filesystem backend has nowhere to
    /// record it.
    pub async fn put(&self, key: &str, bytes: &[u8], _content_type: &str) -> Result<()> {
        if bytes.is_empty() {
            return Err(StoreError::InvalidKey(format!("empty object for {}", key)));
        }
        let path = self.safe_path(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&path, bytes).await?;
        debug!(key, size = bytes.len(), "Stored object");
        Ok(())
    }

    /// All objects whose key starts with `prefix` (a directory-like
    /// prefix ending in `/`). A missing prefix directory is an empty
    /// listing, not an error.
    pub async fn list(&self, prefix: &str) -> Result<Vec<ObjectEntry>> {
        let dir = self.safe_path(prefix.trim_end_matches('/'))?;
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        let mut read_dir = fs::read_dir(&dir).await?;
        while let Some(entry) = read_dir.next_entry().await? {
            let meta = entry.metadata().await?;
            if !meta.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                entries.push(ObjectEntry {
                    key: format!("{}{}", normalized_prefix(prefix), name),
                    size: meta.len(),
                });
            }
        }
        // Directory iteration order is unspecified; keep listings stable.
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        debug!(prefix, count = entries.len(), "Listed objects");
        Ok(entries)
    }

    /// Publicly fetchable URL for a key.
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url, key)
    }

    /// Resolve a key under the base directory, rejecting traversal.
    fn safe_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains('\\') || key.starts_with('/') {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        let mut resolved = self.base_path.clone();
        for segment in key.split('/') {
            if segment.is_empty() || segment == "." || segment == ".." {
                return Err(StoreError::InvalidKey(key.to_string()));
            }
            resolved.push(segment);
        }
        Ok(resolved)
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

fn normalized_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{}/", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn test_store() -> (ObjectStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = ObjectStore::new(dir.path().to_path_buf(), "https://cdn.test".to_string())
            .await
            .unwrap();
        (store, dir)
    }

    #[tokio::test]
    async fn put_and_list_roundtrip() {
        let (store, _dir) = test_store().await;
        store
            .put("pdfs/1700_guide.pdf", b"%PDF-1.4", "application/pdf")
            .await
            .unwrap();

        let listed = store.list("pdfs/").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].key, "pdfs/1700_guide.pdf");
        assert_eq!(listed[0].size, 8);
    }

    #[tokio::test]
    async fn missing_prefix_lists_empty() {
        let (store, _dir) = test_store().await;
        assert!(store.list("pdfs/").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_payload_rejected() {
        let (store, _dir) = test_store().await;
        assert!(store.put("pdfs/x.pdf", b"", "application/pdf").await.is_err());
    }

    #[tokio::test]
    async fn traversal_keys_rejected() {
        let (store, _dir) = test_store().await;
        for key in ["../escape.pdf", "pdfs/../../etc/passwd", "/abs.pdf", ""] {
            assert!(
                store.put(key, b"data", "application/pdf").await.is_err(),
                "key {:?} should be rejected",
                key
            );
        }
    }

    #[tokio::test]
    async fn public_url_joins_base_and_key() {
        let (store, _dir) = test_store().await;
        assert_eq!(
            store.public_url("pdfs/1_a.pdf"),
            "https://cdn.test/pdfs/1_a.pdf"
        );
    }
}
