//! JSON file implementation of the link repository.
//!
//! All links live in memory; every mutation rewrites the whole data file
//! before it is acknowledged. Writes go to a sibling `.tmp` file which is
//! fsynced and then renamed over the data file, so the file on disk is always
//! either the previous or the next complete document.

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::iter;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::document::LinkDocument;
use crate::infrastructure::persistence::error::StorageError;

/// In-memory link table in insertion order with a code index.
#[derive(Debug, Default)]
struct LinkTable {
    links: Vec<Link>,
    by_code: HashMap<String, usize>,
}

impl LinkTable {
    fn from_links(path: &Path, links: Vec<Link>) -> Result<Self, StorageError> {
        let mut table = Self::default();
        for link in links {
            if table.by_code.contains_key(&link.code) {
                return Err(StorageError::Malformed {
                    path: path.to_path_buf(),
                    reason: format!("duplicate code '{}'", link.code),
                });
            }
            table.push(link);
        }
        Ok(table)
    }

    fn push(&mut self, link: Link) {
        self.by_code.insert(link.code.clone(), self.links.len());
        self.links.push(link);
    }

    fn get(&self, code: &str) -> Option<&Link> {
        self.by_code.get(code).map(|&idx| &self.links[idx])
    }

    fn get_mut(&mut self, code: &str) -> Option<&mut Link> {
        self.by_code.get(code).map(|&idx| &mut self.links[idx])
    }

    fn to_json(&self) -> Result<Vec<u8>, StorageError> {
        render(&self.links)
    }
}

fn render<'a>(links: impl IntoIterator<Item = &'a Link>) -> Result<Vec<u8>, StorageError> {
    Ok(serde_json::to_vec_pretty(&LinkDocument::from_links(links))?)
}

/// Link store backed by a single JSON document.
///
/// Mutations hold the write lock while the next document is written and only
/// touch the in-memory table once the write has succeeded. They run on a
/// spawned task, so a caller dropped mid-write (client disconnect) cannot
/// leave memory and disk apart.
#[derive(Debug)]
pub struct JsonLinkRepository {
    path: PathBuf,
    table: Arc<RwLock<LinkTable>>,
}

impl JsonLinkRepository {
    /// Loads the store from `path`.
    ///
    /// A missing file is treated as an empty store and created immediately.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Malformed`] if the file exists but is not a
    /// valid link document, and [`StorageError::Io`] if it cannot be read or
    /// created. Callers are expected to abort startup in both cases.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        let table = match read_links(&path).await {
            Ok(links) => {
                let table = LinkTable::from_links(&path, links)?;
                tracing::info!(
                    path = %path.display(),
                    links = table.links.len(),
                    "Loaded link store"
                );
                table
            }
            Err(e) if e.is_missing_file() => {
                let table = LinkTable::default();
                write_atomic(&path, &table.to_json()?).await?;
                tracing::info!(path = %path.display(), "Data file not found, created empty store");
                table
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            path,
            table: Arc::new(RwLock::new(table)),
        })
    }

    /// Path of the backing data file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn join<T>(task: JoinHandle<Result<T, AppError>>) -> Result<T, AppError> {
    task.await.map_err(|e| {
        AppError::internal("Storage task failed", json!({ "error": e.to_string() }))
    })?
}

#[async_trait]
impl LinkRepository for JsonLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let path = self.path.clone();
        let table = Arc::clone(&self.table);

        let task: JoinHandle<Result<Link, AppError>> = tokio::spawn(async move {
            let mut table = table.write().await;

            if table.get(&new_link.code).is_some() {
                return Err(AppError::conflict(
                    "Short code already exists",
                    json!({ "code": new_link.code }),
                ));
            }

            let link = Link::fresh(new_link);
            let bytes = render(table.links.iter().chain(iter::once(&link)))?;

            if let Err(e) = write_atomic(&path, &bytes).await {
                tracing::error!(code = %link.code, error = %e, "Failed to persist new link");
                return Err(e.into());
            }

            table.push(link.clone());
            Ok(link)
        });

        join(task).await
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.table.read().await.get(code).cloned())
    }

    async fn find_by_original_url(&self, original: &str) -> Result<Option<Link>, AppError> {
        let table = self.table.read().await;
        Ok(table
            .links
            .iter()
            .find(|link| link.original == original)
            .cloned())
    }

    async fn record_click(&self, code: &str) -> Result<Option<Link>, AppError> {
        let path = self.path.clone();
        let table = Arc::clone(&self.table);
        let code = code.to_string();

        let task: JoinHandle<Result<Option<Link>, AppError>> = tokio::spawn(async move {
            let mut table = table.write().await;

            let Some(current) = table.get(&code) else {
                return Ok(None);
            };
            let updated = Link {
                clicks: current.clicks + 1,
                ..current.clone()
            };

            let bytes = render(
                table
                    .links
                    .iter()
                    .map(|link| if link.code == code { &updated } else { link }),
            )?;

            if let Err(e) = write_atomic(&path, &bytes).await {
                tracing::error!(code = %code, error = %e, "Failed to persist click");
                return Err(e.into());
            }

            if let Some(link) = table.get_mut(&code) {
                link.clicks = updated.clicks;
            }
            Ok(Some(updated))
        });

        join(task).await
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        Ok(self.table.read().await.links.clone())
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.table.read().await.links.len())
    }
}

/// Reads and parses a data file without creating it.
///
/// Links are returned in file order. Used by the store on startup and by
/// read-only tooling.
pub async fn read_links(path: &Path) -> Result<Vec<Link>, StorageError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let document: LinkDocument =
        serde_json::from_slice(&bytes).map_err(|e| StorageError::Malformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    Ok(document
        .urls
        .into_iter()
        .map(|(code, stored)| stored.into_link(code))
        .collect())
}

/// Replaces the content of `path` with `bytes` via a temp file and rename.
async fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    let tmp = temp_path(path);
    let io_err = |source: std::io::Error| StorageError::Io {
        path: tmp.clone(),
        source,
    };

    let mut file = tokio::fs::File::create(&tmp).await.map_err(io_err)?;
    file.write_all(bytes).await.map_err(io_err)?;
    file.sync_all().await.map_err(io_err)?;
    drop(file);

    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

impl StorageError {
    fn is_missing_file(&self) -> bool {
        matches!(self, StorageError::Io { source, .. } if source.kind() == ErrorKind::NotFound)
    }
}
