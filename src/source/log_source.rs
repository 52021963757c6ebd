use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::{LogError, Result};

/// Where a log file lives locally, and optionally where to fetch it
/// from when it is not there yet.
///
/// The analysis passes only need "a path that opens for sequential
/// read"; this type is the thin acquisition step that puts the file at
/// that path first. No retries, no caching beyond the file itself.
#[derive(Debug, Clone)]
pub struct LogSource {
    dir: PathBuf,
    base_url: Option<String>,
}

impl LogSource {
    /// A purely local source rooted at `dir`.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            dir: dir.into(),
            base_url: None,
        }
    }

    /// A source that can download missing files from `base_url`
    /// (the filename is appended verbatim).
    pub fn with_base_url<P: Into<PathBuf>, U: Into<String>>(dir: P, base_url: U) -> Self {
        Self {
            dir: dir.into(),
            base_url: Some(base_url.into()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn local_path(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }

    /// Ensures `filename` exists locally and returns its path.
    ///
    /// An existing local file wins without touching the network. A
    /// missing file is downloaded when a base URL is configured;
    /// otherwise the call fails with [`LogError::NotFound`].
    pub fn materialize(&self, filename: &str) -> Result<PathBuf> {
        let path = self.local_path(filename);
        if path.exists() {
            return Ok(path);
        }
        if self.base_url.is_some() {
            return self.download(filename);
        }
        Err(LogError::NotFound { path })
    }

    /// Downloads `filename` into the source directory, creating the
    /// directory if missing, and returns the local path.
    pub fn download(&self, filename: &str) -> Result<PathBuf> {
        let Some(base) = &self.base_url else {
            return Err(LogError::NotFound {
                path: self.local_path(filename),
            });
        };
        let url = format!("{base}{filename}");
        fs::create_dir_all(&self.dir)?;
        let mut response = reqwest::blocking::get(&url)
            .and_then(|r| r.error_for_status())
            .map_err(|source| LogError::Fetch {
                url: url.clone(),
                source,
            })?;
        let path = self.local_path(filename);
        let mut file = File::create(&path)?;
        response
            .copy_to(&mut file)
            .map_err(|source| LogError::Fetch {
                url: url.clone(),
                source,
            })?;
        info!("fetched {url} into {}", path.display());
        Ok(path)
    }

    /// Deletes the local copy of `filename`.
    pub fn remove(&self, filename: &str) -> Result<()> {
        let path = self.local_path(filename);
        match fs::remove_file(&path) {
            Err(e) if e.kind() == ErrorKind::NotFound => Err(LogError::NotFound { path }),
            other => Ok(other?),
        }
    }
}
