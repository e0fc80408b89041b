//! Upload directory bootstrap.
//!
//! Guarantees `<root>/public/uploads/` exists and holds an empty `.gitkeep`
//! so version control keeps the directory around. Safe to run any number of
//! times; an existing placeholder is never rewritten.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

pub const UPLOAD_DIR: &str = "public/uploads";
pub const PLACEHOLDER_FILE: &str = ".gitkeep";

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("failed to resolve current working directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("failed to create uploads directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("uploads path {path} exists but is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("placeholder path {path} exists but is not a file")]
    PlaceholderNotAFile { path: PathBuf },

    #[error("failed to create placeholder {path}: {source}")]
    CreatePlaceholder {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirAction {
    Created,
    AlreadyPresent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderAction {
    Created,
    AlreadyPresent,
}

/// What a bootstrap run did to the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    pub uploads_dir: PathBuf,
    pub placeholder: PathBuf,
    pub directory: DirAction,
    pub placeholder_action: PlaceholderAction,
}

impl BootstrapReport {
    /// True when the run changed nothing on disk.
    pub fn is_noop(&self) -> bool {
        self.directory == DirAction::AlreadyPresent
            && self.placeholder_action == PlaceholderAction::AlreadyPresent
    }

    /// Human-readable progress, one line per step.
    pub fn messages(&self) -> Vec<String> {
        let dir = match self.directory {
            DirAction::Created => format!("Created uploads directory: {}", self.uploads_dir.display()),
            DirAction::AlreadyPresent => {
                format!("Uploads directory already exists: {}", self.uploads_dir.display())
            }
        };
        let placeholder = match self.placeholder_action {
            PlaceholderAction::Created => format!("Created {}", self.placeholder.display()),
            PlaceholderAction::AlreadyPresent => {
                format!("{} already exists", self.placeholder.display())
            }
        };
        vec![dir, placeholder]
    }
}

pub fn uploads_dir(root: &Path) -> PathBuf {
    root.join(UPLOAD_DIR)
}

/// Runs [`ensure_uploads_dir`] against the process working directory.
pub fn ensure_uploads_dir_in_cwd() -> Result<BootstrapReport, BootstrapError> {
    let root = std::env::current_dir().map_err(BootstrapError::CurrentDir)?;
    ensure_uploads_dir(&root)
}

/// Ensures `<root>/public/uploads/.gitkeep` exists.
///
/// Missing parents are created. Filesystem errors are returned as-is with the
/// offending path attached; nothing is retried or rolled back.
pub fn ensure_uploads_dir(root: &Path) -> Result<BootstrapReport, BootstrapError> {
    let dir = uploads_dir(root);
    let directory = ensure_dir(&dir)?;

    let placeholder = dir.join(PLACEHOLDER_FILE);
    let placeholder_action = ensure_placeholder(&placeholder)?;

    Ok(BootstrapReport {
        uploads_dir: dir,
        placeholder,
        directory,
        placeholder_action,
    })
}

fn ensure_dir(dir: &Path) -> Result<DirAction, BootstrapError> {
    if dir.is_dir() {
        debug!(path = %dir.display(), "uploads directory already present");
        return Ok(DirAction::AlreadyPresent);
    }
    if dir.exists() {
        warn!(path = %dir.display(), "uploads path is not a directory");
        return Err(BootstrapError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    fs::create_dir_all(dir).map_err(|source| BootstrapError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    info!(path = %dir.display(), "created uploads directory");
    Ok(DirAction::Created)
}

fn ensure_placeholder(path: &Path) -> Result<PlaceholderAction, BootstrapError> {
    if path.is_file() {
        debug!(path = %path.display(), "placeholder already present");
        return Ok(PlaceholderAction::AlreadyPresent);
    }
    if path.exists() {
        warn!(path = %path.display(), "placeholder path is not a file");
        return Err(BootstrapError::PlaceholderNotAFile {
            path: path.to_path_buf(),
        });
    }

    // create_new never truncates; another process winning the race is fine
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => {
            info!(path = %path.display(), "created placeholder");
            Ok(PlaceholderAction::Created)
        }
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists && path.is_file() => {
            Ok(PlaceholderAction::AlreadyPresent)
        }
        Err(source) => Err(BootstrapError::CreatePlaceholder {
            path: path.to_path_buf(),
            source,
        }),
    }
}
