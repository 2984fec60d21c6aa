//! Loading descriptor files from directories into an [`EngineRegistry`].
//!
//! Directories and files are reached through [`DescriptorDirectory`] and
//! [`DescriptorFile`] so hosts can supply their own storage. [`FsDirectory`]
//! is the std::fs implementation.

use std::fs;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;

use crate::descriptor::Engine;
use crate::errors::{Error, Result};
use crate::registry::EngineRegistry;

pub type Entries<'a> = Box<dyn Iterator<Item = io::Result<Box<dyn DescriptorFile>>> + 'a>;

pub trait DescriptorDirectory {
    /// Human-readable location, used in log messages.
    fn location(&self) -> String;
    /// False when the directory is missing or is something else.
    fn is_directory(&self) -> bool;
    fn entries(&self) -> io::Result<Entries<'_>>;
}

pub trait DescriptorFile {
    fn location(&self) -> String;
    fn leaf_name(&self) -> String;
    fn is_regular_file(&self) -> bool;
    fn open(&self) -> io::Result<Box<dyn Read>>;
}

/// Counts from one [`load_all`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub failed: usize,
    pub skipped_directories: usize,
    pub failed_directories: usize,
}

/// Loads every descriptor in `dirs`, in order, into `registry`.
///
/// Engines are keyed by file leaf name, so a later directory overrides an
/// earlier one. Nothing here fails: bad files and unreadable directories
/// are logged and counted.
pub fn load_all<D: DescriptorDirectory>(registry: &mut EngineRegistry, dirs: &[D]) -> LoadSummary {
    let mut summary = LoadSummary::default();
    for dir in dirs {
        if !dir.is_directory() {
            tracing::debug!(path = %dir.location(), "search engine directory not present");
            summary.skipped_directories += 1;
            continue;
        }
        if let Err(e) = load_directory(registry, dir, &mut summary) {
            tracing::warn!(error = %e, "search engine directory scan aborted");
            summary.failed_directories += 1;
        }
    }
    tracing::info!(
        loaded = summary.loaded,
        failed = summary.failed,
        engines = registry.len(),
        "search engines loaded"
    );
    summary
}

fn load_directory<D: DescriptorDirectory + ?Sized>(
    registry: &mut EngineRegistry,
    dir: &D,
    summary: &mut LoadSummary,
) -> Result<()> {
    let scan_error = |source| Error::DirectoryScan { path: dir.location(), source };

    for entry in dir.entries().map_err(scan_error)? {
        let file = entry.map_err(scan_error)?;
        if !file.is_regular_file() {
            continue;
        }
        match load_file(file.as_ref()) {
            Ok(engine) => {
                tracing::debug!(
                    key = %file.leaf_name(),
                    name = engine.name.as_deref().unwrap_or_default(),
                    "loaded search engine"
                );
                registry.insert(file.leaf_name(), engine);
                summary.loaded += 1;
            }
            Err(e) => {
                tracing::warn!(path = %file.location(), error = %e, "failed to load search engine");
                summary.failed += 1;
            }
        }
    }
    Ok(())
}

/// Reads and parses one descriptor file.
pub fn load_file(file: &dyn DescriptorFile) -> Result<Engine> {
    let wrap = |e: Error| Error::FileLoad { path: file.location(), source: Box::new(e) };
    let stream = file.open().map_err(|e| wrap(e.into()))?;
    Engine::from_reader(BufReader::new(stream)).map_err(wrap)
}

/// A directory on the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsDirectory {
    path: PathBuf,
}

impl FsDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DescriptorDirectory for FsDirectory {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn is_directory(&self) -> bool {
        self.path.is_dir()
    }

    fn entries(&self) -> io::Result<Entries<'_>> {
        let read_dir = fs::read_dir(&self.path)?;
        Ok(Box::new(read_dir.map(|entry| {
            entry.map(|e| Box::new(FsFile { path: e.path() }) as Box<dyn DescriptorFile>)
        })))
    }
}

#[derive(Debug, Clone)]
struct FsFile {
    path: PathBuf,
}

impl DescriptorFile for FsFile {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn leaf_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    // follows symlinks
    fn is_regular_file(&self) -> bool {
        self.path.is_file()
    }

    fn open(&self) -> io::Result<Box<dyn Read>> {
        Ok(Box::new(fs::File::open(&self.path)?))
    }
}
