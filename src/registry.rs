use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::descriptor::Engine;
use crate::loader::{self, FsDirectory, LoadSummary};

/// Loaded engines keyed by descriptor file name.
///
/// Cloning is cheap and yields a snapshot: later inserts into either copy
/// don't show up in the other.
#[derive(Clone, Default, Debug)]
pub struct EngineRegistry {
    inner: Arc<HashMap<String, Engine>>,
}

impl EngineRegistry {
    pub fn new() -> Self { Self::default() }

    /// Registry filled from the given directories, in order.
    pub fn load_paths(paths: &[PathBuf]) -> (Self, LoadSummary) {
        let mut reg = Self::new();
        let dirs: Vec<FsDirectory> = paths.iter().cloned().map(FsDirectory::new).collect();
        let summary = loader::load_all(&mut reg, &dirs);
        (reg, summary)
    }

    /// Inserts under `key`, replacing and returning any previous engine.
    pub fn insert(&mut self, key: impl Into<String>, engine: Engine) -> Option<Engine> {
        Arc::make_mut(&mut self.inner).insert(key.into(), engine)
    }

    pub fn remove(&mut self, key: &str) -> Option<Engine> {
        Arc::make_mut(&mut self.inner).remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Engine> {
        self.inner.get(key)
    }

    /// Engine whose `ShortName` is `name`, else the one stored under `name`.
    /// When several share a name, the smallest key wins.
    pub fn find_by_name(&self, name: &str) -> Option<&Engine> {
        self.inner
            .iter()
            .filter(|(_, e)| e.name.as_deref() == Some(name))
            .min_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, e)| e)
            .or_else(|| self.get(name))
    }

    /// Every engine able to answer queries of `result_type`.
    pub fn supporting<'a>(&'a self, result_type: &'a str) -> impl Iterator<Item = (&'a str, &'a Engine)> + 'a {
        self.iter().filter(move |(_, e)| e.supports(result_type))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Engine)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize { self.inner.len() }

    pub fn is_empty(&self) -> bool { self.inner.is_empty() }
}
