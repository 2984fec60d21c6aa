pub mod errors;
pub mod context;
pub mod config;
pub mod descriptor;
pub mod loader;
pub mod locale;
pub mod registry;
pub mod resolver;
pub mod template;
pub mod xml;
mod parser;

use std::path::PathBuf;

pub use config::Config;
pub use descriptor::{parse_engine, Engine, EngineUrl, Method, Param};
pub use errors::{Error, Result};
pub use loader::{load_all, DescriptorDirectory, DescriptorFile, FsDirectory, LoadSummary};
pub use locale::{EnvLocale, FixedLocale, LocaleProvider};
pub use registry::EngineRegistry;
pub use resolver::{resolve, RequestDescriptor};

/// Convenience: load every descriptor found in `paths`.
/// Missing directories and broken files are logged and skipped.
pub fn load_engines(paths: &[PathBuf]) -> EngineRegistry {
    EngineRegistry::load_paths(paths).0
}

/// Convenience: resolve with the process locale from the environment.
pub fn query(engine: &Engine, search_terms: &str, result_type: Option<&str>) -> Option<RequestDescriptor> {
    resolve(engine, search_terms, result_type, &EnvLocale)
}
