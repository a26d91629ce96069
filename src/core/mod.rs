//! Message resolution and build aggregation engine.
//!
//! ## Module Structure
//!
//! - `format`: placeholder substitution and pseudo-localization
//! - `language`: language tag resolution and resource naming
//! - `bundle`: message bundle and key list data model
//! - `localizer`: scoped and generic localizers handed to modules
//! - `host`: host string service capability
//! - `loader`: resource loader boundary
//! - `plugin`: per-module load orchestration and the build write phase
//! - `build`: build session aggregation
//! - `writer`: build output sinks

pub mod build;
pub mod bundle;
pub mod format;
pub mod host;
pub mod language;
pub mod loader;
pub mod localizer;
pub mod plugin;
pub mod writer;

pub use build::{BuildManifest, BuildSession};
pub use bundle::{BundledStrings, HostKeyMap, LocalizeKey, MessageBundle, ModuleKeys};
pub use format::{format, format_with, is_pseudo_translation, set_pseudo_translation};
pub use host::{HostLocalizer, HostStringService};
pub use language::{DEFAULT_TAG, LanguageMap, resolve_language, resource_suffix};
pub use loader::{FsLoader, MemoryLoader, ResourceLoader};
pub use localizer::{ConsumerApi, RootApi, ScopedLocalizer};
pub use plugin::{Loaded, LoadedBundle, METADATA_FILE, Mode, NlsPlugin};
pub use writer::{BuildWriter, DirWriter, FileWriter, ModuleCollector, SyntheticModule};
