//! nlsbundle - localized message resolution and NLS bundling for AMD-style loaders
//!
//! Resolves which translated `.nls` resource a module reads its strings from,
//! formats messages with positional arguments (optionally pseudo-localized),
//! and at build time aggregates every module's strings into per-entry-point
//! bundles plus a `nls.metadata.json` manifest.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Plugin settings and project configuration file
//! - `core`: Resolution and build aggregation engine

pub mod cli;
pub mod config;
pub mod core;
