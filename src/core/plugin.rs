//! The NLS loader plugin: per-module resolution and the build write phase.
//!
//! A module load runs in one of three modes, fixed when the plugin is built:
//!
//! - **Host**: a native string service owns the strings; only the key map is fetched
//! - **Build**: messages and keys are fetched and captured into the [`BuildSession`]
//! - **Runtime**: the language-specific messages are fetched and wrapped in a localizer
//!
//! An empty module name bypasses all three and yields the generic [`RootApi`].

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::build::BuildSession;
use super::bundle::{BundledStrings, HostKeyMap, LocalizeKey, MessageBundle};
use super::format;
use super::host::{HostLocalizer, HostStringService};
use super::language::{keys_resource, messages_resource, resolve_language, resource_suffix};
use super::loader::ResourceLoader;
use super::localizer::{ConsumerApi, RootApi, ScopedLocalizer};
use super::writer::{BuildWriter, FileWriter, to_tabbed_json};
use crate::config::{PLUGIN_NAMESPACE, PluginConfig};

/// File name of the consolidated build manifest.
pub const METADATA_FILE: &str = "nls.metadata.json";

const BUNDLE_HEADER: [&str; 3] = [
    "/*---------------------------------------------------------",
    " * Generated by nlsbundle. Do not edit.",
    " *--------------------------------------------------------*/",
];

/// How module loads are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Host,
    Build,
    Runtime,
}

impl Mode {
    /// A host string service wins over the build flag.
    pub fn select(has_host_service: bool, is_build: bool) -> Self {
        if has_host_service {
            Mode::Host
        } else if is_build {
            Mode::Build
        } else {
            Mode::Runtime
        }
    }
}

/// Runtime-mode result: the fetched bundle and a localizer scoped to the module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedBundle {
    pub bundle: MessageBundle,
    pub api: ConsumerApi,
}

impl LoadedBundle {
    pub fn localize<S: AsRef<str>>(
        &self,
        index: usize,
        default_value: &str,
        args: &[S],
    ) -> String {
        self.api.localize(index, default_value, args)
    }
}

/// What a module load delivers.
#[derive(Debug, Clone)]
pub enum Loaded {
    Root(RootApi),
    Host(HostLocalizer),
    /// Raw messages captured during a build.
    Captured(Vec<String>),
    Runtime(LoadedBundle),
}

pub struct NlsPlugin<L> {
    loader: L,
    config: PluginConfig,
    host: Option<Arc<dyn HostStringService>>,
    session: Arc<BuildSession>,
    mode: Mode,
}

impl<L: ResourceLoader> NlsPlugin<L> {
    pub fn new(loader: L, config: PluginConfig) -> Self {
        let mode = Mode::select(false, config.is_build);
        Self {
            loader,
            config,
            host: None,
            session: Arc::new(BuildSession::new()),
            mode,
        }
    }

    /// Route all lookups through a native string service.
    pub fn with_host_service(mut self, service: Arc<dyn HostStringService>) -> Self {
        self.host = Some(service);
        self.mode = Mode::select(true, self.config.is_build);
        self
    }

    /// Capture into `session` instead of a private one.
    pub fn with_session(mut self, session: Arc<BuildSession>) -> Self {
        self.session = session;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn session(&self) -> &Arc<BuildSession> {
        &self.session
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    pub fn set_pseudo_translation(&self, enabled: bool) {
        format::set_pseudo_translation(enabled);
    }

    /// Resolve the localized strings of module `name`.
    pub async fn load(&self, name: &str) -> Result<Loaded> {
        if name.is_empty() {
            return Ok(Loaded::Root(RootApi::new(
                self.config.available_languages.clone(),
            )));
        }

        debug!(module_id = name, mode = ?self.mode, "loading module strings");
        match (self.mode, &self.host) {
            (Mode::Host, Some(service)) => {
                let keys: HostKeyMap = self.fetch(&keys_resource(name)).await?;
                Ok(Loaded::Host(HostLocalizer::new(keys, Arc::clone(service))))
            }
            (Mode::Build, _) => self.capture(name).await.map(Loaded::Captured),
            _ => self.load_runtime(name).await.map(Loaded::Runtime),
        }
    }

    async fn capture(&self, name: &str) -> Result<Vec<String>> {
        let messages_name = messages_resource(name);
        let keys_name = keys_resource(name);
        let (messages, keys) = futures::try_join!(
            self.fetch::<Vec<String>>(&messages_name),
            self.fetch::<Vec<LocalizeKey>>(&keys_name),
        )?;

        self.session.capture(name, messages.clone(), keys)?;
        Ok(messages)
    }

    async fn load_runtime(&self, name: &str) -> Result<LoadedBundle> {
        let languages = self.config.available_languages.as_ref();
        let language = resolve_language(languages, name);
        let resource = format!("{}{}", name, resource_suffix(language));

        let bundle: MessageBundle = self.fetch(&resource).await?;
        let localizer = ScopedLocalizer::new(bundle.slice_for(name));
        Ok(LoadedBundle {
            bundle,
            api: ConsumerApi::new(localizer, languages.cloned()),
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, resource: &str) -> Result<T> {
        let value = self.loader.fetch(resource).await?;
        serde_json::from_value(value)
            .with_context(|| format!("Unexpected shape of resource {}", resource))
    }

    /// Localizer for `key` over an already-fetched entry-point bundle.
    ///
    /// A key missing from `bundles` gets an empty localizer.
    pub fn create(&self, key: &str, bundles: &BundledStrings) -> ConsumerApi {
        let messages = bundles.get(key).map(Vec::as_slice).unwrap_or_default();
        ConsumerApi::new(
            ScopedLocalizer::new(messages),
            self.config.available_languages.clone(),
        )
    }

    /// Record `module_name` under the writer's entry point.
    ///
    /// Modules other than the entry point itself get a synthetic definition
    /// that rebuilds their localizer from the entry point's bundle at runtime.
    pub fn write(
        &self,
        plugin_name: &str,
        module_name: &str,
        writer: &mut impl BuildWriter,
    ) -> Result<()> {
        let entry_point = writer.entry_point().to_string();
        self.session
            .record_entry_point_dependency(&entry_point, module_name);

        if module_name != entry_point {
            let name = format!("{}!{}", plugin_name, module_name);
            let source = format!(
                "define([{}, {}], function(nls, data) {{ return nls.create({}, data); }});",
                js_string(PLUGIN_NAMESPACE)?,
                js_string(&format!("{}!{}", PLUGIN_NAMESPACE, entry_point))?,
                js_string(module_name)?,
            );
            writer.as_module(&name, &source)?;
        }
        Ok(())
    }

    /// Write `<module_name>.nls.js` if `module_name` is a known entry point.
    ///
    /// Returns whether a file was written.
    pub fn write_file(
        &self,
        _plugin_name: &str,
        module_name: &str,
        writer: &mut impl FileWriter,
    ) -> Result<bool> {
        let Some(data) = self.session.emit_bundle(module_name) else {
            return Ok(false);
        };

        let file_name = format!("{}.nls.js", module_name);
        let mut contents: Vec<String> = BUNDLE_HEADER.iter().map(|s| s.to_string()).collect();
        contents.push(format!(
            "define({}, {});",
            js_string(&format!("{}.nls", module_name))?,
            to_tabbed_json(&data)?
        ));

        debug!(entry_point = module_name, file = %file_name, "writing bundle");
        writer.write_file(&file_name, &contents.join("\r\n"))?;
        Ok(true)
    }

    /// Write the consolidated [`METADATA_FILE`] manifest.
    pub fn finish_build(&self, writer: &mut impl FileWriter) -> Result<()> {
        let manifest = self.session.finalize();
        writer.write_file(METADATA_FILE, &to_tabbed_json(&manifest)?)
    }
}

/// Quote `value` as a JavaScript string literal.
fn js_string(value: &str) -> Result<String> {
    serde_json::to_string(value).context("Failed to quote module name")
}
