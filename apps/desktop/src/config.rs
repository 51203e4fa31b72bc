use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context};
use client_core::DEFAULT_RESOURCE_URL;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_FILE: &str = "todo.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub resource_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            resource_url: DEFAULT_RESOURCE_URL.into(),
        }
    }
}

/// Resolves settings from defaults, then the config file, then the environment.
///
/// A missing `todo.toml` in the working directory is fine; a missing file that
/// was asked for explicitly is an error.
pub fn load_settings(config_path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let (path, required) = match config_path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };
    match fs::read_to_string(&path) {
        Ok(raw) => apply_file_overrides(&mut settings, &raw)
            .with_context(|| format!("invalid config file '{}'", path.display()))?,
        Err(err) if err.kind() == io::ErrorKind::NotFound && !required => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read config file '{}'", path.display()))
        }
    }

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());

    Ok(settings)
}

fn apply_file_overrides(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg = toml::from_str::<HashMap<String, String>>(raw)?;
    if let Some(v) = file_cfg.get("resource_url") {
        settings.resource_url = v.clone();
    }
    Ok(())
}

fn apply_env_overrides(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("TODO_RESOURCE_URL") {
        settings.resource_url = v;
    }
    if let Some(v) = var("APP__RESOURCE_URL") {
        settings.resource_url = v;
    }
}

/// Accepts absolute http(s) URLs only.
pub fn validate_resource_url(raw: &str) -> anyhow::Result<String> {
    let raw = raw.trim();
    let url = Url::parse(raw).with_context(|| format!("invalid resource url '{raw}'"))?;
    match url.scheme() {
        "http" | "https" => Ok(url.to_string()),
        other => bail!("unsupported resource url scheme '{other}' in '{raw}'"),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
