//! Runtime settings: an optional TOML file, then `DOCFOLD_*` environment
//! variables, over built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{ConfigBuilder, builder::DefaultState};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
  /// SQLite file holding every version. `:memory:` keeps nothing on exit.
  pub store_path: PathBuf,
  pub host:       String,
  pub port:       u16,
}

impl Settings {
  pub fn load(config_path: &Path) -> anyhow::Result<Self> {
    let builder = file_sources(config_path)?
      .add_source(config::Environment::with_prefix("DOCFOLD"));
    Self::build(builder, config_path)
  }

  fn build(
    builder: ConfigBuilder<DefaultState>,
    config_path: &Path,
  ) -> anyhow::Result<Self> {
    let settings = builder
      .build()
      .with_context(|| format!("failed to read config file {}", config_path.display()))?;

    let mut settings: Settings = settings
      .try_deserialize()
      .context("failed to deserialise settings")?;
    settings.store_path = expand_tilde(&settings.store_path);
    Ok(settings)
  }

  pub fn is_in_memory(&self) -> bool { self.store_path.as_os_str() == ":memory:" }
}

/// Built-in defaults overlaid with the optional TOML file.
fn file_sources(config_path: &Path) -> anyhow::Result<ConfigBuilder<DefaultState>> {
  Ok(
    config::Config::builder()
      .set_default("store_path", ":memory:")?
      .set_default("host", "127.0.0.1")?
      .set_default("port", 5290)?
      .add_source(config::File::from(config_path).required(false)),
  )
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
