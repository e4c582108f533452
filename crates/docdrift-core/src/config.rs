//! Configuration loader and path helpers.
//!
//! Uses Figment to merge built-in defaults + `config.toml` + `config.<env>.toml`
//! + `APP_*` env vars (`__` separates nested keys, so
//! `APP_ENGINE__MAX_INPUT_BYTES` sets `engine.max_input_bytes`).
//! Provides helpers to expand `~` and `${VAR}` and to resolve relative paths
//! against a known base directory.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Limits and tuning of the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Maximum size in bytes of each text unit passed to `analyze`.
    pub max_input_bytes: usize,
    /// Words dropped in addition to the built-in stop-word list.
    pub extra_stop_words: Vec<String>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self { max_input_bytes: 4 * 1024 * 1024, extra_stop_words: Vec::new() }
    }
}

/// Which files the directory collector picks up for each side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestSettings {
    pub code_extensions: Vec<String>,
    pub doc_extensions: Vec<String>,
    pub excluded_dirs: Vec<String>,
}

impl Default for IngestSettings {
    fn default() -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| (*s).to_string()).collect::<Vec<_>>();
        Self {
            code_extensions: owned(&[
                "py", "js", "jsx", "ts", "tsx", "rs", "go", "java", "kt", "rb", "php", "cs", "c", "h", "cpp", "hpp",
                "swift", "sh",
            ]),
            doc_extensions: owned(&["md", "markdown", "rst", "txt"]),
            excluded_dirs: owned(&[".venv", "venv", "site-packages", "__pycache__", ".git", "target", "node_modules"]),
        }
    }
}

/// Presentation knobs for summaries and suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    pub max_listed_terms: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self { max_listed_terms: 10 }
    }
}

#[derive(Debug, Default, Serialize)]
struct Defaults {
    engine: EngineSettings,
    ingest: IngestSettings,
    report: ReportSettings,
}

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new("."))
    }

    /// Load with `config.toml` and `config.<env>.toml` looked up in `base`.
    pub fn load_from(base: &Path) -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file(base.join("config.toml")));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file(base.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(base.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(base.join("config.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        Self::from_figment(figment)
    }

    /// Wrap an already assembled figment; built-in defaults are layered underneath.
    pub fn from_figment(figment: Figment) -> anyhow::Result<Self> {
        let figment = Figment::from(Serialized::defaults(Defaults::default())).merge(figment);
        let config = Self { figment };
        config.validate()?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    /// Like [`Config::get`], but an absent key is `Ok(None)` instead of an error.
    pub fn get_opt<T>(&self, key: &str) -> anyhow::Result<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        if !self.figment.contains(key) {
            return Ok(None);
        }
        self.get(key).map(Some)
    }

    pub fn engine(&self) -> anyhow::Result<EngineSettings> {
        self.get("engine")
    }

    pub fn ingest(&self) -> anyhow::Result<IngestSettings> {
        self.get("ingest")
    }

    pub fn report(&self) -> anyhow::Result<ReportSettings> {
        self.get("report")
    }

    fn validate(&self) -> anyhow::Result<()> {
        let engine = self.engine()?;
        if engine.max_input_bytes == 0 {
            return Err(Error::InvalidConfig("engine.max_input_bytes must be greater than zero".into()).into());
        }
        let ingest = self.ingest()?;
        if ingest.code_extensions.is_empty() || ingest.doc_extensions.is_empty() {
            return Err(Error::InvalidConfig("ingest.code_extensions and ingest.doc_extensions must not be empty".into()).into());
        }
        if self.report()?.max_listed_terms == 0 {
            return Err(Error::InvalidConfig("report.max_listed_terms must be greater than zero".into()).into());
        }
        Ok(())
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
