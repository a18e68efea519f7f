use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".tolkrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding `<code>.json` catalogs.
    #[serde(default = "default_messages_root")]
    pub messages_root: String,
    /// Language config document, relative to `messages_root`.
    #[serde(default = "default_languages_file")]
    pub languages_file: String,
    /// Key patterns whose values may legitimately equal the default
    /// language's (brand names, product names).
    #[serde(default)]
    pub ignore_untranslated: Vec<String>,
}

fn default_messages_root() -> String {
    "./src/_data/i18n".to_string()
}

fn default_languages_file() -> String {
    "config.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages_root: default_messages_root(),
            languages_file: default_languages_file(),
            ignore_untranslated: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any pattern in `ignoreUntranslated` is invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignore_untranslated {
            Pattern::new(pattern).with_context(|| {
                format!(
                    "Invalid glob pattern in 'ignoreUntranslated': \"{}\"",
                    pattern
                )
            })?;
        }
        Ok(())
    }

    /// Compiled `ignoreUntranslated` patterns. Invalid patterns are skipped;
    /// [`Config::validate`] reports them.
    pub fn ignore_untranslated_patterns(&self) -> Vec<Pattern> {
        self.ignore_untranslated
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect()
    }

    pub fn messages_root(&self, base: &Path) -> PathBuf {
        base.join(&self.messages_root)
    }

    /// Language config path inside an already resolved catalog directory.
    pub fn languages_path(&self, messages_root: &Path) -> PathBuf {
        messages_root.join(&self.languages_file)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory relative paths in the config are resolved against: the
    /// config file's directory, or the start directory when using defaults.
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                base_dir,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
