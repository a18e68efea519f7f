use std::{
    cell::OnceCell,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context as _, Result};
use tracing::debug;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    i18n::{CatalogRegistry, LanguageConfig, Translator},
};

/// Project data shared by the commands.
///
/// The language config is loaded up front; catalogs are read on first use,
/// since `format`, `url` and `languages` never need them.
pub struct CommandContext {
    pub config: Config,
    /// Catalog directory, relative to the working directory when it lies
    /// inside it so reported paths stay short.
    pub messages_root: PathBuf,
    pub languages: Arc<LanguageConfig>,
    registry: OnceCell<Arc<CatalogRegistry>>,
}

impl CommandContext {
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read the working directory")?;
        let config_result = load_config(&cwd)?;

        if args.verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let config = config_result.config;
        let messages_root = match &args.messages_root {
            Some(root) => cwd.join(root),
            None => config.messages_root(&config_result.base_dir),
        };

        let languages = match &args.languages_file {
            Some(path) => load_languages(&cwd.join(path))?,
            None => {
                let path = config.languages_path(&messages_root);
                if path.exists() {
                    load_languages(&path)?
                } else {
                    debug!(path = %path.display(), "no language config, using built-in languages");
                    LanguageConfig::default()
                }
            }
        };

        Ok(Self {
            config,
            messages_root: relative_to(&messages_root, &cwd),
            languages: Arc::new(languages),
            registry: OnceCell::new(),
        })
    }

    /// Catalogs for every configured language, loaded once.
    pub fn registry(&self) -> Arc<CatalogRegistry> {
        self.registry
            .get_or_init(|| {
                let codes: Vec<&str> = self
                    .languages
                    .languages()
                    .iter()
                    .map(|l| l.code.as_str())
                    .collect();
                Arc::new(CatalogRegistry::load_dir(&self.messages_root, &codes))
            })
            .clone()
    }

    pub fn translator(&self) -> Translator {
        Translator::new(self.registry(), self.languages.clone())
    }
}

fn load_languages(path: &Path) -> Result<LanguageConfig> {
    LanguageConfig::load(path)
        .with_context(|| format!("Failed to load language config: {}", path.display()))
}

fn relative_to(path: &Path, base: &Path) -> PathBuf {
    path.strip_prefix(base)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}
