//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_cache::{Cache, FileStore};
use storefront_commerce::cart::CartStore;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Cart store backed by the configured directory.
pub type FileCartStore = CartStore<Cache<FileStore>>;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = resolve(&cwd, path);
            (CliConfig::load(&path)?, Some(path))
        } else {
            // Try to find config in current directory or parent directories
            match find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Directory the cart is persisted in.
    pub fn storage_dir(&self) -> PathBuf {
        resolve(&self.cwd, &self.config.storage.dir)
    }

    /// Open the cart store, hydrating it from disk.
    pub fn open_store(&self) -> Result<FileCartStore> {
        let dir = self.storage_dir();
        let backend = FileStore::open(&dir)
            .with_context(|| format!("Failed to open cart storage: {}", dir.display()))?;
        self.output.debug(&format!("Using cart storage at {}", dir.display()));
        Ok(CartStore::hydrate_with_policy(
            Cache::new(backend),
            self.config.pricing.clone(),
        ))
    }

    /// Path `cart config init` writes to.
    pub fn default_config_path(&self) -> PathBuf {
        self.config_path
            .clone()
            .unwrap_or_else(|| self.cwd.join(CONFIG_FILE_NAMES[0]))
    }
}

/// Find config file in directory tree.
fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_FILE_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                if let Ok(config) = CliConfig::load(&config_path) {
                    return Some((config, config_path));
                }
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Resolve a path relative to the working directory.
fn resolve(cwd: &Path, path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
