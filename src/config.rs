//! Configuration file support and schema auto-discovery.
//!
//! A `typegen.toml` in the working directory (or
//! `prisma-typegen/config.toml` under the user config directory) can supply
//! defaults for anything the CLI would otherwise require:
//!
//! ```toml
//! [generate]
//! schema = "./prisma/schema.prisma"
//! output = "./src/generated"
//! insertion_types = true
//! ```
//!
//! CLI arguments always take precedence over config values.

use serde::Deserialize;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::{TypegenError, TypegenResult};

/// Name of the project-level config file.
const CONFIG_FILE: &str = "typegen.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generate: GenerateSection,
}

/// The `[generate]` table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateSection {
    pub schema: Option<String>,
    pub output: Option<String>,
    pub declarations_only: Option<bool>,
    pub insertion_types: Option<bool>,
    pub use_type: Option<bool>,
}

impl Config {
    /// Load the first config file found: `./typegen.toml`, then the
    /// user-level `prisma-typegen/config.toml`. No file at all is fine and
    /// yields an empty config; a file that fails to parse is an error.
    pub fn load() -> TypegenResult<Self> {
        for path in candidate_paths() {
            if path.exists() {
                let content = std::fs::read_to_string(&path)?;
                return Self::parse(&content)
                    .map_err(|e| TypegenError::Config(format!("{}: {e}", path.display())));
            }
        }
        Ok(Self::default())
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("prisma-typegen").join("config.toml"));
    }
    paths
}

/// Probe the default schema locations under `base`: `schema.prisma`, then
/// `prisma/schema.prisma`. Returns the first one that is readable.
pub fn discover_schema(base: &Path) -> Option<PathBuf> {
    ["schema.prisma", "prisma/schema.prisma"]
        .iter()
        .map(|candidate| base.join(candidate))
        .find(|path| File::open(path).is_ok())
}
