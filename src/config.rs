//! Target file selection.

use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use serde::Deserialize;

/// Directory holding the question banks, relative to the program.
pub const DATA_DIR: &str = "json_Q_A";

/// Question banks migrated when nothing else is configured.
pub const DEFAULT_FILES: [&str; 4] = [
    "ITASTQB-QTEST-FL-2023-A-QA.json",
    "ITASTQB-QTEST-FL-2023-B-QA.json",
    "ITASTQB-QTEST-FL-2023-C-QA.json",
    "ITASTQB-QTEST-FL-2023-D-QA.json",
];

/// Ordered list of files the driver visits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub targets: Vec<PathBuf>,
}

/// On-disk form of [`Config`].
#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    data_dir: Option<PathBuf>,
    files: Vec<PathBuf>,
}

impl Config {
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            targets: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// The four default question banks under `base/json_Q_A`.
    pub fn default_in(base: &Path) -> Self {
        let dir = base.join(DATA_DIR);
        Self::from_paths(DEFAULT_FILES.iter().map(|name| dir.join(name)))
    }

    /// The default question banks next to the running executable.
    pub fn beside_executable() -> anyhow::Result<Self> {
        let exe = std::env::current_exe().with_context(|| "locate executable")?;
        let base = exe
            .parent()
            .ok_or_else(|| anyhow!("executable has no parent directory: {}", exe.display()))?;
        Ok(Self::default_in(base))
    }

    /// Load a YAML or TOML target list.
    ///
    /// `data_dir` and relative `files` entries are resolved against the
    /// directory containing the config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");
        let file: ConfigFile = match extension {
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .with_context(|| format!("parse config from {}", path.display()))?,
            "toml" => toml::from_str(&content)
                .with_context(|| format!("parse config from {}", path.display()))?,
            _ => {
                return Err(anyhow!(
                    "unsupported config format {extension:?}: use .yaml, .yml or .toml"
                ));
            }
        };
        let root = path.parent().unwrap_or_else(|| Path::new(""));
        let dir = match file.data_dir {
            Some(dir) => root.join(dir),
            None => root.to_owned(),
        };
        Ok(Self::from_paths(
            file.files.into_iter().map(|name| dir.join(name)),
        ))
    }
}
