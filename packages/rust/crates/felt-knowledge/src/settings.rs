//! Search settings loader.
//!
//! Resolution order for the settings file:
//! - explicit path (CLI `--conf`)
//! - `$FELT_CONFIG`
//! - `<PRJ_ROOT>/packages/conf/felt.yaml` (cwd when `PRJ_ROOT` is unset)
//!
//! Only the `search:` section is read. A missing file yields defaults; an
//! unreadable or malformed file is logged and ignored.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::scoring::ScoringWeights;

const DEFAULT_SETTINGS_RELATIVE_PATH: &str = "packages/conf/felt.yaml";
const SETTINGS_PATH_ENV: &str = "FELT_CONFIG";

/// Ranking knobs applied by [`crate::KnowledgeBase::search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchSettings {
    /// Maximum entries returned per query. Never 0.
    pub max_results: usize,
    /// Entries must score strictly above this to be returned.
    pub min_score: i64,
    /// Per-rule points.
    pub weights: ScoringWeights,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_results: 3,
            min_score: 10,
            weights: ScoringWeights::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    search: SearchSection,
}

#[derive(Debug, Default, Deserialize)]
struct SearchSection {
    max_results: Option<usize>,
    min_score: Option<i64>,
    weights: Option<ScoringWeights>,
}

impl SearchSettings {
    /// Resolve the settings file and load it.
    #[must_use]
    pub fn load(explicit: Option<&Path>) -> Self {
        let env_path = std::env::var(SETTINGS_PATH_ENV).ok();
        let path = resolve_settings_path(explicit, env_path.as_deref(), &project_root());
        Self::load_from_path(&path)
    }

    /// Load one settings file, falling back to defaults.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "settings file not found; using defaults");
            return Self::default();
        }
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %error,
                    "failed to read settings file; ignoring"
                );
                return Self::default();
            }
        };
        match Self::from_yaml_str(&raw) {
            Ok(settings) => settings,
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %error,
                    "failed to parse settings yaml; ignoring file"
                );
                Self::default()
            }
        }
    }

    /// Parse settings YAML. Absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns the YAML error when the document does not match the schema.
    pub fn from_yaml_str(raw: &str) -> Result<Self, serde_yaml::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let file: SettingsFile = serde_yaml::from_str(raw)?;
        Ok(Self::default().merge(file.search))
    }

    /// Lower the result cap for one caller. `limit` cannot raise it.
    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        if let Some(limit) = limit {
            self.max_results = self.max_results.min(limit.max(1));
        }
        self
    }

    fn merge(self, overlay: SearchSection) -> Self {
        Self {
            max_results: overlay.max_results.unwrap_or(self.max_results).max(1),
            min_score: overlay.min_score.unwrap_or(self.min_score),
            weights: overlay.weights.unwrap_or(self.weights),
        }
    }
}

fn resolve_settings_path(
    explicit: Option<&Path>,
    env_path: Option<&str>,
    project_root: &Path,
) -> PathBuf {
    if let Some(path) = explicit.filter(|p| !p.as_os_str().is_empty()) {
        return absolutize(project_root, path.to_path_buf());
    }
    if let Some(path) = env_path.map(str::trim).filter(|v| !v.is_empty()) {
        return absolutize(project_root, PathBuf::from(path));
    }
    project_root.join(DEFAULT_SETTINGS_RELATIVE_PATH)
}

fn project_root() -> PathBuf {
    std::env::var("PRJ_ROOT")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn absolutize(project_root: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        project_root.join(path)
    }
}
