use crate::core::eligibility::ProductSource;
use crate::core::normalizer::ColumnAliases;
use crate::core::streak::{AttendancePolicy, GapRule};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod quota;

pub use quota::{ProductQuota, QuotaTable};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub attendance_policy: AttendancePolicy,
    #[serde(default)]
    pub gap_rule: GapRule,
    #[serde(default)]
    pub product_source: ProductSource,
    #[serde(default)]
    pub keep_zero_allocations: bool,
    #[serde(default = "default_worked_token")]
    pub worked_token: String,
    #[serde(default = "default_off_markers")]
    pub off_markers: Vec<String>,
    #[serde(default = "default_total_monitorias")]
    pub total_monitorias: u32,
    #[serde(default)]
    pub quotas: QuotaTable,
    #[serde(default)]
    pub columns: ColumnAliases,
}

fn default_worked_token() -> String {
    "escalado".to_string()
}
fn default_off_markers() -> Vec<String> {
    vec!["folga".into(), "férias".into(), "ferias".into()]
}
fn default_total_monitorias() -> u32 {
    800
}

impl Default for Config {
    fn default() -> Self {
        Self {
            attendance_policy: AttendancePolicy::default(),
            gap_rule: GapRule::default(),
            product_source: ProductSource::default(),
            keep_zero_allocations: false,
            worked_token: default_worked_token(),
            off_markers: default_off_markers(),
            total_monitorias: default_total_monitorias(),
            quotas: QuotaTable::default(),
            columns: ColumnAliases::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rmonitorias")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rmonitorias")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rmonitorias.conf")
    }

    /// Resolve the file to use: explicit override or the standard location.
    pub fn resolve_path(custom: Option<&Path>) -> PathBuf {
        custom
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(custom: Option<&Path>) -> AppResult<Self> {
        let path = Self::resolve_path(custom);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad(path.display().to_string()))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // an empty file deserializes to unit, treat it as "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the configuration, creating the parent directory when needed.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let yaml = self.to_yaml()?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave(path.display().to_string()))
    }

    /// Non-fatal problems worth reporting to the user.
    pub fn check(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let total = self.quotas.total();
        if total != u64::from(self.total_monitorias) {
            warnings.push(format!(
                "quota table sums to {} but total_monitorias is {}",
                total, self.total_monitorias
            ));
        }

        for dup in self.quotas.duplicates() {
            warnings.push(format!("product '{}' is listed more than once in quotas", dup));
        }

        for (field, aliases) in self.columns.fields() {
            if aliases.iter().all(|a| a.trim().is_empty()) {
                warnings.push(format!("no column aliases configured for '{}'", field));
            }
        }

        match self.attendance_policy {
            AttendancePolicy::Inclusion if self.worked_token.trim().is_empty() => {
                warnings.push("inclusion policy needs a non-empty worked_token".to_string());
            }
            AttendancePolicy::Exclusion if self.off_markers.iter().all(|m| m.trim().is_empty()) => {
                warnings.push(
                    "exclusion policy has no off_markers: every status counts as worked".to_string(),
                );
            }
            _ => {}
        }

        warnings
    }
}
