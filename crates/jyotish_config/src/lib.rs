//! TOML configuration for the jyotish core.
//!
//! Every key is optional; defaults equal the built-in constants, so an
//! empty file is a valid configuration.
//!
//! ```toml
//! [ephemeris]
//! start_year = 1900
//! end_year = 2100
//!
//! [session]
//! staleness_secs = 21600
//!
//! [convention]
//! ayanamsha = "lahiri"
//! house_system = "whole_sign"
//! node_mode = "mean"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use jyotish_ephemeris::{NodeMode, ValidityWindow};
use jyotish_vedic_base::convention::CONVENTION_VERSION;
use jyotish_vedic_base::{AyanamshaSystem, ChartConvention, HouseSystem};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors from loading or validating configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("cannot write config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error(
        "ephemeris window {start_year}..={end_year} is empty or outside {}",
        ValidityWindow::SUPPORTED
    )]
    InvalidWindow { start_year: i32, end_year: i32 },
    #[error("session staleness must be greater than zero")]
    ZeroStaleness,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EphemerisSection {
    pub start_year: i32,
    pub end_year: i32,
}

impl Default for EphemerisSection {
    fn default() -> Self {
        Self {
            start_year: ValidityWindow::DEFAULT.start_year,
            end_year: ValidityWindow::DEFAULT.end_year,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionSection {
    pub staleness_secs: u64,
}

impl Default for SessionSection {
    fn default() -> Self {
        Self {
            staleness_secs: 6 * 60 * 60,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConventionSection {
    pub ayanamsha: AyanamshaSystem,
    pub house_system: HouseSystem,
    pub node_mode: NodeMode,
}

/// Complete core configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreConfig {
    pub ephemeris: EphemerisSection,
    pub session: SessionSection,
    pub convention: ConventionSection,
}

impl CoreConfig {
    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `path` if given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validity_window()?;
        if self.session.staleness_secs == 0 {
            return Err(ConfigError::ZeroStaleness);
        }
        Ok(())
    }

    pub fn validity_window(&self) -> Result<ValidityWindow, ConfigError> {
        let EphemerisSection {
            start_year,
            end_year,
        } = self.ephemeris;
        ValidityWindow::new(start_year, end_year).ok_or(ConfigError::InvalidWindow {
            start_year,
            end_year,
        })
    }

    pub fn staleness(&self) -> Duration {
        Duration::from_secs(self.session.staleness_secs)
    }

    pub fn convention(&self) -> ChartConvention {
        ChartConvention {
            version: CONVENTION_VERSION,
            ayanamsha: self.convention.ayanamsha,
            house_system: self.convention.house_system,
            node_mode: self.convention.node_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_text_is_default() {
        let c = CoreConfig::from_toml_str("").unwrap();
        assert_eq!(c, CoreConfig::default());
        assert_eq!(c.convention(), ChartConvention::PINNED);
        assert_eq!(c.staleness(), Duration::from_secs(21_600));
        assert_eq!(c.validity_window().unwrap(), ValidityWindow::DEFAULT);
    }

    #[test]
    fn partial_sections() {
        let c = CoreConfig::from_toml_str(
            r#"
            [session]
            staleness_secs = 600

            [convention]
            ayanamsha = "kp"
            "#,
        )
        .unwrap();
        assert_eq!(c.staleness(), Duration::from_secs(600));
        assert_eq!(c.convention().ayanamsha, AyanamshaSystem::Kp);
        assert_eq!(c.convention().house_system, HouseSystem::WholeSign);
        assert_eq!(c.ephemeris, EphemerisSection::default());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            CoreConfig::from_toml_str("[session]\nstaleness_secs = 0"),
            Err(ConfigError::ZeroStaleness)
        ));
        assert!(matches!(
            CoreConfig::from_toml_str("[ephemeris]\nstart_year = 2050\nend_year = 2000"),
            Err(ConfigError::InvalidWindow { .. })
        ));
        assert!(matches!(
            CoreConfig::from_toml_str("[ephemeris]\nend_year = 2500"),
            Err(ConfigError::InvalidWindow { .. })
        ));
        assert!(matches!(
            CoreConfig::from_toml_str("[convention]\nayanamsha = \"tropical\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            CoreConfig::from_toml_str("[sessions]\nstaleness_secs = 5"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[convention]\nnode_mode = \"true\"\nhouse_system = \"equal\"").unwrap();
        let c = CoreConfig::load(file.path()).unwrap();
        assert_eq!(c.convention().node_mode, NodeMode::True);
        assert_eq!(c.convention().tag(), "v1/lahiri/equal/true");
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = CoreConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn written_config_reloads() {
        let mut c = CoreConfig::default();
        c.ephemeris.start_year = 1950;
        c.convention.ayanamsha = AyanamshaSystem::Raman;
        let text = c.to_toml_string().unwrap();
        assert_eq!(CoreConfig::from_toml_str(&text).unwrap(), c);
    }
}
