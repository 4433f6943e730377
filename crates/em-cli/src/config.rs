//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use em_core::{DATE_LIMIT, NAME_LIMIT};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Decimal places used when printing costs.
    pub precision: usize,
    /// Characters kept for event and attribute names.
    pub name_limit: usize,
    /// Characters kept for event dates.
    pub date_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: 2,
            name_limit: NAME_LIMIT,
            date_limit: DATE_LIMIT,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // EM_PRECISION, EM_NAME_LIMIT, ...
        figment = figment.merge(Env::prefixed("EM_"));

        figment.extract::<Self>().map(Self::clamped)
    }

    /// Keeps text limits within `1..=NAME_LIMIT` and `1..=DATE_LIMIT`.
    #[must_use]
    pub fn clamped(self) -> Self {
        let name_limit = self.name_limit.clamp(1, NAME_LIMIT);
        let date_limit = self.date_limit.clamp(1, DATE_LIMIT);
        if name_limit != self.name_limit || date_limit != self.date_limit {
            tracing::warn!(
                name_limit = self.name_limit,
                date_limit = self.date_limit,
                "text limits out of range, clamped to {name_limit} and {date_limit}"
            );
        }
        Self {
            name_limit,
            date_limit,
            ..self
        }
    }
}

/// Returns the platform-specific config directory for em.
///
/// On Linux: `~/.config/em`
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("em"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use figment::Jail;

    #[test]
    fn test_default_limits_match_core() {
        let config = Config::default();
        assert_eq!(config.precision, 2);
        assert_eq!(config.name_limit, 49);
        assert_eq!(config.date_limit, 10);
    }

    #[test]
    fn test_dirs_config_path_ends_with_em() {
        if let Some(path) = dirs_config_path() {
            assert_eq!(path.file_name().unwrap(), "em");
        }
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("HOME", jail.directory().display().to_string());
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display().to_string());
            jail.create_file("custom.toml", "precision = 0\nname_limit = 20\n")?;

            let config = Config::load_from(Some(Path::new("custom.toml")))?;
            assert_eq!(config.precision, 0);
            assert_eq!(config.name_limit, 20);
            assert_eq!(config.date_limit, 10);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.set_env("HOME", jail.directory().display().to_string());
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display().to_string());
            jail.create_file("custom.toml", "precision = 1\n")?;
            jail.set_env("EM_PRECISION", "3");

            let config = Config::load_from(Some(Path::new("custom.toml")))?;
            assert_eq!(config.precision, 3);
            Ok(())
        });
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("HOME", jail.directory().display().to_string());
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display().to_string());

            let config = Config::load_from(Some(Path::new("does-not-exist.toml")))?;
            assert_eq!(config, Config::default());
            Ok(())
        });
    }

    #[test]
    fn test_limits_are_clamped_to_range() {
        Jail::expect_with(|jail| {
            jail.set_env("HOME", jail.directory().display().to_string());
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display().to_string());
            jail.create_file("custom.toml", "name_limit = 0\ndate_limit = 200\n")?;

            let config = Config::load_from(Some(Path::new("custom.toml")))?;
            assert_eq!(config.name_limit, 1);
            assert_eq!(config.date_limit, DATE_LIMIT);
            Ok(())
        });
    }

    #[test]
    fn test_limits_clamp_at_both_ends() {
        let low = Config {
            precision: 2,
            name_limit: 0,
            date_limit: 0,
        }
        .clamped();
        assert_eq!((low.name_limit, low.date_limit), (1, 1));

        let high = Config {
            precision: 2,
            name_limit: 500,
            date_limit: 11,
        }
        .clamped();
        assert_eq!((high.name_limit, high.date_limit), (NAME_LIMIT, DATE_LIMIT));

        assert_eq!(Config::default().clamped(), Config::default());
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        Jail::expect_with(|jail| {
            jail.set_env("HOME", jail.directory().display().to_string());
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display().to_string());
            jail.create_file("custom.toml", "precision = \"lots\"\n")?;

            assert!(Config::load_from(Some(Path::new("custom.toml"))).is_err());
            Ok(())
        });
    }
}
