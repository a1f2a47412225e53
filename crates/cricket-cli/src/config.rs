use serde::Deserialize;

use cricket_core::MAX_PLAYERS;

/// Config file read when `CRICKET_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "cricket.toml";

/// Console settings, loaded from `cricket.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Upper bound offered at the player-count prompt.
    pub max_players: u8,
    /// Upper bound accepted at the hit-count prompt.
    pub max_hits_per_entry: u32,
    /// Print a line whenever a hit scores points.
    pub announce_scoring: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            max_players: MAX_PLAYERS,
            max_hits_per_entry: 3,
            announce_scoring: true,
        }
    }
}

impl ConsoleConfig {
    /// Clamp out-of-range values back into something playable, logging each fix.
    pub fn validate(mut self) -> Self {
        let players = self.max_players.clamp(1, MAX_PLAYERS);
        if players != self.max_players {
            tracing::warn!(
                configured = self.max_players,
                using = players,
                "max_players must be within 1..={MAX_PLAYERS}, clamped"
            );
            self.max_players = players;
        }
        if self.max_hits_per_entry == 0 {
            let fallback = Self::default().max_hits_per_entry;
            tracing::warn!(using = fallback, "max_hits_per_entry must be > 0, using default");
            self.max_hits_per_entry = fallback;
        }
        self
    }

    /// Load config from `CRICKET_CONFIG` or `cricket.toml`, then apply env var overrides.
    pub fn load() -> Self {
        Self::load_from(DEFAULT_CONFIG_PATH, |key| std::env::var(key).ok())
    }

    /// [`ConsoleConfig::load`] with the fallback path and environment supplied by the caller.
    pub fn load_from(default_path: &str, env: impl Fn(&str) -> Option<String>) -> Self {
        let path = env("CRICKET_CONFIG")
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| default_path.to_string());

        let mut config = match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<ConsoleConfig>(&content) {
                Ok(cfg) => {
                    tracing::info!("Loaded configuration from {path}");
                    cfg
                },
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    ConsoleConfig::default()
                },
            },
            Err(_) => {
                tracing::debug!("No {path} found, using defaults");
                ConsoleConfig::default()
            },
        };

        if let Some(val) = env("CRICKET_MAX_PLAYERS")
            && let Ok(n) = val.parse::<u8>()
        {
            config.max_players = n;
        }
        if let Some(val) = env("CRICKET_MAX_HITS")
            && let Ok(n) = val.parse::<u32>()
        {
            config.max_hits_per_entry = n;
        }

        config.validate()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use super::*;

    /// Write `contents` to a per-test file under the temp dir.
    fn temp_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "cricket-config-{}-{name}.toml",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn missing_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("cricket-config-{}-{name}-absent.toml", std::process::id()))
            .to_string_lossy()
            .into_owned()
    }

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    fn no_env() -> impl Fn(&str) -> Option<String> {
        env_of(&[])
    }

    #[test]
    fn default_config_values() {
        let cfg = ConsoleConfig::default();
        assert_eq!(cfg.max_players, 10);
        assert_eq!(cfg.max_hits_per_entry, 3);
        assert!(cfg.announce_scoring);
    }

    #[test]
    fn parse_full_toml() {
        let toml_str = r#"
max_players = 4
max_hits_per_entry = 9
announce_scoring = false
"#;
        let cfg: ConsoleConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.max_players, 4);
        assert_eq!(cfg.max_hits_per_entry, 9);
        assert!(!cfg.announce_scoring);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let cfg: ConsoleConfig = toml::from_str("max_players = 2\n").unwrap();
        assert_eq!(cfg.max_players, 2);
        assert_eq!(cfg.max_hits_per_entry, 3);
        assert!(cfg.announce_scoring);
    }

    #[test]
    fn validate_clamps_max_players() {
        let too_many = ConsoleConfig {
            max_players: 40,
            ..ConsoleConfig::default()
        };
        assert_eq!(too_many.validate().max_players, MAX_PLAYERS);

        let none = ConsoleConfig {
            max_players: 0,
            ..ConsoleConfig::default()
        };
        assert_eq!(none.validate().max_players, 1);
    }

    #[test]
    fn validate_replaces_zero_hits() {
        let cfg = ConsoleConfig {
            max_hits_per_entry: 0,
            ..ConsoleConfig::default()
        };
        assert_eq!(cfg.validate().max_hits_per_entry, 3);
    }

    #[test]
    fn validate_keeps_good_config() {
        let cfg = ConsoleConfig {
            max_players: 6,
            max_hits_per_entry: 5,
            announce_scoring: false,
        };
        assert_eq!(cfg.clone().validate(), cfg);
    }

    #[test]
    fn load_reads_default_file() {
        let path = temp_config("present", "max_players = 4\nannounce_scoring = false\n");
        let cfg = ConsoleConfig::load_from(path.to_str().unwrap(), no_env());
        assert_eq!(cfg.max_players, 4);
        assert_eq!(cfg.max_hits_per_entry, 3);
        assert!(!cfg.announce_scoring);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn load_prefers_cricket_config_path() {
        let fallback = temp_config("fallback", "max_players = 2\n");
        let chosen = temp_config("chosen", "max_players = 6\n");
        let env = env_of(&[("CRICKET_CONFIG", chosen.to_str().unwrap())]);
        let cfg = ConsoleConfig::load_from(fallback.to_str().unwrap(), env);
        assert_eq!(cfg.max_players, 6);

        // empty value falls back to the default path
        let env = env_of(&[("CRICKET_CONFIG", "")]);
        let cfg = ConsoleConfig::load_from(fallback.to_str().unwrap(), env);
        assert_eq!(cfg.max_players, 2);

        std::fs::remove_file(fallback).unwrap();
        std::fs::remove_file(chosen).unwrap();
    }

    #[test]
    fn load_missing_file_uses_defaults() {
        let cfg = ConsoleConfig::load_from(&missing_path("missing"), no_env());
        assert_eq!(cfg, ConsoleConfig::default());
    }

    #[test]
    fn load_unparsable_file_uses_defaults() {
        let path = temp_config("broken", "max_players = \"lots\"\n[[[");
        let cfg = ConsoleConfig::load_from(path.to_str().unwrap(), no_env());
        assert_eq!(cfg, ConsoleConfig::default());
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn env_overrides_file_values() {
        let path = temp_config("overridden", "max_players = 4\nmax_hits_per_entry = 2\n");
        let env = env_of(&[("CRICKET_MAX_PLAYERS", "7"), ("CRICKET_MAX_HITS", "5")]);
        let cfg = ConsoleConfig::load_from(path.to_str().unwrap(), env);
        assert_eq!(cfg.max_players, 7);
        assert_eq!(cfg.max_hits_per_entry, 5);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn env_overrides_without_file() {
        let env = env_of(&[("CRICKET_MAX_HITS", "9")]);
        let cfg = ConsoleConfig::load_from(&missing_path("env-only"), env);
        assert_eq!(cfg.max_hits_per_entry, 9);
        assert_eq!(cfg.max_players, 10);
    }

    #[test]
    fn out_of_range_env_values_are_clamped() {
        let env = env_of(&[("CRICKET_MAX_PLAYERS", "50"), ("CRICKET_MAX_HITS", "0")]);
        let cfg = ConsoleConfig::load_from(&missing_path("clamped"), env);
        assert_eq!(cfg.max_players, MAX_PLAYERS);
        assert_eq!(cfg.max_hits_per_entry, 3);

        let env = env_of(&[("CRICKET_MAX_PLAYERS", "0")]);
        let cfg = ConsoleConfig::load_from(&missing_path("clamped-low"), env);
        assert_eq!(cfg.max_players, 1);
    }

    #[test]
    fn unparsable_env_values_are_ignored() {
        let path = temp_config("bad-env", "max_players = 3\n");
        let env = env_of(&[("CRICKET_MAX_PLAYERS", "many"), ("CRICKET_MAX_HITS", "-1")]);
        let cfg = ConsoleConfig::load_from(path.to_str().unwrap(), env);
        assert_eq!(cfg.max_players, 3);
        assert_eq!(cfg.max_hits_per_entry, 3);
        std::fs::remove_file(path).unwrap();
    }
}
