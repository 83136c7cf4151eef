use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use actor_engine::{FieldBounds, LoopConfig, ARROW_SPEED, HERO_STEP, ZOMBIE_STEP};
use serde::Deserialize;
use thiserror::Error;

pub(crate) const CONFIG_ENV_VAR: &str = "ZOMBIE_LAND_CONFIG";

const MAX_TICKS_PER_SECOND: u32 = 240;
const MAX_INITIAL_ZOMBIES: u32 = 64;

/// Tunables for one Zombie Land session. Every field is optional in the JSON
/// file; missing ones keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct GameConfig {
    pub(crate) field_width: u32,
    pub(crate) field_height: u32,
    pub(crate) ticks_per_second: u32,
    /// Baseline the actors stand on; their bottom edge sits here.
    pub(crate) ground_y: i32,
    pub(crate) hero_spawn_x: i32,
    pub(crate) hero_step: i32,
    pub(crate) zombie_step: i32,
    pub(crate) arrow_speed: u32,
    pub(crate) initial_zombies: u32,
    pub(crate) zombie_hit_points: u32,
    /// Horizontal centre distance at which a zombie stops and attacks.
    pub(crate) zombie_reach: i32,
    /// Overrides `<root>/assets/sprites`.
    pub(crate) asset_root: Option<PathBuf>,
    /// Backdrop image under the sprite root, without the `.png` extension.
    pub(crate) background: Option<String>,
    pub(crate) attack_seed: Option<u64>,
    pub(crate) spawn_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 1024,
            field_height: 768,
            ticks_per_second: 20,
            ground_y: 700,
            hero_spawn_x: 64,
            hero_step: HERO_STEP,
            zombie_step: ZOMBIE_STEP,
            arrow_speed: ARROW_SPEED,
            initial_zombies: 3,
            zombie_hit_points: 2,
            zombie_reach: 72,
            asset_root: None,
            background: Some("game_background".to_string()),
            attack_seed: None,
            spawn_seed: None,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read environment variable {var}: {source}")]
    EnvVar {
        var: &'static str,
        #[source]
        source: env::VarError,
    },
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}{}: {source}", at_json_path(.json_path))]
    Parse {
        path: PathBuf,
        json_path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

fn at_json_path(json_path: &str) -> String {
    if json_path.is_empty() || json_path == "." {
        String::new()
    } else {
        format!(" at {json_path}")
    }
}

impl GameConfig {
    /// Defaults, unless `ZOMBIE_LAND_CONFIG` names a JSON file to read.
    pub(crate) fn from_env() -> Result<Option<(Self, PathBuf)>, ConfigError> {
        match env::var(CONFIG_ENV_VAR) {
            Ok(value) => {
                let path = PathBuf::from(value);
                let config = Self::load(&path)?;
                Ok(Some((config, path)))
            }
            Err(env::VarError::NotPresent) => Ok(None),
            Err(source) => Err(ConfigError::EnvVar {
                var: CONFIG_ENV_VAR,
                source,
            }),
        }
    }

    pub(crate) fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw, path)
    }

    pub(crate) fn parse(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        let mut deserializer = serde_json::Deserializer::from_str(raw);
        let config: Self =
            serde_path_to_error::deserialize(&mut deserializer).map_err(|error| {
                let json_path = error.path().to_string();
                ConfigError::Parse {
                    path: path.to_path_buf(),
                    json_path,
                    source: error.into_inner(),
                }
            })?;
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.field_width == 0 || self.field_height == 0 {
            return Err(invalid("field_width/field_height", "must be non-zero"));
        }
        if !(1..=MAX_TICKS_PER_SECOND).contains(&self.ticks_per_second) {
            return Err(invalid(
                "ticks_per_second",
                format!("must be in 1..={MAX_TICKS_PER_SECOND}"),
            ));
        }
        if self.ground_y <= 0 || self.ground_y > self.field_height as i32 {
            return Err(invalid("ground_y", "must lie inside the field"));
        }
        if self.hero_spawn_x < 0 || self.hero_spawn_x >= self.field_width as i32 {
            return Err(invalid("hero_spawn_x", "must lie inside the field"));
        }
        if self.hero_step <= 0 {
            return Err(invalid("hero_step", "must be positive"));
        }
        if self.zombie_step <= 0 {
            return Err(invalid("zombie_step", "must be positive"));
        }
        if self.arrow_speed == 0 {
            return Err(invalid("arrow_speed", "must be positive"));
        }
        if self.initial_zombies > MAX_INITIAL_ZOMBIES {
            return Err(invalid(
                "initial_zombies",
                format!("must be at most {MAX_INITIAL_ZOMBIES}"),
            ));
        }
        if self.zombie_hit_points == 0 {
            return Err(invalid("zombie_hit_points", "must be at least 1"));
        }
        if self.zombie_reach < 0 {
            return Err(invalid("zombie_reach", "must not be negative"));
        }
        Ok(())
    }

    pub(crate) fn field(&self) -> FieldBounds {
        FieldBounds::new(self.field_width, self.field_height)
    }

    pub(crate) fn loop_config(&self) -> LoopConfig {
        LoopConfig {
            field_width: self.field_width,
            field_height: self.field_height,
            target_tps: self.ticks_per_second,
            max_frame_delta: Duration::from_millis(250),
            ..LoopConfig::default()
        }
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn parse(raw: &str) -> Result<GameConfig, ConfigError> {
        GameConfig::parse(raw, Path::new("test.json"))
    }

    #[test]
    fn defaults_are_valid_and_match_the_classic_game() {
        let config = GameConfig::default();
        config.validate().expect("defaults validate");
        assert_eq!(config.field(), FieldBounds::new(1024, 768));
        assert_eq!(config.ticks_per_second, 20);
        assert_eq!(config.hero_step, 5);
        assert_eq!(config.arrow_speed, 50);
        assert_eq!(config.initial_zombies, 3);
    }

    #[test]
    fn empty_object_yields_defaults() {
        assert_eq!(parse("{}").expect("parse"), GameConfig::default());
    }

    #[test]
    fn partial_object_overrides_only_named_fields() {
        let config = parse(r#"{ "initial_zombies": 5, "attack_seed": 9 }"#).expect("parse");
        assert_eq!(config.initial_zombies, 5);
        assert_eq!(config.attack_seed, Some(9));
        assert_eq!(config.field_width, 1024);
    }

    #[test]
    fn type_errors_carry_the_json_path() {
        let error = parse(r#"{ "arrow_speed": "fast" }"#).expect_err("bad type");
        match &error {
            ConfigError::Parse { json_path, .. } => assert_eq!(json_path, "arrow_speed"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(error.to_string().contains("at arrow_speed"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let error = parse(r#"{ "zombie_speed": 3 }"#).expect_err("unknown field");
        assert!(matches!(error, ConfigError::Parse { .. }));
    }

    #[test]
    fn out_of_range_values_fail_validation() {
        for raw in [
            r#"{ "ticks_per_second": 0 }"#,
            r#"{ "zombie_hit_points": 0 }"#,
            r#"{ "ground_y": 900 }"#,
            r#"{ "hero_step": -1 }"#,
            r#"{ "initial_zombies": 1000 }"#,
        ] {
            let error = parse(raw).expect_err(raw);
            assert!(matches!(error, ConfigError::Invalid { .. }), "raw={raw}");
        }
    }

    #[test]
    fn loads_from_a_file() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "field_width": 800, "hero_spawn_x": 10 }}"#).expect("write");

        let config = GameConfig::load(file.path()).expect("load");

        assert_eq!(config.field_width, 800);
        assert_eq!(config.loop_config().field_width, 800);
        assert_eq!(config.loop_config().target_tps, 20);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let error = GameConfig::load(&dir.path().join("absent.json")).expect_err("missing");
        assert!(matches!(error, ConfigError::Read { .. }));
    }
}
