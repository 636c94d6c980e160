//! Game tunables. Defaults reproduce the classic 512x480 arena; a JSON
//! override can be stored in the browser under [`STORAGE_KEY`].

use log::Level;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

pub const STORAGE_KEY: &str = "monster_hunt.config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroSpec {
    pub width: f64,
    pub height: f64,
    /// Movement in pixels per second.
    pub speed: f64,
}

impl Default for HeroSpec {
    fn default() -> Self {
        Self {
            width: 32.0,
            height: 32.0,
            speed: 256.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonsterSpec {
    pub width: f64,
    pub height: f64,
}

impl Default for MonsterSpec {
    fn default() -> Self {
        Self {
            width: 30.0,
            height: 32.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub background: String,
    pub hero: String,
    pub monster: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            background: "images/background.png".to_string(),
            hero: "images/hero.png".to_string(),
            monster: "images/monster.png".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub stage_width: f64,
    pub stage_height: f64,
    pub hero: HeroSpec,
    pub monster: MonsterSpec,
    /// Side of the square box used for hero/monster overlap, independent of sprite sizes.
    pub collision_box: f64,
    /// Distance the monster is kept from every stage edge when relocated.
    pub monster_inset: f64,
    /// Frame delta (ms) is divided by this to get the movement modifier.
    pub time_scale_ms: f64,
    pub first_tick_delay_ms: u32,
    pub assets: AssetPaths,
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            stage_width: 512.0,
            stage_height: 480.0,
            hero: HeroSpec::default(),
            monster: MonsterSpec::default(),
            collision_box: 32.0,
            monster_inset: 32.0,
            time_scale_ms: 1200.0,
            first_tick_delay_ms: 500,
            assets: AssetPaths::default(),
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(GameError::InvalidConfig(msg));
        if !(self.hero.speed > 0.0) {
            return invalid(format!("hero speed must be positive, got {}", self.hero.speed));
        }
        if !(self.collision_box > 0.0) {
            return invalid(format!("collision box must be positive, got {}", self.collision_box));
        }
        if !(self.time_scale_ms > 0.0) {
            return invalid(format!("time scale must be positive, got {}", self.time_scale_ms));
        }
        if self.monster_inset < 0.0 {
            return invalid(format!("monster inset must not be negative, got {}", self.monster_inset));
        }
        if self.hero.width <= 0.0 || self.hero.height <= 0.0 {
            return invalid("hero size must be positive".to_string());
        }
        if !(self.stage_width > 2.0 * self.monster_inset && self.stage_height > 2.0 * self.monster_inset) {
            return invalid(format!(
                "stage {}x{} leaves no room inside a {} inset",
                self.stage_width, self.stage_height, self.monster_inset
            ));
        }
        if self.stage_width < self.hero.width || self.stage_height < self.hero.height {
            return invalid(format!(
                "hero {}x{} does not fit on a {}x{} stage",
                self.hero.width, self.hero.height, self.stage_width, self.stage_height
            ));
        }
        self.level()?;
        Ok(())
    }

    pub fn level(&self) -> Result<Level> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| GameError::InvalidConfig(format!("unknown log level `{}`", self.log_level)))
    }
}

/// The stored override, if one is present. Errors cover both an unreachable
/// store and an unusable override; callers fall back to defaults.
pub fn load() -> Result<Option<GameConfig>> {
    match read_stored()? {
        Some(raw) => GameConfig::from_json(&raw).map(Some),
        None => Ok(None),
    }
}

fn read_stored() -> Result<Option<String>> {
    let window = web_sys::window().ok_or(GameError::MissingGlobal("window"))?;
    let Some(store) = window.local_storage()? else {
        return Ok(None);
    };
    Ok(store.get_item(STORAGE_KEY)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_arena() {
        let config = GameConfig::default();
        assert_eq!(config.stage_width, 512.0);
        assert_eq!(config.stage_height, 480.0);
        assert_eq!(config.hero.speed, 256.0);
        assert_eq!(config.monster.width, 30.0);
        assert_eq!(config.collision_box, 32.0);
        assert_eq!(config.time_scale_ms, 1200.0);
        assert_eq!(config.first_tick_delay_ms, 500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config = GameConfig::from_json(r#"{ "hero": { "speed": 400 }, "log_level": "debug" }"#)
            .expect("partial config should parse");
        assert_eq!(config.hero.speed, 400.0);
        assert_eq!(config.hero.width, 32.0);
        assert_eq!(config.stage_width, 512.0);
        assert_eq!(config.assets.monster, "images/monster.png");
        assert_eq!(config.level().unwrap(), Level::Debug);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = GameConfig::from_json("{ stage_width: ").unwrap_err();
        assert!(matches!(err, GameError::ConfigParse(_)));
    }

    #[test]
    fn stage_smaller_than_inset_is_rejected() {
        let err = GameConfig::from_json(r#"{ "stage_width": 60 }"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn non_positive_speed_is_rejected() {
        let err = GameConfig::from_json(r#"{ "hero": { "speed": 0 } }"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn off_is_not_a_console_level() {
        let err = GameConfig::from_json(r#"{ "log_level": "off" }"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let err = GameConfig::from_json(r#"{ "log_level": "chatty" }"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }
}
