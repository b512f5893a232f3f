//! Server configuration, read from `server.toml`.
//!
//! On first run the default config is written to disk, so the file a user
//! edits always exists and documents every key.

use crate::world::Physics;
use serde::Deserialize;
use st_common::util::GameMode;
use std::{fs, path::Path};

const DEFAULT: &str = include_str!("default.toml");

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
  pub log_level:     String,
  pub seed:          String,
  pub mode:          GameMode,
  pub pregen_radius: i32,
  pub tick_ms:       u64,
  pub save_file:     String,
  pub physics:       PhysicsConfig,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PhysicsConfig {
  pub move_speed:        f64,
  pub jump_speed:        f64,
  pub gravity:           f64,
  pub max_fall_speed:    f64,
  pub safe_fall_speed:   f64,
  pub fall_damage_scale: f64,
}

impl Default for Config {
  fn default() -> Self {
    // The shipped default.toml is the source of truth for default values.
    toml::from_str(DEFAULT).unwrap_or_else(|e| panic!("invalid default config: {e}"))
  }
}

impl Default for PhysicsConfig {
  fn default() -> Self {
    let p = Physics::default();
    PhysicsConfig {
      move_speed:        p.move_speed,
      jump_speed:        p.jump_speed,
      gravity:           p.gravity,
      max_fall_speed:    p.max_fall_speed,
      safe_fall_speed:   p.safe_fall_speed,
      fall_damage_scale: p.fall_damage_scale,
    }
  }
}

impl Config {
  /// Loads the config at `path`, writing out the default file first if
  /// nothing is there. Unknown keys are ignored; missing keys take their
  /// defaults.
  pub fn load(path: &Path) -> Config {
    if !path.exists() {
      if let Err(e) = fs::write(path, DEFAULT) {
        warn!("could not write default config to {}: {e}", path.display());
      }
    }
    let data = match fs::read_to_string(path) {
      Ok(d) => d,
      Err(e) => {
        warn!("could not read config at {}: {e}; using defaults", path.display());
        return Config::default();
      }
    };
    match toml::from_str(&data) {
      Ok(c) => c,
      Err(e) => {
        error!("invalid config at {}: {e}; using defaults", path.display());
        Config::default()
      }
    }
  }

  pub fn physics(&self) -> Physics {
    Physics {
      move_speed:        self.physics.move_speed,
      jump_speed:        self.physics.jump_speed,
      gravity:           self.physics.gravity,
      max_fall_speed:    self.physics.max_fall_speed,
      safe_fall_speed:   self.physics.safe_fall_speed,
      fall_damage_scale: self.physics.fall_damage_scale,
    }
  }

  pub fn log_level(&self) -> log::LevelFilter {
    match self.log_level.as_str() {
      "error" => log::LevelFilter::Error,
      "warn" => log::LevelFilter::Warn,
      "info" => log::LevelFilter::Info,
      "debug" => log::LevelFilter::Debug,
      "trace" => log::LevelFilter::Trace,
      other => {
        eprintln!("unknown log level `{other}`, using `info`");
        log::LevelFilter::Info
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn shipped_default_parses() {
    let c = Config::default();
    assert_eq!(c.seed, "default");
    assert_eq!(c.mode, GameMode::Normal);
    assert_eq!(c.tick_ms, 50);
    assert_eq!(c.pregen_radius, 8);
    assert_eq!(c.physics.gravity, 30.0);
    assert_eq!(c.log_level(), log::LevelFilter::Info);
  }

  #[test]
  fn partial_config_takes_defaults() {
    let c: Config = toml::from_str("seed = \"hills\"\nmode = \"peaceful\"").unwrap();
    assert_eq!(c.seed, "hills");
    assert_eq!(c.mode, GameMode::Peaceful);
    assert_eq!(c.tick_ms, 50);
    assert_eq!(c.physics.move_speed, 7.0);
  }

  #[test]
  fn physics_section_overrides() {
    let c: Config = toml::from_str("[physics]\ngravity = 9.8").unwrap();
    assert_eq!(c.physics().gravity, 9.8);
    assert_eq!(c.physics().jump_speed, 13.0);
  }
}
