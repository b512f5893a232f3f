use serde::{Deserialize, Serialize};

/// The game mode. This only controls damage at the moment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
  /// Fall damage and the void kill the player.
  #[default]
  Normal,
  /// Fall damage is disabled. Falling out of the world still respawns the
  /// player.
  Peaceful,
}
