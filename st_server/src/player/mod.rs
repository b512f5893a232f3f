//! The locally-simulated player.

mod tick;

use st_common::math::FPos;

pub const MAX_HEALTH: f64 = 20.0;

/// One tick's worth of input, sampled before the tick runs. Held move keys
/// are level-triggered; jump is consumed by the tick it is passed to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputIntent {
  pub left:  bool,
  pub right: bool,
  pub jump:  bool,
}

/// The player's axis-aligned bounding box, anchored at the bottom-center of
/// the box: `pos` is where the feet are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
  pub pos:       FPos,
  pub vel:       FPos,
  pub width:     f64,
  pub height:    f64,
  pub on_ground: bool,
  pub health:    f64,
}

impl Player {
  pub fn new(pos: FPos) -> Self {
    Player { pos, vel: FPos::new(0.0, 0.0), width: 0.6, height: 1.8, on_ground: false, health: MAX_HEALTH }
  }

  /// Applies damage. Returns true if this kills the player; the caller is
  /// responsible for respawning.
  pub fn damage(&mut self, amount: f64) -> bool {
    self.health -= amount;
    self.health <= 0.0
  }

  /// Resets health and motion and moves the player to `pos`.
  pub fn respawn(&mut self, pos: FPos) {
    self.pos = pos;
    self.vel = FPos::new(0.0, 0.0);
    self.on_ground = false;
    self.health = MAX_HEALTH;
  }
}
