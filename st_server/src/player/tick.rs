//! The fixed-step physics resolver.
//!
//! Coordinates grow downward, so gravity adds to `vy` and a jump sets `vy`
//! negative. Each step resolves the horizontal axis fully before the
//! vertical axis, clamping the box against the first solid cell on the
//! leading edge. Collision only ever consults the front layer.

use super::{InputIntent, Player};
use crate::{
  block::Layer,
  world::World,
};
use st_common::{math::WORLD_HEIGHT, util::GameMode};

/// Skin distance used when mapping box edges to cell indices, so a box
/// resting exactly on a cell boundary doesn't register as inside the cell.
const EPSILON: f64 = 1e-3;

/// Falling past the world bottom by this many rows is lethal.
const VOID_MARGIN: i32 = 10;

/// Damage applied by the void. Exceeds max health regardless of game mode.
const VOID_DAMAGE: f64 = 1000.0;

impl World {
  /// Advances the local player by one step of `dt` seconds. The driving loop
  /// clamps `dt`, so a stall never turns into a teleport through terrain.
  pub fn tick(&self, input: InputIntent, dt: f64) {
    let mut p = self.player().lock();
    self.step_player(&mut p, input, dt);
  }

  fn step_player(&self, p: &mut Player, input: InputIntent, dt: f64) {
    let phys = self.physics();

    p.vel.x = match (input.left, input.right) {
      (true, false) => -phys.move_speed,
      (false, true) => phys.move_speed,
      _ => 0.0,
    };
    if input.jump && p.on_ground {
      p.vel.y = -phys.jump_speed;
    }
    p.vel.y = (p.vel.y + phys.gravity * dt).min(phys.max_fall_speed);

    self.sweep_horizontal(p, dt);
    let landing_speed = self.sweep_vertical(p, dt);

    if let Some(speed) = landing_speed {
      if speed > phys.safe_fall_speed && self.mode() != GameMode::Peaceful {
        let fatal = p.damage((speed - phys.safe_fall_speed) * phys.fall_damage_scale);
        if fatal {
          info!("player died from fall damage");
          p.respawn(self.spawn_pos());
          return;
        }
      }
    }

    if p.pos.y > (WORLD_HEIGHT + VOID_MARGIN) as f64 {
      // Always lethal, even in Peaceful: there is nothing to stand on down
      // there.
      p.damage(VOID_DAMAGE);
      info!("player fell into the void");
      p.respawn(self.spawn_pos());
    }
  }

  /// Moves along x and clamps against the first solid cell on the leading
  /// column, checked for every row the box spans.
  fn sweep_horizontal(&self, p: &mut Player, dt: f64) {
    if p.vel.x == 0.0 {
      return;
    }
    let new_x = p.pos.x + p.vel.x * dt;
    let half = p.width / 2.0;
    let top_row = (p.pos.y - p.height + EPSILON).floor() as i32;
    let bottom_row = (p.pos.y - EPSILON).floor() as i32;
    let col = if p.vel.x > 0.0 {
      (new_x + half).floor() as i32
    } else {
      (new_x - half).floor() as i32
    };
    for row in top_row..=bottom_row {
      if self.get_block(col, row, Layer::Front).is_solid() {
        p.pos.x = if p.vel.x > 0.0 { col as f64 - half } else { (col + 1) as f64 + half };
        return;
      }
    }
    p.pos.x = new_x;
  }

  /// Moves along y and clamps against the first solid cell on the leading
  /// row. Returns the impact speed when this step landed on the ground.
  fn sweep_vertical(&self, p: &mut Player, dt: f64) -> Option<f64> {
    p.on_ground = false;
    if p.vel.y == 0.0 {
      return None;
    }
    let new_y = p.pos.y + p.vel.y * dt;
    let half = p.width / 2.0;
    let left_col = (p.pos.x - half + EPSILON).floor() as i32;
    let right_col = (p.pos.x + half - EPSILON).floor() as i32;
    let row = if p.vel.y > 0.0 {
      new_y.floor() as i32
    } else {
      (new_y - p.height).floor() as i32
    };
    for col in left_col..=right_col {
      if self.get_block(col, row, Layer::Front).is_solid() {
        let falling = p.vel.y > 0.0;
        let impact = p.vel.y;
        if falling {
          p.pos.y = row as f64;
          p.on_ground = true;
        } else {
          p.pos.y = (row + 1) as f64 + p.height;
        }
        p.vel.y = 0.0;
        return falling.then_some(impact);
      }
    }
    p.pos.y = new_y;
    None
  }
}
