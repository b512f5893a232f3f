//! World state: resident chunks, the generator, the local player, and the
//! remote players mirrored off the wire.

pub mod chunk;
pub mod gen;
pub mod store;

mod blocks;
mod save;

pub use save::SaveError;

use crate::{
  config::Config,
  player::Player,
};
use chunk::Chunk;
use gen::WorldGen;
use parking_lot::Mutex;
use rayon::prelude::*;
use st_common::math::FPos;
use st_common::util::GameMode;
use std::collections::HashMap;
use store::{ChunkStore, EvictionPolicy};

/// Tunable physics constants. Defaults match the values players expect; they
/// are exposed through the config file for experimentation.
#[derive(Debug, Clone, Copy)]
pub struct Physics {
  /// Horizontal speed while a move key is held, in blocks per second.
  pub move_speed:        f64,
  /// Upward speed applied on jump, in blocks per second.
  pub jump_speed:        f64,
  /// Downward acceleration, in blocks per second squared.
  pub gravity:           f64,
  /// Terminal fall speed, in blocks per second.
  pub max_fall_speed:    f64,
  /// Fastest landing that deals no damage, in blocks per second.
  pub safe_fall_speed:   f64,
  /// Damage per block-per-second of landing speed over the safe limit.
  pub fall_damage_scale: f64,
}

impl Default for Physics {
  fn default() -> Self {
    Physics {
      move_speed:        7.0,
      jump_speed:        13.0,
      gravity:           30.0,
      max_fall_speed:    40.0,
      safe_fall_speed:   18.0,
      fall_damage_scale: 0.8,
    }
  }
}

pub struct World {
  store:   ChunkStore,
  gen:     WorldGen,
  seed:    String,
  mode:    GameMode,
  physics: Physics,
  player:  Mutex<Player>,
  remote:  Mutex<HashMap<String, FPos>>,
}

impl World {
  pub fn new(seed: &str, mode: GameMode, physics: Physics) -> Self {
    let gen = WorldGen::new(seed);
    let spawn = FPos::new(0.5, (gen.surface_height(0) - 1) as f64);
    World {
      store: ChunkStore::new(EvictionPolicy::Never),
      gen,
      seed: seed.into(),
      mode,
      physics,
      player: Mutex::new(Player::new(spawn)),
      remote: Mutex::new(HashMap::new()),
    }
  }

  pub fn from_config(config: &Config) -> Self {
    World::new(&config.seed, config.mode, config.physics())
  }

  pub fn seed(&self) -> &str { &self.seed }
  pub fn mode(&self) -> GameMode { self.mode }
  pub fn physics(&self) -> &Physics { &self.physics }
  pub fn gen(&self) -> &WorldGen { &self.gen }
  pub fn store(&self) -> &ChunkStore { &self.store }

  /// The position a fresh or respawned player stands at: centered on world
  /// column 0, one row above its surface block.
  pub fn spawn_pos(&self) -> FPos { FPos::new(0.5, (self.gen.surface_height(0) - 1) as f64) }

  pub fn player(&self) -> &Mutex<Player> { &self.player }
  pub fn remote_players(&self) -> &Mutex<HashMap<String, FPos>> { &self.remote }

  /// Runs `f` on the chunk at `index`, generating it on first access.
  pub fn chunk<F, R>(&self, index: i32, f: F) -> R
  where
    F: FnOnce(&mut Chunk) -> R,
  {
    self.store.with(index, || self.gen.generate(index), f)
  }

  /// Generates a chunk without touching the store. Used by pre-generation so
  /// the expensive work happens outside any lock.
  pub fn pre_generate_chunk(&self, index: i32) -> (i32, Chunk) {
    (index, self.gen.generate(index))
  }

  /// Generates every chunk within `radius` of the origin on the rayon pool,
  /// then inserts the batch. Chunks a player already touched are kept.
  pub fn pregenerate(&self, radius: i32) {
    let indices: Vec<i32> = (-radius..=radius).collect();
    info!("pre-generating {} chunks", indices.len());
    let chunks: Vec<_> = indices.into_par_iter().map(|idx| self.pre_generate_chunk(idx)).collect();
    self.store.insert_no_overwrite(chunks);
    info!("done pre-generating, {} chunks resident", self.store.len());
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::block::{Kind, Layer};
  use st_common::math::Pos;

  #[test]
  fn chunk_access_generates_once() {
    let w = World::new("test", GameMode::Normal, Physics::default());
    assert!(!w.store().contains(0));
    let a = w.chunk(0, |c| c.clone());
    assert!(w.store().contains(0));
    let b = w.chunk(0, |c| c.clone());
    assert_eq!(a, b);
  }

  #[test]
  fn pregenerate_fills_radius() {
    let w = World::new("test", GameMode::Normal, Physics::default());
    w.pregenerate(3);
    for idx in -3..=3 {
      assert!(w.store().contains(idx));
    }
    assert_eq!(w.store().len(), 7);
  }

  #[test]
  fn pregenerate_keeps_player_edits() {
    let w = World::new("test", GameMode::Normal, Physics::default());
    w.chunk(1, |c| c.set(Layer::Front, Pos::new(0, 50), Kind::Gold).unwrap());
    w.pregenerate(2);
    let kept = w.chunk(1, |c| c.get(Layer::Front, Pos::new(0, 50)).unwrap());
    assert_eq!(kept, Kind::Gold);
  }

  #[test]
  fn spawn_is_above_surface() {
    let w = World::new("test", GameMode::Normal, Physics::default());
    let spawn = w.spawn_pos();
    assert_eq!(spawn.x(), 0.5);
    assert_eq!(spawn.y() as i32, w.gen().surface_height(0) - 1);
    // The cell below spawn is the surface block.
    assert!(w.get_block(0, spawn.y() as i32 + 1, Layer::Front).is_solid());
  }
}
