use super::{Physics, World};
use crate::player::Player;
use st_common::{
  math::FPos,
  save::{PlayerSave, WorldSave},
};
use std::{collections::HashMap, fs, path::Path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaveError {
  #[error("io error: {0}")]
  IO(#[from] std::io::Error),
  #[error("invalid save data: {0}")]
  Json(#[from] serde_json::Error),
}

impl World {
  /// Snapshots every resident chunk and the player into a serializable save.
  /// Chunks that were never touched are not included; they regenerate
  /// identically from the seed.
  pub fn to_save(&self) -> WorldSave {
    let mut chunks = HashMap::new();
    self.store().for_each(|index, c| {
      chunks.insert(index, c.to_save(index));
    });
    let p = self.player().lock();
    WorldSave {
      seed: self.seed().into(),
      mode: self.mode(),
      player: PlayerSave { x: p.pos.x, y: p.pos.y, health: p.health },
      chunks,
    }
  }

  /// Rebuilds a world from a save. Saved chunks are installed verbatim;
  /// unknown block ids inside them were already degraded to air by the chunk
  /// decoder. Health is clamped into the valid range rather than trusted.
  pub fn from_save(save: &WorldSave, physics: Physics) -> World {
    let w = World::new(&save.seed, save.mode, physics);
    let chunks = save
      .chunks
      .values()
      .map(|cs| (cs.index, super::chunk::Chunk::from_save(cs)))
      .collect();
    w.store().insert_no_overwrite(chunks);
    {
      let mut p = w.player().lock();
      *p = Player::new(FPos::new(save.player.x, save.player.y));
      p.health = save.player.health.clamp(0.0, crate::player::MAX_HEALTH);
    }
    w
  }

  pub fn save_to_file(&self, path: &Path) -> Result<(), SaveError> {
    let data = serde_json::to_string(&self.to_save())?;
    fs::write(path, data)?;
    info!("saved world to {}", path.display());
    Ok(())
  }

  pub fn load_from_file(path: &Path, physics: Physics) -> Result<World, SaveError> {
    let data = fs::read_to_string(path)?;
    let save: WorldSave = serde_json::from_str(&data)?;
    info!("loaded world from {}", path.display());
    Ok(World::from_save(&save, physics))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::block::{Kind, Layer};
  use st_common::util::GameMode;

  #[test]
  fn round_trip_preserves_edits_and_player() {
    let w = World::new("round-trip", GameMode::Peaceful, Physics::default());
    w.set_block(40, 30, Layer::Front, Kind::Gold);
    w.set_block(-3, 80, Layer::Back, Kind::Dirt);
    {
      let mut p = w.player().lock();
      p.pos = FPos::new(12.25, 41.5);
      p.health = 7.5;
    }

    let save = w.to_save();
    let restored = World::from_save(&save, Physics::default());

    assert_eq!(restored.seed(), "round-trip");
    assert_eq!(restored.mode(), GameMode::Peaceful);
    assert_eq!(restored.get_block(40, 30, Layer::Front), Kind::Gold);
    assert_eq!(restored.get_block(-3, 80, Layer::Back), Kind::Dirt);
    let p = restored.player().lock();
    assert_eq!(p.pos, FPos::new(12.25, 41.5));
    assert_eq!(p.health, 7.5);
  }

  #[test]
  fn untouched_chunks_are_not_persisted() {
    let w = World::new("sparse", GameMode::Normal, Physics::default());
    w.set_block(5, 10, Layer::Front, Kind::Stone);
    let save = w.to_save();
    assert_eq!(save.chunks.len(), 1);
    assert!(save.chunks.contains_key(&0));

    // The restored world regenerates everything else from the seed.
    let restored = World::from_save(&save, Physics::default());
    let fresh = World::new("sparse", GameMode::Normal, Physics::default());
    for x in 32..64 {
      for y in 0..st_common::math::WORLD_HEIGHT {
        assert_eq!(
          restored.get_block(x, y, Layer::Front),
          fresh.get_block(x, y, Layer::Front)
        );
      }
    }
  }

  #[test]
  fn json_survives_the_disk() {
    let dir = std::env::temp_dir().join("strata-save-test");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("world.json");

    let w = World::new("disk", GameMode::Normal, Physics::default());
    w.set_block(0, 50, Layer::Front, Kind::Diamond);
    w.save_to_file(&path).unwrap();

    let restored = World::load_from_file(&path, Physics::default()).unwrap();
    assert_eq!(restored.get_block(0, 50, Layer::Front), Kind::Diamond);
    fs::remove_file(&path).unwrap();
  }

  #[test]
  fn saved_health_is_clamped() {
    let w = World::new("clamp", GameMode::Normal, Physics::default());
    let mut save = w.to_save();
    save.player.health = 9999.0;
    let restored = World::from_save(&save, Physics::default());
    assert_eq!(restored.player().lock().health, crate::player::MAX_HEALTH);
  }
}
