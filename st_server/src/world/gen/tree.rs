use super::WorldGen;
use crate::{
  block::{Kind, Layer},
  world::chunk::Chunk,
};
use st_common::math::{Pos, CHUNK_WIDTH, WORLD_HEIGHT};

/// Plants trees on grassy and snowy surfaces.
///
/// Tree placement is decided per column from two hash channels: a spot roll
/// against a per-biome density, and a spacing roll that thins out adjacent
/// candidates so trunks don't touch. Columns within two cells of a chunk edge
/// never host a trunk, and canopy cells that would land outside the chunk are
/// skipped, which keeps generation single-chunk.
pub struct TreeGen {}

/// Hash channel for the spot roll.
const SPOT_CHANNEL: i32 = 7;
/// Hash channel for the spacing roll.
const SPACING_CHANNEL: i32 = 11;
/// Canopy radius, in Manhattan distance from the trunk top.
const CANOPY_RADIUS: i32 = 3;

impl TreeGen {
  pub fn new() -> Self { TreeGen {} }

  pub fn place(&self, gen: &WorldGen, index: i32, c: &mut Chunk) {
    for lx in 2..CHUNK_WIDTH - 2 {
      let wx = index * CHUNK_WIDTH + lx;
      let biome = gen.biome(wx);
      if !biome.grows_trees() {
        continue;
      }
      let density = match biome {
        super::Biome::Forest => 0.72,
        _ => 0.88,
      };
      if gen.noise().hash3(wx, 0, SPOT_CHANNEL) <= density {
        continue;
      }
      if (gen.noise().hash3(wx, 0, SPACING_CHANNEL) - 0.5).abs() >= 0.22 {
        continue;
      }
      let surface = gen.surface_height(wx);
      if !matches!(c.get(Layer::Front, Pos::new(lx, surface)).unwrap(), Kind::Grass | Kind::Snow) {
        continue;
      }
      self.grow(gen, lx, surface, wx, c);
    }
  }

  fn grow(&self, gen: &WorldGen, lx: i32, surface: i32, wx: i32, c: &mut Chunk) {
    let trunk_height = 4 + ((wx ^ gen.seed()) & 1);
    let top = surface - trunk_height;
    if top < 1 {
      return;
    }
    // A neighboring canopy may already occupy part of the column, in which
    // case the whole tree is skipped rather than grown partially.
    for y in top..surface {
      if c.get(Layer::Front, Pos::new(lx, y)).unwrap() != Kind::Air {
        return;
      }
    }
    for y in top..surface {
      c.set(Layer::Front, Pos::new(lx, y), Kind::Log).unwrap();
    }
    // The canopy diamond is centered one above the topmost trunk cell.
    let center_y = top - 1;
    for dx in -CANOPY_RADIUS..=CANOPY_RADIUS {
      for dy in -CANOPY_RADIUS..=CANOPY_RADIUS {
        if dx.abs() + dy.abs() > CANOPY_RADIUS {
          continue;
        }
        let (cx, cy) = (lx + dx, center_y + dy);
        if cx < 0 || cx >= CHUNK_WIDTH || cy < 0 || cy >= WORLD_HEIGHT {
          continue;
        }
        let rel = Pos::new(cx, cy);
        if c.get(Layer::Front, rel).unwrap() == Kind::Air {
          c.set(Layer::Front, rel, Kind::Leaves).unwrap();
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn trunks_in(gen: &WorldGen, idx: i32, c: &Chunk) -> Vec<i32> {
    let mut out = vec![];
    for lx in 0..CHUNK_WIDTH {
      let surface = gen.surface_height(idx * CHUNK_WIDTH + lx);
      if surface >= 1 && c.get(Layer::Front, Pos::new(lx, surface - 1)).unwrap() == Kind::Log {
        out.push(lx);
      }
    }
    out
  }

  #[test]
  fn trunks_stay_off_chunk_edges() {
    for seed in ["a", "b", "c", "forest", "0"] {
      let gen = WorldGen::new(seed);
      for idx in -6..6 {
        let c = gen.generate(idx);
        for lx in [0, 1, CHUNK_WIDTH - 2, CHUNK_WIDTH - 1] {
          let wx = idx * CHUNK_WIDTH + lx;
          let surface = gen.surface_height(wx);
          if surface >= 1 {
            assert_ne!(
              c.get(Layer::Front, Pos::new(lx, surface - 1)).unwrap(),
              Kind::Log,
              "trunk on edge column {lx} of chunk {idx}"
            );
          }
        }
      }
    }
  }

  #[test]
  fn trunks_are_log_all_the_way_up() {
    let gen = WorldGen::new("forest");
    let mut seen = 0;
    for idx in -20..20 {
      let c = gen.generate(idx);
      for lx in trunks_in(&gen, idx, &c) {
        seen += 1;
        let wx = idx * CHUNK_WIDTH + lx;
        let surface = gen.surface_height(wx);
        let h = 4 + ((wx ^ gen.seed()) & 1);
        for y in (surface - h)..surface {
          assert_eq!(c.get(Layer::Front, Pos::new(lx, y)).unwrap(), Kind::Log);
        }
        // The cell above the trunk top is canopy.
        assert_eq!(c.get(Layer::Front, Pos::new(lx, surface - h - 1)).unwrap(), Kind::Leaves);
      }
    }
    assert!(seen > 0, "no trees generated across 40 chunks");
  }

  #[test]
  fn desert_and_snow_have_no_trees() {
    let gen = WorldGen::new("test");
    for idx in -20..20 {
      let c = gen.generate(idx);
      for lx in 0..CHUNK_WIDTH {
        let wx = idx * CHUNK_WIDTH + lx;
        if gen.biome(wx).grows_trees() {
          continue;
        }
        for y in 0..WORLD_HEIGHT {
          let k = c.get(Layer::Front, Pos::new(lx, y)).unwrap();
          assert_ne!(k, Kind::Log, "log in non-tree biome at ({wx}, {y})");
        }
      }
    }
  }
}
