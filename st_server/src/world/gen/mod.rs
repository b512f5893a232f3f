//! Terrain generation.
//!
//! A [`WorldGen`] is a pure function of the seed: generating the same chunk
//! index twice yields bit-identical grids, and generation never reads other
//! chunks, so chunks can be generated in any order, in parallel.
//!
//! Stages run in a fixed order per chunk: base column fill, ore substitution,
//! cave carving, tree decoration, and finally the back-layer derivation.

mod noise;
mod tree;
mod underground;

pub use noise::{seed_from_str, Noise};

use super::chunk::Chunk;
use crate::block::{Kind, Layer};
use st_common::math::{Pos, CHUNK_WIDTH, WORLD_HEIGHT};
use tree::TreeGen;
use underground::Underground;

/// Rows of topsoil between the surface block and the first stone cell.
const SOIL_DEPTH: i32 = 4;

/// A horizontal-position-derived category controlling topsoil and
/// vegetation. Boundaries are hard edges; there is no blending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Biome {
  Desert,
  Plains,
  Forest,
  Snow,
}

impl Biome {
  /// The surface block for this biome.
  pub fn top(&self) -> Kind {
    match self {
      Biome::Desert => Kind::Sand,
      Biome::Plains | Biome::Forest => Kind::Grass,
      Biome::Snow => Kind::Snow,
    }
  }

  /// The topsoil band, by depth below the surface block (0 is directly
  /// beneath the surface).
  pub fn band(&self, depth: i32) -> Kind {
    match self {
      Biome::Desert => {
        if depth < 2 {
          Kind::Sand
        } else {
          Kind::Sandstone
        }
      }
      _ => Kind::Dirt,
    }
  }

  /// Returns true if trees may grow in this biome.
  pub fn grows_trees(&self) -> bool { matches!(self, Biome::Plains | Biome::Forest) }
}

pub struct WorldGen {
  seed:        i32,
  noise:       Noise,
  underground: Underground,
  trees:       TreeGen,
}

impl WorldGen {
  pub fn new(seed_str: &str) -> Self {
    let seed = seed_from_str(seed_str);
    WorldGen { seed, noise: Noise::new(seed), underground: Underground::new(), trees: TreeGen::new() }
  }

  pub fn seed(&self) -> i32 { self.seed }
  pub fn noise(&self) -> &Noise { &self.noise }

  /// The terrain surface row at the given world column. A fractal sum of
  /// three smooth noise octaves, mapped onto an elevation band and clamped so
  /// terrain never reaches the top or bottom of the world.
  pub fn surface_height(&self, wx: i32) -> i32 {
    let x = wx as f64;
    let e = self.noise.smooth1d(x, 48.0) * 0.6
      + self.noise.smooth1d(x, 96.0) * 0.3
      + self.noise.smooth1d(x, 192.0) * 0.1;
    let h = WORLD_HEIGHT as f64;
    let base = h * 0.45;
    let amp = h * 0.12;
    let v = base + (e - 0.5) * 2.0 * amp;
    let v = v.clamp(h * 0.2, h * 0.8);
    v as i32
  }

  /// The biome at the given world column. A single low-frequency noise
  /// channel, offset from the height channel's input so the two fields don't
  /// correlate, thresholded into four bands.
  pub fn biome(&self, wx: i32) -> Biome {
    let e = self.noise.smooth1d(wx as f64 + 100_000.0, 256.0);
    if e < 0.3 {
      Biome::Desert
    } else if e < 0.5 {
      Biome::Plains
    } else if e < 0.7 {
      Biome::Forest
    } else {
      Biome::Snow
    }
  }

  /// Generates one chunk. Pure in `(seed, index)`.
  pub fn generate(&self, index: i32) -> Chunk {
    let mut c = Chunk::new();
    self.base_columns(index, &mut c);
    self.underground.process(self, index, &mut c);
    self.trees.place(self, index, &mut c);
    self.derive_back_layer(index, &mut c);
    c
  }

  /// Bedrock floor, biome topsoil, and stone, per column.
  fn base_columns(&self, index: i32, c: &mut Chunk) {
    for lx in 0..CHUNK_WIDTH {
      let wx = index * CHUNK_WIDTH + lx;
      let surface = self.surface_height(wx);
      let biome = self.biome(wx);
      for y in 0..WORLD_HEIGHT {
        let kind = if y == WORLD_HEIGHT - 1 {
          Kind::Bedrock
        } else if y > surface + SOIL_DEPTH {
          Kind::Stone
        } else if y > surface {
          biome.band(y - surface - 1)
        } else if y == surface {
          biome.top()
        } else {
          Kind::Air
        };
        c.set(Layer::Front, Pos::new(lx, y), kind).unwrap();
      }
    }
  }

  /// Derives the back layer once the front layer is final. Solid front cells
  /// are mirrored; carved-out cells below the surface show stone behind; the
  /// bedrock row is bedrock in both layers.
  fn derive_back_layer(&self, index: i32, c: &mut Chunk) {
    for lx in 0..CHUNK_WIDTH {
      let wx = index * CHUNK_WIDTH + lx;
      let surface = self.surface_height(wx);
      for y in 0..WORLD_HEIGHT {
        let rel = Pos::new(lx, y);
        let front = c.get(Layer::Front, rel).unwrap();
        let back = if y == WORLD_HEIGHT - 1 {
          Kind::Bedrock
        } else if front.is_solid() {
          front
        } else if y > surface {
          Kind::Stone
        } else {
          Kind::Air
        };
        c.set(Layer::Back, rel, back).unwrap();
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn generation_is_deterministic() {
    let gen = WorldGen::new("test");
    assert_eq!(gen.generate(0), gen.generate(0));
    // A second generator over the same seed string, to catch hidden state.
    let other = WorldGen::new("test");
    for idx in [-3, -1, 0, 1, 17] {
      assert_eq!(gen.generate(idx), other.generate(idx));
    }
  }

  #[test]
  fn different_seeds_differ() {
    let a = WorldGen::new("one").generate(0);
    let b = WorldGen::new("two").generate(0);
    assert_ne!(a, b);
  }

  #[test]
  fn surface_height_stays_in_band() {
    let gen = WorldGen::new("test");
    let min = (WORLD_HEIGHT as f64 * 0.2) as i32;
    let max = (WORLD_HEIGHT as f64 * 0.8) as i32;
    for wx in -5000..5000 {
      let h = gen.surface_height(wx);
      assert!(h >= min && h <= max, "surface_height({wx}) = {h}");
    }
  }

  #[test]
  fn bedrock_row_in_both_layers() {
    for seed in ["test", "a", "1234"] {
      let gen = WorldGen::new(seed);
      for idx in [-2, 0, 5] {
        let c = gen.generate(idx);
        for lx in 0..CHUNK_WIDTH {
          let rel = Pos::new(lx, WORLD_HEIGHT - 1);
          assert_eq!(c.get(Layer::Front, rel).unwrap(), Kind::Bedrock);
          assert_eq!(c.get(Layer::Back, rel).unwrap(), Kind::Bedrock);
        }
      }
    }
  }

  #[test]
  fn surface_block_matches_biome() {
    let gen = WorldGen::new("test");
    let c = gen.generate(0);
    for lx in 0..CHUNK_WIDTH {
      let surface = gen.surface_height(lx);
      let top = c.get(Layer::Front, Pos::new(lx, surface)).unwrap();
      // Tree trunks never overwrite the surface block, so this is always the
      // biome top.
      assert_eq!(top, gen.biome(lx).top());
      // Everything above the surface is air, logs or leaves.
      for y in 0..surface {
        let k = c.get(Layer::Front, Pos::new(lx, y)).unwrap();
        assert!(
          matches!(k, Kind::Air | Kind::Log | Kind::Leaves),
          "unexpected {k:?} above surface at ({lx}, {y})"
        );
      }
    }
  }

  #[test]
  fn back_layer_solid_under_surface() {
    let gen = WorldGen::new("test");
    for idx in [-1, 0, 3] {
      let c = gen.generate(idx);
      for lx in 0..CHUNK_WIDTH {
        let wx = idx * CHUNK_WIDTH + lx;
        let surface = gen.surface_height(wx);
        for y in (surface + 1)..WORLD_HEIGHT {
          let rel = Pos::new(lx, y);
          let back = c.get(Layer::Back, rel).unwrap();
          assert!(back.is_solid(), "back layer air below surface at ({lx}, {y})");
          let front = c.get(Layer::Front, rel).unwrap();
          if front.is_solid() {
            assert_eq!(back, front);
          } else {
            assert_eq!(back, Kind::Stone);
          }
        }
      }
    }
  }

  #[test]
  fn biome_bands_are_exhaustive() {
    let gen = WorldGen::new("test");
    for wx in -2000..2000 {
      // Just exercise every column; the match in biome() is total.
      let b = gen.biome(wx);
      let _ = b.top();
    }
  }
}
