use super::WorldGen;
use crate::{
  block::{Kind, Layer},
  world::chunk::Chunk,
};
use st_common::math::{Pos, CHUNK_WIDTH, WORLD_HEIGHT};

/// Carves caves out of the front layer with a density-threshold field.
///
/// Three smooth noise channels at different scales sum into a density per
/// cell; cells over a depth-dependent threshold are marked, then a smoothing
/// pass drops isolated marks so caves come out as connected pockets rather
/// than speckle. Bedrock and topsoil are never carved.
pub struct CaveGen {}

/// Row at which caves start opening up. Above this the threshold is at its
/// strictest.
fn cave_start() -> i32 { (WORLD_HEIGHT as f64 * 0.3) as i32 }

impl CaveGen {
  pub fn new() -> Self { CaveGen {} }

  fn density(&self, gen: &WorldGen, wx: i32, y: i32) -> f64 {
    let n = gen.noise();
    let (x, y) = (wx as f64, y as f64);
    n.smooth2d(x, y, 12.0) * 0.5
      + n.smooth2d(x + 5000.0, y + 5000.0, 24.0) * 0.3
      + n.smooth2d(x - 5000.0, y + 9000.0, 6.0) * 0.2
  }

  fn threshold(&self, y: i32) -> f64 {
    let t = 0.72 - 0.004 * (y - cave_start()) as f64;
    t.max(0.52)
  }

  pub fn carve(&self, gen: &WorldGen, index: i32, c: &mut Chunk) {
    let h = WORLD_HEIGHT as usize;
    let mut marked = vec![false; CHUNK_WIDTH as usize * h];
    for lx in 0..CHUNK_WIDTH {
      let wx = index * CHUNK_WIDTH + lx;
      let surface = gen.surface_height(wx);
      for y in (surface + 5)..(WORLD_HEIGHT - 1) {
        let rel = Pos::new(lx, y);
        let kind = c.get(Layer::Front, rel).unwrap();
        if !kind.is_solid() || kind == Kind::Bedrock {
          continue;
        }
        if self.density(gen, wx, y) > self.threshold(y) {
          marked[lx as usize * h + y as usize] = true;
        }
      }
    }
    for lx in 0..CHUNK_WIDTH {
      for y in 0..WORLD_HEIGHT {
        if marked[lx as usize * h + y as usize] && keep_carved(&marked, lx, y) {
          c.set(Layer::Front, Pos::new(lx, y), Kind::Air).unwrap();
        }
      }
    }
  }
}

/// The smoothing rule: a marked cell is only carved if at least two of its
/// four orthogonal neighbors are also marked. Neighbors outside the chunk
/// count as unmarked, so caves pinch off at chunk borders instead of reading
/// neighbor chunks.
fn keep_carved(marked: &[bool], lx: i32, y: i32) -> bool {
  let h = WORLD_HEIGHT as usize;
  let mut n = 0;
  for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
    let (nx, ny) = (lx + dx, y + dy);
    if nx < 0 || nx >= CHUNK_WIDTH || ny < 0 || ny >= WORLD_HEIGHT {
      continue;
    }
    if marked[nx as usize * h + ny as usize] {
      n += 1;
    }
  }
  n >= 2
}
