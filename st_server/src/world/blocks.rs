use super::World;
use crate::block::{Kind, Layer};
use st_common::math::{Pos, WORLD_HEIGHT};

impl World {
  /// Reads a block at world coordinates. Total: anything above or below the
  /// world reads as air, so physics and rendering never special-case the
  /// vertical bounds.
  pub fn get_block(&self, x: i32, y: i32, layer: Layer) -> Kind {
    if y < 0 || y >= WORLD_HEIGHT {
      return Kind::Air;
    }
    let pos = Pos::new(x, y);
    let rel = pos.with_x(pos.chunk_rel_x());
    // The relative position is in range by construction, so the chunk access
    // cannot fail.
    self.chunk(pos.chunk_x(), |c| c.get(layer, rel)).unwrap_or(Kind::Air)
  }

  /// Writes a block at world coordinates. Out-of-bounds writes are dropped.
  pub fn set_block(&self, x: i32, y: i32, layer: Layer, kind: Kind) {
    if y < 0 || y >= WORLD_HEIGHT {
      return;
    }
    let pos = Pos::new(x, y);
    let rel = pos.with_x(pos.chunk_rel_x());
    let _ = self.chunk(pos.chunk_x(), |c| c.set(layer, rel, kind));
  }
}
