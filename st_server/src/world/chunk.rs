use crate::block::{Kind, Layer};
use st_common::{
  math::{Pos, PosError, CHUNK_WIDTH, WORLD_HEIGHT},
  save::ChunkSave,
};

const W: usize = CHUNK_WIDTH as usize;
const H: usize = WORLD_HEIGHT as usize;

/// One chunk of the world: `CHUNK_WIDTH` columns spanning the full world
/// height, with a front (collidable) grid and a back (backdrop) grid.
///
/// The back grid is `None` for chunks loaded from a save that predates the
/// back layer. It gets backfilled with air on the first back-layer write, so
/// old worlds load without repair work up front.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
  front: Vec<Kind>,
  back:  Option<Vec<Kind>>,
}

impl Default for Chunk {
  fn default() -> Self { Chunk::new() }
}

impl Chunk {
  /// Creates an all-air chunk, with both layers present.
  pub fn new() -> Self {
    Chunk { front: vec![Kind::Air; W * H], back: Some(vec![Kind::Air; W * H]) }
  }

  fn index(rel: Pos) -> Result<usize, PosError> {
    if rel.x < 0 || rel.x >= CHUNK_WIDTH || rel.y < 0 || rel.y >= WORLD_HEIGHT {
      return Err(rel.err("outside of chunk".into()));
    }
    Ok(rel.x as usize * H + rel.y as usize)
  }

  /// Returns the block in the given layer. `rel` must be within the chunk.
  /// Reading the back layer of a chunk that was persisted without one reads
  /// air, without materializing the grid.
  pub fn get(&self, layer: Layer, rel: Pos) -> Result<Kind, PosError> {
    let i = Self::index(rel)?;
    Ok(match layer {
      Layer::Front => self.front[i],
      Layer::Back => match &self.back {
        Some(back) => back[i],
        None => Kind::Air,
      },
    })
  }

  /// Sets the block in the given layer. `rel` must be within the chunk.
  pub fn set(&mut self, layer: Layer, rel: Pos, kind: Kind) -> Result<(), PosError> {
    let i = Self::index(rel)?;
    match layer {
      Layer::Front => self.front[i] = kind,
      Layer::Back => self.back.get_or_insert_with(|| vec![Kind::Air; W * H])[i] = kind,
    }
    Ok(())
  }

  /// Converts this chunk into its persisted shape.
  pub fn to_save(&self, index: i32) -> ChunkSave {
    let grid = |g: &Vec<Kind>| {
      (0..W).map(|lx| (0..H).map(|y| g[lx * H + y].id()).collect()).collect::<Vec<Vec<u8>>>()
    };
    ChunkSave { index, blocks: grid(&self.front), back_blocks: self.back.as_ref().map(grid) }
  }

  /// Builds a chunk from its persisted shape. This never rejects: unknown
  /// block ids and missing cells read as air, and a missing back layer stays
  /// missing until the first back-layer write.
  pub fn from_save(save: &ChunkSave) -> Chunk {
    let grid = |g: &Vec<Vec<u8>>| {
      let mut out = vec![Kind::Air; W * H];
      for (lx, col) in g.iter().enumerate().take(W) {
        for (y, &id) in col.iter().enumerate().take(H) {
          out[lx * H + y] = Kind::from_id(id).unwrap_or(Kind::Air);
        }
      }
      out
    };
    Chunk { front: grid(&save.blocks), back: save.back_blocks.as_ref().map(grid) }
  }
}
