use super::WorldGen;
use crate::{
  block::{Kind, Layer},
  world::chunk::Chunk,
};
use st_common::math::{Pos, CHUNK_WIDTH, WORLD_HEIGHT};

/// Replaces stone cells with ores, per cell, from a single hash roll.
///
/// Each candidate cell rolls once on channel 1, and the ore table is checked
/// rarest-first. The rarity windows overlap on purpose: at depths where both
/// diamond and gold are eligible, a roll inside both windows lands the rarer
/// ore because its arm is checked first. Reordering the checks would change
/// the distribution, not just the code.
pub struct OreGen {}

/// Hash channel for ore rolls.
const CHANNEL: i32 = 1;

impl OreGen {
  pub fn new() -> Self { OreGen {} }

  pub fn place(&self, gen: &WorldGen, index: i32, c: &mut Chunk) {
    for lx in 0..CHUNK_WIDTH {
      let wx = index * CHUNK_WIDTH + lx;
      let surface = gen.surface_height(wx);
      for y in (surface + 5)..(WORLD_HEIGHT - 1) {
        let rel = Pos::new(lx, y);
        if c.get(Layer::Front, rel).unwrap() != Kind::Stone {
          continue;
        }
        let depth = (WORLD_HEIGHT - 1) - y;
        let r = gen.noise().hash3(wx, y, CHANNEL);
        let ore = if depth > 40 && (0.085..0.095).contains(&r) {
          Some(Kind::Diamond)
        } else if depth > 30 && (0.07..0.085).contains(&r) {
          Some(Kind::Gold)
        } else if depth > 20 && depth < 50 && (0.04..0.07).contains(&r) {
          Some(Kind::Iron)
        } else if depth > 12 && depth < 40 && r < 0.04 {
          Some(Kind::Coal)
        } else {
          None
        };
        if let Some(ore) = ore {
          c.set(Layer::Front, rel, ore).unwrap();
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ores_respect_depth_bands() {
    let gen = WorldGen::new("ore-test");
    for idx in -4..4 {
      let c = gen.generate(idx);
      for lx in 0..CHUNK_WIDTH {
        for y in 0..WORLD_HEIGHT {
          let depth = (WORLD_HEIGHT - 1) - y;
          match c.get(Layer::Front, Pos::new(lx, y)).unwrap() {
            Kind::Diamond => assert!(depth > 40, "diamond at depth {depth}"),
            Kind::Gold => assert!(depth > 30, "gold at depth {depth}"),
            Kind::Iron => assert!(depth > 20 && depth < 50, "iron at depth {depth}"),
            Kind::Coal => assert!(depth > 12 && depth < 40, "coal at depth {depth}"),
            _ => {}
          }
        }
      }
    }
  }

  #[test]
  fn coal_is_most_common() {
    let gen = WorldGen::new("ore-test");
    let mut counts = [0_u32; 4];
    for idx in -8..8 {
      let c = gen.generate(idx);
      for lx in 0..CHUNK_WIDTH {
        for y in 0..WORLD_HEIGHT {
          match c.get(Layer::Front, Pos::new(lx, y)).unwrap() {
            Kind::Coal => counts[0] += 1,
            Kind::Iron => counts[1] += 1,
            Kind::Gold => counts[2] += 1,
            Kind::Diamond => counts[3] += 1,
            _ => {}
          }
        }
      }
    }
    assert!(counts[0] > 0, "no coal generated in 16 chunks");
    assert!(counts[0] > counts[3], "coal ({}) not more common than diamond ({})", counts[0], counts[3]);
  }
}
