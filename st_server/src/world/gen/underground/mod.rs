//! Everything below the topsoil: ore substitution and cave carving.
//!
//! Ores run before caves, so a cave carved through an ore cell removes the
//! ore. Both stages only ever touch the front layer.

mod caves;
mod ores;

use super::WorldGen;
use crate::world::chunk::Chunk;
use caves::CaveGen;
use ores::OreGen;

pub struct Underground {
  ores:  OreGen,
  caves: CaveGen,
}

impl Underground {
  pub fn new() -> Self { Underground { ores: OreGen::new(), caves: CaveGen::new() } }

  pub fn process(&self, gen: &WorldGen, index: i32, c: &mut Chunk) {
    self.ores.place(gen, index, c);
    self.caves.carve(gen, index, c);
  }
}
