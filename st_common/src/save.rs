//! The logical persisted world format.
//!
//! These are the shapes that get written to disk, and the shape sent in the
//! join snapshot over the network. Block grids are stored as raw ids, and get
//! validated when they are applied to a world. A chunk persisted by an older
//! build may be missing its back layer; that is accepted here and backfilled
//! lazily on first access.

use crate::util::GameMode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A persisted chunk. `blocks` is indexed `[column][row]`, with
/// `CHUNK_WIDTH` columns of `WORLD_HEIGHT` rows each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkSave {
  pub index:  i32,
  pub blocks: Vec<Vec<u8>>,
  /// Not present in worlds saved before the back layer existed.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub back_blocks: Option<Vec<Vec<u8>>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerSave {
  pub x:      f64,
  pub y:      f64,
  pub health: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSave {
  pub seed:   String,
  pub mode:   GameMode,
  pub player: PlayerSave,
  pub chunks: HashMap<i32, ChunkSave>,
}
