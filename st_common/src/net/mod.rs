//! Network message shapes.
//!
//! Everything that crosses the wire is one of these variants, validated here
//! at the boundary. A message that fails to parse is dropped, never an error:
//! a remote peer must not be able to crash the simulation with a bad payload.

use crate::save::WorldSave;
use serde::{Deserialize, Serialize};

/// A message received from (or sent to) a remote peer. The wire format is
/// JSON with a `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Message {
  /// A block edit. Applied to the local world through the normal set-block
  /// path, so out-of-bounds or invalid ids are handled there.
  #[serde(rename_all = "camelCase")]
  BlockChange { x: i32, y: i32, id: u8, layer: u8 },
  /// A remote player moved. This only ever updates the remote display map,
  /// never the local player.
  #[serde(rename_all = "camelCase")]
  PlayerState {
    /// Not set when a client reports its own state; the host assigns ids.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id:    Option<String>,
    state: RemoteState,
  },
  #[serde(rename_all = "camelCase")]
  PlayerLeave { id: String },
  /// The join/welcome message: the full world, sent to a client when it
  /// connects.
  #[serde(rename_all = "camelCase")]
  WorldSnapshot { player_id: String, world: WorldSave },
}

/// The position of a remote player, in tile units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RemoteState {
  pub x: f64,
  pub y: f64,
}

impl Message {
  /// Parses a message off the wire. Returns `None` for anything malformed;
  /// callers drop those silently.
  pub fn parse(data: &str) -> Option<Message> { serde_json::from_str(data).ok() }

  /// Serializes this message for the wire.
  pub fn to_json(&self) -> String {
    // Every variant is a struct of plain fields, so this cannot fail.
    serde_json::to_string(self).unwrap()
  }
}
