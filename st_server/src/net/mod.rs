//! Applies wire messages to the world.
//!
//! Parsing and the message shapes live in `st_common::net`; this module is
//! the host-side dispatch. Remote peers only ever influence the block grid
//! and the remote-player display map, never the locally simulated actor.

use crate::{
  block::{Kind, Layer},
  world::World,
};
use st_common::{math::FPos, net::Message};

impl World {
  /// Applies one peer message. Messages with out-of-range ids are dropped,
  /// with a log line; a hostile peer doesn't get to corrupt the grid.
  pub fn handle_message(&self, msg: Message) {
    match msg {
      Message::BlockChange { x, y, id, layer } => {
        let (kind, layer) = match (Kind::from_id(id), Layer::from_id(layer)) {
          (Some(k), Some(l)) => (k, l),
          _ => {
            warn!("dropping block change with invalid id {id} or layer {layer}");
            return;
          }
        };
        self.set_block(x, y, layer, kind);
      }
      Message::PlayerState { id, state } => {
        if let Some(id) = id {
          self.remote_players().lock().insert(id, FPos::new(state.x, state.y));
        }
      }
      Message::PlayerLeave { id } => {
        if self.remote_players().lock().remove(&id).is_some() {
          info!("peer {id} left");
        }
      }
      // The snapshot is the host-to-client welcome; a host receiving one has
      // nothing to do with it.
      Message::WorldSnapshot { .. } => {}
    }
  }
}
