mod fpos;
mod pos;

pub use fpos::FPos;
pub use pos::{Pos, PosError};

/// The width of a chunk, in columns.
pub const CHUNK_WIDTH: i32 = 32;
/// The height of the world, in rows. The world is bounded vertically and
/// unbounded horizontally. `y` increases downward; row `WORLD_HEIGHT - 1` is
/// the bedrock floor.
pub const WORLD_HEIGHT: i32 = 96;
