/// A block kind. The numeric ids are the save/wire format, so they must
/// never be reordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Kind {
  #[default]
  Air      = 0,
  Grass    = 1,
  Dirt     = 2,
  Stone    = 3,
  /// The indestructible floor of the world.
  Bedrock  = 4,
  Coal     = 5,
  Iron     = 6,
  Gold     = 7,
  Diamond  = 8,
  Sand     = 9,
  Sandstone = 10,
  Snow     = 11,
  Log      = 12,
  Leaves   = 13,
}

/// The two block grids of a chunk. The front layer is the terrain the player
/// collides with and edits; the back layer is a non-collidable backdrop,
/// visible where the front layer is air.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
  Front,
  Back,
}

impl Layer {
  /// Parses a layer off the wire. Anything other than 0 or 1 is invalid.
  pub fn from_id(id: u8) -> Option<Layer> {
    match id {
      0 => Some(Layer::Front),
      1 => Some(Layer::Back),
      _ => None,
    }
  }
}

impl Kind {
  /// Converts a raw id into a kind. This is the validation point for ids read
  /// from saves or off the wire; anything unknown is rejected here.
  pub fn from_id(id: u8) -> Option<Kind> {
    Some(match id {
      0 => Kind::Air,
      1 => Kind::Grass,
      2 => Kind::Dirt,
      3 => Kind::Stone,
      4 => Kind::Bedrock,
      5 => Kind::Coal,
      6 => Kind::Iron,
      7 => Kind::Gold,
      8 => Kind::Diamond,
      9 => Kind::Sand,
      10 => Kind::Sandstone,
      11 => Kind::Snow,
      12 => Kind::Log,
      13 => Kind::Leaves,
      _ => return None,
    })
  }

  /// Returns the save/wire id of this kind.
  pub fn id(&self) -> u8 { *self as u8 }

  /// Returns true if the player collides with this block. Everything except
  /// air is solid; the back layer is never consulted for collision.
  pub fn is_solid(&self) -> bool { *self != Kind::Air }
}
