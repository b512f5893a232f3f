use super::CHUNK_WIDTH;
use std::{
  error::Error,
  fmt,
  ops::{Add, AddAssign, Sub, SubAssign},
};

#[derive(Debug, Clone, PartialEq)]
pub struct PosError {
  pub pos: Pos,
  pub msg: String,
}

impl fmt::Display for PosError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "invalid position: {} {}", self.pos, self.msg)
  }
}

impl Error for PosError {}

/// An integer tile position. `y` increases downward, so `y = 0` is the top of
/// the world, and `y = WORLD_HEIGHT - 1` is the bedrock floor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
  pub x: i32,
  pub y: i32,
}

impl fmt::Display for Pos {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "Pos({} {})", self.x, self.y) }
}

impl Pos {
  /// Creates a new tile position.
  #[inline(always)]
  pub fn new(x: i32, y: i32) -> Self { Pos { x, y } }
  /// Returns the X value of the position.
  #[inline(always)]
  pub fn x(&self) -> i32 { self.x }
  /// Returns the Y value of the position.
  #[inline(always)]
  pub fn y(&self) -> i32 { self.y }
  /// Returns the index of the chunk this position is in. Works for negative
  /// coordinates: `-1` is in chunk `-1`, not chunk `0`.
  #[inline(always)]
  pub fn chunk_x(&self) -> i32 { self.x.div_euclid(CHUNK_WIDTH) }
  /// Returns the column of this position within its chunk. This is always in
  /// `0..CHUNK_WIDTH`, even for negative `x`.
  #[inline(always)]
  pub fn chunk_rel_x(&self) -> i32 { self.x.rem_euclid(CHUNK_WIDTH) }
  /// Returns self, with x set to the given value.
  #[inline(always)]
  #[must_use = "with_x returns a modified version of self"]
  pub fn with_x(mut self, x: i32) -> Self {
    self.x = x;
    self
  }
  /// Returns self, with y set to the given value.
  #[inline(always)]
  #[must_use = "with_y returns a modified version of self"]
  pub fn with_y(mut self, y: i32) -> Self {
    self.y = y;
    self
  }
  /// Returns self, with x set to self.x plus the given value.
  #[inline(always)]
  #[must_use = "add_x returns a modified version of self"]
  pub fn add_x(mut self, x: i32) -> Self {
    self.x += x;
    self
  }
  /// Returns self, with y set to self.y plus the given value.
  #[inline(always)]
  #[must_use = "add_y returns a modified version of self"]
  pub fn add_y(mut self, y: i32) -> Self {
    self.y += y;
    self
  }
  /// Creates a new error from this position. This should be used to signify
  /// that an invalid position was passed somewhere.
  pub fn err(&self, msg: String) -> PosError { PosError { pos: *self, msg } }
}

impl Add for Pos {
  type Output = Self;
  fn add(self, other: Self) -> Self { Self { x: self.x + other.x, y: self.y + other.y } }
}
impl AddAssign for Pos {
  fn add_assign(&mut self, other: Self) {
    self.x += other.x;
    self.y += other.y;
  }
}
impl Sub for Pos {
  type Output = Self;
  fn sub(self, other: Self) -> Self { Self { x: self.x - other.x, y: self.y - other.y } }
}
impl SubAssign for Pos {
  fn sub_assign(&mut self, other: Self) {
    self.x -= other.x;
    self.y -= other.y;
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn chunk_translation() {
    assert_eq!(Pos::new(0, 0).chunk_x(), 0);
    assert_eq!(Pos::new(31, 0).chunk_x(), 0);
    assert_eq!(Pos::new(32, 0).chunk_x(), 1);
    assert_eq!(Pos::new(-1, 0).chunk_x(), -1);
    assert_eq!(Pos::new(-32, 0).chunk_x(), -1);
    assert_eq!(Pos::new(-33, 0).chunk_x(), -2);

    assert_eq!(Pos::new(5, 0).chunk_rel_x(), 5);
    assert_eq!(Pos::new(-1, 0).chunk_rel_x(), 31);
    assert_eq!(Pos::new(-32, 0).chunk_rel_x(), 0);
  }
}
