use super::Pos;
use serde::{Deserialize, Serialize};
use std::{
  fmt,
  ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign},
};

/// A continuous tile position, in tile units. Like [`Pos`], `y` increases
/// downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FPos {
  pub x: f64,
  pub y: f64,
}

impl fmt::Display for FPos {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "FPos({} {})", self.x, self.y) }
}

impl Default for FPos {
  fn default() -> FPos { FPos::new(0.0, 0.0) }
}

impl From<Pos> for FPos {
  fn from(p: Pos) -> FPos { FPos { x: p.x.into(), y: p.y.into() } }
}

impl FPos {
  /// Creates a new continuous position.
  #[inline(always)]
  pub fn new(x: f64, y: f64) -> Self { FPos { x, y } }
  /// Returns the X value of the position.
  #[inline(always)]
  pub fn x(&self) -> f64 { self.x }
  /// Returns the Y value of the position.
  #[inline(always)]
  pub fn y(&self) -> f64 { self.y }
  /// Returns self, with x set to the given value.
  #[inline(always)]
  #[must_use = "with_x returns a modified version of self"]
  pub fn with_x(mut self, x: f64) -> Self {
    self.x = x;
    self
  }
  /// Returns self, with y set to the given value.
  #[inline(always)]
  #[must_use = "with_y returns a modified version of self"]
  pub fn with_y(mut self, y: f64) -> Self {
    self.y = y;
    self
  }
  /// Returns the tile that this position is in.
  #[inline(always)]
  pub fn block(&self) -> Pos { Pos::new(self.x.floor() as i32, self.y.floor() as i32) }
  /// Returns the distance to the other position.
  pub fn dist(&self, other: FPos) -> f64 {
    ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
  }
  /// Returns the squared distance to the other position.
  pub fn dist_squared(&self, other: FPos) -> f64 {
    (self.x - other.x).powi(2) + (self.y - other.y).powi(2)
  }
  /// Returns the length of this vector.
  pub fn size(&self) -> f64 { (self.x.powi(2) + self.y.powi(2)).sqrt() }
}

impl Add for FPos {
  type Output = Self;
  fn add(self, other: Self) -> Self { Self { x: self.x + other.x, y: self.y + other.y } }
}
impl AddAssign for FPos {
  fn add_assign(&mut self, other: Self) {
    self.x += other.x;
    self.y += other.y;
  }
}
impl Sub for FPos {
  type Output = Self;
  fn sub(self, other: Self) -> Self { Self { x: self.x - other.x, y: self.y - other.y } }
}
impl SubAssign for FPos {
  fn sub_assign(&mut self, other: Self) {
    self.x -= other.x;
    self.y -= other.y;
  }
}
impl Mul<f64> for FPos {
  type Output = Self;
  fn mul(self, other: f64) -> Self { Self { x: self.x * other, y: self.y * other } }
}
impl MulAssign<f64> for FPos {
  fn mul_assign(&mut self, other: f64) {
    self.x *= other;
    self.y *= other;
  }
}
impl Div<f64> for FPos {
  type Output = Self;
  fn div(self, other: f64) -> Self { Self { x: self.x / other, y: self.y / other } }
}
impl DivAssign<f64> for FPos {
  fn div_assign(&mut self, other: f64) {
    self.x /= other;
    self.y /= other;
  }
}
