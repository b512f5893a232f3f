//! The seeded hash field every other generation field is built on.
//!
//! This is integer multiply/xor/shift mixing, not a noise library: the whole
//! point is that the same seed produces bit-identical terrain on every
//! platform, which rules out anything that mixes in floating point.

/// Remap for a seed string that hashes to exactly zero. A zero seed would
/// make the mixing function collapse (every lattice point would hash the
/// same), so it is never allowed through.
const ZERO_SEED: i32 = 1_234_567;

const DEFAULT_SEED: &str = "default";

/// Derives the integer seed from a seed string with a rolling polynomial
/// hash in wrapping 32-bit arithmetic. An empty string seeds as `"default"`.
pub fn seed_from_str(s: &str) -> i32 {
  let s = if s.is_empty() { DEFAULT_SEED } else { s };
  let mut h: i32 = 0;
  for c in s.encode_utf16() {
    h = h.wrapping_mul(31).wrapping_add(c as i32);
  }
  if h == 0 {
    ZERO_SEED
  } else {
    h
  }
}

/// A deterministic scalar noise field. All outputs are pure functions of the
/// seed and the inputs; there is no state and no failure path.
#[derive(Debug, Clone, Copy)]
pub struct Noise {
  seed: i32,
}

impl Noise {
  pub fn new(seed: i32) -> Self { Noise { seed } }

  /// Hashes a single lattice coordinate into `[0, 1)`.
  pub fn hash(&self, i: i32) -> f64 {
    let n = i.wrapping_mul(374_761_393).wrapping_add(self.seed.wrapping_mul(668_265_263));
    let mut n = n as u32;
    n ^= n >> 13;
    n = n.wrapping_mul(1_274_126_177);
    n ^= n >> 16;
    n as f64 / 4_294_967_296.0
  }

  /// Hashes a 2D lattice coordinate into `[0, 1)`.
  pub fn hash2(&self, x: i32, y: i32) -> f64 {
    self.hash(x.wrapping_mul(734_287).wrapping_add(y.wrapping_mul(912_285)))
  }

  /// Hashes a 2D lattice coordinate on an extra channel, so independent
  /// per-cell rolls (ores, tree spots) don't correlate.
  pub fn hash3(&self, x: i32, y: i32, channel: i32) -> f64 {
    self.hash(
      x.wrapping_mul(734_287)
        .wrapping_add(y.wrapping_mul(912_285))
        .wrapping_add(channel.wrapping_mul(19_937)),
    )
  }

  /// Smooth 1D noise: a lattice lookup at `floor(x / scale)` and the next
  /// lattice point, blended with the `3t^2 - 2t^3` smoothstep. Continuous in
  /// `x`, output in `[0, 1]`.
  pub fn smooth1d(&self, x: f64, scale: f64) -> f64 {
    let sx = x / scale;
    let xi = sx.floor();
    let t = sx - xi;
    let a = self.hash(xi as i32);
    let b = self.hash(xi as i32 + 1);
    let tt = t * t * (3.0 - 2.0 * t);
    a * (1.0 - tt) + b * tt
  }

  /// Bilinear extension of [`smooth1d`](Self::smooth1d) over a 2D lattice.
  pub fn smooth2d(&self, x: f64, y: f64, scale: f64) -> f64 {
    let sx = x / scale;
    let sy = y / scale;
    let xi = sx.floor();
    let yi = sy.floor();
    let tx = sx - xi;
    let ty = sy - yi;
    let ttx = tx * tx * (3.0 - 2.0 * tx);
    let tty = ty * ty * (3.0 - 2.0 * ty);
    let xi = xi as i32;
    let yi = yi as i32;
    let a = self.hash2(xi, yi);
    let b = self.hash2(xi + 1, yi);
    let c = self.hash2(xi, yi + 1);
    let d = self.hash2(xi + 1, yi + 1);
    let top = a * (1.0 - ttx) + b * ttx;
    let bottom = c * (1.0 - ttx) + d * ttx;
    top * (1.0 - tty) + bottom * tty
  }
}
