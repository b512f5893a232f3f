mod ty;

pub use ty::{Kind, Layer};
