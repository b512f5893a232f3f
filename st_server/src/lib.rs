#[macro_use]
extern crate log;

pub mod block;
pub mod config;
pub mod net;
pub mod player;
pub mod world;
