#[macro_use]
extern crate log;

use clap::Parser;
use st_server::{
  config::Config,
  player::InputIntent,
  world::World,
};
use std::{
  path::PathBuf,
  time::{Duration, Instant},
};

/// Steps longer than this are truncated, so a long stall doesn't launch the
/// player through the floor on the next tick.
const MAX_DT: f64 = 0.05;

#[derive(Debug, Parser)]
#[command(version)]
struct Args {
  /// Path of the config file to read. Written with defaults if missing.
  #[arg(long, default_value = "server.toml")]
  config: PathBuf,
  /// Overrides the world seed from the config.
  #[arg(long)]
  seed:   Option<String>,
  /// Stops after this many ticks instead of running forever.
  #[arg(long)]
  ticks:  Option<u64>,
}

fn main() {
  let args = Args::parse();
  let mut config = Config::load(&args.config);
  if let Some(seed) = args.seed {
    config.seed = seed;
  }
  st_common::init_with_level("st_server", config.log_level());

  let world = load_world(&config);
  info!("seed `{}` (mode: {:?})", world.seed(), world.mode());
  world.pregenerate(config.pregen_radius);

  run_loop(&world, &config, args.ticks);

  if !config.save_file.is_empty() {
    if let Err(e) = world.save_to_file(config.save_file.as_ref()) {
      error!("could not save world: {e}");
    }
  }
}

fn load_world(config: &Config) -> World {
  if !config.save_file.is_empty() {
    let path: &std::path::Path = config.save_file.as_ref();
    if path.exists() {
      match World::load_from_file(path, config.physics()) {
        Ok(w) => return w,
        Err(e) => error!("could not load world from {}: {e}; generating fresh", path.display()),
      }
    }
  }
  World::from_config(config)
}

fn run_loop(world: &World, config: &Config, tick_limit: Option<u64>) {
  let tick_time = Duration::from_millis(config.tick_ms.max(1));
  let ticks_per_second = (1000 / config.tick_ms.max(1)).max(1);
  let mut last = Instant::now();
  let mut ticks: u64 = 0;
  loop {
    let start = Instant::now();
    let dt = (start - last).as_secs_f64().min(MAX_DT);
    last = start;

    // Headless: no input devices, so the actor just idles under physics.
    world.tick(InputIntent::default(), dt);

    ticks += 1;
    if ticks % ticks_per_second == 0 {
      let p = world.player().lock();
      info!(
        "tick {ticks}: player at ({:.2}, {:.2}), health {:.1}, {} chunks resident",
        p.pos.x,
        p.pos.y,
        p.health,
        world.store().len()
      );
    }
    if let Some(limit) = tick_limit {
      if ticks >= limit {
        info!("tick limit of {limit} reached, shutting down");
        return;
      }
    }

    let elapsed = start.elapsed();
    if elapsed > tick_time {
      warn!("tick took {elapsed:?}, more than the tick budget of {tick_time:?}");
    } else {
      spin_sleep::sleep(tick_time - elapsed);
    }
  }
}
