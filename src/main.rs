//! Tilt Maze entry point
//!
//! Natively this runs a headless demo: a seeded autopilot tilts the device,
//! a simulated 60 Hz frame clock drives the session, and progress is logged.
//! The browser build uses the `web` bindings from the library instead.
//!
//! Usage: `tilt-maze [config.json] [seed]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;
    use tilt_maze::demo::Autopilot;
    use tilt_maze::{FixedStepDriver, GameSession, InputMapper, MazeConfig};

    /// Give up after this much simulated time
    const MAX_FRAMES: u32 = 60 * 120;

    env_logger::init();
    log::info!("Tilt Maze (native) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => MazeConfig::load_or_default(path),
        None => MazeConfig::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(12345);

    let mut session = match GameSession::from_config(&config) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Invalid maze config: {e}");
            std::process::exit(2);
        }
    };
    log::info!(
        "Arena {:?} with {} obstacles, seed {}",
        session.arena().bounds(),
        session.arena().obstacles().len(),
        seed
    );

    let mapper = InputMapper::new(config.dead_zone, config.sensitivity);
    let mut pilot = if config == MazeConfig::default() {
        Autopilot::stock(seed)
    } else {
        log::warn!("Custom layout: autopilot heads straight for the goal");
        Autopilot::new([config.goal.center()], mapper, seed)
    };
    let mut driver = FixedStepDriver::default();
    // Frame times jitter around 16 ms like a real display
    let mut clock = Pcg32::seed_from_u64(seed ^ 0x5eed);

    for frame in 0..MAX_FRAMES {
        session.on_input_sample(pilot.sample(&session.snapshot()));
        let dt = 1.0 / 60.0 + clock.random_range(-0.002..=0.002);
        driver.advance(&mut session, dt);

        if frame % 60 == 0 {
            let snap = session.snapshot();
            log::info!(
                "t={:>3}s ball=({:.1}, {:.1}) waypoint={}",
                frame / 60,
                snap.ball_x,
                snap.ball_y,
                pilot.waypoint_index()
            );
        }

        if session.has_won() {
            log::info!(
                "You win! {} ticks, {} frames",
                session.simulator().ticks(),
                frame + 1
            );
            return;
        }
    }

    log::warn!("Goal not reached after {} frames", MAX_FRAMES);
    std::process::exit(1);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::wasm_start, this is just to satisfy the compiler
}
