//! Headless runner for the Sun-Earth-Moon simulation
//!
//! Steps the simulation exactly as a render loop would, one step per frame
//! with one hour of simulated time per step at speed 1.0, and logs telemetry
//! once per simulated day.
//!
//! Usage: earth_orbit [SPEED_MULTIPLIER] [DAYS]

use earth_orbit::{DisplayAdapter, Simulation};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let speed = parse_speed(args.next());
    let days: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(365);

    log::info!("Running {} simulated days at {:.1}x speed", days, speed);

    let mut sim = Simulation::new();
    let display = DisplayAdapter::new();

    if speed == 0.0 {
        log::warn!("Speed multiplier is 0; simulation time will not advance");
        return;
    }

    let frames = (days as f64 * 24.0 / speed).ceil() as u64;
    let mut last_day = 0;

    for _ in 0..frames {
        sim.step(speed);

        let day = sim.day_of_year();
        if day != last_day {
            last_day = day;
            let earth_scene = display.earth_position(sim.earth.position);
            let moon_scene = display.moon_position(sim.earth.position, sim.moon.position);
            log::info!(
                "day {:>3} | Earth-Sun {:>6.1}M km | Earth {:.2} km/s | scene: Earth ({:>6.1}, {:>6.1}) Moon ({:>6.1}, {:>6.1})",
                day,
                sim.earth_sun_distance_mkm(),
                sim.earth_speed_kms(),
                earth_scene.x,
                earth_scene.y,
                moon_scene.x,
                moon_scene.y,
            );
        }
    }

    log::info!(
        "Done: {:.1} simulated days elapsed",
        sim.clock.elapsed() / earth_orbit::constants::SECONDS_PER_DAY
    );
}

/// Parse the optional speed-multiplier argument, defaulting to 1.0 and
/// clamping to the clock's non-negative contract.
fn parse_speed(arg: Option<String>) -> f64 {
    arg.and_then(|a| a.parse::<f64>().ok())
        .unwrap_or(1.0)
        .max(0.0)
}
