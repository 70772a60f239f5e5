//! Atmospheric Escape Simulation
//!
//! Headless animation driver: steps the simulation once per frame for the
//! profile's frame count and logs what a renderer would draw.
//!
//! Usage: `atmosphere-escape [planar|spherical] [seed]`

use escape_physics::{BodyGeometry, Regime, SpaceVector};
use escape_simulation::{ConfigError, FrameSnapshot, Profile, Simulation};
use glam::{Vec2, Vec3};
use std::process::ExitCode;

/// Frames between info-level progress lines
const REPORT_EVERY: u64 = 50;

fn parse_profile(arg: Option<&str>) -> Option<Profile> {
    match arg {
        None | Some("planar") | Some("2d") => Some(Profile::Planar),
        Some("spherical") | Some("3d") => Some(Profile::Spherical),
        Some(_) => None,
    }
}

/// Bound particles per layer: atmosphere, exosphere, beyond
fn census<V: SpaceVector>(geometry: &BodyGeometry, positions: &[V]) -> [usize; 3] {
    let mut counts = [0; 3];
    for position in positions {
        match geometry.regime(position.length()) {
            Regime::Interior | Regime::Atmosphere => counts[0] += 1,
            Regime::Exosphere => counts[1] += 1,
            Regime::Beyond => counts[2] += 1,
        }
    }
    counts
}

fn report<V: SpaceVector>(label: &str, geometry: &BodyGeometry, snapshot: &FrameSnapshot<V>) {
    let [atmosphere, exosphere, beyond] = census(geometry, &snapshot.bound_positions);
    log::info!(
        "[{}] frame {:>3}: remaining {:>3}, thermal {:>3}, solar wind {:>3}, dayside {:>3}",
        label,
        snapshot.tick,
        snapshot.remaining_count,
        snapshot.escaped_thermal_count,
        snapshot.escaped_solar_count,
        snapshot.dayside_positions.len()
    );
    log::debug!(
        "  atmosphere {}, exosphere {}, beyond {}",
        atmosphere,
        exosphere,
        beyond
    );
}

fn run<V: SpaceVector>(profile: Profile, seed: Option<u64>) -> Result<(), ConfigError> {
    let config = profile.population();
    let physics = profile.physics(&config.geometry);
    let style = profile.style();

    let mut sim: Simulation<V> = match seed {
        Some(seed) => Simulation::with_seed(&config, physics, style, seed)?,
        None => Simulation::new(&config, physics, style)?,
    };

    let label = format!("{:?}", profile);
    log::info!(
        "Running {} frames of the {} model with {} particles",
        profile.frames(),
        label,
        sim.particle_count()
    );
    let geometry = config.geometry;
    log::info!(
        "  body radius {:.2}, exosphere [{:.2}, {:.2}]",
        geometry.body_radius,
        geometry.exosphere_inner(),
        geometry.exosphere_outer()
    );
    log::debug!("  reference shells {:?}", geometry.reference_shells());

    let mut last = None;
    for _ in 0..profile.frames() {
        let snapshot = sim.step();
        if snapshot.tick % REPORT_EVERY == 0 {
            report(&label, &geometry, &snapshot);
        }
        let depleted = snapshot.is_depleted();
        last = Some(snapshot);
        if depleted {
            log::info!("Atmosphere fully depleted");
            break;
        }
    }

    if let Some(snapshot) = last {
        report(&label, &geometry, &snapshot);
        log::info!(
            "Lost {:.1}% of the atmosphere ({} thermal, {} solar wind)",
            100.0 * snapshot.escaped_count() as f32 / snapshot.total_count.max(1) as f32,
            snapshot.escaped_thermal_count,
            snapshot.escaped_solar_count
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    // Initialize logger (RUST_LOG=debug for per-frame output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(profile) = parse_profile(args.first().map(String::as_str)) else {
        log::error!("unknown profile {:?}, expected planar or spherical", args[0]);
        return ExitCode::FAILURE;
    };
    let seed = match args.get(1).map(|s| s.parse::<u64>()) {
        None => None,
        Some(Ok(seed)) => Some(seed),
        Some(Err(err)) => {
            log::error!("invalid seed {:?}: {}", args[1], err);
            return ExitCode::FAILURE;
        }
    };

    let result = match profile {
        Profile::Planar => run::<Vec2>(profile, seed),
        Profile::Spherical => run::<Vec3>(profile, seed),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("configuration error: {}", err);
            ExitCode::FAILURE
        }
    }
}
