//! patrol — drives one behaviour group through start, a fixed number of
//! update ticks, and stop.
//!
//! A guard patrols at random while a gate lets visitors in every few
//! seconds.  Visitors join the running group from inside the gate's update
//! callback and later remove themselves from inside their own.
//!
//! Set `RUST_LOG=bg_group=trace` to see every membership change.

mod units;
mod world;

use std::rc::Rc;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bg_behaviour::DeltaTime;
use bg_group::{BehaviourGroupBuilder, LifecycleIteration};

use units::{Alarm, Clock, Gate, Patrol};
use world::WorldState;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:          u64 = 42;
const TICK_RATE_HZ:  f32 = 30.0;
const SIM_SECONDS:   f32 = 20.0;
const GUARD_SPEED:   f32 = 1.5; // units / s
const GATE_INTERVAL: f32 = 3.0; // s between visitors
const VISITOR_STAY:  f32 = 7.5; // s

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== patrol — behaviour group demo ===");
    println!("Tick rate: {TICK_RATE_HZ} Hz  |  Duration: {SIM_SECONDS} s  |  Seed: {SEED}");
    println!();

    // 1. Blackboard and group.  Units that mutate the group hold a Weak
    //    handle to it, so the group lives in an Rc.
    let world = WorldState::default();
    let group = Rc::new(
        BehaviourGroupBuilder::new(&world)
            .name("perimeter")
            .lifecycle_iteration(LifecycleIteration::Live)
            .snapshot_capacity(8)
            .behaviour(Rc::new(Clock))
            .behaviour(Rc::new(Alarm))
            .behaviour(Rc::new(Patrol::new(GUARD_SPEED, SEED)?))
            .build()?,
    );
    group.add_behaviour(Rc::new(Gate::new(GATE_INTERVAL, VISITOR_STAY, Rc::downgrade(&group))?));
    println!(
        "Group `{}`: {} members, {} updatable",
        group.name(),
        group.len(),
        group.update_len()
    );

    // 2. Run.
    let delta = DeltaTime::from_secs_f32(1.0 / TICK_RATE_HZ);
    let ticks = (SIM_SECONDS * TICK_RATE_HZ).round() as u64;
    let mut peak_members = group.len();

    let t0 = Instant::now();
    group.start();
    for _ in 0..ticks {
        group.update(delta);
        peak_members = peak_members.max(group.len());
    }
    group.stop();
    let elapsed = t0.elapsed();
    info!(ticks, "run complete");

    // Stopped: logged as a warning and otherwise ignored.
    group.update(delta);

    // 3. Summary.
    println!("Simulation complete in {:.3} ms", elapsed.as_secs_f64() * 1e3);
    let (x, y) = world.guard_position.get();
    println!("  ticks           : {ticks}");
    println!("  simulated time  : {:.2} s", world.clock.get());
    println!("  guard position  : ({x:.2}, {y:.2})");
    println!("  guard distance  : {:.2}", world.guard_distance.get());
    println!("  visitors seen   : {}", world.visitors_seen.get());
    println!("  visitors inside : {}", world.visitors.get());
    println!("  peak members    : {peak_members}");
    println!("  final members   : {}", group.len());
    println!();

    println!("Journal");
    println!("{}", "-".repeat(32));
    for entry in world.journal.borrow().iter() {
        println!("{entry}");
    }

    Ok(())
}
