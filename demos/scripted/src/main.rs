//! scripted — smallest runnable example of the rust_trt routing testbed.
//!
//! Replays a hand-written frame script for 3 vehicles crossing a fork
//! network (one approach road splitting into a congested and a clear
//! branch) and routes them with the greedy shortest-queue policy.  Swap
//! [`ScriptedClient`] for a live protocol adapter to drive a real
//! micro-simulator with the same code.

use std::fs::File;
use std::path::Path;

use anyhow::Result;

use trt_client::{ScriptedClient, StepFrame};
use trt_core::{Direction, RoadIndex, RoadIndexBuilder, Vehicle, VehicleId};
use trt_policy::ShortestQueuePolicy;
use trt_sim::{DriverBuilder, write_arrivals_csv};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED_NOTE: &str = "fully scripted; no randomness involved";

// ── Road network ──────────────────────────────────────────────────────────────

/// Fork network:
///
/// ```text
///   approach ──s──> split ──l──> north (congested) ──s──> goal
///                        ╰──r──> south (clear)     ──s──> goal
/// ```
fn build_road() -> Result<(RoadIndex, [trt_core::EdgeId; 5])> {
    let mut b = RoadIndexBuilder::new();
    let approach = b.add_edge("approach", 120.0)?;
    let split    = b.add_edge("split", 80.0)?;
    let north    = b.add_edge("north", 100.0)?;
    let south    = b.add_edge("south", 100.0)?;
    let goal     = b.add_edge("goal", 150.0)?;

    b.connect(approach, Direction::Straight, split)?;
    b.connect(split, Direction::Left, north)?;
    b.connect(split, Direction::Right, south)?;
    b.connect(north, Direction::Straight, goal)?;
    b.connect(south, Direction::Straight, goal)?;

    Ok((b.build(), [approach, split, north, south, goal]))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("=== scripted — rust_trt routing testbed ===");
    println!("Vehicles: 3  |  Policy: shortest-queue  |  {SEED_NOTE}");
    println!();

    // 1. Build the road network.
    let (road, [approach, split, north, south, goal]) = build_road()?;
    println!("Road network: {} recognized edges", road.edge_count());

    // 2. Script the simulator: 12 one-second frames.  The north branch
    //    carries a standing queue of 6 background vehicles, so the policy
    //    should steer everyone south.
    let congestion = |f: StepFrame| f.with_count(north, 6).with_count(south, 1);
    let (v1, v2, v3) = (VehicleId(1), VehicleId(2), VehicleId(3));
    let frames = vec![
        congestion(StepFrame::empty().with_vehicle(v1, approach, 13.9)),
        congestion(
            StepFrame::empty()
                .with_vehicle(v1, approach, 13.9)
                .with_vehicle(v2, approach, 13.9),
        ),
        congestion(
            StepFrame::empty()
                .with_vehicle(v1, split, 11.0)
                .with_vehicle(v2, approach, 13.9)
                .with_vehicle(v3, approach, 13.9),
        ),
        congestion(
            StepFrame::empty()
                .with_vehicle(v1, split, 11.0)
                .with_vehicle(v2, split, 11.0)
                .with_vehicle(v3, approach, 13.9),
        ),
        congestion(
            StepFrame::empty()
                .with_vehicle(v1, south, 13.9)
                .with_vehicle(v2, split, 11.0)
                .with_vehicle(v3, approach, 13.9),
        ),
        congestion(
            StepFrame::empty()
                .with_vehicle(v1, south, 13.9)
                .with_vehicle(v2, south, 13.9)
                .with_vehicle(v3, split, 8.0),
        ),
        congestion(
            StepFrame::empty()
                .with_vehicle(v1, goal, 13.9)
                .with_vehicle(v2, south, 13.9)
                .with_vehicle(v3, split, 8.0),
        ),
        congestion(
            StepFrame::empty()
                .with_vehicle(v2, goal, 13.9)
                .with_vehicle(v3, south, 10.0)
                .with_arrival(v1),
        ),
        congestion(
            StepFrame::empty()
                .with_vehicle(v3, south, 10.0)
                .with_arrival(v2),
        ),
        congestion(StepFrame::empty().with_vehicle(v3, south, 10.0)),
        congestion(StepFrame::empty().with_vehicle(v3, goal, 10.0)),
        StepFrame::empty().with_arrival(v3),
    ];
    let client = ScriptedClient::new(frames);

    // 3. Declare the controlled vehicles.  v3 gets a deadline it cannot
    //    make, to show deadline accounting.
    let vehicles = vec![
        Vehicle::new(v1, goal, 60.0),
        Vehicle::new(v2, goal, 60.0),
        Vehicle::new(v3, goal, 6.0),
    ];
    let controlled = vehicles.len();

    // 4. Assemble and run the driver.
    let mut driver = DriverBuilder::new(client, road, ShortestQueuePolicy)
        .vehicles(vehicles)
        .build()?;
    let report = driver.run();

    // 5. Write the arrivals report.
    std::fs::create_dir_all("output/scripted")?;
    let csv_path = Path::new("output/scripted/arrivals.csv");
    write_arrivals_csv(&report, File::create(csv_path)?)?;

    // 6. Summary.
    println!();
    println!("Run complete: {:?}", report.outcome);
    println!("  steps           : {}", report.steps);
    println!("  sim time        : {:.1} s", report.total_time);
    println!("  arrived         : {}", report.arrived);
    println!("  deadline missed : {}", report.deadline_missed);
    println!("  still active    : {}", report.still_active(controlled));
    println!("  arrivals report : {}", csv_path.display());
    println!();

    // 7. Per-arrival table.
    println!("{:<10} {:<12} {:<10} {:<8}", "Vehicle", "Arrival (s)", "Elapsed", "Missed");
    println!("{}", "-".repeat(42));
    for rec in &report.arrivals {
        println!(
            "{:<10} {:<12} {:<10} {:<8}",
            rec.vehicle.0,
            rec.arrival_time,
            rec.elapsed,
            if rec.missed_deadline { "yes" } else { "no" },
        );
    }

    // 8. Redirect log — every command the driver issued to the client.
    println!();
    println!("Redirects issued:");
    for (step, vehicle, target) in &driver.client.redirects {
        println!(
            "  step {:>2}: vehicle {} -> {}",
            step,
            vehicle.0,
            driver.road.name(*target),
        );
    }

    Ok(())
}
