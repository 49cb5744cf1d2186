//! Print every gift-wrap step for a small random cloud.
//!
//! Usage:
//!   cargo run -p hullstep --example step_trace -- [count] [seed]

use std::time::Duration;

use hullstep::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let count = args.next().and_then(|s| s.parse().ok()).unwrap_or(8);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);
    let cfg = ScatterCfg {
        count,
        ..ScatterCfg::default()
    };
    let pts = match draw_points(&cfg, seed) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("step_trace: {e}");
            return;
        }
    };
    let set = PointSet::build(&pts).expect("scatter never returns an empty cloud");
    for (i, p) in set.points().iter().enumerate() {
        println!("point {i}: ({:.1}, {:.1})", p.x, p.y);
    }
    let mut print_step = |s: &Snapshot| {
        println!(
            "step {:>3}: from={} next={} candidate={:?} hull={:?} {:?}",
            s.steps, s.hull_point, s.next_point, s.candidate, s.hull, s.event
        );
    };
    let mut tracer = HullTracer::new(&set);
    let last = tracer.run_with_observer(&RunCfg::with_delay(Duration::ZERO), &mut print_step);
    println!("{:?} after {} steps: {:?}", last.status, last.steps, last.hull);
}
