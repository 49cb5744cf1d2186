//! Step-observable gift-wrapping (Jarvis march).
//!
//! Purpose
//! - Build the convex hull of a `PointSet` one comparison at a time so a
//!   renderer can show hull-point, next-point, and candidate after every step.
//! - Keep the whole computation a pure, deterministic, interruptible step
//!   function: no locks, no background work, cancellation at step boundaries.
//!
//! Model
//! - Start at the leftmost point (index 0) with next = 1 and candidate = 2.
//! - Each step tests the candidate against the ray hull-point → next-point.
//!   A candidate strictly clockwise of the ray (or collinear and farther out)
//!   replaces the next-point and restarts the scan; otherwise the scan moves on.
//! - When the scan runs out, the next-point is committed to the hull, or, if
//!   it is already on the hull (normally the start point), the wrap closes.
//! - At most N commits happen (a repeat closes the wrap). The scan restarts
//!   from index 0 after each replacement, so a commit phase costs N steps per
//!   replacement: O(N·H) on typical inputs, O(N²·H) in the worst case.
//!
//! Code cross-refs: `points::{PointSet, Point}`

mod run;
mod step;
mod types;

pub use run::{CancelFlag, Recorder, StepObserver};
pub use step::{Hull, HullTracer};
pub use types::{Candidate, Compared, EdgeRole, RunCfg, Snapshot, Status, StepEvent};

use std::time::Duration;

use crate::error::HullError;
use crate::points::{Point, PointSet};

/// Convenience: build the point set, run to completion, return the hull.
pub fn gift_wrap(points: &[Point]) -> Result<Hull, HullError> {
    let set = PointSet::build(points)?;
    let mut tracer = HullTracer::new(&set);
    tracer.run_to_completion(Duration::ZERO);
    tracer.into_hull()
}
