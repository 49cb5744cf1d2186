//! Step-observable convex hulls in 2D.
//!
//! The crate computes convex hulls with gift-wrapping and exposes every
//! intermediate state, so a viewer can animate hull-point, next-point, and
//! candidate as the wrap proceeds. Rendering, timers, and UI wiring live
//! outside; callers drive `HullTracer::advance` or one of the run loops.
//!
//! Layout
//! - `points`: x-sorted `PointSet` and the orientation predicate.
//! - `tracer`: the incremental gift-wrap state machine, run loops, observers.
//! - `scatter`: reproducible random point clouds for demos and benchmarks.

pub mod error;
pub mod points;
pub mod scatter;
pub mod tracer;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::HullError;
pub use points::{Point, PointSet};
pub use tracer::{gift_wrap, Hull, HullTracer, Snapshot, Status};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::HullError;
    pub use crate::points::{Point, PointSet};
    pub use crate::scatter::{draw_points, ScatterCfg};
    pub use crate::tracer::{
        gift_wrap, CancelFlag, Candidate, Compared, EdgeRole, Hull, HullTracer, Recorder, RunCfg,
        Snapshot, Status, StepEvent, StepObserver,
    };
}
