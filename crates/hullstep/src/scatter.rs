//! Random point clouds inside a rectangular drawing area.
//!
//! Model
//! - Uniform points in `[margin, width - margin) × [margin, height - margin)`,
//!   so nothing lands on the border of the area a viewer draws into.
//! - Determinism comes from a single `StdRng` seeded with the caller's seed.
//!
//! Code cross-refs: `points::PointSet`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::HullError;
use crate::points::Point;

/// Scatter configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterCfg {
    pub count: usize,
    pub width: f64,
    pub height: f64,
    /// Clearance kept free on every side of the area.
    pub margin: f64,
}

impl Default for ScatterCfg {
    fn default() -> Self {
        Self {
            count: 3,
            width: 800.0,
            height: 600.0,
            margin: 50.0,
        }
    }
}

impl ScatterCfg {
    fn validate(&self) -> Result<(), HullError> {
        if self.count == 0 {
            return Err(HullError::invalid_params("need at least one point"));
        }
        if !(self.width.is_finite() && self.height.is_finite() && self.margin.is_finite()) {
            return Err(HullError::invalid_params("area bounds must be finite"));
        }
        if self.margin < 0.0 {
            return Err(HullError::invalid_params("margin must be >= 0"));
        }
        if self.width - 2.0 * self.margin <= 0.0 || self.height - 2.0 * self.margin <= 0.0 {
            return Err(HullError::invalid_params(
                "area minus margins must be positive in both directions",
            ));
        }
        Ok(())
    }
}

/// Draw `cfg.count` points, reproducible per `seed`. Input order is draw order.
pub fn draw_points(cfg: &ScatterCfg, seed: u64) -> Result<Vec<Point>, HullError> {
    cfg.validate()?;
    let mut rng = StdRng::seed_from_u64(seed);
    let (x0, x1) = (cfg.margin, cfg.width - cfg.margin);
    let (y0, y1) = (cfg.margin, cfg.height - cfg.margin);
    Ok((0..cfg.count)
        .map(|_| Point::new(rng.gen_range(x0..x1), rng.gen_range(y0..y1)))
        .collect())
}
