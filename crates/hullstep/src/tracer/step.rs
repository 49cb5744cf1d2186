//! The gift-wrap step function.

use crate::error::HullError;
use crate::points::{Point, PointSet};

use super::run::CancelFlag;
use super::types::{Candidate, Compared, Snapshot, Status, StepEvent};

/// Incremental gift-wrap (Jarvis march) over a borrowed `PointSet`.
///
/// Invariants while `Running` with a live candidate: `hull_point`,
/// `next_point` and the candidate index are pairwise distinct, and `hull`
/// holds no duplicates. Terminal once `status` leaves `Running`.
#[derive(Clone, Debug)]
pub struct HullTracer<'a> {
    points: &'a PointSet,
    hull_point: usize,
    next_point: usize,
    candidate: Candidate,
    hull: Vec<usize>,
    status: Status,
    steps: usize,
    last_event: Option<StepEvent>,
    cancel: CancelFlag,
}

impl<'a> HullTracer<'a> {
    /// Fresh tracer. One or two points complete immediately.
    pub fn new(points: &'a PointSet) -> Self {
        let n = points.len();
        let start = points.leftmost();
        let (hull, status, next_point, candidate) = match n {
            0 | 1 => (vec![start], Status::Completed, start, Candidate::Exhausted),
            2 => (vec![start, 1], Status::Completed, 1, Candidate::Exhausted),
            _ => (vec![start], Status::Running, 1, Candidate::At(2)),
        };
        Self {
            points,
            hull_point: start,
            next_point,
            candidate,
            hull,
            status,
            steps: 0,
            last_event: None,
            cancel: CancelFlag::default(),
        }
    }

    /// Discard all progress and start over on the same point set.
    ///
    /// Cancel handles taken before the reset stay bound to the old run.
    pub fn reset(&mut self) {
        *self = Self::new(self.points);
    }

    #[inline]
    pub fn points(&self) -> &'a PointSet {
        self.points
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn hull(&self) -> &[usize] {
        &self.hull
    }

    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Handle that cancels this run from elsewhere (checked at the next step boundary).
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            hull_point: self.hull_point,
            next_point: self.next_point,
            candidate: self.candidate,
            hull: self.hull.clone(),
            status: self.status,
            steps: self.steps,
            event: self.last_event,
        }
    }

    /// Stop the computation; `hull` keeps the vertices committed so far.
    pub fn cancel(&mut self) {
        if self.status == Status::Running {
            self.status = Status::Cancelled;
        }
    }

    /// Perform one comparison step. No-op once terminal.
    pub fn advance(&mut self) -> Snapshot {
        self.step();
        self.snapshot()
    }

    /// `advance` without building a snapshot.
    pub(super) fn step(&mut self) {
        if self.status != Status::Running {
            return;
        }
        if self.cancel.is_cancelled() {
            self.status = Status::Cancelled;
            return;
        }
        self.steps += 1;
        let event = match self.candidate {
            Candidate::At(c) => self.compare(c).into(),
            Candidate::Exhausted => self.finish_scan(),
        };
        self.last_event = Some(event);
    }

    /// Candidate scan is over: either close the loop or commit the next-point.
    fn finish_scan(&mut self) -> StepEvent {
        let pts = self.points.points();
        // Returning to any confirmed vertex closes the wrap. Index 0 is the
        // regular case; other repeats only arise with degenerate input.
        // A next-point still on top of the hull point means every point coincides.
        if self.hull.contains(&self.next_point)
            || pts[self.next_point] == pts[self.hull_point]
        {
            self.status = Status::Completed;
            return StepEvent::Closed;
        }
        let vertex = self.next_point;
        self.hull.push(vertex);
        self.hull_point = vertex;
        self.next_point = self.points.leftmost();
        // With three or more points a free index always exists here.
        let then = self.first_free(0).map(|c| self.compare(c));
        if then.is_none() {
            self.candidate = Candidate::Exhausted;
        }
        StepEvent::Committed { vertex, then }
    }

    /// Orientation test of candidate `c` against the ray hull-point → next-point.
    fn compare(&mut self, c: usize) -> Compared {
        let pts = self.points.points();
        let (h, n) = (self.hull_point, self.next_point);
        if wraps_tighter(pts[h], pts[n], pts[c]) {
            self.next_point = c;
            self.candidate = self.first_free(0).map_or(Candidate::Exhausted, Candidate::At);
            Compared::Replaced { candidate: c }
        } else {
            self.candidate = self
                .first_free(c + 1)
                .map_or(Candidate::Exhausted, Candidate::At);
            Compared::Kept { candidate: c }
        }
    }

    /// Smallest index `>= from` distinct from hull-point and next-point.
    fn first_free(&self, from: usize) -> Option<usize> {
        (from..self.points.len()).find(|&i| i != self.hull_point && i != self.next_point)
    }

    /// Final hull, available once the computation completed.
    pub fn into_hull(self) -> Result<Hull, HullError> {
        if self.status != Status::Completed {
            return Err(HullError::invalid_state(format!(
                "hull requested while {:?}",
                self.status
            )));
        }
        Hull::from_indices(self.points, self.hull)
    }
}

/// Does `c` replace `n` as the next hull vertex seen from `h`?
///
/// True when `c` is strictly clockwise of the ray `h→n`, or collinear and
/// strictly farther along it. The surviving next-point then has every point
/// on or to the left of `h→n`, which walks the boundary counter-clockwise.
///
/// A next-point coinciding with `h` spans no ray; any distinct `c` replaces it.
#[inline]
fn wraps_tighter(h: Point, n: Point, c: Point) -> bool {
    if n == h {
        return c != h;
    }
    let d = crate::points::signed_area(h, n, c);
    if d < 0.0 {
        return true;
    }
    if d > 0.0 {
        return false;
    }
    crate::points::extends_beyond(h, n, c)
}

/// Completed convex hull: indices into the point set plus their coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Hull {
    /// Counter-clockwise, starting at the leftmost point.
    pub indices: Vec<usize>,
    pub vertices: Vec<Point>,
    /// Position of each vertex in the caller's original input.
    pub source_indices: Vec<usize>,
}

impl Hull {
    fn from_indices(points: &PointSet, indices: Vec<usize>) -> Result<Self, HullError> {
        let vertices = indices
            .iter()
            .map(|&i| points.at(i))
            .collect::<Result<Vec<_>, _>>()?;
        let source_indices = indices
            .iter()
            .map(|&i| points.source_index(i))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            indices,
            vertices,
            source_indices,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Twice the signed area enclosed by the vertex loop (positive for CCW).
    pub fn doubled_area(&self) -> f64 {
        let n = self.vertices.len();
        (0..n)
            .map(|i| {
                let p = self.vertices[i];
                let q = self.vertices[(i + 1) % n];
                p.x * q.y - q.x * p.y
            })
            .sum()
    }
}
