//! Public state types for the hull tracer.
//!
//! Kept small and explicit so `step` and `run` are easy to read.

use std::time::Duration;

/// Lifecycle of one hull computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Running,
    Completed,
    Cancelled,
}

impl Status {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != Status::Running
    }
}

/// Point currently compared against the next-point, or the end of the scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Candidate {
    At(usize),
    Exhausted,
}

impl Candidate {
    #[inline]
    pub fn index(self) -> Option<usize> {
        match self {
            Candidate::At(i) => Some(i),
            Candidate::Exhausted => None,
        }
    }
}

/// What a single `advance` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepEvent {
    /// Candidate did not wrap tighter; the scan moved on.
    Kept { candidate: usize },
    /// Candidate wrapped tighter and became the next-point.
    Replaced { candidate: usize },
    /// The scan finished and `vertex` joined the hull; `then` is the
    /// comparison that ran in the same step.
    Committed {
        vertex: usize,
        then: Option<Compared>,
    },
    /// The wrap returned to a confirmed vertex; the hull is final.
    Closed,
}

/// Outcome of the orientation test run right after a commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Compared {
    Kept { candidate: usize },
    Replaced { candidate: usize },
}

impl From<Compared> for StepEvent {
    fn from(c: Compared) -> Self {
        match c {
            Compared::Kept { candidate } => StepEvent::Kept { candidate },
            Compared::Replaced { candidate } => StepEvent::Replaced { candidate },
        }
    }
}

/// Edge role a renderer may want to highlight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeRole {
    /// hull-point → next-point.
    PotentialNext,
    /// next-point → candidate.
    CandidateInConsideration,
    /// Consecutive confirmed hull vertices (including the closing edge once complete).
    HullEdge,
}

/// Read-only view of the tracer after a step.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub hull_point: usize,
    pub next_point: usize,
    pub candidate: Candidate,
    pub hull: Vec<usize>,
    pub status: Status,
    /// Number of `advance` calls that performed work so far.
    pub steps: usize,
    /// What the most recent step did (`None` before the first step).
    pub event: Option<StepEvent>,
}

impl Snapshot {
    /// Edges to draw for this state, as `(from, to, role)`.
    pub fn highlighted_edges(&self) -> Vec<(usize, usize, EdgeRole)> {
        let mut out: Vec<_> = self
            .hull
            .windows(2)
            .map(|w| (w[0], w[1], EdgeRole::HullEdge))
            .collect();
        match self.status {
            Status::Completed => {
                if let (Some(&last), Some(&first)) = (self.hull.last(), self.hull.first()) {
                    if last != first {
                        out.push((last, first, EdgeRole::HullEdge));
                    }
                }
            }
            Status::Running => {
                out.push((self.hull_point, self.next_point, EdgeRole::PotentialNext));
                if let Candidate::At(c) = self.candidate {
                    out.push((self.next_point, c, EdgeRole::CandidateInConsideration));
                }
            }
            Status::Cancelled => {}
        }
        out
    }
}

/// Run-loop configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct RunCfg {
    /// Pause between consecutive steps; zero runs flat out.
    pub step_delay: Duration,
}

impl RunCfg {
    pub fn with_delay(step_delay: Duration) -> Self {
        Self { step_delay }
    }
}
