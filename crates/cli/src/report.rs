//! Run the tracer over a point cloud and collect a serializable report.

use anyhow::{Context, Result};
use hullstep::prelude::*;
use serde::Serialize;
use std::time::Duration;

/// Options for a single traced run.
#[derive(Clone, Copy, Debug, Default)]
pub struct RunOpts {
    pub step_delay: Duration,
    /// Keep every snapshot in the report.
    pub trace: bool,
    /// Cancel the run once this many steps happened.
    pub max_steps: Option<usize>,
}

/// One observed tracer state.
#[derive(Clone, Debug, Serialize)]
pub struct StepRecord {
    pub step: usize,
    pub hull_point: usize,
    pub next_point: usize,
    pub candidate: Option<usize>,
    pub hull: Vec<usize>,
    pub status: String,
    pub event: Option<String>,
}

impl From<&Snapshot> for StepRecord {
    fn from(s: &Snapshot) -> Self {
        Self {
            step: s.steps,
            hull_point: s.hull_point,
            next_point: s.next_point,
            candidate: s.candidate.index(),
            hull: s.hull.clone(),
            status: format!("{:?}", s.status),
            event: s.event.map(|e| format!("{e:?}")),
        }
    }
}

/// Output document of `cli run`. Indices refer to the x-sorted point order.
#[derive(Clone, Debug, Serialize)]
pub struct HullReport {
    pub status: String,
    pub steps: usize,
    pub points: Vec<[f64; 2]>,
    pub hull: Vec<usize>,
    pub hull_points: Vec<[f64; 2]>,
    /// Hull vertices as rows of the input file.
    pub source_rows: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<StepRecord>>,
}

pub fn run_report(points: &[Point], opts: RunOpts) -> Result<HullReport> {
    let set = PointSet::build(points).context("building point set")?;
    let mut tracer = HullTracer::new(&set);
    let flag = tracer.cancel_flag();
    let mut trace = Vec::new();
    let mut observer = |s: &Snapshot| {
        tracing::debug!(
            step = s.steps,
            hull_point = s.hull_point,
            next_point = s.next_point,
            candidate = ?s.candidate.index(),
            event = ?s.event,
            "step"
        );
        if opts.trace {
            trace.push(StepRecord::from(s));
        }
        if opts.max_steps.is_some_and(|m| s.steps >= m) {
            flag.cancel();
        }
    };
    let last = tracer.run_with_observer(&RunCfg::with_delay(opts.step_delay), &mut observer);
    if last.status == Status::Cancelled {
        tracing::warn!(steps = last.steps, "step budget reached; hull is partial");
    }

    let hull_points = last
        .hull
        .iter()
        .map(|&i| set.at(i).map(|p| [p.x, p.y]))
        .collect::<Result<Vec<_>, _>>()?;
    let source_rows = last
        .hull
        .iter()
        .map(|&i| set.source_index(i))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HullReport {
        status: format!("{:?}", last.status),
        steps: last.steps,
        points: set.points().iter().map(|p| [p.x, p.y]).collect(),
        hull: last.hull,
        hull_points,
        source_rows,
        trace: opts.trace.then_some(trace),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
            Point::new(2.0, 2.0),
        ]
    }

    #[test]
    fn completed_report_without_trace() {
        let r = run_report(&square(), RunOpts::default()).unwrap();
        assert_eq!(r.status, "Completed");
        assert_eq!(r.hull, vec![0, 3, 4, 1]);
        assert_eq!(r.source_rows, vec![0, 1, 2, 3]);
        assert_eq!(r.hull_points[1], [4.0, 0.0]);
        assert!(r.trace.is_none());
        let json = serde_json::to_value(&r).unwrap();
        assert!(json.get("trace").is_none());
    }

    #[test]
    fn trace_holds_initial_state_plus_every_step() {
        let r = run_report(
            &square(),
            RunOpts {
                trace: true,
                ..RunOpts::default()
            },
        )
        .unwrap();
        let trace = r.trace.unwrap();
        assert_eq!(trace.len(), r.steps + 1);
        assert_eq!(trace[0].candidate, Some(2));
        assert_eq!(trace.last().unwrap().event.as_deref(), Some("Closed"));
    }

    #[test]
    fn step_budget_cancels_run() {
        let r = run_report(
            &square(),
            RunOpts {
                max_steps: Some(7),
                ..RunOpts::default()
            },
        )
        .unwrap();
        assert_eq!(r.status, "Cancelled");
        assert_eq!(r.steps, 7);
        assert_eq!(r.hull, vec![0, 3]);
    }

    #[test]
    fn empty_input_fails() {
        assert!(run_report(&[], RunOpts::default()).is_err());
    }
}
