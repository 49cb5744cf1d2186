//! Paced run loop, cooperative cancellation, and step observers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::step::HullTracer;
use super::types::{RunCfg, Snapshot, Status};

/// Shared cancel switch; clones observe the same flag.
///
/// Checked by the tracer at step boundaries only, so an in-flight step
/// always completes.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Receives the tracer state once before the first step and after every step.
pub trait StepObserver {
    fn on_step(&mut self, snap: &Snapshot);
}

impl<F: FnMut(&Snapshot)> StepObserver for F {
    fn on_step(&mut self, snap: &Snapshot) {
        self(snap)
    }
}

/// Observer that keeps every snapshot it sees.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub snapshots: Vec<Snapshot>,
}

impl StepObserver for Recorder {
    fn on_step(&mut self, snap: &Snapshot) {
        self.snapshots.push(snap.clone());
    }
}

impl<'a> HullTracer<'a> {
    /// Advance until the tracer leaves `Running`, pausing `step_delay` between steps.
    pub fn run_to_completion(&mut self, step_delay: Duration) -> Snapshot {
        while self.status() == Status::Running {
            pause(step_delay);
            self.step();
        }
        self.snapshot()
    }

    /// Same loop as `run_to_completion`, reporting each state to `observer`.
    ///
    /// The observer runs between steps; step k is fully committed before it
    /// sees the snapshot and before step k+1 begins.
    pub fn run_with_observer<O: StepObserver + ?Sized>(
        &mut self,
        cfg: &RunCfg,
        observer: &mut O,
    ) -> Snapshot {
        let mut snap = self.snapshot();
        observer.on_step(&snap);
        while snap.status == Status::Running {
            pause(cfg.step_delay);
            snap = self.advance();
            observer.on_step(&snap);
        }
        snap
    }
}

#[inline]
fn pause(delay: Duration) {
    if !delay.is_zero() {
        std::thread::sleep(delay);
    }
}
