//! Timer-driven look-at rotation.
//!
//! A [`SlerpJob`] is stepped on its own thread at the job's interval. Each
//! step is published to a [`SharedOrientation`] that the frame update
//! copies into the scene graph, so the render loop never blocks on the
//! ticker and the ticker never touches the graph.
//!
//! ```text
//!  look-at key ──► OrientationInterpolator::start(job)
//!                        │ cancels previous job
//!                        ▼
//!                  ticker thread ──write──► SharedOrientation ──read──► Demo::update
//! ```
//!
//! Cancellation is checked while holding the write lock, so once
//! [`SlerpHandle::cancel`] returns the cancelled job can no longer publish.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use glam::Quat;
use glide_motion::SlerpJob;
use parking_lot::RwLock;

/// Orientation written by the ticker and read by the frame update.
#[derive(Debug, Clone)]
pub struct SharedOrientation(Arc<RwLock<Quat>>);

impl SharedOrientation {
    pub fn new(rotation: Quat) -> Self {
        Self(Arc::new(RwLock::new(rotation)))
    }

    pub fn get(&self) -> Quat {
        *self.0.read()
    }

    pub fn set(&self, rotation: Quat) {
        *self.0.write() = rotation;
    }

    /// Publish unless `cancelled` is set. Returns whether it published.
    fn publish(&self, rotation: Quat, cancelled: &AtomicBool) -> bool {
        let mut slot = self.0.write();
        if cancelled.load(Ordering::Acquire) {
            return false;
        }
        *slot = rotation;
        true
    }
}

/// Owner of one running ticker.
///
/// Dropping the handle cancels the job without waiting for the thread.
#[derive(Debug)]
pub struct SlerpHandle {
    output: SharedOrientation,
    cancelled: Arc<AtomicBool>,
    thread: Option<JoinHandle<u32>>,
}

impl SlerpHandle {
    /// Stop publishing. The thread exits on its next tick.
    pub fn cancel(&self) {
        let _slot = self.output.0.write();
        self.cancelled.store(true, Ordering::Release);
    }

    /// Check if the ticker thread has exited.
    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().map_or(true, |t| t.is_finished())
    }

    /// Wait for the ticker to exit and return how many steps it published.
    pub fn join(mut self) -> u32 {
        match self.thread.take().map(|t| t.join()) {
            Some(Ok(ticks)) => ticks,
            Some(Err(_)) => {
                log::warn!("slerp ticker panicked");
                0
            }
            None => 0,
        }
    }
}

impl Drop for SlerpHandle {
    fn drop(&mut self) {
        if self.thread.is_some() {
            self.cancel();
        }
    }
}

/// Schedules look-at rotations for a single node.
#[derive(Debug)]
pub struct OrientationInterpolator {
    output: SharedOrientation,
    active: Option<SlerpHandle>,
}

impl OrientationInterpolator {
    pub fn new(rotation: Quat) -> Self {
        Self {
            output: SharedOrientation::new(rotation),
            active: None,
        }
    }

    /// Latest published orientation.
    pub fn orientation(&self) -> Quat {
        self.output.get()
    }

    /// Run `job` on a ticker thread, cancelling any job already running.
    ///
    /// If the thread cannot be spawned the target is applied at once.
    pub fn start(&mut self, job: SlerpJob) {
        self.cancel();

        let output = self.output.clone();
        let cancelled = Arc::new(AtomicBool::new(false));
        let target = job.target();
        let steps = job.remaining_steps();

        let spawned = thread::Builder::new().name("slerp-ticker".into()).spawn({
            let output = output.clone();
            let cancelled = cancelled.clone();
            move || run_ticker(job, &output, &cancelled)
        });

        match spawned {
            Ok(thread) => {
                log::debug!("slerp started: {} steps", steps);
                self.active = Some(SlerpHandle {
                    output,
                    cancelled,
                    thread: Some(thread),
                });
            }
            Err(e) => {
                log::warn!("failed to spawn slerp ticker, snapping to target: {}", e);
                self.output.set(target);
            }
        }
    }

    /// Cancel any running job and set the orientation directly.
    pub fn snap(&mut self, rotation: Quat) {
        self.cancel();
        self.output.set(rotation);
    }

    /// Cancel the running job, if any. The orientation stays where the
    /// last published step left it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.active.take() {
            if !handle.is_finished() {
                log::debug!("slerp cancelled");
            }
            handle.cancel();
        }
    }

    /// Check if a job is still stepping.
    pub fn is_running(&self) -> bool {
        self.active.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Block until the running job completes. Returns its published steps.
    pub fn wait(&mut self) -> u32 {
        self.active.take().map_or(0, SlerpHandle::join)
    }
}

impl Default for OrientationInterpolator {
    fn default() -> Self {
        Self::new(Quat::IDENTITY)
    }
}

fn run_ticker(mut job: SlerpJob, output: &SharedOrientation, cancelled: &AtomicBool) -> u32 {
    let mut ticks = 0;
    while !job.is_finished() {
        thread::sleep(job.interval());
        if cancelled.load(Ordering::Acquire) {
            break;
        }
        let Some(rotation) = job.step() else {
            break;
        };
        if !output.publish(rotation, cancelled) {
            break;
        }
        ticks += 1;
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const TICK: Duration = Duration::from_millis(1);

    #[test]
    fn test_runs_exact_ticks_and_lands_on_target() {
        let target = Quat::from_rotation_y(1.2);
        let mut interpolator = OrientationInterpolator::default();

        interpolator.start(SlerpJob::new(Quat::IDENTITY, target, 30, TICK));
        let ticks = interpolator.wait();

        assert_eq!(ticks, 30);
        assert!(interpolator.orientation().dot(target).abs() > 1.0 - 1e-5);
        assert!(!interpolator.is_running());
    }

    #[test]
    fn test_cancel_stops_publishing() {
        let target = Quat::from_rotation_x(1.0);
        let mut interpolator = OrientationInterpolator::default();

        interpolator.start(SlerpJob::new(Quat::IDENTITY, target, 1000, Duration::from_millis(5)));
        thread::sleep(Duration::from_millis(20));
        interpolator.cancel();

        let frozen = interpolator.orientation();
        thread::sleep(Duration::from_millis(30));
        assert_eq!(interpolator.orientation(), frozen);
        assert!(frozen.dot(target).abs() < 1.0 - 1e-3);
    }

    #[test]
    fn test_new_job_supersedes_old() {
        let first = Quat::from_rotation_x(1.5);
        let second = Quat::from_rotation_z(-0.5);
        let mut interpolator = OrientationInterpolator::default();

        interpolator.start(SlerpJob::new(Quat::IDENTITY, first, 1000, Duration::from_millis(5)));
        thread::sleep(Duration::from_millis(10));

        let from = interpolator.orientation();
        interpolator.start(SlerpJob::new(from, second, 5, TICK));
        interpolator.wait();

        // Only the second job can have published last
        thread::sleep(Duration::from_millis(20));
        assert!(interpolator.orientation().dot(second).abs() > 1.0 - 1e-5);
    }

    #[test]
    fn test_snap_cancels_and_sets() {
        let mut interpolator = OrientationInterpolator::default();
        interpolator.start(SlerpJob::new(
            Quat::IDENTITY,
            Quat::from_rotation_y(2.0),
            1000,
            Duration::from_millis(5),
        ));

        interpolator.snap(Quat::IDENTITY);
        thread::sleep(Duration::from_millis(20));
        assert_eq!(interpolator.orientation(), Quat::IDENTITY);
        assert!(!interpolator.is_running());
    }

    #[test]
    fn test_zero_step_job_publishes_nothing() {
        let mut interpolator = OrientationInterpolator::new(Quat::from_rotation_x(0.2));
        interpolator.start(SlerpJob::new(Quat::IDENTITY, Quat::from_rotation_y(1.0), 0, TICK));
        assert_eq!(interpolator.wait(), 0);
        assert_eq!(interpolator.orientation(), Quat::from_rotation_x(0.2));
    }

    #[test]
    fn test_shared_orientation_is_shared() {
        let shared = SharedOrientation::new(Quat::IDENTITY);
        let other = shared.clone();
        other.set(Quat::from_rotation_z(0.3));
        assert_eq!(shared.get(), Quat::from_rotation_z(0.3));
    }
}
