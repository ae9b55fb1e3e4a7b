use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError, RwLock};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, error, warn};

use crate::refresh::clock::{Clock, SystemClock};
use crate::refresh::errors::RefreshError;

/// Error an update function may report. The scheduler only logs it.
pub type UpdateError = Box<dyn std::error::Error + Send + Sync>;

/// Outcome of one update: a new value, `None` for "nothing to show", or a
/// failure that keeps the previous value.
pub type UpdateResult<T> = Result<Option<T>, UpdateError>;

type UpdateFn<T> = dyn Fn(Option<&T>) -> UpdateResult<T> + Send + Sync;

fn lock<G>(mutex: &Mutex<G>) -> MutexGuard<'_, G> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn validate_interval(interval: Duration) -> Result<(), RefreshError> {
    if interval.is_zero() {
        return Err(RefreshError::InvalidInterval { interval });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy)]
struct Timing {
    interval: Duration,
    last_attempt: Option<Instant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attempt {
    /// Nothing has ever been computed; run on the caller's thread.
    First,
    /// Interval elapsed; run on a worker thread.
    Background,
}

/// State shared between the scheduler and its worker thread.
struct Shared<T> {
    name: String,
    update: Box<UpdateFn<T>>,
    value: RwLock<Option<Arc<T>>>,
    in_flight: AtomicBool,
}

impl<T> Shared<T> {
    fn snapshot(&self) -> Option<Arc<T>> {
        self.value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn recompute(&self) {
        let previous = self.snapshot();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            (self.update)(previous.as_deref())
        }));

        match outcome {
            Ok(Ok(value)) => {
                let has_value = value.is_some();
                *self.value.write().unwrap_or_else(PoisonError::into_inner) =
                    value.map(Arc::new);
                debug!(
                    event = "core.refresh.update_completed",
                    segment = %self.name,
                    has_value = has_value
                );
            }
            Ok(Err(e)) => {
                warn!(
                    event = "core.refresh.update_failed",
                    segment = %self.name,
                    error = %e
                );
            }
            Err(_) => {
                error!(event = "core.refresh.update_panicked", segment = %self.name);
            }
        }

        self.in_flight.store(false, Ordering::Release);
    }
}

/// Cache of one value that is recomputed in the background at most once per
/// interval.
///
/// - The first [`current_value`](Self::current_value) call computes
///   synchronously, so the first render already has data. Callers arriving
///   while that first computation runs block until it finishes.
/// - Later calls return the cached value immediately and, once the interval
///   has elapsed since the last attempt started, kick off a recompute on a
///   worker thread.
/// - At most one recompute is in flight; a tick that falls due while one is
///   running is skipped, not queued.
/// - A failing or panicking update keeps the previous value. The attempt
///   still counts, so failures are retried once per interval, not per render.
///
/// Values are stored as `Arc<T>` and swapped whole, so readers see either the
/// old or the new value, never a partial one.
pub struct RefreshScheduler<T> {
    shared: Arc<Shared<T>>,
    timing: Mutex<Timing>,
    clock: Arc<dyn Clock>,
    worker: Mutex<Option<JoinHandle<()>>>,
    first_done: Mutex<bool>,
    first_ready: Condvar,
}

impl<T: Send + Sync + 'static> RefreshScheduler<T> {
    /// Create a scheduler driven by the system clock.
    pub fn new<F>(name: impl Into<String>, interval: Duration, update: F) -> Result<Self, RefreshError>
    where
        F: Fn(Option<&T>) -> UpdateResult<T> + Send + Sync + 'static,
    {
        Self::with_clock(name, interval, Arc::new(SystemClock), update)
    }

    /// Create a scheduler with an explicit time source.
    pub fn with_clock<F>(
        name: impl Into<String>,
        interval: Duration,
        clock: Arc<dyn Clock>,
        update: F,
    ) -> Result<Self, RefreshError>
    where
        F: Fn(Option<&T>) -> UpdateResult<T> + Send + Sync + 'static,
    {
        validate_interval(interval)?;

        Ok(Self {
            shared: Arc::new(Shared {
                name: name.into(),
                update: Box::new(update),
                value: RwLock::new(None),
                in_flight: AtomicBool::new(false),
            }),
            timing: Mutex::new(Timing {
                interval,
                last_attempt: None,
            }),
            clock,
            worker: Mutex::new(None),
            first_done: Mutex::new(false),
            first_ready: Condvar::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.shared.name
    }

    pub fn interval(&self) -> Duration {
        lock(&self.timing).interval
    }

    /// Replace the refresh interval. Only future scheduling is affected.
    pub fn set_interval(&self, interval: Duration) -> Result<(), RefreshError> {
        validate_interval(interval)?;
        lock(&self.timing).interval = interval;
        debug!(
            event = "core.refresh.interval_changed",
            segment = %self.shared.name,
            interval_ms = interval.as_millis() as u64
        );
        Ok(())
    }

    /// When the most recent recompute started, if any.
    pub fn last_attempt(&self) -> Option<Instant> {
        lock(&self.timing).last_attempt
    }

    pub fn is_refreshing(&self) -> bool {
        self.shared.in_flight.load(Ordering::Acquire)
    }

    /// The cached value, without scheduling anything.
    pub fn snapshot(&self) -> Option<Arc<T>> {
        self.shared.snapshot()
    }

    /// Return the cached value, scheduling a recompute if one is due.
    pub fn current_value(&self) -> Option<Arc<T>> {
        match self.begin_attempt(self.clock.now()) {
            Some(Attempt::First) => {
                self.shared.recompute();
                self.finish_first();
            }
            Some(Attempt::Background) => self.spawn_recompute(),
            None => self.wait_for_first(),
        }
        self.shared.snapshot()
    }

    /// Block until the background recompute started last (if any) finishes.
    pub fn wait_for_refresh(&self) {
        let handle = lock(&self.worker).take();
        if let Some(handle) = handle
            && handle.join().is_err()
        {
            error!(event = "core.refresh.worker_join_failed", segment = %self.shared.name);
        }
    }

    fn finish_first(&self) {
        *lock(&self.first_done) = true;
        self.first_ready.notify_all();
    }

    /// Block while the first computation is still running on another thread.
    fn wait_for_first(&self) {
        let mut done = lock(&self.first_done);
        while !*done {
            done = self
                .first_ready
                .wait(done)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Decide whether an attempt starts now and claim the in-flight slot.
    ///
    /// The timing lock is held across the check and the claim so two racing
    /// callers cannot both start an attempt for the same tick.
    fn begin_attempt(&self, now: Instant) -> Option<Attempt> {
        let mut timing = lock(&self.timing);

        let attempt = match timing.last_attempt {
            None => Attempt::First,
            Some(at) if now.saturating_duration_since(at) >= timing.interval => {
                Attempt::Background
            }
            Some(_) => return None,
        };

        if self
            .shared
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!(event = "core.refresh.tick_skipped", segment = %self.shared.name);
            return None;
        }

        timing.last_attempt = Some(now);
        Some(attempt)
    }

    fn spawn_recompute(&self) {
        let shared = Arc::clone(&self.shared);
        let spawned = std::thread::Builder::new()
            .name(format!("muxline-refresh-{}", self.shared.name))
            .spawn(move || shared.recompute());

        match spawned {
            Ok(handle) => {
                // Any previous handle belongs to a finished recompute.
                *lock(&self.worker) = Some(handle);
            }
            Err(e) => {
                error!(
                    event = "core.refresh.spawn_failed",
                    segment = %self.shared.name,
                    error = %e
                );
                self.shared.in_flight.store(false, Ordering::Release);
            }
        }
    }
}

impl<T> fmt::Debug for RefreshScheduler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timing = *lock(&self.timing);
        f.debug_struct("RefreshScheduler")
            .field("name", &self.shared.name)
            .field("interval", &timing.interval)
            .field("last_attempt", &timing.last_attempt)
            .field("in_flight", &self.shared.in_flight.load(Ordering::Acquire))
            .finish_non_exhaustive()
    }
}
