//! Deferred callbacks.
//!
//! Browser timers are reached through [`Scheduler`] so that debouncing and the
//! simulated submission timeline can run against a virtual clock in tests.
//! A [`TaskHandle`] must be either cancelled or detached: dropping a
//! [`gloo_timers::callback::Timeout`] clears the timer, so a task that should
//! outlive its handle has to be detached explicitly.

use gloo_timers::callback::Timeout;

pub trait TaskHandle {
    /// Prevents the task from running if it has not run yet.
    fn cancel(self);
    /// Lets the task run even though the handle goes away.
    fn detach(self);
}

pub trait Scheduler: Clone + 'static {
    type Handle: TaskHandle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Schedules on the window's `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

impl TaskHandle for Timeout {
    fn cancel(self) {
        drop(self);
    }

    fn detach(self) {
        self.forget();
    }
}

/// Trailing-edge debounce: every trigger replaces the pending task and
/// restarts the quiet period.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    quiet_ms: u32,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, quiet_ms: u32) -> Self {
        Self {
            scheduler,
            quiet_ms,
            pending: None,
        }
    }

    pub fn trigger(&mut self, task: impl FnOnce() + 'static) {
        self.cancel();
        self.pending = Some(self.scheduler.schedule(self.quiet_ms, Box::new(task)));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }
}


#[cfg(test)]
mod tests {
    use super::manual::ManualScheduler;
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, impl Fn() -> Box<dyn FnOnce()>) {
        let count = Rc::new(Cell::new(0));
        let make = {
            let count = Rc::clone(&count);
            move || {
                let count = Rc::clone(&count);
                Box::new(move || count.set(count.get() + 1)) as Box<dyn FnOnce()>
            }
        };
        (count, make)
    }

    #[test]
    fn burst_inside_quiet_period_runs_once() {
        let scheduler = ManualScheduler::default();
        let mut debouncer = Debouncer::new(scheduler.clone(), 10);
        let (count, task) = counter();

        for _ in 0..5 {
            debouncer.trigger(task());
            scheduler.advance(3);
        }
        assert_eq!(count.get(), 0);

        scheduler.advance(10);
        assert_eq!(count.get(), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn separated_triggers_each_run() {
        let scheduler = ManualScheduler::default();
        let mut debouncer = Debouncer::new(scheduler.clone(), 10);
        let (count, task) = counter();

        debouncer.trigger(task());
        scheduler.advance(10);
        debouncer.trigger(task());
        scheduler.advance(10);

        assert_eq!(count.get(), 2);
    }

    #[test]
    fn continuous_triggers_defer_indefinitely() {
        let scheduler = ManualScheduler::default();
        let mut debouncer = Debouncer::new(scheduler.clone(), 10);
        let (count, task) = counter();

        for _ in 0..100 {
            debouncer.trigger(task());
            scheduler.advance(9);
        }
        assert_eq!(count.get(), 0);
        scheduler.advance(1);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn cancel_drops_pending_task() {
        let scheduler = ManualScheduler::default();
        let mut debouncer = Debouncer::new(scheduler.clone(), 10);
        let (count, task) = counter();

        debouncer.trigger(task());
        debouncer.cancel();
        scheduler.advance(50);

        assert_eq!(count.get(), 0);
    }

    #[test]
    fn nested_tasks_run_within_window() {
        let scheduler = ManualScheduler::default();
        let fired_at = Rc::new(Cell::new(0));
        {
            let inner_scheduler = scheduler.clone();
            let fired_at = Rc::clone(&fired_at);
            scheduler
                .schedule(
                    5,
                    Box::new(move || {
                        let clock = inner_scheduler.clone();
                        inner_scheduler
                            .schedule(7, Box::new(move || fired_at.set(clock.now())))
                            .detach();
                    }),
                )
                .detach();
        }

        scheduler.advance(20);
        assert_eq!(fired_at.get(), 12);
        assert_eq!(scheduler.now(), 20);
    }
}
