//! Timeline of a simulated inquiry submission.
//!
//! Once started it cannot be aborted: every step is detached from its handle.

use log::debug;

use super::state::InquiryAction;
use super::validation::InquiryValues;
use crate::config::SubmissionTimings;
use crate::schedule::{Scheduler, TaskHandle};

pub fn start<S, D, R>(
    scheduler: &S,
    timings: SubmissionTimings,
    attempt: u32,
    values: &InquiryValues,
    dispatch: D,
    reveal: R,
) where
    S: Scheduler,
    D: Fn(InquiryAction) + Clone + 'static,
    R: FnOnce() + 'static,
{
    match serde_json::to_string(values) {
        Ok(payload) => debug!("Simulating submission of inquiry {}: {}", attempt, payload),
        Err(e) => debug!("Simulating submission of inquiry {} (payload not serializable: {})", attempt, e),
    }

    let inner = scheduler.clone();
    scheduler
        .schedule(
            timings.latency_ms,
            Box::new(move || {
                dispatch(InquiryAction::Completed { attempt });

                inner
                    .schedule(timings.reveal_scroll_delay_ms, Box::new(reveal))
                    .detach();

                let fade = inner.clone();
                inner
                    .schedule(
                        timings.success_display_ms,
                        Box::new(move || {
                            dispatch(InquiryAction::HideSuccess { attempt });
                            fade.schedule(
                                timings.fade_out_ms,
                                Box::new(move || dispatch(InquiryAction::RemoveSuccess { attempt })),
                            )
                            .detach();
                        }),
                    )
                    .detach();
            }),
        )
        .detach();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::state::{InquiryState, Phase, SuccessBanner};
    use crate::form::validation::Field;
    use crate::schedule::manual::ManualScheduler;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use yew::prelude::Reducible;

    /// Reducer state driven the way `use_reducer` would drive it.
    #[derive(Clone)]
    struct Harness {
        state: Rc<RefCell<Rc<InquiryState>>>,
    }

    impl Harness {
        fn filled() -> Self {
            let mut state = Rc::new(InquiryState::default()).reduce(InquiryAction::Attached);
            for field in Field::ALL {
                let value = match field {
                    Field::Email => "pat@example.com".to_string(),
                    _ => format!("some {}", field.id()),
                };
                state = state.reduce(InquiryAction::Input(field, value));
            }
            Self {
                state: Rc::new(RefCell::new(state)),
            }
        }

        fn dispatch(&self, action: InquiryAction) {
            let current = Rc::clone(&self.state.borrow());
            *self.state.borrow_mut() = current.reduce(action);
        }

        fn current(&self) -> Rc<InquiryState> {
            Rc::clone(&self.state.borrow())
        }

        fn dispatcher(&self) -> impl Fn(InquiryAction) + Clone + 'static {
            let harness = self.clone();
            move |action| harness.dispatch(action)
        }
    }

    fn submit(harness: &Harness, scheduler: &ManualScheduler, revealed_at: &Rc<Cell<Option<u64>>>) {
        harness.dispatch(InquiryAction::Submit);
        let state = harness.current();
        assert!(state.is_busy());

        let clock = scheduler.clone();
        let revealed_at = Rc::clone(revealed_at);
        start(
            scheduler,
            SubmissionTimings::default(),
            state.attempt,
            &state.values,
            harness.dispatcher(),
            move || revealed_at.set(Some(clock.now())),
        );
    }

    #[test]
    fn full_timeline() {
        let scheduler = ManualScheduler::default();
        let harness = Harness::filled();
        let revealed_at = Rc::new(Cell::new(None));
        submit(&harness, &scheduler, &revealed_at);

        scheduler.advance(1_499);
        assert!(harness.current().is_busy());
        assert_eq!(harness.current().banner, SuccessBanner::Hidden);

        scheduler.advance(1);
        let state = harness.current();
        assert_eq!(state.phase, Phase::Idle);
        assert!(state.banner.is_shown());
        assert!(state.values.name.is_empty());
        assert_eq!(revealed_at.get(), None);

        scheduler.advance(100);
        assert_eq!(revealed_at.get(), Some(1_600));

        scheduler.advance(4_899);
        assert!(harness.current().banner.is_shown());
        scheduler.advance(1);
        assert_eq!(harness.current().banner, SuccessBanner::FadingOut);

        scheduler.advance(300);
        assert_eq!(harness.current().banner, SuccessBanner::Hidden);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn submit_inside_busy_window_does_not_start_second_attempt() {
        let scheduler = ManualScheduler::default();
        let harness = Harness::filled();
        let revealed_at = Rc::new(Cell::new(None));
        submit(&harness, &scheduler, &revealed_at);

        scheduler.advance(700);
        harness.dispatch(InquiryAction::Submit);
        assert_eq!(harness.current().attempt, 1);

        scheduler.advance(800);
        assert!(!harness.current().is_busy());
        assert_eq!(harness.current().attempt, 1);
    }
}
