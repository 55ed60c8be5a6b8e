use std::rc::Rc;

use log::{debug, info};
use yew::prelude::*;

use super::validation::{validate, Field, InquiryValues, ValidationReport};

pub const SUBMIT_LABEL: &str = "Send Inquiry";
pub const BUSY_LABEL: &str = "Sending...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

/// Visibility of the success banner. `FadingOut` keeps it in layout while the
/// `show` class transition plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuccessBanner {
    Hidden,
    Shown,
    FadingOut,
}

impl SuccessBanner {
    pub fn display(self) -> &'static str {
        match self {
            SuccessBanner::Hidden => "none",
            SuccessBanner::Shown | SuccessBanner::FadingOut => "block",
        }
    }

    pub fn is_shown(self) -> bool {
        self == SuccessBanner::Shown
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InquiryState {
    pub attached: bool,
    pub values: InquiryValues,
    pub errors: ValidationReport,
    pub phase: Phase,
    pub banner: SuccessBanner,
    /// Incremented each time a submission starts; timers carry it back.
    pub attempt: u32,
}

impl Default for InquiryState {
    fn default() -> Self {
        Self {
            attached: false,
            values: InquiryValues::default(),
            errors: ValidationReport::default(),
            phase: Phase::Idle,
            banner: SuccessBanner::Hidden,
            attempt: 0,
        }
    }
}

impl InquiryState {
    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_busy() {
            BUSY_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum InquiryAction {
    Attached,
    Input(Field, String),
    Focus(Field),
    SelectService(String),
    Submit,
    Completed { attempt: u32 },
    HideSuccess { attempt: u32 },
    RemoveSuccess { attempt: u32 },
}

impl Reducible for InquiryState {
    type Action = InquiryAction;

    fn reduce(self: Rc<Self>, action: InquiryAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            InquiryAction::Attached => next.attached = true,
            InquiryAction::Input(field, value) => {
                next.values.set(field, value);
                next.errors.clear(field);
            }
            InquiryAction::Focus(field) => {
                if self.errors.get(field).is_none() {
                    return self;
                }
                next.errors.clear(field);
            }
            InquiryAction::SelectService(service) => next.values.service = service,
            InquiryAction::Submit => {
                if !self.attached || self.is_busy() {
                    debug!("Ignoring submit (attached: {}, busy: {})", self.attached, self.is_busy());
                    return self;
                }
                next.banner = SuccessBanner::Hidden;
                next.errors = validate(&self.values);
                if next.errors.is_valid() {
                    next.phase = Phase::Submitting;
                    next.attempt += 1;
                    debug!("Inquiry attempt {} accepted", next.attempt);
                } else {
                    debug!(
                        "Inquiry rejected: {:?}",
                        next.errors.failed_fields().collect::<Vec<_>>()
                    );
                }
            }
            InquiryAction::Completed { attempt } => {
                if attempt != self.attempt || !self.is_busy() {
                    return self;
                }
                next.errors = ValidationReport::default();
                next.values = InquiryValues::default();
                next.banner = SuccessBanner::Shown;
                next.phase = Phase::Idle;
                info!("Inquiry {} submitted", attempt);
            }
            InquiryAction::HideSuccess { attempt } => {
                if attempt != self.attempt || self.banner != SuccessBanner::Shown {
                    return self;
                }
                next.banner = SuccessBanner::FadingOut;
            }
            InquiryAction::RemoveSuccess { attempt } => {
                if attempt != self.attempt || self.banner != SuccessBanner::FadingOut {
                    return self;
                }
                next.banner = SuccessBanner::Hidden;
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::validation::FieldError;

    fn attached() -> Rc<InquiryState> {
        Rc::new(InquiryState::default()).reduce(InquiryAction::Attached)
    }

    fn filled() -> Rc<InquiryState> {
        let mut state = attached();
        for (field, value) in [
            (Field::Name, "Sam"),
            (Field::Email, "sam@example.com"),
            (Field::Phone, "0400 000 000"),
            (Field::Message, "Hello"),
        ] {
            state = state.reduce(InquiryAction::Input(field, value.to_string()));
        }
        state
    }

    #[test]
    fn detached_form_ignores_submit() {
        let state = Rc::new(InquiryState::default()).reduce(InquiryAction::Submit);
        assert_eq!(state.phase, Phase::Idle);
        assert!(state.errors.is_valid());
        assert_eq!(state.attempt, 0);
    }

    #[test]
    fn invalid_submit_shows_errors_without_submitting() {
        let state = attached()
            .reduce(InquiryAction::Input(Field::Name, "Sam".to_string()))
            .reduce(InquiryAction::Submit);

        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.attempt, 0);
        assert_eq!(state.errors.name, None);
        assert_eq!(state.errors.email, Some(FieldError::EmailRequired));
        assert_eq!(state.errors.phone, Some(FieldError::PhoneRequired));
        assert_eq!(state.errors.message, Some(FieldError::MessageRequired));
        assert_eq!(state.banner, SuccessBanner::Hidden);
    }

    #[test]
    fn missing_single_field_marks_only_that_field() {
        let state = filled()
            .reduce(InquiryAction::Input(Field::Phone, String::new()))
            .reduce(InquiryAction::Submit);

        assert_eq!(state.errors.failed_fields().collect::<Vec<_>>(), vec![Field::Phone]);
        assert!(!state.banner.is_shown());
    }

    #[test]
    fn input_clears_only_that_field_without_revalidating() {
        let state = attached().reduce(InquiryAction::Submit);
        assert_eq!(state.errors.failed_fields().count(), 4);

        let state = state.reduce(InquiryAction::Input(Field::Email, "not-an-email".to_string()));
        assert_eq!(state.errors.email, None);
        assert_eq!(state.errors.failed_fields().count(), 3);
    }

    #[test]
    fn focus_clears_error() {
        let state = attached()
            .reduce(InquiryAction::Submit)
            .reduce(InquiryAction::Focus(Field::Message));
        assert_eq!(state.errors.message, None);
        assert_eq!(state.errors.name, Some(FieldError::NameRequired));
    }

    #[test]
    fn valid_submit_enters_busy_window() {
        let state = filled().reduce(InquiryAction::Submit);
        assert!(state.is_busy());
        assert_eq!(state.submit_label(), BUSY_LABEL);
        assert_eq!(state.attempt, 1);
        // values stay until the simulated latency elapses
        assert_eq!(state.values.name, "Sam");
    }

    #[test]
    fn second_submit_during_busy_window_is_ignored() {
        let state = filled().reduce(InquiryAction::Submit);
        let again = Rc::clone(&state).reduce(InquiryAction::Submit);
        assert!(Rc::ptr_eq(&state, &again));
        assert_eq!(again.attempt, 1);
    }

    #[test]
    fn completion_resets_form_and_shows_banner() {
        let state = filled()
            .reduce(InquiryAction::SelectService("maintenance".to_string()))
            .reduce(InquiryAction::Submit)
            .reduce(InquiryAction::Completed { attempt: 1 });

        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.values, InquiryValues::default());
        assert!(state.errors.is_valid());
        assert!(state.banner.is_shown());
        assert_eq!(state.submit_label(), SUBMIT_LABEL);
    }

    #[test]
    fn banner_fades_then_leaves_layout() {
        let state = filled()
            .reduce(InquiryAction::Submit)
            .reduce(InquiryAction::Completed { attempt: 1 })
            .reduce(InquiryAction::HideSuccess { attempt: 1 });
        assert_eq!(state.banner, SuccessBanner::FadingOut);
        assert_eq!(state.banner.display(), "block");

        let state = state.reduce(InquiryAction::RemoveSuccess { attempt: 1 });
        assert_eq!(state.banner, SuccessBanner::Hidden);
        assert_eq!(state.banner.display(), "none");
    }

    #[test]
    fn stale_timers_do_not_touch_newer_attempt() {
        let state = filled()
            .reduce(InquiryAction::Submit)
            .reduce(InquiryAction::Completed { attempt: 1 });
        let state = state
            .reduce(InquiryAction::Input(Field::Name, "Kim".to_string()))
            .reduce(InquiryAction::Input(Field::Email, "kim@example.com".to_string()))
            .reduce(InquiryAction::Input(Field::Phone, "1".to_string()))
            .reduce(InquiryAction::Input(Field::Message, "Again".to_string()))
            .reduce(InquiryAction::Submit)
            .reduce(InquiryAction::Completed { attempt: 2 })
            .reduce(InquiryAction::HideSuccess { attempt: 1 })
            .reduce(InquiryAction::Completed { attempt: 1 });

        assert_eq!(state.attempt, 2);
        assert!(state.banner.is_shown());
    }

    #[test]
    fn new_submit_hides_previous_banner() {
        let state = filled()
            .reduce(InquiryAction::Submit)
            .reduce(InquiryAction::Completed { attempt: 1 })
            .reduce(InquiryAction::Submit);
        assert_eq!(state.banner, SuccessBanner::Hidden);
        assert_eq!(state.phase, Phase::Idle);
    }
}
