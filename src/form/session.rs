use std::rc::Rc;
use yew::prelude::*;

/// Which form instance a session belongs to. The hero, bottom-of-page and
/// mobile overlay forms are fully independent sessions.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum FormLocation {
    Hero,
    Bottom,
    Mobile,
}

impl FormLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormLocation::Hero => "hero",
            FormLocation::Bottom => "bottom",
            FormLocation::Mobile => "mobile-form",
        }
    }

    /// Wire value for the `formType` key, segments funnels on the sheet side.
    pub fn form_type(&self) -> &'static str {
        match self {
            FormLocation::Hero | FormLocation::Bottom => "two-step",
            FormLocation::Mobile => "three-step",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    Phone,
    Email,
    BenefitType,
    Name,
    Message,
}

/// All lead fields, empty until edited. A field is never removed once set,
/// only overwritten or cleared by a full reset.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct LeadFields {
    pub phone: String,
    pub email: String,
    pub benefit_type: String,
    pub name: String,
    pub message: String,
}

impl LeadFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::BenefitType => &self.benefit_type,
            Field::Name => &self.name,
            Field::Message => &self.message,
        }
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::BenefitType => self.benefit_type = value,
            Field::Name => self.name = value,
            Field::Message => self.message = value,
        }
    }
}

/// Fields that must be non-empty before the given step may submit.
///
/// The two-step plan is the hero/bottom form, the three-step plan is the
/// mobile overlay which splits the contact fields across screens.
pub fn required_fields(step: u32, total_steps: u32) -> &'static [Field] {
    match (total_steps, step) {
        (2, 1) => &[Field::Phone, Field::Email, Field::BenefitType],
        (2, _) => &[Field::Name, Field::Message],
        (3, 1) => &[Field::Phone],
        (3, 2) => &[Field::Email],
        _ => &[Field::BenefitType],
    }
}

/// Mutable state of one in-progress lead form.
///
/// Invariants: `submitting` and `succeeded` are never simultaneously true,
/// and `last_error` is only set while neither holds.
#[derive(Clone, PartialEq, Debug)]
pub struct FormSession {
    pub step: u32,
    pub total_steps: u32,
    pub fields: LeadFields,
    pub started: bool,
    pub submitting: bool,
    pub succeeded: bool,
    pub last_error: Option<String>,
}

impl FormSession {
    pub fn new(total_steps: u32) -> Self {
        Self {
            step: 1,
            total_steps,
            fields: LeadFields::default(),
            started: false,
            submitting: false,
            succeeded: false,
            last_error: None,
        }
    }

    pub fn is_final_step(&self) -> bool {
        self.step >= self.total_steps
    }

    /// Client-side validation for the current step: every required field
    /// non-empty. Malformed-but-present values are left to the native
    /// constraint UI (`type="email"`, `pattern=...`).
    pub fn step_is_valid(&self) -> bool {
        required_fields(self.step, self.total_steps)
            .iter()
            .all(|field| !self.fields.get(*field).trim().is_empty())
    }

    /// An abandonment signal is only meaningful for a touched, idle,
    /// unfinished session.
    pub fn is_abandonable(&self) -> bool {
        self.started && !self.submitting && !self.succeeded
    }
}

pub enum FormAction {
    /// User edited a field. Latches `started` on the first edit.
    Edit(Field, String),
    /// A submission attempt for the current step was dispatched.
    SubmitStarted,
    /// A non-final partial submission resolved; advance to the next step.
    StepAdvanced,
    /// The final submission resolved without transport error.
    SubmitSucceeded,
    /// A submission attempt failed at the transport level.
    SubmitFailed(String),
    /// Full reset back to step 1 with empty fields.
    Reset,
}

impl Reducible for FormSession {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: FormAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Edit(field, value) => {
                next.fields.set(field, value);
                next.started = true;
            }
            FormAction::SubmitStarted => {
                next.submitting = true;
                next.last_error = None;
            }
            FormAction::StepAdvanced => {
                next.submitting = false;
                if next.step < next.total_steps {
                    next.step += 1;
                }
            }
            FormAction::SubmitSucceeded => {
                next.submitting = false;
                next.succeeded = true;
                next.last_error = None;
            }
            FormAction::SubmitFailed(message) => {
                next.submitting = false;
                next.last_error = Some(message);
            }
            FormAction::Reset => {
                next = FormSession::new(next.total_steps);
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(session: FormSession, action: FormAction) -> FormSession {
        (*Rc::new(session).reduce(action)).clone()
    }

    fn filled_step1(total_steps: u32) -> FormSession {
        let session = FormSession::new(total_steps);
        let session = apply(session, FormAction::Edit(Field::Phone, "6155551234".into()));
        let session = apply(session, FormAction::Edit(Field::Email, "a@b.com".into()));
        apply(session, FormAction::Edit(Field::BenefitType, "SSDI".into()))
    }

    #[test]
    fn starts_at_step_one_with_empty_fields() {
        let session = FormSession::new(2);
        assert_eq!(session.step, 1);
        assert_eq!(session.fields, LeadFields::default());
        assert!(!session.started && !session.submitting && !session.succeeded);
        assert!(session.last_error.is_none());
    }

    #[test]
    fn first_edit_latches_started() {
        let session = FormSession::new(2);
        assert!(!session.started);
        let session = apply(session, FormAction::Edit(Field::Phone, "6".into()));
        assert!(session.started);
        // Further edits keep the latch, they do not toggle it.
        let session = apply(session, FormAction::Edit(Field::Phone, "61".into()));
        assert!(session.started);
        assert_eq!(session.fields.phone, "61");
    }

    #[test]
    fn step_one_requires_contact_fields() {
        let mut session = FormSession::new(2);
        assert!(!session.step_is_valid());
        session = apply(session, FormAction::Edit(Field::Phone, "6155551234".into()));
        session = apply(session, FormAction::Edit(Field::Email, "a@b.com".into()));
        assert!(!session.step_is_valid());
        session = apply(session, FormAction::Edit(Field::BenefitType, "SSDI".into()));
        assert!(session.step_is_valid());
    }

    #[test]
    fn final_step_requires_name_and_message() {
        let mut session = filled_step1(2);
        session = apply(session, FormAction::SubmitStarted);
        session = apply(session, FormAction::StepAdvanced);
        assert_eq!(session.step, 2);
        session = apply(session, FormAction::Edit(Field::Name, "Jane Doe".into()));
        // Message left empty blocks the submit.
        assert!(!session.step_is_valid());
        session = apply(session, FormAction::Edit(Field::Message, "Denied twice".into()));
        assert!(session.step_is_valid());
    }

    #[test]
    fn mobile_plan_collects_one_field_per_step() {
        assert_eq!(required_fields(1, 3), &[Field::Phone]);
        assert_eq!(required_fields(2, 3), &[Field::Email]);
        assert_eq!(required_fields(3, 3), &[Field::BenefitType]);
    }

    #[test]
    fn partial_submit_advances_on_resolve() {
        let session = filled_step1(2);
        let session = apply(session, FormAction::SubmitStarted);
        assert!(session.submitting);
        assert!(!session.is_final_step());
        let session = apply(session, FormAction::StepAdvanced);
        assert!(!session.submitting);
        assert_eq!(session.step, 2);
        // Collected fields survive the transition.
        assert_eq!(session.fields.phone, "6155551234");
    }

    #[test]
    fn transport_failure_keeps_step_and_sets_error() {
        let session = filled_step1(2);
        let step_before = session.step;
        let session = apply(session, FormAction::SubmitStarted);
        let session = apply(session, FormAction::SubmitFailed("Request failed".into()));
        assert!(!session.submitting);
        assert!(!session.succeeded);
        assert_eq!(session.step, step_before);
        assert_eq!(session.last_error.as_deref(), Some("Request failed"));
    }

    #[test]
    fn retry_clears_previous_error() {
        let session = filled_step1(2);
        let session = apply(session, FormAction::SubmitStarted);
        let session = apply(session, FormAction::SubmitFailed("Request failed".into()));
        let session = apply(session, FormAction::SubmitStarted);
        assert!(session.last_error.is_none());
        assert!(session.submitting);
    }

    #[test]
    fn final_success_is_never_concurrent_with_submitting() {
        let mut session = filled_step1(2);
        session = apply(session, FormAction::SubmitStarted);
        session = apply(session, FormAction::StepAdvanced);
        session = apply(session, FormAction::Edit(Field::Name, "Jane Doe".into()));
        session = apply(session, FormAction::Edit(Field::Message, "Need help".into()));
        session = apply(session, FormAction::SubmitStarted);
        assert!(session.submitting && !session.succeeded);
        session = apply(session, FormAction::SubmitSucceeded);
        assert!(session.succeeded && !session.submitting);
        assert!(session.last_error.is_none());
    }

    #[test]
    fn reset_is_idempotent() {
        let mut session = filled_step1(2);
        session = apply(session, FormAction::SubmitStarted);
        session = apply(session, FormAction::StepAdvanced);
        session = apply(session, FormAction::SubmitStarted);
        session = apply(session, FormAction::SubmitSucceeded);
        let once = apply(session.clone(), FormAction::Reset);
        let twice = apply(once.clone(), FormAction::Reset);
        assert_eq!(once, FormSession::new(2));
        assert_eq!(once, twice);
    }

    #[test]
    fn abandonment_guard_suppresses_untouched_and_finished_sessions() {
        let untouched = FormSession::new(2);
        assert!(!untouched.is_abandonable());

        let touched = apply(untouched, FormAction::Edit(Field::Phone, "6".into()));
        assert!(touched.is_abandonable());

        let in_flight = apply(touched.clone(), FormAction::SubmitStarted);
        assert!(!in_flight.is_abandonable());

        let mut done = filled_step1(2);
        done = apply(done, FormAction::SubmitStarted);
        done = apply(done, FormAction::StepAdvanced);
        done = apply(done, FormAction::Edit(Field::Name, "Jane".into()));
        done = apply(done, FormAction::Edit(Field::Message, "hi".into()));
        done = apply(done, FormAction::SubmitStarted);
        done = apply(done, FormAction::SubmitSucceeded);
        assert!(!done.is_abandonable());
    }

    #[test]
    fn step_never_advances_past_the_final_step() {
        let mut session = FormSession::new(3);
        for _ in 0..5 {
            session = apply(session, FormAction::StepAdvanced);
        }
        assert_eq!(session.step, 3);
    }
}
