//! Reservation wizard
//!
//! Four ordered steps: DateTime -> Contact -> Review -> Confirm.
//! Transitions go through the pure [`transition`] function, so an illegal
//! step change is a rejected value rather than a runtime `if` chain.
//! Forward transitions are gated on the draft's fields; `Previous` walks
//! back one step; `Restart` returns to the first step from anywhere.
//!
//! Confirming submits the whole draft to the reservation collaborator.
//! On success the draft resets to defaults and the wizard stays on the
//! confirmation step so the user sees the confirmation; on failure both
//! draft and step are preserved for retry.


use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::reservation::{MAX_GUESTS, MIN_GUESTS};
use shared::models::{Reservation, ReservationCreate, TimeSlot};

/// Wizard step, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    DateTime,
    Contact,
    Review,
    Confirm,
}

impl WizardStep {
    /// 1-based position, as shown on the progress indicator
    pub fn number(&self) -> u8 {
        match self {
            Self::DateTime => 1,
            Self::Contact => 2,
            Self::Review => 3,
            Self::Confirm => 4,
        }
    }
}

/// Wizard input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardEvent {
    Next,
    Previous,
    Restart,
}

/// In-progress, not-yet-submitted reservation form state
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: Option<NaiveDate>,
    pub time: Option<TimeSlot>,
    pub guests: i32,
    pub special_requests: String,
}

impl Default for ReservationDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            date: None,
            time: None,
            guests: 2,
            special_requests: String::new(),
        }
    }
}

impl ReservationDraft {
    /// Gate for leaving the date/time step
    ///
    /// Date, time and guests must all be present; the date may not be
    /// before `min_date` and guests must fall within the bookable range.
    pub fn validate_date_time(&self, min_date: NaiveDate) -> AppResult<()> {
        let date = self
            .date
            .ok_or_else(|| AppError::new(ErrorCode::StepIncomplete).with_detail("field", "date"))?;
        if date < min_date {
            return Err(AppError::new(ErrorCode::DateInPast)
                .with_detail("date", date.to_string())
                .with_detail("minDate", min_date.to_string()));
        }
        if self.time.is_none() {
            return Err(AppError::new(ErrorCode::StepIncomplete).with_detail("field", "time"));
        }
        if !(MIN_GUESTS..=MAX_GUESTS).contains(&self.guests) {
            return Err(AppError::new(ErrorCode::GuestCountOutOfRange)
                .with_detail("guests", self.guests));
        }
        Ok(())
    }

    /// Gate for leaving the contact step
    ///
    /// Name, email and phone must be non-empty; the email must be
    /// well-formed.
    pub fn validate_contact(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::new(ErrorCode::StepIncomplete).with_detail("field", "name"));
        }
        if self.email.trim().is_empty() {
            return Err(AppError::new(ErrorCode::StepIncomplete).with_detail("field", "email"));
        }
        if !validator::ValidateEmail::validate_email(&self.email) {
            return Err(AppError::with_message(ErrorCode::InvalidFormat, "Invalid email address")
                .with_detail("field", "email"));
        }
        if self.phone.trim().is_empty() {
            return Err(AppError::new(ErrorCode::StepIncomplete).with_detail("field", "phone"));
        }
        Ok(())
    }

    /// Build the submission payload; the draft must pass both gates
    pub fn to_create(&self, min_date: NaiveDate) -> AppResult<ReservationCreate> {
        self.validate_date_time(min_date)?;
        self.validate_contact()?;
        Ok(ReservationCreate {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            // both present after validate_date_time
            date: self.date.unwrap_or(min_date),
            time: self.time.unwrap_or(TimeSlot::FivePm),
            guests: self.guests,
            special_requests: if self.special_requests.trim().is_empty() {
                None
            } else {
                Some(self.special_requests.clone())
            },
        })
    }

    /// Reset to empty defaults (guests back to 2)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Pure transition function: `(step, event, draft) -> step | rejected`
///
/// Rejections never mutate anything; the caller keeps its current step.
pub fn transition(
    step: WizardStep,
    event: WizardEvent,
    draft: &ReservationDraft,
    min_date: NaiveDate,
) -> AppResult<WizardStep> {
    use WizardEvent::*;
    use WizardStep::*;

    match (step, event) {
        (_, Restart) => Ok(DateTime),

        (DateTime, Next) => {
            draft.validate_date_time(min_date)?;
            Ok(Contact)
        }
        (Contact, Next) => {
            draft.validate_contact()?;
            Ok(Review)
        }
        (Review, Next) => Ok(Confirm),
        (Confirm, Next) => Err(AppError::new(ErrorCode::TransitionInvalid)
            .with_detail("step", step.number())),

        (DateTime, Previous) => Err(AppError::new(ErrorCode::TransitionInvalid)
            .with_detail("step", step.number())),
        (Contact, Previous) => Ok(DateTime),
        (Review, Previous) => Ok(Contact),
        (Confirm, Previous) => Ok(Review),
    }
}

/// Boundary to the reservation collaborator
#[async_trait]
pub trait ReservationGateway: Send + Sync {
    async fn create(&self, reservation: ReservationCreate) -> AppResult<Reservation>;
}

/// Sequential reservation form
///
/// Owns the draft and the current step; the minimum selectable date is
/// fixed at construction (no past-dated reservations).
#[derive(Debug, Clone)]
pub struct ReservationWizard {
    step: WizardStep,
    draft: ReservationDraft,
    min_date: NaiveDate,
}

impl ReservationWizard {
    /// Create a wizard whose minimum date is today
    pub fn new() -> Self {
        Self::with_min_date(chrono::Local::now().date_naive())
    }

    /// Create a wizard with an explicit minimum date
    pub fn with_min_date(min_date: NaiveDate) -> Self {
        Self {
            step: WizardStep::DateTime,
            draft: ReservationDraft::default(),
            min_date,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn min_date(&self) -> NaiveDate {
        self.min_date
    }

    pub fn draft(&self) -> &ReservationDraft {
        &self.draft
    }

    /// Mutable access for field-by-field form input
    pub fn draft_mut(&mut self) -> &mut ReservationDraft {
        &mut self.draft
    }

    /// Set the time from its display label, e.g. "7:00 PM"
    pub fn set_time_label(&mut self, label: &str) -> AppResult<()> {
        let slot = TimeSlot::parse(label).ok_or_else(|| {
            AppError::new(ErrorCode::TimeSlotInvalid).with_detail("time", label)
        })?;
        self.draft.time = Some(slot);
        Ok(())
    }

    /// Advance one step; gated on the current step's required fields
    pub fn next(&mut self) -> AppResult<WizardStep> {
        self.apply(WizardEvent::Next)
    }

    /// Walk back one step
    pub fn previous(&mut self) -> AppResult<WizardStep> {
        self.apply(WizardEvent::Previous)
    }

    /// Return to the first step, keeping the draft
    pub fn restart(&mut self) -> WizardStep {
        self.step = WizardStep::DateTime;
        self.step
    }

    fn apply(&mut self, event: WizardEvent) -> AppResult<WizardStep> {
        self.step = transition(self.step, event, &self.draft, self.min_date)?;
        Ok(self.step)
    }

    /// Submit the draft to the reservation collaborator
    ///
    /// Only valid on the confirmation step. On success the draft resets
    /// to defaults and the wizard stays on the confirmation step; on
    /// failure the draft is preserved so the user may retry.
    pub async fn confirm<G: ReservationGateway>(&mut self, gateway: &G) -> AppResult<Reservation> {
        if self.step != WizardStep::Confirm {
            return Err(AppError::new(ErrorCode::TransitionInvalid)
                .with_detail("step", self.step.number()));
        }
        let payload = self.draft.to_create(self.min_date)?;

        let reservation = gateway.create(payload).await.inspect_err(|err| {
            tracing::warn!(code = %err.code, "reservation submission failed: {}", err.message);
        })?;

        tracing::info!(
            id = %reservation.id,
            date = %reservation.date,
            time = %reservation.time,
            guests = reservation.guests,
            "reservation confirmed"
        );
        self.draft.reset();
        Ok(reservation)
    }
}

impl Default for ReservationWizard {
    fn default() -> Self {
        Self::new()
    }
}
