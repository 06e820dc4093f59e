//! Payment panel state machine.
//!
//! All transitions go through [`PaymentSession::reduce`], so the panel's
//! behavior can be driven and checked without a browser. Timers live in
//! the component; they only dispatch actions here.

use crate::config::{COUNTDOWN_SECONDS, REFERENCE_LENGTH, URGENT_BELOW_SECONDS};
use crate::utils::sanitize_reference;
use log::{debug, info};
use std::rc::Rc;
use yew::Reducible;

/// Events the payment panel reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentAction {
    /// One second elapsed.
    Tick,
    /// Raw text from the reference-number field.
    ReferenceInput(String),
    Submit,
    CopySucceeded,
    /// Hide timer for the copy confirmation fired.
    CopyFeedbackExpired(u32),
    /// Hide timer for the submission acknowledgment fired.
    AcknowledgmentExpired(u32),
}

/// Local state of one payment panel instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentSession {
    seconds_remaining: u32,
    reference_number: String,
    copy_feedback_active: bool,
    submission_acknowledged: bool,
    // Bumped on every trigger; a hide timer only applies to its own generation.
    copy_generation: u32,
    acknowledgment_generation: u32,
}

impl Default for PaymentSession {
    fn default() -> Self {
        Self::new(COUNTDOWN_SECONDS)
    }
}

impl PaymentSession {
    pub fn new(countdown_seconds: u32) -> Self {
        Self {
            seconds_remaining: countdown_seconds,
            reference_number: String::new(),
            copy_feedback_active: false,
            submission_acknowledged: false,
            copy_generation: 0,
            acknowledgment_generation: 0,
        }
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn reference_number(&self) -> &str {
        &self.reference_number
    }

    pub fn reference_len(&self) -> usize {
        self.reference_number.len()
    }

    pub fn is_urgent(&self) -> bool {
        self.seconds_remaining < URGENT_BELOW_SECONDS
    }

    pub fn is_expired(&self) -> bool {
        self.seconds_remaining == 0
    }

    /// Partially typed reference: non-empty but short.
    pub fn is_reference_invalid(&self) -> bool {
        !self.reference_number.is_empty() && self.reference_number.len() < REFERENCE_LENGTH
    }

    pub fn can_submit(&self) -> bool {
        self.reference_number.len() == REFERENCE_LENGTH
    }

    pub fn copy_feedback_active(&self) -> bool {
        self.copy_feedback_active
    }

    pub fn submission_acknowledged(&self) -> bool {
        self.submission_acknowledged
    }

    pub fn copy_generation(&self) -> u32 {
        self.copy_generation
    }

    pub fn acknowledgment_generation(&self) -> u32 {
        self.acknowledgment_generation
    }

    /// Apply `action` in place.
    pub fn apply(&mut self, action: PaymentAction) {
        match action {
            PaymentAction::Tick => {
                if self.seconds_remaining > 0 {
                    self.seconds_remaining -= 1;
                    if self.seconds_remaining == 0 {
                        info!("Payment countdown reached zero");
                    }
                }
            }
            PaymentAction::ReferenceInput(raw) => {
                self.reference_number = sanitize_reference(&raw);
            }
            PaymentAction::Submit => {
                if !self.can_submit() {
                    debug!(
                        "Ignoring submit with {}/{} digits",
                        self.reference_number.len(),
                        REFERENCE_LENGTH
                    );
                    return;
                }
                info!("Reference number submitted");
                self.reference_number.clear();
                self.submission_acknowledged = true;
                self.acknowledgment_generation = self.acknowledgment_generation.wrapping_add(1);
            }
            PaymentAction::CopySucceeded => {
                self.copy_feedback_active = true;
                self.copy_generation = self.copy_generation.wrapping_add(1);
            }
            PaymentAction::CopyFeedbackExpired(generation) => {
                if generation == self.copy_generation {
                    self.copy_feedback_active = false;
                }
            }
            PaymentAction::AcknowledgmentExpired(generation) => {
                if generation == self.acknowledgment_generation {
                    self.submission_acknowledged = false;
                }
            }
        }
    }
}

impl Reducible for PaymentSession {
    type Action = PaymentAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
