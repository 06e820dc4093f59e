//! Timer hooks for the payment panel.
//!
//! Each timer is a `gloo_timers` [`Timeout`] owned by an effect. Dropping
//! the handle cancels it, so the effect's cleanup covers both unmount and
//! a dependency change superseding a pending timer. What to schedule is
//! decided by the plain functions below.

use crate::config::{ACKNOWLEDGMENT_MS, COPY_FEEDBACK_MS, TICK_MS};
use crate::session::{PaymentAction, PaymentSession};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Delay before the next countdown tick, or `None` once time is up.
pub fn next_tick_delay(seconds_remaining: u32) -> Option<u32> {
    (seconds_remaining > 0).then_some(TICK_MS)
}

/// Delay before the copy confirmation hides, while it is shown.
pub fn copy_feedback_delay(session: &PaymentSession) -> Option<u32> {
    session.copy_feedback_active().then_some(COPY_FEEDBACK_MS)
}

/// Delay before the submission acknowledgment hides, while it is shown.
pub fn acknowledgment_delay(session: &PaymentSession) -> Option<u32> {
    session.submission_acknowledged().then_some(ACKNOWLEDGMENT_MS)
}

/// Dispatch `Tick` one second after every change of the remaining time,
/// for as long as time remains.
#[hook]
pub fn use_countdown(session: UseReducerHandle<PaymentSession>) {
    let remaining = session.seconds_remaining();
    use_effect_with(remaining, move |&remaining| {
        let tick = next_tick_delay(remaining)
            .map(|delay| Timeout::new(delay, move || session.dispatch(PaymentAction::Tick)));
        move || drop(tick)
    });
}

/// Emit `on_expire` with `generation` after `delay_ms`. A new generation
/// or delay restarts the wait; `None` schedules nothing.
#[hook]
pub fn use_expiring_message(delay_ms: Option<u32>, generation: u32, on_expire: Callback<u32>) {
    use_effect_with((delay_ms, generation), move |&(delay_ms, generation)| {
        let hide = delay_ms.map(|delay| Timeout::new(delay, move || on_expire.emit(generation)));
        move || drop(hide)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_countdown(mut session: PaymentSession) -> (PaymentSession, u32) {
        let mut elapsed_ms = 0;
        while let Some(delay) = next_tick_delay(session.seconds_remaining()) {
            elapsed_ms += delay;
            session.apply(PaymentAction::Tick);
        }
        (session, elapsed_ms)
    }

    #[test]
    fn test_tick_every_second_until_zero() {
        assert_eq!(next_tick_delay(300), Some(1_000));
        assert_eq!(next_tick_delay(1), Some(1_000));
        assert_eq!(next_tick_delay(0), None);

        let (session, elapsed_ms) = run_countdown(PaymentSession::default());
        assert_eq!(session.seconds_remaining(), 0);
        assert_eq!(elapsed_ms, 300_000);
    }

    #[test]
    fn test_copy_feedback_hides_after_two_seconds() {
        let mut session = PaymentSession::default();
        assert_eq!(copy_feedback_delay(&session), None);

        session.apply(PaymentAction::CopySucceeded);
        assert_eq!(copy_feedback_delay(&session), Some(2_000));
        assert_eq!(acknowledgment_delay(&session), None);

        session.apply(PaymentAction::CopyFeedbackExpired(session.copy_generation()));
        assert_eq!(copy_feedback_delay(&session), None);
    }

    #[test]
    fn test_acknowledgment_hides_after_ten_seconds() {
        let mut session = PaymentSession::default();
        session.apply(PaymentAction::ReferenceInput("1234567890123".into()));
        assert_eq!(session.reference_number(), "123456789012");
        session.apply(PaymentAction::Submit);

        assert_eq!(acknowledgment_delay(&session), Some(10_000));
        assert_eq!(copy_feedback_delay(&session), None);

        // Field is empty now, so a second submit changes nothing
        let generation = session.acknowledgment_generation();
        session.apply(PaymentAction::Submit);
        assert_eq!(session.acknowledgment_generation(), generation);

        session.apply(PaymentAction::AcknowledgmentExpired(generation));
        assert_eq!(acknowledgment_delay(&session), None);
    }
}
