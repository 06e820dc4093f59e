//! Yew view components for the wagering options and the payment page.

use crate::bet::{size_button_states, BetSelection, GamePhase};
use crate::clipboard::{copy_to_clipboard, NavigatorClipboard};
use crate::config::{
    ACKNOWLEDGMENT_TEXT, AMOUNT_TO_PAY, COPY_FEEDBACK_TEXT, QR_WARNING_TEXT, REFERENCE_LENGTH,
    REFERENCE_PLACEHOLDER, UPI_ID,
};
use crate::hooks::{acknowledgment_delay, copy_feedback_delay, use_countdown, use_expiring_message};
use crate::session::{PaymentAction, PaymentSession};
use crate::utils::{format_countdown, sanitize_reference};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Props for the Big/Small selector. The parent owns both the selection
/// and the phase.
#[derive(Properties, PartialEq)]
pub struct SizeSelectionProps {
    #[prop_or_default]
    pub selected_bet: Option<BetSelection>,
    pub game_phase: GamePhase,
    pub on_selection: Callback<BetSelection>,
}

#[function_component(SizeSelection)]
pub fn size_selection(props: &SizeSelectionProps) -> Html {
    let states = size_button_states(props.selected_bet.as_ref(), props.game_phase);

    html! {
        <div class="size-selection">
            { states.iter().map(|state| {
                let size = state.size;
                let onclick = props.on_selection.reform(move |_: MouseEvent| size.selection());
                html! {
                    <button
                        class={classes!("size-button", size.internal_key(), state.selected.then_some("selected"))}
                        disabled={state.disabled}
                        {onclick}
                    >
                        { size.to_string() }
                    </button>
                }
            }).collect::<Html>() }
        </div>
    }
}

/// Deposit page: amount, countdown, QR placeholder, UPI ID with copy, and
/// the UTR form.
#[function_component(PaymentPage)]
pub fn payment_page() -> Html {
    let session = use_reducer(PaymentSession::default);

    use_countdown(session.clone());

    {
        let session = session.clone();
        use_expiring_message(
            copy_feedback_delay(&session),
            session.copy_generation(),
            Callback::from(move |generation| {
                session.dispatch(PaymentAction::CopyFeedbackExpired(generation))
            }),
        );
    }
    {
        let session = session.clone();
        use_expiring_message(
            acknowledgment_delay(&session),
            session.acknowledgment_generation(),
            Callback::from(move |generation| {
                session.dispatch(PaymentAction::AcknowledgmentExpired(generation))
            }),
        );
    }

    let on_copy = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let session = session.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if copy_to_clipboard(&NavigatorClipboard, UPI_ID).await {
                    session.dispatch(PaymentAction::CopySucceeded);
                }
            });
        })
    };

    let on_reference_input = {
        let session = session.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let raw = input.value();
            session.dispatch(PaymentAction::ReferenceInput(raw.clone()));
            // The stored value may be unchanged (e.g. a letter was typed), in
            // which case no re-render resets the field.
            let cleaned = sanitize_reference(&raw);
            if cleaned != raw {
                input.set_value(&cleaned);
            }
        })
    };

    let on_submit = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.dispatch(PaymentAction::Submit))
    };

    let timer_class = classes!(
        "timer",
        session.is_urgent().then_some("urgent"),
        session.is_expired().then_some("expired")
    );

    html! {
        <div class="payment-page">
            <div class="payment-paper">
                // Amount and timer
                <div class="amount-section">
                    <h2 class="amount">{ format!("Amount to pay: ₹{}", AMOUNT_TO_PAY) }</h2>
                    <h3 class={timer_class}>
                        { format!("Time remaining: {}", format_countdown(session.seconds_remaining())) }
                    </h3>
                </div>

                <div class="qr-card">
                    <div class="qr-placeholder" role="img" aria-label="QR code">{ "▦" }</div>
                    <p class="qr-warning">{ QR_WARNING_TEXT }</p>
                </div>

                <div class="or-divider"><hr /><span>{ "OR" }</span></div>

                <div class="upi-section">
                    <div class="upi-title">{ "UPI ID" }</div>
                    <div class="upi-box">
                        <span class="upi-id">{ UPI_ID }</span>
                        <button class="copy-button" title="Copy UPI ID" aria-label="Copy UPI ID" onclick={on_copy}>{ "⧉" }</button>
                    </div>
                    if session.copy_feedback_active() {
                        <span class="copy-feedback">{ COPY_FEEDBACK_TEXT }</span>
                    }
                </div>

                <hr />

                <div class={classes!("utr-field", session.is_reference_invalid().then_some("error"))}>
                    <label for="utr-input">{ format!("Enter {} digit UTR number", REFERENCE_LENGTH) }</label>
                    <input
                        id="utr-input"
                        type="text"
                        value={session.reference_number().to_string()}
                        placeholder={REFERENCE_PLACEHOLDER}
                        maxlength={REFERENCE_LENGTH.to_string()}
                        pattern="[0-9]*"
                        inputmode="numeric"
                        oninput={on_reference_input}
                    />
                    <span class="helper-text">
                        { format!("{}/{} digits", session.reference_len(), REFERENCE_LENGTH) }
                    </span>
                </div>

                <button class="submit-button" disabled={!session.can_submit()} onclick={on_submit}>
                    { "Submit Payment" }
                </button>

                if session.submission_acknowledged() {
                    <div class="alert success">{ ACKNOWLEDGMENT_TEXT }</div>
                }
            </div>
        </div>
    }
}
