//! Wagering-option and payment-page components for a betting game, built
//! with Yew.
//!
//! - [`components::SizeSelection`]: Big/Small bet buttons, gated by the
//!   parent's [`bet::GamePhase`].
//! - [`components::PaymentPage`]: deposit page with a countdown, a copyable
//!   UPI ID and a 12-digit UTR form. Its state machine is
//!   [`session::PaymentSession`].

pub mod bet;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod hooks;
pub mod logging;
pub mod session;
pub mod utils;

pub use bet::{BetSelection, BetSize, GamePhase};
pub use components::{PaymentPage, SizeSelection};
pub use session::{PaymentAction, PaymentSession};
