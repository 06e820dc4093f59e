//! Application-level configuration constants.

// Payment details
pub const AMOUNT_TO_PAY: u32 = 200;
pub const UPI_ID: &str = "merchant@paytm";

// Countdown
pub const COUNTDOWN_SECONDS: u32 = 300;
pub const URGENT_BELOW_SECONDS: u32 = 60;
pub const TICK_MS: u32 = 1_000;

// Transient message lifetimes
pub const COPY_FEEDBACK_MS: u32 = 2_000;
pub const ACKNOWLEDGMENT_MS: u32 = 10_000;

// Reference number (UTR) input
pub const REFERENCE_LENGTH: usize = 12;
pub const REFERENCE_PLACEHOLDER: &str = "123456789012";

// UI text
pub const COPY_FEEDBACK_TEXT: &str = "UPI ID copied to clipboard!";
pub const ACKNOWLEDGMENT_TEXT: &str =
    "Please wait if you deposited money, it will be added in your wallet as soon as possible. Thank you!";
pub const QR_WARNING_TEXT: &str = "Do not use same QR to pay multiple times";
