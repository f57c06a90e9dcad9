//! Endpoint handlers, one per deployed Lambda.

pub mod create_order;
pub mod signup_alert;
pub mod verify_order;

// Re-exports for thin bins
pub use create_order::CreateOrderHandler;
pub use signup_alert::SignupAlertHandler;
pub use verify_order::VerifyOrderHandler;
