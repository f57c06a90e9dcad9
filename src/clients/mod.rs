//! Outbound provider clients.

pub mod cashfree;
pub mod http;
pub mod resend;

pub use cashfree::CashfreeClient;
pub use http::{HttpTransport, OutboundRequest, OutboundResponse, ReqwestTransport};
pub use resend::ResendClient;
