mod init_tracing;
mod log_redaction;
mod request_id;

pub use init_tracing::init_tracing;
pub use log_redaction::redact_for_log;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
