mod error;
mod health;
mod history;
mod message_response;
mod summary;
mod translate;

pub use error::{ApiError, ErrorResponse};
pub use health::{LIVENESS_TEXT, health_handler, root_handler};
pub use history::{clear_history_handler, list_history_handler};
pub use message_response::MessageResponse;
pub use summary::summary_handler;
pub use translate::{TranslatePayload, translate_handler};
