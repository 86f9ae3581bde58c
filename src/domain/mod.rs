mod message;
mod message_id;
mod message_role;
mod upload_path;

pub use message::{Message, NewMessage, format_timestamp, parse_timestamp};
pub use message_id::MessageId;
pub use message_role::MessageRole;
pub use upload_path::{UploadPath, sanitize_file_name};
