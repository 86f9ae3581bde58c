mod in_memory_message_repository;
mod sqlite_message_repository;

pub use in_memory_message_repository::InMemoryMessageRepository;
pub use sqlite_message_repository::SqliteMessageRepository;
