mod repositories;

pub use repositories::InMemoryMessageRepository;
pub use repositories::SqliteMessageRepository;
