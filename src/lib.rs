pub use error::AppError;

/// Helper components (independent of each other, no shared state)
pub mod files; // Text file read/write/search/delete
pub mod http; // Synchronous HTTP request wrappers
pub mod records; // In-memory record filtering, sorting, grouping, aggregation

pub mod error; // Error handling

pub type Result<T> = std::result::Result<T, AppError>;
