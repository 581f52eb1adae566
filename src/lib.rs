pub mod clients;
pub mod config;
pub mod core;
pub mod error;
pub mod invoker;
pub mod json_utils;
pub mod model;
pub mod prompt;
pub mod request;
pub mod response;
pub mod store;

// Convenient re-exports
pub use crate::core::QuizService;
pub use error::QuizError;
pub use model::{QuizBatch, QuizCandidate, QuizFormat, QuizRecord};
pub use request::QuizRequest;
pub use response::ApiResponse;
