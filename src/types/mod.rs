//! Wire types for the HTTP surface

pub mod request;
pub mod response;

pub use request::ChatRequest;
pub use response::{
    ChatResponse, MessageResponse, QuestionnaireResponse, QuizQuestion, SummaryResponse,
    UploadResponse,
};
