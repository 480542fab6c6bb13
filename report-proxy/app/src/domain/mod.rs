pub mod generation;
pub mod response;

pub use generation::{GenerationRequest, GenerationResult, Source, ToolDirective};
pub use response::{ErrorBody, GenerateReportResponse, HealthResponse};
