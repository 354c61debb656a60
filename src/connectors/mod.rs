//! External Service Connectors
//!
//! Adapters for the services this API depends on. Routes receive trait
//! objects through `web::Data` and never see the HTTP details, so tests can
//! swap in the mocks.
//!
//! ```ignore
//! pub async fn generate(
//!     generator: web::Data<Arc<dyn ContentGenerator>>,
//! ) -> Result<impl Responder, ApiError> {
//!     let text = generator.generate(name, description).await?;
//! }
//! ```

pub mod content_generator;
pub mod errors;

pub use content_generator::{
    ChatCompletionsClient, ContentGenerator, MockContentGenerator,
};
pub use errors::ConnectorError;

pub use content_generator::init as init_content_generator;
