//! REST API implementation
//!
//! - types: Request/response type definitions and shared state
//! - extractors: JSON body and bearer-token extractors
//! - handlers: API endpoint handlers
//! - router: Router creation and configuration
//! - tests: Unit tests for all components

mod extractors;
mod handlers;
mod router;
pub mod types;

// Re-export public API
pub use extractors::{AuthenticatedOwner, JsonExtractor};
pub use router::{create_router, ROUTES};
pub use types::{
    AppState, GenerateRequestPayload, GenerateResponsePayload, HealthResponse,
    SaveRequestPayload,
};
