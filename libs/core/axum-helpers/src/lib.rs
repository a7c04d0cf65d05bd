//! # Axum Helpers
//!
//! Shared HTTP plumbing for the quickstart services.
//!
//! - **[`server`]**: router assembly with OpenAPI UIs, graceful shutdown
//! - **[`http`]**: CORS and security header middleware
//! - **[`errors`]**: [`AppError`] and the JSON [`ErrorResponse`] body
//! - **[`extractors`]**: [`ValidatedJson`], [`QueryParams`] and [`IdPath`]
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router};
//!
//! let router = create_router::<ApiDoc>(api_routes, None);
//! create_production_app(router, &ServerConfig::default(), Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    ShutdownCoordinator, create_production_app, create_router, serve_with_shutdown,
    shutdown_signal,
};

pub use http::{cors_layer_from_origins, create_cors_layer, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{IdPath, QueryParams, ValidatedJson};
