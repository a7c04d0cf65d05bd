//! Router assembly and server lifecycle.
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router};
//!
//! let router = create_router::<ApiDoc>(api_routes, None);
//! create_production_app(router, &server_config, Duration::from_secs(30), async move {
//!     db.close().await.ok();
//! })
//! .await?;
//! ```

pub mod app;
pub mod shutdown;

pub use app::{create_production_app, create_router, serve_with_shutdown};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
