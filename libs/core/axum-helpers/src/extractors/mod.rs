//! Extractors that reject with the shared [`ErrorResponse`](crate::ErrorResponse) body.

pub mod id_path;
pub mod query_params;
pub mod validated_json;

pub use id_path::IdPath;
pub use query_params::QueryParams;
pub use validated_json::ValidatedJson;
