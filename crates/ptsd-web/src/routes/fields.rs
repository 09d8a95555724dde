use axum::Json;

use ptsd_core::fields::{FieldSpec, fields};

/// The sixteen intake fields in model order, with their choices and defaults.
pub async fn list_fields() -> Json<Vec<FieldSpec>> {
    Json(fields().to_vec())
}
