use super::*;

fn some_id() -> Uuid {
    Uuid::parse_str("6f1c2b1e-9a7d-4c55-9b1e-3f0d2a8c7e11").unwrap()
}

// =============================================================================
// record_error_to_status
// =============================================================================

#[test]
fn not_found_maps_to_404() {
    let err = RecordError::NotFound { kind: RecordKind::Service, id: some_id() };
    assert_eq!(record_error_to_status(&err), StatusCode::NOT_FOUND);
}

#[test]
fn invalid_maps_to_400() {
    let err = RecordError::Invalid { kind: RecordKind::Shop, reason: "barber_shop must not be empty".into() };
    assert_eq!(record_error_to_status(&err), StatusCode::BAD_REQUEST);
}

#[test]
fn timeout_maps_to_504() {
    assert_eq!(record_error_to_status(&RecordError::Timeout), StatusCode::GATEWAY_TIMEOUT);
}

#[test]
fn database_maps_to_500() {
    let err = RecordError::Database(sqlx::Error::RowNotFound);
    assert_eq!(record_error_to_status(&err), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// ApiError messages
// =============================================================================

#[test]
fn not_found_message_names_the_kind() {
    let api: ApiError = RecordError::NotFound { kind: RecordKind::Customer, id: some_id() }.into();
    assert_eq!(api, ApiError::new(StatusCode::NOT_FOUND, "Customer not found"));
}

#[test]
fn database_message_hides_driver_detail() {
    let api: ApiError = RecordError::Database(sqlx::Error::PoolClosed).into();
    assert_eq!(api.message, "Error querying the database");
}

#[test]
fn invalid_message_is_the_validation_reason() {
    let api: ApiError = RecordError::Invalid { kind: RecordKind::Service, reason: "price must not be negative".into() }.into();
    assert_eq!(api.status, StatusCode::BAD_REQUEST);
    assert_eq!(api.message, "price must not be negative");
}

#[tokio::test]
async fn api_error_renders_json_message_body() {
    let response = ApiError::new(StatusCode::GATEWAY_TIMEOUT, "Database request timed out").into_response();
    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, serde_json::json!({ "message": "Database request timed out" }));
}

// =============================================================================
// parse_id / acknowledgements
// =============================================================================

#[test]
fn parse_id_accepts_uuid() {
    let id = some_id();
    assert_eq!(parse_id(RecordKind::Service, &id.to_string()), Ok(id));
}

#[test]
fn parse_id_rejects_garbage_with_kind_in_message() {
    let err = parse_id(RecordKind::Shop, "not-a-uuid").unwrap_err();
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
    assert_eq!(err.message, "Invalid shop ID");
}

#[test]
fn acknowledgements_use_capitalized_label() {
    assert_eq!(updated(RecordKind::Service).0.message, "Service updated successfully");
    assert_eq!(deleted(RecordKind::Customer).0.message, "Customer deleted successfully");
}
