use super::*;

#[test]
fn pool_timeout_maps_to_timeout() {
    assert!(matches!(RecordError::from(sqlx::Error::PoolTimedOut), RecordError::Timeout));
}

#[test]
fn row_not_found_maps_to_database() {
    assert!(matches!(RecordError::from(sqlx::Error::RowNotFound), RecordError::Database(_)));
}

#[test]
fn require_text_rejects_blank() {
    let err = require_text(RecordKind::Service, "name", "   ").unwrap_err();
    assert_eq!(err.to_string(), "invalid service: name must not be empty");
}

#[test]
fn require_text_accepts_value() {
    assert!(require_text(RecordKind::Shop, "barber_shop", "La Navaja").is_ok());
}

#[test]
fn require_non_negative_rejects_negative() {
    let err = require_non_negative(RecordKind::Service, "price", -1).unwrap_err();
    assert!(matches!(err, RecordError::Invalid { kind: RecordKind::Service, .. }));
}

#[test]
fn require_non_negative_accepts_zero() {
    assert!(require_non_negative(RecordKind::Service, "duration_minutes", 0).is_ok());
}

#[test]
fn ensure_affected_zero_rows_is_not_found() {
    let id = Uuid::nil();
    let err = ensure_affected(0, RecordKind::Customer, id).unwrap_err();
    assert!(matches!(err, RecordError::NotFound { kind: RecordKind::Customer, id: found } if found == id));
}

#[test]
fn ensure_affected_one_row_is_ok() {
    assert!(ensure_affected(1, RecordKind::Customer, Uuid::nil()).is_ok());
}

#[test]
fn record_kind_labels() {
    assert_eq!(RecordKind::Service.as_str(), "service");
    assert_eq!(RecordKind::Customer.label(), "Customer");
    assert_eq!(RecordKind::Shop.to_string(), "shop");
}
