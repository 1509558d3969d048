use super::*;

fn ana() -> Customer {
    Customer {
        id: None,
        name: "Ana".into(),
        phone: "555-0101".into(),
        email: "ana@example.com".into(),
        last_visit: "2024-03-01".into(),
        services_received: Vec::new(),
    }
}

#[test]
fn validate_accepts_well_formed_customer() {
    assert!(ana().validate().is_ok());
}

#[test]
fn validate_accepts_missing_email() {
    let customer = Customer { email: String::new(), ..ana() };
    assert!(customer.validate().is_ok());
}

#[test]
fn validate_rejects_blank_name() {
    let customer = Customer { name: String::new(), ..ana() };
    assert!(matches!(customer.validate(), Err(RecordError::Invalid { kind: RecordKind::Customer, .. })));
}

#[test]
fn validate_rejects_email_without_at() {
    let customer = Customer { email: "ana.example.com".into(), ..ana() };
    let err = customer.validate().unwrap_err();
    assert_eq!(err.to_string(), "invalid customer: email must contain '@'");
}

#[test]
fn deserialize_minimal_payload_defaults_history() {
    let customer: Customer = serde_json::from_str(r#"{"name":"Beto"}"#).unwrap();
    assert!(customer.services_received.is_empty());
    assert_eq!(customer.last_visit, "");
}

#[test]
fn deserialize_rejects_malformed_service_id() {
    let result =
        serde_json::from_str::<Customer>(r#"{"name":"Beto","services_received":[{"service_id":"nope","date":"x"}]}"#);
    assert!(result.is_err());
}

#[test]
fn from_row_unwraps_json_history() {
    let service_id = Uuid::new_v4();
    let visits = vec![ServiceVisit { service_id, date: "2024-03-01".into() }];
    let customer = from_row((
        Uuid::nil(),
        "Ana".into(),
        String::new(),
        String::new(),
        "2024-03-01".into(),
        Json(visits.clone()),
    ));
    assert_eq!(customer.id, Some(Uuid::nil()));
    assert_eq!(customer.services_received, visits);
}

// =============================================================================
// Live database
// =============================================================================

#[cfg(feature = "live-db-tests")]
#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL/live Postgres"]
async fn customer_crud_round_trip_keeps_visit_history() {
    let pool = crate::state::test_helpers::integration_pool().await;
    let visits = vec![
        ServiceVisit { service_id: Uuid::new_v4(), date: "2024-02-10".into() },
        ServiceVisit { service_id: Uuid::new_v4(), date: "2024-03-01".into() },
    ];
    let input = Customer { services_received: visits.clone(), ..ana() };

    let created = create_customer(&pool, input).await.expect("create_customer should succeed");
    let id = created.id.expect("created customer should carry an id");
    let fetched = get_customer(&pool, id).await.expect("get_customer should succeed");
    assert_eq!(fetched.services_received, visits);
    assert_eq!(fetched, created);

    let mut more = visits.clone();
    more.push(ServiceVisit { service_id: Uuid::new_v4(), date: "2024-04-15".into() });
    let changed = Customer { last_visit: "2024-04-15".into(), services_received: more.clone(), ..ana() };
    update_customer(&pool, id, &changed).await.expect("update_customer should succeed");
    let fetched = get_customer(&pool, id).await.expect("get_customer after update");
    assert_eq!(fetched.services_received, more);
    assert_eq!(fetched.last_visit, "2024-04-15");

    delete_customer(&pool, id).await.expect("delete_customer should succeed");
    assert!(matches!(get_customer(&pool, id).await, Err(RecordError::NotFound { .. })));
    assert!(!list_customers(&pool).await.expect("list_customers").iter().any(|c| c.id == Some(id)));
}

#[cfg(feature = "live-db-tests")]
#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL/live Postgres"]
async fn customer_unknown_id_is_not_found_for_update_and_delete() {
    let pool = crate::state::test_helpers::integration_pool().await;
    let missing = Uuid::new_v4();
    assert!(matches!(update_customer(&pool, missing, &ana()).await, Err(RecordError::NotFound { .. })));
    assert!(matches!(delete_customer(&pool, missing).await, Err(RecordError::NotFound { .. })));
}
