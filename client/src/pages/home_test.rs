use super::*;

fn corte() -> Service {
    Service { id: Some("s-1".to_owned()), name: "Corte".to_owned(), price: 150, duration_minutes: 30 }
}

#[test]
fn after_sign_out_url_is_root() {
    assert_eq!(AFTER_SIGN_OUT_URL, "/");
}

#[test]
fn load_actions_all_ok_emits_three_loaded_actions() {
    let actions = load_actions(Ok(Vec::new()), Ok(vec![corte()]), Ok(Vec::new()));
    assert_eq!(
        actions,
        vec![
            DataAction::ShopsLoaded(Vec::new()),
            DataAction::ServicesLoaded(vec![corte()]),
            DataAction::CustomersLoaded(Vec::new()),
        ]
    );
}

#[test]
fn load_actions_reports_first_failure_last() {
    let actions = load_actions(
        Ok(Vec::new()),
        Err("services request failed: 500".to_owned()),
        Err("customers request failed: 504".to_owned()),
    );
    assert_eq!(
        actions,
        vec![
            DataAction::ShopsLoaded(Vec::new()),
            DataAction::LoadFailed("services request failed: 500".to_owned()),
        ]
    );
}

#[test]
fn summary_line_with_shop() {
    let summary = DataSummary {
        shop_name: Some("La Navaja".to_owned()),
        service_count: 3,
        customer_count: 12,
        loading: false,
        error: None,
    };
    assert_eq!(summary_line(&summary), "La Navaja · 3 services · 12 customers");
}

#[test]
fn summary_line_without_shop() {
    let summary =
        DataSummary { shop_name: None, service_count: 0, customer_count: 0, loading: false, error: None };
    assert_eq!(summary_line(&summary), "No shop registered · 0 services · 0 customers");
}
