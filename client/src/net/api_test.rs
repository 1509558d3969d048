use super::*;

#[test]
fn collection_paths_live_under_api() {
    assert_eq!(Resource::Services.collection_path(), "/api/services");
    assert_eq!(Resource::Customers.collection_path(), "/api/customers");
    assert_eq!(Resource::Shops.collection_path(), "/api/shops");
}

#[test]
fn request_failed_message_names_resource_and_status() {
    assert_eq!(request_failed_message(Resource::Services, 500), "services request failed: 500");
    assert_eq!(request_failed_message(Resource::Shops, 404), "shops request failed: 404");
}
