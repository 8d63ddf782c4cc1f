use krb_admin_client::{DisplayablePage as _, UiRelationships};
use serde_json::json;

use crate::helpers::{fixtures, output_text, spawn_logged_in};

#[tokio::test]
async fn blank_search_lists_everyone_with_accounts() {
    // Arrange
    let app = spawn_logged_in("alice", "EMPLOYEE").await;
    app.backend.mock_json(
        "GET",
        "/customers/with-accounts",
        200,
        json!([fixtures::customer_with_accounts_json(
            1,
            "Jane",
            vec![fixtures::account_json(10, 1, "SAVINGS", 1200.0, "ACTIVE")]
        )]),
    );
    let mut page = UiRelationships::default();

    // Act
    page.load(&app.core_client, Some("   ")).await.unwrap();

    // Assert
    let customers = page.customers().present().unwrap();
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].accounts().len(), 1);
    assert!(app.backend.received_for("GET", "/customers/search").is_empty());
}

#[tokio::test]
async fn failed_account_lookup_leaves_customer_without_accounts() {
    // Arrange
    let app = spawn_logged_in("alice", "EMPLOYEE").await;
    app.backend.mock_json(
        "GET",
        "/customers/search",
        200,
        json!([
            fixtures::customer_json(1, "Jane", "Smith"),
            fixtures::customer_json(2, "John", "Smith"),
        ]),
    );
    app.backend.mock_json(
        "GET",
        "/accounts/customer/1",
        200,
        json!([
            fixtures::account_json(10, 1, "SAVINGS", 1000.0, "ACTIVE"),
            fixtures::account_json(11, 1, "CHECKING", 250.25, "ACTIVE"),
        ]),
    );
    app.backend
        .mock_text("GET", "/accounts/customer/2", 500, "Lookup failed");
    let mut page = UiRelationships::default();
    let mut out = Vec::new();

    // Act
    page.load(&app.core_client, Some("Smith")).await.unwrap();
    page.show(&mut out).unwrap();

    // Assert
    assert_eq!(page.failure(), None);
    let customers = page.customers().present().unwrap();
    assert_eq!(customers.len(), 2);
    assert_eq!(customers[0].account_count, Some(2));
    assert_eq!(customers[1].account_count, Some(0));
    assert!(customers[1].accounts().is_empty());
    let text = output_text(out);
    assert!(text.contains("Search: Smith"), "{text}");
    assert!(text.contains("$1,250.25"), "{text}");
    assert!(text.contains("No accounts found for this customer."), "{text}");
    assert_eq!(
        app.backend.received_for("GET", "/customers/search")[0].query_value("term"),
        Some("Smith")
    );
}

#[tokio::test]
async fn failed_search_is_reported() {
    // Arrange
    let app = spawn_logged_in("alice", "EMPLOYEE").await;
    app.backend
        .mock_text("GET", "/customers/search", 400, "Search term too short");
    let mut page = UiRelationships::default();

    // Act
    page.load(&app.core_client, Some("S")).await.unwrap();

    // Assert
    assert_eq!(page.failure(), Some("Search term too short"));
    assert!(app.backend.received_for("GET", "/accounts/customer/1").is_empty());
}
