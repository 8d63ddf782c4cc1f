use chrono::NaiveDate;
use krb_client_core::wait_for;
use krb_shared::req_args::customers::CustomerDraft;
use rust_decimal::Decimal;
use serde_json::json;

use crate::helpers::{fixtures, no_cb, spawn_app};

fn draft() -> CustomerDraft {
    CustomerDraft {
        first_name: "Dana".to_string(),
        last_name: "Lee".to_string(),
        email: "dana@mail.example".to_string(),
        phone_number: "555-0101".to_string(),
        address: "2 High Street".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1991, 2, 3),
        ssn: "987-65-4321".to_string(),
    }
}

#[tokio::test]
async fn search_term_is_url_encoded() {
    // Arrange
    let app = spawn_app().await;
    app.backend.mock_json(
        "GET",
        "/customers/search",
        200,
        json!([fixtures::customer_json(5, "Smith", "& Co")]),
    );

    // Act
    let actual = wait_for(app.core_client.search_customers("Smith & Co", no_cb)).await;

    // Assert
    assert_eq!(actual.unwrap().len(), 1);
    let received = app.backend.received_for("GET", "/customers/search");
    assert_eq!(received[0].query_value("term"), Some("Smith & Co"));
}

#[tokio::test]
async fn create_customer_passes_employee_id() {
    // Arrange
    let app = spawn_app().await;
    app.backend
        .mock_json("POST", "/customers", 201, fixtures::customer_json(9, "Dana", "Lee"));

    // Act
    let actual = wait_for(app.core_client.create_customer(&draft(), 7.into(), no_cb)).await;

    // Assert
    assert_eq!(actual.unwrap().id, 9.into());
    let received = app.backend.received_for("POST", "/customers");
    assert_eq!(received[0].query_value("employeeId"), Some("7"));
    assert_eq!(
        received[0].json_body(),
        json!({
            "firstName": "Dana",
            "lastName": "Lee",
            "email": "dana@mail.example",
            "phoneNumber": "555-0101",
            "address": "2 High Street",
            "dateOfBirth": "1991-02-03",
            "ssn": "987-65-4321",
        })
    );
}

#[tokio::test]
async fn update_customer_round_trip() {
    // Arrange
    let app = spawn_app().await;
    app.backend
        .mock_json("GET", "/customers/9", 200, fixtures::customer_json(9, "Dana", "Lee"));
    app.backend.mock_json(
        "PUT",
        "/customers/9",
        200,
        fixtures::customer_json(9, "Dana", "Park"),
    );
    let existing = wait_for(app.core_client.get_customer(9.into(), no_cb))
        .await
        .unwrap();
    let mut changes = CustomerDraft::from(&existing);
    changes.last_name = "Park".to_string();

    // Act
    let actual = wait_for(app.core_client.update_customer(9.into(), &changes, no_cb)).await;

    // Assert
    assert_eq!(actual.unwrap().full_name(), "Dana Park");
    let body = app.backend.received_for("PUT", "/customers/9")[0].json_body();
    assert_eq!(body["lastName"], "Park");
    assert_eq!(body["firstName"], "Dana");
}

#[tokio::test]
async fn customers_with_accounts_sum_balances() {
    // Arrange
    let app = spawn_app().await;
    app.backend.mock_json(
        "GET",
        "/customers/with-accounts",
        200,
        json!([
            fixtures::customer_with_accounts_json(
                1,
                "Erin",
                vec![
                    fixtures::account_json(1, 1, "SAVINGS", 100.25, "ACTIVE"),
                    fixtures::account_json(2, 1, "CREDIT_CARD", -20.5, "ACTIVE"),
                ]
            ),
            fixtures::customer_json(2, "Finn", "Tester"),
        ]),
    );

    // Act
    let actual = wait_for(app.core_client.list_customers_with_accounts(no_cb))
        .await
        .unwrap();

    // Assert
    assert_eq!(actual[0].accounts().len(), 2);
    assert_eq!(actual[0].account_count, Some(2));
    assert_eq!(actual[0].total_balance(), Decimal::new(7975, 2));
    assert!(actual[1].accounts().is_empty());
    assert_eq!(actual[1].total_balance(), Decimal::ZERO);
}

#[tokio::test]
async fn delete_customer_error_is_reported() {
    // Arrange
    let app = spawn_app().await;
    app.backend.mock_text(
        "DELETE",
        "/customers/2",
        409,
        "Customer still has accounts",
    );

    // Act
    let actual = wait_for(app.core_client.delete_customer(2.into(), no_cb)).await;

    // Assert
    assert_eq!(actual.unwrap_err().to_string(), "Customer still has accounts");
}
