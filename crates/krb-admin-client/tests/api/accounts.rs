use krb_admin_client::{DisplayablePage as _, Notice, OpResult, UiAccounts};
use krb_shared::{
    account::{AccountStatus, AccountType},
    req_args::accounts::CreateAccountReqArgs,
};
use rust_decimal::Decimal;
use serde_json::json;

use crate::helpers::{fixtures, output_text, spawn_logged_in, ScriptedConfirm, EMPLOYEE_ID};

#[tokio::test]
async fn create_without_customer_sends_nothing() {
    // Arrange
    let app = spawn_logged_in("alice", "EMPLOYEE").await;
    let mut page = UiAccounts::default();
    let args = CreateAccountReqArgs {
        account_type: AccountType::Savings,
        initial_balance: Decimal::from(100),
        ..Default::default()
    };

    // Act
    let actual = page.create(&app.core_client, args).await.unwrap();

    // Assert
    assert_eq!(actual, OpResult::NoAction);
    assert_eq!(
        page.notice(),
        &Notice::Error("Please select a customer".to_string())
    );
    assert!(app.backend.received().is_empty());
}

#[tokio::test]
async fn create_sends_current_employee_and_drops_credit_limit() {
    // Arrange
    let app = spawn_logged_in("alice", "EMPLOYEE").await;
    app.backend.mock_json(
        "POST",
        "/accounts",
        201,
        fixtures::account_json(20, 4, "SAVINGS", 100.0, "ACTIVE"),
    );
    let mut page = UiAccounts::default();
    let args = CreateAccountReqArgs {
        customer_id: 4.into(),
        account_type: AccountType::Savings,
        initial_balance: Decimal::from(100),
        credit_limit: Some(Decimal::from(900)),
    };

    // Act
    let actual = page.create(&app.core_client, args).await.unwrap();

    // Assert
    assert_eq!(actual, OpResult::Reload);
    assert_eq!(
        page.notice(),
        &Notice::Success("Account created successfully".to_string())
    );
    let received = app.backend.received_for("POST", "/accounts");
    assert_eq!(
        received[0].query_value("employeeId"),
        Some(EMPLOYEE_ID.to_string().as_str())
    );
    assert_eq!(
        received[0].json_body(),
        json!({"customerId": 4, "accountType": "SAVINGS", "initialBalance": 100.0})
    );
}

#[tokio::test]
async fn list_fetches_accounts_and_customers() {
    // Arrange
    let app = spawn_logged_in("alice", "EMPLOYEE").await;
    app.backend.mock_json(
        "GET",
        "/accounts",
        200,
        json!([
            fixtures::account_json(1, 4, "FIXED_DEPOSIT", 1234.5, "ACTIVE"),
            fixtures::account_json(2, 5, "CHECKING", 10.0, "CLOSED"),
        ]),
    );
    app.backend.mock_json(
        "GET",
        "/customers",
        200,
        json!([fixtures::customer_json(4, "Dana", "Lee")]),
    );
    let mut page = UiAccounts::default();
    let mut out = Vec::new();

    // Act
    page.load(&app.core_client).await.unwrap();
    page.show(&mut out).unwrap();

    // Assert
    assert_eq!(page.accounts().present().unwrap().len(), 2);
    assert_eq!(page.customers().present().unwrap().len(), 1);
    let text = output_text(out);
    assert!(text.contains("Accounts (2)"), "{text}");
    assert!(text.contains("Fixed Deposit"), "{text}");
    assert!(text.contains("$1,234.50"), "{text}");
    assert_eq!(page.failure(), None);
}

#[tokio::test]
async fn failed_balance_update_keeps_list() {
    // Arrange
    let app = spawn_logged_in("alice", "EMPLOYEE").await;
    app.backend.mock_json(
        "GET",
        "/accounts",
        200,
        json!([fixtures::account_json(1, 4, "SAVINGS", 50.0, "ACTIVE")]),
    );
    app.backend.mock_json("GET", "/customers", 200, json!([]));
    app.backend
        .mock_text("PUT", "/accounts/1/balance", 400, "Invalid balance");
    let mut page = UiAccounts::default();
    page.load(&app.core_client).await.unwrap();

    // Act
    let actual = page
        .set_balance(&app.core_client, 1.into(), Decimal::new(-5, 0))
        .await
        .unwrap();

    // Assert
    assert_eq!(actual, OpResult::NoAction);
    assert_eq!(
        page.notice(),
        &Notice::Error("Failed to update account balance: Invalid balance".to_string())
    );
    assert_eq!(page.accounts().present().unwrap().len(), 1);
}

#[tokio::test]
async fn status_change_reported() {
    // Arrange
    let app = spawn_logged_in("alice", "EMPLOYEE").await;
    app.backend.mock_json(
        "PUT",
        "/accounts/1/status",
        200,
        fixtures::account_json(1, 4, "SAVINGS", 50.0, "INACTIVE"),
    );
    let mut page = UiAccounts::default();

    // Act
    let actual = page
        .set_status(&app.core_client, 1.into(), AccountStatus::Inactive)
        .await
        .unwrap();

    // Assert
    assert_eq!(actual, OpResult::Reload);
    assert_eq!(
        page.selected().present().unwrap().status,
        AccountStatus::Inactive
    );
    assert_eq!(
        app.backend.received()[0].query_value("status"),
        Some("INACTIVE")
    );
}

#[tokio::test]
async fn declined_delete_sends_nothing() {
    // Arrange
    let app = spawn_logged_in("alice", "EMPLOYEE").await;
    let mut page = UiAccounts::default();
    let mut confirm = ScriptedConfirm::no();

    // Act
    let actual = page
        .delete(&app.core_client, 1.into(), &mut confirm)
        .await
        .unwrap();

    // Assert
    assert_eq!(actual, OpResult::NoAction);
    assert_eq!(
        confirm.prompts,
        vec!["Are you sure you want to delete this account?".to_string()]
    );
    assert!(app.backend.received().is_empty());
}
