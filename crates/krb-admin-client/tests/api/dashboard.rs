use krb_admin_client::{DisplayablePage as _, UiDashboard};
use serde_json::json;

use crate::helpers::{output_text, spawn_logged_in, TestApp};

fn mock_stats<C>(app: &TestApp<C>) {
    app.backend.mock_json("GET", "/customers/count", 200, json!(12));
    app.backend.mock_json("GET", "/employees/count", 200, json!(4));
    app.backend.mock_json("GET", "/accounts/count", 200, json!(20));
    app.backend
        .mock_json("GET", "/accounts/total-balance", 200, json!(1500.5));
    app.backend.mock_json(
        "GET",
        "/accounts/stats/by-type",
        200,
        json!([["SAVINGS", 15], ["MONEY_MARKET", 5]]),
    );
    app.backend.mock_json(
        "GET",
        "/accounts/stats/by-status",
        200,
        json!([["ACTIVE", 18], ["SUSPENDED", 2]]),
    );
}

#[tokio::test]
async fn admin_sees_all_figures() {
    // Arrange
    let app = spawn_logged_in("alice", "ADMIN").await;
    mock_stats(&app);
    let mut out = Vec::new();

    // Act
    let page = UiDashboard::load(&app.core_client).await.unwrap();
    page.show(&mut out).unwrap();

    // Assert
    let text = output_text(out);
    assert!(text.contains("Welcome back, Alice!"), "{text}");
    assert!(text.contains("Total Customers:  12"), "{text}");
    assert!(text.contains("Total Accounts:   20"), "{text}");
    assert!(text.contains("Total Balance:    $1,500.50"), "{text}");
    assert!(text.contains("Employees:        4"), "{text}");
    assert!(text.contains("Money Market"), "{text}");
    assert!(text.contains("Suspended"), "{text}");
    assert_eq!(page.failure(), None);
}

#[tokio::test]
async fn employee_count_hidden_from_non_admin() {
    // Arrange
    let app = spawn_logged_in("bob", "EMPLOYEE").await;
    mock_stats(&app);
    let mut out = Vec::new();

    // Act
    let page = UiDashboard::load(&app.core_client).await.unwrap();
    page.show(&mut out).unwrap();

    // Assert
    let text = output_text(out);
    assert!(text.contains("Welcome back, Bob!"), "{text}");
    assert!(!text.contains("Employees:"), "{text}");
}

#[tokio::test]
async fn one_failed_figure_does_not_hide_the_rest() {
    // Arrange
    let app = spawn_logged_in("alice", "ADMIN").await;
    mock_stats(&app);
    app.backend
        .mock_text("GET", "/customers/count", 500, "Database unavailable");
    let mut out = Vec::new();

    // Act
    let page = UiDashboard::load(&app.core_client).await.unwrap();
    page.show(&mut out).unwrap();

    // Assert
    let text = output_text(out);
    assert!(
        text.contains("Total Customers:  unavailable (Database unavailable)"),
        "{text}"
    );
    assert!(text.contains("Total Accounts:   20"), "{text}");
    assert_eq!(page.failure(), Some("Database unavailable"));
}

#[tokio::test]
async fn anonymous_user_cannot_open_dashboard() {
    // Arrange
    let app = crate::helpers::spawn_app().await;

    // Act
    let actual = UiDashboard::load(&app.core_client).await;

    // Assert
    assert_eq!(
        actual.unwrap_err().to_string(),
        "The user has not logged in"
    );
    assert!(app.backend.received().is_empty());
}
