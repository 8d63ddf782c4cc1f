use krb_admin_client::{
    cli::{Command, EmployeesCommand},
    execute, DisplayablePage as _, Notice, OpResult, UiEmployees,
};
use krb_shared::{errors::PermissionError, uac::Role};
use serde_json::json;

use crate::helpers::{fixtures, output_text, spawn_logged_in, ScriptedConfirm};

#[tokio::test]
async fn non_admin_is_refused_without_request() {
    // Arrange
    let mut app = spawn_logged_in("bob", "EMPLOYEE").await;
    let mut out = Vec::new();

    // Act
    let actual = execute(
        &mut app.core_client,
        Command::Employees(EmployeesCommand::List),
        &mut ScriptedConfirm::yes(),
        &mut out,
    )
    .await;

    // Assert
    let err = actual.unwrap_err();
    assert_eq!(
        err.downcast_ref::<PermissionError>(),
        Some(&PermissionError {
            required: Role::Admin,
            actual: Role::Employee,
        })
    );
    assert!(app.backend.received().is_empty());
}

#[tokio::test]
async fn non_admin_delete_never_prompts() {
    // Arrange
    let mut app = spawn_logged_in("bob", "EMPLOYEE").await;
    let mut confirm = ScriptedConfirm::yes();

    // Act
    let actual = execute(
        &mut app.core_client,
        Command::Employees(EmployeesCommand::Delete { id: 1 }),
        &mut confirm,
        &mut Vec::new(),
    )
    .await;

    // Assert
    assert!(actual.is_err());
    assert!(confirm.prompts.is_empty());
    assert!(app.backend.received().is_empty());
}

#[tokio::test]
async fn admin_list_shows_role_counts() {
    // Arrange
    let mut app = spawn_logged_in("alice", "ADMIN").await;
    app.backend.mock_json(
        "GET",
        "/employees",
        200,
        json!([
            fixtures::employee_json(1, "alice", "ADMIN", 3),
            fixtures::employee_json(2, "bob", "EMPLOYEE", 10),
            fixtures::employee_json(3, "carol", "EMPLOYEE", 0),
        ]),
    );
    let mut out = Vec::new();

    // Act
    execute(
        &mut app.core_client,
        Command::Employees(EmployeesCommand::List),
        &mut ScriptedConfirm::yes(),
        &mut out,
    )
    .await
    .unwrap();

    // Assert
    let text = output_text(out);
    assert!(text.contains("Total Employees:    3"), "{text}");
    assert!(text.contains("Administrators:     1"), "{text}");
    assert!(text.contains("Regular Employees:  2"), "{text}");
    assert!(text.contains("Employees (3)"), "{text}");
}

#[tokio::test]
async fn update_sends_only_editable_fields() {
    // Arrange
    let app = spawn_logged_in("alice", "ADMIN").await;
    app.backend.mock_json(
        "GET",
        "/employees/2",
        200,
        fixtures::employee_json(2, "bob", "EMPLOYEE", 10),
    );
    app.backend.mock_json(
        "PUT",
        "/employees/2",
        200,
        fixtures::identity_json(2, "bob", "ADMIN"),
    );
    let mut page = UiEmployees::default();

    // Act
    let actual = page
        .update(&app.core_client, 2.into(), |changes| changes.role = Role::Admin)
        .await
        .unwrap();

    // Assert
    assert_eq!(actual, OpResult::Reload);
    assert_eq!(
        page.notice(),
        &Notice::Success("Employee updated successfully".to_string())
    );
    assert_eq!(
        app.backend.received_for("PUT", "/employees/2")[0].json_body(),
        json!({
            "firstName": "Bob",
            "lastName": "Tester",
            "email": "bob@krb.example",
            "role": "ADMIN",
        })
    );
}

#[tokio::test]
async fn failed_delete_keeps_list() {
    // Arrange
    let app = spawn_logged_in("alice", "ADMIN").await;
    app.backend.mock_json(
        "GET",
        "/employees",
        200,
        json!([fixtures::employee_json(2, "bob", "EMPLOYEE", 10)]),
    );
    app.backend
        .mock_text("DELETE", "/employees/2", 409, "Employee has customers");
    let mut page = UiEmployees::default();
    page.load(&app.core_client).await.unwrap();

    // Act
    let actual = page
        .delete(&app.core_client, 2.into(), &mut ScriptedConfirm::yes())
        .await
        .unwrap();

    // Assert
    assert_eq!(actual, OpResult::NoAction);
    assert_eq!(
        page.failure(),
        Some("Failed to delete employee: Employee has customers")
    );
    assert_eq!(page.employees().present().unwrap().len(), 1);
}

#[tokio::test]
async fn update_of_missing_employee_reports_once() {
    // Arrange
    let app = spawn_logged_in("alice", "ADMIN").await;
    app.backend
        .mock_text("GET", "/employees/5", 404, "Employee not found");
    let mut page = UiEmployees::default();
    let mut out = Vec::new();

    // Act
    let actual = page
        .update(&app.core_client, 5.into(), |changes| changes.role = Role::Admin)
        .await
        .unwrap();
    page.show(&mut out).unwrap();

    // Assert
    assert_eq!(actual, OpResult::NoAction);
    assert_eq!(page.notice(), &Notice::None);
    assert_eq!(page.failure(), Some("Employee not found"));
    let text = output_text(out);
    assert_eq!(text.matches("Employee not found").count(), 1, "{text}");
    assert!(app.backend.received_for("PUT", "/employees/5").is_empty());
}
