//! Canned backend payloads

use serde_json::{json, Value};

pub const TIMESTAMP: &str = "2024-03-01T09:30:00";

pub fn identity_json(id: u64, username: &str, role: &str) -> Value {
    let first_name = capitalize(username);
    json!({
        "id": id,
        "username": username,
        "firstName": first_name,
        "lastName": "Tester",
        "email": format!("{username}@krb.example"),
        "role": role,
        "createdAt": TIMESTAMP,
        "updatedAt": TIMESTAMP,
    })
}

pub fn employee_json(id: u64, username: &str, role: &str, customer_count: u64) -> Value {
    let mut result = identity_json(id, username, role);
    result["customerCount"] = json!(customer_count);
    result
}

pub fn customer_json(id: u64, first_name: &str, last_name: &str) -> Value {
    json!({
        "id": id,
        "firstName": first_name,
        "lastName": last_name,
        "email": format!("{}.{}@mail.example", first_name.to_lowercase(), last_name.to_lowercase()),
        "phoneNumber": "555-0100",
        "address": "1 Main Street",
        "dateOfBirth": "1990-05-17",
        "ssn": "123-45-6789",
        "createdAt": TIMESTAMP,
        "updatedAt": TIMESTAMP,
        "createdByEmployeeId": 1,
        "createdByEmployeeName": "Alice Tester",
    })
}

pub fn customer_with_accounts_json(id: u64, first_name: &str, accounts: Vec<Value>) -> Value {
    let mut result = customer_json(id, first_name, "Tester");
    result["accountCount"] = json!(accounts.len());
    result["accounts"] = Value::Array(accounts);
    result
}

pub fn account_json(
    id: u64,
    customer_id: u64,
    account_type: &str,
    balance: f64,
    status: &str,
) -> Value {
    let mut result = json!({
        "id": id,
        "accountNumber": format!("KRB{id:08}"),
        "accountType": account_type,
        "balance": balance,
        "interestRate": 1.5,
        "status": status,
        "createdAt": TIMESTAMP,
        "updatedAt": TIMESTAMP,
        "customerId": customer_id,
        "customerName": format!("Customer {customer_id}"),
        "createdByEmployeeId": 1,
        "createdByEmployeeName": "Alice Tester",
    });
    if account_type == "CREDIT_CARD" {
        result["creditLimit"] = json!(5000.0);
    }
    result
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
