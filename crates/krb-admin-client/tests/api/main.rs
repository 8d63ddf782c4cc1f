mod accounts;
mod dashboard;
mod employees;
mod helpers;
mod relationships;
