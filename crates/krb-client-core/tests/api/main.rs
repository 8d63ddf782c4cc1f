mod customers;
mod helpers;
mod login;
