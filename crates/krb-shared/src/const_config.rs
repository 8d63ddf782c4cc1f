//! Stores settings that are not expected to need to change but grouped together
//! for discoverability and reuse. Each constant should be prefixed by the module
//! name to allow importing the constant only and still be readable

pub mod client {
    /// Used when neither the configuration nor the command line supply one
    pub const CLIENT_DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
}

pub mod session {
    /// The single key the logged in identity is persisted under
    pub const SESSION_IDENTITY_KEY: &str = "currentUser";
    pub const SESSION_APP_DIR_NAME: &str = "krb-admin";
}

pub mod path {
    mod path_spec;
    pub use path_spec::{PathSpec, ResolvedPath};

    pub const PATH_AUTH_LOGIN: PathSpec = PathSpec::post("/auth/login");
    pub const PATH_AUTH_LOGOUT: PathSpec = PathSpec::post("/auth/logout");

    pub const PATH_EMPLOYEES: PathSpec = PathSpec::get("/employees");
    pub const PATH_EMPLOYEE: PathSpec = PathSpec::get("/employees/{id}");
    pub const PATH_EMPLOYEE_CREATE: PathSpec = PathSpec::post("/employees");
    pub const PATH_EMPLOYEE_UPDATE: PathSpec = PathSpec::put("/employees/{id}");
    pub const PATH_EMPLOYEE_DELETE: PathSpec = PathSpec::delete("/employees/{id}");
    pub const PATH_EMPLOYEES_COUNT: PathSpec = PathSpec::get("/employees/count");

    pub const PATH_CUSTOMERS: PathSpec = PathSpec::get("/customers");
    pub const PATH_CUSTOMERS_WITH_ACCOUNTS: PathSpec = PathSpec::get("/customers/with-accounts");
    pub const PATH_CUSTOMERS_SEARCH: PathSpec = PathSpec::get("/customers/search");
    pub const PATH_CUSTOMERS_COUNT: PathSpec = PathSpec::get("/customers/count");
    pub const PATH_CUSTOMER: PathSpec = PathSpec::get("/customers/{id}");
    pub const PATH_CUSTOMER_CREATE: PathSpec = PathSpec::post("/customers");
    pub const PATH_CUSTOMER_UPDATE: PathSpec = PathSpec::put("/customers/{id}");
    pub const PATH_CUSTOMER_DELETE: PathSpec = PathSpec::delete("/customers/{id}");

    pub const PATH_ACCOUNTS: PathSpec = PathSpec::get("/accounts");
    pub const PATH_ACCOUNT: PathSpec = PathSpec::get("/accounts/{id}");
    pub const PATH_ACCOUNTS_FOR_CUSTOMER: PathSpec = PathSpec::get("/accounts/customer/{id}");
    pub const PATH_ACCOUNT_CREATE: PathSpec = PathSpec::post("/accounts");
    pub const PATH_ACCOUNT_STATUS: PathSpec = PathSpec::put("/accounts/{id}/status");
    pub const PATH_ACCOUNT_BALANCE: PathSpec = PathSpec::put("/accounts/{id}/balance");
    pub const PATH_ACCOUNT_DELETE: PathSpec = PathSpec::delete("/accounts/{id}");
    pub const PATH_ACCOUNTS_COUNT: PathSpec = PathSpec::get("/accounts/count");
    pub const PATH_ACCOUNTS_TOTAL_BALANCE: PathSpec = PathSpec::get("/accounts/total-balance");
    pub const PATH_ACCOUNTS_STATS_BY_TYPE: PathSpec = PathSpec::get("/accounts/stats/by-type");
    pub const PATH_ACCOUNTS_STATS_BY_STATUS: PathSpec = PathSpec::get("/accounts/stats/by-status");
}
