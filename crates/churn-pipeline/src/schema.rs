//! Fixed input schema and feature layout.
//!
//! All categorical domains are declared here at compile time and never
//! inferred from input data. The canonical feature column order reproduces
//! the layout the scoring artifact was fit against: source columns in wire
//! order, with one-hot indicator columns appended at the end of the frame
//! (Contract first, then PaymentMethod).

/// Name of the identifier column dropped before encoding.
pub const CUSTOMER_ID: &str = "customerID";

/// Fixed numeric codes for the `gender` attribute.
pub const GENDER_CODES: &[(&str, f64)] = &[("Male", 0.0), ("Female", 1.0)];

/// Ordinal ranks for the `InternetService` tier, in ascending order.
pub const INTERNET_SERVICE_RANKS: &[(&str, f64)] =
    &[("No", 0.0), ("DSL", 1.0), ("Fiber optic", 2.0)];

/// Declared categories for the `Contract` attribute, in one-hot order.
pub const CONTRACT_CATEGORIES: &[&str] = &["Month-to-month", "One year", "Two year"];

/// Declared categories for the `PaymentMethod` attribute, in one-hot order.
pub const PAYMENT_METHOD_CATEGORIES: &[&str] = &[
    "Electronic check",
    "Mailed check",
    "Bank transfer (automatic)",
    "Credit card (automatic)",
];

/// Exact-match codes for binary Yes/No-valued attributes.
///
/// The "No internet service" / "No phone service" variants collapse to 0
/// together with plain "No". This is an exact-value table, not a substring
/// match, so a value outside the table is rejected as an unknown category.
pub const BINARY_CODES: &[(&str, f64)] = &[
    ("Yes", 1.0),
    ("No", 0.0),
    ("No internet service", 0.0),
    ("No phone service", 0.0),
];

/// Attributes restricted to {"Yes", "No"}.
pub const YES_NO_FIELDS: &[&str] = &[
    "SeniorCitizen",
    "Partner",
    "Dependents",
    "PhoneService",
    "PaperlessBilling",
];

/// Attributes restricted to {"Yes", "No", "No internet service"}.
pub const INTERNET_ADDON_FIELDS: &[&str] = &[
    "OnlineSecurity",
    "OnlineBackup",
    "DeviceProtection",
    "TechSupport",
    "StreamingTV",
    "StreamingMovies",
];

/// Number of numeric feature columns after categorical expansion.
pub const FEATURE_DIM: usize = 24;

/// Returns the canonical feature column names in scoring order.
///
/// # Example
///
/// ```
/// use churn_pipeline::schema;
///
/// let columns = schema::feature_columns();
/// assert_eq!(columns.len(), schema::FEATURE_DIM);
/// assert_eq!(columns[0], "gender");
/// assert_eq!(columns[17], "Contract_Month-to-month");
/// assert_eq!(columns[23], "PaymentMethod_Credit card (automatic)");
/// ```
pub fn feature_columns() -> Vec<String> {
    let mut columns: Vec<String> = [
        "gender",
        "SeniorCitizen",
        "Partner",
        "Dependents",
        "tenure",
        "PhoneService",
        "MultipleLines",
        "InternetService",
        "OnlineSecurity",
        "OnlineBackup",
        "DeviceProtection",
        "TechSupport",
        "StreamingTV",
        "StreamingMovies",
        "PaperlessBilling",
        "MonthlyCharges",
        "TotalCharges",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    for category in CONTRACT_CATEGORIES {
        columns.push(one_hot_column("Contract", category));
    }
    for category in PAYMENT_METHOD_CATEGORIES {
        columns.push(one_hot_column("PaymentMethod", category));
    }
    columns
}

/// Returns the indicator column name for a one-hot expanded category.
pub fn one_hot_column(field: &str, category: &str) -> String {
    format!("{}_{}", field, category)
}
