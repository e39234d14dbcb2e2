//! Customer record input type.
//!
//! [`CustomerRecord`] is the boundary type handed in by the surrounding
//! service layer. Categorical attributes are kept as plain strings on
//! purpose: the record is loosely typed and the pipeline owns
//! normalization and rejection. [`CustomerRecord::validate`] enforces
//! enumerated-domain membership before any preprocessing runs, naming the
//! offending field.

use crate::error::{PipelineError, PipelineResult};
use crate::frame::{Cell, Frame};
use crate::schema;
use serde::{Deserialize, Serialize};

/// One customer, as received per prediction request.
///
/// Field names serialize to the original wire names (`customerID`,
/// `MonthlyCharges`, ...), so a JSON payload from the upstream service
/// deserializes directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Opaque identifier; carries no predictive signal and is dropped
    /// before encoding.
    #[serde(rename = "customerID")]
    pub customer_id: String,
    /// "Male" or "Female".
    pub gender: String,
    /// "Yes" or "No".
    #[serde(rename = "SeniorCitizen")]
    pub senior_citizen: String,
    /// "Yes" or "No".
    #[serde(rename = "Partner")]
    pub partner: String,
    /// "Yes" or "No".
    #[serde(rename = "Dependents")]
    pub dependents: String,
    /// Number of periods the customer has been subscribed.
    pub tenure: u32,
    /// "Yes" or "No".
    #[serde(rename = "PhoneService")]
    pub phone_service: String,
    /// "Yes", "No", or "No phone service".
    #[serde(rename = "MultipleLines")]
    pub multiple_lines: String,
    /// "No", "DSL", or "Fiber optic".
    #[serde(rename = "InternetService")]
    pub internet_service: String,
    /// "Yes", "No", or "No internet service".
    #[serde(rename = "OnlineSecurity")]
    pub online_security: String,
    /// "Yes", "No", or "No internet service".
    #[serde(rename = "OnlineBackup")]
    pub online_backup: String,
    /// "Yes", "No", or "No internet service".
    #[serde(rename = "DeviceProtection")]
    pub device_protection: String,
    /// "Yes", "No", or "No internet service".
    #[serde(rename = "TechSupport")]
    pub tech_support: String,
    /// "Yes", "No", or "No internet service".
    #[serde(rename = "StreamingTV")]
    pub streaming_tv: String,
    /// "Yes", "No", or "No internet service".
    #[serde(rename = "StreamingMovies")]
    pub streaming_movies: String,
    /// "Month-to-month", "One year", or "Two year".
    #[serde(rename = "Contract")]
    pub contract: String,
    /// "Yes" or "No".
    #[serde(rename = "PaperlessBilling")]
    pub paperless_billing: String,
    /// One of the four declared payment methods.
    #[serde(rename = "PaymentMethod")]
    pub payment_method: String,
    /// Current monthly charge, non-negative.
    #[serde(rename = "MonthlyCharges")]
    pub monthly_charges: f64,
    /// Accumulated total charge, non-negative.
    #[serde(rename = "TotalCharges")]
    pub total_charges: f64,
}

impl CustomerRecord {
    /// Validates every attribute against its declared domain.
    ///
    /// Empty or whitespace-only categorical values are reported as
    /// missing; out-of-domain values as schema violations. The first
    /// offending field aborts validation.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::MissingValue`] or
    /// [`PipelineError::SchemaViolation`] naming the offending field.
    pub fn validate(&self) -> PipelineResult<()> {
        check_domain("gender", &self.gender, &["Male", "Female"])?;

        let yes_no = &["Yes", "No"];
        check_domain("SeniorCitizen", &self.senior_citizen, yes_no)?;
        check_domain("Partner", &self.partner, yes_no)?;
        check_domain("Dependents", &self.dependents, yes_no)?;
        check_domain("PhoneService", &self.phone_service, yes_no)?;
        check_domain("PaperlessBilling", &self.paperless_billing, yes_no)?;

        check_domain(
            "MultipleLines",
            &self.multiple_lines,
            &["Yes", "No", "No phone service"],
        )?;

        let internet_tiers: Vec<&str> = schema::INTERNET_SERVICE_RANKS
            .iter()
            .map(|(name, _)| *name)
            .collect();
        check_domain("InternetService", &self.internet_service, &internet_tiers)?;

        let addon = &["Yes", "No", "No internet service"];
        check_domain("OnlineSecurity", &self.online_security, addon)?;
        check_domain("OnlineBackup", &self.online_backup, addon)?;
        check_domain("DeviceProtection", &self.device_protection, addon)?;
        check_domain("TechSupport", &self.tech_support, addon)?;
        check_domain("StreamingTV", &self.streaming_tv, addon)?;
        check_domain("StreamingMovies", &self.streaming_movies, addon)?;

        check_domain("Contract", &self.contract, schema::CONTRACT_CATEGORIES)?;
        check_domain(
            "PaymentMethod",
            &self.payment_method,
            schema::PAYMENT_METHOD_CATEGORIES,
        )?;

        check_charge("MonthlyCharges", self.monthly_charges)?;
        check_charge("TotalCharges", self.total_charges)?;

        Ok(())
    }

    /// Converts the record into a single-row frame in wire column order.
    ///
    /// No encoding happens here; categorical attributes stay text and the
    /// identifier column is still present.
    pub fn to_frame(&self) -> Frame {
        let mut frame = Frame::new();
        frame.push(schema::CUSTOMER_ID, Cell::Text(self.customer_id.clone()));
        frame.push("gender", Cell::Text(self.gender.clone()));
        frame.push("SeniorCitizen", Cell::Text(self.senior_citizen.clone()));
        frame.push("Partner", Cell::Text(self.partner.clone()));
        frame.push("Dependents", Cell::Text(self.dependents.clone()));
        frame.push("tenure", Cell::Number(f64::from(self.tenure)));
        frame.push("PhoneService", Cell::Text(self.phone_service.clone()));
        frame.push("MultipleLines", Cell::Text(self.multiple_lines.clone()));
        frame.push("InternetService", Cell::Text(self.internet_service.clone()));
        frame.push("OnlineSecurity", Cell::Text(self.online_security.clone()));
        frame.push("OnlineBackup", Cell::Text(self.online_backup.clone()));
        frame.push(
            "DeviceProtection",
            Cell::Text(self.device_protection.clone()),
        );
        frame.push("TechSupport", Cell::Text(self.tech_support.clone()));
        frame.push("StreamingTV", Cell::Text(self.streaming_tv.clone()));
        frame.push("StreamingMovies", Cell::Text(self.streaming_movies.clone()));
        frame.push("Contract", Cell::Text(self.contract.clone()));
        frame.push(
            "PaperlessBilling",
            Cell::Text(self.paperless_billing.clone()),
        );
        frame.push("PaymentMethod", Cell::Text(self.payment_method.clone()));
        frame.push("MonthlyCharges", Cell::Number(self.monthly_charges));
        frame.push("TotalCharges", Cell::Number(self.total_charges));
        frame
    }
}

fn check_domain(field: &str, value: &str, domain: &[&str]) -> PipelineResult<()> {
    if value.trim().is_empty() {
        return Err(PipelineError::MissingValue {
            field: field.to_string(),
        });
    }
    if !domain.contains(&value) {
        return Err(PipelineError::SchemaViolation {
            field: field.to_string(),
            message: format!("`{}` is not in the declared domain {:?}", value, domain),
        });
    }
    Ok(())
}

fn check_charge(field: &str, value: f64) -> PipelineResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(PipelineError::SchemaViolation {
            field: field.to_string(),
            message: format!("charge must be a non-negative number, got {}", value),
        });
    }
    Ok(())
}
