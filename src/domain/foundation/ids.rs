//! Strongly-typed identifier value objects.
//!
//! Both identifiers are owned by the external field-service system; this
//! crate only guarantees they are non-empty and free of surrounding
//! whitespace.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Merchant identifier (the payment-gateway MID a beat is raised for).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MerchantId(String);

impl MerchantId {
    /// Creates a new MerchantId, returning error if blank.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        non_blank(id.into(), "mid").map(Self)
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MerchantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Field employee code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Creates a new EmployeeId, returning error if blank.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        non_blank(id.into(), "emp_id").map(Self)
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trims the value and rejects it when nothing is left.
pub(crate) fn non_blank(value: String, field: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    if trimmed.len() == value.len() {
        Ok(value)
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merchant_id_rejects_empty() {
        assert!(MerchantId::new("").is_err());
        assert!(MerchantId::new("   ").is_err());
    }

    #[test]
    fn employee_id_is_trimmed() {
        let id = EmployeeId::new("  E12345 \n").unwrap();
        assert_eq!(id.as_str(), "E12345");
        assert_eq!(id.to_string(), "E12345");
    }

    #[test]
    fn empty_employee_id_names_field() {
        let err = EmployeeId::new("\t").unwrap_err();
        assert_eq!(err, ValidationError::empty_field("emp_id"));
    }

    #[test]
    fn serializes_transparently() {
        let id = MerchantId::new("MID001").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"MID001\"");
    }
}
