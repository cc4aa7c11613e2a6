use serde::{Deserialize, Serialize};

use super::errors::CustomerError;

// ============================================================================
// Customer Value Objects
// ============================================================================

/// Storefront customer number (the platform's stable customer key)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerNo(String);

impl CustomerNo {
    pub fn new(customer_no: impl Into<String>) -> Result<Self, CustomerError> {
        let customer_no = customer_no.into();
        if customer_no.trim().is_empty() {
            return Err(CustomerError::EmptyCustomerNo);
        }
        Ok(Self(customer_no))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CustomerNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Customer email address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Validates the bare shape `local@domain`; deliverability is the CRM's concern.
    pub fn new(email: impl Into<String>) -> Result<Self, CustomerError> {
        let email = email.into();
        let trimmed = email.trim();
        if trimmed.is_empty() {
            return Err(CustomerError::EmptyEmail);
        }
        match trimmed.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => {
                Ok(Self(trimmed.to_string()))
            }
            _ => Err(CustomerError::InvalidEmail(email)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Customer phone number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneNumber(pub String);

impl PhoneNumber {
    pub fn new(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
