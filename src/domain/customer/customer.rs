use serde::{Deserialize, Serialize};

use super::value_objects::{CustomerNo, Email, PhoneNumber};

// ============================================================================
// Profile & Customer
// ============================================================================
//
// Both are handed to the sync hooks by the storefront API after a create
// or update request. The hooks only read them.
//
// ============================================================================

/// Customer attributes forwarded as the hook payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub customer_no: CustomerNo,
    pub email: Email,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<PhoneNumber>,
}

impl Profile {
    pub fn new(
        customer_no: CustomerNo,
        email: Email,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            customer_no,
            email,
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: None,
        }
    }

    pub fn with_phone(mut self, phone: PhoneNumber) -> Self {
        self.phone = Some(phone);
        self
    }
}

/// What the sync hooks need from a storefront customer
pub trait CustomerProvider {
    /// Whether the customer is logged in (registered), as opposed to a guest
    fn is_authenticated(&self) -> bool;

    fn profile(&self) -> &Profile;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub authenticated: bool,
    pub profile: Profile,
}

impl Customer {
    pub fn registered(profile: Profile) -> Self {
        Self {
            authenticated: true,
            profile,
        }
    }

    pub fn guest(profile: Profile) -> Self {
        Self {
            authenticated: false,
            profile,
        }
    }
}

impl CustomerProvider for Customer {
    fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    fn profile(&self) -> &Profile {
        &self.profile
    }
}
