use serde::{Deserialize, Serialize};

use bookshop_core::ValueObject;

/// A customer with contact details.
///
/// No field is validated; empty strings are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Customer {
    first_name: String,
    surname: String,
    address: String,
    email: String,
}

impl Customer {
    pub fn new(
        first_name: impl Into<String>,
        surname: impl Into<String>,
        address: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            surname: surname.into(),
            address: address.into(),
            email: email.into(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// `"{first_name} {surname}"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.surname)
    }
}

impl ValueObject for Customer {}

impl core::fmt::Display for Customer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Customer: {} {}, address: {}, email: {}",
            self.first_name, self.surname, self.address, self.email
        )
    }
}
