//! Employee Records
//!
//! The validated `Employee` record and the loosely-typed `EmployeeDraft`
//! that request bodies and seed files are decoded into.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Upper bound (inclusive) for a valid salary
pub const MAX_SALARY: f64 = 10_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    USD,
    EUR,
    INR,
}

impl Currency {
    pub const ALLOWED: [Currency; 3] = [Currency::USD, Currency::EUR, Currency::INR];

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::INR => "INR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Currency::ALLOWED
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or(())
    }
}

/// A stored employee salary record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    #[serde(serialize_with = "super::serialize_number")]
    pub salary: f64,
    pub currency: Currency,
    pub department: String,
    pub sub_department: String,
    #[serde(default)]
    pub on_contract: bool,
}

/// A scalar that may arrive as a number, a boolean or a string.
///
/// Form bodies carry everything as text while JSON clients send real numbers
/// and booleans, so coercion happens after decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl LooseValue {
    /// Numeric reading; empty, unparseable or non-finite input reads as 0.
    pub fn as_number(&self) -> f64 {
        let n = match self {
            LooseValue::Number(n) => *n,
            LooseValue::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            LooseValue::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        };
        if n.is_finite() {
            n
        } else {
            0.0
        }
    }

    /// Flag reading. Strings are only true for an explicit affirmative, so
    /// `"false"` stays false.
    pub fn as_flag(&self) -> bool {
        match self {
            LooseValue::Bool(b) => *b,
            LooseValue::Number(n) => *n != 0.0 && !n.is_nan(),
            LooseValue::Text(s) => matches!(
                s.trim().to_ascii_lowercase().as_str(),
                "true" | "1" | "on" | "yes"
            ),
        }
    }
}

/// Raw employee fields as received from a client or a seed file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub salary: Option<LooseValue>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub sub_department: Option<String>,
    #[serde(default)]
    pub on_contract: Option<LooseValue>,
}

impl EmployeeDraft {
    pub fn salary(&self) -> f64 {
        self.salary.as_ref().map(LooseValue::as_number).unwrap_or(0.0)
    }

    pub fn on_contract(&self) -> bool {
        self.on_contract.as_ref().map(LooseValue::as_flag).unwrap_or(false)
    }

    /// Run every field check and collect the failures in a fixed order.
    pub fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let currency = field(&self.currency);
        if currency.parse::<Currency>().is_err() {
            let shown = if currency.is_empty() { "none" } else { currency };
            errors.push(format!("invalid currency: {}", shown));
        }

        if field(&self.department).is_empty() {
            errors.push("department is required".to_string());
        }

        if field(&self.name).is_empty() {
            errors.push("name is required".to_string());
        }

        let salary = self.salary();
        if salary <= 0.0 || salary > MAX_SALARY {
            // -0.0 would otherwise print as "-0"
            let shown = if salary == 0.0 { 0.0 } else { salary };
            errors.push(format!("invalid salary: {}", shown));
        }

        if field(&self.sub_department).is_empty() {
            errors.push("sub_department is required".to_string());
        }

        errors
    }

    /// Validate and convert into a storable record.
    pub fn validate(self) -> Result<Employee> {
        let errors = self.errors();
        if !errors.is_empty() {
            return Err(Error::Validation(errors));
        }

        let salary = self.salary();
        let on_contract = self.on_contract();
        let currency = field(&self.currency)
            .parse::<Currency>()
            .map_err(|_| Error::Validation(vec!["invalid currency: none".to_string()]))?;

        Ok(Employee {
            name: self.name.unwrap_or_default(),
            salary,
            currency,
            department: self.department.unwrap_or_default(),
            sub_department: self.sub_department.unwrap_or_default(),
            on_contract,
        })
    }
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}
