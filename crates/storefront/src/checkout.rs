//! Customer details collected before an order is handed to the review page.
//!
//! The form is a plain field → string map. [`CheckoutForm::validate`] reports
//! every empty required field and unreadable value at once instead of
//! stopping at the first.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use bevy::prelude::*;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::OrderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckoutField {
    FullName,
    PhoneNumber,
    Branch,
    DeliveryTime,
    Address,
    Pincode,
    Landmark,
}

impl CheckoutField {
    /// Form order, top to bottom.
    pub const ALL: [CheckoutField; 7] = [
        CheckoutField::FullName,
        CheckoutField::PhoneNumber,
        CheckoutField::Branch,
        CheckoutField::DeliveryTime,
        CheckoutField::Address,
        CheckoutField::Pincode,
        CheckoutField::Landmark,
    ];

    pub const REQUIRED: [CheckoutField; 4] = [
        CheckoutField::FullName,
        CheckoutField::PhoneNumber,
        CheckoutField::Address,
        CheckoutField::Pincode,
    ];

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    /// Wire name, matching the keys of the handoff payload.
    pub fn key(self) -> &'static str {
        match self {
            CheckoutField::FullName => "fullName",
            CheckoutField::PhoneNumber => "phoneNumber",
            CheckoutField::Branch => "branch",
            CheckoutField::DeliveryTime => "deliveryTime",
            CheckoutField::Address => "address",
            CheckoutField::Pincode => "pincode",
            CheckoutField::Landmark => "landmark",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CheckoutField::FullName => "Full Name",
            CheckoutField::PhoneNumber => "Phone Number",
            CheckoutField::Branch => "Nearest Branch",
            CheckoutField::DeliveryTime => "Delivery Time",
            CheckoutField::Address => "Address",
            CheckoutField::Pincode => "Pincode",
            CheckoutField::Landmark => "Landmark",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            CheckoutField::FullName => "Enter your full name",
            CheckoutField::PhoneNumber => "Enter your phone number",
            CheckoutField::Branch => "Select",
            CheckoutField::DeliveryTime => "YYYY-MM-DD HH:MM",
            CheckoutField::Address => "Enter your Address",
            CheckoutField::Pincode => "Enter your Pincode",
            CheckoutField::Landmark => "Enter your Landmark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Downtown,
    Uptown,
    Midtown,
    Suburban,
}

/// Branches offered by the checkout form on the menu page.
pub const MENU_BRANCHES: [Branch; 3] = [Branch::Downtown, Branch::Uptown, Branch::Midtown];

/// Branches offered by the enquiry form on the landing page.
pub const LANDING_BRANCHES: [Branch; 3] = [Branch::Downtown, Branch::Uptown, Branch::Suburban];

impl Branch {
    /// Value stored in the form.
    pub fn value(self) -> &'static str {
        match self {
            Branch::Downtown => "downtown",
            Branch::Uptown => "uptown",
            Branch::Midtown => "midtown",
            Branch::Suburban => "suburban",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Branch::Downtown => "Downtown",
            Branch::Uptown => "Uptown",
            Branch::Midtown => "Midtown",
            Branch::Suburban => "Suburban",
        }
    }

    pub fn from_value(value: &str) -> Option<Branch> {
        [
            Branch::Downtown,
            Branch::Uptown,
            Branch::Midtown,
            Branch::Suburban,
        ]
        .into_iter()
        .find(|b| b.value() == value)
    }
}

/// Accepted delivery time layouts: the placeholder's own and the
/// `datetime-local` form with a `T` separator.
pub const DELIVERY_TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"];

pub fn parse_delivery_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    DELIVERY_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldProblem {
    Missing,
    Invalid,
}

/// Fields rejected by the last submission: required ones left empty and
/// filled ones whose value could not be read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub missing: BTreeSet<CheckoutField>,
    #[serde(default)]
    pub invalid: BTreeSet<CheckoutField>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.invalid.is_empty()
    }

    pub fn problem(&self, field: CheckoutField) -> Option<FieldProblem> {
        if self.missing.contains(&field) {
            Some(FieldProblem::Missing)
        } else if self.invalid.contains(&field) {
            Some(FieldProblem::Invalid)
        } else {
            None
        }
    }
}

fn labels(fields: &BTreeSet<CheckoutField>) -> String {
    let labels: Vec<&str> = fields.iter().map(|field| field.label()).collect();
    labels.join(", ")
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("missing required fields: {}", labels(&self.missing)));
        }
        if !self.invalid.is_empty() {
            parts.push(format!("invalid values: {}", labels(&self.invalid)));
        }
        write!(f, "{}", parts.join("; "))
    }
}

#[derive(Resource, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutForm {
    fields: BTreeMap<CheckoutField, String>,
}

impl CheckoutForm {
    pub fn get(&self, field: CheckoutField) -> &str {
        self.fields.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Last write wins.
    pub fn set_field(&mut self, field: CheckoutField, value: impl Into<String>) {
        self.fields.insert(field, value.into());
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// A required field is missing only when its value is the empty string;
    /// whitespace is accepted as typed. A delivery time, when given, must
    /// match one of [`DELIVERY_TIME_FORMATS`].
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let errors = ValidationErrors {
            missing: CheckoutField::REQUIRED
                .into_iter()
                .filter(|field| self.get(*field).is_empty())
                .collect(),
            invalid: self.invalid_fields(),
        };
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn invalid_fields(&self) -> BTreeSet<CheckoutField> {
        let delivery_time = self.get(CheckoutField::DeliveryTime);
        if delivery_time.is_empty() || parse_delivery_time(delivery_time).is_some() {
            BTreeSet::new()
        } else {
            BTreeSet::from([CheckoutField::DeliveryTime])
        }
    }
}

/// The landing page's enquiry form. Same fields as checkout, separate state.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct EnquiryForm(pub CheckoutForm);

/// Outcome of the most recent failed submission per form, shown next to it.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFeedback {
    pub checkout: Option<OrderError>,
    pub enquiry: Option<ValidationErrors>,
}

impl FormFeedback {
    /// What the last checkout submission found wrong with `field`, if anything.
    pub fn checkout_problem(&self, field: CheckoutField) -> Option<FieldProblem> {
        match &self.checkout {
            Some(OrderError::MissingFields(errors)) => errors.problem(field),
            _ => None,
        }
    }

    pub fn enquiry_problem(&self, field: CheckoutField) -> Option<FieldProblem> {
        self.enquiry.as_ref().and_then(|e| e.problem(field))
    }
}
