// ---------------------------------------------------------------------------
// OrderError: typed failures of cart, checkout and handoff operations
// ---------------------------------------------------------------------------

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::checkout::ValidationErrors;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderError {
    /// A cart operation named an item that is not on the menu.
    UnknownItem(String),
    /// The checkout form was submitted with required fields left empty or
    /// with a value that could not be read.
    MissingFields(ValidationErrors),
    /// The checkout form was submitted with nothing in the cart.
    EmptyCart,
    /// The review page was reached without a submitted order.
    NoActiveOrder,
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderError::UnknownItem(name) => write!(f, "Unknown menu item: {name}"),
            OrderError::MissingFields(errors) => write!(f, "Checkout incomplete: {errors}"),
            OrderError::EmptyCart => write!(f, "Your cart is empty"),
            OrderError::NoActiveOrder => write!(f, "No order in progress"),
        }
    }
}

impl std::error::Error for OrderError {}

impl From<ValidationErrors> for OrderError {
    fn from(errors: ValidationErrors) -> Self {
        OrderError::MissingFields(errors)
    }
}
