use serde::{Deserialize, Serialize};

use crate::error::OrderError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionResult {
    Success,
    /// The action was applied but did nothing the user might expect
    /// (e.g. decrementing an item already at zero).
    SuccessWithWarning(String),
    Error(OrderError),
}

impl ActionResult {
    pub fn warning(&self) -> Option<&str> {
        match self {
            ActionResult::SuccessWithWarning(w) => Some(w.as_str()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&OrderError> {
        match self {
            ActionResult::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Text to show next to the control that triggered the action, if any.
    pub fn notice(&self) -> Option<String> {
        self.warning()
            .map(str::to_string)
            .or_else(|| self.error().map(ToString::to_string))
    }
}

impl From<Result<u32, OrderError>> for ActionResult {
    fn from(result: Result<u32, OrderError>) -> Self {
        match result {
            Ok(_) => ActionResult::Success,
            Err(e) => ActionResult::Error(e),
        }
    }
}
