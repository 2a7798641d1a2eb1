//! Bounded history of executed order actions and their outcomes.
//!
//! Pages look up the latest result for the controls they own, e.g. the menu
//! page shows the most recent cart warning under the order summary.

use std::collections::VecDeque;

use bevy::prelude::*;

use super::{ActionResult, OrderAction};
use crate::config::ACTION_LOG_CAPACITY;

#[derive(Resource, Debug, Clone, Default)]
pub struct ActionResultLog {
    entries: VecDeque<(OrderAction, ActionResult)>,
}

impl ActionResultLog {
    /// Record a new pair, dropping the oldest once the log is full.
    pub fn push(&mut self, action: OrderAction, result: ActionResult) {
        if self.entries.len() == ACTION_LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back((action, result));
    }

    /// Most recent result for an action matching `pred`.
    pub fn last_result_for(&self, pred: impl Fn(&OrderAction) -> bool) -> Option<&ActionResult> {
        self.entries
            .iter()
            .rev()
            .find(|(action, _)| pred(action))
            .map(|(_, result)| result)
    }

    /// Notice for the latest cart edit, `None` once a later edit succeeded.
    pub fn cart_notice(&self) -> Option<String> {
        self.last_result_for(OrderAction::is_cart_edit)
            .and_then(ActionResult::notice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrderError;

    fn decrement(item: &str) -> OrderAction {
        OrderAction::DecrementItem {
            item: item.to_string(),
        }
    }

    #[test]
    fn test_log_keeps_only_latest_entries() {
        let mut log = ActionResultLog::default();
        for i in 0..70 {
            log.push(
                OrderAction::SetQuantity {
                    item: "Naan".to_string(),
                    quantity: i,
                },
                ActionResult::Success,
            );
        }
        assert_eq!(log.entries.len(), ACTION_LOG_CAPACITY);
        assert_eq!(
            log.entries.front().map(|(action, _)| action.clone()),
            Some(OrderAction::SetQuantity {
                item: "Naan".to_string(),
                quantity: 6
            })
        );
    }

    #[test]
    fn test_last_result_for_finds_most_recent_match() {
        let mut log = ActionResultLog::default();
        log.push(
            OrderAction::SubmitCheckout,
            ActionResult::Error(OrderError::EmptyCart),
        );
        log.push(OrderAction::OpenDrawer, ActionResult::Success);
        log.push(OrderAction::SubmitCheckout, ActionResult::Success);
        log.push(OrderAction::CloseDrawer, ActionResult::Success);

        let result = log.last_result_for(|a| *a == OrderAction::SubmitCheckout);
        assert_eq!(result, Some(&ActionResult::Success));
        assert!(log.last_result_for(|a| *a == OrderAction::ConfirmOrder).is_none());
    }

    #[test]
    fn test_cart_notice_shows_latest_cart_warning() {
        let mut log = ActionResultLog::default();
        log.push(
            decrement("Naan"),
            ActionResult::SuccessWithWarning("Naan is already at 0".to_string()),
        );
        log.push(OrderAction::OpenDrawer, ActionResult::Success);
        assert_eq!(log.cart_notice().as_deref(), Some("Naan is already at 0"));
    }

    #[test]
    fn test_cart_notice_cleared_by_later_success() {
        let mut log = ActionResultLog::default();
        log.push(
            OrderAction::SetQuantity {
                item: "Pizza".to_string(),
                quantity: 1,
            },
            ActionResult::Error(OrderError::UnknownItem("Pizza".to_string())),
        );
        assert!(log.cart_notice().is_some_and(|n| n.contains("Pizza")));

        log.push(
            OrderAction::IncrementItem {
                item: "Naan".to_string(),
            },
            ActionResult::Success,
        );
        assert_eq!(log.cart_notice(), None);
    }

    #[test]
    fn test_cart_notice_ignores_other_actions() {
        let mut log = ActionResultLog::default();
        log.push(
            OrderAction::SubmitCheckout,
            ActionResult::Error(OrderError::EmptyCart),
        );
        assert_eq!(log.cart_notice(), None);
    }
}
