use bevy::prelude::*;

use super::OrderAction;

/// Actions pushed by the UI this frame, applied in order by the executor.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionQueue {
    pending: Vec<OrderAction>,
}

impl ActionQueue {
    pub fn push(&mut self, action: OrderAction) {
        self.pending.push(action);
    }

    pub fn drain(&mut self) -> Vec<OrderAction> {
        self.pending.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Route;

    #[test]
    fn test_push_and_drain_preserves_fifo() {
        let mut queue = ActionQueue::default();
        queue.push(OrderAction::OpenDrawer);
        queue.push(OrderAction::IncrementItem {
            item: "Naan".to_string(),
        });
        queue.push(OrderAction::Navigate {
            route: Route::Menu,
        });
        let drained = queue.drain();
        assert!(queue.is_empty());
        assert_eq!(drained.len(), 3);
        assert_eq!(drained[0], OrderAction::OpenDrawer);
        assert_eq!(
            drained[1],
            OrderAction::IncrementItem {
                item: "Naan".to_string()
            }
        );
        assert_eq!(
            drained[2],
            OrderAction::Navigate {
                route: Route::Menu
            }
        );
    }
}
