use super::*;
use crate::checkout::CheckoutField;
use crate::drawer::DrawerLink;
use crate::error::OrderError;
use crate::route::Route;

#[test]
fn test_order_action_serialization() {
    let actions = [
        OrderAction::SetField {
            form: FormKind::Checkout,
            field: CheckoutField::Pincode,
            value: "600116".to_string(),
        },
        OrderAction::FollowDrawerLink {
            link: DrawerLink::ContactUs,
        },
        OrderAction::Navigate {
            route: Route::MenuPreview,
        },
    ];
    for action in actions {
        let json = serde_json::to_string(&action).unwrap();
        let decoded: OrderAction = serde_json::from_str(&json).unwrap();
        assert_eq!(action, decoded);
    }
}

#[test]
fn test_action_result_notice() {
    assert_eq!(ActionResult::Success.notice(), None);
    let warned = ActionResult::SuccessWithWarning("Naan is already at 0".to_string());
    assert_eq!(warned.warning(), Some("Naan is already at 0"));
    assert_eq!(warned.notice().as_deref(), Some("Naan is already at 0"));

    let failed = ActionResult::Error(OrderError::UnknownItem("Pizza".to_string()));
    assert_eq!(failed.warning(), None);
    assert_eq!(failed.notice().as_deref(), Some("Unknown menu item: Pizza"));
}

#[test]
fn test_cart_edits_are_recognised() {
    assert!(OrderAction::DecrementItem {
        item: "Naan".to_string()
    }
    .is_cart_edit());
    assert!(OrderAction::SetQuantity {
        item: "Naan".to_string(),
        quantity: 3
    }
    .is_cart_edit());
    assert!(!OrderAction::SubmitCheckout.is_cart_edit());
    assert!(!OrderAction::Navigate { route: Route::Menu }.is_cart_edit());
}
