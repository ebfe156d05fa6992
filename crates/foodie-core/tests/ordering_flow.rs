//! End-to-end flows through the application facade.

use foodie_core::prelude::*;

#[test]
fn member_session_browses_but_cannot_checkout() {
    let mut app = FoodieApp::demo();

    let identity = app.login("member.india@example.com", "member123").unwrap();
    assert_eq!(identity.role, Role::Member);
    assert_eq!(identity.country, Country::India);

    let visible = app.visible_restaurants();
    assert!(!visible.is_empty());
    assert!(visible.iter().all(|r| r.country == Country::India));

    let restaurant_id = visible[0].id.clone();
    let item_id = visible[0].menu[0].id.clone();
    app.add_to_cart(&restaurant_id, &item_id).unwrap();

    let err = app.checkout().unwrap_err();
    assert!(err.is_forbidden());
    assert!(app.orders().is_empty());
}

#[test]
fn admin_builds_cart_and_checks_out() {
    let mut app = FoodieApp::demo();
    app.login("admin@example.com", "admin123").unwrap();

    // Add the same 299-rupee dish twice.
    let restaurant_id = RestaurantId::new("1");
    let item_id = MenuItemId::new("1");
    app.add_to_cart(&restaurant_id, &item_id).unwrap();
    app.add_to_cart(&restaurant_id, &item_id).unwrap();

    assert_eq!(app.cart().total_items(), 2);
    let total = app.cart_total().unwrap();
    assert_eq!(total, Money::from_decimal(598.0, Currency::INR));

    let order_id = app.checkout().unwrap();
    assert!(app.cart().is_empty());

    let order = app.order(&order_id).unwrap();
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total, Money::from_decimal(598.0, Currency::INR));
}

#[test]
fn cancellation_follows_role_and_status_rules() {
    let mut app = FoodieApp::demo();
    app.login("manager.india@example.com", "manager123").unwrap();

    let restaurant_id = RestaurantId::new("1");
    app.add_to_cart(&restaurant_id, &MenuItemId::new("2")).unwrap();
    let order_id = app.checkout().unwrap();

    // Pending orders cancel fine; cancelled orders stay cancelled.
    app.cancel_order(&order_id).unwrap();
    assert_eq!(app.order(&order_id).unwrap().status, OrderStatus::Cancelled);

    let err = app.cancel_order(&order_id).unwrap_err();
    assert!(matches!(
        err,
        AppError::Commerce(CommerceError::InvalidTransition { .. })
    ));
}

#[test]
fn member_cannot_cancel_even_pending_orders() {
    let mut app = FoodieApp::demo();

    // A manager places an order, then the session changes hands.
    app.login("manager.india@example.com", "manager123").unwrap();
    app.add_to_cart(&RestaurantId::new("1"), &MenuItemId::new("1"))
        .unwrap();
    let order_id = app.checkout().unwrap();

    app.logout();
    app.login("member.india@example.com", "member123").unwrap();

    let err = app.cancel_order(&order_id).unwrap_err();
    assert!(err.is_forbidden());
    assert_eq!(app.order(&order_id).unwrap().status, OrderStatus::Pending);
}

#[test]
fn login_failures_are_generic_and_leave_no_session() {
    let mut app = FoodieApp::demo();

    let unknown = app.login("ghost@example.com", "admin123").unwrap_err();
    let wrong = app.login("admin@example.com", "wrong-password").unwrap_err();

    assert!(unknown.is_auth_failure());
    assert!(wrong.is_auth_failure());
    assert_eq!(unknown.to_string(), wrong.to_string());
    assert!(app.current_identity().is_none());
    assert!(app.visible_restaurants().is_empty());
}

#[test]
fn session_restores_across_restarts() {
    // A previous run persisted this identity into the slot.
    let identity = Identity::new(
        "3",
        "Manager America",
        "manager.america@example.com",
        Role::Manager,
        Country::America,
    );
    let payload = serde_json::to_vec(&identity).unwrap();

    let slot = MemorySlot::with_payload(payload);
    let mut app = FoodieApp::new(Catalog::demo(), CredentialDirectory::demo(), slot);

    let restored = app.restore().unwrap();
    assert_eq!(restored.email, "manager.america@example.com");
    assert_eq!(app.currency(), Some(Currency::USD));

    let visible = app.visible_restaurants();
    assert!(visible.iter().all(|r| r.country == Country::America));
}

#[test]
fn restore_discards_malformed_session_blob() {
    let slot = MemorySlot::with_payload(&b"\xff\xfenot a session"[..]);
    let mut app = FoodieApp::new(Catalog::demo(), CredentialDirectory::demo(), slot);

    assert!(app.restore().is_none());
    assert!(app.current_identity().is_none());
    assert!(app.visible_restaurants().is_empty());
}

#[test]
fn payment_methods_stay_consistent_under_admin_management() {
    let mut app = FoodieApp::demo();
    app.login("admin@example.com", "admin123").unwrap();

    let methods = app.payment_methods().unwrap();
    let default_count = methods.iter().filter(|m| m.is_default).count();
    assert_eq!(default_count, 1);

    let id = app
        .add_payment_method(
            PaymentMethodDraft::new(PaymentKind::Wallet, "Paytm Wallet", "7012"),
        )
        .unwrap();
    app.set_default_payment_method(&id).unwrap();

    let methods = app.payment_methods().unwrap();
    assert_eq!(methods.iter().filter(|m| m.is_default).count(), 1);
    assert!(methods.iter().find(|m| m.id == id).unwrap().is_default);

    // Invalid drafts never partially mutate the registry.
    let before = app.payment_methods().unwrap().len();
    let err = app
        .add_payment_method(PaymentMethodDraft::new(PaymentKind::Credit, "No Expiry", "1111"))
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Commerce(CommerceError::Validation { .. })
    ));
    assert_eq!(app.payment_methods().unwrap().len(), before);
}
