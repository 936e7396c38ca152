//! End-to-end flow tests over fixture-seeded collaborators
//!
//! Latency simulation is disabled so the suite runs at full speed; the
//! code paths are identical otherwise.

use shared::error::ErrorCode;
use shared::models::{Address, CustomerInfo, MenuCategory, TimeSlot};
use storefront::menu::{self, MenuFilter};
use storefront::{CartStore, ReservationWizard, ReviewBoard, ReviewDraft, Services, checkout};

fn customer() -> CustomerInfo {
    CustomerInfo {
        name: "Sam Ortiz".to_string(),
        email: "sam.ortiz@example.com".to_string(),
        phone: "555-0190".to_string(),
        address: Address {
            street: "48 Alder Lane".to_string(),
            city: "Springfield".to_string(),
            zip_code: "62704".to_string(),
        },
    }
}

#[tokio::test]
async fn browse_fill_cart_and_check_out() {
    let services = Services::seeded(false);

    // browse: category filter plus search
    let items = services.menu.get_all().await.unwrap();
    let filter = MenuFilter {
        category: Some(MenuCategory::MainCourses),
        search: "salmon".to_string(),
    };
    let matches = menu::filter_items(&items, &filter);
    assert_eq!(matches.len(), 1);
    let salmon = matches[0].clone();

    // cart bookkeeping
    let mut cart = CartStore::new();
    cart.add_item(&salmon, 1).unwrap();
    cart.add_item(&salmon, 1).unwrap();
    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.totals().total_items, 2);

    // checkout
    let order = checkout::place_order(&mut cart, customer(), "credit_card", None, &services.orders)
        .await
        .unwrap();
    assert!(order.order_number.starts_with("ORD-"));
    assert!(cart.is_empty());

    // the collaborator now owns the placed order
    let stored = services.orders.get_by_id(&order.id).await.unwrap();
    assert_eq!(stored.items[0].quantity, 2);
    assert_eq!(stored.total, order.total);
}

#[tokio::test]
async fn checkout_pricing_policy_is_exact() {
    let services = Services::seeded(false);
    let mut cart = CartStore::new();

    // two 10.00 lines -> subtotal 20.00, tax 1.60, fee 5.00, total 26.60
    let mut item = services.menu.get_by_id("1").await.unwrap();
    item.price = 10.0;
    cart.add_item(&item, 2).unwrap();

    let pricing = checkout::quote(&cart).unwrap();
    assert_eq!(pricing.subtotal, 20.00);
    assert_eq!(pricing.tax, 1.60);
    assert_eq!(pricing.delivery_fee, 5.00);
    assert_eq!(pricing.total, 26.60);
}

#[tokio::test]
async fn empty_cart_checkout_is_rejected() {
    let services = Services::seeded(false);
    let mut cart = CartStore::new();

    let err = checkout::place_order(&mut cart, customer(), "credit_card", None, &services.orders)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::CartEmpty);
}

#[tokio::test]
async fn reservation_journey_from_slots_to_confirmation() {
    let services = Services::seeded(false);
    let mut wizard = ReservationWizard::new();
    let date = wizard.min_date() + chrono::Duration::days(3);

    // the booking form offers the fixed slot set
    let slots = services.reservations.available_time_slots(date).await.unwrap();
    assert_eq!(slots.len(), 9);

    {
        let draft = wizard.draft_mut();
        draft.date = Some(date);
        draft.time = Some(slots[4]); // 7:00 PM
        draft.guests = 4;
    }
    wizard.next().unwrap();
    {
        let draft = wizard.draft_mut();
        draft.name = "Jane Doe".to_string();
        draft.email = "jane@example.com".to_string();
        draft.phone = "555-1234".to_string();
    }
    wizard.next().unwrap();
    wizard.next().unwrap();

    let before = services.reservations.get_all().await.unwrap().len();
    let reservation = wizard.confirm(&services.reservations).await.unwrap();
    assert_eq!(reservation.time, TimeSlot::SevenPm);

    // stored by the collaborator, draft reset, user still on confirmation
    let after = services.reservations.get_all().await.unwrap();
    assert_eq!(after.len(), before + 1);
    assert!(after.iter().any(|r| r.id == reservation.id));
    assert_eq!(wizard.draft().name, "");
    assert_eq!(wizard.step(), storefront::WizardStep::Confirm);
}

#[tokio::test]
async fn review_journey_load_submit_and_summarize() {
    let services = Services::seeded(false);
    let mut board = ReviewBoard::new();
    board.load(&services.reviews).await.unwrap();
    let initial = board.reviews().len();
    assert!(initial > 0);

    let draft = ReviewDraft {
        author: "Sam Ortiz".to_string(),
        rating: 4,
        comment: "Great calamari.".to_string(),
    };
    let created = board.submit(&draft, &services.reviews).await.unwrap();

    assert_eq!(board.reviews().len(), initial + 1);
    assert_eq!(board.reviews()[0].id, created.id);
    let summary = board.summary();
    assert_eq!(summary.total, initial + 1);

    // invalid drafts never reach the collaborator
    let err = board
        .submit(
            &ReviewDraft {
                author: String::new(),
                rating: 5,
                comment: "x".to_string(),
            },
            &services.reviews,
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::RequiredField);
    assert_eq!(services.reviews.get_all().await.unwrap().len(), initial + 1);
}

#[tokio::test]
async fn detail_lookup_miss_surfaces_the_id() {
    let services = Services::seeded(false);
    let err = services.menu.get_by_id("no-such-item").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.missing_id(), Some("no-such-item"));
}
