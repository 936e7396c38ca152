use super::*;
use crate::fixtures;
use chrono::NaiveDate;
use shared::error::ErrorCode;
use shared::models::{
    MenuCategory, MenuItemCreate, MenuItemUpdate, OrderStatus, ReservationCreate,
    ReservationStatus, ReservationUpdate, ReviewCreate, TimeSlot,
};

fn menu() -> MenuService {
    MenuService::with_items(fixtures::menu_items(), LatencyProfile::none())
}

fn reservations() -> ReservationService {
    ReservationService::with_reservations(fixtures::reservations(), LatencyProfile::none())
}

fn reviews() -> ReviewService {
    ReviewService::with_reviews(fixtures::reviews(), LatencyProfile::none())
}

fn orders() -> OrderService {
    OrderService::with_orders(fixtures::orders(), LatencyProfile::none())
}

fn reservation_payload() -> ReservationCreate {
    ReservationCreate {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        phone: "555-1234".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        time: TimeSlot::SevenPm,
        guests: 4,
        special_requests: None,
    }
}

// ========================================================================
// Lookup and NotFound
// ========================================================================

#[tokio::test]
async fn get_by_id_returns_a_copy() {
    let service = menu();
    let item = service.get_by_id("4").await.unwrap();
    assert_eq!(item.name, "Grilled Atlantic Salmon");
}

#[tokio::test]
async fn missing_id_rejects_with_the_id_in_the_error() {
    let service = menu();
    let err = service.get_by_id("9999").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::MenuItemNotFound);
    assert!(err.is_not_found());
    assert_eq!(err.missing_id(), Some("9999"));
    assert!(err.message.contains("9999"));
}

#[tokio::test]
async fn each_collaborator_raises_its_own_not_found_code() {
    assert_eq!(
        reservations().get_by_id("x").await.unwrap_err().code,
        ErrorCode::ReservationNotFound
    );
    assert_eq!(
        reviews().get_by_id("x").await.unwrap_err().code,
        ErrorCode::ReviewNotFound
    );
    assert_eq!(
        orders().get_by_id("x").await.unwrap_err().code,
        ErrorCode::OrderNotFound
    );
}

// ========================================================================
// Create
// ========================================================================

#[tokio::test]
async fn create_generates_distinct_ids() {
    let service = menu();
    let before = service.get_all().await.unwrap().len();

    let payload = MenuItemCreate {
        name: "Soup of the Day".to_string(),
        category: MenuCategory::Appetizers,
        price: 6.5,
        description: "Ask your server".to_string(),
        image_url: String::new(),
        dietary: vec![],
    };
    let a = service.create(payload.clone()).await.unwrap();
    let b = service.create(payload).await.unwrap();

    assert_ne!(a.id, b.id);
    assert_eq!(service.get_all().await.unwrap().len(), before + 2);
    // created records are retrievable by their generated id
    assert_eq!(service.get_by_id(&a.id).await.unwrap().name, "Soup of the Day");
}

#[tokio::test]
async fn reservation_create_stamps_pending_status() {
    let service = reservations();
    let created = service.create(reservation_payload()).await.unwrap();

    assert_eq!(created.status, ReservationStatus::Pending);
    assert_eq!(created.guests, 4);
    assert!(!created.id.is_empty());
    let fetched = service.get_by_id(&created.id).await.unwrap();
    assert_eq!(fetched.name, "Jane Doe");
}

#[tokio::test]
async fn order_create_stamps_number_and_delivery_estimate() {
    let service = orders();
    let fixture_order = fixtures::orders().remove(0);
    let payload = shared::models::OrderCreate {
        customer: fixture_order.customer.clone(),
        items: fixture_order.items.clone(),
        subtotal: 20.0,
        tax: 1.6,
        delivery_fee: 5.0,
        total: 26.6,
        payment_method: "credit_card".to_string(),
        special_instructions: None,
    };
    let order = service.create(payload).await.unwrap();

    assert!(order.order_number.starts_with("ORD-"));
    assert_eq!(order.order_number.len(), "ORD-".len() + 6);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.estimated_delivery - order.created_at, chrono::Duration::minutes(30));
}

#[tokio::test]
async fn review_create_prepends_and_stamps_today() {
    let service = reviews();
    let created = service
        .create(ReviewCreate {
            author: "Jane".to_string(),
            rating: 5,
            comment: "Lovely".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(created.date, chrono::Utc::now().date_naive());
    let all = service.get_all().await.unwrap();
    assert_eq!(all[0].id, created.id);
}

// ========================================================================
// Update / delete
// ========================================================================

#[tokio::test]
async fn update_merges_only_provided_fields() {
    let service = menu();
    let updated = service
        .update(
            "1",
            MenuItemUpdate {
                price: Some(10.5),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.price, 10.5);
    // untouched fields preserved
    assert_eq!(updated.name, "Bruschetta Trio");
    assert_eq!(updated.category, MenuCategory::Appetizers);
}

#[tokio::test]
async fn update_missing_id_rejects() {
    let service = reservations();
    let err = service
        .update(
            "9999",
            ReservationUpdate {
                status: Some(ReservationStatus::Confirmed),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ReservationNotFound);
}

#[tokio::test]
async fn delete_removes_and_second_delete_rejects() {
    let service = menu();
    service.delete("2").await.unwrap();
    assert!(service.get_by_id("2").await.is_err());

    let err = service.delete("2").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::MenuItemNotFound);
}

// ========================================================================
// Domain extras
// ========================================================================

#[tokio::test]
async fn get_by_category_filters() {
    let service = menu();
    let desserts = service.get_by_category(MenuCategory::Desserts).await.unwrap();
    assert!(!desserts.is_empty());
    assert!(desserts.iter().all(|i| i.category == MenuCategory::Desserts));
}

#[tokio::test]
async fn reviews_come_back_newest_first() {
    let service = reviews();
    let all = service.get_all().await.unwrap();
    assert!(all.windows(2).all(|w| w[0].date >= w[1].date));
}

#[tokio::test]
async fn average_rating_is_rounded_to_one_decimal() {
    let service = reviews();
    // fixture ratings: 5, 4, 5, 3, 5 -> 22/5 = 4.4
    let avg = service.average_rating().await.unwrap();
    assert_eq!(avg, 4.4);

    let empty = ReviewService::with_reviews(vec![], LatencyProfile::none());
    assert_eq!(empty.average_rating().await.unwrap(), 0.0);
}

#[tokio::test]
async fn every_offered_slot_is_available() {
    let service = reservations();
    let slots = service
        .available_time_slots(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
        .await
        .unwrap();
    assert_eq!(slots.len(), 9);
    assert_eq!(slots.first(), Some(&TimeSlot::FivePm));
    assert_eq!(slots.last(), Some(&TimeSlot::NinePm));
}

// ========================================================================
// Isolation
// ========================================================================

#[tokio::test]
async fn two_services_do_not_share_state() {
    let a = menu();
    let b = menu();
    a.delete("1").await.unwrap();

    assert!(a.get_by_id("1").await.is_err());
    assert!(b.get_by_id("1").await.is_ok());
}
