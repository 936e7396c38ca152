use shared::models::{Address, CustomerInfo, MenuCategory, TimeSlot};
use storefront::menu::{self, MenuFilter};
use storefront::{
    CartStore, Config, ReservationWizard, ReviewBoard, ReviewDraft, Services, checkout,
    print_banner, setup_environment,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (dotenv, logging)
    setup_environment();

    print_banner();

    tracing::info!("Savory Stories storefront starting...");

    // 2. Load configuration and seed the collaborators
    let config = Config::from_env();
    let services = Services::seeded(config.simulate_latency);

    // 3. Browse the menu
    let items = services.menu.get_all().await?;
    let filter = MenuFilter::with_category(MenuCategory::MainCourses);
    let mains = menu::filter_items(&items, &filter);
    tracing::info!(total = items.len(), mains = mains.len(), "menu loaded");

    // 4. Build a cart and check out
    let mut cart = CartStore::new();
    let salmon = services.menu.get_by_id("4").await?;
    let tiramisu = services.menu.get_by_id("8").await?;
    cart.add_item(&salmon, 1)?;
    cart.add_item(&tiramisu, 2)?;

    let pricing = checkout::quote(&cart)?;
    tracing::info!(
        subtotal = pricing.subtotal,
        tax = pricing.tax,
        delivery_fee = pricing.delivery_fee,
        total = pricing.total,
        "cart priced"
    );

    let customer = CustomerInfo {
        name: "Sam Ortiz".to_string(),
        email: "sam.ortiz@example.com".to_string(),
        phone: "555-0190".to_string(),
        address: Address {
            street: "48 Alder Lane".to_string(),
            city: "Springfield".to_string(),
            zip_code: "62704".to_string(),
        },
    };
    let order = checkout::place_order(
        &mut cart,
        customer,
        "credit_card",
        Some("Ring the bell".to_string()),
        &services.orders,
    )
    .await?;
    tracing::info!(order_number = %order.order_number, "order placed, cart cleared");

    // 5. Walk the reservation wizard
    let mut wizard = ReservationWizard::new();
    let dinner_date = wizard.min_date() + chrono::Duration::days(7);
    {
        let draft = wizard.draft_mut();
        draft.date = Some(dinner_date);
        draft.time = Some(TimeSlot::SevenThirtyPm);
        draft.guests = 4;
    }
    wizard.next()?;
    {
        let draft = wizard.draft_mut();
        draft.name = "Jane Doe".to_string();
        draft.email = "jane@example.com".to_string();
        draft.phone = "555-1234".to_string();
    }
    wizard.next()?;
    wizard.next()?;
    let reservation = wizard.confirm(&services.reservations).await?;
    tracing::info!(id = %reservation.id, "reservation confirmed");

    // 6. Load the review board and post a review
    let mut board = ReviewBoard::new();
    board.load(&services.reviews).await?;
    let summary = board.summary();
    tracing::info!(
        reviews = summary.total,
        average = summary.average_rating,
        "reviews loaded"
    );
    board
        .submit(
            &ReviewDraft {
                author: "Sam Ortiz".to_string(),
                rating: 5,
                comment: "Delivery arrived hot and on time.".to_string(),
            },
            &services.reviews,
        )
        .await?;
    tracing::info!(average = board.summary().average_rating, "review posted");

    Ok(())
}
