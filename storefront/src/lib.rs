//! Savory Stories storefront core
//!
//! # Architecture overview
//!
//! The stateful flows behind the restaurant's site: a cart with derived
//! totals, a checkout with a fixed pricing policy, a step-gated
//! reservation wizard, menu browsing and a customer review board. There
//! is no backend; the "services" are local collaborators that simulate
//! network latency over fixture-seeded in-memory stores.
//!
//! # Module structure
//!
//! ```text
//! storefront/src/
//! ├── cart/          # Cart store and money arithmetic
//! ├── checkout/      # Pricing policy and order submission
//! ├── reservation/   # Step-gated reservation wizard
//! ├── menu/          # Category filter, search, grouped display
//! ├── reviews/       # Review board and summary statistics
//! ├── services/      # Mock data collaborators (in-memory + latency)
//! ├── fixtures.rs    # Bundled seed records
//! ├── config.rs      # Environment configuration
//! └── logger.rs      # Tracing setup
//! ```

pub mod cart;
pub mod checkout;
pub mod config;
pub mod fixtures;
pub mod logger;
pub mod menu;
pub mod reservation;
pub mod reviews;
pub mod services;

// Re-export public types
pub use cart::CartStore;
pub use checkout::{OrderGateway, PricingSummary};
pub use config::Config;
pub use logger::{init_logger, init_logger_with_file};
pub use menu::MenuFilter;
pub use reservation::{ReservationGateway, ReservationWizard, WizardEvent, WizardStep};
pub use reviews::{ReviewBoard, ReviewDraft, ReviewGateway};
pub use services::{MenuService, OrderService, ReservationService, ReviewService, Services};

// Re-export unified error types from shared
pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};

/// Load `.env` and initialize logging
pub fn setup_environment() {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
   _____
  / ___/____ __   ______  _______  __
  \__ \/ __ `/ | / / __ \/ ___/ / / /
 ___/ / /_/ /| |/ / /_/ / /  / /_/ /
/____/\__,_/ |___/\____/_/   \__, /
    _____ __            _   /____/
   / ___// /_____  _____(_)__  _____
   \__ \/ __/ __ \/ ___/ / _ \/ ___/
  ___/ / /_/ /_/ / /  / /  __(__  )
 /____/\__/\____/_/  /_/\___/____/
    "#
    );
}
