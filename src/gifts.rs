//! Mock gift catalog and simulated checkout flow.
//!
//! Everything here is hard-coded data behind artificial delays: the
//! catalog is static, "fetching" sleeps to feel like a network call, and
//! order creation returns a processing order without talking to anyone.
//! Real gift-card aggregator and payment integration are explicitly out
//! of scope.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};
use uuid::Uuid;

/// Flat service fee added to every order, in dollars.
pub const SERVICE_FEE: f64 = 2.99;

/// Simulated latency of a catalog fetch.
pub const FETCH_DELAY: Duration = Duration::from_millis(500);

/// Simulated latency of order creation.
pub const ORDER_DELAY: Duration = Duration::from_secs(2);

/// Card designs offered at checkout.
pub const GIFT_CARD_DESIGNS: [&str; 5] = ["Classic", "Birthday", "Elegant", "Fun", "Minimal"];

/// Gift catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GiftCategory {
    /// Food delivery and restaurants
    Food,
    /// Retail and shopping
    Retail,
    /// Experiences and classes
    Experience,
    /// Streaming and entertainment
    Entertainment,
}

impl GiftCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 4] = [Self::Food, Self::Retail, Self::Experience, Self::Entertainment];

    /// Display name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Retail => "Retail",
            Self::Experience => "Experience",
            Self::Entertainment => "Entertainment",
        }
    }
}

/// A purchasable gift card brand in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftCardOption {
    /// Catalog identifier
    pub id: String,
    /// Brand display name
    pub brand_name: String,
    /// Category this brand is listed under
    pub category: GiftCategory,
    /// Whether the brand is surfaced as popular
    pub is_popular: bool,
    /// Smallest purchasable amount, in dollars
    pub min_amount: f64,
    /// Largest purchasable amount, in dollars
    pub max_amount: f64,
}

impl GiftCardOption {
    /// Formatted price range like `$15 - $200`.
    #[must_use]
    pub fn price_range(&self) -> String {
        format!("${:.0} - ${:.0}", self.min_amount, self.max_amount)
    }
}

/// Lifecycle of a simulated order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order accepted, payment simulated, delivery pending
    Processing,
    /// Order confirmed by the (imaginary) fulfiller
    Confirmed,
    /// Gift delivered to the recipient
    Delivered,
    /// Order failed
    Failed,
}

impl OrderStatus {
    /// Human-readable status name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Processing => "Processing",
            Self::Confirmed => "Confirmed",
            Self::Delivered => "Delivered",
            Self::Failed => "Failed",
        }
    }
}

/// A simulated gift order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftOrder {
    /// Order identifier handed out by the payment simulation
    pub id: String,
    /// The gift that was ordered
    pub gift: GiftCardOption,
    /// Gift amount in dollars, excluding the service fee
    pub amount: f64,
    /// Message printed on the card
    pub message: String,
    /// Card design chosen at checkout
    pub design: String,
    /// Recipient email, possibly empty when a phone is given
    pub recipient_email: String,
    /// Recipient phone, possibly empty when an email is given
    pub recipient_phone: String,
    /// Scheduled delivery date; `None` means deliver immediately
    pub delivery_date: Option<NaiveDate>,
    /// Current order status
    pub status: OrderStatus,
    /// When the order was created
    pub created_at: DateTime<Utc>,
}

impl GiftOrder {
    /// Amount charged: the gift amount plus the service fee.
    #[must_use]
    pub fn total_amount(&self) -> f64 {
        self.amount + SERVICE_FEE
    }
}

/// Checkout gate: an order needs a plausible email or phone and a
/// positive amount before payment can be simulated.
#[must_use]
pub fn can_checkout(recipient_email: &str, recipient_phone: &str, amount: f64) -> bool {
    let has_valid_email = !recipient_email.is_empty() && recipient_email.contains('@');
    let has_valid_phone = !recipient_phone.is_empty() && recipient_phone.len() >= 10;

    (has_valid_email || has_valid_phone) && amount > 0.0
}

/// Mock payment authorization: hands back an order id for any positive
/// amount, `None` otherwise. No money moves anywhere.
#[must_use]
pub fn simulate_payment(amount: f64) -> Option<String> {
    if amount <= 0.0 {
        return None;
    }
    Some(format!("ORDER-{}", Uuid::new_v4().simple()))
}

/// Serves the static gift catalog with simulated latency.
#[derive(Debug, Clone)]
pub struct GiftService {
    available_gifts: Vec<GiftCardOption>,
}

impl Default for GiftService {
    fn default() -> Self {
        Self::new()
    }
}

impl GiftService {
    /// Creates a service pre-seeded with every category's options.
    #[must_use]
    pub fn new() -> Self {
        let available_gifts: Vec<GiftCardOption> = GiftCategory::ALL
            .into_iter()
            .flat_map(catalog_options)
            .collect();
        info!(
            "Gift service initialized with {} options across all categories",
            available_gifts.len()
        );
        Self { available_gifts }
    }

    /// Currently loaded gift options.
    #[must_use]
    pub fn available_gifts(&self) -> &[GiftCardOption] {
        &self.available_gifts
    }

    /// "Fetches" the options for one category, replacing the loaded set,
    /// after a simulated network delay.
    pub async fn fetch_gift_options(&mut self, category: GiftCategory) -> &[GiftCardOption] {
        debug!("Fetching gift options for category: {}", category.as_str());
        sleep(FETCH_DELAY).await;

        self.available_gifts = catalog_options(category);
        &self.available_gifts
    }

    /// Creates a simulated order for `gift` after an artificial
    /// processing delay. The order always comes back in `Processing`
    /// state; there is no real fulfillment behind it.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_gift_order(
        &self,
        gift: GiftCardOption,
        amount: f64,
        message: String,
        design: String,
        recipient_email: String,
        recipient_phone: String,
        delivery_date: Option<NaiveDate>,
        order_id: String,
    ) -> GiftOrder {
        sleep(ORDER_DELAY).await;

        GiftOrder {
            id: order_id,
            gift,
            amount,
            message,
            design,
            recipient_email,
            recipient_phone,
            delivery_date,
            status: OrderStatus::Processing,
            created_at: Utc::now(),
        }
    }
}

/// The hard-coded catalog for one category.
fn catalog_options(category: GiftCategory) -> Vec<GiftCardOption> {
    let entries: &[(&str, &str, bool, f64, f64)] = match category {
        GiftCategory::Food => &[
            ("1", "Uber Eats", true, 15.0, 200.0),
            ("2", "DoorDash", true, 10.0, 150.0),
            ("3", "Grubhub", false, 20.0, 100.0),
            ("4", "Chipotle", true, 25.0, 75.0),
            ("5", "Starbucks", true, 10.0, 100.0),
        ],
        GiftCategory::Retail => &[
            ("6", "Amazon", true, 25.0, 500.0),
            ("7", "Target", true, 20.0, 200.0),
            ("8", "Walmart", false, 15.0, 150.0),
            ("9", "Best Buy", false, 50.0, 500.0),
            ("10", "Nike", true, 25.0, 200.0),
        ],
        GiftCategory::Experience => &[
            ("11", "Airbnb", true, 50.0, 500.0),
            ("12", "Groupon", false, 20.0, 200.0),
            ("13", "ClassPass", false, 30.0, 150.0),
            ("14", "MasterClass", true, 90.0, 180.0),
        ],
        GiftCategory::Entertainment => &[
            ("15", "Netflix", true, 15.0, 100.0),
            ("16", "Spotify", true, 10.0, 120.0),
            ("17", "Hulu", false, 12.0, 120.0),
            ("18", "Disney+", true, 8.0, 80.0),
        ],
    };

    entries
        .iter()
        .map(|&(id, brand_name, is_popular, min_amount, max_amount)| GiftCardOption {
            id: id.to_string(),
            brand_name: brand_name.to_string(),
            category,
            is_popular,
            min_amount,
            max_amount,
        })
        .collect()
}
