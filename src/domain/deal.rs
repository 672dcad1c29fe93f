//! Deal domain model and derived display fields.
//!
//! A [`Deal`] is an immutable fixture record describing a promotional food
//! offer. Everything a view shows beyond the raw fields (price tier, discount
//! percentage, drumstick rating, share text, outbound links) is computed here
//! on demand from those fields and never stored alongside them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound of the 5-point rating scale used by the catalog.
pub const MAX_RATING: f64 = 5.0;

/// Number of drumstick icons in the displayed rating.
pub const MAX_DRUMSTICKS: u8 = 4;

const MAPS_BASE_URL: &str = "https://maps.google.com/maps";

/// A promotional food offer.
///
/// Field names follow the catalog's camelCase JSON. `priceLevel` is not a
/// field: see [`Deal::price_tier`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: String,
    pub deal_name: String,
    pub restaurant_name: String,
    pub cuisine: String,
    pub category: String,
    pub description: String,
    pub address: String,
    /// Display asset URI, resolved by the presentation layer.
    pub image: String,
    /// Rating on a 0-5 scale.
    pub rating: f64,
    /// Distance in miles.
    pub distance: f64,
    pub original_price: f64,
    pub discounted_price: f64,
    pub days_until_expiration: u32,
    /// Display string paired with `days_until_expiration`, e.g. `8/7/2025`.
    pub expiration_date: String,
    /// Free-text promotional label such as `30% OFF`.
    pub offer: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<String>,
}

/// Coarse price bucket derived from a discounted price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriceTier {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Premium,
    #[serde(rename = "$$$$")]
    Luxury,
}

impl PriceTier {
    /// Returns the dollar-sign label for this tier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Budget => "$",
            Self::Moderate => "$$",
            Self::Premium => "$$$",
            Self::Luxury => "$$$$",
        }
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Buckets a price into a [`PriceTier`].
///
/// Thresholds: below 15 is `$`, below 25 is `$$`, below 35 is `$$$`,
/// anything else is `$$$$`.
///
/// # Examples
///
/// ```
/// use food_deals::domain::{price_tier, PriceTier};
///
/// assert_eq!(price_tier(14.24), PriceTier::Budget);
/// assert_eq!(price_tier(15.0), PriceTier::Moderate);
/// assert_eq!(price_tier(35.0), PriceTier::Luxury);
/// ```
#[must_use]
pub fn price_tier(price: f64) -> PriceTier {
    if price < 15.0 {
        PriceTier::Budget
    } else if price < 25.0 {
        PriceTier::Moderate
    } else if price < 35.0 {
        PriceTier::Premium
    } else {
        PriceTier::Luxury
    }
}

/// Formats a monetary amount the way deal cards print it (`$32`, `$17.49`).
#[must_use]
pub fn format_price(amount: f64) -> String {
    format!("${amount}")
}

impl Deal {
    /// Price tier of the discounted price.
    #[must_use]
    pub fn price_tier(&self) -> PriceTier {
        price_tier(self.discounted_price)
    }

    /// Discount as a percentage of the original price.
    ///
    /// A non-positive or non-finite original price yields `0.0` rather than a
    /// division fault.
    ///
    /// # Examples
    ///
    /// ```
    /// # use food_deals::Deal;
    /// # let mut deal: Deal = serde_json::from_str(r#"{"id":"1","dealName":"d","restaurantName":"r",
    /// #   "cuisine":"c","category":"k","description":"","address":"","image":"","rating":4.0,
    /// #   "distance":1.0,"originalPrice":20.0,"discountedPrice":10.0,"daysUntilExpiration":1,
    /// #   "expirationDate":"","offer":""}"#).unwrap();
    /// assert_eq!(deal.discount_percent(), 50.0);
    /// deal.original_price = 0.0;
    /// assert_eq!(deal.discount_percent(), 0.0);
    /// ```
    #[must_use]
    pub fn discount_percent(&self) -> f64 {
        if !self.original_price.is_finite() || self.original_price <= 0.0 {
            return 0.0;
        }
        (self.original_price - self.discounted_price) / self.original_price * 100.0
    }

    /// Amount saved per use, never negative.
    #[must_use]
    pub fn savings(&self) -> f64 {
        (self.original_price - self.discounted_price).max(0.0)
    }

    /// Rating converted to the 4-drumstick display scale.
    #[must_use]
    pub fn drumsticks(&self) -> u8 {
        let scaled = (self.rating / MAX_RATING * f64::from(MAX_DRUMSTICKS)).round();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = scaled.clamp(0.0, f64::from(MAX_DRUMSTICKS)) as u8;
        count
    }

    /// `Ending in N days` badge text.
    #[must_use]
    pub fn expiration_label(&self) -> String {
        format!("Ending in {} days", self.days_until_expiration)
    }

    /// `Expires <date>` badge text.
    #[must_use]
    pub fn expires_label(&self) -> String {
        format!("Expires {}", self.expiration_date)
    }

    /// Distance and address line, e.g. `0.5 miles • 1423 Valencia St`.
    #[must_use]
    pub fn location_label(&self) -> String {
        format!("{} miles • {}", self.distance, self.address)
    }

    /// Text placed on the clipboard when the deal is shared.
    ///
    /// `origin` is the base URL the deal link is built from.
    #[must_use]
    pub fn share_text(&self, origin: &str) -> String {
        format!(
            "Check out this amazing deal: {} for {} (originally {}) at {}! {}/deal/{}",
            self.deal_name,
            format_price(self.discounted_price),
            format_price(self.original_price),
            self.restaurant_name,
            origin.trim_end_matches('/'),
            self.id
        )
    }

    /// Maps search URL for the restaurant address within `location`.
    #[must_use]
    pub fn directions_url(&self, location: &str) -> String {
        let query = format!("{}, {}", self.address, location);
        let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
        format!("{MAPS_BASE_URL}?q={encoded}")
    }

    /// Placeholder restaurant website derived from the restaurant name.
    #[must_use]
    pub fn website_url(&self) -> String {
        let host: String = self
            .restaurant_name
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        format!("https://www.{host}.com")
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn deal(id: &str) -> Deal {
        Deal {
            id: id.to_string(),
            deal_name: format!("Deal {id}"),
            restaurant_name: "Bella Italia".to_string(),
            cuisine: "Italian".to_string(),
            category: "Main Course".to_string(),
            description: String::new(),
            address: "1423 Valencia St".to_string(),
            image: String::new(),
            rating: 4.5,
            distance: 0.5,
            original_price: 24.99,
            discounted_price: 17.49,
            days_until_expiration: 3,
            expiration_date: "8/7/2025".to_string(),
            offer: "30% OFF".to_string(),
            ingredients: vec![],
        }
    }

    #[test]
    fn price_tier_boundaries() {
        assert_eq!(price_tier(0.0), PriceTier::Budget);
        assert_eq!(price_tier(14.99), PriceTier::Budget);
        assert_eq!(price_tier(15.0), PriceTier::Moderate);
        assert_eq!(price_tier(24.99), PriceTier::Moderate);
        assert_eq!(price_tier(25.0), PriceTier::Premium);
        assert_eq!(price_tier(34.99), PriceTier::Premium);
        assert_eq!(price_tier(35.0), PriceTier::Luxury);
        assert_eq!(PriceTier::Moderate.to_string(), "$$");
    }

    #[test]
    fn price_tier_tracks_discounted_price() {
        let mut d = deal("1");
        assert_eq!(d.price_tier(), PriceTier::Moderate);
        d.discounted_price = 13.5;
        assert_eq!(d.price_tier(), PriceTier::Budget);
    }

    #[test]
    fn discount_guards_zero_original_price() {
        let mut d = deal("1");
        d.original_price = 0.0;
        d.discounted_price = 0.0;
        assert_eq!(d.discount_percent(), 0.0);
        d.original_price = f64::NAN;
        assert_eq!(d.discount_percent(), 0.0);
    }

    #[test]
    fn drumsticks_scale_and_clamp() {
        let mut d = deal("1");
        d.rating = 4.5;
        assert_eq!(d.drumsticks(), 4);
        d.rating = 4.2;
        assert_eq!(d.drumsticks(), 3);
        d.rating = 0.0;
        assert_eq!(d.drumsticks(), 0);
        d.rating = 9.0;
        assert_eq!(d.drumsticks(), 4);
    }

    #[test]
    fn share_text_matches_card_format() {
        let mut d = deal("2");
        d.deal_name = "Dragon Roll & Miso Soup Combo".to_string();
        d.restaurant_name = "Sushi Master".to_string();
        d.original_price = 32.0;
        d.discounted_price = 21.33;
        assert_eq!(
            d.share_text("https://deals.test/"),
            "Check out this amazing deal: Dragon Roll & Miso Soup Combo for $21.33 \
             (originally $32) at Sushi Master! https://deals.test/deal/2"
        );
    }

    #[test]
    fn outbound_links() {
        let mut d = deal("3");
        d.restaurant_name = "Burger  Palace".to_string();
        assert_eq!(d.website_url(), "https://www.burgerpalace.com");

        let url = d.directions_url("Mission District, San Francisco");
        assert!(url.starts_with("https://maps.google.com/maps?q=1423+Valencia+St%2C+Mission"));
    }

    #[test]
    fn deserializes_catalog_shape_and_ignores_stored_price_level() {
        let json = r#"{
            "id": "9", "dealName": "Tacos", "restaurantName": "Taco Fiesta",
            "cuisine": "Mexican", "category": "Tacos", "description": "",
            "address": "2550 Mission St", "image": "", "rating": 4.4,
            "distance": 0.6, "originalPrice": 16.99, "discountedPrice": 16.99,
            "daysUntilExpiration": 7, "expirationDate": "8/11/2025",
            "offer": "Free Delivery", "priceLevel": "$$$$"
        }"#;
        let d: Deal = serde_json::from_str(json).unwrap();
        assert_eq!(d.price_tier(), PriceTier::Moderate);
        assert!(d.ingredients.is_empty());
        assert_eq!(d.discount_percent(), 0.0);
    }
}
