//! Site configuration module.
//!
//! Handles loading and validating the `config.json` document that drives the
//! whole site. One document describes one business: identity, theme colors,
//! and a set of optional content sections (services, hours, gallery,
//! testimonials, contact details).
//!
//! ## Document Shape
//!
//! ```json
//! {
//!   "businessName": "Rosie's Bakery",        // required
//!   "tagline": "Fresh bread, every morning",
//!   "theme": {
//!     "primaryColor": "#8b4513",
//!     "secondaryColor": "#fff8f0",
//!     "accentColor": "#d2691e"
//!   },
//!   "about": { "title": "Our Story", "description": "..." },
//!   "services": [
//!     { "icon": "🍞", "name": "Breads", "description": "..." }
//!   ],
//!   "hours": { "monday": "7am - 5pm", "sunday": "Closed" },
//!   "gallery": {
//!     "title": "From the Oven",
//!     "images": [ { "url": "img/01.jpg", "caption": "Sourdough" } ]
//!   },
//!   "testimonials": [ { "text": "...", "name": "Ana", "rating": 5 } ],
//!   "googleMapsEmbed": "https://www.google.com/maps/embed?pb=...",
//!   "address": { "street": "12 Oak St", "city": "Rye", "state": "NY", "zip": "10580" },
//!   "phone": "(555) 123-4567",
//!   "email": "hello@rosies.example",
//!   "socialMedia": { "instagram": "https://instagram.com/rosies" }
//! }
//! ```
//!
//! ## Partial Configuration
//!
//! Every section except `businessName` is optional. A missing section means
//! the corresponding page region is simply left unpopulated — it is never an
//! error. Unknown keys are rejected to catch typos early.
//!
//! ## Trusted Content
//!
//! All free-text fields are HTML-escaped when rendered. Operators who need
//! raw markup in descriptions can set `"trustedHtml": true`, which restores
//! the original behavior of treating the document as trusted input. This is
//! an explicit opt-out: a config that can be edited by untrusted parties
//! must never enable it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.json`.
///
/// Read-only input for a single render pass: the populator borrows it and
/// never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteConfig {
    /// Business name — the only required field. Used for the page title,
    /// nav logo, hero heading, and footer.
    pub business_name: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub about: Option<About>,
    #[serde(default)]
    pub services: Option<Vec<Service>>,
    /// Day name (lowercase) → free-text time range. Insertion order defines
    /// display order.
    #[serde(default)]
    pub hours: Option<IndexMap<String, String>>,
    #[serde(default)]
    pub gallery: Option<Gallery>,
    #[serde(default)]
    pub testimonials: Option<Vec<Testimonial>>,
    #[serde(default)]
    pub google_maps_embed: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub social_media: Option<SocialMedia>,
    /// Opt-out from HTML escaping for free-text fields. See module docs.
    #[serde(default)]
    pub trusted_html: bool,
}

/// Color tokens applied verbatim as CSS custom properties on `:root`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Theme {
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct About {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Service {
    pub icon: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Gallery {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub images: Vec<GalleryImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GalleryImage {
    pub url: String,
    pub caption: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Testimonial {
    pub text: String,
    pub name: String,
    /// Star rating, nominally 0–5. Out-of-range values are clamped at
    /// render time, not rejected here.
    pub rating: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SocialMedia {
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
}

/// Load and validate `config.json` from the given path.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: SiteConfig = serde_json::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

/// Validate a parsed configuration.
///
/// Only structural problems are fatal. Cosmetic problems (an out-of-range
/// rating) are logged and repaired at render time.
pub fn validate(config: &SiteConfig) -> Result<(), ConfigError> {
    if config.business_name.trim().is_empty() {
        return Err(ConfigError::Validation(
            "businessName must not be empty".to_string(),
        ));
    }
    if let Some(testimonials) = &config.testimonials {
        for t in testimonials {
            if !(0..=5).contains(&t.rating) {
                log::warn!(
                    "testimonial from {:?} has rating {} outside 0-5; it will be clamped",
                    t.name,
                    t.rating
                );
            }
        }
    }
    if let Some(hours) = &config.hours {
        for day in hours.keys() {
            if !WEEKDAY_NAMES.contains(&day.as_str()) {
                log::warn!("hours entry {:?} is not a lowercase weekday name", day);
            }
        }
    }
    Ok(())
}

/// Lowercase calendar day names, Sunday first (matching `Date.getDay()`
/// ordering in the original page script — kept for familiar config docs).
pub const WEEKDAY_NAMES: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

/// Return a complete example `config.json` with every supported section,
/// for the `gen-config` subcommand.
pub fn sample_config_json() -> String {
    let sample = SiteConfig {
        business_name: "Rosie's Bakery".to_string(),
        tagline: Some("Fresh bread, every morning".to_string()),
        theme: Some(Theme {
            primary_color: "#8b4513".to_string(),
            secondary_color: "#fff8f0".to_string(),
            accent_color: "#d2691e".to_string(),
        }),
        about: Some(About {
            title: "Our Story".to_string(),
            description: "Family-owned since 1987, baking with local grain.".to_string(),
        }),
        services: Some(vec![
            Service {
                icon: "🍞".to_string(),
                name: "Artisan Breads".to_string(),
                description: "Sourdough, rye, and baguettes baked daily.".to_string(),
            },
            Service {
                icon: "🎂".to_string(),
                name: "Custom Cakes".to_string(),
                description: "Order three days ahead for any occasion.".to_string(),
            },
        ]),
        hours: Some(IndexMap::from([
            ("monday".to_string(), "7am - 5pm".to_string()),
            ("tuesday".to_string(), "7am - 5pm".to_string()),
            ("wednesday".to_string(), "7am - 5pm".to_string()),
            ("thursday".to_string(), "7am - 5pm".to_string()),
            ("friday".to_string(), "7am - 6pm".to_string()),
            ("saturday".to_string(), "8am - 4pm".to_string()),
            ("sunday".to_string(), "Closed".to_string()),
        ])),
        gallery: Some(Gallery {
            title: Some("From the Oven".to_string()),
            images: vec![
                GalleryImage {
                    url: "images/sourdough.jpg".to_string(),
                    caption: "Saturday sourdough".to_string(),
                },
                GalleryImage {
                    url: "images/counter.jpg".to_string(),
                    caption: "The front counter".to_string(),
                },
            ],
        }),
        testimonials: Some(vec![Testimonial {
            text: "Best croissants outside of Paris.".to_string(),
            name: "Ana M.".to_string(),
            rating: 5,
        }]),
        google_maps_embed: Some("https://www.google.com/maps/embed?pb=EXAMPLE".to_string()),
        address: Some(Address {
            street: "12 Oak Street".to_string(),
            city: "Rye".to_string(),
            state: "NY".to_string(),
            zip: "10580".to_string(),
        }),
        phone: Some("(555) 123-4567".to_string()),
        email: Some("hello@rosies.example".to_string()),
        social_media: Some(SocialMedia {
            facebook: Some("https://facebook.com/rosiesbakery".to_string()),
            instagram: Some("https://instagram.com/rosiesbakery".to_string()),
            twitter: None,
        }),
        trusted_html: false,
    };
    // Serialization of a hand-built value cannot fail
    serde_json::to_string_pretty(&sample).expect("sample config serializes")
}

// ============================================================================
// Tests
// ============================================================================
