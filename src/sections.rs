//! Section renderers: pure mappings from a config slice to markup.
//!
//! Each renderer takes one slice of [`crate::config::SiteConfig`] and returns
//! a flat ordered list of item blocks as a single [`Markup`] fragment. The
//! renderers know nothing about where the markup lands — the populator
//! ([`crate::page::populate`]) binds each fragment to its page region.
//!
//! ## Escaping
//!
//! Interpolation through maud is escaped by default, so a config value
//! containing `<script>` renders as text. Free-text description fields
//! (about text, service descriptions, testimonial quotes, gallery captions)
//! honor the `trustedHtml` opt-out and are rendered raw when it is set;
//! identity fields (names, icons, day labels) are always escaped.
//!
//! ## Time-Dependent Output
//!
//! Two renderers depend on the wall clock: `hours` flags the row for the
//! current weekday, and `footer_business_line` stamps the current year. Both
//! take the value as a parameter so rendering stays a pure function; the
//! caller samples the clock fresh on every render.

use crate::config::{Address, GalleryImage, Service, SocialMedia, Testimonial};
use chrono::Weekday;
use indexmap::IndexMap;
use maud::{Markup, PreEscaped, html};

/// How free-text config fields are interpolated.
///
/// `Escaped` is the default. `Trusted` reproduces the original behavior of
/// injecting config values as live markup and must only be used when the
/// config author is trusted (`trustedHtml` in `config.json`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMode {
    Escaped,
    Trusted,
}

impl TextMode {
    pub fn from_flag(trusted_html: bool) -> Self {
        if trusted_html {
            TextMode::Trusted
        } else {
            TextMode::Escaped
        }
    }
}

/// Interpolate a free-text field according to the text mode.
fn free_text(value: &str, mode: TextMode) -> Markup {
    match mode {
        TextMode::Escaped => html! { (value) },
        TextMode::Trusted => PreEscaped(value.to_string()),
    }
}

// ============================================================================
// About
// ============================================================================

/// About description body. A plain paragraph body; free text, so it honors
/// the trusted-HTML opt-out.
pub fn about_description(description: &str, mode: TextMode) -> Markup {
    free_text(description, mode)
}

// ============================================================================
// Services
// ============================================================================

/// One card per service, preserving input order.
pub fn services(services: &[Service], mode: TextMode) -> Markup {
    html! {
        @for service in services {
            div.service-card {
                span.service-icon { (service.icon) }
                h3 { (service.name) }
                p { (free_text(&service.description, mode)) }
            }
        }
    }
}

// ============================================================================
// Hours
// ============================================================================

/// Lowercase display name for a weekday, matching the `hours` config keys.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// One row per entry in the mapping's iteration order. The row whose key
/// matches `today` is flagged with the `today` class.
pub fn hours(hours: &IndexMap<String, String>, today: Weekday) -> Markup {
    let today_name = day_name(today);
    html! {
        @for (day, time) in hours {
            tr class=[(day == today_name).then_some("today")] {
                td { (day) }
                td { (time) }
            }
        }
    }
}

// ============================================================================
// Gallery
// ============================================================================

/// One tile per image, preserving order. Each tile carries its zero-based
/// position as `data-index`, which is what the lightbox opens it by.
pub fn gallery_tiles(images: &[GalleryImage], mode: TextMode) -> Markup {
    html! {
        @for (index, image) in images.iter().enumerate() {
            div.gallery-item data-index=(index) {
                img src=(image.url) alt=(image.caption) loading="lazy";
                div.gallery-caption { (free_text(&image.caption, mode)) }
            }
        }
    }
}

// ============================================================================
// Testimonials
// ============================================================================

/// Star rating: `rating` filled glyphs then `5 - rating` empty ones.
///
/// The rating is clamped into [0, 5] so a malformed config value degrades
/// visually instead of panicking on a negative repeat count.
pub fn star_rating(rating: i64) -> String {
    let filled = rating.clamp(0, 5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// One card per testimonial: quote, letter-square avatar, name, stars.
pub fn testimonials(testimonials: &[Testimonial], mode: TextMode) -> Markup {
    html! {
        @for testimonial in testimonials {
            div.testimonial-card {
                p.testimonial-text { (free_text(&testimonial.text, mode)) }
                div.testimonial-author {
                    div.testimonial-author-avatar {
                        (testimonial.name.chars().next().map(String::from).unwrap_or_default())
                    }
                    div.testimonial-author-info {
                        h4 { (testimonial.name) }
                        div.testimonial-rating { (star_rating(testimonial.rating)) }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Contact
// ============================================================================

/// Address block: street on one line, city/state/zip on the next.
pub fn address(address: &Address) -> Markup {
    html! {
        (address.street)
        br;
        (address.city) ", " (address.state) " " (address.zip)
    }
}

/// Dialable `tel:` href — the displayed number keeps its formatting, the
/// link target strips everything that is not a digit.
pub fn dial_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("tel:{digits}")
}

/// Social links for the platforms present in config, each opening in a new
/// browsing context with no-opener isolation.
pub fn social_links(social: &SocialMedia) -> Markup {
    let platforms = [
        (&social.facebook, "Facebook", "📘"),
        (&social.instagram, "Instagram", "📷"),
        (&social.twitter, "Twitter", "🐦"),
    ];
    html! {
        @for (url, label, glyph) in platforms {
            @if let Some(url) = url {
                a.social-link href=(url) target="_blank" rel="noopener" aria-label=(label) {
                    (glyph)
                }
            }
        }
    }
}

/// Count of platforms that will produce a link.
pub fn social_link_count(social: &SocialMedia) -> usize {
    [&social.facebook, &social.instagram, &social.twitter]
        .iter()
        .filter(|p| p.is_some())
        .count()
}

// ============================================================================
// Footer
// ============================================================================

/// Footer copyright line with the wall-clock year supplied by the caller.
pub fn footer_business_line(business_name: &str, year: i32) -> String {
    format!("© {year} {business_name}. All rights reserved.")
}

// ============================================================================
// Tests
// ============================================================================
