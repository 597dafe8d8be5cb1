//! Small independent page behaviors: nav menu toggle, contact form
//! submission, and in-page anchor resolution.
//!
//! None of these share state with each other or with the lightbox. Each is
//! modeled as a plain value plus pure functions so the contracts are
//! unit-testable; the emitted page wires them up with precomputed attributes
//! and a few lines of shim script.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

// ============================================================================
// Nav toggle
// ============================================================================

/// Mobile navigation menu visibility. Nothing persists across page loads —
/// a fresh menu always starts closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// The menu control flips visibility.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Activating any link inside the menu forces it closed.
    pub fn link_activated(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

// ============================================================================
// Contact form
// ============================================================================

/// Named fields collected from the contact form on submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl FormFields {
    /// Collect the known named fields from a flat (name, value) mapping.
    /// Unknown names are ignored; missing names stay empty.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut fields = Self::default();
        for (name, value) in entries {
            match name {
                "name" => fields.name = value.to_string(),
                "email" => fields.email = value.to_string(),
                "phone" => fields.phone = value.to_string(),
                "message" => fields.message = value.to_string(),
                _ => {}
            }
        }
        fields
    }
}

/// Percent-encode a mailto component. Everything outside alphanumerics is
/// encoded, which is a safe superset of what mail clients require.
fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

/// Build the `mailto:` URL a form submission navigates to.
///
/// Subject and body are percent-encoded; an empty phone is reported as
/// "Not provided". The recipient is the site's configured contact email.
pub fn mailto_link(fields: &FormFields, recipient: &str) -> String {
    let subject = format!("Website Contact from {}", fields.name);
    let phone = if fields.phone.is_empty() {
        "Not provided"
    } else {
        &fields.phone
    };
    let body = format!(
        "Name: {}\nEmail: {}\nPhone: {}\n\nMessage:\n{}",
        fields.name, fields.email, phone, fields.message
    );
    format!(
        "mailto:{recipient}?subject={}&body={}",
        encode_component(&subject),
        encode_component(&body)
    )
}

/// Advisory fallback shown after the single navigation attempt. Whether a
/// mail client actually opened is undetectable, so the message names the
/// direct address.
pub fn confirmation_message(contact_email: &str) -> String {
    format!(
        "Opening your email client to send the message. \
         If it doesn't open, please email us directly at {contact_email}"
    )
}

// ============================================================================
// Smooth scroll
// ============================================================================

/// Resolve an in-page anchor href (`#services`) against the anchors present
/// at initialization. Returns the matched anchor id, or `None` when the href
/// is not a fragment link or no such target exists — in which case the
/// activation does nothing.
pub fn resolve_fragment<'a>(href: &str, anchors: &[&'a str]) -> Option<&'a str> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() {
        return None;
    }
    anchors.iter().copied().find(|anchor| *anchor == fragment)
}

// ============================================================================
// Tests
// ============================================================================
