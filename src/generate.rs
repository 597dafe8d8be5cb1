//! Site assembly and emission.
//!
//! Takes the configuration, populates an in-memory skeleton, and writes the
//! final `index.html`. The emitted document is the skeleton markup with every
//! populated region slotted in: theme custom properties and the base
//! stylesheet inline in `<head>`, the behavior shim inline at the end of
//! `<body>`.
//!
//! ## Load Failure Containment
//!
//! A config that fails to read or parse does not abort generation: the error
//! is logged and the *unpopulated* skeleton page is written, exactly as the
//! original page behaved when its config fetch failed. The page is never
//! partially populated — population happens only after a complete successful
//! parse.
//!
//! ## Static Assets
//!
//! CSS and the behavior shim are embedded at compile time:
//! - `static/style.css`: base skeleton styles (theme colors come from config)
//! - `static/app.js`: lightbox/nav/form wiring — follows attributes
//!   precomputed here, no logic of its own

use crate::behaviors;
use crate::config;
use crate::page::{self, PopulateReport, Region, RenderContext, Skeleton};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/app.js");

/// In-page anchors that exist in the skeleton at generation time. Nav links
/// are resolved against this list; a link whose target is missing is simply
/// not emitted.
const SECTION_ANCHORS: [&str; 6] = [
    "about",
    "services",
    "hours",
    "gallery",
    "testimonials",
    "contact",
];

const NAV_LINKS: [(&str, &str); 6] = [
    ("#about", "About"),
    ("#services", "Services"),
    ("#hours", "Hours"),
    ("#gallery", "Gallery"),
    ("#testimonials", "Testimonials"),
    ("#contact", "Contact"),
];

/// Outcome of one generation run.
#[derive(Debug)]
pub struct RenderSummary {
    pub output_path: PathBuf,
    /// Present when the config failed to load and the bare skeleton was
    /// written instead.
    pub load_error: Option<String>,
    /// Present when the config loaded and the page was populated.
    pub report: Option<PopulateReport>,
}

/// Generate the site: load `config.json`, populate the skeleton, write
/// `index.html` into the output directory.
pub fn generate(config_path: &Path, output_dir: &Path) -> Result<RenderSummary, GenerateError> {
    let ctx = RenderContext::now();
    let mut skeleton = Skeleton::full();

    let (load_error, report) = match config::load_config(config_path) {
        Ok(config) => {
            let report = page::populate(&config, &mut skeleton, &ctx);
            (None, Some(report))
        }
        Err(err) => {
            log::error!("error loading {}: {err}", config_path.display());
            (Some(err.to_string()), None)
        }
    };

    let document = render_document(&skeleton);
    fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("index.html");
    fs::write(&output_path, document.into_string())?;

    Ok(RenderSummary {
        output_path,
        load_error,
        report,
    })
}

// ============================================================================
// Document assembly
// ============================================================================

/// Build the `:root` block from the skeleton's style variables.
fn root_css(skeleton: &Skeleton) -> String {
    let vars: Vec<String> = skeleton
        .style_vars()
        .map(|(name, value)| format!("    {name}: {value};"))
        .collect();
    if vars.is_empty() {
        return String::new();
    }
    format!(":root {{\n{}\n}}\n\n", vars.join("\n"))
}

fn slot_text(skeleton: &Skeleton, region: Region) -> &str {
    skeleton.text(region).unwrap_or("")
}

/// A region's markup slot, re-wrapped for interpolation. Slots hold output
/// of the maud renderers, already escaped at render time.
fn slot_html(skeleton: &Skeleton, region: Region) -> Markup {
    PreEscaped(skeleton.html(region).unwrap_or("").to_string())
}

/// Assemble the complete page document around the (possibly unpopulated)
/// skeleton.
pub fn render_document(skeleton: &Skeleton) -> Markup {
    let css = format!("{}{}", root_css(skeleton), CSS_STATIC);
    let title = skeleton
        .text(Region::PageTitle)
        .unwrap_or("Welcome")
        .to_string();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title #(Region::PageTitle.element_id()) { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (site_nav(skeleton))
                (hero(skeleton))
                main {
                    (about(skeleton))
                    (services(skeleton))
                    (hours(skeleton))
                    (gallery(skeleton))
                    (testimonials(skeleton))
                    (contact(skeleton))
                }
                (footer(skeleton))
                (slot_html(skeleton, Region::LightboxOverlay))
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// Header with the checkbox-driven mobile menu. Only nav links whose
/// fragment resolves to a present anchor are emitted.
fn site_nav(skeleton: &Skeleton) -> Markup {
    html! {
        header.site-header {
            nav.site-nav {
                span #(Region::NavLogo.element_id()) .nav-logo {
                    (slot_text(skeleton, Region::NavLogo))
                }
                input #nav-toggle .nav-toggle type="checkbox" aria-label="Menu";
                label.nav-hamburger for="nav-toggle" {
                    span.hamburger-line {}
                    span.hamburger-line {}
                    span.hamburger-line {}
                }
                ul.nav-links {
                    @for (href, label) in NAV_LINKS {
                        @if behaviors::resolve_fragment(href, &SECTION_ANCHORS).is_some() {
                            li { a href=(href) { (label) } }
                        }
                    }
                }
            }
        }
    }
}

fn hero(skeleton: &Skeleton) -> Markup {
    html! {
        section.hero {
            h1 #(Region::HeroTitle.element_id()) { (slot_text(skeleton, Region::HeroTitle)) }
            p #(Region::HeroTagline.element_id()) { (slot_text(skeleton, Region::HeroTagline)) }
        }
    }
}

fn about(skeleton: &Skeleton) -> Markup {
    html! {
        section #about .page-section {
            h2 #(Region::AboutTitle.element_id()) { (slot_text(skeleton, Region::AboutTitle)) }
            p #(Region::AboutDescription.element_id()) {
                (slot_html(skeleton, Region::AboutDescription))
            }
        }
    }
}

fn services(skeleton: &Skeleton) -> Markup {
    html! {
        section #services .page-section {
            h2 { "Services" }
            div #(Region::ServicesGrid.element_id()) .card-grid {
                (slot_html(skeleton, Region::ServicesGrid))
            }
        }
    }
}

fn hours(skeleton: &Skeleton) -> Markup {
    html! {
        section #hours .page-section {
            h2 { "Hours" }
            table #(Region::HoursTable.element_id()) {
                tbody { (slot_html(skeleton, Region::HoursTable)) }
            }
        }
    }
}

fn gallery(skeleton: &Skeleton) -> Markup {
    html! {
        section #gallery .page-section {
            h2 #(Region::GalleryTitle.element_id()) {
                (skeleton.text(Region::GalleryTitle).unwrap_or("Gallery"))
            }
            div #(Region::GalleryGrid.element_id()) .card-grid {
                (slot_html(skeleton, Region::GalleryGrid))
            }
        }
    }
}

fn testimonials(skeleton: &Skeleton) -> Markup {
    html! {
        section #testimonials .page-section {
            h2 { "Testimonials" }
            div #(Region::TestimonialsGrid.element_id()) .card-grid {
                (slot_html(skeleton, Region::TestimonialsGrid))
            }
        }
    }
}

fn contact(skeleton: &Skeleton) -> Markup {
    html! {
        section #contact .page-section {
            h2 { "Contact" }
            @if let Some(src) = skeleton.attr(Region::MapFrame, "src") {
                iframe #(Region::MapFrame.element_id()) src=(src) loading="lazy" allowfullscreen {}
            }
            div.contact-details {
                p #(Region::ContactAddress.element_id()) {
                    (slot_html(skeleton, Region::ContactAddress))
                }
                a #(Region::ContactPhone.element_id())
                    href=[skeleton.attr(Region::ContactPhone, "href")] {
                    (slot_text(skeleton, Region::ContactPhone))
                }
                a #(Region::ContactEmail.element_id())
                    href=[skeleton.attr(Region::ContactEmail, "href")] {
                    (slot_text(skeleton, Region::ContactEmail))
                }
                div #(Region::SocialLinks.element_id()) .social-links {
                    (slot_html(skeleton, Region::SocialLinks))
                }
            }
            form #(Region::ContactForm.element_id())
                data-contact-email=[skeleton.attr(Region::ContactForm, "data-contact-email")] {
                input type="text" name="name" placeholder="Name" required;
                input type="email" name="email" placeholder="Email" required;
                input type="tel" name="phone" placeholder="Phone (optional)";
                textarea name="message" placeholder="Message" required {}
                button type="submit" { "Send Message" }
            }
        }
    }
}

fn footer(skeleton: &Skeleton) -> Markup {
    html! {
        footer.site-footer {
            p #(Region::FooterBusiness.element_id()) {
                (slot_text(skeleton, Region::FooterBusiness))
            }
            p #(Region::FooterTagline.element_id()) {
                (slot_text(skeleton, Region::FooterTagline))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
