//! Page population: binding rendered section markup to named page regions.
//!
//! The original page skeleton addresses its dynamic regions by stable
//! element ids. [`Region`] is the typed form of those ids, and [`Surface`]
//! is the small "bind region by logical key" capability the populator writes
//! through. [`Skeleton`] is the in-memory implementation used both by the
//! real generator (the final document is assembled from its slots) and by
//! tests (a partial skeleton exercises missing-region degradation) — no
//! separate fake is needed.
//!
//! ## Degradation Contract
//!
//! [`populate`] visits every section exactly once. Each section guards its
//! own data and region existence independently: missing data or a missing
//! region skips that section only and records why in the
//! [`PopulateReport`]. Nothing one section does can prevent another from
//! populating, and the config is never mutated.

use crate::config::SiteConfig;
use crate::lightbox;
use crate::sections::{self, TextMode};
use chrono::{Datelike, Weekday};
use maud::Markup;
use std::collections::BTreeMap;

// ============================================================================
// Regions
// ============================================================================

/// Stable logical ids of the skeleton's dynamic regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    PageTitle,
    NavLogo,
    HeroTitle,
    HeroTagline,
    AboutTitle,
    AboutDescription,
    ServicesGrid,
    HoursTable,
    GalleryTitle,
    GalleryGrid,
    LightboxOverlay,
    TestimonialsGrid,
    MapFrame,
    ContactAddress,
    ContactPhone,
    ContactEmail,
    ContactForm,
    SocialLinks,
    FooterBusiness,
    FooterTagline,
}

impl Region {
    pub const ALL: [Region; 20] = [
        Region::PageTitle,
        Region::NavLogo,
        Region::HeroTitle,
        Region::HeroTagline,
        Region::AboutTitle,
        Region::AboutDescription,
        Region::ServicesGrid,
        Region::HoursTable,
        Region::GalleryTitle,
        Region::GalleryGrid,
        Region::LightboxOverlay,
        Region::TestimonialsGrid,
        Region::MapFrame,
        Region::ContactAddress,
        Region::ContactPhone,
        Region::ContactEmail,
        Region::ContactForm,
        Region::SocialLinks,
        Region::FooterBusiness,
        Region::FooterTagline,
    ];

    /// The element id this region binds to in the emitted page.
    pub fn element_id(self) -> &'static str {
        match self {
            Region::PageTitle => "page-title",
            Region::NavLogo => "nav-logo",
            Region::HeroTitle => "hero-title",
            Region::HeroTagline => "hero-tagline",
            Region::AboutTitle => "about-title",
            Region::AboutDescription => "about-description",
            Region::ServicesGrid => "services-grid",
            Region::HoursTable => "hours-table",
            Region::GalleryTitle => "gallery-title",
            Region::GalleryGrid => "gallery-grid",
            Region::LightboxOverlay => "lightbox",
            Region::TestimonialsGrid => "testimonials-grid",
            Region::MapFrame => "google-map",
            Region::ContactAddress => "contact-address",
            Region::ContactPhone => "contact-phone",
            Region::ContactEmail => "contact-email",
            Region::ContactForm => "contact-form",
            Region::SocialLinks => "social-links",
            Region::FooterBusiness => "footer-business",
            Region::FooterTagline => "footer-tagline",
        }
    }
}

// ============================================================================
// Surface
// ============================================================================

/// Write access to a page skeleton, keyed by logical region.
///
/// Side effects are confined to text/markup content, element attributes, and
/// root-scope style variables.
pub trait Surface {
    fn has_region(&self, region: Region) -> bool;
    /// Whether the region already holds content (used for idempotent writes
    /// like the lightbox overlay).
    fn has_content(&self, region: Region) -> bool;
    fn set_text(&mut self, region: Region, text: &str);
    fn set_markup(&mut self, region: Region, markup: Markup);
    fn set_attr(&mut self, region: Region, name: &str, value: &str);
    /// Set a CSS custom property on the root scope.
    fn set_style_var(&mut self, name: &str, value: &str);
}

#[derive(Debug, Default, Clone)]
struct Slot {
    text: Option<String>,
    html: Option<String>,
    attrs: BTreeMap<String, String>,
}

/// In-memory page skeleton: one slot per region plus root style variables.
#[derive(Debug, Default, Clone)]
pub struct Skeleton {
    slots: BTreeMap<Region, Slot>,
    style_vars: BTreeMap<String, String>,
}

impl Skeleton {
    /// A skeleton with every region present — what the generator renders.
    pub fn full() -> Self {
        Self::with_regions(&Region::ALL)
    }

    /// A skeleton with only the given regions, for degradation tests.
    pub fn with_regions(regions: &[Region]) -> Self {
        Self {
            slots: regions.iter().map(|r| (*r, Slot::default())).collect(),
            style_vars: BTreeMap::new(),
        }
    }

    pub fn text(&self, region: Region) -> Option<&str> {
        self.slots.get(&region)?.text.as_deref()
    }

    pub fn html(&self, region: Region) -> Option<&str> {
        self.slots.get(&region)?.html.as_deref()
    }

    pub fn attr(&self, region: Region, name: &str) -> Option<&str> {
        self.slots.get(&region)?.attrs.get(name).map(String::as_str)
    }

    pub fn style_vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.style_vars
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Surface for Skeleton {
    fn has_region(&self, region: Region) -> bool {
        self.slots.contains_key(&region)
    }

    fn has_content(&self, region: Region) -> bool {
        self.slots
            .get(&region)
            .is_some_and(|slot| slot.text.is_some() || slot.html.is_some())
    }

    fn set_text(&mut self, region: Region, text: &str) {
        if let Some(slot) = self.slots.get_mut(&region) {
            slot.text = Some(text.to_string());
        }
    }

    fn set_markup(&mut self, region: Region, markup: Markup) {
        if let Some(slot) = self.slots.get_mut(&region) {
            slot.html = Some(markup.into_string());
        }
    }

    fn set_attr(&mut self, region: Region, name: &str, value: &str) {
        if let Some(slot) = self.slots.get_mut(&region) {
            slot.attrs.insert(name.to_string(), value.to_string());
        }
    }

    fn set_style_var(&mut self, name: &str, value: &str) {
        self.style_vars.insert(name.to_string(), value.to_string());
    }
}

// ============================================================================
// Render context
// ============================================================================

/// Wall-clock values sampled fresh for each render — never cached between
/// renders, so the "today" flag and footer year stay correct.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    pub today: Weekday,
    pub year: i32,
}

impl RenderContext {
    pub fn now() -> Self {
        let now = chrono::Local::now();
        Self {
            today: now.weekday(),
            year: now.year(),
        }
    }
}

// ============================================================================
// Populate report
// ============================================================================

/// The sections `populate` visits, in visit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Identity,
    Theme,
    About,
    Services,
    Hours,
    Gallery,
    Lightbox,
    Testimonials,
    Map,
    Contact,
    Social,
    Footer,
}

impl Section {
    pub fn label(self) -> &'static str {
        match self {
            Section::Identity => "identity",
            Section::Theme => "theme",
            Section::About => "about",
            Section::Services => "services",
            Section::Hours => "hours",
            Section::Gallery => "gallery",
            Section::Lightbox => "lightbox",
            Section::Testimonials => "testimonials",
            Section::Map => "map",
            Section::Contact => "contact",
            Section::Social => "social",
            Section::Footer => "footer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionStatus {
    Populated { items: usize },
    SkippedNoData,
    SkippedNoRegion,
}

/// Per-section outcome of one populate pass.
#[derive(Debug, Clone, Default)]
pub struct PopulateReport {
    pub sections: Vec<(Section, SectionStatus)>,
}

impl PopulateReport {
    fn record(&mut self, section: Section, status: SectionStatus) {
        self.sections.push((section, status));
    }

    pub fn status(&self, section: Section) -> Option<SectionStatus> {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, status)| *status)
    }

    pub fn populated_count(&self) -> usize {
        self.sections
            .iter()
            .filter(|(_, s)| matches!(s, SectionStatus::Populated { .. }))
            .count()
    }
}

// ============================================================================
// Populate
// ============================================================================

/// Single entry point: write the configuration into the skeleton's regions.
///
/// Invoked once per render after the config is available. Each section
/// guards its own preconditions; see the module docs for the degradation
/// contract.
pub fn populate(
    config: &SiteConfig,
    surface: &mut dyn Surface,
    ctx: &RenderContext,
) -> PopulateReport {
    let mode = TextMode::from_flag(config.trusted_html);
    let mut report = PopulateReport::default();

    // Identity: business name everywhere, tagline in the hero.
    {
        let mut items = 0;
        for region in [Region::PageTitle, Region::NavLogo, Region::HeroTitle] {
            if surface.has_region(region) {
                surface.set_text(region, &config.business_name);
                items += 1;
            }
        }
        if let Some(tagline) = &config.tagline
            && surface.has_region(Region::HeroTagline)
        {
            surface.set_text(Region::HeroTagline, tagline);
            items += 1;
        }
        let status = if items > 0 {
            SectionStatus::Populated { items }
        } else {
            SectionStatus::SkippedNoRegion
        };
        report.record(Section::Identity, status);
    }

    // Theme colors → root-scope custom properties, used verbatim.
    {
        let status = match &config.theme {
            Some(theme) => {
                surface.set_style_var("--primary-color", &theme.primary_color);
                surface.set_style_var("--secondary-color", &theme.secondary_color);
                surface.set_style_var("--accent-color", &theme.accent_color);
                SectionStatus::Populated { items: 3 }
            }
            None => SectionStatus::SkippedNoData,
        };
        report.record(Section::Theme, status);
    }

    // About.
    {
        let status = match &config.about {
            Some(about) => {
                let mut items = 0;
                if surface.has_region(Region::AboutTitle) {
                    surface.set_text(Region::AboutTitle, &about.title);
                    items += 1;
                }
                if surface.has_region(Region::AboutDescription) {
                    surface.set_markup(
                        Region::AboutDescription,
                        sections::about_description(&about.description, mode),
                    );
                    items += 1;
                }
                if items > 0 {
                    SectionStatus::Populated { items }
                } else {
                    SectionStatus::SkippedNoRegion
                }
            }
            None => SectionStatus::SkippedNoData,
        };
        report.record(Section::About, status);
    }

    // Services.
    {
        let status = match &config.services {
            Some(services) if surface.has_region(Region::ServicesGrid) => {
                surface.set_markup(Region::ServicesGrid, sections::services(services, mode));
                SectionStatus::Populated {
                    items: services.len(),
                }
            }
            Some(_) => SectionStatus::SkippedNoRegion,
            None => SectionStatus::SkippedNoData,
        };
        report.record(Section::Services, status);
    }

    // Hours, with the current weekday flagged.
    {
        let status = match &config.hours {
            Some(hours) if surface.has_region(Region::HoursTable) => {
                surface.set_markup(Region::HoursTable, sections::hours(hours, ctx.today));
                SectionStatus::Populated { items: hours.len() }
            }
            Some(_) => SectionStatus::SkippedNoRegion,
            None => SectionStatus::SkippedNoData,
        };
        report.record(Section::Hours, status);
    }

    // Gallery tiles + optional title.
    {
        let status = match &config.gallery {
            Some(gallery) if surface.has_region(Region::GalleryGrid) => {
                if let Some(title) = &gallery.title
                    && surface.has_region(Region::GalleryTitle)
                {
                    surface.set_text(Region::GalleryTitle, title);
                }
                surface.set_markup(
                    Region::GalleryGrid,
                    sections::gallery_tiles(&gallery.images, mode),
                );
                SectionStatus::Populated {
                    items: gallery.images.len(),
                }
            }
            Some(_) => SectionStatus::SkippedNoRegion,
            None => SectionStatus::SkippedNoData,
        };
        report.record(Section::Gallery, status);
    }

    // Lightbox overlay: slides captured once from the tiles just rendered;
    // the write is idempotent — an already-present overlay is kept as-is.
    {
        let slides = config
            .gallery
            .as_ref()
            .map(|g| lightbox::capture_slides(&g.images))
            .unwrap_or_default();
        let status = if slides.is_empty() {
            SectionStatus::SkippedNoData
        } else if !surface.has_region(Region::LightboxOverlay) {
            SectionStatus::SkippedNoRegion
        } else {
            if !surface.has_content(Region::LightboxOverlay) {
                surface.set_markup(Region::LightboxOverlay, lightbox::overlay_markup(&slides));
            }
            SectionStatus::Populated {
                items: slides.len(),
            }
        };
        report.record(Section::Lightbox, status);
    }

    // Testimonials.
    {
        let status = match &config.testimonials {
            Some(testimonials) if surface.has_region(Region::TestimonialsGrid) => {
                surface.set_markup(
                    Region::TestimonialsGrid,
                    sections::testimonials(testimonials, mode),
                );
                SectionStatus::Populated {
                    items: testimonials.len(),
                }
            }
            Some(_) => SectionStatus::SkippedNoRegion,
            None => SectionStatus::SkippedNoData,
        };
        report.record(Section::Testimonials, status);
    }

    // Map frame.
    {
        let status = match &config.google_maps_embed {
            Some(url) if surface.has_region(Region::MapFrame) => {
                surface.set_attr(Region::MapFrame, "src", url);
                SectionStatus::Populated { items: 1 }
            }
            Some(_) => SectionStatus::SkippedNoRegion,
            None => SectionStatus::SkippedNoData,
        };
        report.record(Section::Map, status);
    }

    // Contact details: address, phone (display + dial link), email, and the
    // form's recipient attribute.
    {
        let mut items = 0;
        if let Some(addr) = &config.address
            && surface.has_region(Region::ContactAddress)
        {
            surface.set_markup(Region::ContactAddress, sections::address(addr));
            items += 1;
        }
        if let Some(phone) = &config.phone
            && surface.has_region(Region::ContactPhone)
        {
            surface.set_text(Region::ContactPhone, phone);
            surface.set_attr(Region::ContactPhone, "href", &sections::dial_href(phone));
            items += 1;
        }
        if let Some(email) = &config.email {
            if surface.has_region(Region::ContactEmail) {
                surface.set_text(Region::ContactEmail, email);
                surface.set_attr(Region::ContactEmail, "href", &format!("mailto:{email}"));
                items += 1;
            }
            if surface.has_region(Region::ContactForm) {
                surface.set_attr(Region::ContactForm, "data-contact-email", email);
                items += 1;
            }
        }
        let status = if items > 0 {
            SectionStatus::Populated { items }
        } else if config.address.is_none() && config.phone.is_none() && config.email.is_none() {
            SectionStatus::SkippedNoData
        } else {
            SectionStatus::SkippedNoRegion
        };
        report.record(Section::Contact, status);
    }

    // Social links.
    {
        let status = match &config.social_media {
            Some(social) if surface.has_region(Region::SocialLinks) => {
                surface.set_markup(Region::SocialLinks, sections::social_links(social));
                SectionStatus::Populated {
                    items: sections::social_link_count(social),
                }
            }
            Some(_) => SectionStatus::SkippedNoRegion,
            None => SectionStatus::SkippedNoData,
        };
        report.record(Section::Social, status);
    }

    // Footer: copyright line with the wall-clock year, plus tagline.
    {
        let mut items = 0;
        if surface.has_region(Region::FooterBusiness) {
            surface.set_text(
                Region::FooterBusiness,
                &sections::footer_business_line(&config.business_name, ctx.year),
            );
            items += 1;
        }
        if let Some(tagline) = &config.tagline
            && surface.has_region(Region::FooterTagline)
        {
            surface.set_text(Region::FooterTagline, tagline);
            items += 1;
        }
        let status = if items > 0 {
            SectionStatus::Populated { items }
        } else {
            SectionStatus::SkippedNoRegion
        };
        report.record(Section::Footer, status);
    }

    report
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{minimal_config, sample_config};

    fn ctx() -> RenderContext {
        RenderContext {
            today: Weekday::Wed,
            year: 2026,
        }
    }

    // =========================================================================
    // Full population
    // =========================================================================

    #[test]
    fn full_config_populates_every_section() {
        let config = sample_config();
        let mut skeleton = Skeleton::full();
        let report = populate(&config, &mut skeleton, &ctx());

        for (section, status) in &report.sections {
            assert!(
                matches!(status, SectionStatus::Populated { .. }),
                "{} should be populated, got {:?}",
                section.label(),
                status
            );
        }
        assert_eq!(report.sections.len(), 12);
    }

    #[test]
    fn identity_written_to_title_logo_and_hero() {
        let config = sample_config();
        let mut skeleton = Skeleton::full();
        populate(&config, &mut skeleton, &ctx());

        assert_eq!(skeleton.text(Region::PageTitle), Some("Rosie's Bakery"));
        assert_eq!(skeleton.text(Region::NavLogo), Some("Rosie's Bakery"));
        assert_eq!(skeleton.text(Region::HeroTitle), Some("Rosie's Bakery"));
        assert_eq!(
            skeleton.text(Region::HeroTagline),
            Some("Fresh bread, every morning")
        );
    }

    #[test]
    fn theme_applies_root_style_vars() {
        let config = sample_config();
        let mut skeleton = Skeleton::full();
        populate(&config, &mut skeleton, &ctx());

        let vars: Vec<(&str, &str)> = skeleton.style_vars().collect();
        assert!(vars.contains(&("--primary-color", "#8b4513")));
        assert_eq!(vars.len(), 3);
    }

    #[test]
    fn footer_uses_context_year() {
        let config = sample_config();
        let mut skeleton = Skeleton::full();
        populate(&config, &mut skeleton, &ctx());

        assert_eq!(
            skeleton.text(Region::FooterBusiness),
            Some("© 2026 Rosie's Bakery. All rights reserved.")
        );
    }

    #[test]
    fn contact_regions_get_links() {
        let config = sample_config();
        let mut skeleton = Skeleton::full();
        populate(&config, &mut skeleton, &ctx());

        assert_eq!(
            skeleton.attr(Region::ContactPhone, "href"),
            Some("tel:5551234567")
        );
        assert_eq!(
            skeleton.attr(Region::ContactEmail, "href"),
            Some("mailto:hello@rosies.example")
        );
        assert_eq!(
            skeleton.attr(Region::ContactForm, "data-contact-email"),
            Some("hello@rosies.example")
        );
        assert_eq!(skeleton.attr(Region::MapFrame, "src").is_some(), true);
    }

    #[test]
    fn config_is_borrowed_immutably() {
        // Compile-time contract, restated as a runtime check: populate takes
        // &SiteConfig, so the same value drives two passes identically.
        let config = sample_config();
        let mut first = Skeleton::full();
        let mut second = Skeleton::full();
        populate(&config, &mut first, &ctx());
        populate(&config, &mut second, &ctx());
        assert_eq!(first.html(Region::ServicesGrid), second.html(Region::ServicesGrid));
    }

    // =========================================================================
    // Missing data degradation
    // =========================================================================

    #[test]
    fn minimal_config_skips_optional_sections_without_error() {
        let config = minimal_config();
        let mut skeleton = Skeleton::full();
        let report = populate(&config, &mut skeleton, &ctx());

        assert!(matches!(
            report.status(Section::Identity),
            Some(SectionStatus::Populated { .. })
        ));
        assert!(matches!(
            report.status(Section::Footer),
            Some(SectionStatus::Populated { .. })
        ));
        for section in [
            Section::Theme,
            Section::About,
            Section::Services,
            Section::Hours,
            Section::Gallery,
            Section::Lightbox,
            Section::Testimonials,
            Section::Map,
            Section::Contact,
            Section::Social,
        ] {
            assert_eq!(
                report.status(section),
                Some(SectionStatus::SkippedNoData),
                "{}",
                section.label()
            );
        }
        assert!(skeleton.html(Region::ServicesGrid).is_none());
    }

    #[test]
    fn one_missing_section_leaves_others_populated() {
        let mut config = sample_config();
        config.testimonials = None;
        let mut skeleton = Skeleton::full();
        let report = populate(&config, &mut skeleton, &ctx());

        assert_eq!(
            report.status(Section::Testimonials),
            Some(SectionStatus::SkippedNoData)
        );
        assert!(skeleton.html(Region::TestimonialsGrid).is_none());
        assert!(skeleton.html(Region::ServicesGrid).is_some());
        assert!(skeleton.html(Region::GalleryGrid).is_some());
    }

    #[test]
    fn empty_gallery_renders_grid_but_no_lightbox() {
        let mut config = sample_config();
        config.gallery.as_mut().unwrap().images.clear();
        let mut skeleton = Skeleton::full();
        let report = populate(&config, &mut skeleton, &ctx());

        assert_eq!(
            report.status(Section::Gallery),
            Some(SectionStatus::Populated { items: 0 })
        );
        assert_eq!(
            report.status(Section::Lightbox),
            Some(SectionStatus::SkippedNoData)
        );
        assert!(skeleton.html(Region::LightboxOverlay).is_none());
    }

    // =========================================================================
    // Missing region degradation
    // =========================================================================

    #[test]
    fn missing_region_skips_only_that_section() {
        let config = sample_config();
        let regions: Vec<Region> = Region::ALL
            .iter()
            .copied()
            .filter(|r| *r != Region::ServicesGrid)
            .collect();
        let mut skeleton = Skeleton::with_regions(&regions);
        let report = populate(&config, &mut skeleton, &ctx());

        assert_eq!(
            report.status(Section::Services),
            Some(SectionStatus::SkippedNoRegion)
        );
        assert!(skeleton.html(Region::HoursTable).is_some());
        assert!(skeleton.html(Region::TestimonialsGrid).is_some());
    }

    #[test]
    fn empty_skeleton_populates_nothing_and_does_not_panic() {
        let config = sample_config();
        let mut skeleton = Skeleton::with_regions(&[]);
        let report = populate(&config, &mut skeleton, &ctx());
        // Theme writes style vars (root scope always exists); everything
        // keyed to a region is skipped.
        assert_eq!(report.populated_count(), 1);
    }

    // =========================================================================
    // Lightbox idempotence
    // =========================================================================

    #[test]
    fn overlay_write_is_idempotent() {
        let config = sample_config();
        let mut skeleton = Skeleton::full();
        populate(&config, &mut skeleton, &ctx());
        let first = skeleton.html(Region::LightboxOverlay).unwrap().to_string();

        // A second pass must not duplicate or replace the overlay.
        populate(&config, &mut skeleton, &ctx());
        assert_eq!(skeleton.html(Region::LightboxOverlay), Some(first.as_str()));
        assert_eq!(first.matches(r#"id="lightbox""#).count(), 1);
    }

    // =========================================================================
    // Hours recomputation
    // =========================================================================

    #[test]
    fn today_flag_follows_context_not_cache() {
        let config = sample_config();
        let mut monday = Skeleton::full();
        populate(
            &config,
            &mut monday,
            &RenderContext {
                today: Weekday::Mon,
                year: 2026,
            },
        );
        let mut friday = Skeleton::full();
        populate(
            &config,
            &mut friday,
            &RenderContext {
                today: Weekday::Fri,
                year: 2026,
            },
        );

        let monday_html = monday.html(Region::HoursTable).unwrap();
        let friday_html = friday.html(Region::HoursTable).unwrap();
        assert_ne!(monday_html, friday_html);
        assert_eq!(monday_html.matches("today").count(), 1);
        assert_eq!(friday_html.matches("today").count(), 1);
    }
}
