//! Gallery lightbox: an index cursor with open/closed state.
//!
//! The controller owns the slide list it was constructed with — captured
//! exactly once from the gallery tiles at initialization and never
//! re-derived. Navigation is a total function over the integers: any
//! requested index is normalized with a non-negative modulo, so "previous"
//! from the first slide wraps to the last and "next" from the last wraps to
//! the first.
//!
//! An empty slide list yields no controller at all ([`Lightbox::new`]
//! returns `None`); that is the guard against a modulo by zero.
//!
//! [`overlay_markup`] renders the overlay structure once per page. Every
//! slide element carries `data-prev`/`data-next` attributes precomputed with
//! the same normalization, so the in-page shim only follows attributes and
//! contains no index arithmetic of its own.

use crate::config::GalleryImage;
use maud::{Markup, html};

/// One lightbox slide, captured from a gallery tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub url: String,
    pub caption: String,
}

/// Keys the lightbox reacts to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

/// Where inside the overlay a click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTarget {
    /// The overlay background itself — closes the lightbox.
    Backdrop,
    /// The image/caption content area — ignored.
    Content,
}

/// Lightbox controller state: current index cursor plus open flag.
///
/// Background scroll is locked exactly while open.
#[derive(Debug, Clone)]
pub struct Lightbox {
    slides: Vec<Slide>,
    index: usize,
    open: bool,
}

impl Lightbox {
    /// Create a controller over a captured slide list.
    ///
    /// Returns `None` for an empty list: with no slides there is nothing to
    /// show and index normalization would divide by zero.
    pub fn new(slides: Vec<Slide>) -> Option<Self> {
        if slides.is_empty() {
            return None;
        }
        Some(Self {
            slides,
            index: 0,
            open: false,
        })
    }

    /// Capture slides from gallery images and build a controller.
    pub fn from_images(images: &[GalleryImage]) -> Option<Self> {
        Self::new(capture_slides(images))
    }

    /// Normalize any integer index into [0, len) with a non-negative modulo.
    /// A naive `%` would map -1 to -1; `rem_euclid` maps it to `len - 1`.
    pub fn normalize_index(len: usize, index: i64) -> usize {
        index.rem_euclid(len as i64) as usize
    }

    /// Move the cursor to the slide at `index` (wrapping). Total over the
    /// integers; does not change the open flag.
    pub fn show(&mut self, index: i64) {
        self.index = Self::normalize_index(self.slides.len(), index);
    }

    /// Open at the slide at `index` (wrapping) and lock background scroll.
    pub fn open(&mut self, index: i64) {
        self.show(index);
        self.open = true;
    }

    /// Close and release the scroll lock. No-op when already closed.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Advance to the next slide, wrapping past the end. No-op when closed.
    pub fn next(&mut self) {
        if self.open {
            self.show(self.index as i64 + 1);
        }
    }

    /// Step to the previous slide, wrapping before the start. No-op when closed.
    pub fn prev(&mut self) {
        if self.open {
            self.show(self.index as i64 - 1);
        }
    }

    /// Keyboard handling. Keys are ignored entirely while closed.
    pub fn handle_key(&mut self, key: Key) {
        if !self.open {
            return;
        }
        match key {
            Key::Escape => self.close(),
            Key::ArrowLeft => self.prev(),
            Key::ArrowRight => self.next(),
            Key::Other => {}
        }
    }

    /// Click handling for the open overlay: only the backdrop closes.
    pub fn overlay_click(&mut self, target: OverlayTarget) {
        if self.open && target == OverlayTarget::Backdrop {
            self.close();
        }
    }

    pub fn current(&self) -> &Slide {
        &self.slides[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Background scrolling is locked exactly while the lightbox is open.
    pub fn scroll_locked(&self) -> bool {
        self.open
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}

/// Capture the slide list from gallery tiles, preserving tile order.
pub fn capture_slides(images: &[GalleryImage]) -> Vec<Slide> {
    images
        .iter()
        .map(|image| Slide {
            url: image.url.clone(),
            caption: image.caption.clone(),
        })
        .collect()
}

/// Render the overlay structure: close button, prev/next controls, and one
/// figure per slide with its wrapped neighbor indices baked in.
///
/// The populator writes this into the overlay region at most once per page,
/// so an already-present overlay is never duplicated.
pub fn overlay_markup(slides: &[Slide]) -> Markup {
    let len = slides.len();
    html! {
        div #lightbox .lightbox {
            button.lightbox-close aria-label="Close" { "×" }
            button.lightbox-nav.lightbox-prev aria-label="Previous" { "❮" }
            div.lightbox-content {
                @for (index, slide) in slides.iter().enumerate() {
                    figure.lightbox-slide
                        data-index=(index)
                        data-prev=(Lightbox::normalize_index(len, index as i64 - 1))
                        data-next=(Lightbox::normalize_index(len, index as i64 + 1))
                    {
                        img src=(slide.url) alt=(slide.caption);
                        figcaption.lightbox-caption { (slide.caption) }
                    }
                }
            }
            button.lightbox-nav.lightbox-next aria-label="Next" { "❯" }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn slides(n: usize) -> Vec<Slide> {
        (0..n)
            .map(|i| Slide {
                url: format!("img/{i}.jpg"),
                caption: format!("Caption {i}"),
            })
            .collect()
    }

    // =========================================================================
    // Construction
    // =========================================================================

    #[test]
    fn new_rejects_empty_slide_list() {
        assert!(Lightbox::new(vec![]).is_none());
    }

    #[test]
    fn new_starts_closed_at_first_slide() {
        let lb = Lightbox::new(slides(3)).unwrap();
        assert!(!lb.is_open());
        assert!(!lb.scroll_locked());
        assert_eq!(lb.index(), 0);
        assert_eq!(lb.slide_count(), 3);
    }

    #[test]
    fn from_images_captures_order() {
        let images = vec![
            crate::config::GalleryImage {
                url: "a.jpg".to_string(),
                caption: "A".to_string(),
            },
            crate::config::GalleryImage {
                url: "b.jpg".to_string(),
                caption: "B".to_string(),
            },
        ];
        let mut lb = Lightbox::from_images(&images).unwrap();
        lb.open(1);
        assert_eq!(lb.current().url, "b.jpg");
        assert_eq!(lb.current().caption, "B");
    }

    // =========================================================================
    // Open / close transitions
    // =========================================================================

    #[test]
    fn open_shows_requested_slide_and_locks_scroll() {
        let mut lb = Lightbox::new(slides(4)).unwrap();
        lb.open(2);
        assert!(lb.is_open());
        assert!(lb.scroll_locked());
        assert_eq!(lb.index(), 2);
        assert_eq!(lb.current().url, "img/2.jpg");
    }

    #[test]
    fn close_releases_scroll_lock() {
        let mut lb = Lightbox::new(slides(2)).unwrap();
        lb.open(0);
        lb.close();
        assert!(!lb.is_open());
        assert!(!lb.scroll_locked());
    }

    #[test]
    fn backdrop_click_closes_content_click_does_not() {
        let mut lb = Lightbox::new(slides(2)).unwrap();
        lb.open(0);
        lb.overlay_click(OverlayTarget::Content);
        assert!(lb.is_open());
        lb.overlay_click(OverlayTarget::Backdrop);
        assert!(!lb.is_open());
    }

    // =========================================================================
    // Wraparound navigation
    // =========================================================================

    #[test]
    fn prev_from_first_wraps_to_last() {
        let mut lb = Lightbox::new(slides(5)).unwrap();
        lb.open(0);
        lb.prev();
        assert_eq!(lb.index(), 4);
    }

    #[test]
    fn next_from_last_wraps_to_first() {
        let mut lb = Lightbox::new(slides(5)).unwrap();
        lb.open(4);
        lb.next();
        assert_eq!(lb.index(), 0);
    }

    #[test]
    fn show_is_total_and_periodic_over_the_integers() {
        let n = 4usize;
        let mut lb = Lightbox::new(slides(n)).unwrap();
        for k in -17i64..17 {
            lb.show(k);
            let at_k = lb.index();
            lb.show(k + n as i64);
            assert_eq!(lb.index(), at_k, "show({k}) and show({}) agree", k + n as i64);
        }
    }

    #[test]
    fn normalize_index_uses_non_negative_modulo() {
        assert_eq!(Lightbox::normalize_index(3, -1), 2);
        assert_eq!(Lightbox::normalize_index(3, 3), 0);
        assert_eq!(Lightbox::normalize_index(3, -7), 2);
    }

    #[test]
    fn single_slide_wraps_onto_itself() {
        let mut lb = Lightbox::new(slides(1)).unwrap();
        lb.open(0);
        lb.next();
        assert_eq!(lb.index(), 0);
        lb.prev();
        assert_eq!(lb.index(), 0);
    }

    #[test]
    fn navigation_is_ignored_while_closed() {
        let mut lb = Lightbox::new(slides(3)).unwrap();
        lb.next();
        lb.prev();
        assert_eq!(lb.index(), 0);
        assert!(!lb.is_open());
    }

    // =========================================================================
    // Keyboard handling
    // =========================================================================

    #[test]
    fn keys_drive_navigation_while_open() {
        let mut lb = Lightbox::new(slides(3)).unwrap();
        lb.open(0);
        lb.handle_key(Key::ArrowRight);
        assert_eq!(lb.index(), 1);
        lb.handle_key(Key::ArrowLeft);
        assert_eq!(lb.index(), 0);
        lb.handle_key(Key::Other);
        assert_eq!(lb.index(), 0);
        lb.handle_key(Key::Escape);
        assert!(!lb.is_open());
    }

    #[test]
    fn keys_are_ignored_while_closed() {
        let mut lb = Lightbox::new(slides(3)).unwrap();
        lb.handle_key(Key::ArrowRight);
        assert_eq!(lb.index(), 0);
        lb.handle_key(Key::Escape);
        assert!(!lb.is_open());
    }

    // =========================================================================
    // Capture semantics
    // =========================================================================

    #[test]
    fn captured_list_is_independent_of_later_source_changes() {
        let mut images = vec![crate::config::GalleryImage {
            url: "original.jpg".to_string(),
            caption: "Original".to_string(),
        }];
        let mut lb = Lightbox::from_images(&images).unwrap();
        // Reordering or mutating the source after capture must not leak in.
        images[0].url = "changed.jpg".to_string();
        lb.open(0);
        assert_eq!(lb.current().url, "original.jpg");
    }

    #[test]
    fn tile_position_selects_the_same_position_in_captured_list() {
        let mut lb = Lightbox::new(slides(6)).unwrap();
        for i in 0..6 {
            lb.open(i as i64);
            assert_eq!(lb.current().caption, format!("Caption {i}"));
        }
    }

    // =========================================================================
    // Overlay markup
    // =========================================================================

    #[test]
    fn overlay_markup_renders_all_slides_with_wrapped_neighbors() {
        let html = overlay_markup(&slides(3)).into_string();
        assert!(html.contains(r#"id="lightbox""#));
        assert_eq!(html.matches("lightbox-slide").count(), 3);
        // First slide wraps back to slide 2, last slide forward to slide 0.
        assert!(html.contains(r#"data-index="0" data-prev="2" data-next="1""#));
        assert!(html.contains(r#"data-index="2" data-prev="1" data-next="0""#));
    }

    #[test]
    fn overlay_markup_has_controls() {
        let html = overlay_markup(&slides(1)).into_string();
        assert!(html.contains("lightbox-close"));
        assert!(html.contains("lightbox-prev"));
        assert!(html.contains("lightbox-next"));
        assert!(html.contains(r#"aria-label="Close""#));
    }

    #[test]
    fn overlay_markup_escapes_captions() {
        let html = overlay_markup(&[Slide {
            url: "a.jpg".to_string(),
            caption: "<script>x</script>".to_string(),
        }])
        .into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
