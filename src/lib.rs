//! # Brochure
//!
//! A minimal single-page site generator for small-business brochure sites.
//! One `config.json` document describes the business — identity, theme
//! colors, services, opening hours, photo gallery, testimonials, contact
//! details — and `brochure render` turns it into a complete `index.html`.
//!
//! # Architecture: Config → Regions → Document
//!
//! Rendering runs through three layers, each a pure function of its input:
//!
//! ```text
//! 1. Sections   config slice  →  markup fragment   (one renderer per section)
//! 2. Populate   config        →  skeleton regions  (bind fragments by logical key)
//! 3. Assemble   skeleton      →  index.html        (final document + assets)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Graceful degradation**: each section guards its own data and target
//!   region, so one missing config field never breaks the rest of the page.
//! - **Testability**: renderers and the populator work on an in-memory
//!   skeleton; unit tests exercise every degradation path without touching
//!   the filesystem.
//! - **Containment**: a config that fails to load still produces the bare
//!   skeleton page, matching how the page behaves when its data is missing.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `config.json` loading, validation, and the sample document |
//! | [`sections`] | Pure section renderers: config slice → markup fragment |
//! | [`page`] | Region keys, the skeleton surface, and the populate pass |
//! | [`lightbox`] | Gallery lightbox state machine and overlay markup |
//! | [`behaviors`] | Nav toggle, contact-form mailto composition, anchor resolution |
//! | [`generate`] | Document assembly and `index.html` emission |
//! | [`output`] | CLI output formatting — section inventory of a render |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error, template variables
//! are Rust expressions, and all interpolation is auto-escaped.
//!
//! ## Escaped by Default, Trusted by Choice
//!
//! Config values are data, not markup: a description containing
//! `<script>` renders as text. Sites that genuinely need markup in their
//! free-text fields can set `"trustedHtml": true`, which documents in the
//! config itself that the document is a trusted input. Identity fields
//! (names, day labels, icons) are escaped unconditionally.
//!
//! ## Logic in Rust, Attributes in the Page
//!
//! The interactive behaviors (lightbox navigation, menu toggle, form
//! submission) are modeled as plain Rust state machines and pure functions,
//! where their contracts are unit-tested. The emitted page carries their
//! *results*: every lightbox slide is stamped with its wrapped
//! `data-prev`/`data-next` neighbor indices, the form carries its recipient
//! address, the menu is a CSS checkbox. A small embedded shim follows those
//! attributes; it computes nothing itself.
//!
//! ## Wall-Clock Values Are Parameters
//!
//! The hours table flags "today" and the footer stamps the current year.
//! Both renderers take the value as an argument and the clock is sampled
//! once per render, so the output is reproducible in tests and never stale
//! across renders.

pub mod behaviors;
pub mod config;
pub mod generate;
pub mod lightbox;
pub mod output;
pub mod page;
pub mod sections;

#[cfg(test)]
pub(crate) mod test_helpers;
