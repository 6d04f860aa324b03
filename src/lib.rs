//! lodestar: keep a long document's location fragment in step with the section being viewed.
//!
//! The navigation layer is host-agnostic. A [`host::Host`] answers layout queries and carries
//! out scrolls; a [`navigator::Navigator`] routes the host's events to the components that own
//! each reaction. The terminal viewer in `main.rs` is one such host.

#![allow(clippy::multiple_crate_versions)]

pub mod app_state;
pub mod config;
pub mod document;
pub mod error;
pub mod fullscreen;
pub mod geometry;
pub mod hash_sync;
pub mod host;
pub mod keys;
pub mod navigation;
pub mod navigator;
pub mod section;
pub mod ui;
pub mod visibility;

#[cfg(test)]
#[path = "tests/fake_host.rs"]
pub(crate) mod fake_host;
