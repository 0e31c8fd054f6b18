// SPDX-License-Identifier: MPL-2.0
//! `virtual_studio` is a guided virtual try-on studio built with the Iced GUI
//! framework.
//!
//! The user supplies a photo of themselves, picks a category (shirt, pants,
//! shoes or hair), supplies a photo of the item and receives a composite
//! produced by an image generation service. Steps animate in two phases and
//! late generation responses from superseded submissions are discarded.

pub mod app;
pub mod application;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;
