// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core wizard logic with ZERO framework dependencies.
//!
//! This module contains pure domain types, value objects, and the step
//! state machine. It does not depend on `iced`, `reqwest` or any other
//! infrastructure crate so that every rule can be unit tested directly.
//!
//! # Modules
//!
//! - [`category`]: The fixed try-on [`Category`](category::Category) set
//! - [`image`]: Normalized capture records ([`ImageRecord`](image::ImageRecord),
//!   [`MediaType`](image::MediaType))
//! - [`ui`]: UI value objects ([`TransitionDuration`](ui::TransitionDuration))
//! - [`wizard`]: The step state machine ([`Wizard`](wizard::Wizard))

pub mod category;
pub mod image;
pub mod ui;
pub mod wizard;
