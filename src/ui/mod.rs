// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! The UI follows the Elm-style "state down, messages up" pattern: the
//! wizard screen renders from borrowed state and reports user intent as
//! messages, never mutating anything itself.
//!
//! # Modules
//!
//! - [`wizard`] - The try-on wizard screen, step visuals and camera overlay
//! - [`notifications`] - Toast notification system for user feedback
//! - [`widgets`] - Custom Iced widgets (loading spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod widgets;
pub mod wizard;
