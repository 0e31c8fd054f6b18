// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Every user-visible string, including the generic generation failure
//! messages, is looked up by key in a Fluent bundle.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Embedded `.ftl` files with an optional directory override
//! - Fallback to `en-US`

pub mod fluent;
