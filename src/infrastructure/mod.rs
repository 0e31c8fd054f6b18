// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`generation`]: HTTP backends (implement [`CompositeGenerator`])
//! - [`camera`]: Device provider (implements [`CameraProvider`])
//!
//! [`CompositeGenerator`]: crate::application::port::CompositeGenerator
//! [`CameraProvider`]: crate::application::port::CameraProvider

pub mod camera;
pub mod generation;

pub use camera::UnavailableCamera;
pub use generation::{build_generator, Backend, BackendSettings, GeminiGenerator, ProxyGenerator};
