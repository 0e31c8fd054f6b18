// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`generation`]: The external composite generation capability
//! - [`camera`]: Live camera acquisition
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no HTTP types)
//! - Traits are `Send + Sync` so adapters can be shared with async tasks
//! - Both ports are `async` (`async-trait`): generation crosses a network
//!   boundary and camera acquisition waits on the platform
//!
//! # Example
//!
//! ```ignore
//! use virtual_studio::application::port::generation::{CompositeGenerator, CompositeRequest};
//!
//! async fn call(generator: &dyn CompositeGenerator, request: &CompositeRequest) {
//!     match generator.generate(request).await {
//!         Ok(Some(image)) => println!("{} bytes of base64", image.payload.len()),
//!         Ok(None) => println!("no image part"),
//!         Err(err) => eprintln!("{err}"),
//!     }
//! }
//! ```

pub mod camera;
pub mod generation;

// Re-export main types for convenience
pub use camera::{CameraFrame, CameraProvider, Facing, VideoStream};
pub use generation::{
    CompositeGenerator, CompositeRequest, GeneratedImage, RequestSlot, ValidationError, WireImage,
};
