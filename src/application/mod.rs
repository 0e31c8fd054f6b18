// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`orchestrator`]: The request orchestrator driving composite generation
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use virtual_studio::application::orchestrator::Orchestrator;
//! use virtual_studio::infrastructure::generation::ProxyGenerator;
//! use std::sync::Arc;
//!
//! let orchestrator = Orchestrator::new(Arc::new(ProxyGenerator::new(endpoint)));
//! let completion = orchestrator.submit(submission).await;
//! wizard.complete_generation(completion.id, completion.result);
//! ```

pub mod orchestrator;
pub mod port;
