//! # singleton-di
//!
//! An asynchronously initialized singleton service, registered once in a
//! dependency injection registry and shared by every consumer that resolves it.
//!
//! ## Features
//!
//! - **Async-only construction**: [`AsyncSingleton`] has no public constructor;
//!   the factory completes initialization before any handle exists
//! - **Instance binding**: the registry binds pre-built `Arc`s, so every
//!   resolution yields the same allocation
//! - **Injectable delays**: the simulated I/O goes through the [`Delay`] trait
//! - **Thread-safe state**: the work counter is atomic
//!
//! ## Quick Start
//!
//! ```rust
//! use singleton_di::{AsyncSingleton, NoDelay, Resolver, ServiceCollection,
//!     SingletonOptions, SingletonService};
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = AsyncSingleton::create_with(SingletonOptions::new().with_delay(NoDelay)).await?;
//!
//! let mut services = ServiceCollection::new();
//! services.add_singleton_trait::<dyn SingletonService>(service);
//! let provider = services.build();
//!
//! let a = provider.get_trait::<dyn SingletonService>()?;
//! a.do_work().await;
//! let b = provider.get_trait::<dyn SingletonService>()?;
//! b.do_work().await;
//!
//! assert_eq!(a.id(), b.id());
//! assert_eq!(a.counter(), 2);
//! assert!(Arc::ptr_eq(&a, &b));
//! # Ok(())
//! # }
//! ```

// Module declarations
pub mod collection;
pub mod provider;
pub mod config;
pub mod delay;
pub mod error;
pub mod key;
pub mod observer;
pub mod root;
pub mod singleton;
pub mod traits;

// Internal modules
mod registration;

// Re-export core types
pub use collection::ServiceCollection;
pub use provider::ServiceProvider;
pub use config::SingletonConfig;
pub use delay::{Delay, NoDelay, TokioDelay};
pub use error::{ConfigError, DiError, DiResult, InitializationError, ServiceError};
pub use key::{Key, key_of_trait, key_of_type};
pub use observer::{DiObserver, TracingObserver};
pub use root::{HandleLabel, ScenarioReport, WorkRecord, SETUP_FAILED_MESSAGE};
pub use singleton::{AsyncSingleton, SimulatedUpstream, SingletonOptions, SingletonService, Upstream};
pub use traits::{Resolver, ResolverCore};
