//! The asynchronously initialized singleton service.
//!
//! [`AsyncSingleton`] has no public constructor. The only way to obtain one
//! is [`AsyncSingleton::create`] (or [`AsyncSingleton::create_with`]), which
//! runs the asynchronous initialization to completion before handing out an
//! `Arc`. A caller therefore never observes a half-initialized instance.
//!
//! # Examples
//!
//! ```
//! use singleton_di::{AsyncSingleton, NoDelay, SingletonOptions, SingletonService};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = AsyncSingleton::create_with(SingletonOptions::new().with_delay(NoDelay)).await?;
//! assert_eq!(service.counter(), 0);
//!
//! service.do_work().await;
//! service.do_work().await;
//! assert_eq!(service.counter(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! Direct construction does not compile outside this module:
//!
//! ```compile_fail
//! let options = singleton_di::SingletonOptions::new();
//! let service = singleton_di::AsyncSingleton::new(&options);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::delay::{Delay, TokioDelay};
use crate::error::InitializationError;

/// Default suspension of the initialization step.
pub const DEFAULT_INIT_DELAY: Duration = Duration::from_millis(1000);

/// Default suspension of each unit of work.
pub const DEFAULT_WORK_DELAY: Duration = Duration::from_millis(1000);

/// The capability consumers resolve from the registry.
#[async_trait]
pub trait SingletonService: Send + Sync {
    /// Performs one unit of work, incrementing the shared counter by one.
    async fn do_work(&self);

    /// Identity assigned at construction.
    fn id(&self) -> Uuid;

    /// Number of units of work performed so far, across all handles.
    fn counter(&self) -> u64;
}

/// External dependency contacted while initializing.
#[async_trait]
pub trait Upstream: Send + Sync {
    /// Establishes the connection the service needs before it is usable.
    async fn connect(&self) -> Result<(), InitializationError>;
}

/// In-process stand-in for a database or remote endpoint.
#[derive(Debug, Clone)]
pub struct SimulatedUpstream {
    name: String,
    available: bool,
}

impl SimulatedUpstream {
    /// An upstream that accepts the connection.
    pub fn available() -> Self {
        Self {
            name: "simulated-db".to_string(),
            available: true,
        }
    }

    /// An upstream that refuses the connection.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::available()
        }
    }

    /// Renames the upstream as reported in errors.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

#[async_trait]
impl Upstream for SimulatedUpstream {
    async fn connect(&self) -> Result<(), InitializationError> {
        if self.available {
            Ok(())
        } else {
            Err(InitializationError::UpstreamUnavailable(self.name.clone()))
        }
    }
}

/// Collaborators and timings used by the factory.
#[derive(Clone)]
pub struct SingletonOptions {
    init_delay: Duration,
    work_delay: Duration,
    delay: Arc<dyn Delay>,
    upstream: Arc<dyn Upstream>,
}

impl SingletonOptions {
    /// Defaults: one second for init and work, Tokio clock, reachable upstream.
    pub fn new() -> Self {
        Self {
            init_delay: DEFAULT_INIT_DELAY,
            work_delay: DEFAULT_WORK_DELAY,
            delay: Arc::new(TokioDelay),
            upstream: Arc::new(SimulatedUpstream::available()),
        }
    }

    pub fn with_init_delay(mut self, init_delay: Duration) -> Self {
        self.init_delay = init_delay;
        self
    }

    pub fn with_work_delay(mut self, work_delay: Duration) -> Self {
        self.work_delay = work_delay;
        self
    }

    /// Replaces the suspension mechanism.
    pub fn with_delay(mut self, delay: impl Delay + 'static) -> Self {
        self.delay = Arc::new(delay);
        self
    }

    /// Replaces the external dependency contacted during initialization.
    pub fn with_upstream(mut self, upstream: impl Upstream + 'static) -> Self {
        self.upstream = Arc::new(upstream);
        self
    }

    pub fn init_delay(&self) -> Duration {
        self.init_delay
    }

    pub fn work_delay(&self) -> Duration {
        self.work_delay
    }
}

impl Default for SingletonOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SingletonOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SingletonOptions")
            .field("init_delay", &self.init_delay)
            .field("work_delay", &self.work_delay)
            .finish_non_exhaustive()
    }
}

/// Stateful service whose construction requires an asynchronous round-trip.
pub struct AsyncSingleton {
    id: Uuid,
    counter: AtomicU64,
    work_delay: Duration,
    delay: Arc<dyn Delay>,
}

impl AsyncSingleton {
    // Private: the factory is the only construction path.
    fn new(options: &SingletonOptions) -> Self {
        Self {
            id: Uuid::new_v4(),
            counter: AtomicU64::new(0),
            work_delay: options.work_delay,
            delay: options.delay.clone(),
        }
    }

    /// Creates and initializes the service with default options.
    pub async fn create() -> Result<Arc<Self>, InitializationError> {
        Self::create_with(SingletonOptions::default()).await
    }

    /// Creates and initializes the service with the given collaborators.
    ///
    /// On failure the allocation is dropped before returning, so no
    /// instance escapes.
    pub async fn create_with(options: SingletonOptions) -> Result<Arc<Self>, InitializationError> {
        let instance = Self::new(&options);
        instance.initialize(&options).await?;
        Ok(Arc::new(instance))
    }

    async fn initialize(&self, options: &SingletonOptions) -> Result<(), InitializationError> {
        info!(id = %self.id, "Initializing SingletonService...");
        options.delay.sleep(options.init_delay).await;
        if let Err(e) = options.upstream.connect().await {
            warn!(id = %self.id, error = %e, "SingletonService initialization failed");
            return Err(e);
        }
        info!(id = %self.id, "SingletonService initialized.");
        Ok(())
    }
}

#[async_trait]
impl SingletonService for AsyncSingleton {
    async fn do_work(&self) {
        let counter = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        info!(id = %self.id, counter, "Singleton Instance ID: {}, Counter: {}", self.id, counter);
        info!("Starting work...");
        self.delay.sleep(self.work_delay).await;
        info!("Work completed.");
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn counter(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for AsyncSingleton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncSingleton")
            .field("id", &self.id)
            .field("counter", &self.counter())
            .finish()
    }
}
