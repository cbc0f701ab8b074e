#![allow(dead_code)]

use singleton_di::{AsyncSingleton, NoDelay, ServiceCollection, ServiceProvider, SingletonOptions, SingletonService};

/// Initialize tracing for tests with appropriate settings
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Options that never wait on the clock.
pub fn instant_options() -> SingletonOptions {
    SingletonOptions::new().with_delay(NoDelay)
}

/// Builds a provider with a freshly initialized singleton bound as its capability.
pub async fn provider_with_singleton() -> ServiceProvider {
    let service = AsyncSingleton::create_with(instant_options())
        .await
        .expect("initialization with an available upstream succeeds");
    let mut services = ServiceCollection::new();
    services.add_singleton_trait::<dyn SingletonService>(service);
    services.build()
}
