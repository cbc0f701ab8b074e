//! Composition root: one-time construction, registration, and resolution.

use std::sync::Arc;

use tracing::{error, info};
use uuid::Uuid;

use crate::error::ServiceError;
use crate::observer::TracingObserver;
use crate::singleton::{AsyncSingleton, SingletonOptions, SingletonService};
use crate::traits::Resolver;
use crate::{ServiceCollection, ServiceProvider};

/// Printed when construction or resolution fails.
pub const SETUP_FAILED_MESSAGE: &str = "Failed to set up singleton service DI. Exiting..";

/// Which resolution produced the handle a unit of work ran on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleLabel {
    First,
    Second,
}

/// State read through the handle once a `do_work` call returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkRecord {
    pub handle: HandleLabel,
    pub id: Uuid,
    /// Counter after the call. Equals the value the call logged only while
    /// calls are sequential.
    pub counter_after: u64,
}

/// Outcome of the demonstration scenario, in call order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioReport {
    pub records: Vec<WorkRecord>,
}

impl ScenarioReport {
    pub fn counters(&self) -> Vec<u64> {
        self.records.iter().map(|r| r.counter_after).collect()
    }

    /// True when every recorded call saw the same identity.
    pub fn shares_identity(&self) -> bool {
        match self.records.first() {
            Some(first) => self.records.iter().all(|r| r.id == first.id),
            None => true,
        }
    }
}

/// Runs the factory once and binds the resulting instance into a provider.
///
/// Nothing is registered unless initialization succeeds.
pub async fn compose(options: SingletonOptions) -> Result<ServiceProvider, ServiceError> {
    let service = AsyncSingleton::create_with(options).await?;

    let mut services = ServiceCollection::new();
    services.add_observer(Arc::new(TracingObserver::new()));
    services.add_singleton_trait::<dyn SingletonService>(service);
    Ok(services.build())
}

/// Resolves the singleton capability, treating an empty result as fatal.
pub fn resolve(provider: &ServiceProvider) -> Result<Arc<dyn SingletonService>, ServiceError> {
    provider
        .try_get_trait::<dyn SingletonService>()
        .ok_or(ServiceError::Resolution(std::any::type_name::<dyn SingletonService>()))
}

async fn work_on(
    handle: &Arc<dyn SingletonService>,
    label: HandleLabel,
    report: &mut ScenarioReport,
) {
    handle.do_work().await;
    report.records.push(WorkRecord {
        handle: label,
        id: handle.id(),
        counter_after: handle.counter(),
    });
}

/// Resolves a handle, works on it twice, then resolves a second handle and
/// works on it once. Calls are strictly sequential.
pub async fn run_scenario(provider: &ServiceProvider) -> Result<ScenarioReport, ServiceError> {
    let mut report = ScenarioReport::default();

    let first = resolve(provider)?;
    work_on(&first, HandleLabel::First, &mut report).await;
    work_on(&first, HandleLabel::First, &mut report).await;

    let second = resolve(provider)?;
    work_on(&second, HandleLabel::Second, &mut report).await;

    info!(
        same_instance = Arc::ptr_eq(&first, &second),
        counters = ?report.counters(),
        "Scenario finished"
    );
    Ok(report)
}

/// Full entry sequence: compose, then run the scenario.
pub async fn run(options: SingletonOptions) -> Result<ScenarioReport, ServiceError> {
    let provider = compose(options).await.inspect_err(|e| error!(error = %e, "Setup failed"))?;
    run_scenario(&provider).await
}
