use career_match::advisor::CareerAdvisor;
use career_match::catalog::Catalog;
use career_match::config::AppConfig;
use career_match::error::AppError;
use career_match::matching::CriteriaTable;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the catalog and criteria table named by `config`. Any failure here
/// is fatal for the process.
pub(crate) fn load_advisor(config: &AppConfig) -> Result<CareerAdvisor, AppError> {
    let catalog = Catalog::from_path(&config.catalog.path)?;
    info!(
        path = %config.catalog.path.display(),
        records = catalog.len(),
        unique = catalog.unique().len(),
        "career catalog loaded"
    );

    let criteria = match &config.catalog.criteria_path {
        Some(path) => {
            let table = CriteriaTable::from_path(path)?;
            info!(path = %path.display(), types = table.types().count(), "criteria table loaded");
            table
        }
        None => CriteriaTable::standard(),
    };

    Ok(CareerAdvisor::new(
        Arc::new(catalog),
        criteria,
        config.limits,
    ))
}
