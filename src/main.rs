//! `ayursutra-booking` - serves the booking REST API from in-memory stores.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use ayursutra_booking::adapters::{
    api_router, with_http_layers, ApiServices, InMemoryAppointmentStore,
    InMemoryTreatmentProgramStore, StaticReferenceDirectory,
};
use ayursutra_booking::config::{AppConfig, ServerConfig};
use ayursutra_booking::domain::foundation::DomainError;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let services = build_services(&config)?;
    let app = with_http_layers(api_router(&services), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        environment = ?config.server.environment,
        "AyurSutra booking service started"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("AyurSutra booking service stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.use_json_logs() {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn build_services(config: &AppConfig) -> Result<ApiServices, DomainError> {
    let directory = match config.booking.slot_times_list() {
        Some(times) => StaticReferenceDirectory::clinic_with_slots(times.as_slice())?,
        None => StaticReferenceDirectory::clinic_defaults()?,
    };

    let (appointments, programs) = if config.booking.seed_sample_data {
        (
            InMemoryAppointmentStore::with_sample_data()?,
            InMemoryTreatmentProgramStore::with_sample_data()?,
        )
    } else {
        (InMemoryAppointmentStore::new(), InMemoryTreatmentProgramStore::new())
    };

    tracing::debug!(
        slots = directory.catalog().slot_template().len(),
        seeded = config.booking.seed_sample_data,
        "In-memory adapters ready"
    );

    Ok(ApiServices {
        appointments: Arc::new(appointments),
        programs: Arc::new(programs),
        directory: Arc::new(directory),
        min_lead_days: config.booking.min_lead_days,
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
