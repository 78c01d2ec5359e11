//! Backend entry-point: loads settings, connects the store, and serves HTTP.

use std::io;
use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use academic_backend::domain::ports::{RecordStore, StoreHealth};
use academic_backend::domain::{Assignment, Module, User};
use academic_backend::inbound::http::health::HealthState;
use academic_backend::outbound::memory::InMemoryDocumentStore;
use academic_backend::outbound::mongo::{MongoConfig, MongoDocumentStore};
use academic_backend::server::{RecordServices, ServerConfig, create_server};
use academic_backend::settings::{AppSettings, StoreKind};
use ortho_config::OrthoConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|err| io::Error::other(format!("failed to load settings: {err}")))?;
    let config = ServerConfig::new(
        settings.bind_addr().map_err(io::Error::other)?,
        settings.cors_origin(),
    );
    let health_state = web::Data::new(HealthState::new());

    match settings.store_kind().map_err(io::Error::other)? {
        StoreKind::Mongo => {
            let mongo = MongoConfig::new(settings.mongo_url(), settings.database())
                .with_server_selection_timeout(settings.mongo_timeout());
            let store = MongoDocumentStore::connect(&mongo)
                .await
                .map_err(|err| io::Error::other(format!("mongo connection failed: {err}")))?;
            info!(database = mongo.database(), "using mongo document store");
            serve(Arc::new(store), config, health_state).await
        }
        StoreKind::Memory => {
            warn!("using in-memory document store; records are lost on restart");
            serve(Arc::new(InMemoryDocumentStore::new()), config, health_state).await
        }
    }
}

async fn serve<S>(
    store: Arc<S>,
    config: ServerConfig,
    health_state: web::Data<HealthState>,
) -> io::Result<()>
where
    S: RecordStore<User> + RecordStore<Module> + RecordStore<Assignment> + StoreHealth + 'static,
{
    let services = RecordServices::new(store, Arc::new(DefaultClock));
    services
        .prepare()
        .await
        .map_err(|err| io::Error::other(format!("failed to prepare collections: {err}")))?;

    let bind_addr = config.bind_addr();
    let server = create_server(health_state.clone(), services.into_http_state(), config)?;
    info!(%bind_addr, "listening");

    let result = server.await;
    health_state.mark_unhealthy();
    result
}
