pub mod config;
pub mod error;
pub mod obfuscate_errors;
pub mod panic_handler;
pub mod roster;
pub mod routes;
pub mod shared_state;
pub mod tracing_config;

use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use axum::{routing::IntoMakeService, Extension, Router};
use hyper::server::conn::AddrIncoming;
use sideline_storage::{ProviderConfig, S3ProviderConfig};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::MakeRequestUuid,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
    ServiceBuilderExt,
};
use tracing::{event, Level};

pub use crate::error::Error;
use crate::{obfuscate_errors::ObfuscateErrorLayer, shared_state::InnerState};

pub struct Server {
    pub host: String,
    pub port: u16,
    pub server: axum::Server<AddrIncoming, IntoMakeService<Router>>,
}

fn storage_operator(config: &config::Config) -> Result<sideline_storage::Operator, anyhow::Error> {
    let (provider, base_location) = match config.storage_bucket.as_deref() {
        Some(bucket) => {
            let endpoint = config
                .storage_endpoint
                .as_deref()
                .map(|e| e.parse())
                .transpose()
                .map_err(|e| anyhow::anyhow!("STORAGE_ENDPOINT: {e}"))?;
            (
                ProviderConfig::S3(S3ProviderConfig {
                    endpoint,
                    region: config.storage_region.clone(),
                    access_key_id: config.storage_key_id.clone(),
                    secret_key: config.storage_secret_key.clone(),
                }),
                bucket.to_string(),
            )
        }
        None => (
            ProviderConfig::Local {
                root: config.storage_local_dir.clone(),
            },
            String::new(),
        ),
    };

    let operator = provider.create_operator(&base_location, &config.public_url_base)?;
    Ok(operator)
}

pub async fn run_server(config: config::Config) -> Result<Server, anyhow::Error> {
    let db = sideline_db::connect(config.database_url.as_str(), 32)?;

    let production =
        config.env != "development" && config.env != "test" && !cfg!(debug_assertions);

    let storage = storage_operator(&config)?;

    let state = Arc::new(InnerState {
        production,
        db,
        storage,
        organization_id: config.organization_id,
        operator_user_id: config.operator_user_id,
    });

    let app = routes::configure_routes(Router::new()).layer(
        // Global middlewares
        ServiceBuilder::new()
            .layer(CatchPanicLayer::custom(move |err| {
                panic_handler::handle_panic(production, err)
            }))
            .layer(ObfuscateErrorLayer::new(production))
            .compression()
            .decompression()
            .set_x_request_id(MakeRequestUuid)
            .propagate_x_request_id()
            .layer(Extension(state))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO))
                    .on_request(DefaultOnRequest::new().level(Level::INFO)),
            )
            .into_inner(),
    );

    let bind_ip: IpAddr = config.host.parse()?;
    let addr = SocketAddr::from((bind_ip, config.port));
    let builder = axum::Server::try_bind(&addr)?;

    let server = builder.serve(app.into_make_service());
    // With port 0 the OS picks the port, so report the bound one.
    let port = server.local_addr().port();
    event!(Level::INFO, "Listening on {}:{}", config.host, port);

    Ok(Server {
        host: config.host,
        port,
        server,
    })
}
