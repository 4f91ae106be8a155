use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::web;
use actix_web::App;
use actix_web::HttpServer;
use tracing_actix_web::TracingLogger;

use crate::configuration::MarkerSettings;
use crate::configuration::Settings;
use crate::form_client::FormClient;
use crate::routes::health_check;
use crate::routes::join;
use crate::routes::landing;

/// Wrapper for actix's `Server` with access to the bound port. Not to be
/// confused with actix's `App`!
pub struct Application {
    /// Left private; use `get_port` to access
    port: u16,
    server: Server,
}

impl Application {
    /// Bind the listener, build the form client, and wire up the routes. The
    /// server does nothing until `run_until_stopped` is awaited.
    pub fn build(cfg: Settings) -> Result<Self, anyhow::Error> {
        let addr = format!("{}:{}", cfg.application.host, cfg.application.port);
        let listener = TcpListener::bind(addr)?;

        // port 0 in config means "any free port"; this is the one we got
        let port = listener.local_addr()?.port();

        let form_client = cfg.form_endpoint.client()?;
        let server = run(listener, form_client, cfg.marker)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 { self.port }

    /// Consumes `self`; the last call (or handed to `tokio::spawn`)
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> { self.server.await }
}

/// The server only listens on an already bound address.
///
/// Declares all endpoints:
/// - `GET /`
/// - `POST /join`
/// - `GET /health_check`
pub fn run(
    listener: TcpListener,
    form_client: FormClient,
    marker_settings: MarkerSettings,
) -> Result<Server, std::io::Error> {
    // `Data` is an `Arc`: every worker shares one client (and its connection pool)
    let form_client = web::Data::new(form_client);
    let marker_settings = web::Data::new(marker_settings);

    // the closure runs once per worker
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/", web::get().to(landing))
            .route("/join", web::post().to(join))
            .route("/health_check", web::get().to(health_check))
            .app_data(form_client.clone())
            .app_data(marker_settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
