use visionary_waitlist::configuration::get_configuration;
use visionary_waitlist::startup::Application;
use visionary_waitlist::telemetry::get_subscriber;
use visionary_waitlist::telemetry::init_subscriber;

/// Initialise telemetry, load config, and serve the landing page
#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // `RUST_LOG` overrides the default level
    let subscriber = get_subscriber("visionary", "info", std::io::stdout);
    init_subscriber(subscriber)?;

    let cfg = get_configuration()?;
    let app = Application::build(cfg)?;
    tracing::info!(port = app.get_port(), "serving landing page");

    if let Err(e) = app.run_until_stopped().await {
        tracing::error!(
            error.cause_chain = ?e,
            error.message = %e,
            "server failed"
        );
        return Err(e.into());
    }
    tracing::info!("server exited gracefully");
    Ok(())
}
