use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_tracing(service_name: &str, log_level: &str, json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    // stdout carries command output, logs go to stderr.
    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .flatten_event(true),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init()
    };

    if let Err(e) = result {
        eprintln!(
            "Failed to initialize tracing for service '{}': {}",
            service_name, e
        );
        return;
    }

    tracing::debug!(service = service_name, "Tracing initialized");
}
