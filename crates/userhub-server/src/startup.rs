//! Server startup utilities.

use tracing::info;

/// Prints server startup information.
pub fn print_startup_info(host: &str, port: u16) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:    http://{}:{}/user", host, port);
    info!("Health:      http://{}:{}/health", host, port);
    info!("Swagger UI:  http://{}:{}/swagger-ui", host, port);
    info!("{}", separator);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_startup_info_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_startup_info("0.0.0.0", 8080);
    }
}
