//! Database layer
//!
//! The persistence contract (driver, pooling, readiness) is not settled
//! yet, so [`connect`] only gates startup: a process without a configured
//! URL runs database-less, and a configured URL is refused until a real
//! driver is wired in.
//!
//! TODO: connect a MongoDB pool here once the persistence module lands.

use crate::config::DatabaseSection;
use crate::error::{Error, Result};

/// Handle to the backing database, held for the process lifetime.
///
/// Carries no connection yet; it gives the shared state and health
/// reporting a concrete type to hold once [`connect`] can succeed.
#[derive(Debug)]
pub struct Database;

/// Establish the database connection before the listener binds.
///
/// Failure here is startup-fatal: the caller propagates the error and the
/// process exits without ever opening a socket.
pub async fn connect(config: &DatabaseSection) -> Result<Option<Database>> {
    match &config.url {
        Some(url) => Err(Error::database(format!(
            "database support is not implemented yet (configured url: {url})"
        ))),
        None => {
            tracing::warn!("No database configured; starting without persistence");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connect_without_url_skips_database() {
        let db = connect(&DatabaseSection { url: None }).await.unwrap();
        assert!(db.is_none());
    }

    #[tokio::test]
    async fn connect_with_url_is_fatal() {
        let result = connect(&DatabaseSection {
            url: Some("mongodb://localhost:27017/yatra".to_string()),
        })
        .await;

        assert!(matches!(result, Err(Error::Database(_))));
    }
}
