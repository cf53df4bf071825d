use std::error::Error;
use std::fmt;

use diesel::result::DatabaseErrorKind;
use diesel_async::{AsyncConnection, AsyncPgConnection, SimpleAsyncConnection};
use tracing::{debug, warn};

#[derive(Debug)]
pub enum DatabaseError {
    /// The connection could not be opened, or the server closed it
    Connection(ConnectionFailure),
    Query(diesel::result::Error),
}

#[derive(Debug)]
pub enum ConnectionFailure {
    Establish(diesel::ConnectionError),
    Closed(diesel::result::Error),
}

impl DatabaseError {
    pub fn is_connection_error(&self) -> bool {
        matches!(self, DatabaseError::Connection(_))
    }

    pub fn is_query_error(&self) -> bool {
        matches!(self, DatabaseError::Query(_))
    }
}

impl From<diesel::ConnectionError> for DatabaseError {
    fn from(error: diesel::ConnectionError) -> Self {
        DatabaseError::Connection(ConnectionFailure::Establish(error))
    }
}

impl From<diesel::result::Error> for DatabaseError {
    fn from(error: diesel::result::Error) -> Self {
        match error {
            // tokio-postgres reports a dropped connection as UnableToSendCommand
            diesel::result::Error::DatabaseError(
                DatabaseErrorKind::ClosedConnection | DatabaseErrorKind::UnableToSendCommand,
                _,
            ) => DatabaseError::Connection(ConnectionFailure::Closed(error)),
            error => DatabaseError::Query(error),
        }
    }
}

impl fmt::Display for DatabaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseError::Connection(ConnectionFailure::Establish(e)) => {
                write!(f, "problem connecting to the DB: {e}")
            }
            DatabaseError::Connection(ConnectionFailure::Closed(e)) => {
                write!(f, "the DB connection is closed: {e}")
            }
            DatabaseError::Query(e) => {
                write!(f, "problem executing a statement against the DB: {e}")
            }
        }
    }
}

impl Error for DatabaseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DatabaseError::Connection(ConnectionFailure::Establish(e)) => Some(e),
            DatabaseError::Connection(ConnectionFailure::Closed(e)) => Some(e),
            DatabaseError::Query(e) => Some(e),
        }
    }
}

/// Opens a single connection. The caller owns it and closes it by dropping it.
pub async fn connect(database_url: &str) -> Result<AsyncPgConnection, DatabaseError> {
    let conn = AsyncPgConnection::establish(database_url)
        .await
        .inspect_err(|e| warn!("Failed to connect to the DB: {e}"))?;

    debug!("Opened a DB connection");

    Ok(conn)
}

/// Runs every statement in `sql` against the connection, e.g. the contents of a seed file
pub async fn seed(conn: &mut AsyncPgConnection, sql: &str) -> Result<(), DatabaseError> {
    conn.batch_execute(sql).await?;

    debug!("Seeded the DB");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_connection_is_a_connection_error() {
        let error = diesel::result::Error::DatabaseError(
            DatabaseErrorKind::UnableToSendCommand,
            Box::new("connection closed".to_string()),
        );

        let error = DatabaseError::from(error);

        assert!(error.is_connection_error());
        assert!(!error.is_query_error());
        assert!(error.source().is_some());
        assert_eq!(
            "the DB connection is closed: connection closed",
            error.to_string()
        );
    }

    #[test]
    fn failed_statement_is_a_query_error() {
        let error = diesel::result::Error::DatabaseError(
            DatabaseErrorKind::Unknown,
            Box::new("relation \"books\" does not exist".to_string()),
        );

        let error = DatabaseError::from(error);

        assert!(error.is_query_error());
        assert_eq!(
            "problem executing a statement against the DB: relation \"books\" does not exist",
            error.to_string()
        );
    }

    #[test]
    fn failure_to_establish_is_a_connection_error() {
        let error = DatabaseError::from(diesel::ConnectionError::BadConnection(
            "connection refused".to_string(),
        ));

        assert!(error.is_connection_error());
        assert_eq!(
            "problem connecting to the DB: connection refused",
            error.to_string()
        );
    }
}
