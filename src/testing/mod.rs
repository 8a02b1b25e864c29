use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::database::manager::{ConnectionProvider, DatabaseConnection, DatabaseError, Entity};
use crate::filter::SqlResult;

/// In-memory connection provider for handler tests.
///
/// Hands back the configured fixture rows for every statement, records the
/// statements it was asked to run, and tracks how many connections are
/// currently checked out.
#[derive(Clone)]
pub struct FakeProvider {
    rows: Value,
    acquire_error: Option<fn() -> DatabaseError>,
    query_error: Option<fn() -> DatabaseError>,
    open: Arc<AtomicUsize>,
    acquired: Arc<AtomicUsize>,
    statements: Arc<Mutex<Vec<SqlResult>>>,
}

impl FakeProvider {
    pub fn with_rows(rows: Value) -> Self {
        Self {
            rows,
            acquire_error: None,
            query_error: None,
            open: Arc::new(AtomicUsize::new(0)),
            acquired: Arc::new(AtomicUsize::new(0)),
            statements: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn empty() -> Self {
        Self::with_rows(Value::Array(vec![]))
    }

    pub fn failing_query(error: fn() -> DatabaseError) -> Self {
        Self { query_error: Some(error), ..Self::empty() }
    }

    pub fn unreachable() -> Self {
        Self {
            acquire_error: Some(|| DatabaseError::ConnectionError("connection refused".into())),
            ..Self::empty()
        }
    }

    pub fn open_connections(&self) -> usize {
        self.open.load(Ordering::SeqCst)
    }

    pub fn acquired_total(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }

    pub fn statements(&self) -> Vec<SqlResult> {
        self.statements.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

pub struct FakeConnection {
    rows: Value,
    query_error: Option<fn() -> DatabaseError>,
    open: Arc<AtomicUsize>,
    statements: Arc<Mutex<Vec<SqlResult>>>,
}

impl Drop for FakeConnection {
    fn drop(&mut self) {
        self.open.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ConnectionProvider for FakeProvider {
    type Connection = FakeConnection;

    async fn acquire(&self) -> Result<FakeConnection, DatabaseError> {
        if let Some(error) = self.acquire_error {
            return Err(error());
        }
        self.open.fetch_add(1, Ordering::SeqCst);
        self.acquired.fetch_add(1, Ordering::SeqCst);
        Ok(FakeConnection {
            rows: self.rows.clone(),
            query_error: self.query_error,
            open: self.open.clone(),
            statements: self.statements.clone(),
        })
    }
}

#[async_trait]
impl DatabaseConnection for FakeConnection {
    async fn fetch_all<T: Entity>(&mut self, statement: &SqlResult) -> Result<Vec<T>, DatabaseError> {
        if let Ok(mut statements) = self.statements.lock() {
            statements.push(statement.clone());
        }
        if let Some(error) = self.query_error {
            return Err(error());
        }
        serde_json::from_value(self.rows.clone()).map_err(|e| DatabaseError::QueryError(e.to_string()))
    }
}
