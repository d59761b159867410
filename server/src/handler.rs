use std::ops::Deref;
use std::sync::Arc;

use driver::database::{PostgresBookRepository, PostgresDatabase};
use kernel::interface::database::DependOnDatabaseConnection;
use kernel::interface::query::DependOnBookQuery;
use kernel::interface::timeout::{DependOnOperationTimeout, OperationTimeout};
use kernel::interface::update::DependOnBookModifier;
use kernel::KernelError;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new(config: &ServerConfig) -> error_stack::Result<Self, KernelError> {
        Ok(Self::from(Handler::init(config).await?))
    }
}

impl From<Handler> for AppModule {
    fn from(handler: Handler) -> Self {
        Self(Arc::new(handler))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

pub struct Handler {
    pgpool: PostgresDatabase,
    timeout: OperationTimeout,
}

impl Handler {
    pub async fn init(config: &ServerConfig) -> error_stack::Result<Self, KernelError> {
        let pgpool = PostgresDatabase::new().await?;
        Ok(Self::new(pgpool, config.operation_timeout))
    }

    pub fn new(pgpool: PostgresDatabase, timeout: OperationTimeout) -> Self {
        Self { pgpool, timeout }
    }
}

impl DependOnDatabaseConnection for Handler {
    type DatabaseConnection = PostgresDatabase;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        &self.pgpool
    }
}

impl DependOnBookQuery for Handler {
    type BookQuery = PostgresBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &PostgresBookRepository
    }
}

impl DependOnBookModifier for Handler {
    type BookModifier = PostgresBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &PostgresBookRepository
    }
}

impl DependOnOperationTimeout for Handler {
    fn operation_timeout(&self) -> &OperationTimeout {
        &self.timeout
    }
}
