use std::ops::Deref;
use std::sync::Arc;

use driver::database::{OnMemoryBookRepository, OnMemoryDatabase};
use kernel::interface::database::DependOnDatabaseConnection;
use kernel::interface::query::DependOnBookQuery;
use kernel::interface::update::DependOnBookModifier;
use vodca::References;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub fn new() -> Self {
        Self(Arc::new(Handler::init()))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

#[derive(References)]
pub struct Handler {
    database: OnMemoryDatabase,
    book_repository: OnMemoryBookRepository,
}

impl Handler {
    pub fn init() -> Self {
        Self {
            database: OnMemoryDatabase::new(),
            book_repository: OnMemoryBookRepository,
        }
    }
}

impl DependOnDatabaseConnection for Handler {
    type DatabaseConnection = OnMemoryDatabase;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        self.database()
    }
}

impl DependOnBookQuery for Handler {
    type BookQuery = OnMemoryBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        self.book_repository()
    }
}

impl DependOnBookModifier for Handler {
    type BookModifier = OnMemoryBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        self.book_repository()
    }
}
