//! Declarative test environment setup.

use sea_orm::{DbBackend, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test initialization.
///
/// Chain configuration methods and finish with [`build`](Self::build) to
/// get a [`TestContext`]. Tests that never touch the database can skip
/// [`with_tables`](Self::with_tables); the connection is opened either
/// way but stays schemaless.
pub struct TestBuilder {
    include_tables: bool,
}

impl TestBuilder {
    /// Create a new TestBuilder.
    pub fn new() -> Self {
        Self {
            include_tables: false,
        }
    }

    /// Create every application table in the test database.
    ///
    /// Derives CREATE TABLE statements from the entity definitions, so
    /// the test schema always matches the code under test.
    pub fn with_tables(mut self) -> Self {
        self.include_tables = true;
        self
    }

    /// Build the test context, creating tables when requested.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        if self.include_tables {
            let schema = Schema::new(DbBackend::Sqlite);
            context
                .create_tables(vec![
                    schema.create_table_from_entity(entity::prelude::Account),
                    schema.create_table_from_entity(entity::prelude::Offer),
                    schema.create_table_from_entity(entity::prelude::Application),
                    schema.create_table_from_entity(entity::prelude::Placement),
                ])
                .await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
