//! Test context handed to tests by [`TestBuilder`](crate::TestBuilder).

use mockito::{Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{error::TestError, token::SigningKey};

/// A complete test environment.
///
/// Bundles an in-memory SQLite database, a mock HTTP server standing in
/// for the identity provider, and the RSA key used to sign test tokens.
/// Create it via [`TestBuilder`](crate::TestBuilder):
///
/// ```ignore
/// let mut test = TestBuilder::new().with_tables().build().await?;
///
/// let jwks = idp::mock_jwks_endpoint(&mut test.server, &test.signing_key);
/// let token = test.signing_key.issue(&claims)?;
/// ```
pub struct TestContext {
    /// Connection to the in-memory SQLite database.
    pub db: DatabaseConnection,
    /// Mock HTTP server standing in for the identity provider.
    pub server: ServerGuard,
    /// Key pair whose public half the mock provider publishes.
    pub signing_key: SigningKey,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;
        let db = Database::connect("sqlite::memory:").await?;
        let signing_key = SigningKey::generate()?;

        Ok(Self {
            db,
            server,
            signing_key,
        })
    }

    pub(crate) async fn create_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
