use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Farm, Flock};
///
/// let test = TestBuilder::new()
///     .with_table(Farm)
///     .with_table(Flock)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called. Tables should
    /// be added in dependency order (tables with foreign keys after their referenced
    /// tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the farm and user tables.
    ///
    /// Nearly every test needs these two: the farm establishes the tenant and
    /// the user provides an actor for audit rows and auth flows.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_account_tables(self) -> Self {
        self.with_table(Farm).with_table(User)
    }

    /// Adds all tables required for farm record operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - Farm
    /// - User
    /// - Flock
    /// - House
    /// - EggProduction
    /// - FeedUsage
    /// - Expense
    /// - Customer
    /// - Sale
    /// - ProductionRecord
    ///
    /// Use this when testing record-keeping functionality that doesn't involve
    /// inventory. For inventory tests add `with_inventory_tables()` as well.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_record_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_record_tables(self) -> Self {
        self.with_account_tables()
            .with_table(Flock)
            .with_table(House)
            .with_table(EggProduction)
            .with_table(FeedUsage)
            .with_table(Expense)
            .with_table(Customer)
            .with_table(Sale)
            .with_table(ProductionRecord)
    }

    /// Adds the inventory item and transaction tables.
    pub fn with_inventory_tables(self) -> Self {
        self.with_account_tables()
            .with_table(InventoryItem)
            .with_table(InventoryTransaction)
    }

    /// Adds the chat thread, participant, and message tables.
    pub fn with_chat_tables(self) -> Self {
        self.with_account_tables()
            .with_table(ChatThread)
            .with_table(ChatParticipant)
            .with_table(ChatMessage)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`. Tables are created in the order
    /// they were added to the builder.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
