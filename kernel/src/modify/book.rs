use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Book, BookContent, BookId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    /// Inserts the content; the store assigns id and timestamps.
    async fn create(
        &self,
        con: &mut Self::Transaction,
        book: &BookContent,
    ) -> error_stack::Result<Book, KernelError>;
    /// Replaces every mutable field. Fails with [`KernelError::NotFound`] when `id` matches no row.
    async fn update(
        &self,
        con: &mut Self::Transaction,
        id: &BookId,
        book: &BookContent,
    ) -> error_stack::Result<Book, KernelError>;
    /// Fails with [`KernelError::NotFound`] when nothing was deleted.
    async fn delete(
        &self,
        con: &mut Self::Transaction,
        id: &BookId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBookModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type BookModifier: BookModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn book_modifier(&self) -> &Self::BookModifier;
}
