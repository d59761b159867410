use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::timeout::DependOnOperationTimeout;
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{BookContent, BookId};
use kernel::KernelError;

use crate::service::timeout::bounded;
use crate::transfer::{
    BookDto, CreateBookDto, CreatedBookDto, DeleteBookDto, GetBookDto, UpdateBookDto,
};

#[async_trait::async_trait]
pub trait GetBookService:
    'static + Sync + Send + DependOnBookQuery + DependOnOperationTimeout
{
    /// A missing book is `Ok(None)`, never an error.
    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<Option<BookDto>, KernelError> {
        let id = BookId::new(dto.id);
        let book = bounded(self.operation_timeout(), "get_book", async {
            let mut connection = self.database_connection().transact().await?;
            let book = self.book_query().find_by_id(&mut connection, &id).await?;
            connection.commit().await?;
            Ok::<_, Report<KernelError>>(book)
        })
        .await?;
        if book.is_none() {
            tracing::debug!(id = %id.as_ref(), "book not found");
        }
        Ok(book.map(BookDto::from))
    }
}

impl<T> GetBookService for T where T: DependOnBookQuery + DependOnOperationTimeout {}

#[async_trait::async_trait]
pub trait CreateBookService:
    'static + Sync + Send + DependOnBookModifier + DependOnOperationTimeout
{
    async fn create_book(
        &self,
        dto: CreateBookDto,
    ) -> error_stack::Result<CreatedBookDto, KernelError> {
        tracing::info!(title = %dto.title, "creating book");
        let content = BookContent::try_from(dto)?;

        let book = bounded(self.operation_timeout(), "create_book", async {
            let mut connection = self.database_connection().transact().await?;
            let book = self.book_modifier().create(&mut connection, &content).await?;
            connection.commit().await?;
            Ok::<_, Report<KernelError>>(book)
        })
        .await?;

        tracing::info!(id = %book.id().as_ref(), "book created");
        Ok(CreatedBookDto::from(book))
    }
}

impl<T> CreateBookService for T where T: DependOnBookModifier + DependOnOperationTimeout {}

#[async_trait::async_trait]
pub trait UpdateBookService:
    'static + Sync + Send + DependOnBookModifier + DependOnOperationTimeout
{
    /// Requires the same fields as creation; a partial entity never overwrites a stored one.
    async fn update_book(&self, dto: UpdateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let (id, content) = <(BookId, BookContent)>::try_from(dto)?;
        tracing::info!(id = %id.as_ref(), "updating book");

        let book = bounded(self.operation_timeout(), "update_book", async {
            let mut connection = self.database_connection().transact().await?;
            let book = self
                .book_modifier()
                .update(&mut connection, &id, &content)
                .await?;
            connection.commit().await?;
            Ok::<_, Report<KernelError>>(book)
        })
        .await?;

        Ok(BookDto::from(book))
    }
}

impl<T> UpdateBookService for T where T: DependOnBookModifier + DependOnOperationTimeout {}

#[async_trait::async_trait]
pub trait DeleteBookService:
    'static + Sync + Send + DependOnBookModifier + DependOnOperationTimeout
{
    async fn delete_book(&self, dto: DeleteBookDto) -> error_stack::Result<(), KernelError> {
        let id = BookId::new(dto.id);
        tracing::info!(id = %id.as_ref(), "deleting book");

        bounded(self.operation_timeout(), "delete_book", async {
            let mut connection = self.database_connection().transact().await?;
            self.book_modifier().delete(&mut connection, &id).await?;
            connection.commit().await
        })
        .await
    }
}

impl<T> DeleteBookService for T where T: DependOnBookModifier + DependOnOperationTimeout {}
