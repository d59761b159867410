use error_stack::{Report, ResultExt};
use sqlx::PgConnection;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{
    Book, BookAuthor, BookContent, BookDescription, BookId, BookImage, BookPublished, BookTitle,
    CreatedAt, UpdatedAt,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresBookRepository;

#[async_trait::async_trait]
impl BookQuery for PostgresBookRepository {
    type Transaction = PostgresTransaction;
    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        PgBookInternal::find_by_id(con, id).await
    }
}

#[async_trait::async_trait]
impl BookModifier for PostgresBookRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        book: &BookContent,
    ) -> error_stack::Result<Book, KernelError> {
        PgBookInternal::create(con, book).await
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        id: &BookId,
        book: &BookContent,
    ) -> error_stack::Result<Book, KernelError> {
        PgBookInternal::update(con, id, book).await
    }

    async fn delete(
        &self,
        con: &mut PostgresTransaction,
        id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        PgBookInternal::delete(con, id).await
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: Uuid,
    title: String,
    author: String,
    published: OffsetDateTime,
    image: Option<String>,
    description: Option<String>,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
}

impl From<BookRow> for Book {
    fn from(value: BookRow) -> Self {
        Book::new(
            BookId::new(value.id),
            BookContent::new(
                BookTitle::new(value.title),
                BookAuthor::new(value.author),
                BookPublished::new(value.published),
                value.image.map(BookImage::new),
                value.description.map(BookDescription::new),
            ),
            CreatedAt::new(value.created_at),
            UpdatedAt::new(value.updated_at),
        )
    }
}

pub(in crate::database) struct PgBookInternal;

impl PgBookInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, title, author, published, image, description, created_at, updated_at
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()
        .attach_printable("select book by id")?;
        Ok(row.map(Book::from))
    }

    async fn create(
        con: &mut PgConnection,
        book: &BookContent,
    ) -> error_stack::Result<Book, KernelError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            INSERT INTO books (title, author, published, image, description)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, author, published, image, description, created_at, updated_at
            "#,
        )
        .bind(book.title().as_ref())
        .bind(book.author().as_ref())
        .bind(book.published().as_ref())
        .bind(book.image().as_ref().map(|image| image.as_ref()))
        .bind(book.description().as_ref().map(|description| description.as_ref()))
        .fetch_one(con)
        .await
        .convert_error()
        .attach_printable("insert book")?;
        Ok(Book::from(row))
    }

    async fn update(
        con: &mut PgConnection,
        id: &BookId,
        book: &BookContent,
    ) -> error_stack::Result<Book, KernelError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            UPDATE books
            SET title = $2, author = $3, published = $4, image = $5, description = $6,
                updated_at = now()
            WHERE id = $1
            RETURNING id, title, author, published, image, description, created_at, updated_at
            "#,
        )
        .bind(id.as_ref())
        .bind(book.title().as_ref())
        .bind(book.author().as_ref())
        .bind(book.published().as_ref())
        .bind(book.image().as_ref().map(|image| image.as_ref()))
        .bind(book.description().as_ref().map(|description| description.as_ref()))
        .fetch_optional(con)
        .await
        .convert_error()
        .attach_printable("update book")?;
        row.map(Book::from).ok_or_else(|| {
            Report::new(KernelError::NotFound)
                .attach_printable(format!("No book with id {} to update", id.as_ref()))
        })
    }

    async fn delete(con: &mut PgConnection, id: &BookId) -> error_stack::Result<(), KernelError> {
        let result = sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .execute(con)
        .await
        .convert_error()
        .attach_printable("delete book")?;
        if result.rows_affected() == 0 {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("No book with id {} to delete", id.as_ref())));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use time::macros::datetime;
    use uuid::Uuid;

    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::BookQuery;
    use kernel::interface::update::BookModifier;
    use kernel::prelude::entity::{
        BookAuthor, BookContent, BookDescription, BookId, BookPublished, BookTitle,
    };
    use kernel::KernelError;

    use crate::database::postgres::book::PostgresBookRepository;
    use crate::database::postgres::PostgresDatabase;

    fn content(title: &str) -> BookContent {
        BookContent::new(
            BookTitle::new(title),
            BookAuthor::new("Italo Calvino"),
            BookPublished::new(datetime!(1972-11-01 0:00 UTC)),
            None,
            Some(BookDescription::new("Cities described to Kublai Khan")),
        )
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn crud() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut connection = db.transact().await?;

        let created = PostgresBookRepository
            .create(&mut connection, &content("Invisible Cities"))
            .await?;
        assert_eq!(created.content(), &content("Invisible Cities"));
        assert!(created.created_at().as_ref() <= created.updated_at().as_ref());

        let found = PostgresBookRepository
            .find_by_id(&mut connection, created.id())
            .await?;
        assert_eq!(found.as_ref(), Some(&created));

        let updated = PostgresBookRepository
            .update(&mut connection, created.id(), &content("Le città invisibili"))
            .await?;
        assert_eq!(updated.id(), created.id());
        assert_eq!(updated.content(), &content("Le città invisibili"));
        assert_eq!(updated.created_at(), created.created_at());

        PostgresBookRepository
            .delete(&mut connection, created.id())
            .await?;
        let found = PostgresBookRepository
            .find_by_id(&mut connection, created.id())
            .await?;
        assert!(found.is_none());

        let report = PostgresBookRepository
            .delete(&mut connection, created.id())
            .await
            .unwrap_err();
        assert_eq!(report.current_context(), &KernelError::NotFound);

        connection.roll_back().await
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn update_of_missing_row_is_not_found() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut connection = db.transact().await?;
        let id = BookId::new(Uuid::new_v4());

        let report = PostgresBookRepository
            .update(&mut connection, &id, &content("Nowhere"))
            .await
            .unwrap_err();
        assert_eq!(report.current_context(), &KernelError::NotFound);

        connection.roll_back().await
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn empty_title_violates_check_constraint() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut connection = db.transact().await?;

        let report = PostgresBookRepository
            .create(&mut connection, &content(""))
            .await
            .unwrap_err();
        assert_eq!(report.current_context(), &KernelError::Validation);

        connection.roll_back().await
    }
}
