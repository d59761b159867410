use error_stack::Report;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::prelude::entity::{
    Book, BookAuthor, BookContent, BookDescription, BookId, BookImage, BookPublished, BookTitle,
    DestructBook, DestructBookContent,
};
use kernel::KernelError;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookDto {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub published: OffsetDateTime,
    pub image: Option<String>,
    pub description: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            content,
            created_at,
            updated_at,
        } = value.into_destruct();
        let DestructBookContent {
            title,
            author,
            published,
            image,
            description,
        } = content.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            published: published.into(),
            image: image.map(Into::into),
            description: description.map(Into::into),
            created_at: created_at.into(),
            updated_at: updated_at.into(),
        }
    }
}

/// Reduced projection returned after creation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CreatedBookDto {
    pub id: Uuid,
    pub title: String,
    pub author: String,
}

impl From<Book> for CreatedBookDto {
    fn from(value: Book) -> Self {
        let DestructBook { id, content, .. } = value.into_destruct();
        let DestructBookContent { title, author, .. } = content.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GetBookDto {
    pub id: Uuid,
}

/// `published` is raw text; the service normalizes it.
#[derive(Debug, Clone, Default)]
pub struct CreateBookDto {
    pub title: String,
    pub author: String,
    pub published: String,
    pub image: Option<String>,
    pub description: Option<String>,
}

impl TryFrom<CreateBookDto> for BookContent {
    type Error = Report<KernelError>;
    fn try_from(value: CreateBookDto) -> Result<Self, Self::Error> {
        validate(
            value.title,
            value.author,
            &value.published,
            value.image,
            value.description,
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateBookDto {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub published: String,
    pub image: Option<String>,
    pub description: Option<String>,
}

impl TryFrom<UpdateBookDto> for (BookId, BookContent) {
    type Error = Report<KernelError>;
    fn try_from(value: UpdateBookDto) -> Result<Self, Self::Error> {
        let content = validate(
            value.title,
            value.author,
            &value.published,
            value.image,
            value.description,
        )?;
        Ok((BookId::new(value.id), content))
    }
}

#[derive(Debug, Clone)]
pub struct DeleteBookDto {
    pub id: Uuid,
}

fn validate(
    title: String,
    author: String,
    published: &str,
    image: Option<String>,
    description: Option<String>,
) -> error_stack::Result<BookContent, KernelError> {
    let title = required("title", title)?;
    let author = required("author", author)?;
    let published = BookPublished::parse(published)?.ok_or_else(|| {
        Report::new(KernelError::Validation).attach_printable("published is required")
    })?;
    Ok(BookContent::new(
        BookTitle::new(title),
        BookAuthor::new(author),
        published,
        optional(image).map(BookImage::new),
        optional(description).map(BookDescription::new),
    ))
}

fn required(field: &'static str, value: String) -> error_stack::Result<String, KernelError> {
    optional(Some(value)).ok_or_else(|| {
        Report::new(KernelError::Validation).attach_printable(format!("{field} is required"))
    })
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
