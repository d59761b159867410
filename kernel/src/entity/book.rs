mod author;
mod id;
mod image;
mod published;
mod title;

pub use self::{author::*, id::*, image::*, published::*, title::*};
use crate::entity::common::{CreatedAt, UpdatedAt};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Book {
    id: BookId,
    content: BookContent,
    created_at: CreatedAt<Book>,
    updated_at: UpdatedAt<Book>,
}

impl Book {
    pub fn new(
        id: BookId,
        content: BookContent,
        created_at: CreatedAt<Book>,
        updated_at: UpdatedAt<Book>,
    ) -> Self {
        Self {
            id,
            content,
            created_at,
            updated_at,
        }
    }
}

/// Client-controlled part of a [`Book`]: what create inserts and update replaces.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct BookContent {
    title: BookTitle,
    author: BookAuthor,
    published: BookPublished,
    image: Option<BookImage>,
    description: Option<BookDescription>,
}

impl BookContent {
    pub fn new(
        title: BookTitle,
        author: BookAuthor,
        published: BookPublished,
        image: Option<BookImage>,
        description: Option<BookDescription>,
    ) -> Self {
        Self {
            title,
            author,
            published,
            image,
            description,
        }
    }
}
