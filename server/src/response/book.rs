use application::transfer::{BookDto, CreatedBookDto};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct CreatedBookResponse {
    id: Uuid,
    title: String,
    author: String,
}

impl IntoResponse for CreatedBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct BookResponse {
    id: Uuid,
    title: String,
    author: String,
    #[serde(with = "time::serde::rfc3339")]
    published: OffsetDateTime,
    image: Option<String>,
    description: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    updated_at: OffsetDateTime,
}

impl IntoResponse for BookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct BookPresenter;

impl Exhaust<()> for BookPresenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}

impl Exhaust<CreatedBookDto> for BookPresenter {
    type To = CreatedBookResponse;
    fn emit(&self, input: CreatedBookDto) -> Self::To {
        CreatedBookResponse {
            id: input.id,
            title: input.title,
            author: input.author,
        }
    }
}

impl Exhaust<BookDto> for BookPresenter {
    type To = BookResponse;
    fn emit(&self, input: BookDto) -> Self::To {
        BookResponse {
            id: input.id,
            title: input.title,
            author: input.author,
            published: input.published,
            image: input.image,
            description: input.description,
            created_at: input.created_at,
            updated_at: input.updated_at,
        }
    }
}

impl Exhaust<Option<BookDto>> for BookPresenter {
    type To = Option<BookResponse>;
    fn emit(&self, input: Option<BookDto>) -> Self::To {
        input.map(|book| Exhaust::emit(self, book))
    }
}
