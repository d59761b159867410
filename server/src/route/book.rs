use application::service::{
    CreateBookService, DeleteBookService, GetBookService, UpdateBookService,
};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use axum_extra::extract::WithRejection;
use error_stack::Report;
use kernel::KernelError;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    BookTransformer, CreateBookRequest, DeleteBookRequest, GetBookRequest, UpdateBookRequest,
};
use crate::response::{BookPresenter, BookResponse, CreatedBookResponse};

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl BookRouter for Router<AppModule> {
    fn route_book(self) -> Self {
        self.route(
            "/books",
            get(get_book)
                .post(create_book)
                .put(update_book)
                .delete(delete_book),
        )
    }
}

async fn create_book(
    State(module): State<AppModule>,
    WithRejection(Json(req), _): WithRejection<Json<CreateBookRequest>, ErrorStatus>,
) -> Result<CreatedBookResponse, ErrorStatus> {
    Controller::new(BookTransformer, BookPresenter)
        .intake(req)
        .handle(|dto| module.create_book(dto))
        .await
        .map_err(ErrorStatus::from)
}

async fn update_book(
    State(module): State<AppModule>,
    WithRejection(Json(req), _): WithRejection<Json<UpdateBookRequest>, ErrorStatus>,
) -> Result<BookResponse, ErrorStatus> {
    Controller::new(BookTransformer, BookPresenter)
        .try_intake(req)?
        .handle(|dto| module.update_book(dto))
        .await
        .map_err(ErrorStatus::from)
}

async fn get_book(
    State(module): State<AppModule>,
    WithRejection(Query(req), _): WithRejection<Query<GetBookRequest>, ErrorStatus>,
) -> Result<BookResponse, ErrorStatus> {
    Controller::new(BookTransformer, BookPresenter)
        .try_intake(req)?
        .handle(|dto| module.get_book(dto))
        .await
        .map_err(ErrorStatus::from)?
        .ok_or_else(|| {
            Report::new(KernelError::NotFound)
                .attach_printable("No book with the requested id")
                .into()
        })
}

async fn delete_book(
    State(module): State<AppModule>,
    WithRejection(Query(req), _): WithRejection<Query<DeleteBookRequest>, ErrorStatus>,
) -> Result<StatusCode, ErrorStatus> {
    Controller::new(BookTransformer, BookPresenter)
        .try_intake(req)?
        .handle(|dto| module.delete_book(dto))
        .await
        .map_err(ErrorStatus::from)
}
