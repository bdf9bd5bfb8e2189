use application::service::{
    CreateBookService, DeleteBookService, GetAllBookService, GetBookService, UpdateBookService,
};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use error_stack::Report;
use kernel::KernelError;

use crate::controller::Controller;
use crate::error::{BookAction, ErrorStatus};
use crate::handler::AppModule;
use crate::request::{
    BookRequest, BookTransformer, DeleteBookRequest, GetAllBookRequest, GetBookRequest,
};
use crate::response::{BookPresenter, DeletedBookPresenter, UpdatedBookPresenter};

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl BookRouter for Router<AppModule> {
    fn route_book(self) -> Self {
        self.route(
            "/books",
            get(
                |State(module): State<AppModule>,
                 req: Result<Query<Vec<(String, String)>>, QueryRejection>| async move {
                    let pairs = req
                        .map(|Query(pairs)| pairs)
                        .unwrap_or_else(|rejection| {
                            tracing::debug!("ignored query: {rejection}");
                            Vec::new()
                        });
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(GetAllBookRequest::from_pairs(pairs))
                        .handle(|dto| module.get_all_books(dto))
                        .await
                        .map_err(|report| ErrorStatus::new(BookAction::List, report))
                },
            )
            .post(
                |State(module): State<AppModule>,
                 req: Result<Json<BookRequest>, JsonRejection>| async move {
                    let Json(req) = match req {
                        Ok(req) => req,
                        Err(rejection) => {
                            return Err(ErrorStatus::rejected(BookAction::Create, rejection))
                        }
                    };
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(req)
                        .handle(|dto| module.create_book(dto))
                        .await
                        .map_err(|report| ErrorStatus::new(BookAction::Create, report))
                },
            )
            .fallback(super::method_not_allowed),
        )
        .route(
            "/books/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(GetBookRequest::new(id.clone()))
                        .handle(|dto| module.get_book(dto))
                        .await
                        .map_err(|report| ErrorStatus::new(BookAction::Get, report))
                        .and_then(|res| {
                            res.ok_or_else(|| {
                                let report = Report::new(KernelError::NotFound)
                                    .attach_printable(format!("id: {id}"));
                                ErrorStatus::new(BookAction::Get, report)
                            })
                        })
                },
            )
            .put(
                |State(module): State<AppModule>,
                 Path(id): Path<String>,
                 req: Result<Json<BookRequest>, JsonRejection>| async move {
                    let Json(req) = match req {
                        Ok(req) => req,
                        Err(rejection) => {
                            return Err(ErrorStatus::rejected(BookAction::Update, rejection))
                        }
                    };
                    Controller::new(BookTransformer, UpdatedBookPresenter)
                        .intake((id, req))
                        .handle(|dto| module.update_book(dto))
                        .await
                        .map_err(|report| ErrorStatus::new(BookAction::Update, report))
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    Controller::new(BookTransformer, DeletedBookPresenter)
                        .intake(DeleteBookRequest::new(id))
                        .handle(|dto| module.delete_book(dto))
                        .await
                        .map_err(|report| ErrorStatus::new(BookAction::Delete, report))
                },
            )
            .fallback(super::method_not_allowed),
        )
    }
}
