use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde_json::Value;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::add_reader_cmd::{AddReaderCommand, AddReaderCommandRequest, AddReaderCommandResponse};
use crate::catalog::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest, BorrowBookCommandResponse};
use crate::catalog::command::catalog_status_cmd::{CatalogStatusCommand, CatalogStatusCommandRequest, CatalogStatusCommandResponse};
use crate::catalog::command::find_books_cmd::{FindBooksCommand, FindBooksCommandRequest, FindBooksCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::get_reader_cmd::{GetReaderCommand, GetReaderCommandRequest, GetReaderCommandResponse};
use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest, ReturnBookCommandResponse};
use crate::catalog::command::search_catalog_cmd::{SearchCatalogCommand, SearchCatalogCommandRequest, SearchCatalogCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

pub async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub async fn find_books(
    State(state): State<AppState>,
    Query(req): Query<FindBooksCommandRequest>) -> Result<Json<FindBooksCommandResponse>, ServerError> {
    let res = FindBooksCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub async fn find_book_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest { title };
    let res = GetBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub async fn add_reader(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddReaderCommandResponse>, ServerError> {
    let req: AddReaderCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddReaderCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub async fn find_reader_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>) -> Result<Json<GetReaderCommandResponse>, ServerError> {
    let req = GetReaderCommandRequest { name };
    let res = GetReaderCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub async fn borrow_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<BorrowBookCommandResponse>, ServerError> {
    let req: BorrowBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = BorrowBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub async fn return_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<ReturnBookCommandResponse>, ServerError> {
    let req: ReturnBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = ReturnBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub async fn search_catalog(
    State(state): State<AppState>,
    Query(req): Query<SearchCatalogCommandRequest>) -> Result<Json<SearchCatalogCommandResponse>, ServerError> {
    let res = SearchCatalogCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub async fn catalog_status(
    State(state): State<AppState>) -> Result<Json<CatalogStatusCommandResponse>, ServerError> {
    let res = CatalogStatusCommand::new(state.catalog).execute(CatalogStatusCommandRequest::default()).await?;
    Ok(Json(res))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use axum::extract::{Path, Query, State};
    use axum::http::StatusCode;
    use axum::response::Json;
    use serde_json::json;
    use crate::catalog::command::find_books_cmd::FindBooksCommandRequest;
    use crate::catalog::command::search_catalog_cmd::SearchCatalogCommandRequest;
    use crate::catalog::controller::{add_book, add_reader, borrow_book, catalog_status, find_book_by_title,
                                     find_books, find_reader_by_name, return_book, search_catalog};
    use crate::catalog::factory;
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;
    use crate::core::library::BookStatus;
    use crate::gateway::GatewayPublisherVia;

    fn build_state(rental_limit: usize) -> AppState {
        let config = Configuration::new("test").with_rental_limit(rental_limit);
        let svc = factory::create_catalog_service(&config, GatewayPublisherVia::Memory).expect("should create service");
        AppState::new(config, Arc::from(svc))
    }

    async fn seed(state: &AppState) {
        for (id, title) in [(1, "A"), (2, "B"), (3, "C")] {
            add_book(State(state.clone()), Json(json!({"book_id": id, "title": title, "author": "X"})))
                .await.expect("should add book");
        }
        add_reader(State(state.clone()), Json(json!({"reader_id": 10, "name": "rdr"})))
            .await.expect("should add reader");
    }

    #[tokio::test]
    async fn test_should_run_rental_limit_example() {
        let state = build_state(2);
        seed(&state).await;

        let borrow = |title: &'static str| borrow_book(State(state.clone()), Json(json!({"title": title, "reader_name": "Rdr"})));
        borrow("A").await.expect("should borrow A");
        borrow("B").await.expect("should borrow B");
        let err = borrow("C").await.expect_err("should hit the rental limit");
        assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, err.0);

        return_book(State(state.clone()), Json(json!({"title": "A", "reader_name": "Rdr"})))
            .await.expect("should return A");
        let res = borrow("C").await.expect("should borrow C");
        assert_eq!(BookStatus::Borrowed, res.0.book.book_status);
        let book = find_book_by_title(State(state.clone()), Path("C".to_string())).await.expect("should find book");
        assert_eq!(Some("Rdr"), book.0.borrower.as_ref().map(|r| r.name.as_str()));
        let book = find_book_by_title(State(state.clone()), Path("A".to_string())).await.expect("should find book");
        assert!(book.0.borrower.is_none());

        let reader = find_reader_by_name(State(state.clone()), Path("Rdr".to_string())).await.expect("should find reader");
        assert_eq!(vec![2, 3], reader.0.reader.borrowed_book_ids);
        let status = catalog_status(State(state.clone())).await.expect("should report status");
        assert_eq!(2, status.0.summary.borrowed_books);
        assert_eq!(1, status.0.summary.available_books);
    }

    #[tokio::test]
    async fn test_should_map_errors_to_status_codes() {
        let state = build_state(2);
        seed(&state).await;

        let err = add_book(State(state.clone()), Json(json!({"book_id": 1, "title": "Z", "author": "X"})))
            .await.expect_err("should reject duplicate");
        assert_eq!(StatusCode::CONFLICT, err.0);
        let err = add_book(State(state.clone()), Json(json!({"title": "Z"})))
            .await.expect_err("should reject malformed body");
        assert_eq!(StatusCode::BAD_REQUEST, err.0);
        let err = find_book_by_title(State(state.clone()), Path("Missing".to_string()))
            .await.expect_err("should not find book");
        assert_eq!(StatusCode::NOT_FOUND, err.0);

        add_reader(State(state.clone()), Json(json!({"reader_id": 11, "name": "Other"}))).await.expect("should add reader");
        borrow_book(State(state.clone()), Json(json!({"title": "A", "reader_name": "Other"}))).await.expect("should borrow");
        let err = borrow_book(State(state.clone()), Json(json!({"title": "A", "reader_name": "Rdr"})))
            .await.expect_err("should be unavailable");
        assert_eq!(StatusCode::CONFLICT, err.0);
        let err = return_book(State(state.clone()), Json(json!({"title": "A", "reader_name": "Rdr"})))
            .await.expect_err("should not be borrowed by reader");
        assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, err.0);
    }

    #[tokio::test]
    async fn test_should_query_books_and_search() {
        let state = build_state(2);
        seed(&state).await;

        let res = find_books(State(state.clone()), Query(FindBooksCommandRequest::new(Some("X"), None)))
            .await.expect("should find books");
        assert_eq!(3, res.0.books.len());
        let res = search_catalog(State(state.clone()), Query(SearchCatalogCommandRequest::new("rdr")))
            .await.expect("should search");
        assert_eq!(1, res.0.hits.len());
        let err = search_catalog(State(state.clone()), Query(SearchCatalogCommandRequest::new(" ")))
            .await.expect_err("should reject blank term");
        assert_eq!(StatusCode::BAD_REQUEST, err.0);
    }
}
