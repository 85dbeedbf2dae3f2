pub mod add_book_cmd;
pub mod add_reader_cmd;
pub mod borrow_book_cmd;
pub mod catalog_status_cmd;
pub mod find_books_cmd;
pub mod get_book_cmd;
pub mod get_reader_cmd;
pub mod return_book_cmd;
pub mod search_catalog_cmd;
