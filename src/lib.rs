//! In-memory library catalog: books, readers, secondary indexes by title,
//! author and reader name, and borrow/return bookkeeping under a rental limit.

pub mod books;
pub mod catalog;
pub mod core;
pub mod gateway;
pub mod readers;
pub mod utils;
