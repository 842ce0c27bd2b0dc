pub mod books;
pub mod booksearch;
pub mod health;
