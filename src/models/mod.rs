pub mod book;
pub mod cache;
pub mod gutendex;
pub mod responses;
