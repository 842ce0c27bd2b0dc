pub mod catalogue;
pub mod search;
