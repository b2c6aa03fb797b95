pub mod schema;
pub mod contact_repo;
pub mod book_repo;
