pub mod birthday_queries;
pub mod tag_queries;
pub mod stats_queries;
