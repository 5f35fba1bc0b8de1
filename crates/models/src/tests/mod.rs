/// Store operations against an in-memory SQLite database
pub mod cafe_tests;
