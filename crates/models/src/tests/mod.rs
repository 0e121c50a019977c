/// Product table round-trips against a live PostgreSQL
pub mod product_tests;
