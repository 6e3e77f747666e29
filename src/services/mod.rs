pub mod cache;
pub mod catalog;
pub mod enrich;
pub mod filter;
pub mod format;
pub mod providers;
pub mod recommend;
