pub mod filter;
pub mod launcher;
pub mod models;
