pub mod db;

pub mod accounts;
pub mod gl;
pub mod gl_accounts;
pub mod ownership;
pub mod postings;
pub mod transactions;
pub mod users;

pub mod errors;
pub mod schema;

pub use errors::{Error, Result};
pub use postings::*;
