pub(crate) mod users_errors;
pub(crate) mod users_model;
pub(crate) mod users_repository;

pub use users_errors::UserError;
pub use users_model::{NewUser, User, UserDB};
pub use users_repository::UserRepository;
