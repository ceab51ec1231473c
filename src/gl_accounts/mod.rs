pub(crate) mod gl_accounts_constants;
pub(crate) mod gl_accounts_errors;
pub(crate) mod gl_accounts_model;
pub(crate) mod gl_accounts_repository;
pub(crate) mod gl_accounts_service;
pub(crate) mod gl_accounts_traits;

#[cfg(test)]
mod gl_accounts_service_tests;

pub use gl_accounts_constants::*;
pub use gl_accounts_errors::GlAccountError;
pub use gl_accounts_model::{AccountRole, GlAccount, GlAccountDB, GlAccountKind, NewGlAccount};
pub use gl_accounts_repository::GlAccountRepository;
pub use gl_accounts_service::GlAccountDirectory;
pub use gl_accounts_traits::{GlAccountDirectoryTrait, GlAccountRepositoryTrait};
