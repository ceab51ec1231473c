pub(crate) mod gl_errors;
pub(crate) mod gl_model;
pub(crate) mod gl_repository;
pub(crate) mod gl_service;
pub(crate) mod gl_traits;
pub(crate) mod gl_validation;

pub use gl_errors::LedgerError;
pub use gl_model::{
    EntrySide, GlEntry, GlEntryDB, GlLine, GlLineDB, LineInput, NewGlEntry, ENTRY_SIDE_CREDIT,
    ENTRY_SIDE_DEBIT,
};
pub use gl_repository::GlEntryRepository;
pub use gl_service::GlEntryService;
pub use gl_traits::{GlEntryRepositoryTrait, GlEntryServiceTrait};
pub use gl_validation::{
    ensure_balanced, ensure_single_currency, total_credit, total_debit, validate_lines,
};
