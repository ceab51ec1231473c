pub(crate) mod postings_constants;
pub(crate) mod postings_errors;
pub(crate) mod postings_model;
pub(crate) mod postings_service;
pub(crate) mod postings_traits;


pub use postings_constants::*;
pub use postings_errors::PostingError;
pub use postings_model::{ExpenseCommand, IncomeCommand, TransferCommand};
pub use postings_service::{CallerSuppliedCostBasis, PostingService};
pub use postings_traits::{CostBasisSourceTrait, PostingServiceTrait};
