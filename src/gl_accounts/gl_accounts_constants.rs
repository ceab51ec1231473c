/// Ledger account kinds (the five classical statement buckets).
pub const GL_ACCOUNT_KIND_ASSET: &str = "asset";
pub const GL_ACCOUNT_KIND_LIABILITY: &str = "liability";
pub const GL_ACCOUNT_KIND_EQUITY: &str = "equity";
pub const GL_ACCOUNT_KIND_INCOME: &str = "income";
pub const GL_ACCOUNT_KIND_EXPENSE: &str = "expense";

/// Role keys for the explicit role→account mapping.
///
/// Each owner configures at most one ledger account per role (per currency
/// for the investment bucket). The posting engine resolves legs through
/// these keys instead of probing account names.
/// Asset bucket holding security cost basis, one per currency.
pub const ROLE_INVESTMENT_BUCKET: &str = "investment_bucket";

/// Expense account collecting stand-alone brokerage fees.
pub const ROLE_FEE_EXPENSE: &str = "fee_expense";

/// Income account collecting cash dividends.
pub const ROLE_DIVIDEND_INCOME: &str = "dividend_income";

/// Income account recognizing realized gains on disposals.
pub const ROLE_REALIZED_GAIN_INCOME: &str = "realized_gain_income";

/// Expense account recognizing realized losses on disposals.
pub const ROLE_REALIZED_LOSS_EXPENSE: &str = "realized_loss_expense";

/// Equity account booking owner contributions and draws.
pub const ROLE_EQUITY: &str = "equity";
