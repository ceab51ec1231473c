/// Transaction types
///
/// Each constant represents one of the supported business-transaction
/// categories consumed by the posting engine.
/// Cash moved between two ledger accounts. Posted manually, never automatically.
pub const TRANSACTION_TYPE_TRANSFER: &str = "transfer";

/// Cash spent against an expense ledger account. Posted manually.
pub const TRANSACTION_TYPE_EXPENSE: &str = "expense";

/// Cash received against an income ledger account. Posted manually.
pub const TRANSACTION_TYPE_INCOME: &str = "income";

/// External funds moved into the account. Increases cash.
pub const TRANSACTION_TYPE_DEPOSIT: &str = "deposit";

/// Funds moved out to an external destination. Decreases cash.
pub const TRANSACTION_TYPE_WITHDRAW: &str = "withdraw";

/// Purchase of a security. Decreases cash, increases the investment bucket.
pub const TRANSACTION_TYPE_BUY: &str = "buy";

/// Disposal of a security. Increases cash, reduces the investment bucket,
/// and recognizes realized gain or loss.
pub const TRANSACTION_TYPE_SELL: &str = "sell";

/// Cash dividend paid into the account. Increases cash.
pub const TRANSACTION_TYPE_DIVIDEND: &str = "dividend";

/// Stand-alone brokerage or platform fee. Decreases cash.
pub const TRANSACTION_TYPE_FEE: &str = "fee";

/// Transaction types the posting engine books automatically.
pub const AUTO_POSTED_TRANSACTION_TYPES: [&str; 6] = [
    TRANSACTION_TYPE_DEPOSIT,
    TRANSACTION_TYPE_WITHDRAW,
    TRANSACTION_TYPE_BUY,
    TRANSACTION_TYPE_SELL,
    TRANSACTION_TYPE_DIVIDEND,
    TRANSACTION_TYPE_FEE,
];
