/// Source tags recorded on ledger entries.
///
/// Manual postings are caller-driven and never superseded automatically;
/// `auto:transaction:*` entries carry the originating transaction id and are
/// superseded on re-post.
pub const SOURCE_MANUAL_TRANSFER: &str = "manual:transfer";
pub const SOURCE_MANUAL_EXPENSE: &str = "manual:expense";
pub const SOURCE_MANUAL_INCOME: &str = "manual:income";

pub const SOURCE_AUTO_DEPOSIT: &str = "auto:transaction:deposit";
pub const SOURCE_AUTO_WITHDRAW: &str = "auto:transaction:withdraw";
pub const SOURCE_AUTO_BUY: &str = "auto:transaction:buy";
pub const SOURCE_AUTO_SELL: &str = "auto:transaction:sell";
pub const SOURCE_AUTO_DIVIDEND: &str = "auto:transaction:dividend";
pub const SOURCE_AUTO_FEE: &str = "auto:transaction:fee";
