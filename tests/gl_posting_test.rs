mod common;

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use ledgerfolio_core::accounts::AccountRepository;
use ledgerfolio_core::db::DbPool;
use ledgerfolio_core::gl::{
    GlEntryRepository, GlEntryService, GlEntryServiceTrait, LedgerError, LineInput,
};
use ledgerfolio_core::gl_accounts::{GlAccountDirectory, GlAccountRepository};
use ledgerfolio_core::ownership::{OwnershipError, OwnershipGate};
use ledgerfolio_core::postings::{
    CallerSuppliedCostBasis, PostingError, PostingService, PostingServiceTrait, TransferCommand,
};
use ledgerfolio_core::transactions::{
    NewTransaction, Transaction, TransactionRepository, TransactionRepositoryTrait,
};

use common::*;

struct Engine {
    entry_service: Arc<GlEntryService>,
    posting_service: PostingService,
    transactions: TransactionRepository,
}

fn engine(pool: &Arc<DbPool>) -> Engine {
    let entry_repository = Arc::new(GlEntryRepository::new(pool.clone()));
    let entry_service = Arc::new(GlEntryService::new(entry_repository));

    let gl_account_repository = Arc::new(GlAccountRepository::new(pool.clone()));
    let directory = Arc::new(GlAccountDirectory::new(gl_account_repository));

    let posting_service = PostingService::new(
        directory,
        entry_service.clone(),
        Arc::new(AccountRepository::new(pool.clone())),
        Arc::new(OwnershipGate::new(pool.clone())),
        Arc::new(CallerSuppliedCostBasis),
    );

    Engine {
        entry_service,
        posting_service,
        transactions: TransactionRepository::new(pool.clone()),
    }
}

fn trade_time() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 14)
        .unwrap()
        .and_hms_opt(13, 45, 0)
        .unwrap()
}

fn new_transaction(id: &str, transaction_type: &str) -> NewTransaction {
    NewTransaction {
        id: Some(id.to_string()),
        account_id: CASH_ACCOUNT.to_string(),
        transaction_type: transaction_type.to_string(),
        amount: None,
        quantity: None,
        price: None,
        fee: None,
        cost: None,
        trade_time: trade_time(),
        note: None,
    }
}

fn seed_deposit(engine: &Engine, id: &str, amount: Decimal) -> Transaction {
    let mut tx = new_transaction(id, "deposit");
    tx.amount = Some(amount);
    engine.transactions.create(tx).expect("Failed to seed deposit")
}

#[tokio::test]
async fn deposit_posting_round_trip() {
    let fixture = setup();
    let engine = engine(&fixture.pool);

    let tx = seed_deposit(&engine, "tx-dep-1", dec!(5000));
    let entry = engine.posting_service.post_transaction(USER, &tx).await.unwrap();

    let reloaded = engine.entry_service.get_entry(&entry.id).unwrap();
    assert_eq!(reloaded.user_id, USER);
    assert_eq!(reloaded.source.as_deref(), Some("auto:transaction:deposit"));
    assert_eq!(reloaded.ref_tx_id.as_deref(), Some("tx-dep-1"));
    assert_eq!(reloaded.entry_date, trade_time());
    assert!(!reloaded.is_deleted);
    assert_eq!(reloaded.lines.len(), 2);

    let cash = reloaded
        .lines
        .iter()
        .find(|l| l.gl_account_id == GL_CASH)
        .unwrap();
    assert!(cash.is_debit());
    assert_eq!(cash.amount, dec!(5000));
    assert_eq!(cash.currency, "TWD");

    let equity = reloaded
        .lines
        .iter()
        .find(|l| l.gl_account_id == GL_EQUITY)
        .unwrap();
    assert!(!equity.is_debit());
    assert_eq!(equity.amount, dec!(5000));
}

#[tokio::test]
async fn reposting_supersedes_the_previous_entry() {
    let fixture = setup();
    let engine = engine(&fixture.pool);

    let tx = seed_deposit(&engine, "tx-dep-1", dec!(5000));
    let first = engine.posting_service.post_transaction(USER, &tx).await.unwrap();
    let second = engine.posting_service.post_transaction(USER, &tx).await.unwrap();
    assert_ne!(first.id, second.id);

    // Exactly one active entry remains for the reference.
    let active = engine
        .entry_service
        .get_active_entry_by_ref(USER, "tx-dep-1")
        .unwrap()
        .expect("an active entry should exist");
    assert_eq!(active.id, second.id);

    let superseded = engine.entry_service.get_entry(&first.id).unwrap();
    assert!(superseded.is_deleted);
    assert!(superseded.deleted_at.is_some());

    let listed = engine.entry_service.get_entries(USER, None).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, second.id);
}

#[tokio::test]
async fn sell_posting_persists_realized_gain_lines() {
    let fixture = setup();
    let engine = engine(&fixture.pool);

    let mut tx = new_transaction("tx-sell-1", "sell");
    tx.quantity = Some(dec!(10));
    tx.price = Some(dec!(160));
    tx.fee = Some(dec!(1));
    tx.cost = Some(dec!(1500));
    let tx = engine.transactions.create(tx).unwrap();

    engine.posting_service.post_transaction(USER, &tx).await.unwrap();

    let entry = engine
        .entry_service
        .get_active_entry_by_ref(USER, "tx-sell-1")
        .unwrap()
        .unwrap();
    assert_eq!(entry.lines.len(), 3);

    let amount_for = |gl_account_id: &str| {
        entry
            .lines
            .iter()
            .find(|l| l.gl_account_id == gl_account_id)
            .map(|l| l.amount)
            .unwrap()
    };
    assert_eq!(amount_for(GL_CASH), dec!(1599));
    assert_eq!(amount_for(GL_BUCKET), dec!(1500));
    assert_eq!(amount_for(GL_GAIN), dec!(99));

    let (debit, credit) = entry.lines.iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(debit, credit), line| {
            if line.is_debit() {
                (debit + line.amount, credit)
            } else {
                (debit, credit + line.amount)
            }
        },
    );
    assert_eq!(debit, credit);
}

#[tokio::test]
async fn failed_write_leaves_the_previous_entry_active() {
    let fixture = setup();
    let engine = engine(&fixture.pool);

    let tx = seed_deposit(&engine, "tx-dep-1", dec!(5000));
    let first = engine.posting_service.post_transaction(USER, &tx).await.unwrap();

    // An unbalanced line set is rejected before anything is persisted, so
    // the active entry for the reference is untouched.
    let result = engine
        .entry_service
        .write_entry(
            USER,
            trade_time(),
            None,
            Some("auto:transaction:deposit".to_string()),
            vec![
                LineInput::debit(GL_CASH, dec!(5000), "TWD", "deposit in"),
                LineInput::credit(GL_EQUITY, dec!(4999), "TWD", "owner contribution"),
            ],
            Some("tx-dep-1".to_string()),
        )
        .await;
    assert!(matches!(result, Err(LedgerError::NotBalanced { .. })));

    let active = engine
        .entry_service
        .get_active_entry_by_ref(USER, "tx-dep-1")
        .unwrap()
        .unwrap();
    assert_eq!(active.id, first.id);

    assert_eq!(engine.entry_service.get_entries(USER, None).unwrap().len(), 1);
}

#[tokio::test]
async fn manual_transfers_are_never_superseded() {
    let fixture = setup();
    let engine = engine(&fixture.pool);

    let command = TransferCommand {
        from_gl_account_id: GL_CASH.to_string(),
        to_gl_account_id: GL_BUCKET.to_string(),
        amount: dec!(1000),
        currency: "TWD".to_string(),
        entry_date: trade_time(),
        memo: Some("rebalance".to_string()),
    };

    let first = engine
        .posting_service
        .post_transfer(USER, command.clone())
        .await
        .unwrap();
    let second = engine
        .posting_service
        .post_transfer(USER, command)
        .await
        .unwrap();

    assert_eq!(first.ref_tx_id, None);

    let listed = engine.entry_service.get_entries(USER, None).unwrap();
    assert_eq!(listed.len(), 2);

    let reloaded = engine.entry_service.get_entry(&second.id).unwrap();
    assert_eq!(reloaded.lines.len(), 2);
    let to = reloaded
        .lines
        .iter()
        .find(|l| l.gl_account_id == GL_BUCKET)
        .unwrap();
    assert!(to.is_debit());
    assert_eq!(to.amount, dec!(1000));
}

#[tokio::test]
async fn entry_listing_can_be_narrowed_to_one_ledger_account() {
    let fixture = setup();
    let engine = engine(&fixture.pool);

    let deposit = seed_deposit(&engine, "tx-dep-1", dec!(5000));
    engine.posting_service.post_transaction(USER, &deposit).await.unwrap();

    let mut fee_tx = new_transaction("tx-fee-1", "fee");
    fee_tx.fee = Some(dec!(25));
    let fee_tx = engine.transactions.create(fee_tx).unwrap();
    engine.posting_service.post_transaction(USER, &fee_tx).await.unwrap();

    let bucket_entries = engine.entry_service.get_entries(USER, Some(GL_FEE)).unwrap();
    assert_eq!(bucket_entries.len(), 1);
    assert_eq!(bucket_entries[0].ref_tx_id.as_deref(), Some("tx-fee-1"));

    let cash_entries = engine.entry_service.get_entries(USER, Some(GL_CASH)).unwrap();
    assert_eq!(cash_entries.len(), 2);
}

#[tokio::test]
async fn other_users_cannot_post_against_foreign_accounts() {
    let fixture = setup();
    let engine = engine(&fixture.pool);

    let tx = seed_deposit(&engine, "tx-dep-1", dec!(5000));

    let result = engine.posting_service.post_transaction(OTHER_USER, &tx).await;
    assert!(matches!(
        result,
        Err(PostingError::Ownership(OwnershipError::Forbidden(_)))
    ));

    assert!(engine
        .entry_service
        .get_active_entry_by_ref(OTHER_USER, "tx-dep-1")
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn admins_pass_the_ownership_gate() {
    let fixture = setup();
    let engine = engine(&fixture.pool);

    // The ledger accounts belong to user-1, but an admin caller clears the
    // owner-or-admin check on manual postings.
    let command = TransferCommand {
        from_gl_account_id: GL_CASH.to_string(),
        to_gl_account_id: GL_BUCKET.to_string(),
        amount: dec!(10),
        currency: "TWD".to_string(),
        entry_date: trade_time(),
        memo: None,
    };

    engine
        .posting_service
        .post_transfer(ADMIN, command.clone())
        .await
        .expect("admin should be allowed to post");

    let result = engine.posting_service.post_transfer(OTHER_USER, command).await;
    assert!(matches!(
        result,
        Err(PostingError::Ownership(OwnershipError::Forbidden(_)))
    ));
}
