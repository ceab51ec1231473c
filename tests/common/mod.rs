use std::sync::Arc;

use tempfile::TempDir;

use ledgerfolio_core::accounts::{AccountRepository, AccountRepositoryTrait, NewAccount};
use ledgerfolio_core::db::{self, DbPool};
use ledgerfolio_core::gl_accounts::{
    GlAccountRepository, GlAccountRepositoryTrait, NewGlAccount, GL_ACCOUNT_KIND_ASSET,
    GL_ACCOUNT_KIND_EQUITY, GL_ACCOUNT_KIND_EXPENSE, GL_ACCOUNT_KIND_INCOME,
    ROLE_DIVIDEND_INCOME, ROLE_EQUITY, ROLE_FEE_EXPENSE, ROLE_INVESTMENT_BUCKET,
    ROLE_REALIZED_GAIN_INCOME, ROLE_REALIZED_LOSS_EXPENSE,
};
use ledgerfolio_core::users::{NewUser, UserRepository};

pub const USER: &str = "user-1";
pub const OTHER_USER: &str = "user-2";
pub const ADMIN: &str = "admin-1";
pub const CASH_ACCOUNT: &str = "acct-1";

pub const GL_CASH: &str = "gl-cash";
pub const GL_BUCKET: &str = "gl-bucket";
pub const GL_EQUITY: &str = "gl-equity";
pub const GL_DIVIDEND: &str = "gl-dividend";
pub const GL_FEE: &str = "gl-fee";
pub const GL_GAIN: &str = "gl-gain";
pub const GL_LOSS: &str = "gl-loss";

pub struct Fixture {
    // Keeps the database directory alive for the duration of the test.
    _data_dir: TempDir,
    pub pool: Arc<DbPool>,
}

/// Creates a fresh on-disk database with a seeded owner, one brokerage
/// account in TWD, and a full set of role-mapped ledger accounts.
pub fn setup() -> Fixture {
    let data_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = data_dir
        .path()
        .join("app.db")
        .to_str()
        .expect("Invalid db path")
        .to_string();

    db::init(&db_path).expect("Failed to initialize database");
    let pool = db::create_pool(&db_path).expect("Failed to create database pool");
    db::run_migrations(&pool).expect("Failed to run migrations");

    seed(&pool);

    Fixture {
        _data_dir: data_dir,
        pool,
    }
}

fn seed(pool: &Arc<DbPool>) {
    let users = UserRepository::new(pool.clone());
    for (id, is_admin) in [(USER, false), (OTHER_USER, false), (ADMIN, true)] {
        users
            .create(NewUser {
                id: Some(id.to_string()),
                email: format!("{}@example.com", id),
                name: None,
                is_admin,
            })
            .expect("Failed to seed user");
    }

    let accounts = AccountRepository::new(pool.clone());
    accounts
        .create(NewAccount {
            id: Some(CASH_ACCOUNT.to_string()),
            user_id: USER.to_string(),
            name: "Broker TWD".to_string(),
            account_type: "brokerage".to_string(),
            currency: "TWD".to_string(),
            is_active: true,
        })
        .expect("Failed to seed account");

    let gl_accounts = GlAccountRepository::new(pool.clone());
    let seedlings = [
        (GL_CASH, "Cash - Broker TWD", GL_ACCOUNT_KIND_ASSET, None, Some(CASH_ACCOUNT)),
        (GL_BUCKET, "Investments TWD", GL_ACCOUNT_KIND_ASSET, Some(ROLE_INVESTMENT_BUCKET), None),
        (GL_EQUITY, "Owner equity", GL_ACCOUNT_KIND_EQUITY, Some(ROLE_EQUITY), None),
        (GL_DIVIDEND, "Dividend income", GL_ACCOUNT_KIND_INCOME, Some(ROLE_DIVIDEND_INCOME), None),
        (GL_FEE, "Broker fees", GL_ACCOUNT_KIND_EXPENSE, Some(ROLE_FEE_EXPENSE), None),
        (GL_GAIN, "Realized gains", GL_ACCOUNT_KIND_INCOME, Some(ROLE_REALIZED_GAIN_INCOME), None),
        (GL_LOSS, "Realized losses", GL_ACCOUNT_KIND_EXPENSE, Some(ROLE_REALIZED_LOSS_EXPENSE), None),
    ];
    for (id, name, kind, role, linked) in seedlings {
        gl_accounts
            .create(NewGlAccount {
                id: Some(id.to_string()),
                user_id: USER.to_string(),
                name: name.to_string(),
                kind: kind.to_string(),
                currency: "TWD".to_string(),
                role: role.map(String::from),
                linked_account_id: linked.map(String::from),
            })
            .expect("Failed to seed ledger account");
    }
}
