#[cfg(test)]
mod tests {
    use crate::gl_accounts::gl_accounts_service::GlAccountDirectory;
    use crate::gl_accounts::{
        AccountRole, GlAccount, GlAccountDirectoryTrait, GlAccountError, GlAccountRepositoryTrait,
        NewGlAccount, GL_ACCOUNT_KIND_ASSET, GL_ACCOUNT_KIND_EXPENSE, GL_ACCOUNT_KIND_INCOME,
        ROLE_FEE_EXPENSE, ROLE_INVESTMENT_BUCKET,
    };
    use std::sync::{Arc, Mutex};

    struct InMemoryGlAccountRepository {
        accounts: Mutex<Vec<GlAccount>>,
    }

    impl InMemoryGlAccountRepository {
        fn new() -> Self {
            Self {
                accounts: Mutex::new(Vec::new()),
            }
        }

        fn add(
            &self,
            id: &str,
            user_id: &str,
            name: &str,
            kind: &str,
            currency: &str,
            role: Option<&str>,
            linked_account_id: Option<&str>,
        ) {
            let now = chrono::Utc::now().naive_utc();
            self.accounts.lock().unwrap().push(GlAccount {
                id: id.to_string(),
                user_id: user_id.to_string(),
                name: name.to_string(),
                kind: kind.to_string(),
                currency: currency.to_string(),
                role: role.map(String::from),
                linked_account_id: linked_account_id.map(String::from),
                created_at: now,
                updated_at: now,
            });
        }
    }

    impl GlAccountRepositoryTrait for InMemoryGlAccountRepository {
        fn create(&self, _new_gl_account: NewGlAccount) -> Result<GlAccount, GlAccountError> {
            unimplemented!()
        }

        fn get_by_id(&self, gl_account_id: &str) -> Result<GlAccount, GlAccountError> {
            self.accounts
                .lock()
                .unwrap()
                .iter()
                .find(|a| a.id == gl_account_id)
                .cloned()
                .ok_or_else(|| GlAccountError::NotFound(gl_account_id.to_string()))
        }

        fn find_by_linked_account(
            &self,
            user_id: &str,
            account_id: &str,
        ) -> Result<Option<GlAccount>, GlAccountError> {
            Ok(self
                .accounts
                .lock()
                .unwrap()
                .iter()
                .find(|a| a.user_id == user_id && a.linked_account_id.as_deref() == Some(account_id))
                .cloned())
        }

        fn find_by_role(
            &self,
            user_id: &str,
            role: &str,
        ) -> Result<Option<GlAccount>, GlAccountError> {
            Ok(self
                .accounts
                .lock()
                .unwrap()
                .iter()
                .find(|a| a.user_id == user_id && a.role.as_deref() == Some(role))
                .cloned())
        }

        fn find_investment_bucket(
            &self,
            user_id: &str,
            currency: &str,
        ) -> Result<Option<GlAccount>, GlAccountError> {
            Ok(self
                .accounts
                .lock()
                .unwrap()
                .iter()
                .find(|a| {
                    a.user_id == user_id
                        && a.role.as_deref() == Some(ROLE_INVESTMENT_BUCKET)
                        && a.kind == GL_ACCOUNT_KIND_ASSET
                        && a.currency == currency
                })
                .cloned())
        }

        fn find_name_contains(
            &self,
            user_id: &str,
            fragment: &str,
        ) -> Result<Option<GlAccount>, GlAccountError> {
            Ok(self
                .accounts
                .lock()
                .unwrap()
                .iter()
                .find(|a| a.user_id == user_id && a.name.contains(fragment))
                .cloned())
        }

        fn list_by_kind(
            &self,
            user_id: &str,
            kind: &str,
        ) -> Result<Vec<GlAccount>, GlAccountError> {
            Ok(self
                .accounts
                .lock()
                .unwrap()
                .iter()
                .filter(|a| a.user_id == user_id && a.kind == kind)
                .cloned()
                .collect())
        }

        fn list_by_user(&self, user_id: &str) -> Result<Vec<GlAccount>, GlAccountError> {
            Ok(self
                .accounts
                .lock()
                .unwrap()
                .iter()
                .filter(|a| a.user_id == user_id)
                .cloned()
                .collect())
        }
    }

    fn setup() -> (GlAccountDirectory, Arc<InMemoryGlAccountRepository>) {
        let repository = Arc::new(InMemoryGlAccountRepository::new());
        let directory = GlAccountDirectory::new(repository.clone());
        (directory, repository)
    }

    #[test]
    fn resolves_linked_cash_account() {
        let (directory, repository) = setup();
        repository.add(
            "gl-cash",
            "user-1",
            "Broker cash",
            GL_ACCOUNT_KIND_ASSET,
            "TWD",
            None,
            Some("acct-1"),
        );

        let resolved = directory
            .resolve("user-1", &AccountRole::LinkedCash("acct-1".to_string()))
            .unwrap();
        assert_eq!(resolved.id, "gl-cash");
    }

    #[test]
    fn linked_cash_lookup_is_owner_scoped() {
        let (directory, repository) = setup();
        repository.add(
            "gl-cash-other",
            "user-2",
            "Broker cash",
            GL_ACCOUNT_KIND_ASSET,
            "TWD",
            None,
            Some("acct-1"),
        );

        let result = directory.resolve("user-1", &AccountRole::LinkedCash("acct-1".to_string()));
        assert!(matches!(result, Err(GlAccountError::ResolutionFailed(_))));
    }

    #[test]
    fn missing_linked_cash_account_is_a_setup_error() {
        let (directory, _repository) = setup();

        let result = directory.resolve("user-1", &AccountRole::LinkedCash("acct-9".to_string()));
        assert!(matches!(result, Err(GlAccountError::ResolutionFailed(_))));
    }

    #[test]
    fn investment_bucket_matches_currency() {
        let (directory, repository) = setup();
        repository.add(
            "gl-bucket-twd",
            "user-1",
            "Investments TWD",
            GL_ACCOUNT_KIND_ASSET,
            "TWD",
            Some(ROLE_INVESTMENT_BUCKET),
            None,
        );
        repository.add(
            "gl-bucket-usd",
            "user-1",
            "Investments USD",
            GL_ACCOUNT_KIND_ASSET,
            "USD",
            Some(ROLE_INVESTMENT_BUCKET),
            None,
        );

        let resolved = directory
            .resolve("user-1", &AccountRole::InvestmentBucket("USD".to_string()))
            .unwrap();
        assert_eq!(resolved.id, "gl-bucket-usd");

        let missing =
            directory.resolve("user-1", &AccountRole::InvestmentBucket("JPY".to_string()));
        assert!(matches!(missing, Err(GlAccountError::ResolutionFailed(_))));
    }

    #[test]
    fn fixed_roles_resolve_through_role_mapping() {
        let (directory, repository) = setup();
        // The name deliberately lacks any obvious fragment; only the role
        // mapping can find it.
        repository.add(
            "gl-fees",
            "user-1",
            "Broker charges",
            GL_ACCOUNT_KIND_EXPENSE,
            "TWD",
            Some(ROLE_FEE_EXPENSE),
            None,
        );

        let resolved = directory.resolve("user-1", &AccountRole::FeeExpense).unwrap();
        assert_eq!(resolved.id, "gl-fees");

        let missing = directory.resolve("user-1", &AccountRole::DividendIncome);
        assert!(matches!(missing, Err(GlAccountError::ResolutionFailed(_))));
    }

    #[test]
    fn named_contains_finds_by_fragment() {
        let (directory, repository) = setup();
        repository.add(
            "gl-salary",
            "user-1",
            "Income - Salary",
            GL_ACCOUNT_KIND_INCOME,
            "TWD",
            None,
            None,
        );

        let resolved = directory.named_contains("user-1", "Salary").unwrap();
        assert_eq!(resolved.id, "gl-salary");

        let missing = directory.named_contains("user-1", "Bonus");
        assert!(matches!(missing, Err(GlAccountError::ResolutionFailed(_))));
    }
}
