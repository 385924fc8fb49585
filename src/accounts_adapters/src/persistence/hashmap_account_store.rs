use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use accounts_core::{
    Account, AccountId, AccountStore, AccountStoreError, AccountUpdate, Email, NewAccount,
};

/// Process-local store, lost on restart.
#[derive(Default, Clone)]
pub struct HashMapAccountStore {
    accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
}

impl HashMapAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

fn email_taken(
    accounts: &HashMap<AccountId, Account>,
    email: &Email,
    except: Option<&AccountId>,
) -> bool {
    accounts
        .values()
        .any(|account| account.email() == email && Some(account.id()) != except)
}

#[async_trait::async_trait]
impl AccountStore for HashMapAccountStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, AccountStoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|account| account.email() == email)
            .cloned())
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AccountStoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(id).cloned())
    }

    async fn create(&self, account: NewAccount) -> Result<Account, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        if email_taken(&accounts, &account.email, None) {
            return Err(AccountStoreError::DuplicateEmail);
        }

        let account = account.into_account(AccountId::new());
        accounts.insert(*account.id(), account.clone());
        Ok(account)
    }

    async fn update_fields(
        &self,
        id: &AccountId,
        update: AccountUpdate,
    ) -> Result<u64, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        if let Some(email) = &update.email {
            if email_taken(&accounts, email, Some(id)) {
                return Err(AccountStoreError::DuplicateEmail);
            }
        }

        let Some(account) = accounts.get_mut(id) else {
            return Ok(0);
        };
        account.apply(update);
        Ok(1)
    }

    async fn delete_by_id(&self, id: &AccountId) -> Result<u64, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        Ok(accounts.remove(id).map_or(0, |_| 1))
    }
}
