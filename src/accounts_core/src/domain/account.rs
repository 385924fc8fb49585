use super::{account_id::AccountId, email::Email, password_hash::PasswordHash, username::Username};

/// A persisted account as the store hands it out.
#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    username: Username,
    email: Email,
    password_hash: PasswordHash,
}

impl Account {
    pub fn new(
        id: AccountId,
        username: Username,
        email: Email,
        password_hash: PasswordHash,
    ) -> Self {
        Self {
            id,
            username,
            email,
            password_hash,
        }
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Overwrite the fields present in `update`, leaving the rest untouched.
    pub fn apply(&mut self, update: AccountUpdate) {
        if let Some(username) = update.username {
            self.username = username;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(password_hash) = update.password_hash {
            self.password_hash = password_hash;
        }
    }
}

/// An account that has not been assigned an identifier yet.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: Username,
    pub email: Email,
    pub password_hash: PasswordHash,
}

impl NewAccount {
    pub fn into_account(self, id: AccountId) -> Account {
        Account::new(id, self.username, self.email, self.password_hash)
    }
}

/// The mutable subset of an account.
///
/// This is the complete list of what a profile update may touch; the
/// identifier is not part of it and the password only arrives already hashed.
#[derive(Debug, Clone, Default)]
pub struct AccountUpdate {
    pub username: Option<Username>,
    pub email: Option<Email>,
    pub password_hash: Option<PasswordHash>,
}

impl AccountUpdate {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.password_hash.is_none()
    }
}
