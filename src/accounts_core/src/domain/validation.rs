//! Declarative field rules.
//!
//! Every input the service accepts is described by a [`Schema`]: a table of
//! [`FieldRule`]s (field name, required, length bounds, optional format).
//! Request bodies are checked against their schema before any store access,
//! and the account value objects parse through the same rules, so the table
//! is the single place the limits live.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"#,
    )
    .expect("email pattern is a valid regex")
});

/// Syntactic formats a field value can be required to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Email,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Email => f.write_str("email"),
        }
    }
}

impl Format {
    fn matches(self, value: &str) -> bool {
        match self {
            Format::Email => EMAIL_PATTERN.is_match(value),
        }
    }
}

/// One row of a schema: the constraints on a single named field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    pub required: bool,
    pub min: usize,
    pub max: usize,
    pub format: Option<Format>,
}

impl FieldRule {
    /// The same rule, but a missing value is accepted.
    pub const fn optional(self) -> Self {
        Self {
            required: false,
            ..self
        }
    }

    /// Check a single value against this rule.
    ///
    /// Lengths are counted in characters. The first violated constraint is
    /// reported, in the order required, empty, min, max, format.
    pub fn check(&self, value: Option<&str>) -> Result<(), ValidationError> {
        let Some(value) = value else {
            return if self.required {
                Err(ValidationError::Required(self.field))
            } else {
                Ok(())
            };
        };

        let length = value.chars().count();

        if length == 0 {
            return Err(ValidationError::Empty(self.field));
        }
        if length < self.min {
            return Err(ValidationError::TooShort {
                field: self.field,
                min: self.min,
            });
        }
        if length > self.max {
            return Err(ValidationError::TooLong {
                field: self.field,
                max: self.max,
            });
        }
        if let Some(format) = self.format {
            if !format.matches(value) {
                return Err(ValidationError::InvalidFormat {
                    field: self.field,
                    format,
                });
            }
        }

        Ok(())
    }
}

pub const USERNAME_RULE: FieldRule = FieldRule {
    field: "username",
    required: true,
    min: 6,
    max: 255,
    format: None,
};

pub const EMAIL_RULE: FieldRule = FieldRule {
    field: "email",
    required: true,
    min: 6,
    max: 255,
    format: Some(Format::Email),
};

pub const PASSWORD_RULE: FieldRule = FieldRule {
    field: "password",
    required: true,
    min: 6,
    max: 255,
    format: None,
};

/// The rule table for one kind of input.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub rules: &'static [FieldRule],
    /// At least one of the rules' fields must be present.
    pub require_any: bool,
}

pub const SIGNUP_SCHEMA: Schema = Schema {
    rules: &[USERNAME_RULE, EMAIL_RULE, PASSWORD_RULE],
    require_any: false,
};

pub const SIGNIN_SCHEMA: Schema = Schema {
    rules: &[EMAIL_RULE, PASSWORD_RULE],
    require_any: false,
};

/// Profile updates accept exactly these fields, each optional.
pub const PROFILE_UPDATE_SCHEMA: Schema = Schema {
    rules: &[
        USERNAME_RULE.optional(),
        EMAIL_RULE.optional(),
        PASSWORD_RULE.optional(),
    ],
    require_any: true,
};

impl Schema {
    /// Validate named values against every rule of the schema.
    ///
    /// `input` pairs a field name with its value, `None` meaning absent.
    /// Fields without a rule are ignored here; see [`Schema::reject_unknown`].
    pub fn validate(&self, input: &[(&str, Option<&str>)]) -> Result<(), ValidationError> {
        let value_of = |field: &str| {
            input
                .iter()
                .find(|(name, _)| *name == field)
                .and_then(|(_, value)| *value)
        };

        if self.require_any && self.rules.iter().all(|rule| value_of(rule.field).is_none()) {
            return Err(ValidationError::MissingAll(self.field_list()));
        }

        for rule in self.rules {
            rule.check(value_of(rule.field))?;
        }

        Ok(())
    }

    /// Fail on the first key that has no rule in this schema.
    pub fn reject_unknown<'a, I>(&self, keys: I) -> Result<(), ValidationError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for key in keys {
            if !self.rules.iter().any(|rule| rule.field == key) {
                return Err(ValidationError::NotAllowed(key.to_owned()));
            }
        }
        Ok(())
    }

    pub fn field_list(&self) -> String {
        self.rules
            .iter()
            .map(|rule| rule.field)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("\"{0}\" is required")]
    Required(&'static str),

    #[error("\"{0}\" is not allowed to be empty")]
    Empty(&'static str),

    #[error("\"{field}\" length must be at least {min} characters long")]
    TooShort { field: &'static str, min: usize },

    #[error("\"{field}\" length must be less than or equal to {max} characters long")]
    TooLong { field: &'static str, max: usize },

    #[error("\"{field}\" must be a valid {format}")]
    InvalidFormat { field: &'static str, format: Format },

    #[error("\"{0}\" must be a string")]
    NotAString(String),

    #[error("\"{0}\" is not allowed")]
    NotAllowed(String),

    #[error("\"value\" must contain at least one of [{0}]")]
    MissingAll(String),
}
