//! Validated email address newtype.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Why an input failed to parse as an [`Email`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// Empty, or whitespace only.
    #[error("email is blank")]
    Blank,
    /// Longer than [`Email::MAX_LEN`] after trimming.
    #[error("email is {0} characters, limit is {max}", max = Email::MAX_LEN)]
    TooLong(usize),
    /// No `@`, or nothing on one side of it.
    #[error("email must look like name@domain")]
    Malformed,
}

/// An email address that passed structural validation.
///
/// Validation is deliberately shallow: trimmed, at most 254 characters
/// (the RFC 5321 path limit), and split by `@` into a non-empty local
/// part and a non-empty domain. Deliverability is the mail server's
/// problem, not ours.
///
/// ```
/// use kraftbox_core::Email;
///
/// let email = Email::parse(" sales@kraftbox.io ")?;
/// assert_eq!(email.as_str(), "sales@kraftbox.io");
///
/// assert!(Email::parse("not-an-address").is_err());
/// # Ok::<(), kraftbox_core::EmailError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Longest accepted address, per RFC 5321.
    pub const MAX_LEN: usize = 254;

    /// Validate and normalize an input string.
    ///
    /// Surrounding whitespace is trimmed before any check, so a value
    /// pasted with a stray space still parses.
    ///
    /// # Errors
    ///
    /// Returns an [`EmailError`] naming the first check that failed.
    pub fn parse(input: &str) -> Result<Self, EmailError> {
        let candidate = input.trim();

        if candidate.is_empty() {
            return Err(EmailError::Blank);
        }
        if candidate.len() > Self::MAX_LEN {
            return Err(EmailError::TooLong(candidate.len()));
        }

        match candidate.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
                Ok(Self(candidate.to_owned()))
            }
            _ => Err(EmailError::Malformed),
        }
    }

    /// The validated address.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Stored as plain TEXT. Reads skip re-validation; rows only enter the
// table through `parse`, and the repository layer re-checks on load.
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Email {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Email {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <&str as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self(s.to_owned()))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Email {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0.as_str(), buf)
    }
}
