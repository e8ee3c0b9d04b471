//! Role and status enums stored as TEXT columns.
//!
//! Every enum here has a fixed set of canonical strings that appear both on
//! the wire (serde) and in the database (sqlx, with the `postgres` feature).
//! The `text_enum!` macro keeps the two representations identical so a value
//! round-trips through JSON and Postgres without translation tables.

/// Error returned when a status string does not match any known variant.
#[derive(thiserror::Error, Debug, Clone)]
#[error("invalid {kind}: {value:?}")]
pub struct ParseStatusError {
    kind: &'static str,
    value: String,
}

impl ParseStatusError {
    /// The enum type the input failed to parse into.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }
}

macro_rules! text_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// All variants in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// The canonical string stored in the database and sent on the wire.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ParseStatusError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(ParseStatusError {
                        kind: stringify!($name),
                        value: s.to_owned(),
                    }),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let s = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                s.parse().map_err(::serde::de::Error::custom)
            }
        }

        #[cfg(feature = "postgres")]
        impl ::sqlx::Type<::sqlx::Postgres> for $name {
            fn type_info() -> ::sqlx::postgres::PgTypeInfo {
                <String as ::sqlx::Type<::sqlx::Postgres>>::type_info()
            }

            fn compatible(ty: &::sqlx::postgres::PgTypeInfo) -> bool {
                <String as ::sqlx::Type<::sqlx::Postgres>>::compatible(ty)
            }
        }

        #[cfg(feature = "postgres")]
        impl<'r> ::sqlx::Decode<'r, ::sqlx::Postgres> for $name {
            fn decode(
                value: ::sqlx::postgres::PgValueRef<'r>,
            ) -> Result<Self, ::sqlx::error::BoxDynError> {
                let s = <&str as ::sqlx::Decode<::sqlx::Postgres>>::decode(value)?;
                Ok(s.parse::<Self>()?)
            }
        }

        #[cfg(feature = "postgres")]
        impl ::sqlx::Encode<'_, ::sqlx::Postgres> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut ::sqlx::postgres::PgArgumentBuffer,
            ) -> Result<::sqlx::encode::IsNull, ::sqlx::error::BoxDynError> {
                <&str as ::sqlx::Encode<::sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
            }
        }
    };
}

text_enum! {
    /// Admin permission level.
    AdminRole {
        /// Full access including content publishing.
        Admin => "admin",
        /// Content editing without destructive operations.
        Editor => "editor",
    }
}

text_enum! {
    /// Lifecycle slot of a page content row.
    ///
    /// At most one row per `(page_key, status)` pair exists; `Draft` is the
    /// working copy, `Published` is what the public site serves.
    ContentStatus {
        Draft => "draft",
        Published => "published",
    }
}

text_enum! {
    /// Mutation recorded in the page content version history.
    VersionAction {
        SaveDraft => "save_draft",
        Publish => "publish",
        Restore => "restore",
    }
}

text_enum! {
    /// Identifier for one editable page of the site.
    ///
    /// The set is closed: content for an unknown key cannot be created, and
    /// requests naming one are rejected.
    PageKey {
        Home => "home",
        Products => "products",
        Quote => "quote",
        Printing => "printing",
        CustomBoxes => "custom-boxes",
    }
}

text_enum! {
    /// News article visibility.
    ArticleStatus {
        Draft => "draft",
        Published => "published",
    }
}

text_enum! {
    /// Handling state of a quote request.
    QuoteStatus {
        Pending => "pending",
        Processed => "processed",
    }
}

text_enum! {
    /// Handling state of a contact message.
    MessageStatus {
        Unread => "unread",
        Read => "read",
    }
}
