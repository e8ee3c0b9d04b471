//! Typed row identifiers.
//!
//! Every table gets its own id newtype so a product id cannot be passed
//! where an article id belongs. The wrappers are plain `i32`s underneath
//! (SERIAL columns) and serialize as bare numbers.

/// Defines one id newtype per listed name.
///
/// Each generated type wraps an `i32`, is `Copy`, serializes
/// transparently, and with the `postgres` feature encodes and decodes
/// as an `INT4` column.
///
/// ```rust
/// # use kraftbox_core::entity_id;
/// entity_id! {
///     /// Identifies a widget row.
///     WidgetId,
/// }
///
/// let id = WidgetId::new(7);
/// assert_eq!(id.as_i32(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[macro_export]
macro_rules! entity_id {
    ($($(#[$meta:meta])* $id:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            #[derive(::serde::Serialize, ::serde::Deserialize)]
            #[serde(transparent)]
            pub struct $id(i32);

            impl $id {
                /// Wraps a raw row id.
                #[must_use]
                pub const fn new(raw: i32) -> Self {
                    Self(raw)
                }

                /// The raw row id.
                #[must_use]
                pub const fn as_i32(self) -> i32 {
                    self.0
                }
            }

            impl ::core::fmt::Display for $id {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    ::core::fmt::Display::fmt(&self.0, f)
                }
            }

            impl From<i32> for $id {
                fn from(raw: i32) -> Self {
                    Self(raw)
                }
            }

            impl From<$id> for i32 {
                fn from(id: $id) -> Self {
                    id.0
                }
            }

            #[cfg(feature = "postgres")]
            impl ::sqlx::Type<::sqlx::Postgres> for $id {
                fn type_info() -> ::sqlx::postgres::PgTypeInfo {
                    <i32 as ::sqlx::Type<::sqlx::Postgres>>::type_info()
                }
            }

            #[cfg(feature = "postgres")]
            impl<'r> ::sqlx::Decode<'r, ::sqlx::Postgres> for $id {
                fn decode(
                    value: ::sqlx::postgres::PgValueRef<'r>,
                ) -> ::core::result::Result<Self, ::sqlx::error::BoxDynError> {
                    <i32 as ::sqlx::Decode<::sqlx::Postgres>>::decode(value).map(Self)
                }
            }

            #[cfg(feature = "postgres")]
            impl ::sqlx::Encode<'_, ::sqlx::Postgres> for $id {
                fn encode_by_ref(
                    &self,
                    buf: &mut ::sqlx::postgres::PgArgumentBuffer,
                ) -> ::core::result::Result<::sqlx::encode::IsNull, ::sqlx::error::BoxDynError> {
                    <i32 as ::sqlx::Encode<::sqlx::Postgres>>::encode_by_ref(&self.0, buf)
                }
            }
        )+
    };
}

entity_id! {
    AdminUserId,
    AdminSessionId,
    /// Id of a draft or published content slot row.
    PageContentId,
    /// Id of an entry in the content version history.
    PageVersionId,
    ProductId,
    CategoryId,
    ArticleId,
    QuoteRequestId,
    ContactMessageId,
    CompanySettingsId,
}
