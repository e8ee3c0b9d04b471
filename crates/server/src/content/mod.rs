//! Editable page content: typed schemas, defaults, and normalization.
//!
//! Every editable page owns a schema struct, a `Default` carrying the
//! shipped site copy, and a normalizer that rebuilds submitted JSON field
//! by field. Drafts are normalized before they are stored, so everything
//! in `page_contents` conforms to its page's schema.

mod custom_boxes;
mod home;
mod printing;
mod products;
mod quote;
mod util;

pub use custom_boxes::CustomBoxesContent;
pub use home::HomeContent;
pub use printing::PrintingContent;
pub use products::ProductsContent;
pub use quote::QuoteContent;

use serde::Serialize;
use serde_json::Value;

use kraftbox_core::PageKey;

/// Default content for a page that has never been written.
#[must_use]
pub fn default_content(page_key: PageKey) -> Value {
    match page_key {
        PageKey::Home => value_of(&HomeContent::default()),
        PageKey::Products => value_of(&ProductsContent::default()),
        PageKey::Quote => value_of(&QuoteContent::default()),
        PageKey::Printing => value_of(&PrintingContent::default()),
        PageKey::CustomBoxes => value_of(&CustomBoxesContent::default()),
    }
}

/// Rebuilds submitted content against the page's schema, replacing
/// missing, blank, and malformed fields with that page's defaults.
#[must_use]
pub fn normalize(page_key: PageKey, input: &Value) -> Value {
    match page_key {
        PageKey::Home => value_of(&home::normalize(input)),
        PageKey::Products => value_of(&products::normalize(input)),
        PageKey::Quote => value_of(&quote::normalize(input)),
        PageKey::Printing => value_of(&printing::normalize(input)),
        PageKey::CustomBoxes => value_of(&custom_boxes::normalize(input)),
    }
}

fn value_of<T: Serialize>(content: &T) -> Value {
    serde_json::to_value(content).unwrap_or(Value::Null)
}
