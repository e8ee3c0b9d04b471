//! Domain models for the server.

pub mod admin_user;
pub mod catalog;
pub mod company;
pub mod inbox;
pub mod page_content;
pub mod session;

pub use admin_user::{AdminUser, AdminUserPublic};
pub use catalog::{Article, ArticlePatch, Category, NewArticle, NewProduct, Product, ProductPatch};
pub use company::{CompanyInfo, CompanySettings, CompanyUpdate};
pub use inbox::{ContactMessage, NewContactMessage, NewQuoteRequest, QuoteRequest};
pub use page_content::{PageContentRecord, PageState, PageVersionRecord};
pub use session::{AdminSession, CurrentAdmin};
