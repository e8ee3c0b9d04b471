//! Products page content schema.

use serde::Serialize;
use serde_json::Value;

use crate::content::util;

/// Editable content for the public products page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductsContent {
    pub hero_image_url: String,
    pub hero_image_alt: String,
    pub hero_title: String,
    pub hero_description: String,
    pub cta_title: String,
    pub cta_description: String,
    pub cta_button_label: String,
    pub cta_button_href: String,
}

impl Default for ProductsContent {
    fn default() -> Self {
        Self {
            hero_image_url: "/images/hero-products.jpg".to_string(),
            hero_image_alt: "Sản phẩm thùng carton Kraftbox".to_string(),
            hero_title: "Sản Phẩm Của Chúng Tôi".to_string(),
            hero_description: "Khám phá các sản phẩm thùng carton chất lượng cao với nhiều \
                               lựa chọn và kích thước khác nhau."
                .to_string(),
            cta_title: "Không Tìm Thấy Sản Phẩm Bạn Cần?".to_string(),
            cta_description: "Liên hệ với chúng tôi để tìm hiểu về các giải pháp tùy chỉnh \
                              của chúng tôi."
                .to_string(),
            cta_button_label: "Yêu Cầu Báo Giá".to_string(),
            cta_button_href: "/bao-gia".to_string(),
        }
    }
}

pub(super) fn normalize(input: &Value) -> ProductsContent {
    let defaults = ProductsContent::default();
    ProductsContent {
        hero_image_url: util::text(input, "hero_image_url", &defaults.hero_image_url),
        hero_image_alt: util::text(input, "hero_image_alt", &defaults.hero_image_alt),
        hero_title: util::text(input, "hero_title", &defaults.hero_title),
        hero_description: util::text(input, "hero_description", &defaults.hero_description),
        cta_title: util::text(input, "cta_title", &defaults.cta_title),
        cta_description: util::text(input, "cta_description", &defaults.cta_description),
        cta_button_label: util::text(input, "cta_button_label", &defaults.cta_button_label),
        cta_button_href: util::link(input, "cta_button_href", &defaults.cta_button_href),
    }
}
