//! Quote page content schema.

use serde::Serialize;
use serde_json::Value;

use crate::content::util;

/// One pricing card on the quote page. The card list is fixed-length;
/// submitted cards are matched to defaults by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuotePricingCard {
    pub title: String,
    pub price: String,
    pub price_description: String,
    pub features: Vec<String>,
}

/// A printing add-on blurb shown under the pricing cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuotePrintingService {
    pub title: String,
    pub description: String,
}

/// Editable content for the quote page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteContent {
    pub hero_image_url: String,
    pub hero_image_alt: String,
    pub hero_title: String,
    pub hero_description: String,
    pub form_title: String,
    pub form_description: String,
    pub pricing_section_title: String,
    pub pricing_cards: Vec<QuotePricingCard>,
    pub printing_section_title: String,
    pub printing_services: Vec<QuotePrintingService>,
}

impl Default for QuoteContent {
    fn default() -> Self {
        Self {
            hero_image_url: "/images/hero-quote.jpg".to_string(),
            hero_image_alt: "Báo giá thùng carton".to_string(),
            hero_title: "Báo Giá & Tính Giá".to_string(),
            hero_description: "Sử dụng công cụ tính giá của chúng tôi để có được báo giá \
                               nhanh và chính xác."
                .to_string(),
            form_title: "Yêu Cầu Báo Giá Chi Tiết".to_string(),
            form_description: "Điền đầy đủ thông tin để nhận báo giá tùy chỉnh".to_string(),
            pricing_section_title: "Thông Tin Giá Cả".to_string(),
            pricing_cards: vec![
                QuotePricingCard {
                    title: "Thùng Carton Tiêu Chuẩn".to_string(),
                    price: "2.500 ₫/cái".to_string(),
                    price_description: "Giá khởi điểm (1-100 cái)".to_string(),
                    features: vec![
                        "101-500: 5% OFF".to_string(),
                        "501-1.000: 10% OFF".to_string(),
                        "1.001-5.000: 15% OFF".to_string(),
                        "5.001+: 20% OFF".to_string(),
                    ],
                },
                QuotePricingCard {
                    title: "Thùng Carton Có Lót".to_string(),
                    price: "3.500 ₫/cái".to_string(),
                    price_description: "Giá khởi điểm (1-100 cái)".to_string(),
                    features: vec![
                        "✓ Bảo vệ sản phẩm tốt".to_string(),
                        "✓ Lót giấy chắc chắn".to_string(),
                        "✓ Thích hợp cho hàng dễ vỡ".to_string(),
                    ],
                },
                QuotePricingCard {
                    title: "Thùng Carton Chuyên Dụng".to_string(),
                    price: "5.000 ₫/cái".to_string(),
                    price_description: "Giá khởi điểm (1-100 cái)".to_string(),
                    features: vec![
                        "✓ Thiết kế tùy chỉnh".to_string(),
                        "✓ Đáp ứng yêu cầu đặc biệt".to_string(),
                        "✓ Chất lượng cao cấp".to_string(),
                    ],
                },
            ],
            printing_section_title: "Dịch Vụ In Ấn Bổ Sung".to_string(),
            printing_services: vec![
                QuotePrintingService {
                    title: "In Ấn Cơ Bản".to_string(),
                    description: "In logo, thông tin công ty, hoặc thiết kế đơn giản trên \
                                  thùng. Giá từ 500-1.000 ₫/cái."
                        .to_string(),
                },
                QuotePrintingService {
                    title: "In Ấn Cao Cấp".to_string(),
                    description: "In đa màu, gradient, hoặc thiết kế phức tạp. Giá từ \
                                  1.500-3.000 ₫/cái."
                        .to_string(),
                },
            ],
        }
    }
}

pub(super) fn normalize(input: &Value) -> QuoteContent {
    let defaults = QuoteContent::default();
    QuoteContent {
        hero_image_url: util::text(input, "hero_image_url", &defaults.hero_image_url),
        hero_image_alt: util::text(input, "hero_image_alt", &defaults.hero_image_alt),
        hero_title: util::text(input, "hero_title", &defaults.hero_title),
        hero_description: util::text(input, "hero_description", &defaults.hero_description),
        form_title: util::text(input, "form_title", &defaults.form_title),
        form_description: util::text(input, "form_description", &defaults.form_description),
        pricing_section_title: util::text(
            input,
            "pricing_section_title",
            &defaults.pricing_section_title,
        ),
        pricing_cards: defaults
            .pricing_cards
            .iter()
            .enumerate()
            .map(|(index, fallback)| {
                let source = util::item(input, "pricing_cards", index);
                QuotePricingCard {
                    title: util::text(source, "title", &fallback.title),
                    price: util::text(source, "price", &fallback.price),
                    price_description: util::text(
                        source,
                        "price_description",
                        &fallback.price_description,
                    ),
                    features: util::string_list(source, "features", &fallback.features),
                }
            })
            .collect(),
        printing_section_title: util::text(
            input,
            "printing_section_title",
            &defaults.printing_section_title,
        ),
        printing_services: defaults
            .printing_services
            .iter()
            .enumerate()
            .map(|(index, fallback)| {
                let source = util::item(input, "printing_services", index);
                QuotePrintingService {
                    title: util::text(source, "title", &fallback.title),
                    description: util::text(source, "description", &fallback.description),
                }
            })
            .collect(),
    }
}
