//! Custom boxes landing page content schema.

use serde::Serialize;
use serde_json::Value;

use crate::content::util;

const FEATURE_ICONS: &[&str] = &["Palette", "Wrench", "Zap", "CheckCircle"];

/// A highlighted capability card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomBoxFeature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// An industry the custom boxes are pitched at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomBoxApplication {
    pub title: String,
    pub description: String,
}

/// A customization option group with its bullet list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomBoxOption {
    pub title: String,
    pub items: Vec<String>,
}

/// One step of the production walkthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomBoxProcessStep {
    pub step: String,
    pub title: String,
    pub desc: String,
}

/// Editable content for the custom boxes landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomBoxesContent {
    pub hero_image_url: String,
    pub hero_image_alt: String,
    pub hero_title: String,
    pub hero_description: String,
    pub features_title: String,
    pub features: Vec<CustomBoxFeature>,
    pub applications_title: String,
    pub applications: Vec<CustomBoxApplication>,
    pub options_title: String,
    pub options: Vec<CustomBoxOption>,
    pub process_title: String,
    pub process_steps: Vec<CustomBoxProcessStep>,
    pub cta_title: String,
    pub cta_description: String,
    pub cta_primary_label: String,
    pub cta_primary_href: String,
    pub cta_secondary_label: String,
    pub cta_secondary_href: String,
}

impl Default for CustomBoxesContent {
    fn default() -> Self {
        Self {
            hero_image_url: "/images/hero-custom.jpg".to_string(),
            hero_image_alt: "Thùng carton chuyên dụng".to_string(),
            hero_title: "Thùng Carton Chuyên Dụng".to_string(),
            hero_description: "Giải pháp bao bì chuyên dụng cho các ngành công nghiệp khác nhau"
                .to_string(),
            features_title: "Ưu Điểm Nổi Bật".to_string(),
            features: vec![
                CustomBoxFeature {
                    icon: "Palette".to_string(),
                    title: "Thiết Kế Tùy Chỉnh".to_string(),
                    description: "Thiết kế hoàn toàn tùy chỉnh theo yêu cầu của khách hàng, \
                                  không giới hạn kích thước và màu sắc."
                        .to_string(),
                },
                CustomBoxFeature {
                    icon: "Wrench".to_string(),
                    title: "Xử Lý Chuyên Nghiệp".to_string(),
                    description: "Sử dụng công nghệ hiện đại và quy trình sản xuất chuyên \
                                  nghiệp đảm bảo chất lượng cao."
                        .to_string(),
                },
                CustomBoxFeature {
                    icon: "Zap".to_string(),
                    title: "Giao Hàng Nhanh".to_string(),
                    description: "Thời gian giao hàng nhanh chóng, hỗ trợ đặt hàng nhanh khi \
                                  khách hàng cần gấp."
                        .to_string(),
                },
                CustomBoxFeature {
                    icon: "CheckCircle".to_string(),
                    title: "Chất Lượng Đảm Bảo".to_string(),
                    description: "Kiểm soát chất lượng chặt chẽ ở mỗi bước, đảm bảo sản phẩm \
                                  đạt tiêu chuẩn cao nhất."
                        .to_string(),
                },
            ],
            applications_title: "Ứng Dụng Theo Ngành Công Nghiệp".to_string(),
            applications: vec![
                CustomBoxApplication {
                    title: "Thực Phẩm & Đồ Uống".to_string(),
                    description: "Thùng carton chuyên dụng cho các sản phẩm thực phẩm, bánh \
                                  kẹo, nước uống với khả năng bảo quản tốt."
                        .to_string(),
                },
                CustomBoxApplication {
                    title: "Điện Tử & Công Nghệ".to_string(),
                    description: "Thùng bảo vệ cao cấp cho các thiết bị điện tử, điện thoại, \
                                  máy tính với lót chắc chắn."
                        .to_string(),
                },
                CustomBoxApplication {
                    title: "Mỹ Phẩm & Dược Phẩm".to_string(),
                    description: "Thùng carton sang trọng, an toàn cho các sản phẩm mỹ phẩm, \
                                  dược phẩm với thiết kế chuyên dụng."
                        .to_string(),
                },
                CustomBoxApplication {
                    title: "Thời Trang & Dệt May".to_string(),
                    description: "Thùng carton linh hoạt với các kích thước đa dạng phù hợp \
                                  cho quần áo, giày dép."
                        .to_string(),
                },
                CustomBoxApplication {
                    title: "Quà Tặng & Hàng Lưu Niệm".to_string(),
                    description: "Thùng carton cao cấp với thiết kế đẹp mắt, in ấn sắc nét \
                                  cho các sản phẩm quà tặng."
                        .to_string(),
                },
                CustomBoxApplication {
                    title: "Logistics & Vận Chuyển".to_string(),
                    description: "Thùng carton chuyên dụng cho vận chuyển hàng hoá, bảo vệ \
                                  tối đa trong quá trình di chuyển."
                        .to_string(),
                },
            ],
            options_title: "Tùy Chọn Tùy Chỉnh".to_string(),
            options: vec![
                CustomBoxOption {
                    title: "Kích Thước & Hình Dạng".to_string(),
                    items: vec![
                        "Kích thước tùy chỉnh theo yêu cầu".to_string(),
                        "Hình dạng đặc biệt (hình chữ nhật, vuông, trụ)".to_string(),
                        "Lỗ cắt đặc biệt".to_string(),
                        "Khe đóng và khóa tùy chỉnh".to_string(),
                        "Cánh gập linh hoạt".to_string(),
                    ],
                },
                CustomBoxOption {
                    title: "Chất Liệu & Xử Lý".to_string(),
                    items: vec![
                        "Carton từ 2-5 lớp".to_string(),
                        "Giấy kraft tự nhiên hoặc trắng".to_string(),
                        "Lót chắc chắn để bảo vệ hàng".to_string(),
                        "Xử lý chống ẩm, chống dầu".to_string(),
                        "Vật liệu thân thiện với môi trường".to_string(),
                    ],
                },
                CustomBoxOption {
                    title: "In Ấn & Thiết Kế".to_string(),
                    items: vec![
                        "In lên đến 4 màu".to_string(),
                        "In full màu (CMYK)".to_string(),
                        "Thiết kế logo chuyên nghiệp".to_string(),
                        "Cắt đặc biệt (chữ nổi, bế)".to_string(),
                        "Mã vạch và QR code".to_string(),
                    ],
                },
                CustomBoxOption {
                    title: "Các Tùy Chọn Khác".to_string(),
                    items: vec![
                        "Tem dán chuyên dụng".to_string(),
                        "Xử lý bề mặt (bóng, mờ, lụa)".to_string(),
                        "Hộp quà tặng cao cấp".to_string(),
                        "Thiết kế bao bì sáng tạo".to_string(),
                        "Hỗ trợ thiết kế miễn phí".to_string(),
                    ],
                },
            ],
            process_title: "Quy Trình Sản Xuất".to_string(),
            process_steps: vec![
                CustomBoxProcessStep {
                    step: "1".to_string(),
                    title: "Tư Vấn".to_string(),
                    desc: "Trao đổi yêu cầu và ý tưởng".to_string(),
                },
                CustomBoxProcessStep {
                    step: "2".to_string(),
                    title: "Thiết Kế".to_string(),
                    desc: "Thiết kế mẫu theo nhu cầu".to_string(),
                },
                CustomBoxProcessStep {
                    step: "3".to_string(),
                    title: "Sản Xuất".to_string(),
                    desc: "Sản xuất số lượng lớn".to_string(),
                },
                CustomBoxProcessStep {
                    step: "4".to_string(),
                    title: "Giao Hàng".to_string(),
                    desc: "Vận chuyển an toàn đến bạn".to_string(),
                },
            ],
            cta_title: "Cần Thùng Carton Chuyên Dụng?".to_string(),
            cta_description: "Liên hệ với chúng tôi ngay để nhận tư vấn miễn phí và báo giá \
                              tùy chỉnh cho sản phẩm của bạn."
                .to_string(),
            cta_primary_label: "Liên Hệ Ngay".to_string(),
            cta_primary_href: "/lien-he".to_string(),
            cta_secondary_label: "Yêu Cầu Báo Giá".to_string(),
            cta_secondary_href: "/bao-gia".to_string(),
        }
    }
}

pub(super) fn normalize(input: &Value) -> CustomBoxesContent {
    let defaults = CustomBoxesContent::default();
    CustomBoxesContent {
        hero_image_url: util::text(input, "hero_image_url", &defaults.hero_image_url),
        hero_image_alt: util::text(input, "hero_image_alt", &defaults.hero_image_alt),
        hero_title: util::text(input, "hero_title", &defaults.hero_title),
        hero_description: util::text(input, "hero_description", &defaults.hero_description),
        features_title: util::text(input, "features_title", &defaults.features_title),
        features: defaults
            .features
            .iter()
            .enumerate()
            .map(|(index, fallback)| {
                let source = util::item(input, "features", index);
                CustomBoxFeature {
                    icon: util::icon(source, "icon", FEATURE_ICONS, &fallback.icon),
                    title: util::text(source, "title", &fallback.title),
                    description: util::text(source, "description", &fallback.description),
                }
            })
            .collect(),
        applications_title: util::text(input, "applications_title", &defaults.applications_title),
        applications: defaults
            .applications
            .iter()
            .enumerate()
            .map(|(index, fallback)| {
                let source = util::item(input, "applications", index);
                CustomBoxApplication {
                    title: util::text(source, "title", &fallback.title),
                    description: util::text(source, "description", &fallback.description),
                }
            })
            .collect(),
        options_title: util::text(input, "options_title", &defaults.options_title),
        options: defaults
            .options
            .iter()
            .enumerate()
            .map(|(index, fallback)| {
                let source = util::item(input, "options", index);
                CustomBoxOption {
                    title: util::text(source, "title", &fallback.title),
                    items: util::string_list(source, "items", &fallback.items),
                }
            })
            .collect(),
        process_title: util::text(input, "process_title", &defaults.process_title),
        process_steps: defaults
            .process_steps
            .iter()
            .enumerate()
            .map(|(index, fallback)| {
                let source = util::item(input, "process_steps", index);
                CustomBoxProcessStep {
                    step: util::text(source, "step", &fallback.step),
                    title: util::text(source, "title", &fallback.title),
                    desc: util::text(source, "desc", &fallback.desc),
                }
            })
            .collect(),
        cta_title: util::text(input, "cta_title", &defaults.cta_title),
        cta_description: util::text(input, "cta_description", &defaults.cta_description),
        cta_primary_label: util::text(input, "cta_primary_label", &defaults.cta_primary_label),
        cta_primary_href: util::link(input, "cta_primary_href", &defaults.cta_primary_href),
        cta_secondary_label: util::text(
            input,
            "cta_secondary_label",
            &defaults.cta_secondary_label,
        ),
        cta_secondary_href: util::link(input, "cta_secondary_href", &defaults.cta_secondary_href),
    }
}
