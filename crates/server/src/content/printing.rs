//! Printing services landing page content schema.

use serde::Serialize;
use serde_json::Value;

use crate::content::util;

const FEATURE_ICONS: &[&str] = &["Award", "Palette", "Zap", "CheckCircle"];

/// A highlighted capability card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrintingFeature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// A print tier with its price band and selling points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrintingType {
    pub title: String,
    pub description: String,
    pub price: String,
    pub features: Vec<String>,
}

/// A detailed printing service with its bullet list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrintingService {
    pub title: String,
    pub description: String,
    pub details: Vec<String>,
}

/// A surface finish option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrintingFinish {
    pub name: String,
    pub desc: String,
    pub benefit: String,
}

/// One step of the print workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrintingProcessStep {
    pub step: String,
    pub title: String,
    pub desc: String,
}

/// A file-requirement checklist group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrintingRequirementList {
    pub title: String,
    pub items: Vec<String>,
}

/// Editable content for the printing services landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrintingContent {
    pub hero_image_url: String,
    pub hero_image_alt: String,
    pub hero_title: String,
    pub hero_description: String,
    pub features_title: String,
    pub features: Vec<PrintingFeature>,
    pub types_title: String,
    pub printing_types: Vec<PrintingType>,
    pub services_title: String,
    pub services: Vec<PrintingService>,
    pub finishes_title: String,
    pub finishes: Vec<PrintingFinish>,
    pub process_title: String,
    pub process_steps: Vec<PrintingProcessStep>,
    pub requirements_title: String,
    pub requirements: Vec<PrintingRequirementList>,
    pub cta_title: String,
    pub cta_description: String,
    pub cta_primary_label: String,
    pub cta_primary_href: String,
    pub cta_secondary_label: String,
    pub cta_secondary_href: String,
}

impl Default for PrintingContent {
    fn default() -> Self {
        Self {
            hero_image_url: "/images/hero-printing.jpg".to_string(),
            hero_image_alt: "Dịch vụ in ấn thùng carton".to_string(),
            hero_title: "Dịch Vụ In Ấn".to_string(),
            hero_description: "Dịch vụ in ấn chuyên nghiệp trên thùng carton với công nghệ \
                               in hiện đại"
                .to_string(),
            features_title: "Ưu Điểm Dịch Vụ In Ấn".to_string(),
            features: vec![
                PrintingFeature {
                    icon: "Award".to_string(),
                    title: "Công Nghệ In Hiện Đại".to_string(),
                    description: "Sử dụng máy in hiện đại, cho chất lượng in ấn tuyệt vời và \
                                  độ chính xác cao."
                        .to_string(),
                },
                PrintingFeature {
                    icon: "Palette".to_string(),
                    title: "Thiết Kế Chuyên Nghiệp".to_string(),
                    description: "Đội ngũ thiết kế chuyên nghiệp hỗ trợ tạo ra những thiết \
                                  kế đẹp mắt và hiệu quả."
                        .to_string(),
                },
                PrintingFeature {
                    icon: "Zap".to_string(),
                    title: "Xử Lý Nhanh Chóng".to_string(),
                    description: "Quy trình in ấn nhanh chóng, đáp ứng yêu cầu gấp của khách \
                                  hàng."
                        .to_string(),
                },
                PrintingFeature {
                    icon: "CheckCircle".to_string(),
                    title: "Kiểm Soát Chất Lượng".to_string(),
                    description: "Kiểm soát chất lượng chặt chẽ ở mỗi bước để đảm bảo sản \
                                  phẩm hoàn hảo."
                        .to_string(),
                },
            ],
            types_title: "Loại In Ấn & Giá Cả".to_string(),
            printing_types: vec![
                PrintingType {
                    title: "In 1 Màu".to_string(),
                    description: "In một màu đơn giản, tiết kiệm chi phí".to_string(),
                    price: "500-800 ₫/cái".to_string(),
                    features: vec![
                        "Thích hợp cho thiết kế đơn giản".to_string(),
                        "Giá rẻ nhất".to_string(),
                        "Thời gian nhanh".to_string(),
                    ],
                },
                PrintingType {
                    title: "In 2-3 Màu".to_string(),
                    description: "In 2-3 màu với độ chi tiết tốt".to_string(),
                    price: "1.000-1.500 ₫/cái".to_string(),
                    features: vec![
                        "Logo rõ ràng".to_string(),
                        "Nhiều màu sắc".to_string(),
                        "Chi phí hợp lý".to_string(),
                    ],
                },
                PrintingType {
                    title: "In 4 Màu (Full Màu)".to_string(),
                    description: "In đầy đủ màu CMYK với độ chi tiết cao".to_string(),
                    price: "1.500-2.500 ₫/cái".to_string(),
                    features: vec![
                        "Chất lượng cao".to_string(),
                        "Màu sắc sống động".to_string(),
                        "Thiết kế chuyên nghiệp".to_string(),
                    ],
                },
                PrintingType {
                    title: "In Cao Cấp & Đặc Biệt".to_string(),
                    description: "In với xử lý đặc biệt, bóng, mờ, lụa".to_string(),
                    price: "2.000-3.500 ₫/cái".to_string(),
                    features: vec![
                        "Hiệu ứng bề mặt".to_string(),
                        "Trông sang trọng".to_string(),
                        "Ấn tượng mạnh".to_string(),
                    ],
                },
            ],
            services_title: "Dịch Vụ In Ấn Chi Tiết".to_string(),
            services: vec![
                PrintingService {
                    title: "In Logo & Thông Tin Công Ty".to_string(),
                    description: "In thông tin công ty, logo, số điện thoại, website lên \
                                  thùng carton."
                        .to_string(),
                    details: vec![
                        "✓ Logo đơn giản hoặc phức tạp".to_string(),
                        "✓ Thông tin liên hệ".to_string(),
                        "✓ Địa chỉ công ty".to_string(),
                        "✓ Mã QR code".to_string(),
                    ],
                },
                PrintingService {
                    title: "In Thiết Kế Custom".to_string(),
                    description: "In thiết kế hoàn toàn tùy chỉnh theo yêu cầu của khách \
                                  hàng."
                        .to_string(),
                    details: vec![
                        "✓ Thiết kế graphic độc đáo".to_string(),
                        "✓ Màu sắc đa dạng".to_string(),
                        "✓ Hình ảnh sắc nét".to_string(),
                        "✓ Bố cục linh hoạt".to_string(),
                    ],
                },
                PrintingService {
                    title: "In Mã Vạch & Tem".to_string(),
                    description: "In mã vạch, QR code, tem, nhãn dán cho hàng hoá.".to_string(),
                    details: vec![
                        "✓ Mã vạch tiêu chuẩn".to_string(),
                        "✓ QR code động".to_string(),
                        "✓ Tem bảo hành".to_string(),
                        "✓ Nhãn dán an toàn".to_string(),
                    ],
                },
                PrintingService {
                    title: "In Hộp Quà Tặng".to_string(),
                    description: "In ấn cao cấp cho các hộp quà tặng, nâng cao giá trị sản \
                                  phẩm."
                        .to_string(),
                    details: vec![
                        "✓ Thiết kế sang trọng".to_string(),
                        "✓ Finish cao cấp".to_string(),
                        "✓ Bao bì quà tặng".to_string(),
                        "✓ In nhiều màu".to_string(),
                    ],
                },
                PrintingService {
                    title: "In Các Ký Hiệu & Chứng Chỉ".to_string(),
                    description: "In các ký hiệu bảo hành, chứng nhận, chứng chỉ chất lượng."
                        .to_string(),
                    details: vec![
                        "✓ Logo chứng chỉ".to_string(),
                        "✓ Ký hiệu an toàn".to_string(),
                        "✓ Hạn sử dụng".to_string(),
                        "✓ Thông tin dinh dưỡng".to_string(),
                    ],
                },
                PrintingService {
                    title: "In Theo Mùa & Sự Kiện".to_string(),
                    description: "In ấn đặc biệt cho các dịp mùa lễ, sự kiện, hoạt động tiếp \
                                  thị."
                        .to_string(),
                    details: vec![
                        "✓ Thiết kế lễ hội".to_string(),
                        "✓ Công nghệ in đặc biệt".to_string(),
                        "✓ Hạn chế số lượng".to_string(),
                        "✓ Thiết kế độc đáo".to_string(),
                    ],
                },
            ],
            finishes_title: "Tùy Chọn Xử Lý Bề Mặt".to_string(),
            finishes: vec![
                PrintingFinish {
                    name: "Bóng (Glossy)".to_string(),
                    desc: "Bề mặt bóng, sáng bóng".to_string(),
                    benefit: "Màu sắc sống động, giá tốt".to_string(),
                },
                PrintingFinish {
                    name: "Mờ (Matte)".to_string(),
                    desc: "Bề mặt mờ, tinh tế".to_string(),
                    benefit: "Trông chuyên nghiệp, sang trọng".to_string(),
                },
                PrintingFinish {
                    name: "Lụa (Silk)".to_string(),
                    desc: "Bề mặt lụa mịn".to_string(),
                    benefit: "Cảm giác cao cấp, hiệu ứng đẹp".to_string(),
                },
                PrintingFinish {
                    name: "Nổi (Emboss)".to_string(),
                    desc: "Nổi lên 3D".to_string(),
                    benefit: "Ấn tượng mạnh, độc đáo".to_string(),
                },
            ],
            process_title: "Quy Trình In Ấn".to_string(),
            process_steps: vec![
                PrintingProcessStep {
                    step: "1".to_string(),
                    title: "Tiếp Nhận File".to_string(),
                    desc: "Gửi file thiết kế".to_string(),
                },
                PrintingProcessStep {
                    step: "2".to_string(),
                    title: "Kiểm Tra".to_string(),
                    desc: "Kiểm duyệt file".to_string(),
                },
                PrintingProcessStep {
                    step: "3".to_string(),
                    title: "In Mẫu".to_string(),
                    desc: "In mẫu để xem".to_string(),
                },
                PrintingProcessStep {
                    step: "4".to_string(),
                    title: "Sản Xuất".to_string(),
                    desc: "In toàn bộ đơn hàng".to_string(),
                },
                PrintingProcessStep {
                    step: "5".to_string(),
                    title: "Giao Hàng".to_string(),
                    desc: "Vận chuyển".to_string(),
                },
            ],
            requirements_title: "Yêu Cầu File In Ấn".to_string(),
            requirements: vec![
                PrintingRequirementList {
                    title: "Định Dạng File".to_string(),
                    items: vec![
                        "✓ PDF (khuyên dùng)".to_string(),
                        "✓ AI (Adobe Illustrator)".to_string(),
                        "✓ PSD (Photoshop)".to_string(),
                        "✓ PNG/JPG (độ phân giải cao ≥300 DPI)".to_string(),
                    ],
                },
                PrintingRequirementList {
                    title: "Yêu Cầu Kỹ Thuật".to_string(),
                    items: vec![
                        "✓ Độ phân giải tối thiểu 300 DPI".to_string(),
                        "✓ Kích thước phù hợp với thùng".to_string(),
                        "✓ Màu sắc CMYK (không RGB)".to_string(),
                        "✓ Font chữ nhúng hoặc convert shape".to_string(),
                    ],
                },
                PrintingRequirementList {
                    title: "Lời Khuyên Thiết Kế".to_string(),
                    items: vec![
                        "✓ Tránh sử dụng màu quá nhạt".to_string(),
                        "✓ Đảm bảo chữ đủ lớn để đọc".to_string(),
                        "✓ Để lề 5mm từ cạnh".to_string(),
                        "✓ Hình ảnh nên có độ tương phản cao".to_string(),
                    ],
                },
            ],
            cta_title: "Sẵn Sàng In Ấn Sản Phẩm Của Bạn?".to_string(),
            cta_description: "Liên hệ với chúng tôi để trao đổi về yêu cầu in ấn của bạn. \
                              Chúng tôi sẵn sàng hỗ trợ thiết kế nếu bạn chưa có file."
                .to_string(),
            cta_primary_label: "Liên Hệ Ngay".to_string(),
            cta_primary_href: "/lien-he".to_string(),
            cta_secondary_label: "Yêu Cầu Báo Giá".to_string(),
            cta_secondary_href: "/bao-gia".to_string(),
        }
    }
}

pub(super) fn normalize(input: &Value) -> PrintingContent {
    let defaults = PrintingContent::default();
    PrintingContent {
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
                PrintingFeature {
                    icon: util::icon(source, "icon", FEATURE_ICONS, &fallback.icon),
                    title: util::text(source, "title", &fallback.title),
                    description: util::text(source, "description", &fallback.description),
                }
            })
            .collect(),
        types_title: util::text(input, "types_title", &defaults.types_title),
        printing_types: defaults
            .printing_types
            .iter()
            .enumerate()
            .map(|(index, fallback)| {
                let source = util::item(input, "printing_types", index);
                PrintingType {
                    title: util::text(source, "title", &fallback.title),
                    description: util::text(source, "description", &fallback.description),
                    price: util::text(source, "price", &fallback.price),
                    features: util::string_list(source, "features", &fallback.features),
                }
            })
            .collect(),
        services_title: util::text(input, "services_title", &defaults.services_title),
        services: defaults
            .services
            .iter()
            .enumerate()
            .map(|(index, fallback)| {
                let source = util::item(input, "services", index);
                PrintingService {
                    title: util::text(source, "title", &fallback.title),
                    description: util::text(source, "description", &fallback.description),
                    details: util::string_list(source, "details", &fallback.details),
                }
            })
            .collect(),
        finishes_title: util::text(input, "finishes_title", &defaults.finishes_title),
        finishes: defaults
            .finishes
            .iter()
            .enumerate()
            .map(|(index, fallback)| {
                let source = util::item(input, "finishes", index);
                PrintingFinish {
                    name: util::text(source, "name", &fallback.name),
                    desc: util::text(source, "desc", &fallback.desc),
                    benefit: util::text(source, "benefit", &fallback.benefit),
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
                PrintingProcessStep {
                    step: util::text(source, "step", &fallback.step),
                    title: util::text(source, "title", &fallback.title),
                    desc: util::text(source, "desc", &fallback.desc),
                }
            })
            .collect(),
        requirements_title: util::text(input, "requirements_title", &defaults.requirements_title),
        requirements: defaults
            .requirements
            .iter()
            .enumerate()
            .map(|(index, fallback)| {
                let source = util::item(input, "requirements", index);
                PrintingRequirementList {
                    title: util::text(source, "title", &fallback.title),
                    items: util::string_list(source, "items", &fallback.items),
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
