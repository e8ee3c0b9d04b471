//! Home page content schema.
//!
//! The fixed-length sections (stats, advantages, process steps, services,
//! customers) are normalized position by position against the defaults.
//! `featured_products` is the one variable-length section: it follows the
//! submitted list, since the admin panel mirrors featured catalog products
//! into it.

use serde::Serialize;
use serde_json::Value;

use crate::content::util;

const ADVANTAGE_ICONS: &[&str] = &[
    "package",
    "trending_up",
    "zap",
    "check_circle",
    "factory",
    "truck",
    "award",
    "users",
];

const PROCESS_ICONS: &[&str] =
    &["file-text", "scissors", "print", "package", "truck", "check-circle"];

/// A headline number in the stats band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeStat {
    pub value: String,
    pub label: String,
    pub suffix: String,
}

/// A reason-to-choose-us card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeAdvantage {
    pub title: String,
    pub description: String,
    pub icon: String,
}

/// A featured product teaser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeFeaturedProduct {
    pub title: String,
    pub description: String,
    pub detail: String,
    pub cta_label: String,
    pub cta_href: String,
}

/// A service cross-link card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeService {
    pub title: String,
    pub description: String,
    pub cta_label: String,
    pub cta_href: String,
}

/// One step of the production walkthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeProcessStep {
    pub step_number: i64,
    pub title: String,
    pub description: String,
    pub icon: String,
}

/// A customer logo slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeCustomer {
    pub name: String,
    pub logo_url: String,
    pub logo_alt: String,
}

/// Editable content for the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeContent {
    pub hero_image_url: String,
    pub hero_image_alt: String,
    pub hero_title: String,
    pub hero_description: String,
    pub hero_primary_label: String,
    pub hero_primary_href: String,
    pub hero_secondary_label: String,
    pub hero_secondary_href: String,
    pub factory_title: String,
    pub factory_images: Vec<String>,
    pub factory_description: String,
    pub stats_title: String,
    pub stats: Vec<HomeStat>,
    pub advantages_title: String,
    pub advantages: Vec<HomeAdvantage>,
    pub featured_title: String,
    pub featured_view_all_label: String,
    pub featured_view_all_href: String,
    pub featured_products: Vec<HomeFeaturedProduct>,
    pub process_title: String,
    pub process_description: String,
    pub process_steps: Vec<HomeProcessStep>,
    pub services_title: String,
    pub services: Vec<HomeService>,
    pub customers_title: String,
    pub customers: Vec<HomeCustomer>,
    pub cta_title: String,
    pub cta_description: String,
    pub cta_button_label: String,
    pub cta_button_href: String,
}

impl Default for HomeContent {
    fn default() -> Self {
        Self {
            hero_image_url: "/images/hero-home.jpg".to_string(),
            hero_image_alt: "Nhà sản xuất thùng carton chuyên nghiệp".to_string(),
            hero_title: "Thùng Carton Chất Lượng Cao Từ Nhà Sản Xuất Trực Tiếp".to_string(),
            hero_description: "Cung cấp và sản xuất các loại thùng carton theo yêu cầu với \
                               năng lực lớn, giá tận gốc và giao hàng nhanh."
                .to_string(),
            hero_primary_label: "Yêu cầu báo giá".to_string(),
            hero_primary_href: "/bao-gia".to_string(),
            hero_secondary_label: "Xem sản phẩm".to_string(),
            hero_secondary_href: "/san-pham".to_string(),
            factory_title: "Xưởng Sản Xuất".to_string(),
            factory_images: vec![
                "/images/factory-1.jpg".to_string(),
                "/images/factory-2.jpg".to_string(),
                "/images/factory-3.jpg".to_string(),
                "/images/factory-4.jpg".to_string(),
            ],
            factory_description: "Xưởng sản xuất hiện đại với đầy đủ máy móc và thiết bị tiên \
                                  tiến, đảm bảo chất lượng sản phẩm và tiến độ giao hàng."
                .to_string(),
            stats_title: "Đồng hành cùng doanh nghiệp Việt".to_string(),
            stats: vec![
                HomeStat {
                    value: "15".to_string(),
                    label: "Năm kinh nghiệm".to_string(),
                    suffix: "+".to_string(),
                },
                HomeStat {
                    value: "500".to_string(),
                    label: "Khách hàng".to_string(),
                    suffix: "+".to_string(),
                },
                HomeStat {
                    value: "1000".to_string(),
                    label: "Đơn hàng".to_string(),
                    suffix: "+".to_string(),
                },
                HomeStat {
                    value: "50".to_string(),
                    label: "Nhân viên".to_string(),
                    suffix: "+".to_string(),
                },
            ],
            advantages_title: "Tại sao chọn chúng tôi?".to_string(),
            advantages: vec![
                HomeAdvantage {
                    title: "Nhà sản xuất trực tiếp".to_string(),
                    description: "Sản xuất theo yêu cầu của khách hàng với kiểm soát chất \
                                  lượng toàn diện."
                        .to_string(),
                    icon: "factory".to_string(),
                },
                HomeAdvantage {
                    title: "Năng lực sản xuất lớn".to_string(),
                    description: "Đáp ứng đơn hàng số lượng lớn với thời gian giao hàng \
                                  nhanh chóng."
                        .to_string(),
                    icon: "trending_up".to_string(),
                },
                HomeAdvantage {
                    title: "Giá sỉ tận gốc".to_string(),
                    description: "Giá cạnh tranh với chất lượng ổn định cho doanh nghiệp."
                        .to_string(),
                    icon: "zap".to_string(),
                },
                HomeAdvantage {
                    title: "Giao hàng linh hoạt".to_string(),
                    description: "Tối ưu vận chuyển, giao đúng hẹn theo nhu cầu thực tế."
                        .to_string(),
                    icon: "truck".to_string(),
                },
            ],
            featured_title: "Sản phẩm nổi bật".to_string(),
            featured_view_all_label: "Xem tất cả".to_string(),
            featured_view_all_href: "/san-pham".to_string(),
            featured_products: vec![
                HomeFeaturedProduct {
                    title: "Thùng carton tiêu chuẩn".to_string(),
                    description: "Kích thước và thiết kế linh hoạt.".to_string(),
                    detail: "Phù hợp cho đóng gói sản phẩm thông thường.".to_string(),
                    cta_label: "Tìm hiểu thêm".to_string(),
                    cta_href: "/san-pham".to_string(),
                },
                HomeFeaturedProduct {
                    title: "Thùng carton có lót".to_string(),
                    description: "Tăng độ bền và khả năng bảo vệ.".to_string(),
                    detail: "Phù hợp cho sản phẩm dễ vỡ, cần bọc lót chống sốc.".to_string(),
                    cta_label: "Tìm hiểu thêm".to_string(),
                    cta_href: "/san-pham".to_string(),
                },
                HomeFeaturedProduct {
                    title: "Thùng carton chuyên dụng".to_string(),
                    description: "Tối ưu theo ngành hàng đặc thù.".to_string(),
                    detail: "Phù hợp cho sản phẩm đặc biệt và đơn hàng tùy biến.".to_string(),
                    cta_label: "Tìm hiểu thêm".to_string(),
                    cta_href: "/san-pham".to_string(),
                },
            ],
            process_title: "Quy Trình Sản Xuất".to_string(),
            process_description: "Quy trình sản xuất chuyên nghiệp, đảm bảo chất lượng và \
                                  tiến độ"
                .to_string(),
            process_steps: vec![
                HomeProcessStep {
                    step_number: 1,
                    title: "Tiếp nhận yêu cầu".to_string(),
                    description: "Tư vấn và hiểu nhu cầu đóng gói của khách hàng".to_string(),
                    icon: "file-text".to_string(),
                },
                HomeProcessStep {
                    step_number: 2,
                    title: "Thiết kế mẫu".to_string(),
                    description: "Thiết kế và sản xuất mẫu theo yêu cầu".to_string(),
                    icon: "scissors".to_string(),
                },
                HomeProcessStep {
                    step_number: 3,
                    title: "Sản xuất".to_string(),
                    description: "Sản xuất hàng loạt với kiểm soát chất lượng".to_string(),
                    icon: "print".to_string(),
                },
                HomeProcessStep {
                    step_number: 4,
                    title: "Giao hàng".to_string(),
                    description: "Giao hàng tận nơi đúng hẹn".to_string(),
                    icon: "truck".to_string(),
                },
            ],
            services_title: "Dịch vụ của chúng tôi".to_string(),
            services: vec![
                HomeService {
                    title: "Thùng carton chuyên dụng".to_string(),
                    description: "Cung cấp các loại thùng carton thiết kế riêng cho nhu cầu \
                                  đặc thù của nhiều ngành hàng."
                        .to_string(),
                    cta_label: "Tìm hiểu thêm".to_string(),
                    cta_href: "/thung-carton-chuyen-dung".to_string(),
                },
                HomeService {
                    title: "Dịch vụ in ấn".to_string(),
                    description: "Giải pháp in ấn trên bao bì carton với chất lượng in ổn \
                                  định và màu sắc rõ nét."
                        .to_string(),
                    cta_label: "Tìm hiểu thêm".to_string(),
                    cta_href: "/dich-vu-in-an".to_string(),
                },
            ],
            customers_title: "Khách Hàng Của Kraftbox".to_string(),
            customers: (1..=6)
                .map(|n| HomeCustomer {
                    name: format!("Khách hàng {n}"),
                    logo_url: String::new(),
                    logo_alt: "Logo khách hàng".to_string(),
                })
                .collect(),
            cta_title: "Sẵn sàng bắt đầu với chúng tôi?".to_string(),
            cta_description: "Liên hệ ngay để nhận tư vấn và báo giá chi tiết cho nhu cầu \
                              đóng gói của doanh nghiệp bạn."
                .to_string(),
            cta_button_label: "Liên hệ ngay".to_string(),
            cta_button_href: "/lien-he".to_string(),
        }
    }
}

pub(super) fn normalize(input: &Value) -> HomeContent {
    let defaults = HomeContent::default();
    HomeContent {
        hero_image_url: util::text(input, "hero_image_url", &defaults.hero_image_url),
        hero_image_alt: util::text(input, "hero_image_alt", &defaults.hero_image_alt),
        hero_title: util::text(input, "hero_title", &defaults.hero_title),
        hero_description: util::text(input, "hero_description", &defaults.hero_description),
        hero_primary_label: util::text(input, "hero_primary_label", &defaults.hero_primary_label),
        hero_primary_href: util::link(input, "hero_primary_href", &defaults.hero_primary_href),
        hero_secondary_label: util::text(
            input,
            "hero_secondary_label",
            &defaults.hero_secondary_label,
        ),
        hero_secondary_href: util::link(
            input,
            "hero_secondary_href",
            &defaults.hero_secondary_href,
        ),
        factory_title: util::text(input, "factory_title", &defaults.factory_title),
        factory_images: util::string_list(input, "factory_images", &defaults.factory_images),
        factory_description: util::text(
            input,
            "factory_description",
            &defaults.factory_description,
        ),
        stats_title: util::text(input, "stats_title", &defaults.stats_title),
        stats: defaults
            .stats
            .iter()
            .enumerate()
            .map(|(index, fallback)| {
                let source = util::item(input, "stats", index);
                HomeStat {
                    value: util::text(source, "value", &fallback.value),
                    label: util::text(source, "label", &fallback.label),
                    suffix: util::text(source, "suffix", &fallback.suffix),
                }
            })
            .collect(),
        advantages_title: util::text(input, "advantages_title", &defaults.advantages_title),
        advantages: defaults
            .advantages
            .iter()
            .enumerate()
            .map(|(index, fallback)| {
                let source = util::item(input, "advantages", index);
                HomeAdvantage {
                    title: util::text(source, "title", &fallback.title),
                    description: util::text(source, "description", &fallback.description),
                    icon: util::icon(source, "icon", ADVANTAGE_ICONS, &fallback.icon),
                }
            })
            .collect(),
        featured_title: util::text(input, "featured_title", &defaults.featured_title),
        featured_view_all_label: util::text(
            input,
            "featured_view_all_label",
            &defaults.featured_view_all_label,
        ),
        featured_view_all_href: util::link(
            input,
            "featured_view_all_href",
            &defaults.featured_view_all_href,
        ),
        featured_products: normalize_featured(input, &defaults.featured_products),
        process_title: util::text(input, "process_title", &defaults.process_title),
        process_description: util::text(
            input,
            "process_description",
            &defaults.process_description,
        ),
        process_steps: defaults
            .process_steps
            .iter()
            .enumerate()
            .map(|(index, fallback)| {
                let source = util::item(input, "process_steps", index);
                HomeProcessStep {
                    step_number: util::nonzero_int(source, "step_number", fallback.step_number),
                    title: util::text(source, "title", &fallback.title),
                    description: util::text(source, "description", &fallback.description),
                    icon: util::icon(source, "icon", PROCESS_ICONS, &fallback.icon),
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
                HomeService {
                    title: util::text(source, "title", &fallback.title),
                    description: util::text(source, "description", &fallback.description),
                    cta_label: util::text(source, "cta_label", &fallback.cta_label),
                    cta_href: util::link(source, "cta_href", &fallback.cta_href),
                }
            })
            .collect(),
        customers_title: util::text(input, "customers_title", &defaults.customers_title),
        customers: defaults
            .customers
            .iter()
            .enumerate()
            .map(|(index, fallback)| {
                let source = util::item(input, "customers", index);
                HomeCustomer {
                    name: util::text(source, "name", &fallback.name),
                    logo_url: util::text(source, "logo_url", &fallback.logo_url),
                    logo_alt: util::text(source, "logo_alt", &fallback.logo_alt),
                }
            })
            .collect(),
        cta_title: util::text(input, "cta_title", &defaults.cta_title),
        cta_description: util::text(input, "cta_description", &defaults.cta_description),
        cta_button_label: util::text(input, "cta_button_label", &defaults.cta_button_label),
        cta_button_href: util::link(input, "cta_button_href", &defaults.cta_button_href),
    }
}

/// Follows the submitted list length; positions past the defaults reuse
/// the first default as their fallback.
fn normalize_featured(
    input: &Value,
    defaults: &[HomeFeaturedProduct],
) -> Vec<HomeFeaturedProduct> {
    let Some(items) = input.get("featured_products").and_then(Value::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .map(|(index, source)| {
            let fallback = defaults.get(index).unwrap_or(&defaults[0]);
            HomeFeaturedProduct {
                title: util::text(source, "title", &fallback.title),
                description: util::text(source, "description", &fallback.description),
                detail: util::text(source, "detail", &fallback.detail),
                cta_label: util::text(source, "cta_label", &fallback.cta_label),
                cta_href: util::link(source, "cta_href", &fallback.cta_href),
            }
        })
        .collect()
}
