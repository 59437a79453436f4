//! Built-in default content
//!
//! Every collection falls back to these values when storage holds no
//! (parseable) copy. Timestamps are fixed so a fresh store is reproducible.

use chrono::{DateTime, Utc};
use shared::models::{
    AboutPageData, AdminRole, AdminUser, CustomColor, CustomConfigImage, CustomPageData, FaqItem,
    HeroSlide, Lead, LeadSource, LeadStatus, LocationItem, MASTER_ADMIN_ID, Product,
    Product3DConfig, ProductCategory, Scenario, SiteConfig, SizeSeries, SpecItem, TimelineItem,
    ValueItem, WhyCustomItem,
};

/// 2024-01-01T00:00:00Z
const SEED_EPOCH_SECS: i64 = 1_704_067_200;
const DAY_SECS: i64 = 86_400;

fn seed_time(offset_secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(SEED_EPOCH_SECS + offset_secs, 0).unwrap_or_default()
}

pub fn hero_slides() -> Vec<HeroSlide> {
    let slide = |id: i64, tag: &str, title: &str, desc: &str| HeroSlide {
        id,
        image: format!("https://picsum.photos/1920/1080?grayscale&blur=2&random={id}"),
        tag: tag.to_string(),
        title: title.to_string(),
        desc: desc.to_string(),
    };
    vec![
        slide(
            1,
            "Future of Silence",
            "在这里，听见宇宙的寂静",
            "专为开放式环境打造的极致静谧舱。融合航空级隔音技术与极简美学，重塑您的专注力场。",
        ),
        slide(
            2,
            "Deep Focus",
            "独处，是一种奢侈的能力",
            "在喧嚣都市中构建您的精神飞地，让每一次思考都深邃如海。",
        ),
        slide(
            3,
            "Smart Office",
            "未来办公的静音革命",
            "模块化设计，即装即用。为团队协作注入专注基因，释放无限潜能。",
        ),
    ]
}

struct ProductSeed<'a> {
    id: &'a str,
    model: &'a str,
    name: &'a str,
    price: &'a str,
    desc: &'a str,
    features: [&'a str; 3],
    image: u32,
    series: SizeSeries,
    specs: [(&'a str, &'a str); 3],
}

impl ProductSeed<'_> {
    fn build(self) -> Product {
        Product {
            id: self.id.to_string(),
            model: self.model.to_string(),
            name: self.name.to_string(),
            series: self.series,
            price: Some(self.price.to_string()),
            show_price: Some(true),
            desc: self.desc.to_string(),
            description: None,
            features: self.features.iter().map(|f| f.to_string()).collect(),
            specs: self
                .specs
                .iter()
                .map(|(label, text)| SpecItem {
                    label: label.to_string(),
                    text: text.to_string(),
                })
                .collect(),
            image: format!("https://picsum.photos/800/800?random={}", self.image),
            three_d_config: None,
            show_on_home: true,
        }
    }
}

pub fn product_categories() -> Vec<ProductCategory> {
    let mut s1 = ProductSeed {
        id: "s1",
        model: "S1-Solo",
        name: "个人专注舱",
        price: "¥ 19,800 起",
        desc: "为深度工作者打造的独立力场。采用第四代静音架构，将开放办公区的噪音隔绝于外，留住思维的火花。",
        features: ["航空级铝合金框架", "4000K 护眼阅读灯", "每小时 60 次全舱换气"],
        image: 101,
        series: SizeSeries::S,
        specs: [("-35dB", "隔音量"), ("60x/h", "空气置换"), ("1.2m²", "占地面积")],
    }
    .build();
    s1.three_d_config = Some(Product3DConfig {
        initial_scale: Some(1.0),
        auto_rotate: Some(true),
        ..Default::default()
    });

    let office = vec![
        s1,
        ProductSeed {
            id: "m2",
            model: "M2-Meeting",
            name: "双人洽谈舱",
            price: "¥ 32,800 起",
            desc: "高效沟通，拒绝外界干扰。",
            features: ["双人舒适沙发", "集成电源与 USB 接口", "双层钢化夹胶玻璃"],
            image: 102,
            series: SizeSeries::M,
            specs: [("-40dB", "隔音量"), ("80x/h", "空气置换"), ("2.4m²", "占地面积")],
        }
        .build(),
        ProductSeed {
            id: "l4",
            model: "L4-Studio",
            name: "团队协作舱",
            price: "¥ 58,800 起",
            desc: "激荡创意的静谧会议室。支持 4-6 人小型会议。",
            features: ["全景落地玻璃", "会议录音级声学内饰", "智能会议预约系统兼容"],
            image: 103,
            series: SizeSeries::L,
            specs: [("-45dB", "隔音量"), ("120x/h", "空气置换"), ("4.5m²", "占地面积")],
        }
        .build(),
    ];

    let home = vec![
        ProductSeed {
            id: "h-sleep",
            model: "Sleep Pod",
            name: "深睡休眠舱",
            price: "¥ 25,800 起",
            desc: "城市中心的五星级睡眠环境。完全遮光设计配合白噪音发生器。",
            features: ["0 勒克斯全遮光", "助眠白噪音系统", "恒温恒湿控制"],
            image: 201,
            series: SizeSeries::S,
            specs: [("Blackout", "全遮光"), ("Silent", "静音新风"), ("Low Hz", "低频控制")],
        }
        .build(),
        ProductSeed {
            id: "h-music",
            model: "Music Pod",
            name: "私人音乐舱",
            price: "¥ 45,000 起",
            desc: "尽情演奏，不扰邻里。经过专业声学调教的混响时间。",
            features: ["非平行墙面设计", "悬浮地板减震", "专业音频线材预埋"],
            image: 203,
            series: SizeSeries::M,
            specs: [("Acoustic", "声学调教"), ("Reverb", "混响控制"), ("-50dB", "极致隔音")],
        }
        .build(),
    ];

    let accessories = vec![
        ProductSeed {
            id: "a-panel",
            model: "Smart Panel",
            name: "智能中控",
            price: "¥ 2,999",
            desc: "一键掌控声光电。支持 App 远程控制与语音指令。",
            features: ["10寸触控屏", "环境监测传感器", "OTA 在线升级"],
            image: 301,
            series: SizeSeries::S,
            specs: [("IoT", "万物互联"), ("Touch", "多点触控"), ("Monitor", "实时监测")],
        }
        .build(),
    ];

    let category = |id: &str, title: &str, icon: &str, cover: u32, items: Vec<Product>| {
        ProductCategory {
            id: id.to_string(),
            title: title.to_string(),
            icon_type: icon.to_string(),
            cover_image: format!("https://picsum.photos/800/800?random={cover}"),
            items,
        }
    };

    vec![
        category("office", "QE.SPACE 办公系列", "Activity", 101, office),
        category("home", "QE.SPACE 家用系列", "Moon", 201, home),
        category("accessories", "QE.SPACE 精选配件", "Cpu", 301, accessories),
    ]
}

pub fn scenarios() -> Vec<Scenario> {
    let scenario = |id: &str, title: &str, description: &str, image: u32, category: &str| Scenario {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image: format!("https://picsum.photos/1200/800?random={image}"),
        category: category.to_string(),
    };
    vec![
        scenario(
            "office",
            "开放式办公",
            "在嘈杂的开放办公区，通过静音舱创造即时的私密会议空间，提升团队效率。",
            10,
            "Commercial",
        ),
        scenario(
            "airport",
            "交通枢纽",
            "在繁忙的机场与车站，为旅客提供一方能够安睡或处理紧急工作的净土。",
            11,
            "Commercial",
        ),
        scenario(
            "home",
            "家庭音乐室",
            "尽情演奏，互不打扰。为乐器练习和家庭录音提供专业级声学环境。",
            12,
            "Home",
        ),
    ]
}

pub fn site_config() -> SiteConfig {
    SiteConfig {
        site_name: "QE.SPACE".to_string(),
        seo_title: "The Silent Space | 极静空间".to_string(),
        seo_description:
            "专为开放式环境打造的极致静谧舱。融合航空级隔音技术与极简美学，重塑您的专注力场。"
                .to_string(),
        logo_url: "https://cdn-icons-png.flaticon.com/512/2919/2919601.png".to_string(),
        contact_email: "28583428@qq.com".to_string(),
        address: Some("杭州市西湖区中田大厦15F-F".to_string()),
        phone: Some("19967322073".to_string()),
    }
}

pub fn leads() -> Vec<Lead> {
    vec![
        Lead {
            id: "1".to_string(),
            name: "张先生".to_string(),
            email: "zhang@example.com".to_string(),
            phone: Some("13800138000".to_string()),
            company: Some("未来科技".to_string()),
            message: "对 M2 会议舱感兴趣，需采购 5 台。".to_string(),
            source: LeadSource::ContactPage,
            status: LeadStatus::New,
            created_at: seed_time(2 * DAY_SECS),
        },
        Lead {
            id: "2".to_string(),
            name: "Alice Wu".to_string(),
            email: "alice@design.io".to_string(),
            phone: None,
            company: None,
            message: "请问有 S1 的 3D 模型吗？".to_string(),
            source: LeadSource::Footer,
            status: LeadStatus::Contacted,
            created_at: seed_time(DAY_SECS),
        },
    ]
}

pub fn about() -> AboutPageData {
    let timeline = [
        (
            "2022",
            "实验室成立",
            "声学材料实验室成立，经过3000次材料测试，突破低厚度中空声学材料问题。",
        ),
        ("2023", "首款面世", "公司依托自有工厂的研发能力，首款QE-SI静音舱面世。"),
        ("2024", "产品产销", "公司与多家企业合作推广30个城市【静音舱】产品产销。"),
        (
            "2025",
            "C端业务开发",
            "开发C端业务，为解决睡眠人群的静音需求开发第一代睡眠舱QE-SMZ，成功突破隔绝低频与环保健康问题。",
        ),
        (
            "2026",
            "全球化布局",
            "全球化布局，预计全球服务30个国家。从北京的嘈杂街头到硅谷的科技巨头。",
        ),
    ];
    let locations = [
        ("北京", "Beijing", "北京市朝阳区建国路 87 号", "010-85888888"),
        ("上海", "Shanghai", "上海市静安区南京西路 1515 号", "021-62888888"),
        ("广州", "Guangzhou", "广州市天河区天河路 218 号", "020-38888888"),
    ];

    AboutPageData {
        hero_video_url: Some(
            "https://videos.pexels.com/video-files/855018/855018-hd_1920_1080_30fps.mp4"
                .to_string(),
        ),
        vision: Some(ValueItem {
            title: "我们的愿景".to_string(),
            description: "让宁静成为一种随处可得的生产力，成为全球声学空间的领导者。".to_string(),
        }),
        mission: Some(ValueItem {
            title: "我们的使命".to_string(),
            description: "为每一颗忙碌的灵魂打造私属的寂静岛屿，守护专注与创造力。".to_string(),
        }),
        timeline: timeline
            .iter()
            .map(|(year, title, desc)| TimelineItem {
                year: year.to_string(),
                title: title.to_string(),
                desc: desc.to_string(),
            })
            .collect(),
        locations: locations
            .iter()
            .enumerate()
            .map(|(i, (city, name, address, phone))| LocationItem {
                city: city.to_string(),
                name: name.to_string(),
                address: address.to_string(),
                phone: Some(phone.to_string()),
                image: format!("https://picsum.photos/400/300?grayscale&random={}", i + 1),
            })
            .collect(),
    }
}

/// (id, display name, hex)
const COLORS: [(&str, &str, &str); 8] = [
    ("black", "Midnight Black", "#000000"),
    ("white", "Polar White", "#FFFFFF"),
    ("grey", "Space Grey", "#808080"),
    ("red", "Mars Red", "#EF4444"),
    ("orange", "Sunset Orange", "#F97316"),
    ("yellow", "Cyber Yellow", "#EAB308"),
    ("green", "Forest Green", "#22C55E"),
    ("purple", "Neon Purple", "#A855F7"),
];

fn case_images(size: SizeSeries) -> [&'static str; 4] {
    match size {
        SizeSeries::S => [
            "https://images.unsplash.com/photo-1595428774223-ef52624120d2?auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1517457373958-b7bdd4587205?auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1589834390005-5d4fb9bf3d32?auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1493663284031-b7e3aefcae8e?auto=format&fit=crop&w=800&q=80",
        ],
        SizeSeries::M => [
            "https://images.unsplash.com/photo-1497366216548-37526070297c?auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1577412647305-991150c7d163?auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1575429198097-0414ec08e8cd?auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1504384308090-c54be3855091?auto=format&fit=crop&w=800&q=80",
        ],
        SizeSeries::L => [
            "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1497366811353-6870744d04b2?auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1560185007-cde436f6a4d0?auto=format&fit=crop&w=800&q=80",
        ],
    }
}

/// One preview per (size, color), rotating through each size's case photos
fn config_images() -> Vec<CustomConfigImage> {
    let mut images = Vec::with_capacity(SizeSeries::ALL.len() * COLORS.len());
    let mut i = 0usize;
    for size in SizeSeries::ALL {
        let pool = case_images(size);
        for (color_id, _, _) in COLORS {
            images.push(CustomConfigImage {
                id: format!("img-{size}-{color_id}"),
                size_id: size,
                color_id: color_id.to_string(),
                image_url: pool[i % pool.len()].to_string(),
            });
            i += 1;
        }
    }
    images
}

pub fn custom() -> CustomPageData {
    let faqs = [
        (1, "定制周期通常是多久？", "标准定制周期为 15-20 个工作日，特殊工艺可能需要额外时间。"),
        (2, "提供上门测量服务吗？", "是的，我们为企业客户提供免费的专业上门测量与声学评估服务。"),
        (
            3,
            "如何保证隔音效果？",
            "我们采用多层阻尼复合结构，并经过严格的声学实验室测试，确保达到预期的隔音指标。",
        ),
    ];
    let why = [
        ("1", "Ruler", "量身定制", "根据您的空间尺寸与风格需求，提供 1v1 专属设计方案。"),
        ("2", "ShieldCheck", "环保材料", "全线产品采用 E0 级环保板材，即装即用，无醛无味。"),
        ("3", "Box", "模块化组装", "乐高式模块化安装，灵活拆卸重组，搬家也能带走。"),
    ];

    CustomPageData {
        faqs: faqs
            .iter()
            .map(|(id, q, a)| FaqItem {
                id: *id,
                q: q.to_string(),
                a: a.to_string(),
                img: String::new(),
            })
            .collect(),
        colors: COLORS
            .iter()
            .map(|(id, name, hex)| CustomColor {
                id: id.to_string(),
                name: name.to_string(),
                hex: hex.to_string(),
            })
            .collect(),
        config_images: config_images(),
        why_custom_items: why
            .iter()
            .map(|(id, icon, title, desc)| WhyCustomItem {
                id: id.to_string(),
                icon: icon.to_string(),
                title: title.to_string(),
                desc: desc.to_string(),
            })
            .collect(),
    }
}

pub fn admin_users() -> Vec<AdminUser> {
    vec![AdminUser {
        id: MASTER_ADMIN_ID.to_string(),
        name: "超级管理员".to_string(),
        phone: "18675988550".to_string(),
        password: "jxkj123456".to_string(),
        role: AdminRole::Master,
        created_at: seed_time(0),
        last_login: None,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_is_deterministic() {
        assert_eq!(leads(), leads());
        assert_eq!(admin_users(), admin_users());
        assert_eq!(custom(), custom());
    }

    #[test]
    fn test_config_images_cover_every_pair_once() {
        let data = custom();
        assert_eq!(data.config_images.len(), 24);
        let pairs: HashSet<_> = data
            .config_images
            .iter()
            .map(|img| (img.size_id, img.color_id.clone()))
            .collect();
        assert_eq!(pairs.len(), 24);
        assert_eq!(data.config_images[0].id, "img-S-black");
        assert_eq!(data.config_images[23].id, "img-L-purple");
        // rotation continues across sizes: 9th image is M's second photo
        assert_eq!(data.config_images[8].image_url, case_images(SizeSeries::M)[0]);
        assert_eq!(data.config_images[9].image_url, case_images(SizeSeries::M)[1]);
    }

    #[test]
    fn test_product_ids_unique() {
        let ids: Vec<_> = product_categories()
            .into_iter()
            .flat_map(|c| c.items)
            .map(|p| p.id)
            .collect();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), 6);
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_single_master() {
        let admins = admin_users();
        assert_eq!(admins.len(), 1);
        assert!(admins[0].is_master());
        assert_eq!(admins[0].role, AdminRole::Master);
    }

    #[test]
    fn test_leads_newest_first() {
        let leads = leads();
        assert!(leads[0].created_at > leads[1].created_at);
    }
}
