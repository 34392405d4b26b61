//! 颜色与图标的关键词解析
//!
//! 模型输出的颜色名与单品名都是自由文本，这里用有序的
//! (关键词, 结果) 规则表做子串匹配，命中第一条即返回。
//! 规则表是纯数据，具体色在前、泛色在后，顺序即优先级。

/// 未命中任何规则时的兜底色
pub const FALLBACK_COLOR: &str = "#9ca3af";

/// 调色板中带色块展示的条目上限，之后的条目只显示文字
pub const SWATCH_CAP: usize = 4;

/// 颜色规则表（中英文关键词 -> 十六进制色值）
const COLOR_RULES: &[(&str, &str)] = &[
    // 蓝色系，具体色在前
    ("藏青", "#1f3a5f"),
    ("navy", "#1f3a5f"),
    ("天蓝", "#87ceeb"),
    ("sky", "#87ceeb"),
    ("宝蓝", "#2457c5"),
    ("royal", "#2457c5"),
    ("冰蓝", "#bfe3f0"),
    ("雾霾蓝", "#7a94ab"),
    ("湖蓝", "#2e8bc0"),
    ("蓝", "#3b6fb5"),
    ("blue", "#3b6fb5"),
    // 红粉系
    ("酒红", "#722f37"),
    ("burgundy", "#722f37"),
    ("wine", "#722f37"),
    ("粉", "#f4a7b9"),
    ("pink", "#f4a7b9"),
    ("红", "#c0392b"),
    ("red", "#c0392b"),
    // 黄橙系
    ("橙", "#e67e22"),
    ("orange", "#e67e22"),
    ("柠檬", "#f7e463"),
    ("lemon", "#f7e463"),
    ("黄", "#f1c40f"),
    ("yellow", "#f1c40f"),
    // 绿色系
    ("橄榄", "#708238"),
    ("olive", "#708238"),
    ("军绿", "#4b5320"),
    ("薄荷", "#aaf0d1"),
    ("mint", "#aaf0d1"),
    ("绿", "#27ae60"),
    ("green", "#27ae60"),
    // 紫色系
    ("薰衣草", "#b57edc"),
    ("lavender", "#b57edc"),
    ("紫", "#8e44ad"),
    ("purple", "#8e44ad"),
    // 棕米系
    ("驼", "#c19a6b"),
    ("camel", "#c19a6b"),
    ("卡其", "#b7a878"),
    ("khaki", "#b7a878"),
    ("咖", "#6f4e37"),
    ("coffee", "#6f4e37"),
    ("棕", "#795548"),
    ("brown", "#795548"),
    ("米", "#f5f0e1"),
    ("beige", "#f5f0e1"),
    ("cream", "#f5f0e1"),
    // 金属色
    ("银", "#c0c0c0"),
    ("silver", "#c0c0c0"),
    ("金", "#d4af37"),
    ("gold", "#d4af37"),
    // 黑白灰
    ("黑", "#1a1a1a"),
    ("black", "#1a1a1a"),
    ("白", "#fafafa"),
    ("white", "#fafafa"),
    ("灰", "#9e9e9e"),
    ("gray", "#9e9e9e"),
    ("grey", "#9e9e9e"),
];

/// 颜色名 -> 十六进制色值
///
/// 对任意输入都返回确定的色值，永不失败
pub fn resolve_color(name: &str) -> &'static str {
    let lowered = name.to_lowercase();
    COLOR_RULES
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, hex)| *hex)
        .unwrap_or(FALLBACK_COLOR)
}

/// 单品图标类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Footwear,
    Bag,
    Umbrella,
    Eyewear,
    Headwear,
    Garment,
}

impl IconKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconKind::Footwear => "footwear",
            IconKind::Bag => "bag",
            IconKind::Umbrella => "umbrella",
            IconKind::Eyewear => "eyewear",
            IconKind::Headwear => "headwear",
            IconKind::Garment => "garment",
        }
    }

    /// 展示用的字形
    pub fn glyph(&self) -> &'static str {
        match self {
            IconKind::Footwear => "👟",
            IconKind::Bag => "👜",
            IconKind::Umbrella => "🌂",
            IconKind::Eyewear => "🕶️",
            IconKind::Headwear => "🧢",
            IconKind::Garment => "👕",
        }
    }
}

/// 图标规则表（单品名关键词 -> 图标类别）
const ICON_RULES: &[(&str, IconKind)] = &[
    ("鞋", IconKind::Footwear),
    ("靴", IconKind::Footwear),
    ("boot", IconKind::Footwear),
    ("sneaker", IconKind::Footwear),
    ("shoe", IconKind::Footwear),
    ("包", IconKind::Bag),
    ("bag", IconKind::Bag),
    ("伞", IconKind::Umbrella),
    ("umbrella", IconKind::Umbrella),
    ("墨镜", IconKind::Eyewear),
    ("眼镜", IconKind::Eyewear),
    ("glasses", IconKind::Eyewear),
    ("帽", IconKind::Headwear),
    ("hat", IconKind::Headwear),
    ("cap", IconKind::Headwear),
];

/// 单品名 -> 图标类别，未命中归为普通衣物
pub fn resolve_icon(name: &str) -> IconKind {
    let lowered = name.to_lowercase();
    ICON_RULES
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, kind)| *kind)
        .unwrap_or(IconKind::Garment)
}

/// 类目标签 -> 展示文案，未知类目原样返回
pub fn category_label(tag: &str) -> &str {
    match tag {
        "top" => "上装",
        "pants" => "下装",
        "shoes" => "鞋子",
        "bag" => "包袋",
        "jacket" => "外套",
        other => other,
    }
}
