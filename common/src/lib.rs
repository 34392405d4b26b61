//! Outfit AI Common Library
//!
//! 各前端共享的类型与工具

pub mod error;
pub mod palette;
pub mod parser;
pub mod prompts;
pub mod types;
pub mod weather;

pub use error::{Error, Result};
pub use palette::{category_label, resolve_color, resolve_icon, IconKind, FALLBACK_COLOR, SWATCH_CAP};
pub use parser::{parse_suggestion, repair_json};
pub use prompts::{build_outfit_prompt, CONTRACT_EXAMPLE, ITEM_CATEGORIES};
pub use types::{
    ColorSeason, Gender, ImageSource, InspirationImage, OutfitItem, OutfitPlan, OutfitReport,
    Selection, StylePreference, SuggestionResponse, TargetDay, TimeOfDay, WeatherSnapshot,
};
pub use weather::{snapshot_for, WttrReply};
