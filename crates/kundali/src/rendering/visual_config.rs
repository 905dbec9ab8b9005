use crate::rendering::primitives::Color;

/// Colors for the generated chart specs
#[derive(Debug, Clone)]
pub struct VisualConfig {
    pub background_color: Color,
    pub frame_color: Color,
    pub frame_width: f64,
    pub text_color: Color,
    pub muted_text_color: Color,
    pub accent_color: Color,
    pub accent_fill: Color,
    pub web_color: Color,
    pub main_web_color: Color,
    pub spoke_color: Color,
    pub point_outline: Color,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            background_color: Color::from_table("#0B0B0D"),
            frame_color: Color::from_table("#262626"),
            frame_width: 2.0,
            text_color: Color::WHITE,
            muted_text_color: Color::rgba(255, 255, 255, 179), // 70% white
            accent_color: Color::from_table("#3b82f6"),
            accent_fill: Color::rgba(59, 130, 246, 56), // accent at ~22%
            web_color: Color::rgba(255, 255, 255, 31),
            main_web_color: Color::rgba(255, 255, 255, 56),
            spoke_color: Color::rgba(255, 255, 255, 26),
            point_outline: Color::from_table("#0B0B0D"),
        }
    }
}
