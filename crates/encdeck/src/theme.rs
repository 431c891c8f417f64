use eframe::egui::Color32;

/// Fixed dark palette of the workshop deck.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color32,
    pub frame_top: Color32,
    pub frame_bottom: Color32,
    pub panel: Color32,
    pub border: Color32,
    pub foreground: Color32,
    pub muted: Color32,
    pub faint: Color32,
    pub accent: Color32,
    pub viewer_background: Color32,
    pub kicker_size: f32,
    pub heading_size: f32,
    pub heading_compact_size: f32,
    pub body_size: f32,
    pub small_size: f32,
    pub tiny_size: f32,
}

impl Theme {
    pub fn deck() -> Self {
        Self {
            background: Color32::from_rgb(0x0B, 0x0B, 0x0F),
            frame_top: Color32::from_rgba_unmultiplied(255, 255, 255, 12),
            frame_bottom: Color32::from_rgba_unmultiplied(0, 0, 0, 102),
            panel: Color32::from_rgba_unmultiplied(0, 0, 0, 64),
            border: Color32::from_rgba_unmultiplied(255, 255, 255, 26),
            foreground: Color32::WHITE,
            muted: Color32::from_rgba_unmultiplied(255, 255, 255, 204),
            faint: Color32::from_rgba_unmultiplied(255, 255, 255, 153),
            accent: Color32::from_rgb(0x67, 0xE8, 0xF9),
            viewer_background: Color32::WHITE,
            kicker_size: 15.0,
            heading_size: 52.0,
            heading_compact_size: 44.0,
            body_size: 20.0,
            small_size: 15.0,
            tiny_size: 12.0,
        }
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        Color32::from_rgba_unmultiplied(
            color.r(),
            color.g(),
            color.b(),
            (color.a() as f32 * opacity) as u8,
        )
    }
}
