use eframe::egui::{self, FontId, Pos2, Rect, Stroke, StrokeKind};

use crate::deck::Slide;
use crate::render::{blocks, graphics};
use crate::theme::Theme;

const GRAPHIC_COLUMN_WIDTH: f32 = 300.0;

/// Render a composed content slide: kicker, heading, ordinal badge, then the
/// body column with an optional graphic panel beside it.
#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &egui::Ui,
    slide: &Slide,
    index: usize,
    theme: &Theme,
    rect: Rect,
    opacity: f32,
    anim: Option<f32>,
    scale: f32,
) {
    let padding = 34.0 * scale;
    let content_rect = rect.shrink(padding);

    // Ordinal badge, top right
    let badge_text = format!("{:02}", index + 1);
    let badge_galley = ui.painter().layout_no_wrap(
        badge_text,
        FontId::proportional(theme.small_size * scale),
        Theme::with_opacity(theme.faint, opacity),
    );
    let badge_pad = 12.0 * scale;
    let badge_rect = Rect::from_min_size(
        Pos2::new(
            content_rect.right() - badge_galley.rect.width() - badge_pad * 2.0,
            content_rect.top(),
        ),
        egui::vec2(
            badge_galley.rect.width() + badge_pad * 2.0,
            badge_galley.rect.height() + 10.0 * scale,
        ),
    );
    ui.painter().rect_filled(
        badge_rect,
        badge_rect.height() / 2.0,
        Theme::with_opacity(theme.frame_top, opacity),
    );
    ui.painter().rect_stroke(
        badge_rect,
        badge_rect.height() / 2.0,
        Stroke::new(1.0, Theme::with_opacity(theme.border, opacity)),
        StrokeKind::Inside,
    );
    ui.painter().galley(
        Pos2::new(badge_rect.left() + badge_pad, badge_rect.top() + 5.0 * scale),
        badge_galley,
        Theme::with_opacity(theme.faint, opacity),
    );

    // Kicker eyebrow
    let mut y = content_rect.top();
    let kicker_galley = ui.painter().layout_no_wrap(
        slide.kicker.to_uppercase(),
        FontId::proportional(theme.kicker_size * scale),
        Theme::with_opacity(theme.faint, opacity * 0.85),
    );
    let kicker_h = kicker_galley.rect.height();
    ui.painter().galley(
        Pos2::new(content_rect.left(), y),
        kicker_galley,
        Theme::with_opacity(theme.faint, opacity * 0.85),
    );
    y += kicker_h + 8.0 * scale;

    // Heading
    let heading_size = if slide.compact_heading {
        theme.heading_compact_size
    } else {
        theme.heading_size
    };
    let heading_width = (content_rect.width() - badge_rect.width() - 16.0 * scale).max(1.0);
    let heading_galley = ui.painter().layout(
        slide.title.clone(),
        FontId::proportional(heading_size * scale),
        Theme::with_opacity(theme.foreground, opacity),
        heading_width,
    );
    let heading_h = heading_galley.rect.height();
    ui.painter().galley(
        Pos2::new(content_rect.left(), y),
        heading_galley,
        Theme::with_opacity(theme.foreground, opacity),
    );
    y += heading_h + 18.0 * scale;

    // Content region: two columns when a graphic panel is attached
    let body_rect = Rect::from_min_max(
        Pos2::new(content_rect.left(), y),
        content_rect.right_bottom(),
    );
    match slide.graphic {
        Some(kind) => {
            let column = GRAPHIC_COLUMN_WIDTH * scale;
            let gap = 20.0 * scale;
            let text_rect = Rect::from_min_max(
                body_rect.left_top(),
                Pos2::new(body_rect.right() - column - gap, body_rect.bottom()),
            );
            let panel_rect = Rect::from_min_max(
                Pos2::new(body_rect.right() - column, body_rect.top()),
                body_rect.right_bottom(),
            );
            blocks::draw_blocks(ui, &slide.body, theme, text_rect, opacity, scale);
            graphics::draw_panel(ui, kind, theme, panel_rect, opacity, anim, scale);
        }
        None => {
            blocks::draw_blocks(ui, &slide.body, theme, body_rect, opacity, scale);
        }
    }
}
