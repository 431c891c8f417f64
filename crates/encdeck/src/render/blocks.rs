use eframe::egui::{self, Color32, FontFamily, FontId, Pos2, Rect, Stroke, StrokeKind};

use crate::deck::{Block, Card, ModelCard, Panel, Span};
use crate::theme::Theme;

/// Create a LayoutJob from emphasis spans. Strong spans render in the full
/// foreground color, plain spans in `color`.
pub fn spans_to_job(
    spans: &[Span],
    font_size: f32,
    color: Color32,
    strong_color: Color32,
    max_width: f32,
) -> egui::text::LayoutJob {
    let mut job = egui::text::LayoutJob::default();
    job.wrap.max_width = max_width;
    for span in spans {
        let (text, font_color, size) = match span {
            Span::Text(s) => (s, color, font_size),
            Span::Strong(s) => (s, strong_color, font_size + 1.0),
        };
        let format = egui::text::TextFormat {
            font_id: FontId::new(size, FontFamily::Proportional),
            color: font_color,
            ..Default::default()
        };
        job.append(text, 0.0, format);
    }
    job
}

/// Layout and paint spans, returning the height used.
fn draw_spans(
    ui: &egui::Ui,
    spans: &[Span],
    pos: Pos2,
    font_size: f32,
    color: Color32,
    strong_color: Color32,
    max_width: f32,
) -> f32 {
    let job = spans_to_job(spans, font_size, color, strong_color, max_width);
    let galley = ui.painter().layout_job(job);
    let height = galley.rect.height();
    ui.painter().galley(pos, galley, color);
    height
}

/// Paint a slide body top to bottom inside `rect`. Returns the height used.
pub fn draw_blocks(
    ui: &egui::Ui,
    blocks: &[Block],
    theme: &Theme,
    rect: Rect,
    opacity: f32,
    scale: f32,
) -> f32 {
    let gap = 22.0 * scale;
    let mut y = rect.top();

    for block in blocks {
        let h = match block {
            Block::Paragraph { spans } => draw_spans(
                ui,
                spans,
                Pos2::new(rect.left(), y),
                theme.body_size * scale,
                Theme::with_opacity(theme.muted, opacity),
                Theme::with_opacity(theme.foreground, opacity),
                (rect.width()).min(620.0 * scale),
            ),
            Block::Cards { items } => draw_cards(ui, items, theme, rect, y, opacity, scale),
            Block::Panels { items } => draw_panels(ui, items, theme, rect, y, opacity, scale),
            Block::Callout { spans } => draw_callout(ui, spans, theme, rect, y, opacity, scale),
            Block::ModelCards { items } => {
                draw_model_cards(ui, items, theme, rect, y, opacity, scale)
            }
        };
        y += h + gap;
    }

    (y - gap - rect.top()).max(0.0)
}

fn card_frame(ui: &egui::Ui, rect: Rect, theme: &Theme, opacity: f32, scale: f32) {
    ui.painter().rect_filled(
        rect,
        12.0 * scale,
        Theme::with_opacity(theme.panel, opacity),
    );
    ui.painter().rect_stroke(
        rect,
        12.0 * scale,
        Stroke::new(1.0, Theme::with_opacity(theme.border, opacity)),
        StrokeKind::Inside,
    );
}

/// Two-column grid of title + detail cards.
fn draw_cards(
    ui: &egui::Ui,
    items: &[Card],
    theme: &Theme,
    rect: Rect,
    top: f32,
    opacity: f32,
    scale: f32,
) -> f32 {
    let gap = 12.0 * scale;
    let pad = 14.0 * scale;
    let cell_width = ((rect.width()).min(640.0 * scale) - gap) / 2.0;
    let text_width = cell_width - pad * 2.0;

    let title_color = Theme::with_opacity(theme.foreground, opacity);
    let detail_color = Theme::with_opacity(theme.faint, opacity);

    let mut y = top;
    for row in items.chunks(2) {
        // Lay out both cells first so the row can share the taller height.
        let galleys: Vec<_> = row
            .iter()
            .map(|c| {
                let title = ui.painter().layout(
                    c.title.clone(),
                    FontId::proportional(theme.body_size * 0.85 * scale),
                    title_color,
                    text_width,
                );
                let detail = (!c.detail.is_empty()).then(|| {
                    ui.painter().layout(
                        c.detail.clone(),
                        FontId::proportional(theme.small_size * scale),
                        detail_color,
                        text_width,
                    )
                });
                let text_h = title.rect.height()
                    + detail
                        .as_ref()
                        .map_or(0.0, |d| d.rect.height() + 4.0 * scale);
                (title, detail, text_h)
            })
            .collect();

        let row_height = galleys
            .iter()
            .map(|(_, _, h)| h + pad * 2.0)
            .fold(0.0_f32, f32::max);

        for (col, (title, detail, _)) in galleys.into_iter().enumerate() {
            let x = rect.left() + col as f32 * (cell_width + gap);
            let cell = Rect::from_min_size(
                Pos2::new(x, y),
                egui::vec2(cell_width, row_height),
            );
            card_frame(ui, cell, theme, opacity, scale);

            let mut ty = y + pad;
            let title_h = title.rect.height();
            ui.painter()
                .galley(Pos2::new(x + pad, ty), title, title_color);
            ty += title_h + 4.0 * scale;
            if let Some(detail) = detail {
                ui.painter()
                    .galley(Pos2::new(x + pad, ty), detail, detail_color);
            }
        }
        y += row_height + gap;
    }

    y - gap - top
}

/// Two-column grid of titled bullet panels.
fn draw_panels(
    ui: &egui::Ui,
    items: &[Panel],
    theme: &Theme,
    rect: Rect,
    top: f32,
    opacity: f32,
    scale: f32,
) -> f32 {
    let gap = 12.0 * scale;
    let pad = 18.0 * scale;
    let cell_width = (rect.width() - gap) / 2.0;
    let text_width = cell_width - pad * 2.0;

    let title_color = Theme::with_opacity(theme.foreground, opacity);
    let bullet_color = Theme::with_opacity(theme.muted, opacity * 0.9);

    let mut max_height: f32 = 0.0;
    let mut prepared = Vec::with_capacity(items.len());
    for p in items {
        let title = ui.painter().layout_no_wrap(
            p.title.clone(),
            FontId::proportional(theme.body_size * 0.95 * scale),
            title_color,
        );
        let bullets: Vec<_> = p
            .bullets
            .iter()
            .map(|b| {
                ui.painter().layout(
                    format!("\u{2022} {b}"),
                    FontId::proportional(theme.small_size * 1.05 * scale),
                    bullet_color,
                    text_width,
                )
            })
            .collect();
        let text_h = title.rect.height()
            + 10.0 * scale
            + bullets
                .iter()
                .map(|g| g.rect.height() + 6.0 * scale)
                .sum::<f32>();
        max_height = max_height.max(text_h + pad * 2.0);
        prepared.push((title, bullets));
    }

    for (col, (title, bullets)) in prepared.into_iter().enumerate() {
        let x = rect.left() + col as f32 * (cell_width + gap);
        let cell = Rect::from_min_size(Pos2::new(x, top), egui::vec2(cell_width, max_height));
        card_frame(ui, cell, theme, opacity, scale);

        let mut ty = top + pad;
        let title_h = title.rect.height();
        ui.painter()
            .galley(Pos2::new(x + pad, ty), title, title_color);
        ty += title_h + 10.0 * scale;
        for g in bullets {
            let h = g.rect.height();
            ui.painter().galley(Pos2::new(x + pad, ty), g, bullet_color);
            ty += h + 6.0 * scale;
        }
    }

    max_height
}

/// Full-width emphasized box.
fn draw_callout(
    ui: &egui::Ui,
    spans: &[Span],
    theme: &Theme,
    rect: Rect,
    top: f32,
    opacity: f32,
    scale: f32,
) -> f32 {
    let pad = 18.0 * scale;
    let text_width = rect.width() - pad * 2.0;
    let color = Theme::with_opacity(theme.muted, opacity);
    let strong = Theme::with_opacity(theme.foreground, opacity);

    let job = spans_to_job(spans, theme.body_size * 0.9 * scale, color, strong, text_width);
    let galley = ui.painter().layout_job(job);
    let height = galley.rect.height() + pad * 2.0;

    let cell = Rect::from_min_size(
        Pos2::new(rect.left(), top),
        egui::vec2(rect.width(), height),
    );
    card_frame(ui, cell, theme, opacity, scale);
    ui.painter()
        .galley(Pos2::new(rect.left() + pad, top + pad), galley, color);

    height
}

/// Model catalogue cards: name + fit badge, summary, fact row, link.
fn draw_model_cards(
    ui: &egui::Ui,
    items: &[ModelCard],
    theme: &Theme,
    rect: Rect,
    top: f32,
    opacity: f32,
    scale: f32,
) -> f32 {
    let gap = 10.0 * scale;
    let pad = 14.0 * scale;
    let cell_width = (rect.width() - gap) / 2.0;
    let text_width = cell_width - pad * 2.0;

    let name_color = Theme::with_opacity(theme.foreground, opacity);
    let why_color = Theme::with_opacity(theme.muted, opacity * 0.9);
    let fact_color = Theme::with_opacity(theme.faint, opacity);

    let mut y = top;
    for row in items.chunks(2) {
        let galleys: Vec<_> = row
            .iter()
            .map(|m| {
                let name = ui.painter().layout_no_wrap(
                    m.name.clone(),
                    FontId::proportional(theme.body_size * 0.8 * scale),
                    name_color,
                );
                let why = ui.painter().layout(
                    m.why.clone(),
                    FontId::proportional(theme.small_size * 0.95 * scale),
                    why_color,
                    text_width,
                );
                let facts_text = m
                    .facts
                    .iter()
                    .map(|(label, value)| format!("{label}: {value}"))
                    .collect::<Vec<_>>()
                    .join(" \u{00b7} ");
                let facts = ui.painter().layout(
                    facts_text,
                    FontId::proportional(theme.tiny_size * scale),
                    fact_color,
                    text_width,
                );
                let link = ui.painter().layout_no_wrap(
                    "View on Hugging Face".to_string(),
                    FontId::proportional(theme.tiny_size * scale),
                    Theme::with_opacity(m.tint, opacity),
                );
                let text_h = name.rect.height()
                    + why.rect.height()
                    + facts.rect.height()
                    + link.rect.height()
                    + 18.0 * scale;
                (name, why, facts, link, text_h)
            })
            .collect();

        let row_height = galleys
            .iter()
            .map(|g| g.4 + pad * 2.0)
            .fold(0.0_f32, f32::max);

        for (col, ((name, why, facts, link, _), m)) in
            galleys.into_iter().zip(row.iter()).enumerate()
        {
            let x = rect.left() + col as f32 * (cell_width + gap);
            let cell = Rect::from_min_size(Pos2::new(x, y), egui::vec2(cell_width, row_height));

            ui.painter().rect_filled(
                cell,
                12.0 * scale,
                Theme::with_opacity(theme.panel, opacity),
            );
            ui.painter().rect_stroke(
                cell,
                12.0 * scale,
                Stroke::new(1.0, Theme::with_opacity(m.tint, opacity * 0.4)),
                StrokeKind::Inside,
            );

            let mut ty = y + pad;
            let name_h = name.rect.height();

            // Fit badge pill, right-aligned on the name row
            let badge = ui.painter().layout_no_wrap(
                m.fit.clone(),
                FontId::proportional(theme.tiny_size * scale),
                Theme::with_opacity(theme.muted, opacity),
            );
            let badge_pad = 8.0 * scale;
            let badge_rect = Rect::from_min_size(
                Pos2::new(
                    x + cell_width - pad - badge.rect.width() - badge_pad * 2.0,
                    ty - 2.0 * scale,
                ),
                egui::vec2(
                    badge.rect.width() + badge_pad * 2.0,
                    badge.rect.height() + 6.0 * scale,
                ),
            );
            ui.painter().rect_filled(
                badge_rect,
                badge_rect.height() / 2.0,
                Theme::with_opacity(theme.panel, opacity),
            );
            ui.painter().rect_stroke(
                badge_rect,
                badge_rect.height() / 2.0,
                Stroke::new(1.0, Theme::with_opacity(m.tint, opacity * 0.55)),
                StrokeKind::Inside,
            );
            ui.painter().galley(
                Pos2::new(badge_rect.left() + badge_pad, badge_rect.top() + 3.0 * scale),
                badge,
                Theme::with_opacity(theme.muted, opacity),
            );

            ui.painter().galley(Pos2::new(x + pad, ty), name, name_color);
            ty += name_h + 6.0 * scale;

            let why_h = why.rect.height();
            ui.painter().galley(Pos2::new(x + pad, ty), why, why_color);
            ty += why_h + 6.0 * scale;

            let facts_h = facts.rect.height();
            ui.painter().galley(Pos2::new(x + pad, ty), facts, fact_color);
            ty += facts_h + 6.0 * scale;

            ui.painter().galley(
                Pos2::new(x + pad, ty),
                link,
                Theme::with_opacity(m.tint, opacity),
            );
        }
        y += row_height + gap;
    }

    y - gap - top
}
