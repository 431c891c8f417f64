pub mod blocks;
pub mod document;
pub mod frame;
pub mod graphics;

use eframe::egui::{self, Rect};

use crate::deck::Slide;
use crate::theme::Theme;

use document::PageCache;

/// Render one slide into `rect`.
///
/// Document slides embed their page in a full-bleed viewer; everything else
/// composes kicker/heading/body with an optional graphic panel. `anim` is
/// the frame clock in seconds; pass `None` to render at rest (export).
#[allow(clippy::too_many_arguments)]
pub fn render_slide(
    ui: &egui::Ui,
    slide: &Slide,
    index: usize,
    theme: &Theme,
    cache: &PageCache,
    rect: Rect,
    opacity: f32,
    anim: Option<f32>,
    scale: f32,
) {
    match slide.doc_page {
        Some(page) => document::render_page(ui, cache, page, theme, rect, opacity, scale),
        None => frame::render(ui, slide, index, theme, rect, opacity, anim, scale),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{self, GraphicKind};
    use eframe::egui::{Pos2, pos2, vec2};
    use std::path::PathBuf;

    fn headless(run: impl FnMut(&egui::Context)) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), run);
    }

    #[test]
    fn test_static_render_of_every_slide() {
        // Export-style pass: every slide at rest, no navigation state involved.
        let deck = deck::build();
        let theme = Theme::deck();
        let cache = PageCache::new(PathBuf::from("assets/ecosystem"));
        headless(|ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let rect = Rect::from_min_size(Pos2::ZERO, vec2(1280.0, 720.0));
                for (i, slide) in deck.slides.iter().enumerate() {
                    render_slide(ui, slide, i, &theme, &cache, rect, 1.0, None, 1.0);
                }
            });
        });
    }

    #[test]
    fn test_every_graphic_panel_draws_at_rest() {
        let theme = Theme::deck();
        headless(|ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let rect = Rect::from_min_size(pos2(10.0, 10.0), vec2(320.0, 420.0));
                for kind in GraphicKind::ALL {
                    graphics::draw_panel(ui, kind, &theme, rect, 1.0, None, 1.0);
                }
            });
        });
    }

    #[test]
    fn test_graphic_panels_animate() {
        let theme = Theme::deck();
        headless(|ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let rect = Rect::from_min_size(pos2(10.0, 10.0), vec2(320.0, 420.0));
                for kind in GraphicKind::ALL {
                    for t in [0.0, 0.4, 1.3, 7.7] {
                        graphics::draw_panel(ui, kind, &theme, rect, 1.0, Some(t), 1.0);
                    }
                }
            });
        });
    }

    #[test]
    fn test_missing_page_renders_placeholder() {
        let theme = Theme::deck();
        let cache = PageCache::new(PathBuf::from("/nonexistent"));
        headless(|ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let rect = Rect::from_min_size(Pos2::ZERO, vec2(1280.0, 720.0));
                document::render_page(ui, &cache, 7, &theme, rect, 1.0, 1.0);
            });
        });
    }
}
