use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use eframe::egui::{self, Color32, FontId, Pos2, Rect, Stroke, StrokeKind, TextureHandle};

use crate::deck::DOC_TITLE;
use crate::theme::Theme;

/// Lazily loaded page images for the embedded document, keyed by 1-based
/// page number. A page that fails to load is cached as absent so the lookup
/// does not retry every frame.
pub struct PageCache {
    pages_dir: PathBuf,
    textures: RefCell<HashMap<u32, Option<TextureHandle>>>,
}

impl PageCache {
    pub fn new(pages_dir: PathBuf) -> Self {
        Self {
            pages_dir,
            textures: RefCell::new(HashMap::new()),
        }
    }

    pub fn page_path(&self, page: u32) -> PathBuf {
        self.pages_dir.join(format!("page-{page:02}.png"))
    }

    fn load(&self, ctx: &egui::Context, page: u32) -> Option<TextureHandle> {
        let path = self.page_path(page);
        let img = image::open(&path).ok()?.into_rgba8();
        let size = [img.width() as usize, img.height() as usize];
        let pixels = img.into_raw();
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &pixels);
        Some(ctx.load_texture(
            format!("doc-page-{page}"),
            color_image,
            egui::TextureOptions::LINEAR,
        ))
    }

    pub fn texture(&self, ctx: &egui::Context, page: u32) -> Option<TextureHandle> {
        self.textures
            .borrow_mut()
            .entry(page)
            .or_insert_with(|| self.load(ctx, page))
            .clone()
    }
}

/// Full-bleed embedded viewer for one page of the document. A missing page
/// image paints a labelled placeholder instead of failing.
pub fn render_page(
    ui: &egui::Ui,
    cache: &PageCache,
    page: u32,
    theme: &Theme,
    rect: Rect,
    opacity: f32,
    scale: f32,
) {
    ui.painter().rect_filled(
        rect,
        16.0 * scale,
        Theme::with_opacity(theme.viewer_background, opacity),
    );
    ui.painter().rect_stroke(
        rect,
        16.0 * scale,
        Stroke::new(1.0, Theme::with_opacity(theme.border, opacity)),
        StrokeKind::Inside,
    );

    if let Some(texture) = cache.texture(ui.ctx(), page) {
        // Fit the page width, preserving aspect, centered vertically
        let tex_size = texture.size_vec2();
        let inner = rect.shrink(8.0 * scale);
        let fit_scale = (inner.width() / tex_size.x).min(inner.height() / tex_size.y);
        let draw_size = tex_size * fit_scale;
        let draw_rect = Rect::from_center_size(inner.center(), draw_size);
        ui.painter().image(
            texture.id(),
            draw_rect,
            Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
            Theme::with_opacity(Color32::WHITE, opacity),
        );
        return;
    }

    let ink = Theme::with_opacity(Color32::from_rgb(0x44, 0x44, 0x4C), opacity);
    let faint = Theme::with_opacity(Color32::from_rgb(0x8A, 0x8A, 0x94), opacity);
    ui.painter().text(
        rect.center() - egui::vec2(0.0, 14.0 * scale),
        egui::Align2::CENTER_CENTER,
        DOC_TITLE,
        FontId::proportional(24.0 * scale),
        ink,
    );
    ui.painter().text(
        rect.center() + egui::vec2(0.0, 14.0 * scale),
        egui::Align2::CENTER_CENTER,
        format!("page {page}"),
        FontId::proportional(16.0 * scale),
        faint,
    );
    ui.painter().text(
        Pos2::new(rect.center().x, rect.bottom() - 20.0 * scale),
        egui::Align2::CENTER_CENTER,
        cache.page_path(page).display().to_string(),
        FontId::monospace(10.0 * scale),
        Theme::with_opacity(Color32::from_rgb(0x8A, 0x8A, 0x94), opacity * 0.7),
    );
}
