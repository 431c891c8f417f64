use std::time::Instant;

use eframe::egui;

use crate::config::Config;
use crate::controller::{self, Command, NavState};
use crate::deck::{self, Deck};
use crate::render::{self, document::PageCache};
use crate::theme::Theme;

const SLIDE_FADE_DURATION: f32 = 0.25;
const HEADER_HEIGHT: f32 = 72.0;
const FOOTER_HEIGHT: f32 = 52.0;
const GRID_COLS: usize = 3;

struct DeckApp {
    deck: Deck,
    nav: NavState,
    theme: Theme,
    cache: PageCache,
    /// When the visible slide last changed, for the entrance fade.
    slide_changed: Instant,
    grid_scroll: f32,
}

impl DeckApp {
    fn new(deck: Deck, cache: PageCache) -> Self {
        let nav = NavState::new(deck.len());
        Self {
            deck,
            nav,
            theme: Theme::deck(),
            cache,
            slide_changed: Instant::now(),
            grid_scroll: 0.0,
        }
    }

    fn slide_opacity(&self) -> f32 {
        let elapsed = self.slide_changed.elapsed().as_secs_f32();
        ease_in_out((elapsed / SLIDE_FADE_DURATION).clamp(0.0, 1.0))
    }

    /// Painter-drawn pill button; returns true when clicked.
    fn pill_button(
        &self,
        ui: &egui::Ui,
        rect: egui::Rect,
        label: &str,
        active: bool,
        scale: f32,
    ) -> bool {
        let id = ui.id().with(("pill", label));
        let response = ui.interact(rect, id, egui::Sense::click());

        let fill = if active {
            egui::Color32::from_rgba_unmultiplied(255, 255, 255, 38)
        } else if response.hovered() {
            egui::Color32::from_rgba_unmultiplied(255, 255, 255, 26)
        } else {
            egui::Color32::from_rgba_unmultiplied(255, 255, 255, 13)
        };
        ui.painter().rect_filled(rect, 12.0 * scale, fill);
        ui.painter().rect_stroke(
            rect,
            12.0 * scale,
            egui::Stroke::new(1.0, self.theme.border),
            egui::StrokeKind::Inside,
        );
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            label,
            egui::FontId::proportional(self.theme.small_size * scale),
            self.theme.muted,
        );
        response.clicked()
    }

    fn draw_header(
        &self,
        ui: &egui::Ui,
        rect: egui::Rect,
        scale: f32,
        pending: &mut Vec<Command>,
    ) {
        let theme = &self.theme;
        let pad = 20.0 * scale;

        // Deck badge
        let badge = egui::Rect::from_min_size(
            egui::Pos2::new(rect.left() + pad, rect.center().y - 18.0 * scale),
            egui::vec2(36.0 * scale, 36.0 * scale),
        );
        ui.painter().rect_filled(badge, 12.0 * scale, theme.frame_top);
        ui.painter().rect_stroke(
            badge,
            12.0 * scale,
            egui::Stroke::new(1.0, theme.border),
            egui::StrokeKind::Inside,
        );
        ui.painter().text(
            badge.center(),
            egui::Align2::CENTER_CENTER,
            "E",
            egui::FontId::proportional(18.0 * scale),
            theme.foreground,
        );

        let text_x = badge.right() + 12.0 * scale;
        ui.painter().text(
            egui::Pos2::new(text_x, rect.center().y - 16.0 * scale),
            egui::Align2::LEFT_TOP,
            &self.deck.title,
            egui::FontId::proportional(theme.body_size * 0.85 * scale),
            theme.foreground,
        );
        ui.painter().text(
            egui::Pos2::new(text_x, rect.center().y + 2.0 * scale),
            egui::Align2::LEFT_TOP,
            "\u{2190}/\u{2192} to navigate \u{00b7} O overview \u{00b7} P presenter",
            egui::FontId::proportional(theme.small_size * 0.9 * scale),
            theme.faint,
        );

        // Overlay toggle buttons, right-aligned
        let button_size = egui::vec2(104.0 * scale, 34.0 * scale);
        let notes_rect = egui::Rect::from_min_size(
            egui::Pos2::new(
                rect.right() - pad - button_size.x,
                rect.center().y - button_size.y / 2.0,
            ),
            button_size,
        );
        let overview_rect = notes_rect.translate(egui::vec2(-button_size.x - 8.0 * scale, 0.0));

        if self.pill_button(ui, overview_rect, "Overview", self.nav.overview, scale) {
            pending.push(Command::ToggleOverview);
        }
        if self.pill_button(ui, notes_rect, "Notes", self.nav.presenter, scale) {
            pending.push(Command::TogglePresenter);
        }

        ui.painter().line_segment(
            [rect.left_bottom(), rect.right_bottom()],
            egui::Stroke::new(1.0, theme.border),
        );
    }

    fn draw_overview(
        &mut self,
        ui: &egui::Ui,
        rect: egui::Rect,
        scale: f32,
        pending: &mut Vec<Command>,
    ) {
        let theme = &self.theme;
        let pad = 20.0 * scale;
        let gap = 14.0 * scale;
        let count = self.deck.len();
        let rows = count.div_ceil(GRID_COLS);

        let tile_width = (rect.width() - pad * 2.0 - gap * (GRID_COLS as f32 - 1.0))
            / GRID_COLS as f32;
        let tile_height = 118.0 * scale;
        let content_height = rows as f32 * (tile_height + gap) - gap;
        let overflow = (content_height - (rect.height() - pad * 2.0)).max(0.0);

        let wheel = ui.input(|i| i.smooth_scroll_delta.y);
        self.grid_scroll = (self.grid_scroll - wheel).clamp(0.0, overflow);

        for (i, slide) in self.deck.slides.iter().enumerate() {
            let col = i % GRID_COLS;
            let row = i / GRID_COLS;
            let tile = egui::Rect::from_min_size(
                egui::Pos2::new(
                    rect.left() + pad + col as f32 * (tile_width + gap),
                    rect.top() + pad + row as f32 * (tile_height + gap) - self.grid_scroll,
                ),
                egui::vec2(tile_width, tile_height),
            );
            if tile.bottom() < rect.top() || tile.top() > rect.bottom() {
                continue;
            }

            let id = ui.id().with(("overview-tile", i));
            let response = ui.interact(tile, id, egui::Sense::click());
            let fill = if response.hovered() {
                egui::Color32::from_rgba_unmultiplied(255, 255, 255, 26)
            } else {
                egui::Color32::from_rgba_unmultiplied(255, 255, 255, 13)
            };
            ui.painter().rect_filled(tile, 16.0 * scale, fill);
            ui.painter().rect_stroke(
                tile,
                16.0 * scale,
                egui::Stroke::new(1.0, theme.border),
                egui::StrokeKind::Inside,
            );
            if i == self.nav.index {
                ui.painter().rect_stroke(
                    tile.expand(2.0 * scale),
                    16.0 * scale,
                    egui::Stroke::new(2.0 * scale, Theme::with_opacity(theme.accent, 0.55)),
                    egui::StrokeKind::Outside,
                );
            }

            let tile_pad = 16.0 * scale;
            let mut ty = tile.top() + tile_pad;
            ui.painter().text(
                egui::Pos2::new(tile.left() + tile_pad, ty),
                egui::Align2::LEFT_TOP,
                format!("SLIDE {}", i + 1),
                egui::FontId::proportional(theme.tiny_size * scale),
                theme.faint,
            );
            ty += theme.tiny_size * 1.6 * scale;
            let title_galley = ui.painter().layout(
                slide.title.clone(),
                egui::FontId::proportional(theme.body_size * 0.85 * scale),
                theme.foreground,
                tile.width() - tile_pad * 2.0,
            );
            let title_h = title_galley.rect.height();
            ui.painter().galley(
                egui::Pos2::new(tile.left() + tile_pad, ty),
                title_galley,
                theme.foreground,
            );
            ty += title_h + 6.0 * scale;
            ui.painter().text(
                egui::Pos2::new(tile.left() + tile_pad, ty),
                egui::Align2::LEFT_TOP,
                &slide.kicker,
                egui::FontId::proportional(theme.small_size * 0.9 * scale),
                theme.faint,
            );

            if response.clicked() {
                pending.push(Command::GoTo(i));
                pending.push(Command::ToggleOverview);
            }
        }
    }

    fn draw_presenter_panel(&self, ui: &egui::Ui, rect: egui::Rect, scale: f32) {
        let theme = &self.theme;
        let pad = 20.0 * scale;
        let slide = &self.deck.slides[self.nav.index];

        let notes_height = rect.height() * 0.6;
        let notes_rect =
            egui::Rect::from_min_size(rect.min, egui::vec2(rect.width(), notes_height));
        ui.painter().rect_filled(notes_rect, 20.0 * scale, theme.panel);
        ui.painter().rect_stroke(
            notes_rect,
            20.0 * scale,
            egui::Stroke::new(1.0, theme.border),
            egui::StrokeKind::Inside,
        );

        ui.painter().text(
            egui::Pos2::new(notes_rect.left() + pad, notes_rect.top() + pad),
            egui::Align2::LEFT_TOP,
            "Presenter Notes",
            egui::FontId::proportional(theme.body_size * 0.85 * scale),
            theme.foreground,
        );
        ui.painter().text(
            egui::Pos2::new(notes_rect.right() - pad, notes_rect.top() + pad + 2.0 * scale),
            egui::Align2::RIGHT_TOP,
            format!("Slide {} / {}", self.nav.index + 1, self.deck.len()),
            egui::FontId::proportional(theme.small_size * scale),
            theme.faint,
        );

        let notes = slide.notes.as_deref().unwrap_or("-");
        let notes_galley = ui.painter().layout(
            notes.to_string(),
            egui::FontId::proportional(theme.body_size * 0.8 * scale),
            theme.muted,
            notes_rect.width() - pad * 2.0,
        );
        ui.painter().galley(
            egui::Pos2::new(notes_rect.left() + pad, notes_rect.top() + pad + 36.0 * scale),
            notes_galley,
            theme.muted,
        );

        // Quick prompts card below the notes
        let prompts_rect = egui::Rect::from_min_max(
            egui::Pos2::new(rect.left(), notes_rect.bottom() + 14.0 * scale),
            rect.right_bottom(),
        );
        ui.painter().rect_filled(prompts_rect, 20.0 * scale, theme.panel);
        ui.painter().rect_stroke(
            prompts_rect,
            20.0 * scale,
            egui::Stroke::new(1.0, theme.border),
            egui::StrokeKind::Inside,
        );
        ui.painter().text(
            egui::Pos2::new(prompts_rect.left() + pad, prompts_rect.top() + pad),
            egui::Align2::LEFT_TOP,
            "Quick prompts",
            egui::FontId::proportional(theme.body_size * 0.8 * scale),
            theme.foreground,
        );

        let mut py = prompts_rect.top() + pad + 30.0 * scale;
        for prompt in deck::content::QUICK_PROMPTS {
            let galley = ui.painter().layout(
                prompt.to_string(),
                egui::FontId::proportional(theme.small_size * 0.95 * scale),
                theme.muted,
                prompts_rect.width() - pad * 2.0 - 20.0 * scale,
            );
            let box_h = galley.rect.height() + 16.0 * scale;
            let prompt_box = egui::Rect::from_min_size(
                egui::Pos2::new(prompts_rect.left() + pad, py),
                egui::vec2(prompts_rect.width() - pad * 2.0, box_h),
            );
            if prompt_box.bottom() > prompts_rect.bottom() - pad {
                break;
            }
            ui.painter().rect_filled(prompt_box, 10.0 * scale, theme.panel);
            ui.painter().rect_stroke(
                prompt_box,
                10.0 * scale,
                egui::Stroke::new(1.0, theme.border),
                egui::StrokeKind::Inside,
            );
            ui.painter().galley(
                egui::Pos2::new(prompt_box.left() + 10.0 * scale, prompt_box.top() + 8.0 * scale),
                galley,
                theme.muted,
            );
            py += box_h + 8.0 * scale;
        }
    }

    fn draw_slide_view(
        &self,
        ui: &egui::Ui,
        ctx: &egui::Context,
        rect: egui::Rect,
        scale: f32,
        pending: &mut Vec<Command>,
    ) {
        let theme = &self.theme;
        let pad = 20.0 * scale;
        let slide = &self.deck.slides[self.nav.index];

        // Presenter mode narrows the stage and hangs the notes panel beside it
        let stage_rect = if self.nav.presenter {
            egui::Rect::from_min_max(
                rect.min,
                egui::Pos2::new(rect.left() + rect.width() * 0.62, rect.bottom()),
            )
        } else {
            rect
        };

        let footer_h = FOOTER_HEIGHT * scale;
        let frame_area = egui::Rect::from_min_max(
            egui::Pos2::new(stage_rect.left() + pad, stage_rect.top() + pad),
            egui::Pos2::new(stage_rect.right() - pad, stage_rect.bottom() - footer_h - pad),
        );

        // 16:9 frame fitted into the stage
        let frame_width = frame_area
            .width()
            .min(frame_area.height() * 16.0 / 9.0)
            .max(1.0);
        let frame_height = frame_width * 9.0 / 16.0;
        let frame_rect = egui::Rect::from_min_size(
            egui::Pos2::new(
                frame_area.center().x - frame_width / 2.0,
                frame_area.top(),
            ),
            egui::vec2(frame_width, frame_height),
        );

        // Frame backdrop: dark fill with a faint top sheen
        ui.painter()
            .rect_filled(frame_rect, 24.0 * scale, theme.frame_bottom);
        draw_vertical_sheen(ui, frame_rect.shrink(1.0), theme.frame_top);
        ui.painter().rect_stroke(
            frame_rect,
            24.0 * scale,
            egui::Stroke::new(1.0, theme.border),
            egui::StrokeKind::Inside,
        );

        let opacity = self.slide_opacity();
        let inner = frame_rect.shrink(26.0 * scale);
        let inner_scale = (inner.width() / 1280.0).min(inner.height() / 720.0);
        let anim = Some(ui.input(|i| i.time) as f32);
        render::render_slide(
            ui,
            slide,
            self.nav.index,
            theme,
            &self.cache,
            inner,
            opacity,
            anim,
            inner_scale.max(0.1),
        );
        if opacity < 1.0 || slide.graphic.is_some() {
            ctx.request_repaint();
        }

        // Footer: prev/next, progress dots, counter
        let footer_top = frame_rect.bottom() + 14.0 * scale;
        let button_size = egui::vec2(78.0 * scale, 32.0 * scale);
        let prev_rect = egui::Rect::from_min_size(
            egui::Pos2::new(frame_rect.left(), footer_top),
            button_size,
        );
        let next_rect = prev_rect.translate(egui::vec2(button_size.x + 8.0 * scale, 0.0));
        if self.pill_button(ui, prev_rect, "\u{2039} Prev", false, scale) {
            pending.push(Command::Previous);
        }
        if self.pill_button(ui, next_rect, "Next \u{203a}", false, scale) {
            pending.push(Command::Next);
        }

        let count = self.deck.len();
        let dot_gap = 13.0 * scale;
        let dots_width = dot_gap * (count as f32 - 1.0);
        let dots_left = frame_rect.center().x - dots_width / 2.0;
        let dots_y = footer_top + button_size.y / 2.0;
        for i in 0..count {
            let center = egui::Pos2::new(dots_left + i as f32 * dot_gap, dots_y);
            let hit = egui::Rect::from_center_size(center, egui::vec2(dot_gap, 16.0 * scale));
            let id = ui.id().with(("dot", i));
            let response = ui.interact(hit, id, egui::Sense::click());
            let radius = 3.5 * scale;
            if i == self.nav.index {
                ui.painter()
                    .circle_stroke(center, radius + 2.0 * scale, egui::Stroke::new(1.0, theme.foreground));
                ui.painter().circle_filled(center, radius * 0.7, theme.foreground);
            } else {
                let color = if response.hovered() {
                    theme.muted
                } else {
                    egui::Color32::from_rgba_unmultiplied(255, 255, 255, 102)
                };
                ui.painter().circle_stroke(center, radius, egui::Stroke::new(1.0, color));
            }
            if response.clicked() {
                pending.push(Command::GoTo(i));
            }
        }

        ui.painter().text(
            egui::Pos2::new(frame_rect.right(), dots_y),
            egui::Align2::RIGHT_CENTER,
            format!("{} / {}", self.nav.index + 1, count),
            egui::FontId::proportional(theme.small_size * scale),
            theme.faint,
        );

        if self.nav.presenter {
            let panel_rect = egui::Rect::from_min_max(
                egui::Pos2::new(stage_rect.right() + pad, rect.top() + pad),
                egui::Pos2::new(rect.right() - pad, rect.bottom() - pad),
            );
            if panel_rect.width() > 60.0 {
                self.draw_presenter_panel(ui, panel_rect, scale);
            }
        }
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut close = false;
        let mut pressed: Vec<egui::Key> = Vec::new();
        ctx.input(|i| {
            if i.key_pressed(egui::Key::Q) {
                close = true;
            }
            for key in controller::MAPPED_KEYS {
                if i.key_pressed(key) {
                    pressed.push(key);
                }
            }
        });

        // Keyboard is ignored while a text widget holds focus
        let text_focus = ctx.wants_keyboard_input();
        if close && !text_focus {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }
        let mut pending = controller::commands_for_frame(text_focus, &pressed);

        let bg = self.theme.background;
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                ui.painter().rect_filled(rect, 0.0, bg);

                let scale = ((rect.width() / 1280.0).min(rect.height() / 800.0)).max(0.1);

                let header_rect = egui::Rect::from_min_size(
                    rect.min,
                    egui::vec2(rect.width(), HEADER_HEIGHT * scale),
                );
                self.draw_header(ui, header_rect, scale, &mut pending);

                let content_rect =
                    egui::Rect::from_min_max(header_rect.left_bottom(), rect.max);
                if self.nav.overview {
                    self.draw_overview(ui, content_rect, scale, &mut pending);
                } else {
                    self.draw_slide_view(ui, ctx, content_rect, scale, &mut pending);
                }
            });

        let prev_index = self.nav.index;
        for cmd in pending.drain(..) {
            self.nav.apply(cmd);
        }
        if self.nav.index != prev_index {
            self.slide_changed = Instant::now();
            ctx.request_repaint();
        }
    }
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Faint top-to-transparent sheen over the slide frame.
fn draw_vertical_sheen(ui: &egui::Ui, rect: egui::Rect, top: egui::Color32) {
    let transparent = egui::Color32::from_rgba_unmultiplied(top.r(), top.g(), top.b(), 0);
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(rect.left_bottom(), transparent);
    mesh.colored_vertex(rect.right_bottom(), transparent);
    mesh.add_triangle(0, 2, 1);
    mesh.add_triangle(1, 2, 3);
    ui.painter().add(egui::Shape::mesh(mesh));
}

/// Resolve the starting slide and overview flag. CLI flags win over the
/// configured start mode; slide numbers are 1-indexed on both paths.
fn resolve_start(
    config_start: Option<&str>,
    start_slide: Option<usize>,
    start_overview: bool,
) -> (usize, bool) {
    if start_overview {
        return (start_slide.map_or(0, |s| s.saturating_sub(1)), true);
    }
    if let Some(s) = start_slide {
        return (s.saturating_sub(1), false);
    }
    match config_start {
        Some("overview") => (0, true),
        Some(n) => (n.parse::<usize>().map_or(0, |s| s.saturating_sub(1)), false),
        None => (0, false),
    }
}

/// Launch the interactive deck.
pub fn run(windowed: bool, start_slide: Option<usize>, start_overview: bool) -> anyhow::Result<()> {
    let deck = deck::build();
    if deck.is_empty() {
        anyhow::bail!("Deck has no slides");
    }

    let config = Config::load_or_default();
    let (initial_slide, initial_overview) = resolve_start(
        config
            .defaults
            .as_ref()
            .and_then(|d| d.start_mode.as_deref()),
        start_slide,
        start_overview,
    );
    let initial_slide = initial_slide.min(deck.last_index());

    let cache = PageCache::new(config.pages_dir());
    let title = deck.title.clone();

    let viewport = if windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title(&title)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(&title)
    };

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| {
            let mut app = DeckApp::new(deck, cache);
            app.nav.go_to(initial_slide);
            app.nav.overview = initial_overview;
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags_override_config_start() {
        assert_eq!(resolve_start(Some("overview"), Some(19), false), (18, false));
        assert_eq!(resolve_start(Some("7"), None, true), (0, true));
        assert_eq!(resolve_start(Some("7"), Some(3), true), (2, true));
    }

    #[test]
    fn test_config_start_modes() {
        assert_eq!(resolve_start(None, None, false), (0, false));
        assert_eq!(resolve_start(Some("first"), None, false), (0, false));
        assert_eq!(resolve_start(Some("overview"), None, false), (0, true));
        assert_eq!(resolve_start(Some("12"), None, false), (11, false));
        assert_eq!(resolve_start(Some("garbled"), None, false), (0, false));
    }

    #[test]
    fn test_slide_numbers_are_one_indexed() {
        assert_eq!(resolve_start(None, Some(1), false), (0, false));
        assert_eq!(resolve_start(None, Some(0), false), (0, false));
    }

    #[test]
    fn test_ease_in_out_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
    }
}
