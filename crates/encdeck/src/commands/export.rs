use std::path::{Path, PathBuf};

use eframe::egui;

use crate::config::Config;
use crate::deck::{self, Deck};
use crate::render::{self, document::PageCache};
use crate::theme::Theme;

/// Renders each slide once, screenshots it, and closes. Animations are at
/// rest and navigation state is never consulted.
struct ExportApp {
    deck: Deck,
    theme: Theme,
    cache: PageCache,
    output_dir: PathBuf,
    current_slide: usize,
    screenshot_requested: bool,
    done: bool,
}

impl ExportApp {
    fn new(deck: Deck, cache: PageCache, output_dir: PathBuf) -> Self {
        Self {
            deck,
            theme: Theme::deck(),
            cache,
            output_dir,
            current_slide: 0,
            screenshot_requested: false,
            done: false,
        }
    }
}

impl eframe::App for ExportApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.done {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        // Check for screenshot result from previous frame
        let mut got_screenshot = false;
        ctx.input(|i| {
            for event in &i.events {
                if let egui::Event::Screenshot { image, .. } = event {
                    let filename = format!("slide-{:02}.png", self.current_slide + 1);
                    let path = self.output_dir.join(&filename);
                    save_color_image(image, &path);
                    eprintln!("  Saved {filename}");
                    got_screenshot = true;
                }
            }
        });

        if got_screenshot {
            self.screenshot_requested = false;
            self.current_slide += 1;
            if self.current_slide >= self.deck.len() {
                self.done = true;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }
        }

        let bg = self.theme.background;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                ui.painter().rect_filled(rect, 0.0, bg);

                let scale = (rect.width() / 1280.0).min(rect.height() / 720.0);

                let idx = self.current_slide;
                if let Some(slide) = self.deck.slides.get(idx) {
                    render::render_slide(
                        ui,
                        slide,
                        idx,
                        &self.theme,
                        &self.cache,
                        rect,
                        1.0,
                        None, // no animation in export
                        scale,
                    );
                }
            });

        // Request screenshot after rendering (will arrive next frame)
        if !self.screenshot_requested {
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
            self.screenshot_requested = true;
        }

        ctx.request_repaint();
    }
}

fn save_color_image(image: &egui::ColorImage, path: &Path) {
    let width = image.width() as u32;
    let height = image.height() as u32;
    let pixels: Vec<u8> = image
        .pixels
        .iter()
        .flat_map(|c| [c.r(), c.g(), c.b(), c.a()])
        .collect();

    image::save_buffer(path, &pixels, width, height, image::ColorType::Rgba8)
        .unwrap_or_else(|e| eprintln!("Failed to save {}: {e}", path.display()));
}

pub fn run(output_dir: PathBuf, width: u32, height: u32) -> anyhow::Result<()> {
    let deck = deck::build();
    if deck.is_empty() {
        anyhow::bail!("Deck has no slides");
    }

    std::fs::create_dir_all(&output_dir)?;

    eprintln!(
        "Exporting {} slides to {} ({}x{})",
        deck.len(),
        output_dir.display(),
        width,
        height,
    );

    let config = Config::load_or_default();
    let cache = PageCache::new(config.pages_dir());
    let title = deck.title.clone();

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([width as f32, height as f32])
        .with_title(&title)
        .with_decorations(false);

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(ExportApp::new(deck, cache, output_dir)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    eprintln!("Export complete.");
    Ok(())
}
