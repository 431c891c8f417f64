use eframe::egui::{self, Color32, FontId, Pos2, Rect, Shape, Stroke, StrokeKind};

use crate::deck::GraphicKind;
use crate::theme::Theme;

// All panels are authored in a 280x170 canvas and scaled to fit.
const VIEW_W: f32 = 280.0;
const VIEW_H: f32 = 170.0;

impl GraphicKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::SharedCore => "Shared Representation",
            Self::DecisionSurface => "Decision Surface",
            Self::FitMap => "Model Fit Map",
            Self::ReadinessRadar => "Local Readiness Radar",
            Self::MemoryGraph => "Memory Graph",
            Self::CompanionOrbit => "Companion Orbit",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Self::SharedCore => "Inputs and outputs through one model core",
            Self::DecisionSurface => "Control, cost, and latency",
            Self::FitMap => "Demo reliability vs footprint",
            Self::ReadinessRadar => "What to validate first",
            Self::MemoryGraph => "Episodes linked into useful context",
            Self::CompanionOrbit => "From query engine to lived memory",
        }
    }
}

/// Looping opacity/scale pulse. With no clock the panel rests at `lo`.
fn pulse(anim: Option<f32>, period: f32, delay: f32, lo: f32, hi: f32) -> f32 {
    match anim {
        None => lo,
        Some(t) => {
            let phase = (t - delay).rem_euclid(period) / period;
            lo + (hi - lo) * 0.5 * (1.0 - (phase * std::f32::consts::TAU).cos())
        }
    }
}

/// One-shot entrance progress in 0..=1. With no clock the panel rests fully
/// grown.
fn grown(anim: Option<f32>, duration: f32, delay: f32) -> f32 {
    match anim {
        None => 1.0,
        Some(t) => ((t - delay) / duration).clamp(0.0, 1.0),
    }
}

fn cubic(p0: Pos2, p1: Pos2, p2: Pos2, p3: Pos2, t: f32) -> Pos2 {
    let u = 1.0 - t;
    Pos2::new(
        u * u * u * p0.x + 3.0 * u * u * t * p1.x + 3.0 * u * t * t * p2.x + t * t * t * p3.x,
        u * u * u * p0.y + 3.0 * u * u * t * p1.y + 3.0 * u * t * t * p2.y + t * t * t * p3.y,
    )
}

/// Sample the leading `upto` fraction of a cubic segment into a polyline.
fn sample_cubic(p0: Pos2, p1: Pos2, p2: Pos2, p3: Pos2, upto: f32) -> Vec<Pos2> {
    let steps = 24;
    (0..=steps)
        .map(|i| cubic(p0, p1, p2, p3, upto * i as f32 / steps as f32))
        .collect()
}

/// Maps panel-local 280x170 coordinates into a screen rect.
struct Canvas<'a> {
    ui: &'a egui::Ui,
    origin: Pos2,
    sx: f32,
    sy: f32,
}

impl<'a> Canvas<'a> {
    fn new(ui: &'a egui::Ui, rect: Rect) -> Self {
        Self {
            ui,
            origin: rect.min,
            sx: rect.width() / VIEW_W,
            sy: rect.height() / VIEW_H,
        }
    }

    fn pt(&self, x: f32, y: f32) -> Pos2 {
        Pos2::new(self.origin.x + x * self.sx, self.origin.y + y * self.sy)
    }

    fn len(&self, v: f32) -> f32 {
        v * self.sx.min(self.sy)
    }

    fn rect(&self, x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::from_min_size(self.pt(x, y), egui::vec2(w * self.sx, h * self.sy))
    }

    fn box_frame(&self, r: Rect, radius: f32, fill: Color32, stroke: Color32) {
        self.ui.painter().rect_filled(r, self.len(radius), fill);
        self.ui.painter().rect_stroke(
            r,
            self.len(radius),
            Stroke::new(1.0, stroke),
            StrokeKind::Inside,
        );
    }

    fn line(&self, points: Vec<Pos2>, width: f32, color: Color32) {
        self.ui
            .painter()
            .add(Shape::line(points, Stroke::new(self.len(width), color)));
    }

    fn text(&self, x: f32, y: f32, text: &str, size: f32, color: Color32) {
        self.ui.painter().text(
            self.pt(x, y),
            egui::Align2::LEFT_TOP,
            text,
            FontId::proportional(self.len(size)),
            color,
        );
    }

    fn text_centered(&self, x: f32, y: f32, text: &str, size: f32, color: Color32) {
        self.ui.painter().text(
            self.pt(x, y),
            egui::Align2::CENTER_TOP,
            text,
            FontId::proportional(self.len(size)),
            color,
        );
    }

    fn text_right(&self, x: f32, y: f32, text: &str, size: f32, color: Color32) {
        self.ui.painter().text(
            self.pt(x, y),
            egui::Align2::RIGHT_TOP,
            text,
            FontId::proportional(self.len(size)),
            color,
        );
    }

    /// Arrow shaft plus filled head, pointing from `from` to `to`.
    fn arrow(&self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        let delta = to - from;
        let len = delta.length();
        if len < 1.0 {
            return;
        }
        let dir = delta / len;
        let perp = egui::vec2(-dir.y, dir.x);
        let head = self.len(5.0);
        let p1 = to - dir * head + perp * head * 0.5;
        let p2 = to - dir * head - perp * head * 0.5;
        self.ui.painter().line_segment(
            [from, to - dir * head * 0.6],
            Stroke::new(self.len(width), color),
        );
        self.ui
            .painter()
            .add(Shape::convex_polygon(vec![to, p1, p2], color, Stroke::NONE));
    }

    /// Fake radial glow with concentric translucent discs.
    fn glow(&self, center: Pos2, radius: f32, color: Color32) {
        for (factor, alpha) in [(1.0, 0.10), (0.7, 0.14), (0.4, 0.18)] {
            self.ui.painter().circle_filled(
                center,
                self.len(radius) * factor,
                Theme::with_opacity(color, alpha),
            );
        }
    }
}

/// Paint one decorative panel: labelled shell plus the vector canvas.
/// `anim` is seconds on the frame clock; `None` renders the panel at rest.
pub fn draw_panel(
    ui: &egui::Ui,
    kind: GraphicKind,
    theme: &Theme,
    rect: Rect,
    opacity: f32,
    anim: Option<f32>,
    scale: f32,
) {
    let pad = 14.0 * scale;

    ui.painter().rect_filled(
        rect,
        18.0 * scale,
        Theme::with_opacity(theme.panel, opacity),
    );
    ui.painter().rect_stroke(
        rect,
        18.0 * scale,
        Stroke::new(1.0, Theme::with_opacity(theme.border, opacity)),
        StrokeKind::Inside,
    );

    let mut y = rect.top() + pad;
    ui.painter().text(
        Pos2::new(rect.left() + pad, y),
        egui::Align2::LEFT_TOP,
        "VISUAL LAYER",
        FontId::proportional(theme.tiny_size * 0.85 * scale),
        Theme::with_opacity(theme.faint, opacity * 0.75),
    );
    y += theme.tiny_size * scale;
    ui.painter().text(
        Pos2::new(rect.left() + pad, y),
        egui::Align2::LEFT_TOP,
        kind.title(),
        FontId::proportional(theme.small_size * 1.1 * scale),
        Theme::with_opacity(theme.foreground, opacity * 0.9),
    );
    y += theme.small_size * 1.5 * scale;
    ui.painter().text(
        Pos2::new(rect.left() + pad, y),
        egui::Align2::LEFT_TOP,
        kind.subtitle(),
        FontId::proportional(theme.tiny_size * scale),
        Theme::with_opacity(theme.faint, opacity),
    );
    y += theme.tiny_size * 1.8 * scale;

    let canvas_rect = Rect::from_min_max(
        Pos2::new(rect.left() + pad, y),
        Pos2::new(rect.right() - pad, rect.bottom() - pad),
    );
    if canvas_rect.width() < 10.0 || canvas_rect.height() < 10.0 {
        return;
    }

    // Canvas background
    ui.painter().rect_filled(
        canvas_rect,
        10.0 * scale,
        Theme::with_opacity(Color32::from_rgb(0x02, 0x08, 0x16), opacity * 0.9),
    );

    let canvas = Canvas::new(ui, canvas_rect);
    match kind {
        GraphicKind::SharedCore => shared_core(&canvas, opacity, anim),
        GraphicKind::DecisionSurface => decision_surface(&canvas, opacity, anim),
        GraphicKind::FitMap => fit_map(&canvas, opacity, anim),
        GraphicKind::ReadinessRadar => readiness_radar(&canvas, opacity, anim),
        GraphicKind::MemoryGraph => memory_graph(&canvas, opacity, anim),
        GraphicKind::CompanionOrbit => companion_orbit(&canvas, opacity, anim),
    }
}

fn node_fill(opacity: f32) -> Color32 {
    Theme::with_opacity(Color32::from_rgb(0x08, 0x13, 0x27), opacity * 0.9)
}

fn node_stroke(opacity: f32) -> Color32 {
    Theme::with_opacity(Color32::from_rgb(0x88, 0xA7, 0xC2), opacity * 0.42)
}

fn label_bright(opacity: f32) -> Color32 {
    Theme::with_opacity(Color32::from_rgb(0xE5, 0xEE, 0xF9), opacity * 0.94)
}

fn label_dim(opacity: f32) -> Color32 {
    Theme::with_opacity(Color32::from_rgb(0xB3, 0xC3, 0xD4), opacity * 0.7)
}

/// Input and output modality boxes flowing through a shared model core.
fn shared_core(c: &Canvas, opacity: f32, anim: Option<f32>) {
    let inputs = [
        ("Image", "screenshots", 30.0),
        ("Text", "prompts", 68.0),
        ("Video", "events", 106.0),
    ];
    let outputs = [
        ("Caption", "summaries", 30.0),
        ("Speech", "audio reply", 68.0),
        ("Action", "decisions", 106.0),
    ];

    c.text(10.0, 10.0, "Inputs", 8.5, label_dim(opacity));
    c.text_right(270.0, 10.0, "Outputs", 8.5, label_dim(opacity));

    // Core: glow plus a cloud built from overlapping discs
    let glow_color = Color32::from_rgb(0x67, 0xE8, 0xF9);
    c.glow(c.pt(140.0, 84.0), 44.0, Theme::with_opacity(glow_color, opacity));

    let cloud = node_fill(opacity);
    let cloud_edge = Theme::with_opacity(Color32::from_rgb(0x94, 0xB6, 0xCF), opacity * 0.76);
    for (x, y, r) in [
        (118.0, 86.0, 16.0),
        (136.0, 76.0, 20.0),
        (158.0, 82.0, 16.0),
        (148.0, 92.0, 14.0),
    ] {
        c.ui.painter().circle_filled(c.pt(x, y), c.len(r), cloud);
    }
    c.ui
        .painter()
        .rect_filled(c.rect(112.0, 86.0, 56.0, 16.0), c.len(8.0), cloud);
    c.ui.painter().circle_stroke(
        c.pt(140.0, 84.0),
        c.len(34.0),
        Stroke::new(1.0, Theme::with_opacity(cloud_edge, 0.35)),
    );
    c.text_centered(140.0, 76.0, "Multimodal", 9.0, label_bright(opacity));
    c.text_centered(140.0, 87.0, "Processing", 9.0, label_bright(opacity));

    let arrow_base = Color32::from_rgb(0xA0, 0xB6, 0xCD);
    for (i, (name, detail, y)) in inputs.iter().enumerate() {
        c.box_frame(
            c.rect(10.0, *y, 34.0, 28.0),
            6.0,
            node_fill(opacity),
            node_stroke(opacity),
        );
        modality_icon(c, name, 10.0, *y, opacity);
        c.text(48.0, y + 3.0, name, 8.0, label_bright(opacity));
        c.text(48.0, y + 13.0, detail, 6.6, label_dim(opacity));

        let a = pulse(anim, 2.2, i as f32 * 0.22, 0.32, 0.74);
        c.arrow(
            c.pt(82.0, y + 14.0),
            c.pt(106.0, y + 14.0),
            1.2,
            Theme::with_opacity(arrow_base, opacity * a),
        );
    }

    for (i, (name, detail, y)) in outputs.iter().enumerate() {
        c.box_frame(
            c.rect(236.0, *y, 34.0, 28.0),
            6.0,
            node_fill(opacity),
            node_stroke(opacity),
        );
        modality_icon(c, name, 236.0, *y, opacity);
        c.text_right(196.0, y + 3.0, name, 8.0, label_bright(opacity));
        c.text_right(196.0, y + 13.0, detail, 6.6, label_dim(opacity));

        let a = pulse(anim, 2.2, 0.35 + i as f32 * 0.22, 0.32, 0.74);
        c.arrow(
            c.pt(200.0, y + 14.0),
            c.pt(234.0, y + 14.0),
            1.2,
            Theme::with_opacity(arrow_base, opacity * a),
        );
    }

    c.text_centered(
        140.0,
        155.0,
        "Shared multimodal representation",
        8.0,
        label_dim(opacity),
    );
}

/// Tiny line-art glyph inside a modality box.
fn modality_icon(c: &Canvas, kind: &str, x: f32, y: f32, opacity: f32) {
    let stroke = Theme::with_opacity(Color32::from_rgb(0xC3, 0xD0, 0xE0), opacity * 0.82);
    match kind {
        "Image" => {
            c.ui.painter().rect_stroke(
                c.rect(x + 6.0, y + 7.0, 20.0, 14.0),
                c.len(2.0),
                Stroke::new(1.0, stroke),
                StrokeKind::Inside,
            );
            c.ui
                .painter()
                .circle_filled(c.pt(x + 22.0, y + 11.0), c.len(2.2), stroke);
            c.line(
                vec![
                    c.pt(x + 8.0, y + 19.0),
                    c.pt(x + 13.0, y + 14.0),
                    c.pt(x + 17.0, y + 17.0),
                    c.pt(x + 21.0, y + 12.0),
                    c.pt(x + 26.0, y + 19.0),
                ],
                1.0,
                stroke,
            );
        }
        "Text" | "Caption" => {
            for (dy, w) in [(10.0, 18.0), (15.0, 16.0), (20.0, 13.0)] {
                c.line(
                    vec![c.pt(x + 7.0, y + dy), c.pt(x + 7.0 + w, y + dy)],
                    1.0,
                    stroke,
                );
            }
        }
        "Video" => {
            c.ui.painter().rect_stroke(
                c.rect(x + 6.0, y + 7.0, 20.0, 14.0),
                c.len(2.0),
                Stroke::new(1.0, stroke),
                StrokeKind::Inside,
            );
            c.ui.painter().add(Shape::convex_polygon(
                vec![
                    c.pt(x + 13.0, y + 11.0),
                    c.pt(x + 13.0, y + 17.0),
                    c.pt(x + 18.0, y + 14.0),
                ],
                stroke,
                Stroke::NONE,
            ));
        }
        "Speech" => {
            let wave: Vec<Pos2> = (0..=20)
                .map(|i| {
                    let fx = i as f32 / 20.0;
                    let fy = (fx * std::f32::consts::TAU * 2.0).sin() * (4.0 + 4.0 * fx);
                    c.pt(x + 7.0 + fx * 18.0, y + 15.0 + fy * 0.6)
                })
                .collect();
            c.line(wave, 1.0, stroke);
        }
        _ => {
            // Action: small figure
            c.ui
                .painter()
                .circle_stroke(c.pt(x + 16.0, y + 10.0), c.len(4.5), Stroke::new(1.0, stroke));
            c.line(
                vec![c.pt(x + 16.0, y + 14.0), c.pt(x + 16.0, y + 20.0)],
                1.0,
                stroke,
            );
            c.line(
                vec![
                    c.pt(x + 10.0, y + 23.0),
                    c.pt(x + 16.0, y + 17.0),
                    c.pt(x + 22.0, y + 23.0),
                ],
                1.0,
                stroke,
            );
        }
    }
}

/// Cloud and local chip side by side, linked by a pulsing arc.
fn decision_surface(c: &Canvas, opacity: f32, anim: Option<f32>) {
    c.box_frame(
        c.rect(18.0, 20.0, 108.0, 130.0),
        18.0,
        Theme::with_opacity(Color32::from_rgb(0x38, 0xBD, 0xF8), opacity * 0.12),
        Theme::with_opacity(Color32::from_rgb(0x7D, 0xD3, 0xFC), opacity * 0.45),
    );
    c.box_frame(
        c.rect(154.0, 20.0, 108.0, 130.0),
        18.0,
        Theme::with_opacity(Color32::from_rgb(0x22, 0xC5, 0x5E), opacity * 0.12),
        Theme::with_opacity(Color32::from_rgb(0x86, 0xEF, 0xAC), opacity * 0.45),
    );

    // Cloud glyph
    let cloud = Theme::with_opacity(Color32::from_rgb(0x0E, 0xA5, 0xE9), opacity * 0.4);
    for (x, y, r) in [(77.0, 70.0, 14.0), (95.0, 65.0, 16.0), (112.0, 74.0, 12.0)] {
        c.ui.painter().circle_filled(c.pt(x, y), c.len(r), cloud);
    }
    c.ui
        .painter()
        .rect_filled(c.rect(62.0, 70.0, 62.0, 16.0), c.len(8.0), cloud);

    // Chip glyph with pins
    let chip_edge = Theme::with_opacity(Color32::from_rgb(0x86, 0xEF, 0xAC), opacity * 0.6);
    c.box_frame(
        c.rect(179.0, 54.0, 56.0, 56.0),
        10.0,
        Theme::with_opacity(Color32::from_rgb(0x02, 0x06, 0x17), opacity * 0.75),
        chip_edge,
    );
    c.ui.painter().rect_stroke(
        c.rect(188.0, 63.0, 38.0, 38.0),
        c.len(6.0),
        Stroke::new(1.0, Theme::with_opacity(Color32::from_rgb(0xA7, 0xF3, 0xD0), opacity * 0.7)),
        StrokeKind::Inside,
    );
    let pin = Theme::with_opacity(Color32::from_rgb(0xA7, 0xF3, 0xD0), opacity * 0.65);
    for y in [73.0, 91.0, 109.0] {
        c.line(vec![c.pt(171.0, y), c.pt(179.0, y)], 2.0, pin);
        c.line(vec![c.pt(235.0, y), c.pt(243.0, y)], 2.0, pin);
    }

    // Link arc between the surfaces
    let reach = grown(anim, 2.2, 0.0).max(0.2);
    let a = pulse(anim, 2.2, 0.0, 0.25, 0.85);
    let arc = sample_cubic(
        c.pt(126.0, 85.0),
        c.pt(139.0, 75.0),
        c.pt(145.0, 75.0),
        c.pt(154.0, 85.0),
        reach,
    );
    c.line(arc, 2.0, Theme::with_opacity(Color32::WHITE, opacity * a.max(0.25)));

    c.text(
        41.0,
        130.0,
        "Cloud",
        10.0,
        Theme::with_opacity(Color32::from_rgb(0xBA, 0xE6, 0xFD), opacity * 0.9),
    );
    c.text(
        191.0,
        130.0,
        "Local",
        10.0,
        Theme::with_opacity(Color32::from_rgb(0xBB, 0xF7, 0xD0), opacity * 0.92),
    );
}

/// Horizontal score bars plus the evaluation tag grid.
fn fit_map(c: &Canvas, opacity: f32, anim: Option<f32>) {
    let rows = [
        ("LLaVA", 88.0, Color32::from_rgb(0xFB, 0x71, 0x85)),
        ("MiniCPM-V", 77.0, Color32::from_rgb(0x60, 0xA5, 0xFA)),
        ("Qwen-VL", 92.0, Color32::from_rgb(0xF5, 0x9E, 0x0B)),
        ("Gemma-V", 80.0, Color32::from_rgb(0x34, 0xD3, 0x99)),
    ];

    c.text(10.0, 6.0, "Practical local score", 8.0, label_dim(opacity));

    let track = Theme::with_opacity(Color32::WHITE, opacity * 0.1);
    let label = Theme::with_opacity(Color32::WHITE, opacity * 0.7);
    let left = 10.0;
    let width = 260.0;
    let mut y = 22.0;
    for (i, (name, value, color)) in rows.iter().enumerate() {
        c.text(left, y, name, 8.0, label);
        c.text_right(left + width, y, &format!("{value:.0}"), 8.0, label);
        y += 11.0;

        let bar = c.rect(left, y, width, 5.0);
        c.ui.painter().rect_filled(bar, c.len(2.5), track);
        // Bars grow in from a stub, staggered per row
        let fill_frac = 0.08 + (value / 100.0 - 0.08) * grown(anim, 0.9, i as f32 * 0.16);
        let fill = c.rect(left, y, width * fill_frac, 5.0);
        c.ui
            .painter()
            .rect_filled(fill, c.len(2.5), Theme::with_opacity(*color, opacity));
        y += 13.0;
    }

    let tags = ["OCR strength", "Latency profile", "VRAM fit", "Tooling support"];
    let tag_color = Theme::with_opacity(Color32::WHITE, opacity * 0.55);
    for (i, tag) in tags.iter().enumerate() {
        let col = (i % 2) as f32;
        let row = (i / 2) as f32;
        let r = c.rect(10.0 + col * 133.0, 122.0 + row * 24.0, 127.0, 20.0);
        c.box_frame(
            r,
            6.0,
            Theme::with_opacity(Color32::WHITE, opacity * 0.05),
            Theme::with_opacity(Color32::WHITE, opacity * 0.1),
        );
        c.ui.painter().text(
            r.left_center() + egui::vec2(c.len(6.0), 0.0),
            egui::Align2::LEFT_CENTER,
            *tag,
            FontId::proportional(c.len(7.0)),
            tag_color,
        );
    }
}

/// Hexagonal radar rings with a pulsing readiness polygon.
fn readiness_radar(c: &Canvas, opacity: f32, anim: Option<f32>) {
    let center = c.pt(140.0, 78.0);
    let ring = Theme::with_opacity(Color32::WHITE, opacity * 0.16);
    let spoke = Theme::with_opacity(Color32::WHITE, opacity * 0.2);

    let hex = |r: f32| -> Vec<Pos2> {
        [
            (0.0, -r),
            (r * 0.88, -r * 0.45),
            (r * 0.88, r * 0.45),
            (0.0, r),
            (-r * 0.88, r * 0.45),
            (-r * 0.88, -r * 0.45),
        ]
        .iter()
        .map(|(dx, dy)| Pos2::new(center.x + c.len(*dx), center.y + c.len(*dy)))
        .collect()
    };

    for r in [58.0, 44.0, 30.0, 16.0] {
        let mut points = hex(r);
        points.push(points[0]);
        c.line(points, 1.0, ring);
    }
    for deg in [0.0_f32, 60.0, 120.0, 180.0, 240.0, 300.0] {
        let rad = (deg - 90.0).to_radians();
        let end = Pos2::new(
            center.x + c.len(58.0) * rad.cos(),
            center.y + c.len(58.0) * rad.sin(),
        );
        c.line(vec![center, end], 1.0, spoke);
    }

    let s = pulse(anim, 3.0, 0.0, 0.88, 1.0);
    let a = pulse(anim, 3.0, 0.0, 0.6, 1.0);
    let shape: Vec<Pos2> = [
        (0.0, -49.0),
        (40.0, -17.0),
        (45.0, 22.0),
        (0.0, 40.0),
        (-36.0, 19.0),
        (-38.0, -17.0),
    ]
    .iter()
    .map(|(dx, dy)| Pos2::new(center.x + c.len(*dx) * s, center.y + c.len(*dy) * s))
    .collect();
    c.ui.painter().add(Shape::convex_polygon(
        shape,
        Theme::with_opacity(Color32::from_rgb(0x22, 0xD3, 0xEE), opacity * 0.25 * a),
        Stroke::new(
            c.len(1.3),
            Theme::with_opacity(Color32::from_rgb(0x67, 0xE8, 0xF9), opacity * 0.9 * a),
        ),
    ));

    c.text_centered(
        140.0,
        155.0,
        "Quantization \u{00b7} OCR \u{00b7} Latency \u{00b7} Stability \u{00b7} VRAM \u{00b7} Tooling",
        8.0,
        Theme::with_opacity(Color32::WHITE, opacity * 0.62),
    );
}

/// Episode dots strung along a drawn-in path, with the capture/recall loop.
fn memory_graph(c: &Canvas, opacity: f32, anim: Option<f32>) {
    let reach = grown(anim, 1.4, 0.0);
    let stroke = Theme::with_opacity(Color32::WHITE, opacity * 0.42);

    // The spark line spans two cubic segments; draw them in sequence.
    let first_frac = (reach * 2.0).min(1.0);
    let mut path = sample_cubic(
        c.pt(24.0, 45.0),
        c.pt(62.0, 12.0),
        c.pt(96.0, 128.0),
        c.pt(140.0, 74.0),
        first_frac,
    );
    if reach > 0.5 {
        let second = sample_cubic(
            c.pt(140.0, 74.0),
            c.pt(170.0, 38.0),
            c.pt(205.0, 137.0),
            c.pt(252.0, 56.0),
            (reach - 0.5) * 2.0,
        );
        path.extend(second);
    }
    c.line(path, 2.0, stroke);

    let points = [
        (34.0, 42.0, 7.0, Color32::from_rgb(0x34, 0xD3, 0x99)),
        (88.0, 78.0, 6.0, Color32::from_rgb(0x60, 0xA5, 0xFA)),
        (134.0, 60.0, 8.0, Color32::from_rgb(0xFB, 0x71, 0x85)),
        (182.0, 96.0, 7.0, Color32::from_rgb(0xF5, 0x9E, 0x0B)),
        (240.0, 58.0, 9.0, Color32::from_rgb(0xA7, 0x8B, 0xFA)),
    ];
    for (i, (x, y, r, color)) in points.iter().enumerate() {
        let pop = grown(anim, 0.4, i as f32 * 0.15);
        if pop <= 0.0 {
            continue;
        }
        let center = c.pt(*x, *y);
        c.ui.painter().circle_filled(
            center,
            c.len(r + 7.0) * (0.8 + 0.2 * pop),
            Theme::with_opacity(*color, opacity * 0.13 * pop),
        );
        c.ui.painter().circle_filled(
            center,
            c.len(*r) * (0.8 + 0.2 * pop),
            Theme::with_opacity(*color, opacity * pop),
        );
    }

    let box_fill = Theme::with_opacity(Color32::from_rgb(0x02, 0x06, 0x17), opacity * 0.72);
    let box_edge = Theme::with_opacity(Color32::WHITE, opacity * 0.18);
    let text_color = Theme::with_opacity(Color32::WHITE, opacity * 0.78);
    c.box_frame(c.rect(26.0, 114.0, 92.0, 38.0), 10.0, box_fill, box_edge);
    c.box_frame(c.rect(126.0, 114.0, 126.0, 38.0), 10.0, box_fill, box_edge);
    c.text(34.0, 128.0, "capture \u{2192} distill", 10.0, text_color);
    c.text(134.0, 128.0, "recall \u{2192} proactive assist", 10.0, text_color);
}

/// Orbiting satellites around a glowing core.
fn companion_orbit(c: &Canvas, opacity: f32, anim: Option<f32>) {
    let center = c.pt(140.0, 78.0);
    let glow_color = Color32::from_rgb(0x59, 0xD5, 0xF5);

    c.glow(center, 34.0, Theme::with_opacity(glow_color, opacity));
    c.ui.painter().circle_filled(
        center,
        c.len(16.0),
        Theme::with_opacity(glow_color, opacity * 0.1),
    );
    c.ui.painter().circle_stroke(
        center,
        c.len(16.0),
        Stroke::new(1.0, Theme::with_opacity(Color32::from_rgb(0xA5, 0xF3, 0xFC), opacity * 0.45)),
    );

    let orbits = [
        (40.0, 20.0, 1.0, Color32::from_rgb(0x67, 0xE8, 0xF9)),
        (60.0, 28.0, -1.0, Color32::from_rgb(0x5D, 0xE0, 0xC6)),
    ];
    for (radius, period, direction, color) in orbits {
        c.ui.painter().circle_stroke(
            center,
            c.len(radius),
            Stroke::new(1.0, Theme::with_opacity(color, opacity * 0.25)),
        );
        // Satellite rides the ring; parked at the top when at rest
        let angle = match anim {
            None => -std::f32::consts::FRAC_PI_2,
            Some(t) => {
                -std::f32::consts::FRAC_PI_2 + direction * t / period * std::f32::consts::TAU
            }
        };
        let sat = Pos2::new(
            center.x + c.len(radius) * angle.cos(),
            center.y + c.len(radius) * angle.sin(),
        );
        c.ui.painter().circle_filled(
            sat,
            c.len(4.5),
            Theme::with_opacity(color, opacity * 0.2),
        );
        c.ui
            .painter()
            .circle_filled(sat, c.len(2.5), Theme::with_opacity(color, opacity));
    }

    c.text_centered(
        140.0,
        152.0,
        "PRESENCE \u{2022} MEMORY \u{2022} AGENCY",
        7.5,
        Theme::with_opacity(Color32::from_rgb(0xCB, 0xD5, 0xE1), opacity * 0.55),
    );
}
