use common::game::{CANVAS_SIZE, CELL_SIZE, GameSnapshot, Phase};
use common::render::{Canvas, Renderer, Rgba, Sprite, SpriteStyle};
use eframe::egui;

const TOAST_RISE: f32 = 24.0;

pub fn to_color32(color: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// Maps canvas pixels onto a scaled egui rect.
pub struct EguiCanvas<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
    scale: f32,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect) -> Self {
        Self {
            painter,
            origin: rect.min,
            scale: rect.width() / CANVAS_SIZE,
        }
    }

    fn pos(&self, x: f32, y: f32) -> egui::Pos2 {
        egui::pos2(self.origin.x + x * self.scale, self.origin.y + y * self.scale)
    }
}

impl Canvas for EguiCanvas<'_> {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, corner_radius: f32, color: Rgba) {
        let rect = egui::Rect::from_min_max(self.pos(x, y), self.pos(x + width, y + height));
        self.painter
            .rect_filled(rect, corner_radius * self.scale, to_color32(color));
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba) {
        self.painter
            .circle_filled(self.pos(cx, cy), radius * self.scale, to_color32(color));
    }
}

pub fn render_board(ui: &mut egui::Ui, snapshot: &GameSnapshot) {
    let available = ui.available_size();
    let side = available.x.min(available.y).clamp(200.0, 640.0);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let scale = side / CANVAS_SIZE;

    let mut canvas = EguiCanvas::new(&painter, rect);
    Renderer::draw(&mut canvas, &snapshot.canvas);

    for sprite in &snapshot.sprites {
        render_sprite(&painter, rect, scale, sprite);
    }

    for toast in &snapshot.toasts {
        let progress = toast.progress(snapshot.now_ms);
        let alpha = ((1.0 - progress) * 255.0) as u8;
        let pos = egui::pos2(
            rect.min.x + toast.x * scale,
            rect.min.y + (toast.y - progress * TOAST_RISE) * scale,
        );
        painter.text(
            pos,
            egui::Align2::CENTER_CENTER,
            &toast.label,
            egui::FontId::proportional(16.0 * scale),
            egui::Color32::from_rgba_unmultiplied(255, 236, 120, alpha),
        );
    }

    Renderer::draw_particles(&mut canvas, &snapshot.particles);

    render_overlay(&painter, rect, snapshot);
}

fn render_sprite(painter: &egui::Painter, board: egui::Rect, scale: f32, sprite: &Sprite) {
    let (fill, text) = match sprite.style {
        SpriteStyle::Trash => (
            egui::Color32::from_rgb(120, 110, 100),
            egui::Color32::WHITE,
        ),
        SpriteStyle::Nature => (
            egui::Color32::from_rgb(70, 150, 80),
            egui::Color32::from_rgb(240, 255, 240),
        ),
    };
    let min = egui::pos2(board.min.x + sprite.x * scale, board.min.y + sprite.y * scale);
    let cell = egui::Rect::from_min_size(min, egui::vec2(CELL_SIZE * scale, CELL_SIZE * scale));
    painter.rect_filled(cell.shrink(1.0), 4.0, fill);

    let font_size = (CELL_SIZE * scale * 0.9 / sprite.label.chars().count().max(3) as f32 * 1.6)
        .clamp(6.0, 14.0);
    painter.text(
        cell.center(),
        egui::Align2::CENTER_CENTER,
        &sprite.label,
        egui::FontId::proportional(font_size),
        text,
    );
}

fn render_overlay(painter: &egui::Painter, board: egui::Rect, snapshot: &GameSnapshot) {
    let (title, subtitle) = match snapshot.phase {
        Phase::Ready => ("Eco Snake".to_string(), Some("Press Enter to start".to_string())),
        Phase::LevelTransition(_) => (
            snapshot
                .countdown
                .map(|value| value.to_string())
                .unwrap_or_default(),
            Some(format!("Level {}: {}", snapshot.level, snapshot.theme_label)),
        ),
        Phase::GameOver(reason) => (
            "Game Over".to_string(),
            Some(format!("The snake {}. Press Enter to play again", reason.describe())),
        ),
        Phase::Playing if snapshot.paused => ("Paused".to_string(), Some("Press Space to resume".to_string())),
        Phase::Playing => return,
    };

    painter.rect_filled(board, 0.0, egui::Color32::from_black_alpha(110));
    painter.text(
        board.center() - egui::vec2(0.0, 16.0),
        egui::Align2::CENTER_CENTER,
        title,
        egui::FontId::proportional(40.0),
        egui::Color32::WHITE,
    );
    if let Some(subtitle) = subtitle {
        painter.text(
            board.center() + egui::vec2(0.0, 24.0),
            egui::Align2::CENTER_CENTER,
            subtitle,
            egui::FontId::proportional(16.0),
            egui::Color32::from_gray(220),
        );
    }
}
