use common::game::{Direction, InputIntent, KeyCode};
use eframe::egui;

const STEERING_KEYS: [egui::Key; 8] = [
    egui::Key::ArrowUp,
    egui::Key::ArrowDown,
    egui::Key::ArrowLeft,
    egui::Key::ArrowRight,
    egui::Key::W,
    egui::Key::A,
    egui::Key::S,
    egui::Key::D,
];

pub fn key_to_intent(key: egui::Key) -> Option<InputIntent> {
    let code = match key {
        egui::Key::ArrowUp => KeyCode::ArrowUp,
        egui::Key::ArrowDown => KeyCode::ArrowDown,
        egui::Key::ArrowLeft => KeyCode::ArrowLeft,
        egui::Key::ArrowRight => KeyCode::ArrowRight,
        egui::Key::W => KeyCode::W,
        egui::Key::A => KeyCode::A,
        egui::Key::S => KeyCode::S,
        egui::Key::D => KeyCode::D,
        _ => return None,
    };
    Some(InputIntent::Key(code))
}

/// Steering keys pressed this frame, in a fixed order.
pub fn pressed_intents(ctx: &egui::Context) -> Vec<InputIntent> {
    ctx.input(|i| {
        STEERING_KEYS
            .iter()
            .filter(|key| i.key_pressed(**key))
            .filter_map(|key| key_to_intent(*key))
            .collect()
    })
}

/// On-screen pad; returns the pressed direction, if any.
pub fn render_dpad(ui: &mut egui::Ui, enabled: bool) -> Option<InputIntent> {
    let size = egui::vec2(44.0, 36.0);
    let mut pressed = None;

    let mut pad_button = |ui: &mut egui::Ui, label: &str, direction: Direction| {
        if ui.add_enabled(enabled, egui::Button::new(label).min_size(size)).clicked() {
            pressed = Some(InputIntent::Pad(direction));
        }
    };

    ui.vertical_centered(|ui| {
        pad_button(ui, "▲", Direction::Up);
        ui.horizontal(|ui| {
            let row_width = size.x * 3.0 + ui.spacing().item_spacing.x * 2.0;
            ui.add_space((ui.available_width() - row_width).max(0.0) / 2.0);
            pad_button(ui, "◀", Direction::Left);
            ui.add_space(size.x + ui.spacing().item_spacing.x);
            pad_button(ui, "▶", Direction::Right);
        });
        pad_button(ui, "▼", Direction::Down);
    });

    pressed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasd_and_arrows_map_to_same_directions() {
        for (arrow, letter) in [
            (egui::Key::ArrowUp, egui::Key::W),
            (egui::Key::ArrowDown, egui::Key::S),
            (egui::Key::ArrowLeft, egui::Key::A),
            (egui::Key::ArrowRight, egui::Key::D),
        ] {
            let a = key_to_intent(arrow).unwrap().direction();
            let b = key_to_intent(letter).unwrap().direction();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert_eq!(key_to_intent(egui::Key::Space), None);
        assert_eq!(key_to_intent(egui::Key::Enter), None);
    }
}
