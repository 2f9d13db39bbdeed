//! Reusable UI components
//!
//! Standalone widgets shared by the filter bar and the editor form.

use crate::theme;
use eframe::egui;

/// Single-line text input inside the bordered input frame
pub fn text_input(ui: &mut egui::Ui, value: &mut String, hint: &str, width: f32) -> egui::Response {
    theme::input_frame()
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::singleline(value)
                    .hint_text(egui::RichText::new(hint).color(theme::TEXT_DIM))
                    .frame(false)
                    .desired_width(width),
            )
        })
        .inner
}

/// Combo box over the known groups. `empty_label` names the empty choice
/// when one is allowed (the filter bar), `None` hides it (the form).
/// Returns true if the selection changed.
pub fn group_combo(
    ui: &mut egui::Ui,
    id: &str,
    selected: &mut String,
    groups: &[String],
    empty_label: Option<&str>,
    width: f32,
) -> bool {
    let before = selected.clone();
    let shown = if selected.is_empty() {
        empty_label.unwrap_or("Select group").to_string()
    } else {
        selected.clone()
    };
    egui::ComboBox::from_id_salt(id)
        .selected_text(shown)
        .width(width)
        .show_ui(ui, |ui| {
            if let Some(label) = empty_label {
                ui.selectable_value(selected, String::new(), label);
            }
            for group in groups {
                ui.selectable_value(selected, group.clone(), group.as_str());
            }
        });
    *selected != before
}

/// Combo box over the known levels; 0 shows as unselected
pub fn level_combo(ui: &mut egui::Ui, id: &str, selected: &mut i64, levels: &[i64], width: f32) -> bool {
    let before = *selected;
    let shown = if *selected == 0 {
        "Select level".to_string()
    } else {
        selected.to_string()
    };
    egui::ComboBox::from_id_salt(id)
        .selected_text(shown)
        .width(width)
        .show_ui(ui, |ui| {
            for &level in levels {
                ui.selectable_value(selected, level, level.to_string());
            }
        });
    *selected != before
}

/// Form label with fixed width so inputs line up
pub fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.add_sized(
        [80.0, 20.0],
        egui::Label::new(
            egui::RichText::new(text)
                .size(theme::FONT_LABEL)
                .color(theme::TEXT_MUTED),
        )
        .selectable(false),
    );
}
