//! Modal dialogs (student editor, delete confirmation)

use super::App;
use crate::theme;
use crate::types::EditorMode;
use crate::ui::components;
use eframe::egui;
use egui_phosphor::regular as icons;

impl App {
    pub(crate) fn render_editor_modal(&mut self, ctx: &egui::Context) {
        let mode = self.roster.editor_mode;
        let title = match mode {
            EditorMode::Closed => return,
            EditorMode::Create => "Add Student",
            EditorMode::Edit { .. } => "Edit Student",
        };

        let mut save = false;
        let mut cancel = false;
        let groups = &self.roster.groups;
        let levels = &self.roster.levels;
        let draft = &mut self.roster.draft;

        let modal_response = egui::Modal::new(egui::Id::new("student_editor"))
            .backdrop_color(egui::Color32::from_black_alpha(160))
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                ui.set_width(theme::MODAL_WIDTH);

                ui.add(
                    egui::Label::new(egui::RichText::new(title).size(theme::FONT_HEADING).strong())
                        .selectable(false),
                );
                ui.add_space(theme::SPACING_SM);
                ui.separator();
                ui.add_space(theme::SPACING_MD);

                let input_width = theme::MODAL_WIDTH - 110.0;
                egui::Grid::new("student_form")
                    .num_columns(2)
                    .spacing([theme::SPACING_LG, theme::SPACING_MD])
                    .show(ui, |ui| {
                        components::field_label(ui, "Name");
                        components::text_input(ui, &mut draft.name, "Enter name", input_width);
                        ui.end_row();

                        components::field_label(ui, "Lastname");
                        components::text_input(ui, &mut draft.lastname, "Enter lastname", input_width);
                        ui.end_row();

                        components::field_label(ui, "Group");
                        components::group_combo(ui, "form_group", &mut draft.group, groups, None, input_width);
                        ui.end_row();

                        components::field_label(ui, "Level");
                        components::level_combo(ui, "form_level", &mut draft.level, levels, input_width);
                        ui.end_row();
                    });

                ui.add_space(theme::SPACING_XL);

                ui.horizontal(|ui| {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .add(theme::button_accent(format!("{}  Save", icons::FLOPPY_DISK)))
                            .clicked()
                        {
                            save = true;
                        }
                        if ui.add(theme::button(format!("{}  Cancel", icons::X))).clicked() {
                            cancel = true;
                        }
                    });
                });

                if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    save = true;
                }
            });

        if cancel || modal_response.should_close() {
            self.roster.close_editor();
        } else if save {
            let request = self.roster.submit();
            self.dispatch_all(ctx, request);
        }
    }

    pub(crate) fn render_delete_confirm(&mut self, ctx: &egui::Context) {
        let Some(id) = self.roster.pending_delete else {
            return;
        };
        let who = self
            .roster
            .student(id)
            .map(|s| format!("{} {}", s.name, s.lastname))
            .unwrap_or_else(|| "This student".to_string());

        let mut confirm = false;
        let mut cancel = false;

        let modal_response = egui::Modal::new(egui::Id::new("delete_confirm"))
            .backdrop_color(egui::Color32::from_black_alpha(160))
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                ui.set_width(320.0);
                ui.vertical_centered(|ui| {
                    ui.add_space(theme::SPACING_SM);
                    ui.label(
                        egui::RichText::new(icons::WARNING)
                            .size(32.0)
                            .color(theme::STATUS_ERROR),
                    );
                    ui.add_space(theme::SPACING_SM);
                    ui.label(egui::RichText::new("Delete student?").size(theme::FONT_HEADING).strong());
                    ui.label(
                        egui::RichText::new(format!("{} will be removed.", who)).color(theme::TEXT_MUTED),
                    );
                });
                ui.add_space(theme::SPACING_XL);
                ui.horizontal(|ui| {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .add(theme::button_danger(format!("{}  Delete", icons::TRASH)))
                            .clicked()
                        {
                            confirm = true;
                        }
                        if ui.add(theme::button("Cancel")).clicked() {
                            cancel = true;
                        }
                    });
                });
            });

        if confirm {
            let request = self.roster.confirm_delete();
            self.dispatch_all(ctx, request);
        } else if cancel || modal_response.should_close() {
            self.roster.cancel_delete();
        }
    }
}
