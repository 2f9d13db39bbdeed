//! View rendering (filter bar, student table, toasts)

use super::notifications::ToastKind;
use super::App;
use crate::theme;
use crate::types::Student;
use crate::ui::components;
use eframe::egui;
use egui_phosphor::regular as icons;
use std::time::Instant;

impl App {
    pub(crate) fn render_toolbar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let mut filter = self.roster.filter.clone();
        let mut filter_changed = false;
        let mut add_clicked = false;
        let mut refresh_clicked = false;
        let mut clear_clicked = false;
        let groups = &self.roster.groups;

        ui.horizontal_centered(|ui| {
            ui.label(
                egui::RichText::new(icons::MAGNIFYING_GLASS)
                    .size(theme::FONT_HEADING)
                    .color(theme::TEXT_DIM),
            );
            filter_changed |= components::text_input(ui, &mut filter.name, "Search by name", theme::INPUT_WIDTH).changed();
            filter_changed |=
                components::text_input(ui, &mut filter.lastname, "Search by lastname", theme::INPUT_WIDTH).changed();
            filter_changed |= components::group_combo(
                ui,
                "group_filter",
                &mut filter.group,
                groups,
                Some("All groups"),
                140.0,
            );
            if !filter.is_empty() {
                clear_clicked = ui
                    .add(theme::button(format!("{}  Clear", icons::X)))
                    .on_hover_text("Clear all filters")
                    .clicked();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                add_clicked = ui
                    .add(theme::button_accent(format!("{}  Add student", icons::PLUS)))
                    .clicked();
                refresh_clicked = ui
                    .add(theme::button(format!("{}  Refresh", icons::ARROW_CLOCKWISE)))
                    .clicked();
            });
        });

        if clear_clicked {
            self.roster.clear_filters();
        } else if filter_changed {
            self.roster.set_filter(filter);
        }
        if add_clicked {
            self.roster.open_editor(None);
        }
        if refresh_clicked {
            let requests = self.roster.mount();
            self.dispatch_all(ctx, requests);
        }
    }

    pub(crate) fn render_student_table(&mut self, ui: &mut egui::Ui) {
        use egui_extras::{Column, TableBuilder};

        let rows: Vec<Student> = self.roster.visible().cloned().collect();
        let total = self.roster.students.len();
        let mut edit_id: Option<i64> = None;
        let mut delete_id: Option<i64> = None;

        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("Students")
                    .size(theme::FONT_TITLE)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            );
            ui.label(
                egui::RichText::new(format!("Showing {} of {}", rows.len(), total))
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT_DIM),
            );
        });
        ui.add_space(theme::SPACING_MD);

        if rows.is_empty() {
            let text = if total == 0 {
                "No students yet"
            } else {
                "No students match the current filters"
            };
            ui.add_space(theme::SPACING_XL * 2.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(icons::USERS).size(36.0).color(theme::TEXT_DIM));
                ui.add_space(theme::SPACING_SM);
                ui.label(egui::RichText::new(text).color(theme::TEXT_MUTED));
            });
            return;
        }

        TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::remainder().at_least(120.0).clip(true))
            .column(Column::remainder().at_least(120.0).clip(true))
            .column(Column::exact(110.0))
            .column(Column::exact(70.0))
            .column(Column::exact(190.0))
            .header(theme::HEADER_HEIGHT, |mut header| {
                for title in ["NAME", "LASTNAME", "GROUP", "LEVEL", "ACTIONS"] {
                    header.col(|ui| {
                        ui.label(
                            egui::RichText::new(title)
                                .size(theme::FONT_LABEL)
                                .strong()
                                .color(theme::TEXT_MUTED),
                        );
                    });
                }
            })
            .body(|body| {
                body.rows(theme::ROW_HEIGHT, rows.len(), |mut row| {
                    let student = &rows[row.index()];
                    row.col(|ui| {
                        ui.label(student.name.as_str());
                    });
                    row.col(|ui| {
                        ui.label(student.lastname.as_str());
                    });
                    row.col(|ui| {
                        ui.label(egui::RichText::new(&student.group).color(theme::ACCENT));
                    });
                    row.col(|ui| {
                        ui.label(student.level.to_string());
                    });
                    row.col(|ui| {
                        if ui.add(theme::button(format!("{}  Edit", icons::PENCIL_SIMPLE))).clicked() {
                            edit_id = Some(student.id);
                        }
                        if ui.add(theme::button_danger(format!("{}  Delete", icons::TRASH))).clicked() {
                            delete_id = Some(student.id);
                        }
                    });
                });
            });

        if let Some(id) = edit_id {
            if let Some(student) = self.roster.student(id).cloned() {
                self.roster.open_editor(Some(&student));
            }
        }
        if let Some(id) = delete_id {
            self.roster.request_delete(id);
        }
    }

    /// Stacked toasts in the bottom-right of the central panel; hovering pauses the fade
    pub(crate) fn render_toasts(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        self.roster.toasts.expire(now);
        if self.roster.toasts.is_empty() {
            return;
        }
        let Some(panel_rect) = self.central_panel_rect else {
            return;
        };

        let margin = theme::SPACING_LG;
        let mut bottom = panel_rect.bottom() - margin;
        let mut hovered: Option<usize> = None;

        for (index, toast) in self.roster.toasts.iter().enumerate().rev() {
            let alpha = toast.alpha(now);
            let (accent, icon) = match toast.kind {
                ToastKind::Success => (theme::STATUS_SUCCESS, icons::CHECK_CIRCLE),
                ToastKind::Error => (theme::STATUS_ERROR, icons::WARNING_CIRCLE),
            };

            let response = egui::Area::new(egui::Id::new(("toast", index)))
                .order(egui::Order::Tooltip)
                .fixed_pos(egui::pos2(panel_rect.right() - margin, bottom))
                .pivot(egui::Align2::RIGHT_BOTTOM)
                .show(ctx, |ui| {
                    theme::toast_frame(accent, alpha).show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new(icon).color(theme::with_alpha(accent, 255.0 * alpha)));
                            ui.label(
                                egui::RichText::new(&toast.message)
                                    .color(theme::with_alpha(theme::TEXT_PRIMARY, 255.0 * alpha)),
                            );
                        });
                    });
                });

            if response.response.hovered() {
                hovered = Some(index);
            }
            bottom -= response.response.rect.height() + theme::SPACING_MD;
        }

        if let Some(index) = hovered {
            self.roster.toasts.hold(index);
        }
        ctx.request_repaint();
    }
}
