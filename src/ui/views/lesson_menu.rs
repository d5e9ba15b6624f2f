use crate::TutorApp;
use crate::app::LessonInfo;
use crate::ui::helpers::big_list_button;
use egui::{Align, Button, CentralPanel, Context, RichText, ScrollArea};

pub fn ui_lesson_menu(app: &mut TutorApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 460.0;
        let content_width = ui.available_width().min(max_width);
        let button_h = 34.0;

        let infos: Vec<LessonInfo> = app.lesson_infos();

        ui.vertical_centered_justified(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(24, 16))
                .show(ui, |ui| {
                    ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
                        ui.set_width(content_width);
                        ui.heading("🐍 Python course");
                        ui.add_space(6.0);
                        ui.label(format!(
                            "{}% of the course completed",
                            app.tracker.completion_percentage()
                        ));
                        ui.add_space(12.0);

                        if ui
                            .add_sized([content_width, button_h], Button::new("▶ Continue where I left off"))
                            .clicked()
                        {
                            app.continue_course();
                            return;
                        }

                        if !app.message.is_empty() {
                            ui.add_space(8.0);
                            ui.label(RichText::new(&app.message).strong());
                        }
                        ui.add_space(12.0);

                        ScrollArea::vertical().auto_shrink([false, true]).show(ui, |ui| {
                            for info in &infos {
                                // Las bloqueadas también se pulsan: muestran el aviso
                                if big_list_button(ui, info.label(), content_width, button_h, info.hover_text()) {
                                    app.open_lesson(&info.id);
                                    return;
                                }
                                ui.add_space(6.0);
                            }
                        });
                    });
                });
        });
    });
}
