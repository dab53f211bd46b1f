//! Single-screen fuel calculation form
//!
//! Input fields on top, read-only summary table below. The calculation is
//! pure arithmetic, so it runs synchronously inside the frame.

use avia_app::{FlightLogForm, FuelReport};
use avia_domain::service::compute_fuel_balance;
use eframe::egui::{self, Color32, RichText, Ui};

/// Main application state
pub struct AviaApp {
    /// Raw form fields
    form: FlightLogForm,
    /// Last computed report (if any)
    report: Option<FuelReport>,
    /// Validation or calculation error (if any)
    error: Option<String>,
}

impl AviaApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.interaction.tooltip_delay = 0.5;
        style.animation_time = 0.1;
        cc.egui_ctx.set_style(style);

        Self {
            form: FlightLogForm::new(),
            report: None,
            error: None,
        }
    }

    /// Run the calculation and update the result table
    fn calculate(&mut self) {
        self.error = None;

        let result = self
            .form
            .parse()
            .and_then(|input| compute_fuel_balance(&input).map(|balance| (input, balance)));

        match result {
            Ok((input, balance)) => {
                self.report = Some(FuelReport::build(&input, &balance));
            }
            Err(e) => {
                self.error = Some(format!("Ошибка: {}", e));
            }
        }
    }

    /// Reset the form and the result table
    fn clear(&mut self) {
        self.form.clear();
        self.report = None;
        self.error = None;
    }

    /// Render the input fields
    fn render_form(&mut self, ui: &mut Ui) {
        egui::Grid::new("input_grid")
            .num_columns(2)
            .spacing([20.0, 8.0])
            .show(ui, |ui| {
                ui.label("Наземное время:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.form.ground_time)
                        .desired_width(120.0)
                        .hint_text("например 0-30"),
                );
                ui.end_row();

                ui.label("Полётное время:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.form.air_time)
                        .desired_width(120.0)
                        .hint_text("например 1:30"),
                );
                ui.end_row();

                ui.label("Количество, л:");
                ui.add(egui::TextEdit::singleline(&mut self.form.main_qty).desired_width(120.0));
                ui.end_row();

                ui.label("Плотность, кг/л:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.form.main_density)
                        .desired_width(120.0)
                        .hint_text("например 0.8"),
                );
                ui.end_row();

                ui.label("Документ:");
                ui.add(egui::TextEdit::singleline(&mut self.form.main_doc).desired_width(120.0));
                ui.end_row();

                ui.label("Концевые баки:");
                ui.horizontal(|ui| {
                    ui.radio_value(&mut self.form.aux_used, true, "Да");
                    ui.radio_value(&mut self.form.aux_used, false, "Нет");
                });
                ui.end_row();
            });

        // Aux tank fields are only shown when the toggle is on
        if self.form.aux_used {
            ui.add_space(5.0);
            egui::Grid::new("aux_input_grid")
                .num_columns(2)
                .spacing([20.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Количество (конц.), л:");
                    ui.add(egui::TextEdit::singleline(&mut self.form.aux_qty).desired_width(120.0));
                    ui.end_row();

                    ui.label("Плотность (конц.), кг/л:");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.form.aux_density)
                            .desired_width(120.0),
                    );
                    ui.end_row();

                    ui.label("Документ (конц.):");
                    ui.add(egui::TextEdit::singleline(&mut self.form.aux_doc).desired_width(120.0));
                    ui.end_row();
                });
        }
    }

    /// Render the action buttons
    fn render_buttons(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let calc_button = egui::Button::new(RichText::new("Рассчитать").size(16.0));
            if ui.add(calc_button).clicked() {
                self.calculate();
            }

            ui.add_space(10.0);

            if ui.button("Очистить").clicked() {
                self.clear();
            }
        });
    }

    /// Render the result table
    fn render_results(&self, ui: &mut Ui) {
        ui.label(RichText::new("Сводная таблица").strong().size(14.0));
        ui.add_space(5.0);

        if let Some(ref report) = self.report {
            egui::Grid::new("result_grid")
                .num_columns(2)
                .spacing([20.0, 6.0])
                .striped(true)
                .show(ui, |ui| {
                    for (label, value) in report.rows() {
                        ui.label(RichText::new(label).strong());
                        ui.label(value);
                        ui.end_row();
                    }
                });
        } else {
            ui.label(
                RichText::new("Заполните поля и нажмите «Рассчитать»")
                    .italics()
                    .color(Color32::GRAY),
            );
        }
    }

    /// Render error messages
    fn render_error(&self, ui: &mut Ui) {
        if let Some(ref error) = self.error {
            ui.add_space(10.0);
            egui::Frame::new()
                .fill(Color32::from_rgb(80, 20, 20))
                .inner_margin(8.0)
                .corner_radius(4.0)
                .show(ui, |ui| {
                    ui.label(RichText::new(error).color(Color32::LIGHT_RED));
                });
        }
    }
}

impl eframe::App for AviaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Расчёт топлива");
                ui.add_space(10.0);

                self.render_form(ui);

                ui.add_space(10.0);
                self.render_buttons(ui);

                ui.add_space(10.0);
                ui.separator();
                ui.add_space(10.0);

                self.render_results(ui);
                self.render_error(ui);
            });
        });
    }
}
