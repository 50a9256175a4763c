use eframe::egui;
use flask_core::{Controller, Trigger, controller::Field};
use tracing::info;

/// Window settings for [`FlaskApp`].
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub inner_size: [f32; 2],
    pub font_size: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Water Flask".to_string(),
            inner_size: [600.0, 400.0],
            font_size: 16.0,
        }
    }
}

/// A runnable egui application for operating a single flask.
///
/// The top panel holds the two amount fields and the four trigger buttons.
/// Fill and drink are hidden whenever the controller reports them unavailable.
/// The flask rendering fills the rest of the window.
#[derive(Default)]
pub struct FlaskApp {
    config: AppConfig,
    controller: Controller,
    temperature_input: String,
    volume_input: String,
}

impl FlaskApp {
    #[must_use]
    pub fn new(config: AppConfig, controller: Controller) -> Self {
        Self {
            config,
            controller,
            temperature_input: String::new(),
            volume_input: String::new(),
        }
    }

    #[must_use]
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn run(self) -> Result<(), eframe::Error> {
        let title = self.config.title.clone();
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(title.clone())
                .with_inner_size(self.config.inner_size),
            ..Default::default()
        };

        info!(
            temperature = self.controller.flask().temperature(),
            volume = self.controller.flask().current_volume(),
            "opening flask window"
        );

        eframe::run_native(&title, options, Box::new(|_cc| Ok(Box::new(self))))
    }

    /// Submits the text of the trigger's field to the controller.
    fn press(&mut self, trigger: Trigger) {
        let raw = match trigger.field() {
            Field::Temperature => self.temperature_input.as_str(),
            Field::Volume => self.volume_input.as_str(),
        };

        // Rejected input stays on the controller and is drawn inline.
        let _ = self.controller.submit(trigger, raw);
    }
}

impl eframe::App for FlaskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut pressed = None;

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(10.0);

            egui::Grid::new("form")
                .num_columns(4)
                .spacing([5.0, 5.0])
                .show(ui, |ui| {
                    ui.label(Field::Temperature.label());
                    ui.text_edit_singleline(&mut self.temperature_input);
                    ui.label(Field::Volume.label());
                    ui.text_edit_singleline(&mut self.volume_input);
                    ui.end_row();

                    let visibility = self.controller.visibility();
                    for trigger in Trigger::ALL {
                        let button =
                            egui::Button::new(trigger.label()).min_size([60.0, 30.0].into());
                        if ui
                            .add_visible(visibility.is_visible(trigger), button)
                            .clicked()
                        {
                            pressed = Some(trigger);
                        }
                    }
                    ui.end_row();
                });

            if let Some(err) = self.controller.error() {
                ui.colored_label(egui::Color32::RED, err.to_string());
            }

            ui.add_space(10.0);
        });

        if let Some(trigger) = pressed {
            self.press(trigger);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new(self.controller.display())
                        .monospace()
                        .size(self.config.font_size),
                );
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use flask_core::{Flask, controller::InputError};

    #[test]
    fn press_reads_the_matching_field() {
        let mut app = FlaskApp::default();
        app.temperature_input = "10".to_string();
        app.volume_input = "300".to_string();

        app.press(Trigger::Heat);
        app.press(Trigger::Fill);

        let flask = app.controller().flask();
        assert_eq!(flask.temperature(), 35.0);
        assert_eq!(flask.current_volume(), Flask::CAPACITY);
        assert!(!app.controller().visibility().is_visible(Trigger::Fill));
    }

    #[test]
    fn press_keeps_rejected_input_for_display() {
        let mut app = FlaskApp::new(
            AppConfig::default(),
            Controller::new(Flask::new(0.0, 0.0)),
        );
        app.volume_input = "half".to_string();

        app.press(Trigger::Fill);

        assert!(matches!(
            app.controller().error(),
            Some(InputError::Malformed {
                field: Field::Volume,
                ..
            })
        ));
        assert_eq!(app.controller().flask().current_volume(), 0.0);
    }
}
