// src/controllers/debug_panel.rs
// Live-tuning windows for the camera and the cube material, plus the timezone picker.

use nannou_egui::egui;

use crate::config::TimezoneOption;
use crate::effects::SharedParams;
use crate::utilities::easing::{color_from_array, color_to_array};
use crate::views::{CameraRig, MAX_FOV, MIN_FOV};

/// Changes the host has to apply after the frame.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PanelResult {
    pub set_timezone: Option<String>,
}

pub struct ClockReadout<'a> {
    pub timezone: &'a str,
    pub label: &'a str,
    pub date: &'a str,
    pub time: &'a str,
}

pub fn draw_debug_panel(
    ctx: &egui::Context,
    camera: &mut CameraRig,
    params: &SharedParams,
    timezones: &[TimezoneOption],
    readout: &ClockReadout,
) -> PanelResult {
    let mut result = PanelResult::default();

    egui::Window::new("Clock")
        .default_pos([10.0, 10.0])
        .show(ctx, |ui| {
            ui.heading(readout.time);
            ui.label(readout.date);

            let mut selected = readout.timezone.to_string();
            egui::ComboBox::from_label("Timezone")
                .selected_text(readout.label)
                .show_ui(ui, |ui| {
                    for option in timezones {
                        ui.selectable_value(&mut selected, option.value.clone(), option.label.as_str());
                    }
                });
            if selected != readout.timezone {
                result.set_timezone = Some(selected);
            }
        });

    egui::Window::new("Camera")
        .default_pos([10.0, 160.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Position");
                ui.add(egui::DragValue::new(&mut camera.position.x).speed(0.01).prefix("x "));
                ui.add(egui::DragValue::new(&mut camera.position.y).speed(0.01).prefix("y "));
                ui.add(egui::DragValue::new(&mut camera.position.z).speed(0.01).prefix("z "));
            });
            ui.add(egui::Slider::new(&mut camera.fov, MIN_FOV..=MAX_FOV).text("FOV"));
        });

    egui::Window::new("Cube")
        .default_pos([10.0, 260.0])
        .show(ctx, |ui| {
            let mut params = params.borrow_mut();
            ui.add(egui::Slider::new(&mut params.peak_y, -1.0..=1.0).text("Peak Y"));
            ui.add(egui::Slider::new(&mut params.peak_scale, 0.1..=3.0).text("Peak scale"));

            ui.horizontal(|ui| {
                ui.label("Peak color");
                let mut color = color_to_array(params.peak_color);
                if ui.color_edit_button_rgb(&mut color).changed() {
                    params.peak_color = color_from_array(color);
                }
            });

            ui.horizontal(|ui| {
                ui.label("Brightness");
                ui.add(
                    egui::DragValue::new(&mut params.brightness)
                        .speed(0.01)
                        .clamp_range(0.0..=f32::MAX),
                );
            });
        });

    result
}
