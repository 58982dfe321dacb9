use egui::Context;

use crate::controllers::interactive::ExplorerSession;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
use crate::core::settings::explorer_settings::{
    MAX_ITERATIONS_RANGE, MAX_STEP_OR_SPEED, MIN_STEP_OR_SPEED,
};

/// Buttons pressed during one panel frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PanelActions {
    pub reset_view: bool,
    pub take_screenshot: bool,
}

/// Draws the control panel and applies slider and scheme changes to the
/// session directly.
pub fn show_panel(
    ctx: &Context,
    session: &mut ExplorerSession,
    status_message: Option<&str>,
) -> PanelActions {
    let mut actions = PanelActions::default();

    egui::Window::new("Mandelbrot Explorer")
        .default_pos([10.0, 10.0])
        .default_size([280.0, 300.0])
        .show(ctx, |ui| {
            let mut max_iterations = session.settings().max_iterations();
            ui.horizontal(|ui| {
                ui.label("Max iterations:");
                if ui
                    .add(egui::Slider::new(&mut max_iterations, MAX_ITERATIONS_RANGE))
                    .changed()
                {
                    session.set_max_iterations(max_iterations);
                }
            });

            let mut step_size = session.settings().zoom_step_size();
            ui.horizontal(|ui| {
                ui.label("Zoom step:");
                if ui
                    .add(egui::Slider::new(&mut step_size, MIN_STEP_OR_SPEED..=MAX_STEP_OR_SPEED))
                    .changed()
                {
                    session.set_zoom_step_size(step_size);
                }
            });

            let mut animation_speed = session.settings().zoom_animation_speed();
            ui.horizontal(|ui| {
                ui.label("Zoom speed:");
                if ui
                    .add(egui::Slider::new(
                        &mut animation_speed,
                        MIN_STEP_OR_SPEED..=MAX_STEP_OR_SPEED,
                    ))
                    .changed()
                {
                    session.set_zoom_animation_speed(animation_speed);
                }
            });

            let mut colour_scheme = session.settings().colour_scheme();
            ui.horizontal(|ui| {
                ui.label("Colour scheme:");
                egui::ComboBox::from_id_source("mandelbrot_colour_scheme")
                    .selected_text(colour_scheme.display_name())
                    .show_ui(ui, |ui| {
                        for &kind in ColourSchemeKind::ALL {
                            ui.selectable_value(&mut colour_scheme, kind, kind.display_name());
                        }
                    });
            });
            session.set_colour_scheme(colour_scheme);

            ui.separator();

            let viewport = session.viewport();
            let center = viewport.center();
            ui.label(format!("Center: {:.6} {:+.6}i", center.real, center.imag));
            ui.label(format!("Zoom: {:.3}x", viewport.zoom()));
            match session.cursor_position() {
                Some(point) => ui.label(format!("Cursor: {:.6} {:+.6}i", point.real, point.imag)),
                None => ui.label("Cursor: -"),
            };
            if let Some(frame) = session.current_frame() {
                ui.label(format!(
                    "Last render: {} ms (request {})",
                    frame.render_duration.as_millis(),
                    frame.request_id
                ));
            }

            ui.separator();

            ui.horizontal(|ui| {
                actions.reset_view = ui.button("Reset view").clicked();
                actions.take_screenshot = ui.button("Screenshot").clicked();
            });

            if let Some(message) = status_message {
                ui.label(message);
            }
        });

    actions
}
