//! Demo window: joysticks stacked in a single-column grid.
//!
//! Each joystick reports into a shared cell that the UI reads back to show
//! the last `(direction, magnitude)` under the control.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::Result;
use joystick_widget::config::WindowConfig;
use joystick_widget::{Joystick, JoystickView, StickEvent};
use tracing::debug;

/// One joystick plus the last event it emitted
struct Pad {
    joystick: Joystick,
    last_event: Rc<Cell<StickEvent>>,
}

pub struct JoystickDemoApp {
    pads: Vec<Pad>,
}

impl JoystickDemoApp {
    pub fn new(joysticks: Vec<Joystick>) -> Self {
        let pads = joysticks
            .into_iter()
            .enumerate()
            .map(|(index, mut joystick)| {
                let last_event = Rc::new(Cell::new(StickEvent::RELEASED));
                let sink = Rc::clone(&last_event);
                joystick.subscribe(move |direction, magnitude| {
                    debug!("joystick {}: {} {:.3}", index + 1, direction, magnitude);
                    sink.set(StickEvent::new(direction, magnitude));
                });
                Pad {
                    joystick,
                    last_event,
                }
            })
            .collect();

        Self { pads }
    }
}

impl eframe::App for JoystickDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let count = self.pads.len().max(1) as f32;
            let label_height = ui.text_style_height(&egui::TextStyle::Monospace)
                + ui.spacing().item_spacing.y * 2.0;
            let side = ui
                .available_width()
                .min(ui.available_height() / count - label_height);

            egui::Grid::new("joysticks").num_columns(1).show(ui, |ui| {
                for (index, pad) in self.pads.iter_mut().enumerate() {
                    ui.vertical(|ui| {
                        ui.add(JoystickView::new(&mut pad.joystick).side(side));
                        ui.label(
                            egui::RichText::new(format!(
                                "#{} {}",
                                index + 1,
                                pad.last_event.get()
                            ))
                            .family(egui::FontFamily::Monospace),
                        );
                    });
                    ui.end_row();
                }
            });
        });
    }
}

/// Open the demo window. Blocks until it is closed.
pub fn run(window: &WindowConfig, joysticks: Vec<Joystick>) -> Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(window.title.clone())
            .with_inner_size([window.width, window.height]),
        ..Default::default()
    };

    eframe::run_native(
        &window.title,
        native_options,
        Box::new(move |cc| {
            // Black stick on a light background, like a stock desktop widget
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(JoystickDemoApp::new(joysticks)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Joystick window failed: {}", e))
}
