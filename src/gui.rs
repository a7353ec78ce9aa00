// Phase freezing GUI
// Side panel holds the controls, central pane shows the selected view
// Widget changes are turned into interactions, then the scene is rebuilt and drawn

// Importing crates/modules
use eframe::{egui, App, CreationContext, NativeOptions};
use egui_plot::{
    Arrows, Legend, Line, LineStyle, Plot, PlotPoint, PlotPoints, PlotUi, Points, Text,
};

use crate::equations::{self, Substituted};
use crate::error::Error;
use crate::motion::{PhaseChoice, PhaseInput, PHASE_CHOICES};
use crate::scene::{Arrow, Curve, Marker, PhasorPanel, Scene, WavePanel};
use crate::session::{Interaction, Session};
use crate::status::Status;

pub const APP_TITLE: &str = "Phase Freezing of Harmonic Motion";

pub struct PhasorApp {
    current_pane: Pane, // Keeps track of current pane
    session: Session,
}

// Defining different panes in the gui
#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum Pane {
    #[default]
    Combined,
    Phasor,
    Wave,
    Theory,
}

impl PhasorApp {
    pub fn new(session: Session) -> Self {
        Self {
            current_pane: Pane::default(),
            session,
        }
    }

    // Reads every control and returns what the user changed this frame
    fn controls(&mut self, ui: &mut egui::Ui) -> Vec<Interaction> {
        let mut interactions = Vec::new();
        let config = self.session.config().clone();
        let mut controls = *self.session.controls();

        ui.heading("Control Parameters");

        let amplitude = config.amplitude.min..=config.amplitude.max;
        if ui
            .add(egui::Slider::new(&mut controls.amplitude, amplitude).text("Amplitude (A)"))
            .changed()
        {
            interactions.push(Interaction::SetAmplitude(controls.amplitude));
        }

        let omega = config.omega.min..=config.omega.max;
        if ui
            .add(egui::Slider::new(&mut controls.omega, omega).text("Angular Frequency (ω)"))
            .changed()
        {
            interactions.push(Interaction::SetOmega(controls.omega));
        }

        match config.phase_input {
            PhaseInput::Discrete => {
                let selected = PhaseChoice::nearest(controls.phi);
                egui::ComboBox::from_label("Initial Phase (φ)")
                    .selected_text(selected.label)
                    .show_ui(ui, |ui| {
                        for choice in PHASE_CHOICES {
                            if ui.selectable_label(choice == selected, choice.label).clicked() {
                                interactions.push(Interaction::SetPhase(choice.value));
                            }
                        }
                    });
            }
            PhaseInput::Continuous => {
                let phase = 0.0..=std::f64::consts::TAU;
                if ui
                    .add(egui::Slider::new(&mut controls.phi, phase).text("Initial Phase (φ)"))
                    .changed()
                {
                    interactions.push(Interaction::SetPhase(controls.phi));
                }
            }
        }

        let time = config.time.min..=config.time.max;
        if ui
            .add(egui::Slider::new(&mut controls.time, time).text("Current Time (t)"))
            .changed()
        {
            interactions.push(Interaction::SetTime(controls.time));
        }

        let mut animate = self.session.is_animating();
        if ui.checkbox(&mut animate, "Animate").changed() {
            interactions.push(Interaction::SetAnimate(animate));
        }

        ui.separator();

        ui.horizontal(|ui| {
            if ui.button("❄ Freeze").clicked() {
                interactions.push(Interaction::Freeze);
            }
            if ui.button("🗑 Clear all").clicked() {
                interactions.push(Interaction::Reset);
            }
        });

        let store = self.session.store();
        ui.label(Status::store_summary(store.state(), store.len()));
        ui.small(&self.session.status.status_message);

        interactions
    }

    fn show_equations(&self, ui: &mut egui::Ui) {
        let substituted = Substituted::new(self.session.controls());
        egui::CollapsingHeader::new("Current Phase State")
            .default_open(true)
            .show(ui, |ui| {
                for line in substituted.lines() {
                    ui.monospace(line);
                }
            });
    }
}

// Defining each gui pane/clickable functionality
impl App for PhasorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut interactions = Vec::new();

        egui::SidePanel::left("side_panel").show(ctx, |ui| {
            interactions = self.controls(ui);

            ui.separator();
            ui.heading("View");

            if ui.button("Phasor + Wave").clicked() {
                self.current_pane = Pane::Combined;
            }
            if ui.button("Phasor Diagram").clicked() {
                self.current_pane = Pane::Phasor;
            }
            if ui.button("Sine Wave").clicked() {
                self.current_pane = Pane::Wave;
            }
            if ui.button("Theory").clicked() {
                self.current_pane = Pane::Theory;
            }
        });

        self.session.apply_all(interactions);

        let now = ctx.input(|i| i.time);
        self.session.tick(now);
        if self.session.is_animating() {
            ctx.request_repaint_after(self.session.config().animation.delay());
        }

        let scene = Scene::build(&self.session);
        let show_equations = self.session.config().show_equations;

        // Showing the central pane selected
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(APP_TITLE);
            match self.current_pane {
                Pane::Combined => {
                    ui.label("Multiple phasor states visualized on a single sine wave");
                    if show_equations {
                        self.show_equations(ui);
                    }
                    ui.columns(2, |columns| {
                        phasor_plot(&mut columns[0], &scene.phasor);
                        wave_plot(&mut columns[1], &scene.wave);
                    });
                }
                Pane::Phasor => {
                    if show_equations {
                        self.show_equations(ui);
                    }
                    phasor_plot(ui, &scene.phasor);
                }
                Pane::Wave => {
                    if show_equations {
                        self.show_equations(ui);
                    }
                    wave_plot(ui, &scene.wave);
                }
                Pane::Theory => {
                    ui.monospace(equations::PHASE_LAW);
                    ui.monospace(equations::DISPLACEMENT_LAW);
                    ui.add_space(8.0);
                    ui.label(equations::DESCRIPTION);
                    ui.add_space(8.0);
                    self.show_equations(ui);
                }
            }
        });
    }
}

fn draw_curve(plot_ui: &mut PlotUi, curve: &Curve) {
    let mut line = Line::new(PlotPoints::from(curve.points.clone()))
        .color(curve.color)
        .width(curve.width);
    if curve.dashed {
        line = line.style(LineStyle::dashed_loose());
    }
    if let Some(name) = &curve.name {
        line = line.name(name);
    }
    plot_ui.line(line);
}

fn draw_arrow(plot_ui: &mut PlotUi, arrow: &Arrow) {
    let mut arrows = Arrows::new(vec![arrow.origin], vec![arrow.tip])
        .color(arrow.color)
        .tip_length(12.0);
    if let Some(name) = &arrow.name {
        arrows = arrows.name(name);
    }
    plot_ui.arrows(arrows);
}

fn draw_marker(plot_ui: &mut PlotUi, marker: &Marker) {
    plot_ui.points(Points::new(vec![marker.position]).radius(marker.radius).color(marker.color));
}

fn phasor_plot(ui: &mut egui::Ui, panel: &PhasorPanel) {
    let e = panel.extent;
    Plot::new("Phasor Diagram")
        .data_aspect(1.0)
        .legend(Legend::default())
        .include_x(-e)
        .include_x(e)
        .include_y(-e)
        .include_y(e)
        .x_axis_label("x = A cos θ")
        .y_axis_label("y = A sin θ")
        .show(ui, |plot_ui| {
            draw_curve(plot_ui, &panel.circle);
            for projection in &panel.projections {
                draw_curve(plot_ui, projection);
            }
            draw_curve(plot_ui, &panel.arc);
            let label = &panel.angle_label;
            let [x, y] = label.position;
            plot_ui.text(Text::new(PlotPoint::new(x, y), label.text.clone()).color(label.color));
            // later snapshots are drawn on top
            for arrow in &panel.frozen {
                draw_arrow(plot_ui, arrow);
            }
            draw_arrow(plot_ui, &panel.live);
            draw_marker(plot_ui, &panel.tip);
        });
}

fn wave_plot(ui: &mut egui::Ui, panel: &WavePanel) {
    let (t_min, t_max) = panel.time_range;
    Plot::new("Superposition of Frozen Phase Responses")
        .legend(Legend::default())
        .include_x(t_min)
        .include_x(t_max)
        .include_y(-panel.extent)
        .include_y(panel.extent)
        .x_axis_label("Time (t)")
        .y_axis_label("Displacement y(t)")
        .show(ui, |plot_ui| {
            for curve in &panel.frozen {
                draw_curve(plot_ui, curve);
            }
            for marker in &panel.frozen_points {
                draw_marker(plot_ui, marker);
            }
            if let Some(live) = &panel.live {
                draw_curve(plot_ui, live);
            }
            draw_marker(plot_ui, &panel.current);
        });
}

// Outputting the gui
pub fn run_gui(session: Session) -> Result<(), Error> {
    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1280.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(move |cc: &CreationContext| {
            // matches the white plotting background the markers are colored for
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(PhasorApp::new(session)))
        }),
    )?;
    Ok(())
}
