// Demo: a card grid navigable entirely with arrow keys / Enter / Escape

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use eframe::egui;

use dpadnav::config::load_cfg;
use dpadnav::focus::operations::{FocusRegistry, draw_focus_ring_if_focused, map_key};
use dpadnav::{FocusHost, NavConfig, Navigator};

fn config_path() -> PathBuf {
    dirs_home().join(".config").join("dpadnav").join("nav.json")
}

fn dirs_home() -> PathBuf {
    std::env::var_os("HOME").map(PathBuf::from).unwrap_or_default()
}

fn main() -> eframe::Result {
    let config = load_cfg(&config_path());
    println!(
        "[dpadnav] deadzone {}px, cross-axis weight {}, auto-focus after {}ms",
        config.deadzone_px, config.cross_axis_weight, config.autofocus_delay_ms
    );

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "dpadnav demo",
        options,
        Box::new(|_cc| Ok(Box::new(DemoApp::new(config)))),
    )
}

struct DemoApp {
    config: NavConfig,
    registry: FocusRegistry,
    navigator: Navigator,
    status: Rc<RefCell<String>>,
}

impl DemoApp {
    fn new(config: NavConfig) -> Self {
        let status = Rc::new(RefCell::new(String::from("arrows move, Enter selects, Esc backs out")));

        let on_select = status.clone();
        let on_back = status.clone();
        let navigator = Navigator::new(&config)
            .on_select(move || *on_select.borrow_mut() = String::from("select"))
            .on_back(move || *on_back.borrow_mut() = String::from("back"));

        Self {
            config,
            registry: FocusRegistry::new(),
            navigator,
            status,
        }
    }

    fn card(&mut self, ui: &mut egui::Ui, title: &str) {
        let response = ui.add_sized([160.0, 90.0], egui::Button::new(title));
        if response.clicked() || self.registry.was_activated(response.id) {
            *self.status.borrow_mut() = format!("opened {title}");
        }
        draw_focus_ring_if_focused(ui, response.rect, response.has_focus());
        self.registry.register(&response);
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.registry.begin_frame(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("dpadnav");
            ui.label(self.status.borrow().clone());
            ui.separator();

            ui.horizontal(|ui| {
                for label in ["Play", "Details", "Queue"] {
                    let response = ui.button(label);
                    if response.clicked() || self.registry.was_activated(response.id) {
                        *self.status.borrow_mut() = format!("{label} pressed");
                    }
                    draw_focus_ring_if_focused(ui, response.rect, response.has_focus());
                    self.registry.register(&response);
                }
            });

            ui.add_space(12.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::Grid::new("card_grid").spacing([12.0, 12.0]).show(ui, |ui| {
                    for row in 0..4 {
                        for col in 0..3 {
                            let title = format!("Card {}", row * 3 + col + 1);
                            self.card(ui, &title);
                        }
                        ui.end_row();
                    }
                });
            });
        });

        // Decode key presses after the frame's widgets have registered
        let inputs: Vec<_> = ctx.input(|input| {
            input
                .events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key { key, pressed: true, .. } => map_key(*key),
                    _ => None,
                })
                .collect()
        });
        for input in inputs {
            self.navigator.handle_input(&mut self.registry, input);
        }

        self.navigator.tick(&mut self.registry);

        // Keep repainting until the mount auto-focus has had a chance to run
        if self.registry.focused().is_none() {
            ctx.request_repaint_after(Duration::from_millis(self.config.autofocus_delay_ms.max(16)));
        }
    }
}
