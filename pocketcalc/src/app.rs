//! pocketcalc application

use egui::{Context, Key};
use pocketcore::dispatch::{self, Command, KEYPAD};
use pocketcore::theme::CalcColors;
use pocketcore::{CalcError, CalcTheme, CalculatorEngine, EngineState, Settings};

use crate::clipboard::copy_to_clipboard;

const DIGIT_KEYS: [(Key, &str); 10] = [
    (Key::Num0, "0"),
    (Key::Num1, "1"),
    (Key::Num2, "2"),
    (Key::Num3, "3"),
    (Key::Num4, "4"),
    (Key::Num5, "5"),
    (Key::Num6, "6"),
    (Key::Num7, "7"),
    (Key::Num8, "8"),
    (Key::Num9, "9"),
];

pub struct PocketCalcApp {
    engine: CalculatorEngine,
    settings: Settings,
    settings_dirty: bool,
    theme: CalcTheme,
    show_about: bool,
}

impl PocketCalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        Self {
            engine: CalculatorEngine::new().with_repeat_equals(settings.repeat_equals),
            settings,
            settings_dirty: false,
            theme: CalcTheme::default(),
            show_about: false,
        }
    }

    /// Forward one button or key press to the engine.
    fn press(&mut self, label: &str) {
        let command = match label.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                tracing::warn!("{err}");
                return;
            }
        };

        match dispatch::apply(&mut self.engine, command) {
            Ok(display) => {
                if command == Command::Equals
                    && self.settings.copy_on_equals
                    && self.engine.state() == EngineState::ResultShown
                {
                    self.copy(&display.primary);
                }
            }
            // the secondary display already shows the message
            Err(CalcError::DivideByZero) => {}
            Err(err) => tracing::warn!("{err}"),
        }
    }

    fn copy(&self, text: &str) {
        if text.is_empty() {
            return;
        }
        match copy_to_clipboard(text) {
            Ok(()) => tracing::debug!("copied {text} to clipboard"),
            Err(err) => tracing::warn!("failed to copy to clipboard: {err}"),
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        let mut labels: Vec<&'static str> = Vec::new();
        let mut copy = false;

        ctx.input(|i| {
            if i.modifiers.command {
                copy = i.key_pressed(Key::C);
                return;
            }

            let shift = i.modifiers.shift;

            if !shift {
                for (key, label) in DIGIT_KEYS {
                    if i.key_pressed(key) {
                        labels.push(label);
                    }
                }
            }

            if i.key_pressed(Key::Period) {
                labels.push(".");
            }

            if i.key_pressed(Key::Plus) || (shift && i.key_pressed(Key::Equals)) {
                labels.push("+");
            } else if i.key_pressed(Key::Enter) || i.key_pressed(Key::Equals) {
                labels.push("=");
            }
            if i.key_pressed(Key::Minus) {
                labels.push("−");
            }
            if shift && i.key_pressed(Key::Num8) {
                labels.push("×");
            }
            if i.key_pressed(Key::Slash) {
                labels.push("÷");
            }

            if i.key_pressed(Key::Escape) || i.key_pressed(Key::C) {
                labels.push("AC");
            }
            if i.key_pressed(Key::Backspace) {
                labels.push("←");
            }
        });

        if copy {
            self.copy(self.engine.primary());
        }
        for label in labels {
            self.press(label);
        }
    }

    /// Remember the window size and save settings on close.
    fn track_window(&mut self, ctx: &Context) {
        let (rect, closing) = ctx.input(|i| (i.viewport().inner_rect, i.viewport().close_requested()));

        if let Some(rect) = rect {
            let (w, h) = (rect.width(), rect.height());
            if (w - self.settings.window_width).abs() > 0.5
                || (h - self.settings.window_height).abs() > 0.5
            {
                self.settings.window_width = w;
                self.settings.window_height = h;
                self.settings_dirty = true;
            }
        }

        if closing && self.settings_dirty {
            match self.settings.save() {
                Ok(()) => self.settings_dirty = false,
                Err(err) => tracing::warn!("failed to save settings: {err}"),
            }
        }
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        let primary = self.engine.primary();
        let secondary = self.engine.secondary();

        self.theme.display_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                // placeholder when nothing is typed
                let primary_text = if primary.is_empty() {
                    egui::RichText::new("0").color(CalcColors::GRAY)
                } else {
                    egui::RichText::new(primary).color(CalcColors::BLACK)
                };
                ui.label(primary_text.size(self.theme.font_size_primary));
                ui.label(
                    egui::RichText::new(secondary)
                        .size(self.theme.font_size_secondary)
                        .color(CalcColors::GRAY),
                );
            });
        });
    }

    fn render_keypad(&mut self, ui: &mut egui::Ui) {
        let mut clicked = None;

        for row in KEYPAD {
            ui.horizontal(|ui| {
                for key in row {
                    if ui.add(self.theme.key_button(key.label, key.span)).clicked() {
                        clicked = Some(key.label);
                    }
                }
            });
        }

        if let Some(label) = clicked {
            self.press(label);
        }
    }

    fn render_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("edit", |ui| {
                if ui.button("copy").clicked() {
                    self.copy(self.engine.primary());
                    ui.close_menu();
                }
                if ui.button("clear").clicked() {
                    self.press("AC");
                    ui.close_menu();
                }
            });
            ui.menu_button("options", |ui| {
                if ui
                    .checkbox(&mut self.settings.repeat_equals, "repeat last operation on =")
                    .changed()
                {
                    self.engine.set_repeat_equals(self.settings.repeat_equals);
                    self.settings_dirty = true;
                }
                if ui
                    .checkbox(&mut self.settings.copy_on_equals, "copy results")
                    .changed()
                {
                    self.settings_dirty = true;
                }
            });
            ui.menu_button("help", |ui| {
                if ui.button("about").clicked() {
                    self.show_about = true;
                    ui.close_menu();
                }
            });
        });
    }

    fn render_about(&mut self, ctx: &Context) {
        egui::Window::new("about calculator")
            .collapsible(false)
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("calculator");
                    ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
                    ui.add_space(4.0);
                    ui.label("a four-function pocket calculator");
                });
                ui.add_space(4.0);
                ui.separator();
                ui.label("keys: 0-9 . + - * / Enter Esc Backspace");
                ui.label("copy: Ctrl+C");
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
    }
}

impl eframe::App for PocketCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);
        self.track_window(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            self.render_menu(ui);
        });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(CalcColors::WHITE)
                    .inner_margin(egui::Margin::same(self.theme.window_padding)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.render_display(ui);
                    ui.add_space(self.theme.key_spacing);
                    self.render_keypad(ui);
                });
            });

        if self.show_about {
            self.render_about(ctx);
        }
    }
}
