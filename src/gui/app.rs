//! Main Searchpad Application

use crate::gui::colors;
use crate::gui::search::SearchState;
use crate::query::{self, SearchMode};
use crate::SearchpadError;
use eframe::egui;

/// Text rendered as the colored wordmark above the search box.
const WORDMARK: &str = "Searchpad";

/// Main application state
///
/// One controller struct owning all widget state, constructed once at
/// startup.
pub struct SearchpadApp {
    /// Search box state
    search: SearchState,
    /// Last URL handed to the browser
    last_url: Option<String>,
    /// Show about dialog
    show_about: bool,
    /// Status bar message
    status_message: String,
}

impl Default for SearchpadApp {
    fn default() -> Self {
        Self {
            search: SearchState::new(),
            last_url: None,
            show_about: false,
            status_message: "Ready".to_string(),
        }
    }
}

impl SearchpadApp {
    /// Create a new SearchpadApp
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // White window, matching the classic search page
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::default()
    }

    /// Dispatch the current query in the given mode.
    ///
    /// An empty query stays a silent no-op: no status change, no
    /// feedback.
    fn activate(&mut self, mode: SearchMode) {
        if let Some(url) = query::dispatch(&self.search.query, mode) {
            tracing::info!(mode = mode.label(), url = %url, "dispatched search");
            self.status_message = format!("Opened {}", url);
            self.last_url = Some(url);
        }
    }

    /// Copy the standard search URL for the current query to the clipboard.
    fn copy_search_url(&mut self) {
        if self.search.query.is_empty() {
            return;
        }

        let url = query::build_search_url(&self.search.query);
        match copy_to_clipboard(&url) {
            Ok(()) => self.status_message = format!("Copied {}", url),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard copy failed");
                self.status_message = e.to_string();
            }
        }
    }

    /// Render menu bar
    fn render_menu(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Edit", |ui| {
                    if ui.button("Copy Search URL").clicked() {
                        self.copy_search_url();
                        ui.close_menu();
                    }
                    if ui.button("Clear Query").clicked() {
                        self.search.query.clear();
                        ui.close_menu();
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About Searchpad").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });
    }

    /// Render status bar
    fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status_message);
            });
        });
    }

    /// Render about dialog
    fn render_about_dialog(&mut self, ctx: &egui::Context) {
        if self.show_about {
            egui::Window::new("About Searchpad")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Searchpad");
                        ui.label(format!("Version {}", crate::VERSION));
                        ui.add_space(10.0);
                        ui.label("Minimal web search launcher");
                        ui.label("Opens searches in your default browser");
                        ui.add_space(10.0);
                        if ui.button("OK").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }

    /// Render the central search panel: wordmark, entry, two buttons
    fn render_search_panel(&mut self, ui: &mut egui::Ui) {
        ui.add_space(ui.available_height() * 0.18);

        ui.vertical_centered(|ui| {
            ui.label(wordmark_job());
            ui.add_space(24.0);

            let response = ui.add(
                egui::TextEdit::singleline(&mut self.search.query)
                    .desired_width(420.0)
                    .hint_text("Search the web..."),
            );

            if self.search.first_frame {
                response.request_focus();
                self.search.first_frame = false;
            }

            // Enter in the entry triggers the standard search
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                self.search.pending = Some(SearchMode::Standard);
                response.request_focus();
            }

            ui.add_space(16.0);

            let button_size = egui::vec2(130.0, 30.0);
            ui.horizontal(|ui| {
                let row_width = button_size.x * 2.0 + ui.spacing().item_spacing.x;
                ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));

                for mode in [SearchMode::Standard, SearchMode::Lucky] {
                    let button = egui::Button::new(mode.label())
                        .fill(colors::BUTTON_FILL)
                        .min_size(button_size);
                    if ui.add(button).clicked() {
                        self.search.pending = Some(mode);
                    }
                }
            });
        });
    }
}

impl eframe::App for SearchpadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(mode) = self.search.pending.take() {
            self.activate(mode);
        }

        self.render_menu(ctx);
        self.render_status_bar(ctx);
        self.render_about_dialog(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_search_panel(ui);
        });
    }
}

/// Layout job rendering the wordmark with per-letter colors.
fn wordmark_job() -> egui::text::LayoutJob {
    let mut job = egui::text::LayoutJob::default();
    for (i, ch) in WORDMARK.chars().enumerate() {
        job.append(
            &ch.to_string(),
            0.0,
            egui::TextFormat {
                font_id: egui::FontId::proportional(40.0),
                color: colors::logo_color(i),
                ..Default::default()
            },
        );
    }
    job
}

/// Copy text to the system clipboard.
fn copy_to_clipboard(text: &str) -> crate::Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| SearchpadError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_owned())
        .map_err(|e| SearchpadError::Clipboard(e.to_string()))
}
