//! Main application for the OSO GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::game_state::{GameMode, GameState};
use super::theme::*;
use crate::config::GameConfig;
use crate::{AppConfig, Outcome, Player, Symbol};

/// Main OSO application
pub struct OsoApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
    /// Game settings, for menu restarts and board size choices
    game_config: GameConfig,
}

impl OsoApp {
    /// Create the app from already-loaded configuration
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Self {
            state: GameState::new(GameMode::from_config(&config.game), config.game.board_size),
            board_view: BoardView::default(),
            show_debug: false,
            game_config: config.game.clone(),
        }
    }

    fn new_game(&mut self, mode: GameMode, board_size: usize) {
        self.state = GameState::new(mode, board_size);
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                let size = self.state.board_size();

                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (vs Computer)").clicked() {
                        self.new_game(GameMode::vs_computer(&self.game_config), size);
                        ui.close_menu();
                    }
                    if ui.button("New Game (vs Human)").clicked() {
                        self.new_game(GameMode::PvP, size);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Restart").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                });

                ui.menu_button("Board", |ui| {
                    for choice in self.game_config.board_sizes.clone() {
                        let label = format!("{}x{}", choice, choice);
                        if ui.radio(choice == size, label).clicked() {
                            self.new_game(self.state.mode, choice);
                            ui.close_menu();
                        }
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { computer } => format!("vs Computer ({})", computer),
                        GameMode::PvP => "vs Human - Hotseat".to_string(),
                    };
                    ui.label(format!("{} | {}x{}", mode_text, size, size));
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_symbol_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.state.outcome() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, outcome);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("OSO").size(26.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let player = self.state.game.current_player();
            let accent = player_color(player);

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    player.number(),
                    egui::FontId::proportional(26.0),
                    TEXT_PRIMARY,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(player.to_string()).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if self.state.is_game_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.state.is_human_turn() {
                        ("Your turn", TIMER_NORMAL)
                    } else {
                        ("Computer's turn", TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render both players' points
    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("POINTS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            for player in [Player::One, Player::Two] {
                ui.horizontal(|ui| {
                    let mut name = player.to_string();
                    if self.state.mode == (GameMode::PvE { computer: player }) {
                        name.push_str(" (AI)");
                    }
                    ui.label(RichText::new(name).size(13.0).color(player_color(player)));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let points = self.state.game.score_of(player);
                        ui.label(RichText::new(points.to_string()).size(16.0).strong().color(TEXT_PRIMARY));
                    });
                });
                ui.add_space(4.0);
            }
        });
    }

    /// Render the O / S selector
    fn render_symbol_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SYMBOL (O / S)").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let enabled = self.state.can_select_symbol();
            let selected = self.state.game.selected_symbol();
            let accent = player_color(self.state.game.current_player());

            ui.horizontal(|ui| {
                for symbol in Symbol::ALL {
                    let color = if symbol == selected { accent } else { TEXT_SECONDARY };
                    let text = RichText::new(symbol.as_char()).size(24.0).strong().color(color);
                    let response = ui.add_enabled(enabled, egui::SelectableLabel::new(symbol == selected, text));
                    if response.clicked() {
                        self.state.select_symbol(symbol);
                    }
                    ui.add_space(8.0);
                }
            });
        });
    }

    /// Render timer card
    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < 0.5 {
                    TIMER_NORMAL
                } else if secs < 2.0 {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{:.2}s", secs)).size(28.0).strong().color(color));
            } else {
                let elapsed = self.state.move_timer.elapsed();
                ui.label(RichText::new(format!("{:.1}s", elapsed.as_secs_f32())).size(24.0).color(TEXT_PRIMARY));
            }

            if let Some(last) = self.state.move_timer.last_move_duration {
                ui.add_space(4.0);
                ui.label(RichText::new(format!("Last move: {:.1}s", last.as_secs_f32())).size(10.0).color(TEXT_SECONDARY));
            }

            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32())).size(10.0).color(TEXT_SECONDARY));
            }
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            if ui.button("New Game (N)").clicked() {
                self.state.reset();
            }

            ui.add_space(8.0);
            ui.label(RichText::new(format!("Move #{}", self.state.move_count)).size(11.0).color(TEXT_SECONDARY));
        });
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            match &self.state.last_ai_result {
                Some(result) => {
                    ui.label(RichText::new(format!("Depth {}  Score {}", result.depth, result.score)).size(11.0).color(TIMER_NORMAL));
                    ui.label(RichText::new(format!("{}ms, {} nodes", result.time_ms, result.nodes)).size(10.0).color(TEXT_SECONDARY));
                    if let Some(mv) = result.best_move {
                        ui.label(RichText::new(format!("-> {}", mv)).size(12.0).strong().color(WIN_HIGHLIGHT));
                    }
                }
                None => {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                }
            }
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: Outcome) {
        let (headline, accent) = match outcome.winner() {
            Some(player) => (format!("{} WINS!", player), player_color(player)),
            None => ("DRAW".to_string(), TEXT_PRIMARY),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(accent));
                    ui.label(
                        RichText::new(format!(
                            "{} - {}",
                            self.state.game.score_of(Player::One),
                            self.state.game.score_of(Player::Two)
                        ))
                        .size(14.0)
                        .color(TEXT_SECONDARY),
                    );
                    ui.add_space(12.0);
                    if ui.button("New Game").clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let interactive = self.state.is_human_turn()
                && !self.state.is_ai_thinking()
                && !self.state.is_game_over();

            let clicked = self.board_view.show(
                ui,
                self.state.game.board(),
                self.state.game.selected_symbol(),
                self.state.last_move,
                interactive,
            );

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_place(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // O / S - choose symbol
            if i.key_pressed(egui::Key::O) {
                self.state.select_symbol(Symbol::O);
            }
            if i.key_pressed(egui::Key::S) {
                self.state.select_symbol(Symbol::S);
            }

            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for OsoApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.tick();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
