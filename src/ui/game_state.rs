//! Game state management for the OSO GUI

use crate::config::GameConfig;
use crate::{AIEngine, GameEngine, Move, MoveResult, Opponent, Outcome, Player, Pos, Symbol};
use log::{debug, info};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs computer
    PvE { computer: Player },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { computer: Player::Two }
    }
}

impl GameMode {
    /// Mode requested by the configuration at startup
    pub fn from_config(config: &GameConfig) -> Self {
        match config.opponent {
            Opponent::Computer => Self::vs_computer(config),
            Opponent::Human => GameMode::PvP,
        }
    }

    /// Computer game on the configured side, whatever the startup opponent was
    pub fn vs_computer(config: &GameConfig) -> Self {
        GameMode::PvE { computer: config.computer() }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub game: GameEngine,
    pub mode: GameMode,
    pub last_move: Option<Move>,
    pub move_count: usize,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(mode: GameMode, board_size: usize) -> Self {
        info!("New {}x{} game, mode {:?}", board_size, board_size, mode);
        Self {
            game: GameEngine::new(board_size),
            mode,
            last_move: None,
            move_count: 0,
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            message: None,
        }
    }

    /// Start over with the same mode and board size
    pub fn reset(&mut self) {
        *self = Self::new(self.mode, self.game.board_size());
    }

    pub fn board_size(&self) -> usize {
        self.game.board_size()
    }

    pub fn is_game_over(&self) -> bool {
        self.game.is_full()
    }

    /// Final result once the board is full
    pub fn outcome(&self) -> Option<Outcome> {
        self.is_game_over().then(|| self.game.winner())
    }

    /// Check if it's a human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { computer } => self.game.current_player() != computer,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Only the acting human may change the symbol
    pub fn can_select_symbol(&self) -> bool {
        self.is_human_turn() && !self.is_ai_thinking() && !self.is_game_over()
    }

    pub fn select_symbol(&mut self, symbol: Symbol) {
        if self.can_select_symbol() {
            self.game.select_symbol(symbol);
        }
    }

    /// Attempt to place the selected symbol at the given position
    pub fn try_place(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_game_over() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        let mv = Move::new(pos.row, pos.col, self.game.selected_symbol());
        if !self.execute_move(mv) {
            return Err("Invalid move (occupied)".to_string());
        }
        Ok(())
    }

    /// Execute a move (for both human and AI). Returns false if rejected.
    fn execute_move(&mut self, mv: Move) -> bool {
        let player = self.game.current_player();

        self.game.select_symbol(mv.symbol);
        let placement = self.game.place(mv.row, mv.col);
        if !placement.accepted {
            return false;
        }

        debug!("{} placed {}: {} point(s)", player, mv, placement.points);
        self.move_count += 1;
        self.last_move = Some(mv);
        self.move_timer.stop();

        self.message = (placement.points > 0).then(|| {
            format!("{} scored {} - move again", player, placement.points)
        });

        if let Some(outcome) = self.outcome() {
            info!(
                "Game over: {} ({} - {})",
                outcome,
                self.game.score_of(Player::One),
                self.game.score_of(Player::Two)
            );
            return true;
        }

        self.move_timer.start();
        true
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.is_game_over() {
            return;
        }

        let game = self.game.clone();
        let player = game.current_player();

        let (tx, rx) = channel();

        thread::spawn(move || {
            let engine = AIEngine::new(&game, player);
            let result = engine.get_move_with_stats(&game);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(std::sync::mpsc::TryRecvError::Empty) => None,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.last_ai_result = Some(move_result.clone());
            self.move_timer.set_ai_time(elapsed);

            match move_result.best_move {
                Some(mv) => {
                    self.execute_move(mv);
                }
                None => self.message = Some("AI could not find a move".to_string()),
            }
        }
    }

    /// Per-frame step: collect a finished search, then start the next one
    /// while the computer still holds the turn after a scoring move
    pub fn tick(&mut self) {
        self.check_ai_result();
        self.start_ai_thinking();
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wait_for_ai(state: &mut GameState) {
        let deadline = Instant::now() + Duration::from_secs(30);
        while state.is_ai_thinking() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
            state.check_ai_result();
        }
    }

    /// Let the computer play until the turn passes back or the board fills
    fn run_computer_turn(state: &mut GameState) {
        let deadline = Instant::now() + Duration::from_secs(60);
        state.tick();
        while (state.is_ai_thinking() || (state.is_ai_turn() && !state.is_game_over()))
            && Instant::now() < deadline
        {
            thread::sleep(Duration::from_millis(5));
            state.tick();
        }
    }

    #[test]
    fn test_mode_from_config() {
        let mut config = GameConfig::default();
        assert_eq!(GameMode::from_config(&config), GameMode::PvE { computer: Player::Two });

        config.opponent = Opponent::Human;
        assert_eq!(GameMode::from_config(&config), GameMode::PvP);
    }

    #[test]
    fn test_new_computer_game_keeps_configured_side() {
        let config = GameConfig {
            opponent: Opponent::Human,
            computer_player: 1,
            ..GameConfig::default()
        };
        assert_eq!(GameMode::vs_computer(&config), GameMode::PvE { computer: Player::One });

        let state = GameState::new(GameMode::vs_computer(&config), 3);
        assert!(state.is_ai_turn());
    }

    #[test]
    fn test_pve_turns() {
        let mut state = GameState::new(GameMode::PvE { computer: Player::Two }, 3);
        assert!(state.is_human_turn());

        state.try_place(Pos::new(1, 1)).unwrap();
        assert!(state.is_ai_turn());
        assert_eq!(state.try_place(Pos::new(0, 0)), Err("Not your turn".to_string()));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut state = GameState::new(GameMode::PvP, 3);
        state.try_place(Pos::new(0, 0)).unwrap();
        assert!(state.try_place(Pos::new(0, 0)).is_err());
        assert_eq!(state.move_count, 1);
    }

    #[test]
    fn test_symbol_locked_during_ai_turn() {
        let mut state = GameState::new(GameMode::PvE { computer: Player::Two }, 3);
        state.select_symbol(Symbol::O);
        assert_eq!(state.game.selected_symbol(), Symbol::O);

        state.try_place(Pos::new(2, 2)).unwrap();
        state.select_symbol(Symbol::S);
        assert_eq!(state.game.selected_symbol(), Symbol::O);
    }

    #[test]
    fn test_scoring_sets_message() {
        let mut state = GameState::new(GameMode::PvP, 3);
        for (c, symbol) in [(0, Symbol::O), (1, Symbol::S), (2, Symbol::O)] {
            state.select_symbol(symbol);
            state.try_place(Pos::new(0, c)).unwrap();
        }
        assert_eq!(state.message.as_deref(), Some("Player 1 scored 1 - move again"));
        assert_eq!(state.game.current_player(), Player::One);
    }

    #[test]
    fn test_ai_replies_on_worker_thread() {
        let mut state = GameState::new(GameMode::PvE { computer: Player::Two }, 3);
        state.try_place(Pos::new(1, 1)).unwrap();

        state.start_ai_thinking();
        assert!(state.is_ai_thinking());
        wait_for_ai(&mut state);

        assert!(!state.is_ai_thinking());
        assert_eq!(state.move_count, 2);
        assert!(state.last_ai_result.is_some());
    }

    #[test]
    fn test_game_over_on_full_board() {
        let mut state = GameState::new(GameMode::PvP, 1);
        assert_eq!(state.outcome(), None);
        state.try_place(Pos::new(0, 0)).unwrap();
        assert!(state.is_game_over());
        assert_eq!(state.outcome(), Some(Outcome::Draw));
        assert!(state.try_place(Pos::new(0, 0)).is_err());
    }

    #[test]
    fn test_timer_records_last_move() {
        let mut state = GameState::new(GameMode::PvP, 3);
        assert_eq!(state.move_timer.last_move_duration, None);
        state.try_place(Pos::new(0, 0)).unwrap();
        assert!(state.move_timer.last_move_duration.is_some());
    }

    #[test]
    fn test_computer_keeps_turn_after_scoring() {
        let mut state = GameState::new(GameMode::PvE { computer: Player::Two }, 3);
        for (r, c, symbol) in [(0, 0, Symbol::O), (0, 1, Symbol::S), (2, 2, Symbol::S)] {
            state.game.select_symbol(symbol);
            state.game.place(r, c);
        }
        assert!(state.is_ai_turn());

        state.tick();
        assert!(state.is_ai_thinking());
        wait_for_ai(&mut state);

        assert_eq!(state.last_move, Some(Move::new(0, 2, Symbol::O)));
        assert_eq!(state.game.score_of(Player::Two), 1);
        assert!(state.is_ai_turn());
        assert!(!state.is_ai_thinking());

        state.tick();
        assert!(state.is_ai_thinking());

        run_computer_turn(&mut state);
        assert!(!state.is_ai_thinking());
        assert!(state.is_human_turn() || state.is_game_over());
        assert!(state.game.board().filled_count() >= 5);
    }

    #[test]
    fn test_tick_idle_on_human_turn() {
        let mut state = GameState::new(GameMode::PvE { computer: Player::Two }, 3);
        state.tick();
        assert!(!state.is_ai_thinking());
        assert_eq!(state.move_count, 0);
    }
}
