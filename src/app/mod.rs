//! Application state machine
//!
//! [`App`] sequences the game screens and owns everything a running game
//! needs: the pool, the current session, player stats, the leaderboard and
//! the session clock's ticker. All mutation happens through its methods on a
//! single thread of control; timer ticks arrive as [`App::on_tick`] calls like
//! any other event.
//!
//! ```text
//!  Home ──start──▶ Quiz ──answer──▶ Result
//!   ▲               ▲                 │
//!   │               └──────next───────┘
//!   │          (clock hits zero in Quiz or Result)
//!   │                      ▼
//!   ├───────────────── GameOver ──submit──▶ Leaderboard
//!   └─────────────── Achievements / Leaderboard
//! ```

mod state;

pub use state::AppState;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::clock::{ClockEpoch, TickOutcome, Ticker};
use crate::config::{Config, GameSettings, LeaderboardSettings};
use crate::domain::{Leaderboard, LeaderboardEntry, OPTION_COUNT, ShuffledQuestion, UserStats};
use crate::error::AppError;
use crate::leaderboard;
use crate::notify::{NotificationSink, dispatch};
use crate::pool::QuizPool;
use crate::progression::{Badge, LevelInfo, ProgressionRules, apply_answer, level_for_xp};
use crate::session::{SessionState, select_next};
use crate::store::{LeaderboardStore, StatsStore};

/// What the result screen shows for the last answer
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerResult {
    pub is_correct: bool,
    pub chosen_index: usize,
    pub correct_index: usize,
    pub correct_option: String,
    pub explanation: String,
    pub xp_gained: u32,
    pub leveled_up: bool,
    pub level: u32,
    /// Bonus seconds added to the clock (0 if none)
    pub bonus_secs: u32,
    pub new_badges: Vec<&'static Badge>,
}

pub struct App {
    state: AppState,
    game: GameSettings,
    leaderboard_settings: LeaderboardSettings,
    rules: ProgressionRules,
    pool: QuizPool,
    session: SessionState,
    question: Option<ShuffledQuestion>,
    last_result: Option<AnswerResult>,
    stats: UserStats,
    leaderboard: Leaderboard,
    stats_store: StatsStore,
    leaderboard_store: LeaderboardStore,
    ticker: Box<dyn Ticker>,
    sink: Option<Box<dyn NotificationSink>>,
    rng: StdRng,
}

impl App {
    /// Create the app in the Home state, loading stats and leaderboard
    pub fn new(
        config: &Config,
        pool: QuizPool,
        stats_store: StatsStore,
        leaderboard_store: LeaderboardStore,
        ticker: Box<dyn Ticker>,
    ) -> Self {
        let mut stats = stats_store.load();
        stats.level = level_for_xp(stats.xp);
        let leaderboard = leaderboard_store.load();
        tracing::info!(
            "Loaded player at level {} ({} XP), {} leaderboard entries, {} questions",
            stats.level,
            stats.xp,
            leaderboard.len(),
            pool.len()
        );

        Self {
            state: AppState::Home,
            game: config.game.clone(),
            leaderboard_settings: config.leaderboard.clone(),
            rules: config.progression_rules(),
            session: SessionState::new(config.game.time_budget_secs),
            pool,
            question: None,
            last_result: None,
            stats,
            leaderboard,
            stats_store,
            leaderboard_store,
            ticker,
            sink: None,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Attach a sink for sound/visual feedback cues
    pub fn with_sink(mut self, sink: Box<dyn NotificationSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Replace the random source (e.g. a seeded one for reproducible runs)
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn stats(&self) -> &UserStats {
        &self.stats
    }

    pub fn level_info(&self) -> LevelInfo {
        LevelInfo::for_xp(self.stats.xp)
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn leaderboard_settings(&self) -> &LeaderboardSettings {
        &self.leaderboard_settings
    }

    /// Question on screen (or last shown)
    pub fn question(&self) -> Option<&ShuffledQuestion> {
        self.question.as_ref()
    }

    pub fn last_result(&self) -> Option<&AnswerResult> {
        self.last_result.as_ref()
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn session_score(&self) -> u32 {
        self.session.score
    }

    pub fn remaining_secs(&self) -> u32 {
        self.session.remaining_secs()
    }

    // ========================================
    // TRANSITIONS
    // ========================================

    /// Home → Quiz: fresh session, first question, clock running
    pub fn start_exploration(&mut self) -> Result<&ShuffledQuestion, AppError> {
        self.require(&[AppState::Home], "start an exploration")?;

        if let Some(stats) = self.game.streak_policy.on_session_start(&self.stats) {
            self.update_stats(stats);
        }

        let budget = self.game.time_budget_secs.max(1);
        self.session.restart(budget);
        tracing::info!("Exploration started with {}s on the clock", budget);

        Ok(self.serve_next())
    }

    /// Quiz → Result: evaluate the answer and update progression
    pub fn answer(&mut self, chosen_index: usize) -> Result<&AnswerResult, AppError> {
        self.require(&[AppState::Quiz], "answer")?;
        if chosen_index >= OPTION_COUNT {
            return Err(AppError::AnswerOutOfRange(chosen_index));
        }
        let Some(question) = self.question.as_ref() else {
            return Err(AppError::InvalidAction {
                state: self.state,
                action: "answer without a question",
            });
        };

        let outcome = apply_answer(&self.stats, chosen_index, question, &self.rules);
        let result = AnswerResult {
            is_correct: outcome.is_correct,
            chosen_index,
            correct_index: question.correct_answer_index,
            correct_option: question.correct_option().to_string(),
            explanation: question.explanation.clone(),
            xp_gained: outcome.xp_gained,
            leveled_up: outcome.leveled_up,
            level: outcome.stats.level,
            bonus_secs: outcome.bonus_secs,
            new_badges: outcome.new_badges.clone(),
        };

        self.session.record_answer(outcome.is_correct, outcome.xp_gained);

        if outcome.bonus_granted {
            self.session.clock.grant(outcome.bonus_secs);
            tracing::info!(
                "Streak of {} earned +{}s",
                outcome.stats.streak,
                outcome.bonus_secs
            );
        }
        if outcome.leveled_up {
            tracing::info!("Level up: {} -> {}", self.stats.level, outcome.stats.level);
        }
        for badge in &outcome.new_badges {
            tracing::info!("Badge unlocked: {} ({})", badge.name, badge.id);
        }

        for cue in outcome.notifications() {
            dispatch(self.sink.as_deref(), cue);
        }

        self.update_stats(outcome.stats);
        self.enter(AppState::Result);

        Ok(self.last_result.insert(result))
    }

    /// Result → Quiz: next question, clock keeps its remaining time
    pub fn next_question(&mut self) -> Result<&ShuffledQuestion, AppError> {
        self.require(&[AppState::Result], "move to the next question")?;
        Ok(self.serve_next())
    }

    /// Feed one clock tick. Expiry forces GameOver from Quiz or Result.
    pub fn on_tick(&mut self, epoch: ClockEpoch) -> TickOutcome {
        if !self.state.is_timed() {
            return TickOutcome::Stale;
        }

        let outcome = self.session.clock.tick(epoch);
        if outcome == TickOutcome::Expired {
            tracing::info!(
                "Time is up: {} points from {} answers",
                self.session.score,
                self.session.answered
            );
            self.enter(AppState::GameOver);
        }
        outcome
    }

    /// GameOver → Leaderboard: record the session score.
    ///
    /// Returns `Ok(false)` and stays on GameOver when the name is blank.
    pub fn submit_score(&mut self, name: &str) -> Result<bool, AppError> {
        self.require(&[AppState::GameOver], "record a score")?;

        let entry = LeaderboardEntry::today(name, self.session.score);
        let Some(board) = leaderboard::submit(&self.leaderboard, entry, &self.leaderboard_settings)
        else {
            tracing::debug!("Ignoring leaderboard submission with a blank name");
            return Ok(false);
        };

        self.leaderboard = board;
        if let Err(e) = self.leaderboard_store.save(&self.leaderboard) {
            tracing::warn!("Failed to save leaderboard: {}", e);
        }
        self.enter(AppState::Leaderboard);
        Ok(true)
    }

    /// Back to Home from anywhere. Leaving Quiz or Result abandons the session.
    pub fn go_home(&mut self) {
        self.enter(AppState::Home);
    }

    /// Open the achievements view from anywhere
    pub fn show_achievements(&mut self) {
        self.enter(AppState::Achievements);
    }

    /// Open the hall of fame. The achievements view only leads back Home.
    pub fn show_leaderboard(&mut self) -> Result<(), AppError> {
        if self.state == AppState::Achievements {
            return Err(AppError::InvalidAction {
                state: self.state,
                action: "open the leaderboard",
            });
        }
        self.enter(AppState::Leaderboard);
        Ok(())
    }

    // ========================================
    // INTERNALS
    // ========================================

    fn require(&self, allowed: &[AppState], action: &'static str) -> Result<(), AppError> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(AppError::InvalidAction {
                state: self.state,
                action,
            })
        }
    }

    fn serve_next(&mut self) -> &ShuffledQuestion {
        let question = select_next(
            &self.pool,
            &mut self.session.served_ids,
            self.game.exhaustion_policy,
            &mut self.rng,
        );
        self.last_result = None;
        self.enter(AppState::Quiz);
        self.question.insert(question)
    }

    /// Switch state, keeping the clock running exactly while in Quiz/Result
    fn enter(&mut self, to: AppState) {
        let from = self.state;
        self.state = to;

        if to.is_timed() {
            if let Some(epoch) = self.session.clock.start() {
                self.ticker.start(epoch);
            }
        } else if from.is_timed() {
            self.session.clock.stop();
            self.ticker.stop();
        }

        if from != to {
            tracing::debug!("State {} -> {}", from, to);
        }
    }

    fn update_stats(&mut self, stats: UserStats) {
        self.stats = stats;
        if let Err(e) = self.stats_store.save(&self.stats) {
            tracing::warn!("Failed to save player stats: {}", e);
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.ticker.stop();
    }
}
