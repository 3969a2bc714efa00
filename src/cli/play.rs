//! Play command: the interactive game loop
//!
//! Input lines and clock ticks are merged in one `select!` loop, so the app
//! is only ever touched from this task.

use anyhow::{Context, Result};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use bookquiz::app::{App, AppState};
use bookquiz::clock::{TickOutcome, TokioTicker};
use bookquiz::config::Config;
use bookquiz::leaderboard::{normalize_name, rank_of};
use bookquiz::notify::NotificationSink;
use bookquiz::store::JsonFileStore;
use bookquiz::{Leaderboard, Notification, OPTION_COUNT, UserStats};

use super::board::{print_achievements, print_leaderboard, print_stats};

/// Typed in place of a name on the game-over screen to skip the hall of fame
const SKIP_NAME: &str = "/home";

/// Rings the terminal bell for level-ups and streak bonuses
struct BellSink;

impl NotificationSink for BellSink {
    fn notify(&self, notification: Notification) -> Result<()> {
        if matches!(
            notification,
            Notification::LevelUp { .. } | Notification::StreakBonus { .. }
        ) {
            let mut out = std::io::stdout();
            out.write_all(b"\x07")?;
            out.flush()?;
        }
        Ok(())
    }
}

enum Flow {
    Continue,
    Quit,
}

pub async fn play_command(config: &Config) -> Result<()> {
    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel();

    let mut app = App::new(
        config,
        config.load_pool(),
        Box::new(JsonFileStore::<UserStats>::new(config.stats_path())),
        Box::new(JsonFileStore::<Leaderboard>::new(config.leaderboard_path())),
        Box::new(TokioTicker::per_second(tick_tx)),
    )
    .with_sink(Box::new(BellSink));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    render(&app);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    break;
                };
                if let Flow::Quit = handle_input(&mut app, line.trim()) {
                    break;
                }
                render(&app);
            }
            Some(epoch) = tick_rx.recv() => {
                match app.on_tick(epoch) {
                    TickOutcome::Expired => {
                        println!("\n⏰ Time's up!");
                        render(&app);
                    }
                    TickOutcome::Running { remaining_secs } if worth_announcing(remaining_secs) => {
                        println!("  ⏳ {}s left", remaining_secs);
                    }
                    _ => {}
                }
            }
        }
    }

    println!("See you in the forest!");
    Ok(())
}

fn worth_announcing(remaining_secs: u32) -> bool {
    remaining_secs <= 5 || remaining_secs % 15 == 0
}

fn handle_input(app: &mut App, input: &str) -> Flow {
    match app.state() {
        AppState::Home if input.is_empty() || input == "s" => {
            if let Err(e) = app.start_exploration() {
                println!("  {}", e);
            }
            Flow::Continue
        }
        AppState::Quiz => match input.parse::<usize>() {
            Ok(n) if (1..=OPTION_COUNT).contains(&n) => {
                if let Err(e) = app.answer(n - 1) {
                    println!("  {}", e);
                }
                Flow::Continue
            }
            _ => navigate(app, input),
        },
        AppState::Result if input.is_empty() || input == "n" => {
            if let Err(e) = app.next_question() {
                println!("  {}", e);
            }
            Flow::Continue
        }
        AppState::GameOver if input == SKIP_NAME => {
            app.go_home();
            Flow::Continue
        }
        AppState::GameOver => {
            match app.submit_score(input) {
                Ok(true) => announce_rank(app, input),
                Ok(false) => println!("  A name is needed for the hall of fame."),
                Err(e) => println!("  {}", e),
            }
            Flow::Continue
        }
        _ => navigate(app, input),
    }
}

fn announce_rank(app: &App, input: &str) {
    let max_chars = app.leaderboard_settings().name_max_chars;
    let rank = normalize_name(input, max_chars)
        .and_then(|name| rank_of(app.leaderboard(), &name, app.session_score()));
    match rank {
        Some(rank) => println!("  You placed #{} in the hall of fame!", rank),
        None => println!("  Not enough for the hall of fame this time."),
    }
}

/// Keys that work on every screen except game over
fn navigate(app: &mut App, input: &str) -> Flow {
    match input {
        "h" => app.go_home(),
        "a" => app.show_achievements(),
        "l" => {
            if let Err(e) = app.show_leaderboard() {
                println!("  {}", e);
            }
        }
        "q" => return Flow::Quit,
        _ => println!("  Unknown choice '{}'", input),
    }
    Flow::Continue
}

fn render(app: &App) {
    match app.state() {
        AppState::Home => {
            print_stats(app.stats());
            println!("\n[Enter] start exploring  [l] hall of fame  [a] achievements  [q] quit");
        }
        AppState::Quiz => {
            let Some(question) = app.question() else {
                return;
            };
            println!(
                "\n📚 {}    ⏳ {}s    ⭐ {}    🔥 {}",
                question.book_title,
                app.remaining_secs(),
                app.session_score(),
                app.session().streak
            );
            println!("\n  {}\n", question.question);
            for (i, option) in question.options.iter().enumerate() {
                println!("  {}) {}", i + 1, option);
            }
            println!("\n[1-{}] answer  [h] home  [q] quit", OPTION_COUNT);
        }
        AppState::Result => {
            let Some(result) = app.last_result() else {
                return;
            };
            if result.is_correct {
                println!("\n  ✔ Correct! +{} XP", result.xp_gained);
            } else {
                println!("\n  ✘ Not quite. The answer was: {}", result.correct_option);
            }
            println!("  {}", result.explanation);
            if result.bonus_secs > 0 {
                println!("  🔥 Streak bonus: +{}s", result.bonus_secs);
            }
            if result.leveled_up {
                println!("  🎉 Level up! You reached level {}", result.level);
            }
            for badge in &result.new_badges {
                println!("  {} New badge: {}", badge.icon, badge.name);
            }
            println!(
                "\n⏳ {}s left    [Enter] next question  [h] home",
                app.remaining_secs()
            );
        }
        AppState::GameOver => {
            println!("\n  Final score: {}", app.session_score());
            println!("  Your name for the hall of fame ({} to skip):", SKIP_NAME);
        }
        AppState::Leaderboard => {
            print_leaderboard(app.leaderboard());
            println!("\n[h] home  [a] achievements  [q] quit");
        }
        AppState::Achievements => {
            print_achievements(app.stats());
            println!("\n[h] home  [q] quit");
        }
    }
}
