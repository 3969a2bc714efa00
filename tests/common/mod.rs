//! Shared test utilities for game integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

use bookquiz::app::App;
use bookquiz::clock::{ManualTicker, TickOutcome};
use bookquiz::config::Config;
use bookquiz::pool::QuizPool;
use bookquiz::store::JsonFileStore;
use bookquiz::{Leaderboard, QuizItem, UserStats};

/// Config whose data directory lives in a fresh temp dir
pub fn temp_config() -> (TempDir, Config) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = Config::default();
    config.storage.data_dir = Some(temp_dir.path().to_path_buf());
    (temp_dir, config)
}

/// Items whose correct answer is always "Fern" before shuffling
pub fn sample_items(count: u32) -> Vec<QuizItem> {
    (1..=count)
        .map(|id| QuizItem {
            id,
            book_title: format!("Forest Tales {}", id),
            question: format!("Which plant hides the map in chapter {}?", id),
            options: ["Fern", "Moss", "Oak", "Ivy"].map(String::from),
            correct_answer_index: 0,
            explanation: "The map was tucked under a fern leaf.".to_string(),
        })
        .collect()
}

pub fn sample_pool(count: u32) -> QuizPool {
    QuizPool::new(sample_items(count)).expect("sample pool is valid")
}

pub fn write_pool_file(dir: &Path, items: &[QuizItem]) -> PathBuf {
    let path = dir.join("pool.json");
    let json = serde_json::to_string_pretty(items).expect("Failed to serialize pool");
    std::fs::write(&path, json).expect("Failed to write pool");
    path
}

/// App backed by JSON files under the config's data dir
pub fn file_backed_app(config: &Config, pool: QuizPool, seed: u64) -> (App, ManualTicker) {
    let ticker = ManualTicker::new();
    let app = App::new(
        config,
        pool,
        Box::new(JsonFileStore::<UserStats>::new(config.stats_path())),
        Box::new(JsonFileStore::<Leaderboard>::new(config.leaderboard_path())),
        Box::new(ticker.clone()),
    )
    .with_rng(StdRng::seed_from_u64(seed));
    (app, ticker)
}

pub fn answer_correctly(app: &mut App) {
    let index = app
        .question()
        .expect("a question is on screen")
        .correct_answer_index;
    app.answer(index).expect("answering in Quiz succeeds");
}

pub fn answer_wrongly(app: &mut App) {
    let index = app
        .question()
        .expect("a question is on screen")
        .correct_answer_index;
    app.answer((index + 1) % 4)
        .expect("answering in Quiz succeeds");
}

/// Feed ticks from the running countdown until it expires
pub fn expire_clock(app: &mut App, ticker: &ManualTicker) {
    let epoch = ticker.active().expect("clock is running");
    while app.on_tick(epoch) != TickOutcome::Expired {}
}
