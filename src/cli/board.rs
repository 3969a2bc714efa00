//! Read-only views: hall of fame, achievements and stats

use bookquiz::config::Config;
use bookquiz::progression::{BADGES, LevelInfo};
use bookquiz::store::{JsonFileStore, Store};
use bookquiz::{Leaderboard, UserStats};

fn load_stats(config: &Config) -> UserStats {
    JsonFileStore::new(config.stats_path()).load()
}

pub fn leaderboard_command(config: &Config) {
    let board: Leaderboard = JsonFileStore::new(config.leaderboard_path()).load();
    print_leaderboard(&board);
}

pub fn achievements_command(config: &Config) {
    print_achievements(&load_stats(config));
}

pub fn stats_command(config: &Config) {
    print_stats(&load_stats(config));
}

pub fn print_leaderboard(board: &Leaderboard) {
    println!("\n🏆 Hall of Fame\n");
    if board.is_empty() {
        println!("  No explorers yet. Be the first!");
        return;
    }
    for (i, entry) in board.entries().iter().enumerate() {
        println!(
            "  {:>2}. {:<10}  {:>5}  {}",
            i + 1,
            entry.name,
            entry.score,
            entry.date
        );
    }
}

pub fn print_achievements(stats: &UserStats) {
    println!("\n🎖  Achievements\n");
    for badge in BADGES {
        let (value, threshold) = badge.rule.progress(stats);
        let mark = if stats.has_badge(badge.id) { "✔" } else { " " };
        println!(
            "  [{}] {} {:<20} {:>5}/{:<5} {}",
            mark,
            badge.icon,
            badge.name,
            value,
            threshold,
            badge.rule.stat.label()
        );
        println!("        {}", badge.description);
    }
}

pub fn print_stats(stats: &UserStats) {
    let info = LevelInfo::for_xp(stats.xp);
    println!("\n📖 Explorer\n");
    println!("  Level {} - {}", info.level, info.title);
    println!(
        "  XP {} ({:.0}% of the way, {} more for level {})",
        stats.xp,
        info.progress_to_next() * 100.0,
        info.next_level_xp.saturating_sub(stats.xp),
        info.level + 1
    );
    println!("  Streak {} (best {})", stats.streak, stats.best_streak);
    println!(
        "  Correct {}/{} ({:.0}% accuracy)",
        stats.correct_answers,
        stats.total_attempts,
        stats.accuracy() * 100.0
    );
    println!("  Badges {}/{}", stats.unlocked_badges.len(), BADGES.len());
}
