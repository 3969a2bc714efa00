//! BookQuiz - Forest of Books
//!
//! A timed book comprehension quiz. Each exploration draws questions from a
//! pool without repeats, shuffles the answer options, and races a session
//! clock. Answers feed a persistent progression (XP, levels, streaks and
//! badges), and finished sessions can be recorded in a hall of fame.
//!
//! ## Layout
//!
//! - [`pool`] and [`session`] decide which question comes next and in what
//!   option order.
//! - [`progression`] applies an answer to the player's stats as a pure
//!   function.
//! - [`clock`] counts a session down from ticks, ignoring stale ones.
//! - [`leaderboard`] merges scores into the ranked hall of fame.
//! - [`app`] sequences the screens and wires everything together, persisting
//!   through [`store`].

pub mod app;
pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod generator;
pub mod leaderboard;
pub mod notify;
pub mod pool;
pub mod progression;
pub mod session;
pub mod store;

pub use domain::*;
