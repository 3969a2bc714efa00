//! Picks the next unseen question and shuffles its options

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::{OPTION_COUNT, QuizItem, QuizItemId, ShuffledQuestion};
use crate::pool::QuizPool;

/// Ids already served in the current cycle
pub type ServedIds = HashSet<QuizItemId>;

/// What to do once every item in the pool has been served
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhaustionPolicy {
    /// Clear the served set and pick from the full pool in the same call
    #[default]
    ResetAndServe,
    /// Clear the served set and run the selection again from scratch
    ResetAndRetry,
}

/// Select a random unserved item, record it as served and return it shuffled.
///
/// The pool is never mutated. `served` is the only state touched.
pub fn select_next<R: Rng + ?Sized>(
    pool: &QuizPool,
    served: &mut ServedIds,
    policy: ExhaustionPolicy,
    rng: &mut R,
) -> ShuffledQuestion {
    let mut candidates: Vec<&QuizItem> = pool
        .items()
        .iter()
        .filter(|item| !served.contains(&item.id))
        .collect();

    if candidates.is_empty() {
        tracing::debug!(
            "All {} questions served, resetting served set ({:?})",
            pool.len(),
            policy
        );
        served.clear();
        match policy {
            ExhaustionPolicy::ResetAndServe => candidates = pool.items().iter().collect(),
            ExhaustionPolicy::ResetAndRetry => return select_next(pool, served, policy, rng),
        }
    }

    let item = candidates[rng.random_range(0..candidates.len())];
    served.insert(item.id);
    tracing::debug!("Serving question {} ({} served)", item.id, served.len());

    shuffle_question(item, rng)
}

/// Fisher-Yates shuffle of the options, remapping the correct index.
///
/// The correct option is followed through every swap, which lands on the
/// same index as searching for its text whenever option texts are distinct.
pub fn shuffle_question<R: Rng + ?Sized>(item: &QuizItem, rng: &mut R) -> ShuffledQuestion {
    let mut options = item.options.clone();
    let mut correct = item.correct_answer_index;

    for i in (1..OPTION_COUNT).rev() {
        let j = rng.random_range(0..=i);
        options.swap(i, j);
        if correct == i {
            correct = j;
        } else if correct == j {
            correct = i;
        }
    }

    ShuffledQuestion {
        item_id: item.id,
        book_title: item.book_title.clone(),
        question: item.question.clone(),
        options,
        correct_answer_index: correct,
        explanation: item.explanation.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool_of(n: u32) -> QuizPool {
        let items = (1..=n)
            .map(|id| QuizItem {
                id,
                book_title: format!("Book {}", id),
                question: format!("Question {}?", id),
                options: ["alpha", "beta", "gamma", "delta"].map(String::from),
                correct_answer_index: (id as usize) % OPTION_COUNT,
                explanation: String::new(),
            })
            .collect();
        QuizPool::new(items).unwrap()
    }

    #[test]
    fn test_served_item_is_recorded() {
        let pool = pool_of(10);
        let mut served = ServedIds::new();
        let mut rng = StdRng::seed_from_u64(1);

        let question = select_next(&pool, &mut served, ExhaustionPolicy::default(), &mut rng);
        assert!(served.contains(&question.item_id));
        assert_eq!(served.len(), 1);
    }

    #[test]
    fn test_no_repeats_until_pool_exhausted() {
        let pool = pool_of(25);
        let mut served = ServedIds::new();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();

        for _ in 0..25 {
            let q = select_next(&pool, &mut served, ExhaustionPolicy::default(), &mut rng);
            assert!(seen.insert(q.item_id), "question {} served twice", q.item_id);
        }
        assert_eq!(served.len(), 25);
    }

    #[test]
    fn test_exhaustion_resets_served_set() {
        for policy in [ExhaustionPolicy::ResetAndServe, ExhaustionPolicy::ResetAndRetry] {
            let pool = pool_of(3);
            let mut served: ServedIds = [1, 2, 3].into_iter().collect();
            let mut rng = StdRng::seed_from_u64(7);

            let q = select_next(&pool, &mut served, policy, &mut rng);
            assert_eq!(served.len(), 1, "{:?}", policy);
            assert!(served.contains(&q.item_id));
        }
    }

    #[test]
    fn test_only_unserved_item_is_chosen() {
        let pool = pool_of(5);
        let mut served: ServedIds = [1, 2, 4, 5].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(99);

        let q = select_next(&pool, &mut served, ExhaustionPolicy::default(), &mut rng);
        assert_eq!(q.item_id, 3);
    }

    #[test]
    fn test_shuffle_preserves_options_and_correct_text() {
        let pool = pool_of(4);
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            for item in pool.items() {
                let q = shuffle_question(item, &mut rng);

                let mut before = item.options.to_vec();
                let mut after = q.options.to_vec();
                before.sort();
                after.sort();
                assert_eq!(before, after);

                assert_eq!(Some(q.correct_option()), item.correct_option());
                assert_eq!(
                    q.options.iter().position(|o| o == q.correct_option()),
                    Some(q.correct_answer_index)
                );
            }
        }
    }

    #[test]
    fn test_shuffle_reaches_every_position() {
        let pool = pool_of(1);
        let item = &pool.items()[0];
        let mut rng = StdRng::seed_from_u64(3);
        let mut positions = HashSet::new();

        for _ in 0..200 {
            positions.insert(shuffle_question(item, &mut rng).correct_answer_index);
        }
        assert_eq!(positions.len(), OPTION_COUNT);
    }

    #[test]
    fn test_same_seed_same_selection() {
        let pool = pool_of(50);
        let run = |seed| {
            let mut served = ServedIds::new();
            let mut rng = StdRng::seed_from_u64(seed);
            (0..10)
                .map(|_| select_next(&pool, &mut served, ExhaustionPolicy::default(), &mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(11), run(11));
    }
}
