use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

pub const MAX_DISTRACTORS: usize = 3;

/// Build a shuffled answer list: the correct answer once plus up to three
/// distinct distractors drawn from `answers`.
///
/// Blank answers are ignored and duplicates collapse by exact string
/// equality. With fewer than three candidates the list is simply shorter.
pub fn build_options<'a, I, R>(correct: &str, answers: I, rng: &mut R) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
    R: Rng + ?Sized,
{
    let mut seen = HashSet::new();
    let candidates: Vec<&str> = answers
        .into_iter()
        .filter(|a| !a.trim().is_empty())
        .filter(|a| *a != correct)
        .filter(|a| seen.insert(*a))
        .collect();

    let mut options: Vec<String> = candidates
        .choose_multiple(rng, MAX_DISTRACTORS)
        .map(|a| a.to_string())
        .collect();
    options.push(correct.to_string());
    options.shuffle(rng);
    options
}
