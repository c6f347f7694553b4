// SPDX-License-Identifier: Apache-2.0

use batterytech_model::QuizQuestion;
use rand::seq::SliceRandom;
use rand::Rng;

/// Copies the questions belonging to `unit`, shuffles the copy and keeps at
/// most `sample_size` of them. `questions` itself is never reordered.
pub fn sample_questions<R: Rng + ?Sized>(
    questions: &[QuizQuestion],
    unit: u32,
    sample_size: usize,
    rng: &mut R,
) -> Vec<QuizQuestion> {
    let mut matching: Vec<QuizQuestion> =
        questions.iter().filter(|q| q.unit == unit).cloned().collect();
    matching.shuffle(rng);
    matching.truncate(sample_size.min(matching.len()));
    matching
}
