// SPDX-License-Identifier: Apache-2.0

use batterytech_model::QuizQuestion;
use batterytech_session::{QuizSession, QuizState};
use serde::Serialize;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizReport {
    pub unit: u32,
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub feedback: &'static str,
}

fn io_err(e: std::io::Error) -> String {
    format!("terminal i/o failed: {e}")
}

/// Reads a 1-based option number, asking again until one is valid.
fn read_choice<R: BufRead>(
    input: &mut R,
    prompt: &mut dyn Write,
    options: usize,
) -> Result<usize, String> {
    loop {
        write!(prompt, "Your answer [1-{options}]: ").map_err(io_err)?;
        prompt.flush().map_err(io_err)?;
        let mut line = String::new();
        if input.read_line(&mut line).map_err(io_err)? == 0 {
            return Err("input closed before the quiz finished".to_string());
        }
        match line.trim().parse::<usize>() {
            Ok(n) if (1..=options).contains(&n) => return Ok(n - 1),
            _ => writeln!(prompt, "Please enter a number between 1 and {options}.")
                .map_err(io_err)?,
        }
    }
}

/// Drives one quiz session over `questions` from stdin-style input.
pub fn run_quiz<R: BufRead>(
    input: &mut R,
    prompt: &mut dyn Write,
    unit: u32,
    questions: Vec<QuizQuestion>,
) -> Result<QuizReport, String> {
    let mut session = QuizSession::new();
    session
        .select_unit(unit, questions)
        .map_err(|e| e.to_string())?;

    while let QuizState::Question(round) = session.state() {
        let question = round.current().clone();
        writeln!(
            prompt,
            "\nQuestion {} of {} ({:.0}%)\n{}",
            round.index() + 1,
            round.total(),
            round.progress(),
            question.text
        )
        .map_err(io_err)?;
        for (i, option) in question.options.iter().enumerate() {
            writeln!(prompt, "  {}. {option}", i + 1).map_err(io_err)?;
        }

        let choice = read_choice(input, prompt, question.options.len())?;
        session.select_option(choice).map_err(|e| e.to_string())?;
        session.submit_answer().map_err(|e| e.to_string())?;
        if question.is_correct(choice) {
            writeln!(prompt, "Correct!").map_err(io_err)?;
        } else {
            writeln!(
                prompt,
                "Incorrect. The correct answer is: {}",
                question.options[question.correct_answer]
            )
            .map_err(io_err)?;
        }
        writeln!(prompt, "{}", question.explanation).map_err(io_err)?;
        session.next_question().map_err(|e| e.to_string())?;
    }

    match session.state() {
        QuizState::Result(outcome) => Ok(QuizReport {
            unit: outcome.unit(),
            score: outcome.score(),
            total: outcome.total(),
            percentage: outcome.percentage(),
            feedback: outcome.feedback().message(),
        }),
        _ => Err("quiz ended without a result".to_string()),
    }
}
