//! Number Guessing Game
//!
//! Console loop: guess a number in `[MIN_NUMBER, MAX_NUMBER]`, see how close
//! you were, repeat until you decline.

use std::io::{self, BufRead, Write};

use rand::Rng;

pub const MIN_NUMBER: i64 = 1;
pub const MAX_NUMBER: i64 = 5;

/// Result of a single guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub guessed: i64,
    pub correct: i64,
}

impl Round {
    pub fn new(guessed: i64, correct: i64) -> Self {
        Self { guessed, correct }
    }

    pub fn is_win(&self) -> bool {
        self.guessed == self.correct
    }

    /// Signed distance from the guess to the drawn number.
    pub fn difference(&self) -> i64 {
        self.correct - self.guessed
    }

    /// Renders the round as a bordered four-column table.
    pub fn render_table(&self) -> String {
        let headers = ["Guessed", "Correct", "Win", "Difference"];
        let cells = [
            self.guessed.to_string(),
            self.correct.to_string(),
            if self.is_win() { "True" } else { "False" }.to_string(),
            self.difference().to_string(),
        ];
        let widths: Vec<usize> = headers
            .iter()
            .zip(cells.iter())
            .map(|(h, c)| h.len().max(c.len()))
            .collect();

        let border = widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+");
        let border = format!("+{}+", border);
        let row = |items: &[String]| {
            let inner = items
                .iter()
                .zip(widths.iter())
                .map(|(item, w)| format!(" {:^w$} ", item, w = *w))
                .collect::<Vec<_>>()
                .join("|");
            format!("|{}|", inner)
        };
        let headers: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

        [border.clone(), row(&headers), border.clone(), row(&cells), border].join("\n")
    }
}

/// Draws a number uniformly from `[MIN_NUMBER, MAX_NUMBER]`.
pub fn draw<R: Rng>(rng: &mut R) -> i64 {
    rng.gen_range(MIN_NUMBER..=MAX_NUMBER)
}

/// Parses a guess; surrounding whitespace is ignored.
pub fn parse_guess(line: &str) -> Option<i64> {
    line.trim().parse().ok()
}

/// Whether the answer to "keep on playing (y/N)" means continue.
///
/// Anything starting with `n`, and an empty answer, means stop.
pub fn wants_another_round(answer: &str) -> bool {
    match answer.trim().to_lowercase().chars().next() {
        None | Some('n') => false,
        Some(_) => true,
    }
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Runs the game until the player declines or input ends.
///
/// Returns every round played.
pub fn play<R, W, G>(input: &mut R, output: &mut W, rng: &mut G) -> io::Result<Vec<Round>>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    let mut rounds = Vec::new();

    loop {
        let guess_prompt = format!("Guess a number between {} and {}: ", MIN_NUMBER, MAX_NUMBER);
        let Some(line) = prompt(input, output, &guess_prompt)? else {
            break;
        };
        let Some(guessed) = parse_guess(&line) else {
            writeln!(output, "'{}' is not a whole number.", line.trim())?;
            continue;
        };

        let round = Round::new(guessed, draw(rng));
        writeln!(output, "{}", round.render_table())?;
        rounds.push(round);

        match prompt(input, output, "Do you want to keep on playing (y/N): ")? {
            Some(answer) if wants_another_round(&answer) => continue,
            _ => break,
        }
    }

    Ok(rounds)
}
