use rand::{seq::SliceRandom, Rng};
use std::rc::Rc;

use crate::words::WordPair;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub source: String,
    pub choices: Vec<String>,
    /// Index into `choices` of the correct target.
    pub answer: usize,
}

impl Question {
    pub fn correct(&self) -> &str {
        &self.choices[self.answer]
    }

    /// Accepts either the target itself or its 1-based choice number.
    pub fn check(&self, input: &str) -> bool {
        let input = input.trim();
        if input == self.correct() {
            return true;
        }
        if self.choices.iter().any(|c| c == input) {
            return false;
        }
        match input.parse::<usize>() {
            Ok(n) => n.checked_sub(1) == Some(self.answer),
            Err(_) => false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

/// One pass of the match test over a snapshot of the word list.
pub struct MatchTest<R> {
    words: Rc<[WordPair]>,
    next: usize,
    choices: usize,
    score: Score,
    rng: R,
}

impl<R: Rng> MatchTest<R> {
    pub fn new(words: Rc<[WordPair]>, choices: usize, rng: R) -> Self {
        Self {
            words,
            next: 0,
            choices: choices.max(2),
            score: Score::default(),
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn record(&mut self, correct: bool) {
        self.score.total += 1;
        if correct {
            self.score.correct += 1;
        }
    }

    /// Questions follow the list order; choices are shuffled.
    pub fn next_question(&mut self) -> Option<Question> {
        let pair = self.words.get(self.next)?.clone();
        self.next += 1;

        let mut distractors: Vec<&str> = Vec::new();
        for word in self.words.iter() {
            let target = word.target.as_str();
            if target != pair.target && !distractors.contains(&target) {
                distractors.push(target);
            }
        }
        distractors.shuffle(&mut self.rng);
        distractors.truncate(self.choices - 1);

        let mut choices: Vec<String> = distractors.into_iter().map(String::from).collect();
        choices.push(pair.target.clone());
        choices.shuffle(&mut self.rng);
        let answer = choices
            .iter()
            .position(|c| *c == pair.target)
            .unwrap_or_default();

        Some(Question {
            source: pair.source,
            choices,
            answer,
        })
    }
}
