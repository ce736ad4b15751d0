//! Client-side ordering of a question's answers.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use crate::api::Answer;

/// Sort key selected on the detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerFilter {
    /// Highest score first.
    #[default]
    Votes,
    /// Newest first.
    Active,
    /// Oldest first.
    Oldest,
}

impl AnswerFilter {
    pub const ALL: [AnswerFilter; 3] = [
        AnswerFilter::Votes,
        AnswerFilter::Active,
        AnswerFilter::Oldest,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AnswerFilter::Votes => "Votes",
            AnswerFilter::Active => "Active",
            AnswerFilter::Oldest => "Oldest",
        }
    }

    pub fn next(self) -> Self {
        match self {
            AnswerFilter::Votes => AnswerFilter::Active,
            AnswerFilter::Active => AnswerFilter::Oldest,
            AnswerFilter::Oldest => AnswerFilter::Votes,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            AnswerFilter::Votes => AnswerFilter::Oldest,
            AnswerFilter::Active => AnswerFilter::Votes,
            AnswerFilter::Oldest => AnswerFilter::Active,
        }
    }

    pub fn index(self) -> usize {
        match self {
            AnswerFilter::Votes => 0,
            AnswerFilter::Active => 1,
            AnswerFilter::Oldest => 2,
        }
    }
}

impl fmt::Display for AnswerFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AnswerFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnswerFilter::ALL
            .into_iter()
            .find(|filter| filter.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown answer order '{}' (expected votes, active or oldest)", s)
            })
    }
}

/// Returns `answers` ordered by `filter`. The input is left untouched and
/// ties keep their original relative order.
pub fn sorted_answers(answers: &[Answer], filter: AnswerFilter) -> Vec<Answer> {
    let mut sorted = answers.to_vec();
    match filter {
        AnswerFilter::Votes => sorted.sort_by_key(|answer| Reverse(answer.score)),
        AnswerFilter::Active => sorted.sort_by_key(|answer| Reverse(answer.creation_date)),
        AnswerFilter::Oldest => sorted.sort_by_key(|answer| answer.creation_date),
    }
    sorted
}
