//! Command line interface and the one-shot (non-interactive) commands.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::api::{Answer, Question};
use crate::config::Config;
use crate::repository::{FetchError, Repository};
use crate::ui::answer_order::{sorted_answers, AnswerFilter};
use crate::ui::format::{format_date, strip_html, time_ago};

#[derive(Parser, Debug)]
#[command(
    name = "stackbrowse",
    version,
    about = "Browse Stack Overflow questions from the terminal"
)]
pub struct Cli {
    /// Config file to read instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the Stack Exchange site (e.g. "superuser")
    #[arg(long, value_name = "SITE")]
    pub site: Option<String>,

    /// Skip the network check before each request
    #[arg(long)]
    pub no_connectivity_check: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print questions whose title matches QUERY
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Print recently active questions
    Recent,
    /// Print one question with its answers
    Show {
        id: u64,
        /// Answer order: votes, active or oldest
        #[arg(long, default_value = "votes")]
        sort: AnswerFilter,
    },
}

impl Cli {
    /// Loads the config file named by `--config`, or the default one.
    pub fn load_config(&self) -> Result<Config, crate::config::ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Applies command line flags on top of file configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(site) = &self.site {
            config.api.site = site.clone();
        }
        if self.no_connectivity_check {
            config.connectivity.enabled = false;
        }
    }
}

/// Runs a one-shot command and returns the text to print.
pub async fn run_command(
    repository: &Repository,
    command: &Command,
) -> Result<String, FetchError> {
    match command {
        Command::Search { query } => {
            let query = query.join(" ");
            let questions = repository.try_search_questions(&query).await?;
            Ok(render_question_list(&questions))
        }
        Command::Recent => {
            let questions = repository.try_fetch_recent_questions().await?;
            Ok(render_question_list(&questions))
        }
        Command::Show { id, sort } => {
            let question = repository.try_get_question_by_id(*id).await?;
            let answers = repository.try_get_answers(*id).await?;
            Ok(render_question_detail(&question, &answers, *sort))
        }
    }
}

pub fn render_question_list(questions: &[Question]) -> String {
    if questions.is_empty() {
        return "No questions found.\n".to_string();
    }
    let mut out = String::new();
    for question in questions {
        let _ = writeln!(out, "[{}] {}", question.question_id, strip_html(&question.title));
        let _ = writeln!(
            out,
            "    {} votes | {} answers | {} views | {} | asked {}",
            question.score,
            question.answer_count,
            question.view_count,
            question.tags.join(", "),
            time_ago(question.creation_date)
        );
    }
    out
}

pub fn render_question_detail(
    question: &Question,
    answers: &[Answer],
    order: AnswerFilter,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", strip_html(&question.title));
    let _ = writeln!(
        out,
        "Asked {} by {} | {} votes | {} views",
        format_date(question.creation_date),
        question.owner.display_name,
        question.score,
        question.view_count
    );
    if !question.tags.is_empty() {
        let _ = writeln!(out, "Tags: {}", question.tags.join(", "));
    }
    if let Some(body) = &question.body {
        let _ = writeln!(out, "\n{}", strip_html(body));
    }

    let _ = writeln!(out, "\n{} answers (sorted by {})", answers.len(), order);
    for answer in sorted_answers(answers, order) {
        let accepted = if answer.is_accepted { " [accepted]" } else { "" };
        let _ = writeln!(
            out,
            "\n--- {} votes{} | answered {} by {}",
            answer.score,
            accepted,
            format_date(answer.creation_date),
            answer.owner.display_name
        );
        let _ = writeln!(out, "{}", strip_html(&answer.body));
    }
    out
}
