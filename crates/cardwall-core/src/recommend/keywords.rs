//! Keyword classification over card text.
//!
//! Three independent axes, each a fixed keyword set: urgency, time horizon,
//! and status category. The sets are immutable configuration handed to the
//! classifier, overridable from the TOML config but never mutated at
//! runtime.
//!
//! All matching is plain substring containment against the lowercased
//! concatenation of title and description.

use serde::{Deserialize, Serialize};

/// Time horizon signalled by a phrase in the card text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Horizon {
    /// "this week" -- due within the week.
    ThisWeek,
    /// "tomorrow" -- due the next day.
    Tomorrow,
}

/// Status category signalled by the card text, in matching precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Done,
    InProgress,
    Todo,
}

impl StatusCategory {
    /// Normalized token this category matches against list titles.
    pub fn token(&self) -> &'static str {
        match self {
            StatusCategory::Done => "done",
            StatusCategory::InProgress => "inprogress",
            StatusCategory::Todo => "todo",
        }
    }
}

fn default_urgent() -> Vec<String> {
    vec!["urgent".to_string(), "asap".to_string()]
}

fn default_this_week() -> Vec<String> {
    vec!["this week".to_string()]
}

fn default_tomorrow() -> Vec<String> {
    vec!["tomorrow".to_string()]
}

fn default_done() -> Vec<String> {
    ["completed", "fixed", "finished", "done", "shipped"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_in_progress() -> Vec<String> {
    ["started", "working", "ongoing", "current"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_todo() -> Vec<String> {
    ["plan", "idea", "backlog"].iter().map(|s| s.to_string()).collect()
}

/// The classifier's keyword sets.
///
/// Defaults are the fixed vocabulary; a `[keywords]` section in the config
/// file may replace individual sets wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordSets {
    /// Urgency axis: any match means "due tomorrow".
    #[serde(default = "default_urgent")]
    pub urgent: Vec<String>,
    /// Horizon axis, week variant.
    #[serde(default = "default_this_week")]
    pub this_week: Vec<String>,
    /// Horizon axis, next-day variant.
    #[serde(default = "default_tomorrow")]
    pub tomorrow: Vec<String>,
    /// Status axis: signals a finished card.
    #[serde(default = "default_done")]
    pub done: Vec<String>,
    /// Status axis: signals a card being worked on.
    #[serde(default = "default_in_progress")]
    pub in_progress: Vec<String>,
    /// Status axis: signals an unstarted card.
    #[serde(default = "default_todo")]
    pub todo: Vec<String>,
}

impl Default for KeywordSets {
    fn default() -> Self {
        KeywordSets {
            urgent: default_urgent(),
            this_week: default_this_week(),
            tomorrow: default_tomorrow(),
            done: default_done(),
            in_progress: default_in_progress(),
            todo: default_todo(),
        }
    }
}

fn contains_any(text: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| text.contains(k.as_str()))
}

impl KeywordSets {
    /// Urgency axis: does the text carry an urgency keyword?
    ///
    /// `text` must already be lowercased.
    pub fn is_urgent(&self, text: &str) -> bool {
        contains_any(text, &self.urgent)
    }

    /// Horizon axis. "this week" takes precedence over "tomorrow".
    pub fn horizon(&self, text: &str) -> Option<Horizon> {
        if contains_any(text, &self.this_week) {
            Some(Horizon::ThisWeek)
        } else if contains_any(text, &self.tomorrow) {
            Some(Horizon::Tomorrow)
        } else {
            None
        }
    }

    /// Status axis, first matching group wins: done > in-progress > todo.
    pub fn status(&self, text: &str) -> Option<StatusCategory> {
        if contains_any(text, &self.done) {
            Some(StatusCategory::Done)
        } else if contains_any(text, &self.in_progress) {
            Some(StatusCategory::InProgress)
        } else if contains_any(text, &self.todo) {
            Some(StatusCategory::Todo)
        } else {
            None
        }
    }
}
