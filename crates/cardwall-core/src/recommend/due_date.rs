//! Due-date suggestion from card text.

use chrono::{Days, NaiveDate};

use super::keywords::{Horizon, KeywordSets};

/// Suggest a due date for a card with none, from its title and description.
///
/// First match wins, in this order: urgency keyword (+1 day), "this week"
/// (+7 days), "tomorrow" (+1 day). `None` when no phrase matches -- an
/// expected outcome, not an error.
pub fn suggest_due_date(
    keywords: &KeywordSets,
    title: &str,
    description: &str,
    today: NaiveDate,
) -> Option<NaiveDate> {
    let text = format!("{title} {description}").to_lowercase();

    if keywords.is_urgent(&text) {
        return today.checked_add_days(Days::new(1));
    }

    match keywords.horizon(&text) {
        Some(Horizon::ThisWeek) => today.checked_add_days(Days::new(7)),
        Some(Horizon::Tomorrow) => today.checked_add_days(Days::new(1)),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    fn plus(days: u64) -> NaiveDate {
        today().checked_add_days(Days::new(days)).unwrap()
    }

    #[test]
    fn urgent_suggests_next_day() {
        let kw = KeywordSets::default();
        assert_eq!(
            suggest_due_date(&kw, "Fix bug ASAP", "", today()),
            Some(plus(1))
        );
        assert_eq!(
            suggest_due_date(&kw, "Deploy", "urgent hotfix", today()),
            Some(plus(1))
        );
    }

    #[test]
    fn urgent_wins_over_week_phrase() {
        // Urgency short-circuits: even with "this week" present, +1 day.
        let kw = KeywordSets::default();
        assert_eq!(
            suggest_due_date(&kw, "urgent", "wrap up this week", today()),
            Some(plus(1))
        );
    }

    #[test]
    fn this_week_suggests_seven_days() {
        let kw = KeywordSets::default();
        assert_eq!(
            suggest_due_date(&kw, "Finish report", "due this week", today()),
            Some(plus(7))
        );
    }

    #[test]
    fn this_week_wins_over_tomorrow() {
        let kw = KeywordSets::default();
        assert_eq!(
            suggest_due_date(&kw, "this week or tomorrow", "", today()),
            Some(plus(7))
        );
    }

    #[test]
    fn tomorrow_suggests_next_day() {
        let kw = KeywordSets::default();
        assert_eq!(
            suggest_due_date(&kw, "Demo tomorrow", "", today()),
            Some(plus(1))
        );
    }

    #[test]
    fn no_signal_no_suggestion() {
        let kw = KeywordSets::default();
        assert_eq!(suggest_due_date(&kw, "Refactor parser", "", today()), None);
        assert_eq!(
            suggest_due_date(&kw, "Write docs", "when convenient", today()),
            None
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        let kw = KeywordSets::default();
        assert_eq!(
            suggest_due_date(&kw, "URGENT", "", today()),
            Some(plus(1))
        );
        assert_eq!(
            suggest_due_date(&kw, "Plan", "This Week", today()),
            Some(plus(7))
        );
    }
}
