//! List-movement suggestion from status keywords.

use super::keywords::{KeywordSets, StatusCategory};
use crate::model::List;

/// Whether a list title matches a status category.
///
/// The general check lowercases the title and strips ALL whitespace before
/// the substring test ("In Progress" -> "inprogress"). The todo fallback is
/// deliberately different: it tests the literal "to do" against the
/// lowercased title with its spacing intact. Both behaviors are part of the
/// contract.
fn list_matches(list: &List, category: StatusCategory) -> bool {
    let lowered = list.title.to_lowercase();
    let stripped: String = lowered.chars().filter(|c| !c.is_whitespace()).collect();

    stripped.contains(category.token())
        || (category == StatusCategory::Todo && lowered.contains("to do"))
}

/// Suggest a target list for a card based on status keywords in its text.
///
/// Classifies the status axis (done > in-progress > todo), then returns the
/// first list in board order whose title matches the category. `None` when
/// no status matches or no list is named after it. The caller suppresses the
/// suggestion when the target is the card's current list.
pub fn suggest_list_move<'a>(
    keywords: &KeywordSets,
    title: &str,
    description: &str,
    lists: &'a [List],
) -> Option<&'a List> {
    let text = format!("{title} {description}").to_lowercase();
    let category = keywords.status(&text)?;
    lists.iter().find(|l| list_matches(l, category))
}
