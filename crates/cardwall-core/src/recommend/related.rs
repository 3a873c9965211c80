//! Related-card discovery by shared vocabulary or shared members.

use crate::model::Card;

/// Minimum token length (exclusive) for the shared-keyword predicate.
const MIN_TOKEN_LEN: usize = 3;

/// Find the cards related to `card` among `all_cards`.
///
/// Two predicates, OR'd:
/// - shared keyword: any whitespace token longer than three characters from
///   the subject's text appears as a substring anywhere in the candidate's
///   text (containment, not word boundaries -- short tokens embedded in
///   longer words count);
/// - shared member: the cards have at least one member in common.
///
/// The subject itself is excluded by id. Candidate order is preserved and
/// the result is unranked; `cap` optionally bounds its size.
pub fn find_related<'a>(card: &Card, all_cards: &'a [Card], cap: Option<usize>) -> Vec<&'a Card> {
    let text = card.search_text();
    let tokens: Vec<&str> = text
        .split_whitespace()
        .filter(|w| w.chars().count() > MIN_TOKEN_LEN)
        .collect();

    let mut related: Vec<&Card> = Vec::new();
    for other in all_cards {
        if other.id == card.id {
            continue;
        }

        let other_text = other.search_text();
        let shared_keyword = tokens.iter().any(|t| other_text.contains(t));
        let shared_member = card
            .members
            .iter()
            .any(|m| other.members.iter().any(|om| om == m));

        if shared_keyword || shared_member {
            related.push(other);
            if cap.is_some_and(|max| related.len() >= max) {
                break;
            }
        }
    }
    related
}
