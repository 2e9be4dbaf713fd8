//! Picks the active event from dated candidates.
//!
//! Dates are compared as `YYYY-MM-DD` text. The format is fixed width, so
//! lexicographic order is calendar order and no parsing is needed.

use chrono::Utc;
use chrono_tz::Tz;

use super::filter::CandidateFile;

/// Today's civil date in `tz`, formatted as `YYYY-MM-DD`.
pub fn today_in(tz: Tz) -> String {
    Utc::now().with_timezone(&tz).format("%Y-%m-%d").to_string()
}

/// Selects the next upcoming event (earliest date `>= today`), or failing
/// that the most recent past event (latest date `< today`).
///
/// Ties go to the candidate that appears first. Candidates without a date
/// take part in neither group; if nothing is dated the first candidate is
/// returned. Returns `None` only for an empty slice.
pub fn select_event_file<'a>(
    today: &str,
    candidates: &'a [CandidateFile],
) -> Option<&'a CandidateFile> {
    let dated = || {
        candidates
            .iter()
            .filter_map(|c| c.extracted_date.as_deref().map(|date| (date, c)))
    };

    // `min_by` keeps the first of equal elements, which gives the stable
    // first-occurrence tie-break in both directions.
    let upcoming = dated()
        .filter(|(date, _)| *date >= today)
        .min_by(|(a, _), (b, _)| a.cmp(b));
    if let Some((_, candidate)) = upcoming {
        return Some(candidate);
    }

    let latest_past = dated()
        .filter(|(date, _)| *date < today)
        .min_by(|(a, _), (b, _)| b.cmp(a));
    if let Some((_, candidate)) = latest_past {
        return Some(candidate);
    }

    candidates.first()
}
