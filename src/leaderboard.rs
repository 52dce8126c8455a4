use crate::document::{
    Document, LEADERBOARD_BODY, LeaderboardRow, Node, PARTICIPANT_COUNT, TOP_PERFORMER,
    TOTAL_RAISED,
};
use crate::model::LeaderboardEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardSummary {
    pub top_name: String,
    pub total_raised: u64,
    pub participant_count: usize,
}

/// `None` for an empty board. Entries are taken in the order given; the first
/// one is the top performer whatever its total. The total saturates at
/// `u64::MAX`.
pub fn summarize(entries: &[LeaderboardEntry]) -> Option<LeaderboardSummary> {
    let first = entries.first()?;
    Some(LeaderboardSummary {
        top_name: first.name.clone(),
        total_raised: entries
            .iter()
            .fold(0u64, |acc, entry| acc.saturating_add(entry.total)),
        participant_count: entries.len(),
    })
}

pub fn render_leaderboard(doc: &mut Document, entries: &[LeaderboardEntry]) {
    render_rows(doc, entries);
    render_summary(doc, entries);
}

pub fn render_rows(doc: &mut Document, entries: &[LeaderboardEntry]) {
    let Some(body) = doc.container_mut(LEADERBOARD_BODY) else {
        return;
    };
    body.clear();
    body.extend(
        entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| Node::LeaderboardRow(LeaderboardRow::new(entry, idx + 1))),
    );
}

pub fn render_summary(doc: &mut Document, entries: &[LeaderboardEntry]) {
    let Some(summary) = summarize(entries) else {
        return;
    };
    doc.set_text(TOP_PERFORMER, summary.top_name);
    doc.set_text(TOTAL_RAISED, summary.total_raised.to_string());
    doc.set_text(PARTICIPANT_COUNT, summary.participant_count.to_string());
}
