use crate::model::{InternProfile, LeaderboardEntry, Payload, Resource};

pub fn sample_profile() -> InternProfile {
    InternProfile::new("Praveen Revalla", "praveen2025", 1700)
}

pub fn sample_leaderboard() -> Vec<LeaderboardEntry> {
    vec![
        LeaderboardEntry::new("Anu", "anu2025", 2200),
        LeaderboardEntry::new("Praveen", "praveen2025", 1700),
        LeaderboardEntry::new("Ravi", "ravi2025", 900),
    ]
}

pub fn resolve_profile(profile: Option<InternProfile>) -> InternProfile {
    profile.unwrap_or_else(sample_profile)
}

/// An empty live leaderboard is still live data and is kept as-is.
pub fn resolve_leaderboard(entries: Option<Vec<LeaderboardEntry>>) -> Vec<LeaderboardEntry> {
    entries.unwrap_or_else(sample_leaderboard)
}

pub fn resolve(resource: Resource, payload: Option<Payload>) -> Payload {
    match (resource, payload) {
        (Resource::Intern, Some(Payload::Intern(profile))) => {
            Payload::Intern(resolve_profile(Some(profile)))
        }
        (Resource::Leaderboard, Some(Payload::Leaderboard(entries))) => {
            Payload::Leaderboard(resolve_leaderboard(Some(entries)))
        }
        // Absent, or a payload for some other resource.
        (Resource::Intern, _) => Payload::Intern(sample_profile()),
        (Resource::Leaderboard, _) => Payload::Leaderboard(sample_leaderboard()),
    }
}
