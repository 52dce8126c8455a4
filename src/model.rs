use serde::{Deserialize, Serialize};

/// Referral stats for the logged-in intern.
///
/// Live payloads may omit any field. A missing field leaves its display
/// target alone, and a missing donation total unlocks nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InternProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "referralCode", default)]
    pub referral_code: Option<String>,
    #[serde(rename = "totalDonations", default)]
    pub total_donations: Option<u64>,
}

impl InternProfile {
    pub fn new(name: &str, referral_code: &str, total_donations: u64) -> Self {
        Self {
            name: Some(name.to_string()),
            referral_code: Some(referral_code.to_string()),
            total_donations: Some(total_donations),
        }
    }

    pub fn unlocks(&self, reward: &Reward) -> bool {
        self.total_donations
            .is_some_and(|total| total >= reward.amount)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub referral: String,
    #[serde(default)]
    pub total: u64,
}

impl LeaderboardEntry {
    pub fn new(name: &str, referral: &str, total: u64) -> Self {
        Self {
            name: name.to_string(),
            referral: referral.to_string(),
            total,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reward {
    pub name: &'static str,
    pub icon: &'static str,
    pub amount: u64,
    pub description: &'static str,
}

pub const REWARDS: [Reward; 3] = [
    Reward {
        name: "Amazon Gift Card",
        icon: "fas fa-gift",
        amount: 1000,
        description: "₹1000 Amazon Gift Card",
    },
    Reward {
        name: "T-Shirt",
        icon: "fas fa-tshirt",
        amount: 1500,
        description: "Exclusive Intern T-Shirt",
    },
    Reward {
        name: "Certificate",
        icon: "fas fa-certificate",
        amount: 2000,
        description: "Achievement Certificate",
    },
];

/// The two read-only endpoints the portal knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Intern,
    Leaderboard,
}

pub fn resource_label(resource: Resource) -> &'static str {
    match resource {
        Resource::Intern => "intern",
        Resource::Leaderboard => "leaderboard",
    }
}

/// Parsed body of one endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Intern(InternProfile),
    Leaderboard(Vec<LeaderboardEntry>),
}
