//! In-memory display tree for one page.
//!
//! A page template declares which targets exist. Renderers write into the
//! targets by id; writing to an id the page does not declare is a no-op, so a
//! renderer never has to know which template it runs against.

use std::collections::BTreeMap;

use crate::model::{LeaderboardEntry, Reward};

pub const DISPLAY_NAME: &str = "displayName";
pub const REFERRAL_CODE: &str = "referralCode";
pub const TOTAL_DONATIONS: &str = "totalDonations";
pub const REWARDS_CONTAINER: &str = "rewardsContainer";

pub const LEADERBOARD_BODY: &str = "leaderboardBody";
pub const TOP_PERFORMER: &str = "topPerformer";
pub const TOTAL_RAISED: &str = "totalRaised";
pub const PARTICIPANT_COUNT: &str = "participantCount";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Text(String),
    Container(Vec<Node>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    RewardCard(RewardCard),
    LeaderboardRow(LeaderboardRow),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub class: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardCard {
    pub name: String,
    pub icon: String,
    pub description: String,
    pub unlocked: bool,
    pub class: &'static str,
    pub badge: Badge,
    pub requirement: String,
}

impl RewardCard {
    pub fn new(reward: &Reward, unlocked: bool) -> Self {
        let badge = if unlocked {
            Badge {
                class: "bg-success",
                icon: "fa-check-circle",
                label: "Unlocked",
            }
        } else {
            Badge {
                class: "bg-secondary",
                icon: "fa-lock",
                label: "Locked",
            }
        };
        Self {
            name: reward.name.to_string(),
            icon: reward.icon.to_string(),
            description: reward.description.to_string(),
            unlocked,
            class: if unlocked { "unlocked" } else { "locked" },
            badge,
            requirement: format!("Requires: ₹{}", reward.amount),
        }
    }
}

/// Standing derived purely from a 1-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
    Participant,
}

impl Medal {
    pub fn for_position(position: usize) -> Self {
        match position {
            1 => Medal::Gold,
            2 => Medal::Silver,
            3 => Medal::Bronze,
            _ => Medal::Participant,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Medal::Gold => "Gold Medal",
            Medal::Silver => "Silver Medal",
            Medal::Bronze => "Bronze Medal",
            Medal::Participant => "Participant",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Medal::Gold => "text-warning",
            Medal::Silver => "text-secondary",
            Medal::Bronze => "text-danger",
            Medal::Participant => "text-muted",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Medal::Gold => "fas fa-gem",
            Medal::Silver => "fas fa-medal",
            Medal::Bronze => "fas fa-award",
            Medal::Participant => "fas fa-star",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub position: usize,
    pub name: String,
    pub referral: String,
    pub total: String,
    pub medal: Medal,
}

impl LeaderboardRow {
    pub fn new(entry: &LeaderboardEntry, position: usize) -> Self {
        Self {
            position,
            name: entry.name.clone(),
            referral: entry.referral.clone(),
            total: format!("₹{}", entry.total),
            medal: Medal::for_position(position),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    elements: BTreeMap<&'static str, Element>,
}

impl Document {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn dashboard(display_name: &str) -> Self {
        let mut doc = Self::default();
        doc.declare_text(DISPLAY_NAME, display_name);
        doc.declare_text(REFERRAL_CODE, "-");
        doc.declare_text(TOTAL_DONATIONS, "0");
        doc.declare_container(REWARDS_CONTAINER);
        doc
    }

    pub fn leaderboard() -> Self {
        let mut doc = Self::default();
        doc.declare_container(LEADERBOARD_BODY);
        doc.declare_text(TOP_PERFORMER, "-");
        doc.declare_text(TOTAL_RAISED, "0");
        doc.declare_text(PARTICIPANT_COUNT, "0");
        doc
    }

    pub fn declare_text(&mut self, id: &'static str, initial: &str) {
        self.elements.insert(id, Element::Text(initial.to_string()));
    }

    pub fn declare_container(&mut self, id: &'static str) {
        self.elements.insert(id, Element::Container(Vec::new()));
    }

    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.elements.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    /// Returns `false` when `id` is not a text target on this page.
    pub fn set_text(&mut self, id: &str, value: impl Into<String>) -> bool {
        match self.elements.get_mut(id) {
            Some(Element::Text(text)) => {
                *text = value.into();
                true
            }
            _ => false,
        }
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        match self.elements.get(id) {
            Some(Element::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn container_mut(&mut self, id: &str) -> Option<&mut Vec<Node>> {
        match self.elements.get_mut(id) {
            Some(Element::Container(children)) => Some(children),
            _ => None,
        }
    }

    pub fn children(&self, id: &str) -> &[Node] {
        match self.elements.get(id) {
            Some(Element::Container(children)) => children.as_slice(),
            _ => &[],
        }
    }

    pub fn reward_cards(&self) -> impl Iterator<Item = &RewardCard> {
        self.children(REWARDS_CONTAINER)
            .iter()
            .filter_map(|node| match node {
                Node::RewardCard(card) => Some(card),
                _ => None,
            })
    }

    pub fn leaderboard_rows(&self) -> impl Iterator<Item = &LeaderboardRow> {
        self.children(LEADERBOARD_BODY)
            .iter()
            .filter_map(|node| match node {
                Node::LeaderboardRow(row) => Some(row),
                _ => None,
            })
    }
}
