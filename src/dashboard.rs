use crate::document::{
    DISPLAY_NAME, Document, Node, REFERRAL_CODE, REWARDS_CONTAINER, RewardCard, TOTAL_DONATIONS,
};
use crate::model::{InternProfile, REWARDS};

pub fn render_dashboard(doc: &mut Document, profile: &InternProfile) {
    render_stats(doc, profile);
    render_rewards(doc, profile);
}

pub fn render_stats(doc: &mut Document, profile: &InternProfile) {
    if let Some(name) = &profile.name {
        doc.set_text(DISPLAY_NAME, name.as_str());
    }
    if let Some(code) = &profile.referral_code {
        doc.set_text(REFERRAL_CODE, code.as_str());
    }
    if let Some(total) = profile.total_donations {
        doc.set_text(TOTAL_DONATIONS, total.to_string());
    }
}

pub fn render_rewards(doc: &mut Document, profile: &InternProfile) {
    let Some(container) = doc.container_mut(REWARDS_CONTAINER) else {
        return;
    };
    container.clear();
    container.extend(
        REWARDS
            .iter()
            .map(|reward| Node::RewardCard(RewardCard::new(reward, profile.unlocks(reward)))),
    );
}
