use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;

use crate::config::PortalConfig;
use crate::model::{InternProfile, LeaderboardEntry, Payload, Resource};

const REQUEST_TIMEOUT_SECS: u64 = 10;

static CLIENT: OnceCell<Client> = OnceCell::new();

fn portal_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("intern_portal/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build http client")
    })
}

/// One GET against the resource's endpoint.
///
/// `Ok(None)` means the endpoint answered with nothing (`null` or an empty
/// body). Any transport, status or parse problem is an error; callers treat
/// both the same way and fall back.
pub fn fetch(config: &PortalConfig, resource: Resource) -> Result<Option<Payload>> {
    let client = portal_client()?;
    let url = config.resource_url(resource);

    let resp = client.get(&url).send().context("request failed")?;
    let status = resp.status();
    let body = resp.text().context("failed reading body")?;
    if !status.is_success() {
        return Err(anyhow!("http {status} from {url}"));
    }
    parse_payload(resource, &body)
}

pub fn parse_payload(resource: Resource, raw: &str) -> Result<Option<Payload>> {
    Ok(match resource {
        Resource::Intern => parse_intern_json(raw)?.map(Payload::Intern),
        Resource::Leaderboard => parse_leaderboard_json(raw)?.map(Payload::Leaderboard),
    })
}

pub fn parse_intern_json(raw: &str) -> Result<Option<InternProfile>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(None);
    }
    let profile = serde_json::from_str(trimmed).context("invalid intern json")?;
    Ok(Some(profile))
}

pub fn parse_leaderboard_json(raw: &str) -> Result<Option<Vec<LeaderboardEntry>>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(None);
    }
    let entries = serde_json::from_str(trimmed).context("invalid leaderboard json")?;
    Ok(Some(entries))
}
