use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use crate::config::PortalConfig;
use crate::fetch;
use crate::model::{Payload, Resource, resource_label};
use crate::state::{Delta, ProviderCommand};

/// Runs fetches off the UI thread, one command at a time, until the command
/// channel closes.
pub fn spawn_provider(config: PortalConfig, tx: Sender<Delta>, cmd_rx: Receiver<ProviderCommand>) {
    thread::spawn(move || {
        for cmd in cmd_rx {
            match cmd {
                ProviderCommand::Fetch { resource, load_id } => {
                    let payload = load(&config, resource, |msg| {
                        let _ = tx.send(Delta::Log(msg));
                    });
                    if tx
                        .send(Delta::Loaded {
                            resource,
                            load_id,
                            payload,
                        })
                        .is_err()
                    {
                        return;
                    }
                }
            }
        }
    });
}

/// Fetch boundary: failures are logged and become `None`.
pub fn load(
    config: &PortalConfig,
    resource: Resource,
    mut log: impl FnMut(String),
) -> Option<Payload> {
    match fetch::fetch(config, resource) {
        Ok(Some(payload)) => {
            log(format!("[INFO] Loaded {} data", resource_label(resource)));
            Some(payload)
        }
        Ok(None) => {
            log(format!(
                "[INFO] No {} data returned, using sample data",
                resource_label(resource)
            ));
            None
        }
        Err(err) => {
            log(format!(
                "[WARN] Error fetching {} data: {err:#}",
                resource_label(resource)
            ));
            None
        }
    }
}
