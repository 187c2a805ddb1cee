//! Plain-text rendering for CLI output.

use chainparams::env::redact;
use chainparams::types::ether_string;
use chainparams::{Accounts, ChainParameterResolver, ChainParameters, NetworkEndpoint};

/// Render the registry as a table, default bundle last.
pub(crate) fn chain_table(resolver: &ChainParameterResolver) -> String {
    let mut lines = vec![
        format!(
            "{:<10} {:<12} {:<5} {:<10} {:<8} {:<10} {}",
            "Chain ID", "Name", "Dev", "Interval", "Sub ID", "Fee", "Coordinator"
        ),
        "-".repeat(100),
    ];
    let default = resolver.resolve_default();
    lines.extend(
        resolver
            .registry()
            .entries()
            .into_iter()
            .chain(std::iter::once(default))
            .map(|entry| chain_row(resolver, entry)),
    );
    lines.join("\n")
}

fn chain_row(resolver: &ChainParameterResolver, entry: &ChainParameters) -> String {
    let id = entry
        .chain_id
        .map_or_else(|| "default".to_owned(), |id| id.to_string());
    let dev = if resolver.is_development_chain(&entry.name) {
        "yes"
    } else {
        "no"
    };
    let (sub, fee, coordinator) = entry.oracle.as_ref().map_or_else(
        || ("-".to_owned(), "-".to_owned(), "-".to_owned()),
        |o| {
            (
                o.subscription_id.to_string(),
                ether_string(o.entrance_fee),
                o.coordinator
                    .map_or_else(|| "mock".to_owned(), |a| a.to_string()),
            )
        },
    );
    format!(
        "{:<10} {:<12} {:<5} {:<10} {:<8} {:<10} {}",
        id,
        entry.name,
        dev,
        format!("{}s", entry.update_interval_secs),
        sub,
        fee,
        coordinator
    )
}

/// Render resolved network endpoints with secrets masked.
pub(crate) fn network_table(endpoints: &[NetworkEndpoint], default: &str) -> String {
    let mut lines = vec![
        format!(
            "{:<12} {:<10} {:<8} {:<24} {}",
            "Network", "Chain ID", "Save", "Accounts", "RPC"
        ),
        "-".repeat(100),
    ];
    for ep in endpoints {
        let name = if ep.network.name() == default {
            format!("{}*", ep.network)
        } else {
            ep.network.to_string()
        };
        let chain_id = ep
            .chain_id
            .map_or_else(|| "-".to_owned(), |id| id.to_string());
        let save = if ep.save_deployments { "yes" } else { "no" };
        lines.push(format!(
            "{:<12} {:<10} {:<8} {:<24} {}",
            name,
            chain_id,
            save,
            accounts_cell(ep.accounts.as_ref()),
            ep.url.as_deref().unwrap_or("in-process"),
        ));
    }
    lines.join("\n")
}

fn accounts_cell(accounts: Option<&Accounts>) -> String {
    match accounts {
        None => "node".to_owned(),
        Some(Accounts::PrivateKeys(keys)) => keys
            .iter()
            .map(|k| redact(k))
            .collect::<Vec<_>>()
            .join(","),
        Some(accounts @ Accounts::Mnemonic(_)) => accounts.to_string(),
    }
}
