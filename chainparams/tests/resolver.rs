//! Resolver behavior against the builtin parameter table.

use chainparams::registry::BUILTIN_DEVELOPMENT_CHAINS;
use chainparams::{ChainParameterResolver, Network, NetworkEnv, config};
use tempfile::TempDir;

#[test]
fn registered_ids_resolve_to_themselves() {
    let resolver = ChainParameterResolver::builtin();
    for entry in resolver.registry().entries() {
        let id = entry.chain_id.expect("registered entries carry an id");
        assert_eq!(resolver.resolve(id).chain_id, Some(id), "chain {id}");
    }
}

#[test]
fn unregistered_ids_fall_back_to_default() {
    let resolver = ChainParameterResolver::builtin();
    for id in [0, 1, 42, 999_999, u64::MAX] {
        assert_eq!(resolver.resolve(id), resolver.resolve_default(), "chain {id}");
    }
    assert_eq!(resolver.resolve_default().name, "hardhat");
}

#[test]
fn development_set_is_exact() {
    let resolver = ChainParameterResolver::builtin();
    let mut names: Vec<&str> = resolver
        .registry()
        .entries()
        .into_iter()
        .map(|c| c.name.as_str())
        .collect();
    names.push(resolver.resolve_default().name.as_str());

    for name in names {
        assert_eq!(
            resolver.is_development_chain(name),
            BUILTIN_DEVELOPMENT_CHAINS.contains(&name),
            "{name}"
        );
    }
    assert!(!resolver.is_development_chain("sepolia"), "unregistered name");
}

#[test]
fn default_bundle_has_no_oracle() {
    let resolver = ChainParameterResolver::builtin();
    let default = resolver.resolve_default();
    assert!(default.oracle.is_none(), "default must stay oracle-free");
    assert!(default.is_default(), "default has no chain id");
    assert!(default.require_oracle().is_err(), "oracle access must fail");
}

#[test]
fn localhost_and_polygon_examples() {
    let resolver = ChainParameterResolver::builtin();

    assert_eq!(resolver.resolve(31337).name, "localhost");
    assert!(resolver.is_development_chain("localhost"), "localhost is local");

    let polygon = resolver.resolve(137);
    assert_eq!(polygon.name, "polygon");
    assert!(!resolver.is_development_chain("polygon"), "polygon is live");
    let oracle = polygon.require_oracle().expect("polygon has an oracle");
    assert_eq!(oracle.subscription_id, 6926);
    assert_eq!(oracle.callback_gas_limit, 500_000);
}

#[test]
fn resolve_is_idempotent() {
    let resolver = ChainParameterResolver::builtin();
    for id in [5, 137, 31337, 80001, 12345] {
        let first = resolver.resolve(id).clone();
        assert_eq!(&first, resolver.resolve(id), "chain {id}");
    }
}

#[test]
fn resolver_is_shareable_across_threads() {
    let resolver = ChainParameterResolver::builtin();
    std::thread::scope(|s| {
        let handles: Vec<_> = [5_u64, 137, 80001, 7]
            .into_iter()
            .map(|id| {
                let resolver = &resolver;
                s.spawn(move || resolver.resolve(id).name.clone())
            })
            .collect();
        let names: Vec<String> = handles
            .into_iter()
            .map(|h| h.join().expect("reader thread"))
            .collect();
        assert_eq!(names, ["goerli", "polygon", "mumbai", "hardhat"]);
    });
}

#[test]
fn networks_line_up_with_registry() {
    let resolver = ChainParameterResolver::builtin();
    let env = NetworkEnv::from_lookup(|_| None);
    for endpoint in env.endpoints() {
        let Some(id) = endpoint.chain_id else { continue };
        let params = resolver.resolve(id);
        match endpoint.network {
            // in-process chain shares 31337 with the local node entry
            Network::Hardhat => assert_eq!(params.name, "localhost"),
            Network::Mainnet => assert!(params.is_default(), "mainnet has no entry"),
            network => assert_eq!(params.name, network.name()),
        }
    }
}

#[test]
fn config_file_overrides_builtin() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("chainparams.toml");
    std::fs::write(
        &path,
        r#"
        development_chains = ["hardhat"]

        [default]
        name = "hardhat"
        update_interval_secs = 15

        [chains.1]
        name = "mainnet"
        update_interval_secs = 120
        "#,
    )
    .expect("write config");

    let resolver = config::load(&path).expect("valid config");

    assert_eq!(resolver.resolve(1).name, "mainnet");
    assert_eq!(resolver.resolve(137).update_interval_secs, 15);
    assert!(!resolver.is_development_chain("localhost"), "not listed");
}
