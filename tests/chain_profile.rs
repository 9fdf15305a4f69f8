use monocle::{
    chain::{persistence, presets},
    modules::{ModuleRegistry, TypeRegistry},
};

#[test]
fn bootstraps_profile_from_preset() {
    // Compose the module set once; every profile shares it by reference.
    let modules = ModuleRegistry::standard();

    let mut config = presets::get_config("cosmoshub", Some("/tmp/keys"), false)
        .expect("failed to build preset profile");
    config.modules = modules.clone();

    config.validate().expect("preset profile failed validation");
    assert_eq!(config.chain_id, "cosmoshub-4");
    assert_eq!(config.modules.len(), 15);

    // Persist and recover the profile. The registry is not serialized and
    // must be re-attached after loading.
    let dir = std::env::temp_dir().join("monocle_bootstrap_test");
    let path = dir.join("cosmoshub.toml");

    persistence::save(&config, &path).expect("failed to save profile");
    let mut restored = persistence::load(&path).expect("failed to load profile");

    assert!(restored.modules.is_empty());
    restored.modules = modules.clone();
    restored.validate().expect("restored profile failed validation");
    assert_eq!(restored.chain_id, config.chain_id);
    assert_eq!(restored.gas_prices, config.gas_prices);

    // The encoding layer bootstrap sees every module's contribution.
    let mut types = TypeRegistry::default();
    restored.modules.register_types(&mut types);

    assert!(types.contains("/cosmos.bank.v1beta1.MsgSend"));
    assert!(types.contains("/cosmos.gov.v1beta1.MsgSubmitProposal"));
    assert!(types.contains("/ibc.core.channel.v1.MsgRecvPacket"));

    std::fs::remove_dir_all(&dir).expect("failed to delete test directory");
}

#[test]
fn profiles_share_one_registry() {
    let modules = ModuleRegistry::standard();

    let mut stride = presets::get_config("stride-local", Some("/tmp/keys"), false)
        .expect("failed to build stride profile");
    let mut gaia = presets::get_config("gaia-local", Some("/tmp/keys"), false)
        .expect("failed to build gaia profile");

    stride.modules = modules.clone();
    gaia.modules = modules.clone();

    stride.validate().expect("stride profile failed validation");
    gaia.validate().expect("gaia profile failed validation");

    assert_eq!(stride.modules, gaia.modules);
    assert_eq!(stride.account_prefix, "stride");
    assert_eq!(gaia.account_prefix, "cosmos");
}
