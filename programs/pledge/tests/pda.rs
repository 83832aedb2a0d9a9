// Address derivation tests. These run against the derivation scheme alone
// (no SVM needed): the same seeds the on-chain #[account(seeds = ...)]
// constraints use must be reproducible by any off-chain client.

use anchor_lang::prelude::Pubkey;
use pledge::constants::{CONFIG_SEED, PLEDGE_SEED, VAULT_SEED};

fn config_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG_SEED], &pledge::ID)
}

fn pledge_pda(user: &Pubkey, created_at: i64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[PLEDGE_SEED, user.as_ref(), &created_at.to_le_bytes()],
        &pledge::ID,
    )
}

fn vault_pda(pledge_addr: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED, pledge_addr.as_ref()], &pledge::ID)
}

#[test]
fn config_address_is_a_deployment_singleton() {
    let (a, bump_a) = config_pda();
    let (b, bump_b) = config_pda();
    assert_eq!(a, b);
    assert_eq!(bump_a, bump_b);
}

#[test]
fn pledge_address_is_pure_in_its_inputs() {
    let user = Pubkey::new_unique();
    let (a, _) = pledge_pda(&user, 1_700_000_000);
    let (b, _) = pledge_pda(&user, 1_700_000_000);
    assert_eq!(a, b);
}

#[test]
fn created_at_in_the_seeds_allows_concurrent_pledges() {
    // Same user, different creation timestamps: independent addresses
    let user = Pubkey::new_unique();
    let (first, _) = pledge_pda(&user, 1_700_000_000);
    let (second, _) = pledge_pda(&user, 1_700_000_001);
    assert_ne!(first, second);
}

#[test]
fn pledge_addresses_are_scoped_per_user() {
    let created_at = 1_700_000_000;
    let (a, _) = pledge_pda(&Pubkey::new_unique(), created_at);
    let (b, _) = pledge_pda(&Pubkey::new_unique(), created_at);
    assert_ne!(a, b);
}

#[test]
fn vault_follows_its_pledge() {
    let user = Pubkey::new_unique();
    let (pledge_addr, _) = pledge_pda(&user, 1_700_000_000);
    let (vault_a, _) = vault_pda(&pledge_addr);
    let (vault_b, _) = vault_pda(&pledge_addr);
    assert_eq!(vault_a, vault_b);
    assert_ne!(vault_a, pledge_addr);

    let (other_pledge, _) = pledge_pda(&user, 1_700_000_001);
    let (other_vault, _) = vault_pda(&other_pledge);
    assert_ne!(vault_a, other_vault);
}
