// src/tests/policy_tests.rs

//! tests for `policy.rs`

#![allow(non_snake_case)]

use crate::audit::policy::{
    check_policy,
    ExpectedOwner,
    KeyOwnerPolicy,
    MisOwnedKeys,
    PREFIX_KEY_OWNER,
    PREFIX_RELENG,
};
use crate::common::{KeyId, UserId};
use crate::data::diagnostic::{DiagnosticKind, Diagnostics};
use crate::tests::common::users_from;

use ::test_case::test_case;

fn expected(
    user_id: UserId,
    user_name: &str,
) -> ExpectedOwner {
    ExpectedOwner {
        user_id,
        user_name: String::from(user_name),
    }
}

#[test_case(true, &["ko", "releng"], "ko, releng (include releng: yes)"; "with releng")]
#[test_case(false, &["ko"], "ko (include releng: no)"; "without releng")]
fn test_KeyOwnerPolicy_new(
    include_releng: bool,
    prefixes: &[&str],
    describe: &str,
) {
    let policy = KeyOwnerPolicy::new(include_releng);
    assert_eq!(policy.prefixes(), prefixes);
    assert_eq!(policy.include_releng(), include_releng);
    assert_eq!(policy.describe(), describe);
}

#[test]
fn test_KeyOwnerPolicy_default() {
    let policy = KeyOwnerPolicy::default();
    assert_eq!(policy.prefixes(), &[PREFIX_KEY_OWNER, PREFIX_RELENG]);
}

#[test]
fn test_KeyOwnerPolicy_with_prefixes() {
    let extra: Vec<String> = ["sec", "", "ko", "sec", "ops"]
        .iter()
        .map(|s| String::from(*s))
        .collect();
    let policy = KeyOwnerPolicy::with_prefixes(false, &extra);
    assert_eq!(policy.prefixes(), &["ko", "sec", "ops"]);
    assert_eq!(policy.describe(), "ko, sec, ops (include releng: no)");
}

#[test]
fn test_KeyOwnerPolicy_key_owners() {
    let users = users_from(&[
        (1, "releng_a", ""),
        (2, "ko_b", ""),
        (3, "admin", ""),
        (4, "ko_c", ""),
        (5, "Ko_d", ""),
    ]);
    // grouped by prefix, ascending user id within a group
    assert_eq!(KeyOwnerPolicy::new(true).key_owners(&users), vec![2, 4, 1]);
    assert_eq!(KeyOwnerPolicy::new(false).key_owners(&users), vec![2, 4]);
}

#[test]
fn test_KeyOwnerPolicy_key_owners_overlapping_prefixes() {
    let users = users_from(&[(1, "ko_x", ""), (2, "kopy", "")]);
    let extra = vec![String::from("ko_")];
    let policy = KeyOwnerPolicy::with_prefixes(false, &extra);
    // user 1 matches both "ko" and "ko_" and is listed once
    assert_eq!(policy.key_owners(&users), vec![1, 2]);
}

#[test]
fn test_check_policy() {
    let users = users_from(&[
        (1, "ko_alice", "20(o),30(s),262148"),
        (2, "bob", "30(o),31(s)"),
        (3, "ko_carol", "31(s),32(o,s)"),
    ]);
    let key_owners: Vec<UserId> = vec![1, 3];
    let mut diagnostics = Diagnostics::new();
    let misowned: MisOwnedKeys = check_policy(&users, &key_owners, &mut diagnostics);

    assert_eq!(misowned.len(), 2);
    assert_eq!(misowned.get("30"), Some(&[expected(1, "ko_alice")][..]));
    assert_eq!(misowned.get("31"), Some(&[expected(3, "ko_carol")][..]));
    assert_eq!(misowned.get("32"), None);
    // bob is not a key owner so key 31 shared with bob does not count
    let keys: Vec<&KeyId> = misowned
        .iter()
        .map(|(key_id, _)| key_id)
        .collect();
    assert_eq!(keys, vec!["30", "31"]);

    let errors: Vec<String> = diagnostics
        .of_kind(DiagnosticKind::MisOwnedKey)
        .map(|d| d.message.clone())
        .collect();
    assert_eq!(errors, vec!["ko_alice doesn't own 30", "ko_carol doesn't own 31"]);
}

#[test]
fn test_check_policy_conflicting() {
    let users = users_from(&[
        (1, "ko_a", "77(s)"),
        (2, "ko_b", "77(s)"),
        (3, "owner", "77(o)"),
    ]);
    let mut diagnostics = Diagnostics::new();
    let misowned = check_policy(&users, &[1, 2], &mut diagnostics);
    assert_eq!(misowned.len(), 1);
    assert_eq!(misowned.get("77"), Some(&[expected(1, "ko_a"), expected(2, "ko_b")][..]));
}

#[test]
fn test_check_policy_skips() {
    // user 9 is not in `users`, user 2 has no keys
    let users = users_from(&[(1, "ko_a", "5(o),6"), (2, "ko_b", "")]);
    let mut diagnostics = Diagnostics::new();
    let misowned = check_policy(&users, &[9, 2, 1], &mut diagnostics);
    assert!(misowned.is_empty());
    assert!(diagnostics.is_empty());
}

#[test]
fn test_check_policy_idempotent() {
    let users = users_from(&[(1, "ko_a", "1(s),2(s)"), (2, "x", "1(o)")]);
    let before = users.clone();
    let mut diagnostics1 = Diagnostics::new();
    let mut diagnostics2 = Diagnostics::new();
    let misowned1 = check_policy(&users, &[1], &mut diagnostics1);
    let misowned2 = check_policy(&users, &[1], &mut diagnostics2);
    assert_eq!(misowned1, misowned2);
    assert_eq!(diagnostics1, diagnostics2);
    assert_eq!(users, before);
}

#[test]
fn test_MisOwnedKeys_insertion_order() {
    let mut misowned = MisOwnedKeys::new();
    assert!(misowned.is_empty());
    for key in ["9", "1", "5", "1"] {
        misowned.push(&KeyId::from(key), expected(1, "ko"));
    }
    let keys: Vec<&str> = misowned
        .iter()
        .map(|(key_id, _)| key_id.as_str())
        .collect();
    assert_eq!(keys, vec!["9", "1", "5"]);
    assert_eq!(misowned.get("1").map(|owners| owners.len()), Some(2));
}

#[test]
fn test_KeyOwnerPolicy_with_prefixes_releng() {
    let extra = vec![String::from("releng")];
    let policy = KeyOwnerPolicy::with_prefixes(false, &extra);
    assert!(policy.include_releng());
    assert_eq!(policy.prefixes(), &["ko", "releng"]);
    assert_eq!(policy.describe(), "ko, releng (include releng: yes)");
    assert_eq!(policy, KeyOwnerPolicy::new(true));
}
