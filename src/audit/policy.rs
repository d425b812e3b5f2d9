// src/audit/policy.rs

//! The key owner policy and the check that finds mis-owned keys.
//!
//! A "key owner role" user is one whose user name starts with one of the
//! policy prefixes. Every key a key owner role user can see must either be
//! public or be owned by that user. A key merely shared with that user is
//! "mis-owned".

use crate::common::{KeyId, UserId};
use crate::data::diagnostic::{DiagnosticKind, Diagnostics};
use crate::data::user::UsersById;

use std::collections::HashMap;

use ::itertools::Itertools;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// User name prefix of key owner role users; always part of the policy.
pub const PREFIX_KEY_OWNER: &str = "ko";

/// User name prefix of release engineering users.
pub const PREFIX_RELENG: &str = "releng";

/// Which users are expected to own keys.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyOwnerPolicy {
    /// user name prefixes, in checking order
    prefixes: Vec<String>,
    include_releng: bool,
}

impl KeyOwnerPolicy {
    /// The reference policy: prefix `"ko"`, and `"releng"` if
    /// `include_releng`.
    pub fn new(include_releng: bool) -> KeyOwnerPolicy {
        let mut prefixes: Vec<String> = vec![String::from(PREFIX_KEY_OWNER)];
        if include_releng {
            prefixes.push(String::from(PREFIX_RELENG));
        }

        KeyOwnerPolicy {
            prefixes,
            include_releng,
        }
    }

    /// The reference policy followed by `extra` prefixes.
    /// Empty or repeated prefixes are ignored.
    ///
    /// An extra [`PREFIX_RELENG`] includes releng users even if
    /// `include_releng` is `false`.
    pub fn with_prefixes(
        include_releng: bool,
        extra: &[String],
    ) -> KeyOwnerPolicy {
        let mut policy = KeyOwnerPolicy::new(include_releng);
        for prefix in extra.iter() {
            if prefix.is_empty() || policy.prefixes.contains(prefix) {
                continue;
            }
            if prefix.as_str() == PREFIX_RELENG {
                policy.include_releng = true;
            }
            policy.prefixes.push(prefix.clone());
        }

        policy
    }

    pub fn prefixes(&self) -> &[String] {
        self.prefixes.as_slice()
    }

    pub const fn include_releng(&self) -> bool {
        self.include_releng
    }

    /// Human-readable statement of the policy, e.g.
    /// `"ko, releng (include releng: yes)"`.
    pub fn describe(&self) -> String {
        format!(
            "{} (include releng: {})",
            self.prefixes.iter().join(", "),
            if self.include_releng { "yes" } else { "no" },
        )
    }

    /// User ids of key owner role users.
    ///
    /// Grouped by prefix in policy order, ascending user id within a group.
    /// A user matching more than one prefix is listed once, in the group of
    /// the first prefix it matches.
    pub fn key_owners(
        &self,
        users: &UsersById,
    ) -> Vec<UserId> {
        let mut key_owners: Vec<UserId> = Vec::new();
        for prefix in self.prefixes.iter() {
            for (user_id, entry) in users.iter() {
                if entry.user.user_name.starts_with(prefix.as_str()) && !key_owners.contains(user_id) {
                    key_owners.push(*user_id);
                }
            }
        }

        key_owners
    }
}

impl Default for KeyOwnerPolicy {
    fn default() -> Self {
        KeyOwnerPolicy::new(true)
    }
}

/// A user that was expected to own a mis-owned key.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ExpectedOwner {
    pub user_id: UserId,
    pub user_name: String,
}

/// Map [`KeyId`] to the users expected to own it, iterated in the order
/// the key ids were first inserted.
///
/// [`KeyId`]: crate::common::KeyId
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MisOwnedKeys {
    order: Vec<KeyId>,
    expected: HashMap<KeyId, Vec<ExpectedOwner>>,
}

impl MisOwnedKeys {
    pub fn new() -> MisOwnedKeys {
        MisOwnedKeys::default()
    }

    /// Append `owner` to the expected owners of `key_id`.
    pub fn push(
        &mut self,
        key_id: &KeyId,
        owner: ExpectedOwner,
    ) {
        match self.expected.get_mut(key_id) {
            Some(owners) => owners.push(owner),
            None => {
                self.order.push(key_id.clone());
                self.expected.insert(key_id.clone(), vec![owner]);
            }
        }
    }

    pub fn get(
        &self,
        key_id: &str,
    ) -> Option<&[ExpectedOwner]> {
        self.expected
            .get(key_id)
            .map(|owners| owners.as_slice())
    }

    /// `(key id, expected owners)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&KeyId, &[ExpectedOwner])> {
        self.order.iter().filter_map(move |key_id| {
            self.expected
                .get(key_id)
                .map(|owners| (key_id, owners.as_slice()))
        })
    }

    /// Count of mis-owned key ids.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Find the keys that the key owner role users hold without the owner flag.
///
/// `key_owners` is the result of [`KeyOwnerPolicy::key_owners`]. A user in
/// `key_owners` that is not in `users` or has no keys is skipped. Public
/// keys are skipped. Each mis-owned key also pushes a
/// [`DiagnosticKind::MisOwnedKey`] error.
///
/// Does not modify `users`; repeated calls return equal results.
pub fn check_policy(
    users: &UsersById,
    key_owners: &[UserId],
    diagnostics: &mut Diagnostics,
) -> MisOwnedKeys {
    defn!("{} key owners", key_owners.len());
    let mut misowned = MisOwnedKeys::new();
    for user_id in key_owners.iter() {
        let entry = match users.get(user_id) {
            Some(entry) => entry,
            None => continue,
        };
        let user_name: &String = &entry.user.user_name;
        defo!("checking {} (id:{})", user_name, user_id);
        for key in entry.key_records() {
            if key.is_public() || key.is_owned() {
                continue;
            }
            diagnostics.error(
                DiagnosticKind::MisOwnedKey,
                format!("{} doesn't own {}", user_name, key.key_id),
                Some(*user_id),
                Some(&key.key_id),
            );
            misowned.push(
                &key.key_id,
                ExpectedOwner {
                    user_id: *user_id,
                    user_name: user_name.clone(),
                },
            );
        }
    }
    defx!("{} mis-owned keys", misowned.len());

    misowned
}
