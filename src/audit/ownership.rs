// src/audit/ownership.rs

//! Implements [`KeyOwnerIndex`], the reverse index from a key id to the user
//! holding the owner flag of that key.

use crate::common::KeyId;
use crate::data::diagnostic::{DiagnosticKind, Diagnostics};
use crate::data::user::{User, UsersById};

use std::collections::HashMap;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Map [`KeyId`] to the [`User`] holding the owner flag.
///
/// At most one user should own a key. That is checked while building the
/// index but not enforced; see [`KeyOwnerIndex::build`].
///
/// [`KeyId`]: crate::common::KeyId
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct KeyOwnerIndex {
    owners: HashMap<KeyId, User>,
}

impl KeyOwnerIndex {
    /// Build the index from the key lists of `users`.
    ///
    /// Users are visited in ascending user id order, key records in list
    /// order. When a key id is owned by more than one user the last one
    /// visited is kept and a [`DiagnosticKind::MultipleOwners`] warning is
    /// pushed. Users without keys and public keys are noted as `Info`.
    pub fn build(
        users: &UsersById,
        diagnostics: &mut Diagnostics,
    ) -> KeyOwnerIndex {
        defn!("{} users", users.len());
        let mut owners: HashMap<KeyId, User> = HashMap::new();
        for (user_id, entry) in users.iter() {
            let keys = match &entry.keys {
                Some(keys) => keys,
                None => {
                    diagnostics.info(
                        DiagnosticKind::NoKeysForUser,
                        format!("no keys for user {} ({})", user_id, entry.user.user_name),
                        Some(*user_id),
                        None,
                    );
                    continue;
                }
            };
            for key in keys.iter() {
                if key.is_owned() {
                    if let Some(prior) = owners.insert(key.key_id.clone(), entry.user.clone()) {
                        defo!("key {} owned by {} and {}", key.key_id, prior, entry.user);
                        diagnostics.warning(
                            DiagnosticKind::MultipleOwners,
                            format!(
                                "multiple owners for key {}: {} and {}",
                                key.key_id, prior, entry.user
                            ),
                            Some(*user_id),
                            Some(&key.key_id),
                        );
                    }
                } else if key.is_public() {
                    diagnostics.info(
                        DiagnosticKind::PublicKey,
                        format!("no flags for key {} of user {}", key.key_id, user_id),
                        Some(*user_id),
                        Some(&key.key_id),
                    );
                }
            }
        }
        defx!("{} keys indexed", owners.len());

        KeyOwnerIndex { owners }
    }

    /// The owner of `key_id`, if any user owns it.
    pub fn get(
        &self,
        key_id: &str,
    ) -> Option<&User> {
        self.owners.get(key_id)
    }

    /// The owner of `key_id`.
    ///
    /// If no user owns it then push a [`DiagnosticKind::UnownedKey`] error
    /// and return [`User::unknown`].
    pub fn find_key_owner(
        &self,
        key_id: &KeyId,
        diagnostics: &mut Diagnostics,
    ) -> User {
        match self.owners.get(key_id) {
            Some(user) => user.clone(),
            None => {
                defñ!("no owner for key {}", key_id);
                diagnostics.error(
                    DiagnosticKind::UnownedKey,
                    format!("no one owns key {}", key_id),
                    None,
                    Some(key_id),
                );

                User::unknown()
            }
        }
    }

    /// Count of distinct owned key ids.
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}
