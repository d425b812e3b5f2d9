// src/data/user.rs

//! Implements a [`User`] struct and the [`UsersById`] table.

use crate::common::UserId;
use crate::data::keyrecord::{KeyRecord, KeyRecords};

use std::collections::BTreeMap;
use std::fmt;

/// `UserId` of the [`User::unknown`] sentinel.
pub const USER_ID_UNKNOWN: UserId = -1;

/// `user_name` of the [`User::unknown`] sentinel.
pub const USER_NAME_UNKNOWN: &str = "<unknown>";

/// One row of the `listUsers` table.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct User {
    pub user_id: UserId,
    /// e.g. `CO`, `CU`, `AU`, `PCO`
    pub user_type: String,
    pub user_name: String,
}

impl User {
    pub fn new(
        user_id: UserId,
        user_type: &str,
        user_name: &str,
    ) -> User {
        User {
            user_id,
            user_type: String::from(user_type),
            user_name: String::from(user_name),
        }
    }

    /// Stand-in owner of a key that no user owns.
    pub fn unknown() -> User {
        User::new(USER_ID_UNKNOWN, "", USER_NAME_UNKNOWN)
    }

    pub const fn is_unknown(&self) -> bool {
        self.user_id == USER_ID_UNKNOWN
    }
}

impl fmt::Display for User {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        write!(f, "user {} ({})", self.user_id, self.user_name)
    }
}

/// A [`User`] and the keys `findAllKeys` listed for that user.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserEntry {
    pub user: User,
    /// `None` when `findAllKeys` found zero keys for the user.
    pub keys: Option<KeyRecords>,
}

impl UserEntry {
    pub fn new(user: User) -> UserEntry {
        UserEntry { user, keys: None }
    }

    /// The user's key records; empty when there are none.
    pub fn key_records(&self) -> &[KeyRecord] {
        match &self.keys {
            Some(keys) => keys.as_slice(),
            None => &[],
        }
    }
}

/// Map [`UserId`] to [`UserEntry`], iterated in ascending user id order.
///
/// [`UserId`]: crate::common::UserId
pub type UsersById = BTreeMap<UserId, UserEntry>;
