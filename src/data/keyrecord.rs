// src/data/keyrecord.rs

//! Implements a [`KeyRecord`] struct and parsing of the inline key list
//! printed by `findAllKeys`.
//!
//! A key list is a single line like
//!
//! ```text
//! 6(o),7(o,s),262148,262149(s)
//! ```

use crate::common::KeyId;

use std::fmt;

use ::lazy_static::lazy_static;
use ::regex::Regex;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Flag character marking the owner of a key.
pub const FLAG_OWNER: char = 'o';

/// Flag character marking a user the key is shared with.
pub const FLAG_SHARED: char = 's';

/// Regular expression for one entry of a key list.
///
/// Named group `id` is the key handle, named group `flags` is the optional
/// text within parentheses.
pub const KEY_RECORD_PATTERN: &str = r"(?x)
    (?P<id>\d+)           # key handle
    (?:\(                 # parentheses are not part of the flags
        (?P<flags>[os,]+)
    \))?                  # flags are optional
    ,?                    # separator
";

lazy_static! {
    static ref KEY_RECORD_REGEX: Regex = Regex::new(KEY_RECORD_PATTERN).unwrap();
}

/// One entry of a `findAllKeys` key list.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct KeyRecord {
    pub key_id: KeyId,
    /// Raw flags text, e.g. `"o"` or `"o,s"`. `None` for a public key.
    pub flags: Option<String>,
}

/// Sequence of [`KeyRecord`].
pub type KeyRecords = Vec<KeyRecord>;

impl KeyRecord {
    pub fn new(
        key_id: &str,
        flags: Option<&str>,
    ) -> KeyRecord {
        KeyRecord {
            key_id: KeyId::from(key_id),
            flags: flags.map(String::from),
        }
    }

    /// No flags at all; the key is public.
    #[inline(always)]
    pub const fn is_public(&self) -> bool {
        self.flags.is_none()
    }

    fn has_flag(
        &self,
        flag: char,
    ) -> bool {
        match &self.flags {
            Some(flags) => flags.contains(flag),
            None => false,
        }
    }

    /// The flags include [`FLAG_OWNER`].
    pub fn is_owned(&self) -> bool {
        self.has_flag(FLAG_OWNER)
    }

    /// The flags include [`FLAG_SHARED`].
    pub fn is_shared(&self) -> bool {
        self.has_flag(FLAG_SHARED)
    }
}

impl fmt::Display for KeyRecord {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        match &self.flags {
            Some(flags) => write!(f, "{}({})", self.key_id, flags),
            None => write!(f, "{}", self.key_id),
        }
    }
}

/// Find every [`KeyRecord`] in a `findAllKeys` key list line.
///
/// Text that does not match [`KEY_RECORD_PATTERN`] is skipped, so the
/// caller must compare the returned count to the declared count.
pub fn parse_key_list(line: &str) -> KeyRecords {
    defn!("({:?})", line);
    let keys: KeyRecords = KEY_RECORD_REGEX
        .captures_iter(line)
        .filter_map(|captures| {
            let key_id = captures.name("id")?;
            let flags = captures
                .name("flags")
                .map(|m| m.as_str());

            Some(KeyRecord::new(key_id.as_str(), flags))
        })
        .collect();
    defx!("return {} key records", keys.len());

    keys
}
