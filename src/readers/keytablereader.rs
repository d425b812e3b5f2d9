// src/readers/keytablereader.rs

//! Read the `findAllKeys` sections of a transcript into the key lists of
//! [`UsersById`].
//!
//! One section as printed by the management utility:
//!
//! ```text
//! aws-cloudhsm>findAllKeys 3 0
//! Keys on server 0(10.0.2.9):
//! Command:  findAllKeys 3 0
//!
//! Number of keys found 3
//! number of keys matched from start index 0::3
//! 6(o),7(o,s),262148
//!
//! findAllKeys success on server 0(10.0.2.9)
//! ```
//!
//! [`UsersById`]: crate::data::user::UsersById

use crate::common::{Count, LineIndex, ParseError, ResultParse, UserId};
use crate::data::keyrecord::{parse_key_list, KeyRecords};
use crate::data::user::UsersById;
use crate::readers::helpers::count_last_token;
use crate::readers::linereader::LineReader;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Marker line that declares the count of keys of one user.
///
/// The trailing space distinguishes it from the
/// `"number of keys matched from start index"` line.
pub const MARKER_KEYS_FOUND: &str = "Number of keys found ";

/// Lines between the key count line and the key list line.
pub const KEY_LIST_HEADER_LINES: usize = 1;

/// The command echo that begins the section of `user_id`.
pub fn marker_find_all_keys(user_id: UserId) -> String {
    format!("findAllKeys {} 0", user_id)
}

/// Read the key section of one user.
///
/// The cursor is reset to `start_of_info` first. Returns `None` if the
/// section declares zero keys.
pub fn read_user_keys(
    linereader: &mut LineReader,
    start_of_info: LineIndex,
    user_id: UserId,
) -> ResultParse<Option<KeyRecords>> {
    defn!("({}, {})", start_of_info, user_id);
    linereader.reset(start_of_info);
    linereader.skip_to(&marker_find_all_keys(user_id))?;
    linereader.skip_to(MARKER_KEYS_FOUND)?;
    let at: LineIndex = linereader.position();
    let line: &str = linereader.read_line()?;
    let number_of_keys: Count = count_last_token(line, at)?;
    if number_of_keys == 0 {
        defx!("user {} has no keys", user_id);
        return Ok(None);
    }
    linereader.skip_lines(KEY_LIST_HEADER_LINES);
    let at: LineIndex = linereader.position();
    let key_line: &str = linereader.read_line()?;
    let keys: KeyRecords = parse_key_list(key_line);
    if keys.len() as Count != number_of_keys {
        defx!("user {} declared {} keys, found {}", user_id, number_of_keys, keys.len());
        return Err(ParseError::KeyCountMismatch {
            user_id,
            declared: number_of_keys,
            found: keys.len() as Count,
            at,
        });
    }
    defx!("user {} has {} keys", user_id, keys.len());

    Ok(Some(keys))
}

/// Read the key section of every user in `users`, in ascending user id
/// order, and store the found keys in each [`UserEntry`].
///
/// [`UserEntry`]: crate::data::user::UserEntry
pub fn read_key_tables(
    linereader: &mut LineReader,
    start_of_info: LineIndex,
    users: &mut UsersById,
) -> ResultParse<()> {
    defn!("({}) {} users", start_of_info, users.len());
    for (user_id, entry) in users.iter_mut() {
        entry.keys = read_user_keys(linereader, start_of_info, *user_id)?;
    }
    defx!();

    Ok(())
}
