// src/readers/usertablereader.rs

//! Read the `listUsers` table of a transcript into [`UsersById`].
//!
//! The table as printed by the management utility:
//!
//! ```text
//! aws-cloudhsm>listUsers
//! Users on server 0(10.0.2.9):
//! Number of users found:3
//!
//!     User Id             User Type       User Name          MofnPubKey    LoginFailureCnt         2FA
//!          1              PCO             admin                    NO               0               NO
//!          2              AU              app_user                 NO               0               NO
//!          3              CU              ko_alice                 NO               0               NO
//! ```
//!
//! [`UsersById`]: crate::data::user::UsersById

use crate::common::{Count, LineIndex, ParseError, ResultParse, UserId};
use crate::data::user::{User, UserEntry, UsersById};
use crate::readers::helpers::count_after_colon;
use crate::readers::linereader::LineReader;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Marker line that declares the count of users.
pub const MARKER_USERS_FOUND: &str = "Number of users found";

/// Lines between the user count line and the first user row
/// (a blank line and the column headings).
pub const USER_TABLE_HEADER_LINES: usize = 2;

/// The result of [`read_user_table`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserTable {
    /// every user, keys not yet read
    pub users: UsersById,
    /// the line after the last user row; all `findAllKeys` sections are
    /// searched for from here
    pub start_of_info: LineIndex,
}

/// Split one user row into a [`User`].
///
/// Only the first three columns are used. `expected` is the user id the
/// row must have.
pub fn parse_user_row(
    line: &str,
    expected: UserId,
    at: LineIndex,
) -> ResultParse<User> {
    let mut columns = line.split_whitespace();
    let (user_id_s, user_type, user_name) = match (columns.next(), columns.next(), columns.next()) {
        (Some(a), Some(b), Some(c)) => (a, b, c),
        _ => {
            return Err(ParseError::BadUserRecord {
                line: String::from(line),
                at,
            });
        }
    };
    match user_id_s.parse::<UserId>() {
        Ok(user_id) if user_id == expected => Ok(User::new(user_id, user_type, user_name)),
        _ => Err(ParseError::UserIdMismatch {
            expected,
            found: String::from(user_id_s),
            at,
        }),
    }
}

/// Read the user table starting from the first line of the transcript.
///
/// The cursor of `linereader` is reset to line 0 first. On return the cursor
/// is at [`UserTable::start_of_info`].
pub fn read_user_table(linereader: &mut LineReader) -> ResultParse<UserTable> {
    defn!();
    linereader.reset(0);
    linereader.skip_to(MARKER_USERS_FOUND)?;
    let at: LineIndex = linereader.position();
    let line: &str = linereader.read_line()?;
    let number_of_users: Count = count_after_colon(line, at)?;
    defo!("number_of_users {}", number_of_users);
    let last_user_id: UserId = match UserId::try_from(number_of_users) {
        Ok(val) => val,
        Err(_) => {
            defx!("number_of_users {} is not a user id", number_of_users);
            return Err(ParseError::BadCount {
                line: String::from(line),
                at,
            });
        }
    };
    linereader.skip_lines(USER_TABLE_HEADER_LINES);

    let mut users = UsersById::new();
    for user_id in 1..=last_user_id {
        let at: LineIndex = linereader.position();
        let line: &str = linereader.read_line()?;
        let user: User = parse_user_row(line, user_id, at)?;
        defo!("{:?}", user);
        users.insert(user_id, UserEntry::new(user));
    }
    let start_of_info: LineIndex = linereader.position();
    defx!("{} users, start_of_info {}", users.len(), start_of_info);

    Ok(UserTable {
        users,
        start_of_info,
    })
}
