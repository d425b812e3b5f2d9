// src/tests/common.rs

//! Transcript fixtures shared by the tests.

use crate::common::{Count, UserId};
use crate::data::keyrecord::parse_key_list;
use crate::data::line::LogLines;
use crate::data::user::{User, UserEntry, UsersById};

/// Lines before the `listUsers` table.
pub const SESSION_PREAMBLE: &str = "\
$ /opt/cloudhsm/bin/cloudhsm_mgmt_util /opt/cloudhsm/etc/cloudhsm_mgmt_util.cfg
Connecting to server '10.0.2.9': hostname '10.0.2.9', port 2225...
aws-cloudhsm>loginHSM CO admin *****
loginHSM success on server 0(10.0.2.9)
";

/// `listUsers` column headings.
pub const USER_TABLE_HEADINGS: &str =
    "    User Id             User Type       User Name                          MofnPubKey    LoginFailureCnt         2FA";

/// One `listUsers` row.
pub fn user_row(
    user_id: UserId,
    user_type: &str,
    user_name: &str,
) -> String {
    format!(
        "{:>10}              {:<15} {:<34} NO               0               NO",
        user_id, user_type, user_name
    )
}

/// The `listUsers` command and its output.
pub fn user_table(users: &[(UserId, &str, &str)]) -> String {
    let mut s = String::from("aws-cloudhsm>listUsers\nUsers on server 0(10.0.2.9):\n");
    s.push_str(&format!("Number of users found:{}\n\n", users.len()));
    s.push_str(USER_TABLE_HEADINGS);
    s.push('\n');
    for (user_id, user_type, user_name) in users.iter() {
        s.push_str(&user_row(*user_id, user_type, user_name));
        s.push('\n');
    }

    s
}

/// One `findAllKeys` command and its output. `key_line` is ignored when
/// `declared` is zero.
pub fn key_section(
    user_id: UserId,
    declared: Count,
    key_line: &str,
) -> String {
    let mut s = format!(
        "aws-cloudhsm>findAllKeys {0} 0\nKeys on server 0(10.0.2.9):\nCommand:  findAllKeys {0} 0\n\n",
        user_id
    );
    s.push_str(&format!("Number of keys found {}\n", declared));
    s.push_str(&format!("number of keys matched from start index 0::{}\n", declared));
    if declared > 0 {
        s.push_str(key_line);
        s.push('\n');
    }
    s.push_str("\nfindAllKeys success on server 0(10.0.2.9)\n");

    s
}

/// A whole session: preamble, `listUsers`, then one `findAllKeys` section
/// per entry of `keys`, then `quit`.
pub fn transcript(
    users: &[(UserId, &str, &str)],
    keys: &[(UserId, Count, &str)],
) -> String {
    let mut s = String::from(SESSION_PREAMBLE);
    s.push_str(&user_table(users));
    for (user_id, declared, key_line) in keys.iter() {
        s.push_str(&key_section(*user_id, *declared, key_line));
    }
    s.push_str("aws-cloudhsm>quit\n");

    s
}

/// Users of [`transcript_basic`].
pub const BASIC_USERS: [(UserId, &str, &str); 4] = [
    (1, "CO", "admin"),
    (2, "CU", "ko_alice"),
    (3, "CU", "bob"),
    (4, "CU", "releng_ci"),
];

/// Key sections of [`transcript_basic`].
///
/// * `ko_alice` only shares key 30, owned by `bob`
/// * `releng_ci` only shares key 40, owned by no one
/// * key 262148 is public
pub const BASIC_KEYS: [(UserId, Count, &str); 4] = [
    (1, 0, ""),
    (2, 3, "20(o),30(s),262148"),
    (3, 2, "30(o),31(o,s)"),
    (4, 1, "40(s)"),
];

pub fn transcript_basic() -> String {
    transcript(&BASIC_USERS, &BASIC_KEYS)
}

pub fn loglines_basic() -> LogLines {
    LogLines::from_text("basic.log", &transcript_basic())
}

/// Build a `UsersById` from `(user id, user name, key list line)`.
/// An empty key list line means the user has no keys.
pub fn users_from(rows: &[(UserId, &str, &str)]) -> UsersById {
    let mut users = UsersById::new();
    for (user_id, user_name, key_line) in rows.iter() {
        let mut entry = UserEntry::new(User::new(*user_id, "CU", user_name));
        if !key_line.is_empty() {
            entry.keys = Some(parse_key_list(key_line));
        }
        users.insert(*user_id, entry);
    }

    users
}
