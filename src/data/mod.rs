// src/data/mod.rs

//! The `data` module is specialized data containers for
//! [`LogLines`], [`User`]s, [`KeyRecord`]s, and [`Diagnostic`]s.
//!
//! ## Definitions of data
//!
//! ### Transcript
//!
//! A "transcript" is the saved terminal session of an HSM management utility.
//! The session runs `listUsers` once and then `findAllKeys {user_id} 0`
//! once for every listed user.
//!
//! A transcript is held by [`LogLines`] and read by a [`LineReader`].
//!
//! ### User
//!
//! A "user" is one row of the `listUsers` table: a numeric id, a user type
//! (e.g. `CO`, `CU`, `AU`) and a user name.
//!
//! A user is represented by a [`User`] and found by
//! [`read_user_table`].
//!
//! ### Key record
//!
//! A "key record" is one entry of the inline key list printed by
//! `findAllKeys`, e.g. `262150(o,s)`: a key handle followed by optional
//! flags. Flag `o` means the user owns the key, flag `s` means the key is
//! shared with the user. A key record without flags is a public key.
//!
//! A key record is represented by a [`KeyRecord`] and found by
//! [`read_key_tables`].
//!
//! ### Diagnostic
//!
//! A "diagnostic" is a non-fatal observation about the data, e.g. a key with
//! more than one owner. A [`Diagnostic`] never stops an audit.
//!
//! [`LogLines`]: crate::data::line::LogLines
//! [`LineReader`]: crate::readers::linereader::LineReader
//! [`User`]: crate::data::user::User
//! [`read_user_table`]: crate::readers::usertablereader::read_user_table
//! [`KeyRecord`]: crate::data::keyrecord::KeyRecord
//! [`read_key_tables`]: crate::readers::keytablereader::read_key_tables
//! [`Diagnostic`]: crate::data::diagnostic::Diagnostic

pub mod diagnostic;
pub mod keyrecord;
pub mod line;
pub mod user;
