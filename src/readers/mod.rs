// src/readers/mod.rs

//! "Readers" for _hkalib_.
//!
//! ## Overview of readers
//!
//! * [`read_user_table`] drives a [`LineReader`] to derive [`User`s].
//! * [`read_key_tables`] drives the same `LineReader` to derive the
//!   [`KeyRecord`s] of each `User`.
//! * A `LineReader` is a cursor over [`LogLines`].
//!
//! <br/>
//!
//! The transcript is not parsed with a grammar. Each reader seeks the
//! cursor to a known marker line then reads a fixed structure after it.
//! Any unexpected structure is a [`ParseError`].
//!
//! Also see [_Definitions of data_].
//!
//! <br/>
//!
//! _These are not rust "Readers"; these structs do not implement the trait
//! [`Read`]. These are "readers" in an informal sense._
//!
//! [_Definitions of data_]: crate::data
//! [`Read`]: std::io::Read
//! [`ParseError`]: crate::common::ParseError
//! [`LogLines`]: crate::data::line::LogLines
//! [`User`s]: crate::data::user::User
//! [`KeyRecord`s]: crate::data::keyrecord::KeyRecord
//! [`LineReader`]: crate::readers::linereader::LineReader
//! [`read_user_table`]: crate::readers::usertablereader::read_user_table
//! [`read_key_tables`]: crate::readers::keytablereader::read_key_tables

pub mod helpers;
pub mod keytablereader;
pub mod linereader;
pub mod summary;
pub mod usertablereader;
