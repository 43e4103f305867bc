//! Protocol Module
//!
//! Line-oriented text protocol between the user and the store.
//!
//! ## Request Format
//! One command per line, words separated by whitespace. The keyword is
//! case-insensitive; keys and values are taken verbatim and cannot contain
//! whitespace.
//!
//! ```text
//! GET <key>
//! SET <key> <value>
//! UNSET <key>
//! BEGIN
//! ROLLBACK
//! COMMIT
//! END
//! ```
//!
//! ## Response Rendering
//! - OK with payload: the payload (GET hit)
//! - OK without payload: nothing
//! - NOT_FOUND: the configured null display (`NULL` by default)
//! - ERROR: the message, e.g. `INVALID ROLLBACK`

mod command;
mod response;
mod codec;

pub use command::{Command, CommandType};
pub use response::{Response, Status};
pub use codec::{
    format_command, parse_command, read_command, render_response, write_response,
    INVALID_ROLLBACK_MESSAGE,
};
