//! Command definitions
//!
//! Represents commands issued by the user.

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Get,
    Set,
    Unset,
    Begin,
    Rollback,
    Commit,
    End,
}

impl CommandType {
    /// Keyword used in the text protocol
    pub fn name(&self) -> &'static str {
        match self {
            CommandType::Get => "GET",
            CommandType::Set => "SET",
            CommandType::Unset => "UNSET",
            CommandType::Begin => "BEGIN",
            CommandType::Rollback => "ROLLBACK",
            CommandType::Commit => "COMMIT",
            CommandType::End => "END",
        }
    }

    /// Number of arguments the command takes
    pub fn arity(&self) -> usize {
        match self {
            CommandType::Get | CommandType::Unset => 1,
            CommandType::Set => 2,
            CommandType::Begin | CommandType::Rollback | CommandType::Commit | CommandType::End => 0,
        }
    }

    /// Look up a keyword, ignoring ASCII case
    pub fn from_keyword(word: &str) -> Option<Self> {
        let command_type = match word.to_ascii_uppercase().as_str() {
            "GET" => CommandType::Get,
            "SET" => CommandType::Set,
            "UNSET" => CommandType::Unset,
            "BEGIN" => CommandType::Begin,
            "ROLLBACK" => CommandType::Rollback,
            "COMMIT" => CommandType::Commit,
            "END" => CommandType::End,
            _ => return None,
        };
        Some(command_type)
    }
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Read the effective value of a key
    Get { key: String },

    /// Set a key
    Set { key: String, value: String },

    /// Delete a key
    Unset { key: String },

    /// Open a nested transaction
    Begin,

    /// Discard the innermost transaction
    Rollback,

    /// Flatten every open transaction into the Base Table
    Commit,

    /// End the session
    End,
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Get { .. } => CommandType::Get,
            Command::Set { .. } => CommandType::Set,
            Command::Unset { .. } => CommandType::Unset,
            Command::Begin => CommandType::Begin,
            Command::Rollback => CommandType::Rollback,
            Command::Commit => CommandType::Commit,
            Command::End => CommandType::End,
        }
    }

    /// Keyword of this command
    pub fn name(&self) -> &'static str {
        self.command_type().name()
    }
}
