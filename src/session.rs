//! Session Handler
//!
//! Interactive read/eval/print loop over any line-oriented stream pair.

use std::io::{BufRead, Write};

use crate::config::Config;
use crate::error::{KvError, Result};
use crate::protocol::{read_command, write_response, Command, Response, INVALID_ROLLBACK_MESSAGE};
use crate::store::Store;

/// Drives a store from a stream of text commands
pub struct Session<'a, R, W> {
    /// Command source
    reader: R,

    /// Output sink for prompts and responses
    writer: W,

    /// The store being driven
    store: &'a mut Store,

    /// Session configuration
    config: Config,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Create a new session handler
    pub fn new(store: &'a mut Store, config: Config, reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            store,
            config,
        }
    }

    /// Run the session (blocking until END or end of input)
    ///
    /// Reads commands in a loop and writes responses. Returns the number of
    /// commands executed against the store.
    pub fn run(&mut self) -> Result<usize> {
        tracing::debug!("Session started");
        let mut executed = 0;

        loop {
            self.write_prompt()?;

            let command = match read_command(&mut self.reader) {
                Ok(Some(command)) => command,
                Ok(None) => {
                    tracing::debug!("End of input after {} commands", executed);
                    return Ok(executed);
                }
                Err(KvError::Io(e)) => {
                    tracing::warn!("Error reading command: {}", e);
                    return Err(KvError::Io(e));
                }
                Err(e) => {
                    tracing::debug!("Rejected input: {}", e);
                    self.send_response(Response::error(e.to_string()))?;
                    continue;
                }
            };

            if command == Command::End {
                tracing::debug!("END received after {} commands", executed);
                return Ok(executed);
            }

            tracing::trace!("Executing {:?}", command);

            let response = self.execute_command(command);
            executed += 1;

            self.send_response(response)?;
        }
    }

    /// Execute a command and return a response
    fn execute_command(&mut self, command: Command) -> Response {
        match self.store.execute(command) {
            Ok(response) => response,
            Err(KvError::InvalidRollback) => Response::error(INVALID_ROLLBACK_MESSAGE),
            Err(e) => Response::error(e.to_string()),
        }
    }

    fn write_prompt(&mut self) -> Result<()> {
        if !self.config.prompt.is_empty() {
            write!(self.writer, "{}", self.config.prompt)?;
            self.writer.flush()?;
        }
        Ok(())
    }

    fn send_response(&mut self, response: Response) -> Result<()> {
        write_response(&mut self.writer, &response, &self.config.null_display)
    }

    /// Get the session configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
