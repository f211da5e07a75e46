// Command pattern for the call session
// This module defines intents sent from UI components to the session coroutine

pub mod session_commands;

pub use session_commands::SessionCommand;
