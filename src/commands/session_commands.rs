/// Commands sent from UI to the session coroutine
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Replace the dial buffer with typed input
    SetDialedNumber(String),

    /// Remove the last character of the dial buffer
    Backspace,

    /// A keypad button was pressed
    KeyPress(String),

    /// Start a call to the dial buffer
    Dial,

    /// End the current call
    Hangup,

    /// Put call on hold or resume it
    ToggleHold,

    /// Toggle microphone mute
    ToggleMute,

    /// Toggle loudspeaker
    ToggleSpeaker,

    /// Transfer the current call
    Transfer,

    /// Pre-fill the dial buffer from a history row
    CallBack(String),
}
