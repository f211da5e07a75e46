use crate::softphone::CallStatus;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonStyle {
    Normal,
    Highlighted,
    Danger,
    Warning,
}

/// Everything the controls panel needs to render, derived from the session.
#[derive(Debug, Clone, PartialEq)]
pub struct CallControlState {
    pub call_visible: bool,
    pub hangup_visible: bool,
    pub secondary_visible: bool,
    pub hold_style: ButtonStyle,
    pub mute_style: ButtonStyle,
    pub mute_icon_off: bool,
    pub speaker_style: ButtonStyle,
    pub status_line: &'static str,
}

impl CallControlState {
    pub fn from_session(status: CallStatus, is_on_hold: bool, is_muted: bool, is_speaker_on: bool) -> Self {
        let active = status.is_active();
        // hold has no meaning outside a connected call
        let on_hold = is_on_hold && status == CallStatus::Connected;

        let status_line = match status {
            CallStatus::Idle => "Listo para marcar",
            CallStatus::Dialing => "Marcando número...",
            CallStatus::Ringing => "Timbre...",
            CallStatus::Connected if on_hold => "Llamada en espera",
            CallStatus::Connected => "Llamada en curso",
            CallStatus::Disconnected => "",
        };

        Self {
            call_visible: !active,
            hangup_visible: active,
            secondary_visible: active,
            hold_style: if on_hold { ButtonStyle::Warning } else { ButtonStyle::Normal },
            mute_style: if is_muted { ButtonStyle::Danger } else { ButtonStyle::Normal },
            mute_icon_off: is_muted,
            speaker_style: if is_speaker_on { ButtonStyle::Highlighted } else { ButtonStyle::Normal },
            status_line,
        }
    }

    pub fn get_button_class(&self, style: &ButtonStyle) -> &'static str {
        match style {
            ButtonStyle::Normal => "round-button round-button-outline",
            ButtonStyle::Highlighted => "round-button round-button-primary",
            ButtonStyle::Danger => "round-button round-button-destructive",
            ButtonStyle::Warning => "round-button round-button-warning",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [CallStatus; 5] = [
        CallStatus::Idle,
        CallStatus::Dialing,
        CallStatus::Ringing,
        CallStatus::Connected,
        CallStatus::Disconnected,
    ];

    #[test]
    fn active_status_selects_control_set() {
        for status in ALL {
            let state = CallControlState::from_session(status, false, false, false);
            let active = matches!(status, CallStatus::Dialing | CallStatus::Ringing | CallStatus::Connected);
            assert_eq!(state.call_visible, !active, "{:?}", status);
            assert_eq!(state.hangup_visible, active, "{:?}", status);
            assert_eq!(state.secondary_visible, active, "{:?}", status);
        }
    }

    #[test]
    fn status_lines() {
        let line = |status, hold| CallControlState::from_session(status, hold, false, false).status_line;
        assert_eq!(line(CallStatus::Idle, false), "Listo para marcar");
        assert_eq!(line(CallStatus::Dialing, false), "Marcando número...");
        assert_eq!(line(CallStatus::Ringing, false), "Timbre...");
        assert_eq!(line(CallStatus::Connected, false), "Llamada en curso");
        assert_eq!(line(CallStatus::Connected, true), "Llamada en espera");
        assert_eq!(line(CallStatus::Disconnected, false), "");
    }

    #[test]
    fn hold_highlight_only_when_connected() {
        let ringing = CallControlState::from_session(CallStatus::Ringing, true, false, false);
        assert_eq!(ringing.hold_style, ButtonStyle::Normal);
        assert_eq!(ringing.status_line, "Timbre...");

        let held = CallControlState::from_session(CallStatus::Connected, true, false, false);
        assert_eq!(held.hold_style, ButtonStyle::Warning);
    }

    #[test]
    fn toggle_highlights() {
        let state = CallControlState::from_session(CallStatus::Connected, false, true, true);
        assert_eq!(state.mute_style, ButtonStyle::Danger);
        assert!(state.mute_icon_off);
        assert_eq!(state.speaker_style, ButtonStyle::Highlighted);
        assert_eq!(state.get_button_class(&state.speaker_style), "round-button round-button-primary");
    }
}
