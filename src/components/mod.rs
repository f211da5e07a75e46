pub mod app;
pub mod call_control_state;
pub mod call_controls;
pub mod call_display;
pub mod call_history;
pub mod call_make_input;
pub mod keypad;
pub mod login_screen;
pub mod softphone_screen;
pub mod toast_stack;
pub mod user_info_bar;

pub use app::App;
pub use call_controls::CallControls;
pub use call_display::CallDisplay;
pub use call_history::CallHistory;
pub use call_make_input::CallMakeInput;
pub use keypad::Keypad;
pub use login_screen::LoginScreen;
pub use softphone_screen::SoftphoneScreen;
pub use toast_stack::{ToastStack, Toasts};
pub use user_info_bar::UserInfoBar;
