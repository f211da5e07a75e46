use std::sync::Arc;

use dioxus::prelude::*;
use log::{error, info, warn};
use crate::config::ResolvedConfig;
use crate::login::{login_result, ConnectionStatus, Credentials, LoginHandler, SimulatedLogin};
use crate::notifications::Notification;
use super::{LoginScreen, SoftphoneScreen, ToastStack, Toasts};

#[derive(Clone, Debug, PartialEq)]
enum AppState {
    Login,
    Softphone { credentials: Credentials },
}

pub fn App() -> Element {
    let config = use_context::<ResolvedConfig>();
    
    // State for the login flow
    let mut app_state = use_signal(|| AppState::Login);
    let mut connection_status = use_signal(|| ConnectionStatus::Disconnected);
    let mut error_message = use_signal(|| None::<String>);
    
    // Toast surface shared with every screen
    let toast_items = use_signal(Vec::new);
    let mut toasts = use_context_provider(|| Toasts::new(toast_items, config.toast_duration));
    
    let login_handler: Arc<dyn LoginHandler> =
        use_hook(|| Arc::new(SimulatedLogin::new(config.login_delay)) as Arc<dyn LoginHandler>);
    
    // Login submit handler
    let on_login = move |credentials: Credentials| {
        let credentials = match credentials.validate() {
            Ok(credentials) => credentials,
            Err(e) => {
                warn!("Login form rejected: {}", e);
                toasts.push(Notification::destructive("Error", e.to_string()));
                return;
            }
        };
        
        info!("Connecting with {:?}", credentials);
        connection_status.set(ConnectionStatus::Connecting);
        error_message.set(None);
        
        let handler = login_handler.clone();
        spawn(async move {
            let result = handler.connect(&credentials).await;
            let (status, message) = login_result(&result);
            connection_status.set(status);
            error_message.set(message);
            
            match result {
                Ok(()) => {
                    info!("Logged in to {}", credentials.server);
                    toasts.push(Notification::info(
                        "Conexión exitosa",
                        format!("Conectado a {}", credentials.server),
                    ));
                    app_state.set(AppState::Softphone { credentials });
                }
                Err(e) => {
                    error!("Login failed: {:?}", e);
                    toasts.push(Notification::destructive(
                        "Error de conexión",
                        "No se pudo conectar al servidor Vicidial",
                    ));
                }
            }
        });
    };
    
    // Logout handler
    let on_logout = move |_| {
        info!("Logging out");
        app_state.set(AppState::Login);
        connection_status.set(ConnectionStatus::Disconnected);
        error_message.set(None);
        toasts.push(Notification::info("Sesión cerrada", "Ha cerrado sesión correctamente"));
    };
    
    // Render based on current app state
    let current_state = app_state.read().clone();
    
    rsx! {
        style {
            {include_str!("../../assets/softphone.css")}
        }
        
        div {
            class: "app",
            match current_state {
                AppState::Login => rsx! {
                    LoginScreen {
                        connection_status: *connection_status.read(),
                        error_message: error_message.read().clone(),
                        on_login: on_login
                    }
                },
                AppState::Softphone { credentials } => rsx! {
                    SoftphoneScreen {
                        username: credentials.username.clone(),
                        extension: credentials.extension.clone(),
                        call_timing: config.call_timing,
                        history: config.history.clone(),
                        on_logout: on_logout
                    }
                },
            }
            
            ToastStack {}
        }
    }
}
