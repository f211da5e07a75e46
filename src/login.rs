use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::info;
use thiserror::Error;

use crate::history::BadgeVariant;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub server: String,
    pub username: String,
    pub password: String,
    pub extension: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("server", &self.server)
            .field("username", &self.username)
            .field("password", &"***")
            .field("extension", &self.extension)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    Server,
    Username,
    Password,
    Extension,
}

impl fmt::Display for CredentialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CredentialField::Server => "Servidor Vicidial",
            CredentialField::Username => "Usuario",
            CredentialField::Password => "Contraseña",
            CredentialField::Extension => "Extensión",
        };
        f.write_str(label)
    }
}

impl Credentials {
    /// First field left empty, in form order.
    pub fn missing_field(&self) -> Option<CredentialField> {
        [
            (CredentialField::Server, &self.server),
            (CredentialField::Username, &self.username),
            (CredentialField::Password, &self.password),
            (CredentialField::Extension, &self.extension),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
    }

    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }

    /// Presence check only; the values are passed on unchanged.
    pub fn validate(self) -> Result<Self, LoginError> {
        match self.missing_field() {
            Some(field) => Err(LoginError::MissingField(field)),
            None => Ok(self),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Falta el campo obligatorio: {0}")]
    MissingField(CredentialField),

    /// The reason is for the log; users see the generic message.
    #[error("Error de conexión. Verifique sus credenciales y la URL del servidor.")]
    ConnectionFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    Error,
}

impl ConnectionStatus {
    pub fn badge(self) -> (&'static str, BadgeVariant) {
        match self {
            ConnectionStatus::Disconnected => ("Desconectado", BadgeVariant::Outline),
            ConnectionStatus::Connecting => ("Conectando...", BadgeVariant::Secondary),
            ConnectionStatus::Connected => ("Conectado", BadgeVariant::Success),
            ConnectionStatus::Error => ("Error", BadgeVariant::Destructive),
        }
    }

    pub fn is_connecting(self) -> bool {
        self == ConnectionStatus::Connecting
    }
}

/// Whatever accepts a credential set and eventually says yes or no.
#[async_trait]
pub trait LoginHandler: Send + Sync {
    async fn connect(&self, credentials: &Credentials) -> Result<(), LoginError>;
}

/// Accepts any complete credential set after a fixed delay.
#[derive(Debug, Clone)]
pub struct SimulatedLogin {
    delay: Duration,
}

impl SimulatedLogin {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl LoginHandler for SimulatedLogin {
    async fn connect(&self, credentials: &Credentials) -> Result<(), LoginError> {
        info!("Simulating login to {} as {}", credentials.server, credentials.username);
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

/// Status and message the login screen shows for a finished attempt.
pub fn login_result(result: &Result<(), LoginError>) -> (ConnectionStatus, Option<String>) {
    match result {
        Ok(()) => (ConnectionStatus::Connected, None),
        Err(e) => (ConnectionStatus::Error, Some(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONNECTION_ERROR_MESSAGE: &str =
        "Error de conexión. Verifique sus credenciales y la URL del servidor.";

    fn filled() -> Credentials {
        Credentials {
            server: "https://dialer.example.com".to_string(),
            username: "agent7".to_string(),
            password: "s3cret".to_string(),
            extension: "1001".to_string(),
        }
    }

    struct RejectingLogin;

    #[async_trait]
    impl LoginHandler for RejectingLogin {
        async fn connect(&self, _credentials: &Credentials) -> Result<(), LoginError> {
            Err(LoginError::ConnectionFailed("refused".to_string()))
        }
    }

    #[test]
    fn all_four_fields_are_required() {
        assert!(filled().is_complete());
        assert_eq!(Credentials::default().missing_field(), Some(CredentialField::Server));

        let mut creds = filled();
        creds.extension.clear();
        assert_eq!(
            creds.clone().validate(),
            Err(LoginError::MissingField(CredentialField::Extension))
        );
        assert_eq!(
            LoginError::MissingField(CredentialField::Extension).to_string(),
            "Falta el campo obligatorio: Extensión"
        );
    }

    #[test]
    fn validate_passes_values_through_unchanged() {
        let mut creds = filled();
        creds.server = "not a url".to_string();
        assert_eq!(creds.clone().validate(), Ok(creds));
    }

    #[test]
    fn debug_hides_password() {
        let printed = format!("{:?}", filled());
        assert!(printed.contains("agent7"));
        assert!(!printed.contains("s3cret"));
    }

    #[test]
    fn connection_badges() {
        assert_eq!(ConnectionStatus::default().badge(), ("Desconectado", BadgeVariant::Outline));
        assert_eq!(ConnectionStatus::Connecting.badge().0, "Conectando...");
        assert_eq!(ConnectionStatus::Connected.badge().1, BadgeVariant::Success);
        assert_eq!(ConnectionStatus::Error.badge().1, BadgeVariant::Destructive);
        assert!(ConnectionStatus::Connecting.is_connecting());
    }

    #[test]
    fn simulated_login_succeeds() {
        let handler = SimulatedLogin::new(Duration::ZERO);
        let result = tokio_test::block_on(handler.connect(&filled()));
        assert_eq!(login_result(&result), (ConnectionStatus::Connected, None));
    }

    #[test]
    fn failed_login_reports_error_message() {
        let result = tokio_test::block_on(RejectingLogin.connect(&filled()));
        let (status, message) = login_result(&result);
        assert_eq!(status, ConnectionStatus::Error);
        assert_eq!(message.as_deref(), Some(CONNECTION_ERROR_MESSAGE));
    }
}
