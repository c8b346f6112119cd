use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    #[error("Birthday must be a real calendar date")]
    InvalidBirthday,

    #[error("Name not found: {0}")]
    NameNotFound(String),

    #[error("Name already present: {0}")]
    NameExists(String),

    #[error("Phone not found: {0}")]
    PhoneNotFound(String),

    #[error("Expected at least {needed} arguments, got {got}")]
    MissingArgs { needed: usize, got: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl DirectoryError {
    /// The fixed user-facing string a failed command prints.
    ///
    /// Every message the bot shows for a domain failure comes from here,
    /// so the failure-to-message table stays in one place. `Io`/`Config`
    /// never reach the command layer; they surface at startup instead.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidPhone(_) | Self::InvalidBirthday => {
                "The phone number must contains only 10 digit.".to_string()
            }
            Self::NameNotFound(_) => "This name doesn't have in the dictionary.".to_string(),
            Self::NameExists(_) => {
                "This name is already in the dictionary. Use 'add phone' to append new phone."
                    .to_string()
            }
            Self::PhoneNotFound(_) => {
                "This phone number doesn't exist in the dictionary.".to_string()
            }
            Self::MissingArgs { .. } => {
                "Not enough params. It needs to have 2 params (Name Phone): ".to_string()
            }
            Self::Io(e) => format!("IO error: {}", e),
            Self::Config(e) => format!("Config error: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
