use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidatorError {
    #[error("config error: {0}")]
    Config(#[from] rasa_config::ConfigError),
}
