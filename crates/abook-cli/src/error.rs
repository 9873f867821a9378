use abook_config::ConfigError;
use abook_core::CoreError;
use abook_store::error::{StoreError, StoreErrorKind};
use anyhow::Error;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("malformed command, usage: {0}")]
    MalformedCommand(String),
}

pub fn malformed_command(usage: impl Into<String>) -> Error {
    CliError::MalformedCommand(usage.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

/// Exit-code mapping for fatal (startup) errors only; errors raised
/// inside the shell loop never terminate the process.
pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if cause.downcast_ref::<CliError>().is_some() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
        if let Some(store_err) = cause.downcast_ref::<StoreError>() {
            return ExitCode::from(store_exit_code(store_err));
        }
        if cause.downcast_ref::<ConfigError>().is_some() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
        if cause.downcast_ref::<CoreError>().is_some() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn store_exit_code(err: &StoreError) -> u8 {
    match err.kind() {
        StoreErrorKind::NotFound => EXIT_NOT_FOUND,
        StoreErrorKind::Json
        | StoreErrorKind::UnsupportedVersion
        | StoreErrorKind::Corrupt
        | StoreErrorKind::InvalidDataPath => EXIT_INVALID_INPUT,
        StoreErrorKind::Io | StoreErrorKind::MissingHomeDir => EXIT_FAILURE,
    }
}

/// The single boundary that turns a command error into the one short
/// line the shell prints. The loop keeps running afterwards.
pub fn message_for(err: &Error) -> String {
    for cause in err.chain() {
        if let Some(store_err) = cause.downcast_ref::<StoreError>() {
            if store_err.kind() == StoreErrorKind::NotFound {
                return "Contact not found.".to_string();
            }
        }
        if let Some(core_err) = cause.downcast_ref::<CoreError>() {
            return format!("Invalid input. {core_err}. Try again");
        }
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return cli_err.to_string();
        }
    }
    format!("Error: {err}")
}
