use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Sequence sorted when no values are supplied.
pub const DEMO_SEQUENCE: [i64; 6] = [10, 7, 8, 9, 1, 5];

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {}: {source}", display_path(.path))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid integer `{token}` at position {position}: {source}")]
    InvalidValue {
        token: String,
        position: usize,
        #[source]
        source: ParseIntError,
    },
}

/// Where the sequence comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    Demo,
    Args(Vec<i64>),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    pub fn new(values: &[i64], input: Option<&Path>) -> Self {
        match input {
            Some(path) if path == Path::new("-") => Self::Stdin,
            Some(path) => Self::File(path.to_path_buf()),
            None if values.is_empty() => Self::Demo,
            None => Self::Args(values.to_vec()),
        }
    }

    pub fn read_values<R: Read>(&self, mut stdin: R) -> Result<Vec<i64>, InputError> {
        match self {
            Self::Demo => Ok(DEMO_SEQUENCE.to_vec()),
            Self::Args(values) => Ok(values.clone()),
            Self::File(path) => {
                let text = fs::read_to_string(path).map_err(|source| InputError::Read {
                    path: path.clone(),
                    source,
                })?;
                parse_values(&text)
            }
            Self::Stdin => {
                let mut text = String::new();
                stdin
                    .read_to_string(&mut text)
                    .map_err(|source| InputError::Read {
                        path: PathBuf::from("-"),
                        source,
                    })?;
                parse_values(&text)
            }
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Demo => f.write_str("demo"),
            Self::Args(_) => f.write_str("arguments"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => f.write_str("stdin"),
        }
    }
}

/// Parses integers separated by whitespace and/or commas.
///
/// Enclosing brackets are accepted, so printed output can be fed back in.
/// Positions in errors are 1-based token indices.
pub fn parse_values(text: &str) -> Result<Vec<i64>, InputError> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(trimmed);

    body.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| {
            token.parse::<i64>().map_err(|source| InputError::InvalidValue {
                token: token.to_owned(),
                position: i + 1,
                source,
            })
        })
        .collect()
}

fn display_path(path: &Path) -> String {
    if path == Path::new("-") {
        "stdin".to_owned()
    } else {
        path.display().to_string()
    }
}
