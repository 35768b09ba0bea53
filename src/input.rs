use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use num_integer::Integer;
use thiserror::Error;
use tracing::debug;

/// Failure while reading a file of numbers.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read {}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}:{line_number}: invalid integer {line:?}: {reason}", .path.display())]
    Parse {
        path: PathBuf,
        line_number: usize,
        line: String,
        reason: String,
    },
}

/// Reads one base-10 integer per line, in file order.
///
/// A line holds an optional `+` or `-` followed by ASCII digits. Surrounding
/// whitespace is ignored, so CRLF files parse. A blank line, a digit
/// separator or a line that is not valid UTF-8 is a parse error. The first
/// bad line aborts the read and nothing is returned for the lines before it.
pub fn read_numbers<T, P>(path: P) -> Result<Vec<T>, InputError>
where
    T: Integer,
    T::FromStrRadixErr: fmt::Display,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file_access = |source| InputError::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    debug!("reading numbers from {}", path.display());
    let reader = BufReader::new(File::open(path).map_err(file_access)?);

    let mut numbers: Vec<T> = vec![];
    for (index, bytes) in reader.split(b'\n').enumerate() {
        let parse_error = |line, reason| InputError::Parse {
            path: path.to_path_buf(),
            line_number: index + 1,
            line,
            reason,
        };

        let bytes = bytes.map_err(file_access)?;
        let line = match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(err) => {
                let line = String::from_utf8_lossy(err.as_bytes()).into_owned();
                return Err(parse_error(line, "line is not valid UTF-8".to_string()));
            }
        };

        let number = match integer_literal(line.trim()).map(|literal| T::from_str_radix(literal, 10)) {
            Some(Ok(number)) => number,
            Some(Err(err)) => return Err(parse_error(line, err.to_string())),
            None => {
                let reason = "expected an optional sign followed by decimal digits";
                return Err(parse_error(line, reason.to_string()));
            }
        };
        numbers.push(number);
    }

    debug!("read {} numbers from {}", numbers.len(), path.display());
    Ok(numbers)
}

/// Reads the file as 32-bit signed integers.
pub fn read_i32_numbers<P: AsRef<Path>>(path: P) -> Result<Vec<i32>, InputError> {
    read_numbers(path)
}

/// Checks for `[+-]?[0-9]+` and returns the text to parse, without a `+`.
fn integer_literal(text: &str) -> Option<&str> {
    let (literal, digits) = if let Some(rest) = text.strip_prefix('+') {
        (rest, rest)
    } else if let Some(rest) = text.strip_prefix('-') {
        (text, rest)
    } else {
        (text, text)
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(literal)
}
