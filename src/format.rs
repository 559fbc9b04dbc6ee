use crate::config::DEFAULT_LENGTH;
use crate::error::{IdCheckError, Result};

/// The 62 symbols an identifier is drawn from.
pub const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Checks if a character belongs to the identifier alphabet.
fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Checks that `id` is exactly `length` characters from [`ALPHABET`].
///
/// Length is counted in characters and checked before the alphabet.
///
/// # Errors
///
/// Returns `WrongLength` if the length differs, `InvalidId` if any character
/// falls outside `[A-Za-z0-9]`.
pub fn check_id(length: usize, id: &str) -> Result<()> {
    let found = id.chars().count();
    if found != length {
        return Err(IdCheckError::WrongLength {
            expected: length,
            found,
        });
    }

    if !id.chars().all(is_id_char) {
        return Err(IdCheckError::InvalidId { id: id.to_string() });
    }

    Ok(())
}

/// Returns true if `id` is a well-formed identifier of the default length (16).
///
/// ```
/// assert!(idcheck::verify("ABCDEFGHijklmn12"));
/// assert!(!idcheck::verify("ABCDEFGHijklmn1!"));
///
/// // a missing value is not a valid identifier
/// let absent: Option<&str> = None;
/// assert!(!absent.is_some_and(idcheck::verify));
/// ```
#[must_use]
pub fn verify(id: &str) -> bool {
    verify_len(DEFAULT_LENGTH, id)
}

/// Returns true if `id` is a well-formed identifier of exactly `length` characters.
#[must_use]
pub fn verify_len(length: usize, id: &str) -> bool {
    match check_id(length, id) {
        Ok(()) => true,
        Err(err) => {
            tracing::trace!(length, %err, "identifier rejected");
            false
        }
    }
}

/// Splits a fixed-width decimal numeral into its digits, most significant first.
///
/// # Errors
///
/// Returns `WrongLength` unless `input` has exactly `N` characters, and
/// `NonDigit` for the first character outside `0-9`. Positions are character
/// indices.
pub(crate) fn decimal_digits<const N: usize>(input: &str) -> Result<[u8; N]> {
    let found = input.chars().count();
    if found != N {
        return Err(IdCheckError::WrongLength { expected: N, found });
    }

    let mut digits = [0u8; N];
    for (position, (slot, c)) in digits.iter_mut().zip(input.chars()).enumerate() {
        let digit = c
            .to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .ok_or(IdCheckError::NonDigit { position, found: c })?;
        *slot = digit;
    }

    Ok(digits)
}
