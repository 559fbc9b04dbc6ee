pub mod config;
pub mod error;
pub mod format;
pub mod generate;
pub mod personal_code;
pub mod response;
pub mod text;

pub use error::{IdCheckError, Result};
pub use config::{DEFAULT_LENGTH, IdConfig};
pub use format::{ALPHABET, check_id, verify, verify_len};
pub use generate::{IdGenerator, generate, generate_len, generate_token, generate_with_rng};
pub use personal_code::{PERSONAL_CODE_LEN, PersonalCode, checksum};
pub use response::{Response, TranslatableResponse};
