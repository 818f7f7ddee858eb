pub mod config;
pub mod error;
pub mod layout;
pub mod patches;
pub mod value;

pub use config::PatchLength;
pub use error::{PatchError, TokenError};
pub use patches::{patch_file, read_header, Patch};
