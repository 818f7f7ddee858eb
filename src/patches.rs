use std::{fs::{File, OpenOptions}, io::{Read, Seek, SeekFrom, Write}, ops::Range, path::Path};

use log::{debug, info};

use crate::{config::PatchLength, error::PatchError, value::decode_tokens};

/// Replacement content for the leading bytes of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    content: Vec<u8>,
}

impl Patch {
    pub fn new(content: Vec<u8>) -> Self {
        Self { content }
    }

    /// Fully validates `tokens` before anything can be written.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S], length: PatchLength) -> Result<Self, PatchError> {
        Ok(Self::new(decode_tokens(tokens, length)?))
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn range(&self) -> Range<usize> {
        0..self.content.len()
    }

    fn check_len(&self, len: u64) -> Result<(), PatchError> {
        if len < self.content.len() as u64 {
            return Err(PatchError::FileTooShort {
                len,
                needed: self.content.len(),
            });
        }
        Ok(())
    }

    pub fn apply(&self, original: &[u8]) -> Result<Vec<u8>, PatchError> {
        self.check_len(original.len() as u64)?;
        let mut patched = original.to_vec();
        patched[self.range()].copy_from_slice(&self.content);
        Ok(patched)
    }
}

/// Overwrites the first bytes of an existing file in place. The rest of the
/// file is neither read nor written, and a file shorter than the patch is
/// left untouched.
pub fn patch_file(path: impl AsRef<Path>, patch: &Patch) -> Result<(), PatchError> {
    let path = path.as_ref();
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)?;
    let len = file.metadata()?.len();
    debug!("{path:?} is {len} bytes long");
    patch.check_len(len)?;

    file.seek(SeekFrom::Start(0))?;
    file.write_all(patch.content())?;
    file.sync_all()?;
    info!("wrote {} bytes at offset 0 of {path:?}", patch.content().len());
    Ok(())
}

pub fn read_header(path: impl AsRef<Path>, length: PatchLength) -> Result<Vec<u8>, PatchError> {
    let mut file = File::open(path)?;
    let len = file.metadata()?.len();
    if len < length.get() as u64 {
        return Err(PatchError::FileTooShort {
            len,
            needed: length.get(),
        });
    }
    let mut header = vec![0; length.get()];
    file.read_exact(&mut header)?;
    Ok(header)
}
