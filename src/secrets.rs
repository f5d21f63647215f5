/*
 *  secrets.rs
 *  (c) 2025 Teodor Potancok
 *
 *  This Source Code Form is subject to the terms of the Mozilla Public
 *  License, v. 2.0. If a copy of the MPL was not distributed with this
 *  file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
use rand::TryCryptoRng;
use rand::rngs::OsRng;
use thiserror::Error;

/// Number of random bytes in a secret when nothing else is configured.
pub const DEFAULT_SECRET_LENGTH: usize = 64;

/// Largest secret we accept, in bytes. The hex rendering stays below
/// `u32::MAX` characters.
pub const MAX_SECRET_LENGTH: usize = i32::MAX as usize;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Secure random source unavailable: {0}")]
    EntropyUnavailable(String),
    #[error("Invalid secret length {length}, expected 1..={max} bytes")]
    InvalidLength { length: usize, max: usize },
}

/// Draws `length` bytes from the operating system CSPRNG and returns them
/// as a lowercase hex string of `2 * length` characters.
pub fn generate(length: usize) -> Result<String, GenerateError> {
    generate_with(&mut OsRng, length)
}

pub fn generate_with<R>(rng: &mut R, length: usize) -> Result<String, GenerateError>
where
    R: TryCryptoRng + ?Sized,
{
    if length == 0 || length > MAX_SECRET_LENGTH {
        return Err(GenerateError::InvalidLength {
            length,
            max: MAX_SECRET_LENGTH,
        });
    }

    let mut bytes = vec![0u8; length];
    if let Err(e) = rng.try_fill_bytes(&mut bytes) {
        return Err(GenerateError::EntropyUnavailable(e.to_string()));
    }

    log::debug!("Drew {} random bytes", bytes.len());

    Ok(hex::encode(bytes))
}
