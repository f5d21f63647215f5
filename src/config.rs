/*
 *  config.rs
 *  (c) 2025 Teodor Potancok
 *
 *  This Source Code Form is subject to the terms of the Mozilla Public
 *  License, v. 2.0. If a copy of the MPL was not distributed with this
 *  file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct SecretConfig {
    /// Number of random bytes, before hex encoding.
    pub length: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub secret: SecretConfig,
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Error reading file: {0}")]
    ReadFile(std::io::Error),
    #[error("Error deserializing file: {}", .0.message())]
    Deserialize(toml::de::Error),
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let file = match std::fs::read_to_string(path) {
            Ok(f) => f,
            Err(e) => return Err(LoadError::ReadFile(e)),
        };
        let cfg = match toml::from_str::<Config>(&file) {
            Ok(f) => f,
            Err(e) => return Err(LoadError::Deserialize(e)),
        };

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_secret_length() {
        let file = write_config("[secret]\nlength = 32\n");
        let cfg = Config::load(file.path()).unwrap();
        assert_eq!(cfg.secret.length, Some(32));
    }

    #[test]
    fn empty_file_has_no_length() {
        let file = write_config("");
        let cfg = Config::load(file.path()).unwrap();
        assert_eq!(cfg.secret.length, None);
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, LoadError::ReadFile(_)));
    }

    #[test]
    fn malformed_toml() {
        let file = write_config("[secret]\nlength = \"lots\"\n");
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Deserialize(_)));
    }

    #[test]
    fn negative_length_is_rejected() {
        let file = write_config("[secret]\nlength = -4\n");
        assert!(matches!(
            Config::load(file.path()),
            Err(LoadError::Deserialize(_))
        ));
    }
}
