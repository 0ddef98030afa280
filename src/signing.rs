// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Compress-then-sign wrapping of finalized containers.
//!
//! ```text
//! ┌──────────────────┬──────────────────────┬──────────────────────┐
//! │ 64 zero bytes    │ RSA signature        │ LZ11 container       │
//! │ (reserved)       │ (key modulus bytes)  │                      │
//! └──────────────────┴──────────────────────┴──────────────────────┘
//! ```
//!
//! The signature is PKCS#1 v1.5 over the SHA-1 digest of the compressed
//! bytes. The reserved prefix is always 64 bytes whatever the key size.
//! Every failure is an error; nothing partially signed is ever returned.

use std::fs;
use std::path::Path;

use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha1::{Digest, Sha1};
use tracing::debug;

use crate::error::{Error, Result};
use crate::lz11::{Compressor, Lz11};

/// Zeroed bytes ahead of the signature.
pub const SIGNATURE_PREFIX_LEN: usize = 64;

/// Holds the private key; cheap to share across threads by reference.
pub struct Signer {
    key: RsaPrivateKey,
    compressor: Box<dyn Compressor>,
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer")
            .field("key_bits", &(self.key.size() * 8))
            .finish_non_exhaustive()
    }
}

impl Signer {
    pub fn new(key: RsaPrivateKey) -> Self {
        Self {
            key,
            compressor: Box::new(Lz11),
        }
    }

    pub fn with_compressor(mut self, compressor: impl Compressor + 'static) -> Self {
        self.compressor = Box::new(compressor);
        self
    }

    /// Parse a PEM key, PKCS#1 (`RSA PRIVATE KEY`) or PKCS#8 (`PRIVATE KEY`).
    pub fn from_pem(pem: &str, origin: &Path) -> Result<Self> {
        let key = RsaPrivateKey::from_pkcs1_pem(pem)
            .or_else(|_| RsaPrivateKey::from_pkcs8_pem(pem))
            .map_err(|e| Error::Key {
                path: origin.to_path_buf(),
                reason: e.to_string(),
            })?;
        Ok(Self::new(key))
    }

    pub fn from_pem_file(path: &Path) -> Result<Self> {
        let pem = fs::read_to_string(path).map_err(|e| Error::Key {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_pem(&pem, path)
    }

    pub fn public_key(&self) -> RsaPublicKey {
        self.key.to_public_key()
    }

    /// Signature width in bytes (the key modulus size).
    pub fn signature_len(&self) -> usize {
        self.key.size()
    }

    /// Compress `container` and wrap it with the signature block.
    pub fn seal(&self, container: &[u8]) -> Result<Vec<u8>> {
        let compressed = self.compressor.compress(container)?;
        let digest = Sha1::digest(&compressed);
        let signature = self
            .key
            .sign(Pkcs1v15Sign::new::<Sha1>(), &digest)
            .map_err(|e| Error::Signing(e.to_string()))?;

        let mut out = Vec::with_capacity(SIGNATURE_PREFIX_LEN + signature.len() + compressed.len());
        out.resize(SIGNATURE_PREFIX_LEN, 0);
        out.extend_from_slice(&signature);
        out.extend_from_slice(&compressed);

        debug!(
            container = container.len(),
            compressed = compressed.len(),
            signed = out.len(),
            "container signed"
        );
        Ok(out)
    }
}

/// Check a signed file against `public` and return its compressed payload.
pub fn verify<'a>(public: &RsaPublicKey, signed: &'a [u8]) -> Result<&'a [u8]> {
    let sig_len = public.size();
    let body = SIGNATURE_PREFIX_LEN + sig_len;
    if signed.len() < body {
        return Err(Error::Signing(format!(
            "signed file of {} bytes is shorter than its {}-byte signature block",
            signed.len(),
            body
        )));
    }
    if signed[..SIGNATURE_PREFIX_LEN].iter().any(|&b| b != 0) {
        return Err(Error::Signing("reserved prefix is not zeroed".into()));
    }

    let signature = &signed[SIGNATURE_PREFIX_LEN..body];
    let payload = &signed[body..];
    public
        .verify(Pkcs1v15Sign::new::<Sha1>(), &Sha1::digest(payload), signature)
        .map_err(|e| Error::Signing(e.to_string()))?;
    Ok(payload)
}
