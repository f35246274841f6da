/*!
Digest computation for payment signatures.
*/

use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

use crate::core::crypto::config::HashAlgorithm;

/// Compute the digest of `data` under the selected algorithm.
pub fn digest(algorithm: HashAlgorithm, data: &[u8]) -> Vec<u8> {
    match algorithm {
        HashAlgorithm::Sha224 => Sha224::digest(data).to_vec(),
        HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
        HashAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
        HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
    }
}
