//! Deterministic account addresses for transaction creators.

use alloy_primitives::Address;
use fabevm_ledger::proto::SerializedIdentity;
use prost::Message;
use sha3::{Digest, Sha3_256};

use crate::errors::AddressError;

/// Derives the 20-byte account address of a serialized creator identity.
///
/// The identity envelope carries an MSP id and a PEM-encoded X.509
/// certificate. The address is the low 20 bytes of the SHA3-256 digest of the
/// certificate's DER-encoded subject public key. Hashing the canonical DER
/// form (not the PEM, not raw curve points) is what keeps the derivation
/// stable across the network.
pub fn identity_to_address(creator: &[u8]) -> Result<Address, AddressError> {
    let identity = SerializedIdentity::decode(creator)?;

    let (_, pem) = x509_parser::pem::parse_x509_pem(&identity.id_bytes)
        .map_err(|_| AddressError::NoPemData)?;
    let certificate = pem
        .parse_x509()
        .map_err(|err| AddressError::CertParse(err.to_string()))?;

    let spki = certificate.public_key().raw;
    if spki.is_empty() {
        return Err(AddressError::PubKeyMarshal);
    }

    let digest = Sha3_256::digest(spki);
    Ok(Address::from_slice(&digest[12..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{marshal_creator, USER0_CERT, USER1_CERT};

    #[test]
    fn derivation_is_deterministic() {
        let creator = marshal_creator("TestOrg", USER0_CERT.as_bytes());
        let first = identity_to_address(&creator).unwrap();
        let second = identity_to_address(&creator).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn distinct_certificates_yield_distinct_addresses() {
        let user0 = marshal_creator("TestOrg", USER0_CERT.as_bytes());
        let user1 = marshal_creator("TestOrg", USER1_CERT.as_bytes());
        assert_ne!(
            identity_to_address(&user0).unwrap(),
            identity_to_address(&user1).unwrap()
        );
    }

    #[test]
    fn msp_id_does_not_affect_the_address() {
        let org_a = marshal_creator("OrgA", USER0_CERT.as_bytes());
        let org_b = marshal_creator("OrgB", USER0_CERT.as_bytes());
        assert_eq!(
            identity_to_address(&org_a).unwrap(),
            identity_to_address(&org_b).unwrap()
        );
    }

    #[test]
    fn missing_pem_is_rejected() {
        let creator = marshal_creator("TestOrg", b"definitely not a certificate");
        assert!(matches!(identity_to_address(&creator), Err(AddressError::NoPemData)));
    }

    #[test]
    fn non_certificate_pem_is_rejected() {
        let pem = "-----BEGIN CERTIFICATE-----\nAAAA\n-----END CERTIFICATE-----\n";
        let creator = marshal_creator("TestOrg", pem.as_bytes());
        assert!(matches!(identity_to_address(&creator), Err(AddressError::CertParse(_))));
    }
}
