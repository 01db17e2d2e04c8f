//! In-memory host stub, identity fixtures, and contract bytecode for tests
//! and harnesses.

pub mod fixtures;

use std::{
    collections::HashMap,
    sync::Mutex,
};

use fabevm_ledger::proto::SerializedIdentity;
use prost::Message;

use crate::{errors::LedgerError, stub::LedgerStub};

/// A [`LedgerStub`] over a heap key/value map.
///
/// Arguments, transaction id, and creator are settable between invocations so
/// one stub can play out a whole scenario against the same fake ledger.
#[derive(Debug, Default)]
pub struct MemoryStub {
    /// The invocation argument vector.
    pub args: Mutex<Vec<Vec<u8>>>,
    /// The current transaction id.
    pub tx_id: Mutex<String>,
    /// The serialized creator identity.
    pub creator: Mutex<Vec<u8>>,
    /// The fake ledger.
    pub kv: Mutex<HashMap<String, Vec<u8>>>,
    /// Events attached by the chaincode, in order.
    pub events: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemoryStub {
    /// Creates a stub with the given creator identity and transaction id.
    pub fn new(creator: Vec<u8>, tx_id: &str) -> Self {
        Self {
            args: Mutex::new(Vec::new()),
            tx_id: Mutex::new(tx_id.to_string()),
            creator: Mutex::new(creator),
            kv: Mutex::new(HashMap::new()),
            events: Mutex::new(Vec::new()),
        }
    }

    /// Replaces the argument vector for the next invocation.
    pub fn set_args(&self, args: Vec<Vec<u8>>) {
        *self.args.lock().unwrap() = args;
    }

    /// Replaces the transaction id for the next invocation.
    pub fn set_tx_id(&self, tx_id: &str) {
        *self.tx_id.lock().unwrap() = tx_id.to_string();
    }

    /// Replaces the creator identity for the next invocation.
    pub fn set_creator(&self, creator: Vec<u8>) {
        *self.creator.lock().unwrap() = creator;
    }

    /// A snapshot of the fake ledger, for before/after comparisons.
    pub fn snapshot(&self) -> HashMap<String, Vec<u8>> {
        self.kv.lock().unwrap().clone()
    }
}

impl LedgerStub for MemoryStub {
    fn args(&self) -> Vec<Vec<u8>> {
        self.args.lock().unwrap().clone()
    }

    fn tx_id(&self) -> String {
        self.tx_id.lock().unwrap().clone()
    }

    fn creator(&self) -> Result<Vec<u8>, LedgerError> {
        Ok(self.creator.lock().unwrap().clone())
    }

    fn get_state(&self, key: &str) -> Result<Vec<u8>, LedgerError> {
        Ok(self.kv.lock().unwrap().get(key).cloned().unwrap_or_default())
    }

    fn put_state(&self, key: &str, value: &[u8]) -> Result<(), LedgerError> {
        self.kv.lock().unwrap().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn del_state(&self, key: &str) -> Result<(), LedgerError> {
        self.kv.lock().unwrap().remove(key);
        Ok(())
    }

    fn set_event(&self, name: &str, payload: &[u8]) -> Result<(), LedgerError> {
        self.events.lock().unwrap().push((name.to_string(), payload.to_vec()));
        Ok(())
    }
}

/// Wraps a PEM certificate in a serialized identity envelope.
pub fn marshal_creator(msp_id: &str, cert: &[u8]) -> Vec<u8> {
    SerializedIdentity { mspid: msp_id.to_string(), id_bytes: cert.to_vec() }.encode_to_vec()
}

/// A user certificate (EC P-256, `peer0`).
pub const USER0_CERT: &str = "-----BEGIN CERTIFICATE-----
MIIB/zCCAaWgAwIBAgIRAKaex32sim4PQR6kDPEPVnwwCgYIKoZIzj0EAwIwaTEL
MAkGA1UEBhMCVVMxEzARBgNVBAgTCkNhbGlmb3JuaWExFjAUBgNVBAcTDVNhbiBG
cmFuY2lzY28xFDASBgNVBAoTC2V4YW1wbGUuY29tMRcwFQYDVQQDEw5jYS5leGFt
cGxlLmNvbTAeFw0xNzA3MjYwNDM1MDJaFw0yNzA3MjQwNDM1MDJaMEoxCzAJBgNV
BAYTAlVTMRMwEQYDVQQIEwpDYWxpZm9ybmlhMRYwFAYDVQQHEw1TYW4gRnJhbmNp
c2NvMQ4wDAYDVQQDEwVwZWVyMDBZMBMGByqGSM49AgEGCCqGSM49AwEHA0IABPzs
BSdIIB0GrKmKWn0N8mMfxWs2s1D6K+xvTvVJ3wUj3znNBxj+k2j2tpPuJUExt61s
KbpP3GF9/crEahpXXRajTTBLMA4GA1UdDwEB/wQEAwIHgDAMBgNVHRMBAf8EAjAA
MCsGA1UdIwQkMCKAIEvLfQX685pz+rh2q5yCA7e0a/a5IGDuJVHRWfp++HThMAoG
CCqGSM49BAMCA0gAMEUCIH5H9W3tsCrti6tsN9UfY1eeTKtExf/abXhfqfVeRChk
AiEA0GxTPOXVHo0gJpMbHc9B73TL5ZfDhujoDyjb8DToWPQ=
-----END CERTIFICATE-----";

/// A second user certificate (EC P-256, `User1@org1`).
pub const USER1_CERT: &str = "-----BEGIN CERTIFICATE-----
MIICGTCCAcCgAwIBAgIRAOdmptMzz5y0A9GOgFLxRNcwCgYIKoZIzj0EAwIwczEL
MAkGA1UEBhMCVVMxEzARBgNVBAgTCkNhbGlmb3JuaWExFjAUBgNVBAcTDVNhbiBG
cmFuY2lzY28xGTAXBgNVBAoTEG9yZzEuZXhhbXBsZS5jb20xHDAaBgNVBAMTE2Nh
Lm9yZzEuZXhhbXBsZS5jb20wHhcNMTgwMjEyMDY0MDMyWhcNMjgwMjEwMDY0MDMy
WjBbMQswCQYDVQQGEwJVUzETMBEGA1UECBMKQ2FsaWZvcm5pYTEWMBQGA1UEBxMN
U2FuIEZyYW5jaXNjbzEfMB0GA1UEAwwWVXNlcjFAb3JnMS5leGFtcGxlLmNvbTBZ
MBMGByqGSM49AgEGCCqGSM49AwEHA0IABEwsU2N6Kqrtl73S7+7/nD/LTfDFVWO4
q3MTtbckd6MH2zTUj9idLoaQ5VNGJVTRRPs+O6bxlvl0Mitu1rcXFoyjTTBLMA4G
A1UdDwEB/wQEAwIHgDAMBgNVHRMBAf8EAjAAMCsGA1UdIwQkMCKAIKtXuAgSGNzS
0Yz91W08FSieahwkOU7pWJvh86pkNuxSMAoGCCqGSM49BAMCA0cAMEQCIDOGUUvv
SgCqSQONblgBtkKuKgN36VgX+jLhZbaqMNAtAiBXiAHbgYdu3UHBVJwdTYxuFTWJ
Vc4foA7mruwjI8sEng==
-----END CERTIFICATE-----";

/// A third user certificate (EC P-256, `User1@org2`).
pub const USER2_CERT: &str = "-----BEGIN CERTIFICATE-----
MIICGDCCAb+gAwIBAgIQMhSPvpu4KGobIvRGEGnZojAKBggqhkjOPQQDAjBzMQsw
CQYDVQQGEwJVUzETMBEGA1UECBMKQ2FsaWZvcm5pYTEWMBQGA1UEBxMNU2FuIEZy
YW5jaXNjbzEZMBcGA1UEChMQb3JnMi5leGFtcGxlLmNvbTEcMBoGA1UEAxMTY2Eu
b3JnMi5leGFtcGxlLmNvbTAeFw0xODAyMTIwNjQwMzJaFw0yODAyMTAwNjQwMzJa
MFsxCzAJBgNVBAYTAlVTMRMwEQYDVQQIEwpDYWxpZm9ybmlhMRYwFAYDVQQHEw1T
YW4gRnJhbmNpc2NvMR8wHQYDVQQDDBZVc2VyMUBvcmcyLmV4YW1wbGUuY29tMFkw
EwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAE6mVSTODH+CUZk7/rU+MtycF610ifj0pT
gXGYgJXLLcWbGAC1/ADE8rgq+zihgStD9rnwk0XMitXvqYbIhR0EEqNNMEswDgYD
VR0PAQH/BAQDAgeAMAwGA1UdEwEB/wQCMAAwKwYDVR0jBCQwIoAg1NNSEgEmJaVF
hk5bEaOs6HQS2PFt/VMeXrBUwIGDSogwCgYIKoZIzj0EAwIDRwAwRAIgY6k7AARJ
yJINhf9ub8QcQiMnrTgD4kmhjh5ey8E7fVACIA/i396+beIk0T0c8loygaCiftyG
H8GZeN2ifTyJzzGo
-----END CERTIFICATE-----";
