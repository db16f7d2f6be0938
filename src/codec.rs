//! Compact binary form of a [`Vector`].
//!
//! ```text
//! byte 0      type code ('d')
//! bytes 1..   one native-endian IEEE-754 double per component
//! ```
//!
//! There is no length prefix or version; the arity follows from the buffer size.
//! Byte order is the host's, so buffers exchanged between machines of different
//! endianness must be converted by the caller.
use crate::{vector::Vector, Result, VectorError, COMPONENT_SIZE, TYPE_CODE};
use byteorder::{NativeEndian, ReadBytesExt};
use log::debug;
use std::io::Cursor;

impl Vector {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut octets = Vec::with_capacity(1 + self.len() * COMPONENT_SIZE);
        octets.push(TYPE_CODE);
        for component in self.iter() {
            octets.extend_from_slice(&component.to_ne_bytes());
        }
        octets
    }

    pub fn from_bytes(octets: &[u8]) -> Result<Self> {
        let (&type_code, payload) = octets.split_first().ok_or_else(|| {
            debug!("rejecting empty vector buffer");
            VectorError::CorruptData("buffer is empty, missing type code".to_string())
        })?;

        if type_code != TYPE_CODE {
            debug!("rejecting vector buffer with type code {:#04x}", type_code);
            return Err(VectorError::CorruptData(format!(
                "unsupported type code {:?}, expected {:?}",
                type_code as char, TYPE_CODE as char
            )));
        }

        if payload.len() % COMPONENT_SIZE != 0 {
            debug!("rejecting vector payload of {} bytes", payload.len());
            return Err(VectorError::CorruptData(format!(
                "payload of {} bytes is not a multiple of {}",
                payload.len(),
                COMPONENT_SIZE
            )));
        }

        let mut reader = Cursor::new(payload);
        let mut components = vec![0.0; payload.len() / COMPONENT_SIZE];
        reader
            .read_f64_into::<NativeEndian>(&mut components)
            .map_err(|e| VectorError::CorruptData(format!("Failed to read components: {}", e)))?;

        Ok(Vector::from(components))
    }
}

impl From<&Vector> for Vec<u8> {
    fn from(vector: &Vector) -> Self {
        vector.to_bytes()
    }
}

impl TryFrom<&[u8]> for Vector {
    type Error = VectorError;

    fn try_from(octets: &[u8]) -> Result<Self> {
        Vector::from_bytes(octets)
    }
}
