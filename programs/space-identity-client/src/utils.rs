use anchor_lang::prelude::*;

use crate::error::ClientError;

/// Concatenate byte segments into one buffer, in order.
pub fn concat_bytes(segments: &[&[u8]]) -> Vec<u8> {
    let len = segments.iter().map(|s| s.len()).sum();
    let mut out = Vec::with_capacity(len);
    for segment in segments {
        out.extend_from_slice(segment);
    }
    out
}

/// Coerce a caller-supplied slice into a `[u8; 32]` field.
/// Fails with `InvalidArrayLength` unless the slice is exactly 32 bytes.
pub fn array32(bytes: &[u8]) -> Result<[u8; 32]> {
    <[u8; 32]>::try_from(bytes).map_err(|_| error!(ClientError::InvalidArrayLength))
}

#[cfg(test)]
mod tests {
    use anchor_lang::error::Error;

    use super::*;

    #[test]
    fn test_concat_bytes() {
        assert_eq!(concat_bytes(&[]), Vec::<u8>::new());
        assert_eq!(concat_bytes(&[b"ab", b"", &[0xff], b"cd"]), b"ab\xffcd".to_vec());
    }

    #[test]
    fn test_array32_accepts_exact_length() {
        let bytes = [7u8; 32];
        assert_eq!(array32(&bytes).unwrap(), bytes);
    }

    #[test]
    fn test_array32_rejects_other_lengths() {
        for len in [0usize, 31, 33, 64] {
            let bytes = vec![1u8; len];
            let err = array32(&bytes).unwrap_err();
            assert_eq!(err, Error::from(ClientError::InvalidArrayLength));
        }
    }
}
