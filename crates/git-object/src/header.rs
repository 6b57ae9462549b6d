use crate::{ObjectError, ObjectType};

/// Parse an object header from raw bytes.
///
/// The header format is `"<type>\0"` — unlike git, it carries no length
/// field; the payload runs to the end of the stored bytes. Returns
/// `(type, header_length)` where `header_length` includes the null
/// terminator.
pub fn parse_header(data: &[u8]) -> Result<(ObjectType, usize), ObjectError> {
    let null_pos = data
        .iter()
        .position(|&b| b == 0)
        .ok_or_else(|| ObjectError::InvalidHeader("missing null terminator".into()))?;

    let obj_type = ObjectType::from_bytes(&data[..null_pos])?;
    Ok((obj_type, null_pos + 1))
}

/// Write an object header: `"<type>\0"`.
pub fn write_header(obj_type: ObjectType) -> Vec<u8> {
    let mut out = obj_type.as_bytes().to_vec();
    out.push(0);
    out
}
