use std::io::Write;

use super::code::EncodingTable;
use crate::binary_stream::{BitSequence, BitWriter};
use crate::error::Error;

/// Replaces every symbol of `text` with its codeword, in input order.
///
/// A single linear pass over the input; each codeword is appended through
/// a `BitWriter` and the exact bit count is carried alongside the packed
/// bytes, so the padding of the final byte never reaches the decoder.
pub fn encode_text(text: &str, table: &EncodingTable) -> Result<BitSequence, Error> {
    let mut packed: Vec<u8> = Vec::new();
    let mut writer = BitWriter::new(&mut packed);
    let mut bit_count = 0;
    for symbol in text.chars() {
        let code = table.get(symbol).ok_or(Error::UnknownSymbol(symbol))?;
        writer
            .write_bits(&code.to_be_bytes(), code.len())
            .map_err(Error::BitWrite)?;
        bit_count += code.len();
    }
    writer.flush().map_err(Error::BitWrite)?;
    Ok(BitSequence::from_parts(packed, bit_count))
}
