pub use error::Error;

use binary_stream::BitSequence;
use huffman::{assign_code_words, count_symbols, Decoder, EncodingTable, HuffmanTree};

pub mod binary_stream;
mod error;
pub mod huffman;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

/// Derives the canonical prefix-free code table for `text`.
///
/// The table is built once per input: symbol frequencies, greedy tree
/// merge, leaf depths, canonical assignment. Fails with
/// `Error::EmptyInput` when there are no symbols to derive codes from.
pub fn build_encoding_table(text: &str) -> Result<EncodingTable> {
    let frequencies = count_symbols(text);
    let tree = HuffmanTree::new(&frequencies)?;
    let table = assign_code_words(&tree.code_lengths())?;
    log::debug!(
        "derived {} codewords, longest {} bits",
        table.len(),
        table.max_code_length()
    );
    Ok(table)
}

/// Encodes `text` with the codewords of `table`.
pub fn encode(text: &str, table: &EncodingTable) -> Result<BitSequence> {
    huffman::encode_text(text, table)
}

/// Decodes `bits` back into the text it was encoded from.
pub fn decode(bits: &BitSequence, table: &EncodingTable) -> Result<String> {
    let decoder = Decoder::new(table)?;
    decoder.decode(bits)
}
