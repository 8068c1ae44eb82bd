use std::collections::HashMap;

use super::code::{CodeWord, EncodingTable};
use super::Symbol;
use crate::binary_stream::BitSequence;
use crate::error::Error;

/// Greedy decoder over the inverse codeword map.
///
/// With a prefix-free table the accumulator can match at most one codeword
/// at any point, so emitting on the first exact match is always correct
/// and needs no backtracking.
pub struct Decoder {
    symbols: HashMap<CodeWord, Symbol>,
    max_code_length: usize,
}

impl Decoder {
    /// Builds the inverse map, rejecting tables that are not prefix-free.
    ///
    /// Tables produced by this engine satisfy both checks by construction;
    /// an externally supplied table may not.
    pub fn new(table: &EncodingTable) -> Result<Decoder, Error> {
        let mut symbols = HashMap::with_capacity(table.len());
        for (&symbol, &code) in table.iter() {
            if code.is_empty() {
                return Err(Error::InvalidTable("empty codeword"));
            }
            if symbols.insert(code, symbol).is_some() {
                return Err(Error::InvalidTable("duplicate codeword"));
            }
        }
        for (_, &code) in table.iter() {
            let mut prefix = CodeWord::default();
            for bit in code.iter_bits().take(code.len() - 1) {
                prefix = prefix.push(bit);
                if symbols.contains_key(&prefix) {
                    return Err(Error::InvalidTable("codeword is a prefix of another"));
                }
            }
        }
        Ok(Decoder {
            symbols,
            max_code_length: table.max_code_length(),
        })
    }

    /// Decodes `bits` back into the original symbol sequence.
    ///
    /// Every incoming bit extends the accumulator; an exact table match
    /// emits the symbol and clears it. A leftover fragment once the input
    /// is exhausted means the stream was truncated or corrupted, as does an
    /// accumulator that outgrows the longest codeword without a match.
    pub fn decode(&self, bits: &BitSequence) -> Result<String, Error> {
        let mut decoded = String::new();
        let mut accumulator = CodeWord::default();
        for bit in bits.iter() {
            accumulator = accumulator.push(bit);
            if let Some(&symbol) = self.symbols.get(&accumulator) {
                decoded.push(symbol);
                accumulator = CodeWord::default();
            } else if accumulator.len() >= self.max_code_length {
                // no longer codeword exists, a match can never happen
                return Err(Error::TruncatedStream(accumulator.len()));
            }
        }
        if !accumulator.is_empty() {
            return Err(Error::TruncatedStream(accumulator.len()));
        }
        Ok(decoded)
    }
}

#[cfg(test)]
mod test {
    use super::Decoder;
    use crate::binary_stream::BitSequence;
    use crate::error::Error;
    use crate::huffman::{assign_code_words, CodeWord, EncodingTable, SymbolCodeLength};

    fn small_table() -> EncodingTable {
        // b -> 0, a -> 10, c -> 11
        let lengths = [('b', 1), ('a', 2), ('c', 2)].map(SymbolCodeLength::from);
        assign_code_words(&lengths).unwrap()
    }

    fn bits(pattern: &str) -> BitSequence {
        pattern.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn test_decode_small_alphabet() {
        let decoder = Decoder::new(&small_table()).unwrap();
        let decoded = decoder.decode(&bits("10100001111")).unwrap();
        assert_eq!(decoded, "aabbbcc");
    }

    #[test]
    fn test_decode_empty_input() {
        let decoder = Decoder::new(&small_table()).unwrap();
        assert_eq!(decoder.decode(&BitSequence::new()).unwrap(), "");
    }

    #[test]
    fn test_decode_truncated_stream_fails() {
        let decoder = Decoder::new(&small_table()).unwrap();
        let result = decoder.decode(&bits("1010000111"));
        assert!(
            matches!(result, Err(Error::TruncatedStream(1))),
            "A clipped final codeword must not decode silently"
        );
    }

    #[test]
    fn test_decode_rejects_duplicate_codewords() {
        let table: EncodingTable = [('a', CodeWord::new(0b0, 1)), ('b', CodeWord::new(0b0, 1))]
            .into_iter()
            .collect();
        let result = Decoder::new(&table);
        assert!(matches!(result, Err(Error::InvalidTable(_))));
    }

    #[test]
    fn test_decode_rejects_prefixed_codewords() {
        let table: EncodingTable = [('a', CodeWord::new(0b1, 1)), ('b', CodeWord::new(0b10, 2))]
            .into_iter()
            .collect();
        let result = Decoder::new(&table);
        assert!(matches!(
            result,
            Err(Error::InvalidTable("codeword is a prefix of another"))
        ));
    }

    #[test]
    fn test_decode_unmatchable_fragment_fails_early() {
        // prefix-free but incomplete: "11" matches nothing and never will
        let table: EncodingTable = [('a', CodeWord::new(0b0, 1)), ('b', CodeWord::new(0b10, 2))]
            .into_iter()
            .collect();
        let decoder = Decoder::new(&table).unwrap();
        let result = decoder.decode(&bits("110"));
        assert!(matches!(result, Err(Error::TruncatedStream(_))));
    }
}
