use huffman_text_codec::huffman::{assign_code_words, count_symbols, Decoder, HuffmanTree};
use huffman_text_codec::{encode, Error};

fn main() -> Result<(), Error> {
    let text = "the quick brown fox jumps over the lazy dog";

    let frequencies = count_symbols(text);
    let tree = HuffmanTree::new(&frequencies)?;
    println!("huffman tree\n{}", tree);

    let table = assign_code_words(&tree.code_lengths())?;
    println!("code table");
    for (symbol, code) in table.iter() {
        println!("{:?} -> {}", symbol, code);
    }

    let encoded = encode(text, &table)?;
    println!("text to encode\n{:?}", text);
    println!("encoded sequence ({} bits)\n{}", encoded.len(), encoded);

    let decoder = Decoder::new(&table)?;
    let decoded = decoder.decode(&encoded)?;
    println!("decoded text\n{:?}", decoded);
    Ok(())
}
