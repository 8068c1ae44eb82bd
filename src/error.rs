use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    EmptyInput,
    UnknownSymbol(char),
    TruncatedStream(usize),
    InvalidTable(&'static str),
    BitWrite(std::io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => {
                write!(f, "Cannot derive a code table from an empty input")
            }
            Self::UnknownSymbol(symbol) => {
                write!(f, "Symbol {:?} has no assigned codeword", symbol)
            }
            Self::TruncatedStream(remaining_bits) => {
                write!(
                    f,
                    "Bit stream ended with {} unmatched trailing bits",
                    remaining_bits
                )
            }
            Self::InvalidTable(reason) => {
                write!(f, "Encoding table is not usable: {}", reason)
            }
            Self::BitWrite(error) => {
                write!(f, "Failed to write encoded bits: {}", error)
            }
        }
    }
}

impl std::error::Error for Error {}
