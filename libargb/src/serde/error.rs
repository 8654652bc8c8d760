use thiserror::Error;

/// Errors raised by the byte codec
#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The value needs more bytes than it was given
    #[error("value {value} does not fit into {bytes} byte(s)")]
    Overflow {
        /// value to encode
        value: u64,
        /// available bytes
        bytes: usize,
    },
    /// More bytes than a `u64` can hold were given to the decoder
    #[error("{bytes} byte(s) do not fit into a 64-bit integer")]
    TooWide {
        /// number of bytes given
        bytes: usize,
    },
    /// Nothing usable as a C identifier is left after sanitizing the name
    #[error("'{0}' cannot be turned into a C identifier")]
    InvalidName(String),
}
