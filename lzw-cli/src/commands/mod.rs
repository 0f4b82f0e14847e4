//! Command implementations for the LZW codec CLI.

pub mod compress;
pub mod decompress;
pub mod roundtrip;

pub use compress::cmd_compress;
pub use decompress::cmd_decompress;
pub use roundtrip::cmd_roundtrip;
