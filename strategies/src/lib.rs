mod compression_error;
mod file_compressor;
mod levels;
mod lzss;

pub use compression_error::CompressionError;
pub use file_compressor::FileCompressor;
pub use levels::{BalancedCompression, FastCompression, MaximumCompression};

pub trait CompressionStrategy {
    fn name(&self) -> &'static str;

    fn compress(&self, data: &[u8]) -> Compressed;

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CompressionError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Compressed {
    pub data: Vec<u8>,
    pub original_size: usize,
    pub size: usize,
    pub ratio: f64,
}

impl Compressed {
    pub fn new(original_size: usize, data: Vec<u8>) -> Self {
        let size = data.len();
        Compressed {
            data,
            original_size,
            size,
            ratio: ratio_percent(original_size, size),
        }
    }
}

pub fn ratio_percent(original_size: usize, compressed_size: usize) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    let saved = (1.0 - compressed_size as f64 / original_size as f64) * 100.0;
    (saved * 100.0).round() / 100.0
}
