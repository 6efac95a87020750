use crate::{
    lzss::{decode, Lzss},
    CompressionError, CompressionStrategy, Compressed,
};

const FAST: Lzss = Lzss::new(1024, 1);
const BALANCED: Lzss = Lzss::new(8192, 16);
const MAXIMUM: Lzss = Lzss::new(32768, 256);

#[derive(Debug, Default, Clone, Copy)]
pub struct BalancedCompression;

#[derive(Debug, Default, Clone, Copy)]
pub struct MaximumCompression;

#[derive(Debug, Default, Clone, Copy)]
pub struct FastCompression;

impl CompressionStrategy for BalancedCompression {
    fn name(&self) -> &'static str {
        "balanced"
    }

    fn compress(&self, data: &[u8]) -> Compressed {
        Compressed::new(data.len(), BALANCED.encode(data))
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CompressionError> {
        decode(data)
    }
}

impl CompressionStrategy for MaximumCompression {
    fn name(&self) -> &'static str {
        "maximum"
    }

    fn compress(&self, data: &[u8]) -> Compressed {
        Compressed::new(data.len(), MAXIMUM.encode(data))
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CompressionError> {
        decode(data)
    }
}

impl CompressionStrategy for FastCompression {
    fn name(&self) -> &'static str {
        "fast"
    }

    fn compress(&self, data: &[u8]) -> Compressed {
        Compressed::new(data.len(), FAST.encode(data))
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CompressionError> {
        decode(data)
    }
}

#[cfg(test)]
mod tests {
    use common_test::{get_seeded_rng, repeated_text, sample_payloads};

    use crate::{ratio_percent, CompressionStrategy};

    use super::{BalancedCompression, FastCompression, MaximumCompression};

    fn all_strategies() -> Vec<Box<dyn CompressionStrategy>> {
        vec![
            Box::new(BalancedCompression),
            Box::new(MaximumCompression),
            Box::new(FastCompression),
        ]
    }

    #[test]
    fn test_strategies_round_trip() {
        let mut rng = get_seeded_rng().unwrap();
        let payloads = sample_payloads(&mut rng);
        for strategy in all_strategies() {
            for payload in &payloads {
                let compressed = strategy.compress(payload);
                assert_eq!(
                    Ok(payload.clone()),
                    strategy.decompress(&compressed.data),
                    "{} should be lossless",
                    strategy.name()
                );
            }
        }
    }

    #[test]
    fn test_strategies_report_consistent_sizes() {
        // Given
        let data = repeated_text("Lorem ipsum dolor sit amet. ", 100);

        for strategy in all_strategies() {
            // When
            let result = strategy.compress(&data);

            // Then
            assert_eq!(data.len(), result.original_size);
            assert_eq!(result.data.len(), result.size);
            assert_eq!(ratio_percent(result.original_size, result.size), result.ratio);
            assert!(result.ratio > 90.0, "{} ratio {}", strategy.name(), result.ratio);
        }
    }

    #[test]
    fn test_streams_are_interchangeable() {
        let data = repeated_text("abcabcabd", 40);
        let compressed = FastCompression.compress(&data);
        assert_eq!(Ok(data), MaximumCompression.decompress(&compressed.data));
    }
}
