use log::debug;

use crate::{CompressionError, CompressionStrategy, Compressed};

#[derive(Default)]
pub struct FileCompressor {
    strategy: Option<Box<dyn CompressionStrategy>>,
}

impl FileCompressor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_strategy<S>(&mut self, strategy: S)
    where
        S: CompressionStrategy + 'static,
    {
        debug!("Switching compression strategy to {}", strategy.name());
        self.strategy = Some(Box::new(strategy));
    }

    pub fn strategy_name(&self) -> Option<&'static str> {
        self.strategy.as_ref().map(|strategy| strategy.name())
    }

    pub fn compress(&self, data: &[u8]) -> Result<Compressed, CompressionError> {
        let strategy = self.strategy()?;
        let result = strategy.compress(data);
        debug!(
            "{}: {} -> {} bytes ({}%)",
            strategy.name(),
            result.original_size,
            result.size,
            result.ratio
        );
        Ok(result)
    }

    pub fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CompressionError> {
        self.strategy()?.decompress(data)
    }

    fn strategy(&self) -> Result<&dyn CompressionStrategy, CompressionError> {
        self.strategy
            .as_deref()
            .ok_or(CompressionError::Unconfigured)
    }
}
