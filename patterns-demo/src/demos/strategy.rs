use log::{info, warn};
use strategies::{
    BalancedCompression, CompressionStrategy, Compressed, FastCompression, FileCompressor,
    MaximumCompression,
};

use crate::{config::app::AppConfig, error::AppError};

pub fn run(config: &AppConfig) -> Result<(), AppError> {
    let data = config.sample_payload();
    let mut compressor = FileCompressor::new();
    info!("File of {} bytes", data.len());

    if let Err(e) = compressor.compress(&data) {
        warn!("Compression refused before a strategy is chosen: {}", e);
    }

    info!("--- Comparing strategies ---");
    compare(&mut compressor, BalancedCompression, &data)?;
    compare(&mut compressor, MaximumCompression, &data)?;
    compare(&mut compressor, FastCompression, &data)?;
    Ok(())
}

fn compare<S>(
    compressor: &mut FileCompressor,
    strategy: S,
    data: &[u8],
) -> Result<Compressed, AppError>
where
    S: CompressionStrategy + 'static,
{
    let name = strategy.name();
    compressor.set_strategy(strategy);
    let result = compressor.compress(data)?;
    if compressor.decompress(&result.data)? != data {
        return Err(AppError::LossyRoundTrip(name));
    }
    info!(
        "📦 {}: {} bytes -> {} bytes ({}%)",
        name, result.original_size, result.size, result.ratio
    );
    Ok(result)
}
