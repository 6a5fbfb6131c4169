//! Compute-device selection for the sentence encoder.

use candle_core::Device;

/// Picks a device for the enabled backend features, falling back to CPU.
/// GPU probing never fails the caller; an unavailable backend is logged
/// and skipped.
pub fn select_device() -> Device {
    #[cfg(feature = "metal")]
    match Device::new_metal(0) {
        Ok(device) => {
            tracing::info!("Sentence encoder on Metal");
            return device;
        }
        Err(e) => tracing::warn!(error = %e, "Metal unavailable, trying next backend"),
    }

    #[cfg(feature = "cuda")]
    match Device::new_cuda(0) {
        Ok(device) => {
            tracing::info!("Sentence encoder on CUDA");
            return device;
        }
        Err(e) => tracing::warn!(error = %e, "CUDA unavailable, trying next backend"),
    }

    tracing::debug!("Sentence encoder on CPU");
    Device::Cpu
}
