use std::path::Path;
use std::time::Duration;

use sysinfo::{Disks, System};
use tokio::time::sleep;
use tracing::debug;

use crate::error::ProviderError;
use crate::models::ResourceSample;

/// Averaging window for the CPU measurement. A point-in-time CPU percentage
/// is meaningless without an interval, so the sampler reads the counters
/// twice, one second apart — deliberately the slowest call in the service.
pub const CPU_SAMPLE_WINDOW: Duration = Duration::from_secs(1);

/// Sample CPU, memory and disk utilization for the root filesystem.
///
/// Suspends for the full [`CPU_SAMPLE_WINDOW`]. Every call builds its own
/// `System`, so concurrent requests sample independently with no shared
/// state. Fails with [`ProviderError::SamplingUnavailable`] when the OS
/// reports no memory totals or no usable filesystem.
pub async fn sample() -> Result<ResourceSample, ProviderError> {
    let mut sys = System::new();

    // Two refreshes bracketing the window; sysinfo derives usage from the
    // delta between them.
    sys.refresh_cpu_usage();
    sleep(CPU_SAMPLE_WINDOW).await;
    sys.refresh_cpu_usage();
    let cpu_percent = f64::from(sys.global_cpu_info().cpu_usage());

    sys.refresh_memory();
    let total_memory = sys.total_memory();
    if total_memory == 0 {
        return Err(ProviderError::SamplingUnavailable(
            "memory totals not reported by the OS".to_string(),
        ));
    }
    let used_memory = total_memory.saturating_sub(sys.available_memory());
    let memory_percent = used_memory as f64 / total_memory as f64 * 100.0;

    let disk_percent = root_disk_percent()?;

    debug!(
        cpu_percent,
        memory_percent, disk_percent, "Sampled system resources"
    );

    Ok(ResourceSample::clamped(
        cpu_percent,
        memory_percent,
        disk_percent,
    ))
}

/// Used-space percentage of the filesystem mounted at `/`. Containers do
/// not always expose the root mount in the disk list, so the largest
/// visible filesystem stands in when the exact mount is missing.
fn root_disk_percent() -> Result<f64, ProviderError> {
    let disks = Disks::new_with_refreshed_list();

    let root = disks
        .iter()
        .find(|disk| disk.mount_point() == Path::new("/"))
        .or_else(|| disks.iter().max_by_key(|disk| disk.total_space()))
        .ok_or_else(|| {
            ProviderError::SamplingUnavailable("no filesystems visible to the OS".to_string())
        })?;

    let total = root.total_space();
    if total == 0 {
        return Err(ProviderError::SamplingUnavailable(
            "filesystem reports zero capacity".to_string(),
        ));
    }

    let used = total.saturating_sub(root.available_space());
    Ok(used as f64 / total as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_sample_blocks_for_window_and_stays_in_range() {
        let start = Instant::now();
        let sample = sample().await.unwrap();
        assert!(start.elapsed() >= CPU_SAMPLE_WINDOW);

        assert!((0.0..=100.0).contains(&sample.cpu_percent));
        assert!((0.0..=100.0).contains(&sample.memory_percent));
        assert!((0.0..=100.0).contains(&sample.disk_percent));
    }

    #[test]
    fn test_root_disk_percent_in_range_when_available() {
        match root_disk_percent() {
            Ok(percent) => assert!((0.0..=100.0).contains(&percent)),
            // Environments without any visible filesystem are the
            // SamplingUnavailable case, not a test failure.
            Err(ProviderError::SamplingUnavailable(_)) => {}
        }
    }
}
