/// Megabytes rounded to two decimals, e.g. `"12.5MB"`.
pub fn format_megabytes(bytes: usize) -> String {
    let mb = (bytes as f64 / 1024.0 / 1024.0 * 100.0).round() / 100.0;
    format!("{mb}MB")
}

/// Resident and virtual memory of the process in bytes, zero when the
/// platform does not report them.
pub fn memory_usage() -> (usize, usize) {
    memory_stats::memory_stats()
        .map(|usage| (usage.physical_mem, usage.virtual_mem))
        .unwrap_or((0, 0))
}

/// IANA name of the host timezone.
pub fn timezone() -> String {
    iana_time_zone::get_timezone().unwrap_or_else(|e| {
        tracing::debug!("Could not resolve timezone: {}", e);
        "UTC".to_string()
    })
}
