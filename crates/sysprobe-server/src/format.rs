//! Human-readable formatting of measurement values

const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

/// Format a byte count with binary units, e.g. `1.5 GiB`
pub fn format_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}

/// Format a throughput, e.g. `12.3 MiB/s`
pub fn format_throughput(bytes_per_sec: u64) -> String {
    format!("{}/s", format_bytes(bytes_per_sec))
}

/// Format a latency given in milliseconds, e.g. `0.042 ms`
pub fn format_latency(millis: f64) -> String {
    format!("{millis:.3} ms")
}

/// Format a percentage, e.g. `37.5 %`
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1} %")
}
