use serde::Serialize;
use std::path::Path;
use sysinfo::System;
use utoipa::ToSchema;

const THERMAL_ZONE: &str = "/sys/class/thermal/thermal_zone0/temp";
const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Host statistics, pre-formatted for display.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SystemStats {
    pub hostname: String,
    pub platform: String,
    pub architecture: String,
    pub cpu_temp: String,
    pub cpu_usage: String,
    pub memory_total: String,
    pub memory_used: String,
    pub memory_percent: String,
}

/// Blocks for a short CPU sampling interval; call from a blocking task.
pub fn collect() -> SystemStats {
    let mut sys = System::new();
    sys.refresh_cpu_usage();
    std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
    sys.refresh_cpu_usage();
    sys.refresh_memory();

    let total = sys.total_memory() as f64;
    let used = sys.used_memory() as f64;
    let percent = if total > 0.0 { used / total * 100.0 } else { 0.0 };

    SystemStats {
        hostname: System::host_name().unwrap_or_else(|| "unknown".to_string()),
        platform: System::long_os_version().unwrap_or_else(|| std::env::consts::OS.to_string()),
        architecture: std::env::consts::ARCH.to_string(),
        cpu_temp: format_temperature(read_temperature(Path::new(THERMAL_ZONE))),
        cpu_usage: format!("{:.1}%", sys.global_cpu_usage()),
        memory_total: format!("{:.1}GB", total / GIB),
        memory_used: format!("{:.1}GB", used / GIB),
        memory_percent: format!("{:.1}%", percent),
    }
}

/// Thermal zones report millidegrees Celsius.
fn read_temperature(path: &Path) -> Option<f64> {
    let raw = std::fs::read_to_string(path).ok()?;
    parse_millidegrees(&raw)
}

fn parse_millidegrees(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().map(|m| m / 1000.0)
}

fn format_temperature(celsius: Option<f64>) -> String {
    match celsius {
        Some(c) => format!("{:.1}°C", c),
        None => "N/A".to_string(),
    }
}
