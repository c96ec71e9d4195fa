//! Home page: current system snapshot

use async_trait::async_trait;
use sysprobe_domain::constants::ROUTE_INTRODUCTION_PATH;
use sysprobe_domain::error::Result;

use super::{Page, PageContext};
use crate::constants::APP_TITLE;
use crate::format::{format_bytes, format_percent};

/// Landing page showing OS, CPU and memory figures
#[derive(Debug, Clone, Copy, Default)]
pub struct HomePage;

#[async_trait]
impl Page for HomePage {
    fn title(&self) -> &'static str {
        "Home"
    }

    async fn render(&self, ctx: &PageContext) -> Result<String> {
        let info = ctx.bridge.get_system_info().await?;
        let ui = &ctx.components;

        let memory = format!(
            "{} / {} ({})",
            format_bytes(info.used_memory),
            format_bytes(info.total_memory),
            format_percent(info.memory_usage_percent())
        );
        let cpu = format!(
            "{} ({} per core)",
            format_percent(f64::from(info.cpu_usage)),
            format_percent(f64::from(info.average_cpu_usage()))
        );

        let mut out = ui.heading(APP_TITLE);
        out.push_str(&ui.field("Operating system", &info.os));
        out.push_str(&ui.field("CPU cores", &info.cpu_cores.to_string()));
        out.push_str(&ui.field("CPU usage", &cpu));
        out.push_str(&ui.field("Memory", &memory));
        out.push('\n');
        out.push_str(&ui.paragraph(&format!(
            "Open {ROUTE_INTRODUCTION_PATH} to learn what each disk measurement means."
        )));
        Ok(out)
    }
}
