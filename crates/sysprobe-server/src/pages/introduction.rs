//! Introduction page

use async_trait::async_trait;
use sysprobe_domain::error::Result;

use super::{Page, PageContext};

const SECTIONS: [(&str, &str); 4] = [
    (
        "4K read speed",
        "Writes a batch of small random files (1-4 KiB) into a scratch directory, then reads \
         randomly chosen ones back. Reported in bytes per second.",
    ),
    (
        "4K write speed",
        "Writes the same kind of batch, reading another file between writes so the disk has \
         to seek. Reported in bytes per second.",
    ),
    (
        "Read delay",
        "Time to open a file and read its first byte. Reported in milliseconds.",
    ),
    (
        "Write delay",
        "Time to write a single byte to a fresh probe file. Reported in milliseconds.",
    ),
];

/// Static description of the available measurements
#[derive(Debug, Clone, Copy, Default)]
pub struct IntroductionPage;

#[async_trait]
impl Page for IntroductionPage {
    fn title(&self) -> &'static str {
        "Introduction"
    }

    async fn render(&self, ctx: &PageContext) -> Result<String> {
        let ui = &ctx.components;
        let mut out = ui.heading("Introduction");
        out.push_str(&ui.paragraph(
            "Sysprobe reports a snapshot of the machine and measures how quickly a disk \
             handles small files. Scratch files are removed after every run.",
        ));
        for (title, text) in SECTIONS {
            out.push('\n');
            out.push_str(&ui.subheading(title));
            out.push_str(&ui.paragraph(text));
        }
        Ok(out)
    }
}
