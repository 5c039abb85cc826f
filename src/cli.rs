mod catalog;
mod options;
mod plan;
mod render;

pub use catalog::*;
pub use options::*;
pub use plan::*;
pub use render::*;

use tripcraft_itinerary::Notice;
use tripcraft_planner::{Clipboard, Notifier};

/// A terminal has no clipboard, so copied text is printed instead.
///
/// With `echo` off the text is only kept, for output that embeds it.
#[derive(Default)]
pub struct TerminalClipboard {
    pub echo: bool,
    pub last: Option<String>,
}

impl Clipboard for TerminalClipboard {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
        if self.echo {
            println!("{text}");
        }
        self.last = Some(text.to_owned());

        Ok(())
    }
}

pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&mut self, notice: &Notice) {
        tracing::info!(title = %notice.title, "{}", notice.description);
    }
}
