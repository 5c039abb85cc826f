#![allow(dead_code)]

use rand::{SeedableRng, rngs::StdRng};
use time::{Date, macros::date};
use tripcraft_itinerary::Notice;
use tripcraft_planner::{Clipboard, Notifier, Planner};
use url::Url;

pub const START: Date = date!(2026 - 10 - 19);

#[derive(Default)]
pub struct MemoryClipboard {
    pub copied: Vec<String>,
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
        self.copied.push(text.to_owned());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: Vec<Notice>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }
}

pub type TestPlanner = Planner<MemoryClipboard, RecordingNotifier, StdRng>;

pub fn planner() -> anyhow::Result<TestPlanner> {
    Ok(Planner::with_rng(
        Url::parse("http://localhost:8080")?,
        MemoryClipboard::default(),
        RecordingNotifier::default(),
        StdRng::seed_from_u64(3),
    ))
}

/// A planner already showing the planning form.
pub fn planning() -> anyhow::Result<TestPlanner> {
    let mut planner = planner()?;
    planner.start_planning()?;

    Ok(planner)
}
