use rand::{Rng, rngs::ThreadRng};
use time::Date;
use tripcraft_itinerary::{Notice, Summary, share_link};
use tripcraft_shared::itinerary::DayPlan;
use url::Url;

use crate::form::{self, FormField, FormUpdate};
use crate::state::{Action, Effect, PlannerState, Step, reduce};

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()>;
}

pub trait Notifier {
    fn notify(&mut self, notice: &Notice);
}

/// Owns the planner state and hands effects to the UI collaborators.
pub struct Planner<C, N, R = ThreadRng> {
    state: PlannerState,
    origin: Url,
    clipboard: C,
    notifier: N,
    rng: R,
}

impl<C: Clipboard, N: Notifier> Planner<C, N> {
    pub fn new(origin: Url, clipboard: C, notifier: N) -> Self {
        Self::with_rng(origin, clipboard, notifier, rand::rng())
    }
}

impl<C: Clipboard, N: Notifier, R: Rng> Planner<C, N, R> {
    pub fn with_rng(origin: Url, clipboard: C, notifier: N, rng: R) -> Self {
        Self {
            state: PlannerState::default(),
            origin,
            clipboard,
            notifier,
            rng,
        }
    }

    pub fn state(&self) -> &PlannerState {
        &self.state
    }

    pub fn step(&self) -> Step {
        self.state.step
    }

    pub fn itinerary(&self) -> &[DayPlan] {
        &self.state.itinerary
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn can_submit(&self) -> bool {
        form::can_submit(&self.state.form)
    }

    pub fn summary(&self) -> tripcraft_shared::Result<Summary> {
        Summary::of(&self.state.itinerary)
    }

    pub fn dispatch(&mut self, action: Action) -> tripcraft_shared::Result<()> {
        let transition = reduce(&self.state, action)?;
        self.state = transition.state;

        for effect in transition.effects {
            match effect {
                Effect::Notify(notice) => self.notifier.notify(&notice),
                Effect::CopyToClipboard(text) => self.clipboard.write_text(&text)?,
            }
        }

        Ok(())
    }

    pub fn start_planning(&mut self) -> tripcraft_shared::Result<()> {
        self.dispatch(Action::StartPlanning)
    }

    pub fn back_to_home(&mut self) -> tripcraft_shared::Result<()> {
        self.dispatch(Action::BackToHome)
    }

    pub fn update(&mut self, update: FormUpdate) -> tripcraft_shared::Result<()> {
        self.dispatch(Action::UpdateField(update))
    }

    pub fn update_raw(&mut self, field: FormField, value: &str) -> tripcraft_shared::Result<()> {
        self.update(FormUpdate::from_raw(field, value))
    }

    pub fn toggle_interest(
        &mut self,
        label: impl Into<String>,
        checked: bool,
    ) -> tripcraft_shared::Result<()> {
        self.dispatch(Action::ToggleInterest {
            label: label.into(),
            checked,
        })
    }

    pub fn submit(&mut self) -> tripcraft_shared::Result<()> {
        self.submit_on(tripcraft_shared::today())
    }

    pub fn submit_on(&mut self, today: Date) -> tripcraft_shared::Result<()> {
        self.dispatch(Action::Submit { today })
    }

    pub fn back_to_planning(&mut self) -> tripcraft_shared::Result<()> {
        self.dispatch(Action::BackToPlanning)
    }

    pub fn remove_activity(
        &mut self,
        day_index: usize,
        activity_id: impl Into<String>,
    ) -> tripcraft_shared::Result<()> {
        self.dispatch(Action::RemoveActivity {
            day_index,
            activity_id: activity_id.into(),
        })
    }

    pub fn edit_activity(
        &mut self,
        day_index: usize,
        activity_id: impl Into<String>,
    ) -> tripcraft_shared::Result<()> {
        self.dispatch(Action::EditActivity {
            day_index,
            activity_id: activity_id.into(),
        })
    }

    /// Copies a freshly fabricated link and returns it, or `None` when no
    /// itinerary is shown.
    pub fn share(&mut self) -> tripcraft_shared::Result<Option<Url>> {
        if self.state.step != Step::Itinerary {
            return Ok(None);
        }

        let link = share_link(&self.origin, &mut self.rng)?;
        self.dispatch(Action::Share { link: link.clone() })?;

        Ok(Some(link))
    }
}
