use strum::{AsRefStr, Display};
use time::Date;
use tripcraft_itinerary::{Notice, edit_notice, removal_notice, remove_activity, share_notice};
use tripcraft_shared::{itinerary::DayPlan, trip::TripPreferences};
use url::Url;

use crate::form::{self, FormUpdate};

#[derive(Display, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Step {
    #[default]
    Welcome,
    Planning,
    Itinerary,
}

/// Whole planner state. Transitions never mutate it in place, see [`reduce`].
#[derive(Default, Clone, Debug, PartialEq)]
pub struct PlannerState {
    pub step: Step,
    /// Preferences being edited in the planning form.
    pub form: TripPreferences,
    /// Preferences of the last accepted submission.
    pub trip: Option<TripPreferences>,
    pub itinerary: Vec<DayPlan>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    StartPlanning,
    BackToHome,
    UpdateField(FormUpdate),
    ToggleInterest { label: String, checked: bool },
    Submit { today: Date },
    BackToPlanning,
    RemoveActivity { day_index: usize, activity_id: String },
    EditActivity { day_index: usize, activity_id: String },
    Share { link: Url },
}

/// Side effects a transition asks the surrounding UI to perform.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Notify(Notice),
    CopyToClipboard(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub state: PlannerState,
    pub effects: Vec<Effect>,
}

impl Action {
    /// Whether the screen shown at `step` offers this action.
    pub fn allowed_on(&self, step: Step) -> bool {
        match self {
            Action::StartPlanning => step == Step::Welcome,
            Action::BackToHome => step != Step::Welcome,
            Action::UpdateField(_) | Action::ToggleInterest { .. } | Action::Submit { .. } => {
                step == Step::Planning
            }
            Action::BackToPlanning
            | Action::RemoveActivity { .. }
            | Action::EditActivity { .. }
            | Action::Share { .. } => step == Step::Itinerary,
        }
    }
}

impl Transition {
    fn to(state: PlannerState) -> Self {
        Self {
            state,
            effects: vec![],
        }
    }

    fn effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Computes the state that follows `action`.
///
/// Only a rejected submission fails; the caller keeps `state` untouched in
/// that case. Actions that belong to another step than the current one are
/// ignored. Leaving the itinerary drops it together with the form.
pub fn reduce(state: &PlannerState, action: Action) -> tripcraft_shared::Result<Transition> {
    let next = state.clone();

    if !action.allowed_on(next.step) {
        tracing::debug!(step = %next.step, ?action, "action ignored on this step");
        return Ok(Transition::to(next));
    }

    let transition = match action {
        Action::StartPlanning => Transition::to(PlannerState {
            step: Step::Planning,
            ..next
        }),
        Action::BackToHome => Transition::to(PlannerState::default()),
        Action::BackToPlanning => Transition::to(PlannerState {
            step: Step::Planning,
            ..PlannerState::default()
        }),
        Action::UpdateField(update) => Transition::to(PlannerState {
            form: form::apply(next.form, update),
            ..next
        }),
        Action::ToggleInterest { label, checked } => Transition::to(PlannerState {
            form: form::toggle_interest(next.form, label, checked),
            ..next
        }),
        Action::Submit { today } => {
            form::validate_submission(&next.form)?;

            let itinerary = tripcraft_itinerary::generate(&next.form, today);
            tracing::info!(
                location = %next.form.location,
                days = itinerary.len(),
                "itinerary created"
            );

            Transition::to(PlannerState {
                step: Step::Itinerary,
                trip: Some(next.form.clone()),
                itinerary,
                ..next
            })
        }
        Action::RemoveActivity {
            day_index,
            activity_id,
        } => Transition::to(PlannerState {
            itinerary: remove_activity(next.itinerary, day_index, &activity_id),
            ..next
        })
        .effect(Effect::Notify(removal_notice())),
        Action::EditActivity {
            day_index,
            activity_id,
        } => {
            Transition::to(next).effect(Effect::Notify(edit_notice(day_index, &activity_id)))
        }
        Action::Share { link } => Transition::to(next)
            .effect(Effect::CopyToClipboard(link.to_string()))
            .effect(Effect::Notify(share_notice())),
    };

    Ok(transition)
}
