//! Application core: model, events, the update loop, and the view-model.
//!
//! The shell drives this module with [`Event`]s (user taps, tab changes, the
//! animation-settled callback) and renders the [`ViewModel`]. All persistence
//! goes through the KeyValue capability; the core never touches storage
//! directly.

use crux_kv::error::KeyValueError;
use rand::thread_rng;
use serde::Serialize;

use crate::capabilities::Capabilities;
use crate::escalation::{EscalationSession, SpinPrompt};
use crate::menu::{AddOutcome, Category, MenuList, Menus};
use crate::wheel::{self, SpinPlan};
use crate::{AppError, ErrorKind, ToastKind, ToastMessage, SPIN_DURATION_MS};

/// Which tab the user is on. Both wheel tabs share one screen shape; the
/// Manage tab edits both lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Wheel(Category),
    Manage,
}

impl Screen {
    #[must_use]
    pub const fn category(self) -> Option<Category> {
        match self {
            Self::Wheel(category) => Some(category),
            Self::Manage => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wheel(Category::HomeFoods) => "home_foods_wheel",
            Self::Wheel(Category::Restaurants) => "restaurants_wheel",
            Self::Manage => "manage",
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::Wheel(Category::HomeFoods)
    }
}

/// A spin between confirmation and settlement. The label snapshot is taken at
/// confirm time so the outcome cannot shift under a mid-spin list edit.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSpin {
    pub plan: SpinPlan,
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpinOutcome {
    pub index: usize,
    pub label: String,
}

#[derive(Debug, Default)]
pub struct Model {
    pub menus: Menus,
    pub screen: Screen,
    pub session: EscalationSession,
    pub prompt: Option<SpinPrompt>,
    pub active_spin: Option<ActiveSpin>,
    pub result: Option<SpinOutcome>,
    pub active_toast: Option<ToastMessage>,
    pub active_error: Option<AppError>,
}

impl Model {
    #[must_use]
    pub const fn is_spinning(&self) -> bool {
        self.active_spin.is_some()
    }

    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.active_toast = Some(ToastMessage::new(message, kind));
    }

    pub fn set_error(&mut self, error: AppError) {
        self.active_error = Some(error);
    }

    pub fn clear_error(&mut self) {
        self.active_error = None;
    }
}

#[derive(Debug, Clone)]
pub enum Event {
    AppStarted,
    ScreenSelected {
        screen: Screen,
    },

    // List management
    AddItemRequested {
        category: Category,
        label: String,
    },
    RemoveItemRequested {
        category: Category,
        label: String,
    },
    ResetToDefaultsRequested,

    // Spin lifecycle
    SpinRequested,
    SpinConfirmed,
    SpinCancelled,
    SpinSettled {
        landing_angle_deg: f64,
        wheel_rotation_deg: f64,
    },
    ResultDismissed,

    // Capability responses
    ListLoaded {
        category: Category,
        result: Result<Option<Vec<u8>>, KeyValueError>,
    },
    ListPersisted {
        category: Category,
        result: Result<Option<Vec<u8>>, KeyValueError>,
    },

    DismissToast,
    DismissError,
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AppStarted => "app_started",
            Self::ScreenSelected { .. } => "screen_selected",
            Self::AddItemRequested { .. } => "add_item_requested",
            Self::RemoveItemRequested { .. } => "remove_item_requested",
            Self::ResetToDefaultsRequested => "reset_to_defaults_requested",
            Self::SpinRequested => "spin_requested",
            Self::SpinConfirmed => "spin_confirmed",
            Self::SpinCancelled => "spin_cancelled",
            Self::SpinSettled { .. } => "spin_settled",
            Self::ResultDismissed => "result_dismissed",
            Self::ListLoaded { .. } => "list_loaded",
            Self::ListPersisted { .. } => "list_persisted",
            Self::DismissToast => "dismiss_toast",
            Self::DismissError => "dismiss_error",
        }
    }
}

/// Wheel-screen portion of the view-model. Present only on wheel tabs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WheelViewModel {
    pub category: Category,
    pub title: String,
    pub subtitle: String,
    pub labels: Vec<String>,
    pub segment_angle_deg: f64,
    pub segment_colors: Vec<String>,
    pub is_spinning: bool,
    pub spin_target: Option<SpinTarget>,
    pub prompt: Option<SpinPrompt>,
    pub result: Option<SpinOutcome>,
}

/// Where the shell should animate to, and how long it should take.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpinTarget {
    pub wheel_rotation_deg: f64,
    pub landing_angle_deg: f64,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub screen: Screen,
    pub wheel: Option<WheelViewModel>,
    pub home_foods: Vec<String>,
    pub restaurants: Vec<String>,
    pub toast: Option<ToastMessage>,
    pub error: Option<String>,
}

#[derive(Default)]
pub struct App;

impl App {
    fn load_list(category: Category, caps: &Capabilities) {
        caps.key_value
            .get(category.storage_key().to_string(), move |result| {
                Event::ListLoaded { category, result }
            });
    }

    fn persist_list(category: Category, model: &mut Model, caps: &Capabilities) {
        match model.menus.get(category).encode() {
            Ok(bytes) => {
                caps.key_value
                    .set(category.storage_key().to_string(), bytes, move |result| {
                        Event::ListPersisted { category, result }
                    });
            }
            Err(e) => {
                tracing::error!(
                    category = category.storage_key(),
                    error = %e,
                    "failed to encode list for persistence"
                );
                model.set_error(e.into());
            }
        }
    }

    fn handle_list_loaded(
        category: Category,
        result: Result<Option<Vec<u8>>, KeyValueError>,
        model: &mut Model,
        caps: &Capabilities,
    ) {
        match result {
            Ok(Some(bytes)) => match MenuList::decode(&bytes) {
                Ok(list) => {
                    model.menus.replace(category, list);
                }
                Err(e) => {
                    tracing::warn!(
                        category = category.storage_key(),
                        error = %e,
                        "stored list undecodable, falling back to defaults"
                    );
                    model.menus.replace(category, MenuList::defaults(category));
                }
            },
            Ok(None) => {
                // First run for this key: seed the store with the defaults.
                model.menus.replace(category, MenuList::defaults(category));
                Self::persist_list(category, model, caps);
            }
            Err(e) => {
                tracing::warn!(
                    category = category.storage_key(),
                    error = %e,
                    "list read failed, falling back to defaults"
                );
                model.menus.replace(category, MenuList::defaults(category));
            }
        }
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        tracing::debug!(event = event.name(), "update");

        match event {
            Event::AppStarted => {
                for category in Category::ALL {
                    Self::load_list(category, caps);
                }
                caps.render.render();
            }

            Event::ScreenSelected { screen } => {
                tracing::debug!(screen = screen.name(), "screen selected");
                model.screen = screen;
                // A fresh visit forgives prior refusals and abandons any
                // prompt, result, or in-flight spin from the previous screen.
                model.session.reset();
                model.prompt = None;
                model.result = None;
                model.active_spin = None;

                match screen {
                    Screen::Wheel(category) => Self::load_list(category, caps),
                    Screen::Manage => {
                        for category in Category::ALL {
                            Self::load_list(category, caps);
                        }
                    }
                }
                caps.render.render();
            }

            Event::AddItemRequested { category, label } => {
                match model.menus.get_mut(category).add(&label) {
                    Ok(AddOutcome::Added) => {
                        model.show_toast(
                            format!("{} has been added!", label.trim()),
                            ToastKind::Success,
                        );
                        Self::persist_list(category, model, caps);
                    }
                    Ok(AddOutcome::Duplicate) => {
                        model.show_toast(
                            format!("{} is already in the list", label.trim()),
                            ToastKind::Info,
                        );
                    }
                    Err(e) => {
                        model.set_error(
                            AppError::new(ErrorKind::Validation, "Please enter a valid item name")
                                .with_internal(e.to_string()),
                        );
                    }
                }
                caps.render.render();
            }

            Event::RemoveItemRequested { category, label } => {
                if model.menus.get_mut(category).remove(&label) {
                    model.show_toast(format!("{label} has been removed!"), ToastKind::Success);
                }
                // Removing an absent label is still a successful write.
                Self::persist_list(category, model, caps);
                caps.render.render();
            }

            Event::ResetToDefaultsRequested => {
                model.menus.reset_to_defaults();
                for category in Category::ALL {
                    Self::persist_list(category, model, caps);
                }
                model.show_toast("All items have been reset to defaults!", ToastKind::Success);
                caps.render.render();
            }

            Event::SpinRequested => {
                let Some(category) = model.screen.category() else {
                    return;
                };
                if model.is_spinning() {
                    return;
                }

                if model.menus.get(category).is_empty() {
                    model.show_toast(
                        "No items available - add some in the Manage tab first.",
                        ToastKind::Warning,
                    );
                } else {
                    let prompt = model.session.prompt(&mut thread_rng());
                    tracing::debug!(
                        tier = prompt.tier.as_str(),
                        attempts = model.session.attempts(),
                        "spin prompt shown"
                    );
                    model.prompt = Some(prompt);
                }
                caps.render.render();
            }

            Event::SpinConfirmed => {
                if model.prompt.take().is_none() || model.is_spinning() {
                    return;
                }
                let Some(category) = model.screen.category() else {
                    return;
                };

                let labels = model.menus.get(category).labels().to_vec();
                if labels.is_empty() {
                    return;
                }

                model.session.record_spin();
                model.result = None;
                let plan = SpinPlan::draw(&mut thread_rng(), labels.len());
                model.active_spin = Some(ActiveSpin { plan, labels });
                caps.render.render();
            }

            Event::SpinCancelled => {
                model.prompt = None;
                caps.render.render();
            }

            Event::SpinSettled {
                landing_angle_deg,
                wheel_rotation_deg,
            } => {
                let Some(spin) = model.active_spin.take() else {
                    tracing::warn!("spin settled with no spin in flight");
                    return;
                };

                let index =
                    wheel::pick_winner(spin.labels.len(), landing_angle_deg, wheel_rotation_deg);
                match spin.labels.get(index) {
                    Some(label) => {
                        model.result = Some(SpinOutcome {
                            index,
                            label: label.clone(),
                        });
                    }
                    None => {
                        model.set_error(AppError::new(
                            ErrorKind::Internal,
                            "Winning index out of range",
                        ));
                    }
                }
                caps.render.render();
            }

            Event::ResultDismissed => {
                model.result = None;
                caps.render.render();
            }

            Event::ListLoaded { category, result } => {
                Self::handle_list_loaded(category, result, model, caps);
                caps.render.render();
            }

            Event::ListPersisted { category, result } => {
                match result {
                    Ok(_) => {
                        tracing::debug!(category = category.storage_key(), "list persisted");
                    }
                    Err(e) => {
                        tracing::warn!(
                            category = category.storage_key(),
                            error = %e,
                            "list write failed"
                        );
                        model.show_toast(
                            "Your changes could not be saved. Please try again.",
                            ToastKind::Error,
                        );
                        // Re-read so the in-memory list converges with
                        // whatever the store actually holds.
                        Self::load_list(category, caps);
                    }
                }
                caps.render.render();
            }

            Event::DismissToast => {
                model.active_toast = None;
                caps.render.render();
            }

            Event::DismissError => {
                model.clear_error();
                caps.render.render();
            }
        }
    }

    fn view(&self, model: &Model) -> ViewModel {
        let wheel = model.screen.category().map(|category| {
            let list = model.menus.get(category);
            WheelViewModel {
                category,
                title: category.screen_title().to_string(),
                subtitle: category.screen_subtitle().to_string(),
                labels: list.labels().to_vec(),
                segment_angle_deg: wheel::segment_angle_deg(list.len()),
                segment_colors: (0..list.len())
                    .map(|i| wheel::segment_color(i).to_string())
                    .collect(),
                is_spinning: model.is_spinning(),
                spin_target: model.active_spin.as_ref().map(|spin| SpinTarget {
                    wheel_rotation_deg: spin.plan.wheel_rotation_deg,
                    landing_angle_deg: spin.plan.landing_angle_deg,
                    duration_ms: SPIN_DURATION_MS,
                }),
                prompt: model.prompt.clone(),
                result: model.result.clone(),
            }
        });

        ViewModel {
            screen: model.screen,
            wheel,
            home_foods: model.menus.get(Category::HomeFoods).labels().to_vec(),
            restaurants: model.menus.get(Category::Restaurants).labels().to_vec(),
            toast: model.active_toast.clone(),
            error: model.active_error.as_ref().map(AppError::user_facing_message),
        }
    }
}
