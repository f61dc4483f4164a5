//! Capability set for the meal-roulette core.
//!
//! Two effects cover everything this app needs from its shell: the built-in
//! Render capability to request view updates, and the KeyValue capability
//! backing the persisted category lists. The shell services KeyValue
//! requests against platform storage (UserDefaults / SharedPreferences /
//! localStorage).

pub use crux_core::render::Render;
pub use crux_kv::KeyValue;

use crate::app::{App, Event};

pub type AppKv = KeyValue<Event>;
pub type AppRender = Render<Event>;

#[derive(crux_core::macros::Effect)]
pub struct Capabilities {
    pub key_value: KeyValue<Event>,
    pub render: Render<Event>,
}
