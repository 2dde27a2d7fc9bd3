//! Debounced value persistence
//!
//! Binds one UI control to one durable slot in the per-actor store. Change
//! detection is poll-based against a `last_observed` baseline, so the
//! binding does not care how the control was moved (drag, programmatic set,
//! load). The baseline is updated in the same step as every save and load;
//! without that, the poll right after a load would re-detect the loaded
//! value as a user change and write it straight back.
//!
//! A store miss on load writes the control's current value through as the
//! default, so first-session state is persisted exactly like any other.

use crate::scene::{ActorId, Scene};
use crate::store::ActorStore;
use crate::ui::{SliderId, ToggleId, Ui};

fn key_is_blank(key: &str) -> bool {
    key.trim().is_empty()
}

/// Persists one slider (continuous float) value
#[derive(Debug)]
pub struct SliderPersistence {
    /// Unique slot name; blank disables persistence but not the control
    pub key: String,
    pub control: Option<SliderId>,
    /// Minimum change that counts as a real edit
    pub epsilon: f32,
    last_observed: f32,
    inert: bool,
}

impl SliderPersistence {
    pub fn new(key: impl Into<String>, control: Option<SliderId>) -> Self {
        Self {
            key: key.into(),
            control,
            epsilon: crate::consts::VALUE_EPSILON,
            last_observed: 0.0,
            inert: false,
        }
    }

    /// Validated control handle; a missing reference is reported once and
    /// permanently disables the binding.
    fn control_or_report(&mut self, ui: &Ui) -> Option<SliderId> {
        if self.inert {
            return None;
        }
        match self.control {
            Some(id) if ui.slider_value(id).is_some() => Some(id),
            _ => {
                log::error!("slider persistence '{}': no slider assigned", self.key);
                self.inert = true;
                None
            }
        }
    }

    pub fn on_activate(&mut self, ui: &mut Ui, store: &mut ActorStore, scene: &Scene) {
        let Some(control) = self.control_or_report(ui) else {
            return;
        };
        // Baseline from the control itself, so the first detected change is
        // a real edit even if no load ever happens
        self.last_observed = ui.slider_value(control).unwrap_or(0.0);
        if key_is_blank(&self.key) {
            return;
        }
        if let Some(actor) = scene.local_actor() {
            self.load(actor, ui, store);
        }
    }

    /// Local actor's persisted data became available (session restore)
    pub fn on_restore(&mut self, actor: ActorId, ui: &mut Ui, store: &mut ActorStore, scene: &Scene) {
        if !scene.is_local(actor) || key_is_blank(&self.key) {
            return;
        }
        if self.control_or_report(ui).is_some() {
            self.load(actor, ui, store);
        }
    }

    fn load(&mut self, actor: ActorId, ui: &mut Ui, store: &mut ActorStore) {
        let Some(control) = self.control else {
            return;
        };
        match store.try_get_float(actor, &self.key) {
            Some(value) => {
                ui.set_slider(control, value);
                self.last_observed = value;
                log::info!("slider persistence '{}': loaded {value}", self.key);
            }
            None => {
                // First session for this slot: write the default through
                let current = ui.slider_value(control).unwrap_or(0.0);
                log::info!(
                    "slider persistence '{}': no saved data, keeping default {current}",
                    self.key
                );
                self.save(actor, store, current);
                self.last_observed = current;
            }
        }
    }

    /// Once-per-tick change check
    pub fn poll(&mut self, ui: &Ui, store: &mut ActorStore, scene: &Scene) {
        let Some(control) = self.control_or_report(ui) else {
            return;
        };
        let Some(actor) = scene.local_actor() else {
            return;
        };
        let value = ui.slider_value(control).unwrap_or(self.last_observed);
        if (value - self.last_observed).abs() > self.epsilon {
            self.save(actor, store, value);
            self.last_observed = value;
        }
    }

    fn save(&self, actor: ActorId, store: &mut ActorStore, value: f32) {
        if key_is_blank(&self.key) {
            log::warn!("slider persistence: blank key, not saving");
            return;
        }
        store.set_float(actor, &self.key, value);
        log::info!("slider persistence '{}': saved {value}", self.key);
    }
}

/// Persists one toggle (boolean) state
#[derive(Debug)]
pub struct TogglePersistence {
    /// Unique slot name; blank disables persistence but not the control
    pub key: String,
    pub control: Option<ToggleId>,
    last_observed: bool,
    inert: bool,
}

impl TogglePersistence {
    pub fn new(key: impl Into<String>, control: Option<ToggleId>) -> Self {
        Self {
            key: key.into(),
            control,
            last_observed: false,
            inert: false,
        }
    }

    fn control_or_report(&mut self, ui: &Ui) -> Option<ToggleId> {
        if self.inert {
            return None;
        }
        match self.control {
            Some(id) if ui.toggle_is_on(id).is_some() => Some(id),
            _ => {
                log::error!("toggle persistence '{}': no toggle assigned", self.key);
                self.inert = true;
                None
            }
        }
    }

    pub fn on_activate(&mut self, ui: &mut Ui, store: &mut ActorStore, scene: &Scene) {
        let Some(control) = self.control_or_report(ui) else {
            return;
        };
        self.last_observed = ui.toggle_is_on(control).unwrap_or(false);
        if key_is_blank(&self.key) {
            return;
        }
        if let Some(actor) = scene.local_actor() {
            self.load(actor, ui, store);
        }
    }

    pub fn on_restore(&mut self, actor: ActorId, ui: &mut Ui, store: &mut ActorStore, scene: &Scene) {
        if !scene.is_local(actor) || key_is_blank(&self.key) {
            return;
        }
        if self.control_or_report(ui).is_some() {
            self.load(actor, ui, store);
        }
    }

    fn load(&mut self, actor: ActorId, ui: &mut Ui, store: &mut ActorStore) {
        let Some(control) = self.control else {
            return;
        };
        match store.try_get_bool(actor, &self.key) {
            Some(state) => {
                ui.set_toggle(control, state);
                self.last_observed = state;
                log::info!("toggle persistence '{}': loaded {state}", self.key);
            }
            None => {
                let current = ui.toggle_is_on(control).unwrap_or(false);
                log::info!(
                    "toggle persistence '{}': no saved data, keeping default {current}",
                    self.key
                );
                self.save(actor, store, current);
                self.last_observed = current;
            }
        }
    }

    /// Once-per-tick change check (exact comparison, no epsilon)
    pub fn poll(&mut self, ui: &Ui, store: &mut ActorStore, scene: &Scene) {
        let Some(control) = self.control_or_report(ui) else {
            return;
        };
        let Some(actor) = scene.local_actor() else {
            return;
        };
        let state = ui.toggle_is_on(control).unwrap_or(self.last_observed);
        if state != self.last_observed {
            self.save(actor, store, state);
            self.last_observed = state;
        }
    }

    fn save(&self, actor: ActorId, store: &mut ActorStore, state: bool) {
        if key_is_blank(&self.key) {
            log::warn!("toggle persistence: blank key, not saving");
            return;
        }
        store.set_bool(actor, &self.key, state);
        log::info!("toggle persistence '{}': saved {state}", self.key);
    }
}
