//! UI widget handles
//!
//! Sliders (continuous) and toggles (boolean) exposing a current value with
//! external assignment. Rendering and input belong to the host; behaviors
//! only read and write values through the handles.

/// Handle to a slider widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SliderId(u32);

/// Handle to a toggle widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToggleId(u32);

#[derive(Debug, Clone)]
struct Slider {
    value: f32,
}

#[derive(Debug, Clone)]
struct Toggle {
    is_on: bool,
}

/// The widget registry for one panel/session
#[derive(Debug, Default)]
pub struct Ui {
    sliders: Vec<Slider>,
    toggles: Vec<Toggle>,
}

impl Ui {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_slider(&mut self, initial: f32) -> SliderId {
        let id = SliderId(self.sliders.len() as u32);
        self.sliders.push(Slider { value: initial });
        id
    }

    pub fn slider_value(&self, id: SliderId) -> Option<f32> {
        self.sliders.get(id.0 as usize).map(|s| s.value)
    }

    /// Assign a slider's value. Missing handles are ignored.
    pub fn set_slider(&mut self, id: SliderId, value: f32) {
        if let Some(slider) = self.sliders.get_mut(id.0 as usize) {
            slider.value = value;
        }
    }

    pub fn add_toggle(&mut self, initial: bool) -> ToggleId {
        let id = ToggleId(self.toggles.len() as u32);
        self.toggles.push(Toggle { is_on: initial });
        id
    }

    pub fn toggle_is_on(&self, id: ToggleId) -> Option<bool> {
        self.toggles.get(id.0 as usize).map(|t| t.is_on)
    }

    /// Assign a toggle's state. Missing handles are ignored.
    pub fn set_toggle(&mut self, id: ToggleId, is_on: bool) {
        if let Some(toggle) = self.toggles.get_mut(id.0 as usize) {
            toggle.is_on = is_on;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_assignment() {
        let mut ui = Ui::new();
        let s = ui.add_slider(0.5);
        assert_eq!(ui.slider_value(s), Some(0.5));
        ui.set_slider(s, 0.9);
        assert_eq!(ui.slider_value(s), Some(0.9));
    }

    #[test]
    fn test_toggle_assignment() {
        let mut ui = Ui::new();
        let t = ui.add_toggle(false);
        assert_eq!(ui.toggle_is_on(t), Some(false));
        ui.set_toggle(t, true);
        assert_eq!(ui.toggle_is_on(t), Some(true));
    }
}
