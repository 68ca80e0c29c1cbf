use std::collections::HashMap;

use osk_mini::traits::KeyboardHost;
use osk_mini::types::{FieldVisual, FocusTarget, KeyLabels};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Editable(bool),
    Visual(FieldVisual),
    Focus(FocusTarget),
    Visible(bool),
    Label(String),
}

/// Records every outbound call and keeps the latest UI state.
#[derive(Debug)]
pub struct MockHost {
    pub calls: Vec<HostCall>,
    pub labels: HashMap<String, KeyLabels>,
    pub visible: bool,
    pub editable: bool,
    pub visual: FieldVisual,
    pub focus: Option<FocusTarget>,
}

impl Default for MockHost {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            labels: HashMap::new(),
            visible: false,
            editable: false,
            visual: FieldVisual::Normal,
            focus: None,
        }
    }
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(&self, key_id: &str) -> &KeyLabels {
        &self.labels[key_id]
    }

    pub fn primary(&self, key_id: &str) -> &str {
        &self.labels[key_id].primary
    }

    pub fn take_calls(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn label_renders(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, HostCall::Label(_)))
            .count()
    }

    pub fn focus_requests(&self) -> Vec<FocusTarget> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Focus(t) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }
}

impl KeyboardHost for MockHost {
    fn set_field_editable(&mut self, editable: bool) {
        self.editable = editable;
        self.calls.push(HostCall::Editable(editable));
    }

    fn set_field_visual(&mut self, visual: FieldVisual) {
        self.visual = visual;
        self.calls.push(HostCall::Visual(visual));
    }

    fn request_focus(&mut self, target: FocusTarget) {
        self.focus = Some(target.clone());
        self.calls.push(HostCall::Focus(target));
    }

    fn set_keyboard_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.calls.push(HostCall::Visible(visible));
    }

    fn render_label(&mut self, key_id: &str, labels: &KeyLabels) {
        self.labels.insert(key_id.to_string(), labels.clone());
        self.calls.push(HostCall::Label(key_id.to_string()));
    }
}
