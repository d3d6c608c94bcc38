use bevy::prelude::*;

use crate::engine::layout::objects::ObjectKind;

/// Variants of the contextual control panel. Shelves and columns share
/// one variant; walls get their own with texture controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Wall,
    Object,
}

impl PanelKind {
    /// Panel variant shown for an object category.
    pub fn of(kind: ObjectKind) -> Self {
        match kind {
            ObjectKind::Wall => Self::Wall,
            ObjectKind::Shelf | ObjectKind::Column => Self::Object,
        }
    }
}

/// Actions a control panel can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Quit,
    Delete,
    Move,
    Clone,
    Edit,
    OpenTexturePicker,
    ApplyTexture,
}

impl PanelAction {
    /// Attaches the payload an action carries on the wire. Applying a
    /// texture needs the picked key; everything else travels bare.
    pub fn to_control_action(self, texture_key: Option<&str>) -> Option<ControlAction> {
        match self {
            Self::Quit => Some(ControlAction::Quit),
            Self::Delete => Some(ControlAction::Delete),
            Self::Move => Some(ControlAction::Move),
            Self::Clone => Some(ControlAction::Clone),
            Self::Edit => Some(ControlAction::Edit),
            Self::OpenTexturePicker => Some(ControlAction::OpenTexturePicker),
            Self::ApplyTexture => texture_key.map(|key| ControlAction::ApplyTexture(key.to_string())),
        }
    }
}

/// One panel entry: the action it raises, its button label, and whether
/// invoking it also ends the control session for the object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionDescriptor {
    pub action: PanelAction,
    pub label: &'static str,
    pub close_on_invoke: bool,
}

/// Button strip of the wall panel. Deleting, moving and applying a
/// texture end the session; deselecting, cloning and opening the picker
/// leave it running.
pub const WALL_PANEL_BUTTONS: &[ActionDescriptor] = &[
    ActionDescriptor {
        action: PanelAction::Quit,
        label: "Deselect",
        close_on_invoke: false,
    },
    ActionDescriptor {
        action: PanelAction::Move,
        label: "Move",
        close_on_invoke: true,
    },
    ActionDescriptor {
        action: PanelAction::OpenTexturePicker,
        label: "Colour",
        close_on_invoke: false,
    },
    ActionDescriptor {
        action: PanelAction::Clone,
        label: "Clone",
        close_on_invoke: false,
    },
    ActionDescriptor {
        action: PanelAction::Delete,
        label: "Delete",
        close_on_invoke: true,
    },
];

/// Button strip of the shelf and column panel. No entry ends the
/// session; the panel stays up until the object is deselected or gone.
pub const OBJECT_PANEL_BUTTONS: &[ActionDescriptor] = &[
    ActionDescriptor {
        action: PanelAction::Quit,
        label: "Deselect",
        close_on_invoke: false,
    },
    ActionDescriptor {
        action: PanelAction::Move,
        label: "Move",
        close_on_invoke: false,
    },
    ActionDescriptor {
        action: PanelAction::Edit,
        label: "Edit",
        close_on_invoke: false,
    },
    ActionDescriptor {
        action: PanelAction::Clone,
        label: "Clone",
        close_on_invoke: false,
    },
    ActionDescriptor {
        action: PanelAction::Delete,
        label: "Delete",
        close_on_invoke: false,
    },
];

/// Entry behind every texture swatch in the picker. Swatches live
/// outside the button strip but follow the same session policy.
pub const APPLY_TEXTURE: ActionDescriptor = ActionDescriptor {
    action: PanelAction::ApplyTexture,
    label: "Apply texture",
    close_on_invoke: true,
};

/// Looks up the descriptor of an action on a panel variant.
pub fn descriptor(kind: PanelKind, action: PanelAction) -> Option<&'static ActionDescriptor> {
    let strip = match kind {
        PanelKind::Wall => WALL_PANEL_BUTTONS,
        PanelKind::Object => OBJECT_PANEL_BUTTONS,
    };
    let found = strip.iter().find(|entry| entry.action == action);
    if found.is_none() && kind == PanelKind::Wall && action == PanelAction::ApplyTexture {
        return Some(&APPLY_TEXTURE);
    }
    found
}

/// Requested control action with its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlAction {
    Quit,
    Delete,
    Move,
    Clone,
    Edit,
    OpenTexturePicker,
    ApplyTexture(String),
}

/// Event fired when a panel button or texture swatch is pressed.
#[derive(Event)]
pub struct ControlActionEvent {
    pub kind: ObjectKind,
    pub id: String,
    pub action: ControlAction,
}

/// Event fired when a wall panel action ends the control session.
#[derive(Event)]
pub struct WallControlsClosedEvent;

// Resources
#[derive(Resource, Default)]
pub struct TexturePickerState {
    pub open: bool,
}

// Components
#[derive(Component)]
pub struct PanelRoot {
    pub kind: ObjectKind,
}

#[derive(Component)]
pub struct PanelButton {
    pub kind: ObjectKind,
    pub action: PanelAction,
}

#[derive(Component)]
pub struct TexturePickerRoot;

#[derive(Component)]
pub struct TextureSwatch {
    pub key: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_session_ends_on_delete_move_and_texture_apply() {
        for action in [
            PanelAction::Delete,
            PanelAction::Move,
            PanelAction::ApplyTexture,
        ] {
            let entry = descriptor(PanelKind::Wall, action).unwrap();
            assert!(entry.close_on_invoke, "{action:?} should end the session");
        }
    }

    #[test]
    fn wall_session_survives_clone_quit_and_picker_toggle() {
        for action in [
            PanelAction::Clone,
            PanelAction::Quit,
            PanelAction::OpenTexturePicker,
        ] {
            let entry = descriptor(PanelKind::Wall, action).unwrap();
            assert!(!entry.close_on_invoke, "{action:?} should keep the session");
        }
    }

    #[test]
    fn object_panel_never_ends_the_session() {
        for entry in OBJECT_PANEL_BUTTONS {
            assert!(!entry.close_on_invoke);
        }
        assert_eq!(descriptor(PanelKind::Object, PanelAction::ApplyTexture), None);
    }

    #[test]
    fn object_panel_offers_edit_instead_of_texture_controls() {
        assert!(descriptor(PanelKind::Object, PanelAction::Edit).is_some());
        assert_eq!(
            descriptor(PanelKind::Object, PanelAction::OpenTexturePicker),
            None
        );
        assert_eq!(descriptor(PanelKind::Wall, PanelAction::Edit), None);
    }

    #[test]
    fn texture_apply_requires_a_key() {
        assert_eq!(PanelAction::ApplyTexture.to_control_action(None), None);
        assert_eq!(
            PanelAction::ApplyTexture.to_control_action(Some("wood")),
            Some(ControlAction::ApplyTexture("wood".to_string()))
        );
        assert_eq!(
            PanelAction::Move.to_control_action(None),
            Some(ControlAction::Move)
        );
    }
}
