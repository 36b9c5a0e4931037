use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

/// Controller inputs a tracked XR controller would provide, mapped to desktop devices.
#[derive(Reflect, Actionlike, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocomotionAction {
    /// Activation button (trackpad click / grip).
    Activate,
    /// Trackpad or thumbstick position.
    #[actionlike(DualAxis)]
    Trackpad,
}

/// Desktop stand-ins for head tracking and runtime toggles.
#[derive(Reflect, Actionlike, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeadAction {
    #[actionlike(DualAxis)]
    Look,
    #[actionlike(DualAxis)]
    TurnKeys,
    Raise,
    Lower,
    ToggleGravity,
    ToggleWalk,
    ToggleRotation,
}

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((
        InputManagerPlugin::<LocomotionAction>::default(),
        InputManagerPlugin::<HeadAction>::default(),
    ));

    app.register_type::<LocomotionAction>();
    app.register_type::<HeadAction>();

    app.insert_resource(locomotion_input_map());
    app.insert_resource(ActionState::<LocomotionAction>::default());
    app.insert_resource(head_input_map());
    app.insert_resource(ActionState::<HeadAction>::default());
}

fn locomotion_input_map() -> InputMap<LocomotionAction> {
    InputMap::default()
        .with(LocomotionAction::Activate, KeyCode::ShiftLeft)
        .with(LocomotionAction::Activate, GamepadButton::LeftTrigger2)
        .with_dual_axis(LocomotionAction::Trackpad, VirtualDPad::wasd())
        .with_dual_axis(LocomotionAction::Trackpad, GamepadStick::LEFT)
}

fn head_input_map() -> InputMap<HeadAction> {
    InputMap::default()
        .with_dual_axis(HeadAction::Look, MouseMove::default())
        .with_dual_axis(HeadAction::TurnKeys, VirtualDPad::arrow_keys())
        .with(HeadAction::Raise, KeyCode::KeyE)
        .with(HeadAction::Lower, KeyCode::KeyQ)
        .with(HeadAction::ToggleGravity, KeyCode::KeyG)
        .with(HeadAction::ToggleWalk, KeyCode::Digit1)
        .with(HeadAction::ToggleRotation, KeyCode::Digit2)
}
