//! Input events produced by the click wheel

/// One detent of wheel rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelStep {
    /// Clockwise rotation, moves the selection down the list
    Forward,

    /// Counter-clockwise rotation, moves the selection up the list
    Backward,
}

impl WheelStep {
    /// Signed selection delta: +1 or -1
    pub fn delta(self) -> i32 {
        match self {
            WheelStep::Forward => 1,
            WheelStep::Backward => -1,
        }
    }
}

/// Buttons printed on the wheel, plus the center button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelButton {
    /// Top of the wheel: go back a level or leave now-playing
    Menu,
    /// Bottom of the wheel
    PlayPause,
    /// Right of the wheel
    Next,
    /// Left of the wheel
    Previous,
    /// Select the highlighted item
    Center,
}

/// Raw input reaching the wheel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelInput {
    /// Pointer sample relative to the wheel center
    Touch { dx: f64, dy: f64 },
    /// Pointer lifted; ends the gesture
    Release,
    /// A button was tapped
    Button(WheelButton),
}
