/// Repeat mode domain type
use serde::{Deserialize, Serialize};

/// Repeat mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    /// Stop when the queue ends
    #[default]
    Off,

    /// Loop the current track only
    One,

    /// Loop the entire queue
    All,
}

impl RepeatMode {
    /// Next mode in the button cycle: Off -> All -> One -> Off
    pub fn cycle(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::Off,
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            RepeatMode::Off => "Off",
            RepeatMode::One => "One",
            RepeatMode::All => "All",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_visits_every_mode() {
        let mut mode = RepeatMode::Off;
        mode = mode.cycle();
        assert_eq!(mode, RepeatMode::All);
        mode = mode.cycle();
        assert_eq!(mode, RepeatMode::One);
        mode = mode.cycle();
        assert_eq!(mode, RepeatMode::Off);
    }

    #[test]
    fn default_is_off() {
        assert_eq!(RepeatMode::default(), RepeatMode::Off);
        assert_eq!(RepeatMode::default().label(), "Off");
    }
}
