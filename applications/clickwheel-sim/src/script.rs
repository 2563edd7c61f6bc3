//! Line commands
//!
//! The simulator is driven by one command per line, typed interactively or
//! read from a script:
//!
//! ```text
//! cw 2          rotate two detents clockwise
//! ccw 1         rotate one detent counter-clockwise
//! center        press the center button (also: select)
//! menu | play | next | prev
//! wait 1.5      let 1.5 seconds of playback pass
//! repeat | shuffle | stop
//! volume 0.4 | seek 30
//! show          print the screen
//! quit
//! ```

use crate::error::{Result, SimError};
use crate::runtime::RuntimeHandle;
use crate::session::{Control, Snapshot};
use clickwheel_input::{arc_samples, WheelButton, WheelGeometry, WheelInput};
use std::time::Duration;

/// Scenario run by `clickwheel-sim demo`
pub const DEMO_SCRIPT: &str = "\
# Music > Songs, wait for the listing, play the second song
center
cw 3
center
wait 0.5
show
cw 1
center
wait 2.5
show
# Pause, skip ahead, resume
play
next
play
wait 1
show
# Back to the root menu and shuffle everything
menu
menu
menu
cw 3
center
wait 0.5
repeat
volume 0.5
show
quit
";

/// Parsed line command
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    /// Signed number of detents, positive is clockwise
    Rotate(i32),
    Button(WheelButton),
    Control(Control),
    Wait(Duration),
    Show,
    Quit,
}

/// What the caller should do after a command
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Continue,
    Show(Snapshot),
    Quit,
}

/// Parse one line; blank lines and `#` comments yield `None`
pub fn parse_line(line: &str) -> Result<Option<ScriptCommand>> {
    let line = line.split('#').next().unwrap_or_default().trim();
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();

    let command = match verb.to_ascii_lowercase().as_str() {
        "cw" => ScriptCommand::Rotate(count(arg)?),
        "ccw" => ScriptCommand::Rotate(-count(arg)?),
        "center" | "select" => ScriptCommand::Button(WheelButton::Center),
        "menu" | "back" => ScriptCommand::Button(WheelButton::Menu),
        "play" | "pause" => ScriptCommand::Button(WheelButton::PlayPause),
        "next" => ScriptCommand::Button(WheelButton::Next),
        "prev" | "previous" => ScriptCommand::Button(WheelButton::Previous),
        "repeat" => ScriptCommand::Control(Control::CycleRepeat),
        "shuffle" => ScriptCommand::Control(Control::ToggleShuffle),
        "stop" => ScriptCommand::Control(Control::Stop),
        "volume" => ScriptCommand::Control(Control::SetVolume(number(verb, arg)? as f32)),
        "seek" => ScriptCommand::Control(Control::Seek(number(verb, arg)?)),
        "wait" => {
            let seconds = number(verb, arg)?;
            let duration = Duration::try_from_secs_f64(seconds)
                .map_err(|_| SimError::Command(format!("bad wait: {seconds}")))?;
            ScriptCommand::Wait(duration)
        }
        "show" => ScriptCommand::Show,
        "quit" | "exit" => ScriptCommand::Quit,
        _ => return Err(SimError::Command(line.to_string())),
    };

    Ok(Some(command))
}

fn count(arg: Option<&str>) -> Result<i32> {
    match arg {
        None => Ok(1),
        Some(text) => text
            .parse::<i32>()
            .ok()
            .filter(|n| *n >= 0)
            .ok_or_else(|| SimError::Command(format!("bad detent count: {text}"))),
    }
}

fn number(verb: &str, arg: Option<&str>) -> Result<f64> {
    arg.and_then(|text| text.parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .ok_or_else(|| SimError::Command(format!("{verb} needs a number")))
}

/// Touch samples for a drag of `detents` detents, ending with a release
pub fn drag_inputs(geometry: &WheelGeometry, detents: i32) -> Vec<WheelInput> {
    let span = f64::from(detents) * geometry.detent_degrees;
    let increment = geometry.detent_degrees / 3.0;

    arc_samples(geometry, 0.0, span, increment)
        .into_iter()
        .map(|(dx, dy)| WheelInput::Touch { dx, dy })
        .chain(std::iter::once(WheelInput::Release))
        .collect()
}

/// Run one command against the session task
pub async fn execute(
    handle: &RuntimeHandle,
    geometry: &WheelGeometry,
    command: ScriptCommand,
) -> Result<Outcome> {
    match command {
        ScriptCommand::Rotate(detents) => {
            for input in drag_inputs(geometry, detents) {
                handle.input(input).await?;
            }
        }
        ScriptCommand::Button(button) => handle.input(WheelInput::Button(button)).await?,
        ScriptCommand::Control(control) => handle.control(control).await?,
        ScriptCommand::Wait(duration) => tokio::time::sleep(duration).await,
        ScriptCommand::Show => return Ok(Outcome::Show(handle.snapshot().await?)),
        ScriptCommand::Quit => return Ok(Outcome::Quit),
    }
    Ok(Outcome::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(parse_line("cw 3").unwrap(), Some(ScriptCommand::Rotate(3)));
        assert_eq!(parse_line("ccw").unwrap(), Some(ScriptCommand::Rotate(-1)));
        assert_eq!(
            parse_line("  SELECT ").unwrap(),
            Some(ScriptCommand::Button(WheelButton::Center))
        );
        assert_eq!(
            parse_line("volume 0.25").unwrap(),
            Some(ScriptCommand::Control(Control::SetVolume(0.25)))
        );
        assert_eq!(
            parse_line("wait 1.5").unwrap(),
            Some(ScriptCommand::Wait(Duration::from_millis(1500)))
        );
    }

    #[test]
    fn skips_blank_and_comments() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   # nothing").unwrap(), None);
        assert_eq!(
            parse_line("next # skip").unwrap(),
            Some(ScriptCommand::Button(WheelButton::Next))
        );
    }

    #[test]
    fn rejects_bad_lines() {
        assert!(matches!(parse_line("dance"), Err(SimError::Command(_))));
        assert!(parse_line("cw -2").is_err());
        assert!(parse_line("wait").is_err());
        assert!(parse_line("wait -1").is_err());
        assert!(parse_line("seek soon").is_err());
    }

    #[test]
    fn demo_script_parses() {
        let commands: Vec<_> = DEMO_SCRIPT
            .lines()
            .filter_map(|line| parse_line(line).unwrap())
            .collect();
        assert_eq!(commands.last(), Some(&ScriptCommand::Quit));
    }

    #[test]
    fn drag_ends_with_release() {
        let geometry = WheelGeometry::default();
        let inputs = drag_inputs(&geometry, 2);
        // 30° in 5° increments: 7 samples plus the release
        assert_eq!(inputs.len(), 8);
        assert_eq!(inputs.last(), Some(&WheelInput::Release));
    }
}
