//! Session runtime
//!
//! One task owns the [`Session`]. Wheel input and controls arrive over an
//! mpsc channel, the playback clock is a `tokio` interval armed only while
//! the controller is Playing, and library queries run in spawned tasks whose
//! results are fed back through a second channel. Every message is applied
//! to completion before the next is taken.

use crate::error::{Result, SimError};
use crate::session::{Control, Effect, Session, Snapshot};
use clickwheel_core::{LibraryError, LibraryProvider, Track};
use clickwheel_input::WheelInput;
use clickwheel_menu::{fetch_listing, LibraryRequest, MenuItem};
use clickwheel_playback::{PlaybackEvent, TickGeneration};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info};

const COMMAND_BUFFER: usize = 64;

/// Messages accepted by the runtime task
#[derive(Debug)]
pub enum RuntimeCommand {
    Input(WheelInput),
    Control(Control),
    Snapshot(oneshot::Sender<Snapshot>),
}

/// Finished asynchronous work
#[derive(Debug)]
enum FetchDone {
    Listing(LibraryRequest, std::result::Result<Vec<MenuItem>, LibraryError>),
    AllTracks(std::result::Result<Vec<Track>, LibraryError>),
}

/// Handle to a running session task
#[derive(Debug)]
pub struct RuntimeHandle {
    commands: mpsc::Sender<RuntimeCommand>,
    join: JoinHandle<Session>,
}

impl RuntimeHandle {
    pub async fn send(&self, command: RuntimeCommand) -> Result<()> {
        self.commands
            .send(command)
            .await
            .map_err(|_| SimError::Runtime("session task has exited".to_string()))
    }

    pub async fn input(&self, input: WheelInput) -> Result<()> {
        self.send(RuntimeCommand::Input(input)).await
    }

    pub async fn control(&self, control: Control) -> Result<()> {
        self.send(RuntimeCommand::Control(control)).await
    }

    /// Current screen and playback state
    pub async fn snapshot(&self) -> Result<Snapshot> {
        let (reply, response) = oneshot::channel();
        self.send(RuntimeCommand::Snapshot(reply)).await?;
        response
            .await
            .map_err(|_| SimError::Runtime("snapshot dropped".to_string()))
    }

    /// Stop the task and take the session back
    pub async fn shutdown(self) -> Result<Session> {
        drop(self.commands);
        self.join
            .await
            .map_err(|e| SimError::Runtime(e.to_string()))
    }
}

pub struct Runtime;

impl Runtime {
    /// Move `session` onto its own task
    pub fn spawn(session: Session, library: Arc<dyn LibraryProvider>) -> RuntimeHandle {
        let (commands, receiver) = mpsc::channel(COMMAND_BUFFER);
        let join = tokio::spawn(run(session, library, receiver));
        RuntimeHandle { commands, join }
    }
}

async fn run(
    mut session: Session,
    library: Arc<dyn LibraryProvider>,
    mut commands: mpsc::Receiver<RuntimeCommand>,
) -> Session {
    let (done_tx, mut done_rx) = mpsc::unbounded_channel();
    let mut armed: Option<TickGeneration> = None;
    let mut ticker: Option<Interval> = None;

    info!("Session started");

    loop {
        // Each entry into Playing gets a fresh interval
        let generation = session.tick_generation();
        if generation != armed {
            armed = generation;
            ticker = generation.map(|_| {
                let period = session.tick_interval();
                let mut interval = interval_at(Instant::now() + period, period);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                interval
            });
        }

        tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else { break };
                match command {
                    RuntimeCommand::Input(input) => {
                        if let Some(effect) = session.handle_input(input) {
                            dispatch(effect, &library, &done_tx);
                        }
                    }
                    RuntimeCommand::Control(control) => session.apply_control(control),
                    RuntimeCommand::Snapshot(reply) => {
                        let _ = reply.send(session.snapshot());
                    }
                }
            }
            Some(done) = done_rx.recv() => match done {
                FetchDone::Listing(request, result) => {
                    if !session.complete_fetch(&request, result) {
                        debug!(frame = ?request.frame, "Listing not applied");
                    }
                }
                FetchDone::AllTracks(result) => session.complete_shuffle(result),
            },
            () = next_tick(&mut ticker) => {
                if let Some(generation) = armed {
                    session.tick(generation);
                }
            }
        }

        log_events(session.drain_events());
    }

    info!("Session stopped");
    session
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}

fn dispatch(
    effect: Effect,
    library: &Arc<dyn LibraryProvider>,
    done: &mpsc::UnboundedSender<FetchDone>,
) {
    let library = Arc::clone(library);
    let done = done.clone();

    match effect {
        Effect::Fetch(request) => {
            debug!(kind = ?request.kind, "Fetching listing");
            tokio::spawn(async move {
                let result = fetch_listing(library.as_ref(), &request.kind).await;
                let _ = done.send(FetchDone::Listing(request, result));
            });
        }
        Effect::ShuffleAll => {
            tokio::spawn(async move {
                let result = library.fetch_all_tracks().await;
                let _ = done.send(FetchDone::AllTracks(result));
            });
        }
    }
}

fn log_events(events: Vec<PlaybackEvent>) {
    for event in events {
        match &event {
            PlaybackEvent::TrackChanged { index, title } => {
                info!(index, title = %title, "Now playing");
            }
            PlaybackEvent::StateChanged { state } => info!(?state, "Transport"),
            PlaybackEvent::PositionChanged { .. } => tracing::trace!(?event, "Playback event"),
            _ => debug!(?event, "Playback event"),
        }
    }
}
