//! Tokio driver for a playback session.
//!
//! [`spawn_session`] moves a [`Playback`] into its own task. The task sleeps
//! until the controller's single pending deadline, or until a transport
//! command arrives, whichever comes first. Each loop iteration re-reads the
//! deadline, so a command that cancels auto-play also drops the sleep that
//! would have fired it. Status is published before a command is answered.

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::debug;

use crate::error::{Error, Result};
use crate::events::{PlaybackState, PlaybackStatus};
use crate::playback::{Playback, Transport};
use crate::surface::{Frame, Surface};

/// Capacity of the command channel.
const COMMAND_BUFFER: usize = 32;

enum Command<S> {
    Transport(Transport, oneshot::Sender<PlaybackStatus>),
    Frame(oneshot::Sender<Frame>),
    Close(oneshot::Sender<S>),
}

/// Handle to a running playback session.
///
/// Dropping the handle closes the session; the surface is torn down but not
/// returned.
pub struct SessionHandle<S> {
    commands: mpsc::Sender<Command<S>>,
    status: watch::Receiver<PlaybackStatus>,
    task: JoinHandle<()>,
}

/// Run a playback session on the current tokio runtime.
pub fn spawn_session<S>(playback: Playback<S>) -> SessionHandle<S>
where
    S: Surface + Send + 'static,
{
    let (commands, rx) = mpsc::channel(COMMAND_BUFFER);
    let (status_tx, status) = watch::channel(playback.status());
    let task = tokio::spawn(run(playback, rx, status_tx));
    SessionHandle {
        commands,
        status,
        task,
    }
}

async fn run<S: Surface>(
    mut playback: Playback<S>,
    mut commands: mpsc::Receiver<Command<S>>,
    status: watch::Sender<PlaybackStatus>,
) {
    loop {
        let deadline = playback.next_deadline();
        tokio::select! {
            command = commands.recv() => match command {
                Some(Command::Transport(transport, reply)) => {
                    playback.apply_transport(transport, Instant::now());
                    status.send_replace(playback.status());
                    let _ = reply.send(playback.status());
                }
                Some(Command::Frame(reply)) => {
                    let _ = reply.send(playback.frame());
                }
                Some(Command::Close(reply)) => {
                    let surface = playback.close();
                    let _ = reply.send(surface);
                    return;
                }
                None => {
                    debug!("session handle dropped, closing");
                    playback.close();
                    return;
                }
            },
            _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                playback.tick(Instant::now());
                status.send_replace(playback.status());
            }
        }
    }
}

impl<S> SessionHandle<S> {
    async fn transport(&self, transport: Transport) -> Result<PlaybackStatus> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(Command::Transport(transport, reply))
            .await
            .map_err(|_| Error::SessionClosed)?;
        response.await.map_err(|_| Error::SessionClosed)
    }

    /// Start auto-play.
    pub async fn play(&self) -> Result<PlaybackStatus> {
        self.transport(Transport::Play).await
    }

    /// Stop auto-play.
    pub async fn pause(&self) -> Result<PlaybackStatus> {
        self.transport(Transport::Pause).await
    }

    /// Apply the next move.
    pub async fn step_forward(&self) -> Result<PlaybackStatus> {
        self.transport(Transport::StepForward).await
    }

    /// Take back the last move.
    pub async fn step_backward(&self) -> Result<PlaybackStatus> {
        self.transport(Transport::StepBackward).await
    }

    /// Return to the starting cube.
    pub async fn reset(&self) -> Result<PlaybackStatus> {
        self.transport(Transport::Reset).await
    }

    /// Send any transport control.
    pub async fn send(&self, transport: Transport) -> Result<PlaybackStatus> {
        self.transport(transport).await
    }

    /// The working cube and position right now.
    pub async fn frame(&self) -> Result<Frame> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(Command::Frame(reply))
            .await
            .map_err(|_| Error::SessionClosed)?;
        response.await.map_err(|_| Error::SessionClosed)
    }

    /// Latest published status.
    pub fn status(&self) -> PlaybackStatus {
        *self.status.borrow()
    }

    /// Subscribe to status updates.
    pub fn subscribe(&self) -> watch::Receiver<PlaybackStatus> {
        self.status.clone()
    }

    /// Wait until the published status satisfies `predicate`.
    pub async fn wait_for<F>(&self, predicate: F) -> Result<PlaybackStatus>
    where
        F: FnMut(&PlaybackStatus) -> bool,
    {
        let mut rx = self.status.clone();
        let status = rx.wait_for(predicate).await.map_err(|_| Error::SessionClosed)?;
        Ok(*status)
    }

    /// Wait until auto-play stops, either at the end of the list or on a
    /// bad move.
    pub async fn settled(&self) -> Result<PlaybackStatus> {
        self.wait_for(|s| s.state != PlaybackState::Playing).await
    }

    /// Close the session and take the surface back.
    pub async fn close(self) -> Result<S> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(Command::Close(reply))
            .await
            .map_err(|_| Error::SessionClosed)?;
        let surface = response.await.map_err(|_| Error::SessionClosed)?;
        let _ = self.task.await;
        Ok(surface)
    }
}
