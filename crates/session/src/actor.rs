//! # Session actor
//!
//! A `CardListing` moved into its own tokio task. Every read and every
//! state change travels through one channel, so mutations from several
//! tasks are applied strictly in arrival order and each action still
//! changes exactly one field. Last write wins.

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use card_data::Card;
use pipeline::{SelectionAction, SelectionState};

use crate::listing::{CardListing, ListingView};

const COMMAND_BUFFER: usize = 64;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The session task has stopped
    #[error("listing session is closed")]
    Closed,

    #[error("rejected card snapshot: {0}")]
    InvalidCards(String),
}

enum SessionCommand {
    Dispatch {
        action: SelectionAction,
        reply: oneshot::Sender<SelectionState>,
    },
    ReplaceCards {
        cards: Vec<Card>,
        reply: oneshot::Sender<Result<usize, SessionError>>,
    },
    Visible(oneshot::Sender<Vec<Card>>),
    View(oneshot::Sender<ListingView>),
    State(oneshot::Sender<SelectionState>),
    Shutdown(oneshot::Sender<CardListing>),
}

/// Cloneable handle to a listing owned by a background task
#[derive(Clone)]
pub struct SessionHandle {
    commands: mpsc::Sender<SessionCommand>,
}

impl SessionHandle {
    /// Move `listing` into a new task on the current tokio runtime.
    ///
    /// Must be called from within a runtime.
    pub fn spawn(listing: CardListing) -> Self {
        let (commands, receiver) = mpsc::channel(COMMAND_BUFFER);
        tokio::spawn(run(listing, receiver));
        info!("Listing session started");
        Self { commands }
    }

    /// Apply one action; returns the state right after it was applied.
    pub async fn dispatch(&self, action: SelectionAction) -> Result<SelectionState, SessionError> {
        self.request(|reply| SessionCommand::Dispatch { action, reply })
            .await
    }

    /// Replace the card snapshot, e.g. after a fresh fetch.
    pub async fn replace_cards(&self, cards: Vec<Card>) -> Result<usize, SessionError> {
        self.request(|reply| SessionCommand::ReplaceCards { cards, reply })
            .await?
    }

    pub async fn visible(&self) -> Result<Vec<Card>, SessionError> {
        self.request(SessionCommand::Visible).await
    }

    pub async fn view(&self) -> Result<ListingView, SessionError> {
        self.request(SessionCommand::View).await
    }

    pub async fn state(&self) -> Result<SelectionState, SessionError> {
        self.request(SessionCommand::State).await
    }

    /// Stop the task and take the listing back.
    ///
    /// Other clones of this handle get `SessionError::Closed` afterwards.
    pub async fn shutdown(self) -> Result<CardListing, SessionError> {
        self.request(SessionCommand::Shutdown).await
    }

    async fn request<T>(
        &self,
        command: impl FnOnce(oneshot::Sender<T>) -> SessionCommand,
    ) -> Result<T, SessionError> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(command(reply))
            .await
            .map_err(|_| SessionError::Closed)?;
        response.await.map_err(|_| SessionError::Closed)
    }
}

async fn run(mut listing: CardListing, mut commands: mpsc::Receiver<SessionCommand>) {
    while let Some(command) = commands.recv().await {
        // A dropped reply receiver just means the caller stopped waiting
        match command {
            SessionCommand::Dispatch { action, reply } => {
                listing.dispatch(action);
                let _ = reply.send(listing.state().clone());
            }
            SessionCommand::ReplaceCards { cards, reply } => {
                let result = listing
                    .replace_cards(cards)
                    .map_err(|err| SessionError::InvalidCards(format!("{err:#}")));
                let _ = reply.send(result);
            }
            SessionCommand::Visible(reply) => {
                let _ = reply.send(listing.visible());
            }
            SessionCommand::View(reply) => {
                let _ = reply.send(listing.view());
            }
            SessionCommand::State(reply) => {
                let _ = reply.send(listing.state().clone());
            }
            SessionCommand::Shutdown(reply) => {
                info!("Listing session shutting down");
                let _ = reply.send(listing);
                return;
            }
        }
    }
    debug!("All session handles dropped; stopping");
}
