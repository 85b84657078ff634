//! Ledger runtime confining the [`SignatureLedger`] to a single writer thread.
//!
//! The ledger itself is a plain synchronous value. This module moves it onto a
//! dedicated thread and exposes it through message passing, so concurrent callers
//! never share it and commands on the same document are applied one after another.
//!
//! ## Architecture
//!
//! ```text
//!  External Thread (Axum)            Runtime Thread
//! ┌───────────────────────┐         ┌───────────────────────────────┐
//! │ LedgerEngine          │         │ SignatureLedger               │
//! │                       │         │                               │
//! │ mpsc::UnboundedSender ┼─────────│──> mpsc::UnboundedReceiver    │
//! │                       │         │                               │
//! │ oneshot::Receiver <───┼─────────┤─── oneshot::Sender            │
//! └───────────────────────┘         └──────────────┬────────────────┘
//!                                                  │
//!                                                  └──> LedgerEvent sender
//! ```
//!
//! 1. A [`LedgerMsg`] is sent from an external thread using a [`mpsc::UnboundedSender`].
//! 2. The runtime thread receives the message with a blocking receive.
//! 3. The runtime applies the command to the [`SignatureLedger`].
//! 4. Events produced by the command are forwarded, in order, to the configured event
//!    sender.
//! 5. The runtime sends the result back via the [`oneshot::Sender`] carried by the
//!    message.
//!
//! The thread hands the ledger back through its [`JoinHandle`] once it stops.

pub mod msg;

mod error;

pub use self::error::LedgerRuntimeError;

use std::thread::{self, JoinHandle};

use bon::Builder;
use secspace_docsign_ledger::{LedgerEvent, SignatureLedger};
use tokio::sync::mpsc;

use self::{
    error::Result,
    msg::{
        GetDocument, GetDocumentDissolved, GetDocumentStats, GetDocumentStatsDissolved,
        LedgerMsg, ListActions, ListActionsDissolved, ListAwaitingSignature,
        ListAwaitingSignatureDissolved, ListDocuments, ListDocumentsDissolved, NotarizeDocument,
        NotarizeDocumentDissolved, RegisterDocument, RegisterDocumentDissolved, SignDocument,
        SignDocumentDissolved,
    },
};

/// Spawns a new ledger runtime thread owning `ledger`.
///
/// The thread runs until:
/// - A [`LedgerMsg::Shutdown`] message is received
/// - The message channel is closed
///
/// # Errors
///
/// Returns an error if the operating system refuses to spawn the thread.
#[tracing::instrument(skip_all, fields(documents = ledger.len()))]
pub fn spawn_new(
    ledger: SignatureLedger,
    msg_receiver: mpsc::UnboundedReceiver<LedgerMsg>,
    config: LedgerRuntimeConfig,
) -> Result<JoinHandle<SignatureLedger>> {
    let handle = thread::Builder::new()
        .name("ledger-runtime".into())
        .spawn(move || run_ledger_runtime(ledger, msg_receiver, config))?;

    Ok(handle)
}

/// Configuration for the ledger runtime.
#[derive(Debug, Default, Builder)]
pub struct LedgerRuntimeConfig {
    /// Receives every event produced by a ledger command, e.g. for billing.
    event_sender: Option<mpsc::UnboundedSender<LedgerEvent>>,
}

fn run_ledger_runtime(
    mut ledger: SignatureLedger,
    mut msg_receiver: mpsc::UnboundedReceiver<LedgerMsg>,
    LedgerRuntimeConfig { event_sender }: LedgerRuntimeConfig,
) -> SignatureLedger {
    tracing::info!(documents = ledger.len(), "ledger runtime started");

    let forward = |events: &[LedgerEvent]| {
        let Some(event_sender) = &event_sender else {
            return;
        };

        for event in events {
            let _ = event_sender
                .send(event.clone())
                .inspect_err(|_| tracing::warn!("event receiver dropped, event discarded"));
        }
    };

    while let Some(msg) = msg_receiver.blocking_recv() {
        let result = match msg {
            LedgerMsg::Shutdown => {
                tracing::info!("received shutdown msg, stopping ledger runtime");
                break;
            },
            LedgerMsg::RegisterDocument(msg) => handle_register_document(&mut ledger, msg),
            LedgerMsg::GetDocument(msg) => handle_get_document(&ledger, msg),
            LedgerMsg::ListDocuments(msg) => handle_list_documents(&ledger, msg),
            LedgerMsg::SignDocument(msg) => handle_sign_document(&mut ledger, msg, forward),
            LedgerMsg::NotarizeDocument(msg) => {
                handle_notarize_document(&mut ledger, msg, forward)
            },
            LedgerMsg::ListAwaitingSignature(msg) => handle_list_awaiting_signature(&ledger, msg),
            LedgerMsg::GetDocumentStats(msg) => handle_get_document_stats(&ledger, msg),
            LedgerMsg::ListActions(msg) => handle_list_actions(&ledger, msg),
        };

        let _ = result.inspect_err(|e| tracing::error!("failed to reply to ledger msg: {e}"));
    }

    tracing::info!("shutting down ledger runtime");

    ledger
}

fn handle_register_document(ledger: &mut SignatureLedger, msg: RegisterDocument) -> Result<()> {
    let RegisterDocumentDissolved { document, at, sender } = msg.dissolve();

    let document = ledger.register_document(document, at);

    sender.send(document).map_err(|_| LedgerRuntimeError::Sender)
}

fn handle_get_document(ledger: &SignatureLedger, msg: GetDocument) -> Result<()> {
    let GetDocumentDissolved { document_id, sender } = msg.dissolve();

    sender
        .send(ledger.get_document_entry(&document_id))
        .map_err(|_| LedgerRuntimeError::Sender)
}

fn handle_list_documents(ledger: &SignatureLedger, msg: ListDocuments) -> Result<()> {
    let ListDocumentsDissolved { query, sender } = msg.dissolve();

    sender.send(ledger.list_documents(&query)).map_err(|_| LedgerRuntimeError::Sender)
}

fn handle_sign_document<F>(
    ledger: &mut SignatureLedger,
    msg: SignDocument,
    forward: F,
) -> Result<()>
where
    F: Fn(&[LedgerEvent]),
{
    let SignDocumentDissolved { document_id, signatory_id, at, sender } = msg.dissolve();

    let outcome = ledger
        .sign_document(&document_id, &signatory_id, at)
        .inspect(|outcome| forward(outcome.events()));

    sender.send(outcome).map_err(|_| LedgerRuntimeError::Sender)
}

fn handle_notarize_document<F>(
    ledger: &mut SignatureLedger,
    msg: NotarizeDocument,
    forward: F,
) -> Result<()>
where
    F: Fn(&[LedgerEvent]),
{
    let NotarizeDocumentDissolved { document_id, at, sender } = msg.dissolve();

    let outcome = ledger
        .notarize_document(&document_id, at)
        .inspect(|outcome| forward(outcome.events()));

    sender.send(outcome).map_err(|_| LedgerRuntimeError::Sender)
}

fn handle_list_awaiting_signature(
    ledger: &SignatureLedger,
    msg: ListAwaitingSignature,
) -> Result<()> {
    let ListAwaitingSignatureDissolved { signatory_id, company_id, sender } = msg.dissolve();

    let documents = ledger.documents_awaiting(&signatory_id, company_id.as_ref());

    sender.send(documents).map_err(|_| LedgerRuntimeError::Sender)
}

fn handle_get_document_stats(ledger: &SignatureLedger, msg: GetDocumentStats) -> Result<()> {
    let GetDocumentStatsDissolved { company_id, sender } = msg.dissolve();

    sender
        .send(ledger.document_stats(company_id.as_ref()))
        .map_err(|_| LedgerRuntimeError::Sender)
}

fn handle_list_actions(ledger: &SignatureLedger, msg: ListActions) -> Result<()> {
    let ListActionsDissolved { sender } = msg.dissolve();

    sender
        .send(ledger.catalog().iter().cloned().collect())
        .map_err(|_| LedgerRuntimeError::Sender)
}
