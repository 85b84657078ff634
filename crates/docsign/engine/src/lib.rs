#![allow(missing_docs)]

mod error;
mod ledger_runtime;
mod types;

pub use self::{
    error::{LedgerEngineError, LedgerEngineErrorKind},
    ledger_runtime::{LedgerRuntimeConfig, LedgerRuntimeError},
    types::{request, response},
};

use std::thread::JoinHandle;

use chrono::Utc;
use secspace_docsign_ledger::{DocumentQuery, LedgerOutcomeDissolved, SignatureLedger};
use tokio::sync::{
    mpsc::{self, error::SendError},
    oneshot,
};

use self::{
    ledger_runtime::msg::{
        GetDocument, GetDocumentStats, LedgerMsg, ListActions, ListAwaitingSignature,
        ListDocuments, NotarizeDocument, RegisterDocument, SignDocument,
    },
    types::{
        request::{
            GetDocumentRequest, GetDocumentRequestDissolved, GetDocumentStatsRequest,
            GetDocumentStatsRequestDissolved, ListAwaitingSignatureRequest,
            ListAwaitingSignatureRequestDissolved, ListDocumentsRequest,
            ListDocumentsRequestDissolved, NotarizeDocumentRequest,
            NotarizeDocumentRequestDissolved, RegisterDocumentRequest,
            RegisterDocumentRequestDissolved, SignDocumentRequest, SignDocumentRequestDissolved,
        },
        response::{
            GetDocumentResponse, GetDocumentStatsResponse, ListActionsResponse,
            ListAwaitingSignatureResponse, ListDocumentsResponse, NotarizeDocumentResponse,
            RegisterDocumentResponse, SignDocumentResponse,
        },
    },
};

pub struct LedgerEngine<R> {
    runtime: R,
}

pub struct Stopped {
    ledger: SignatureLedger,
}

pub struct Started {
    sender: mpsc::UnboundedSender<LedgerMsg>,
    handle: JoinHandle<SignatureLedger>,
}

impl LedgerEngine<Stopped> {
    pub fn new(ledger: SignatureLedger) -> Self {
        Self { runtime: Stopped { ledger } }
    }

    pub fn ledger(&self) -> &SignatureLedger {
        &self.runtime.ledger
    }

    pub fn into_ledger(self) -> SignatureLedger {
        self.runtime.ledger
    }

    /// Moves the ledger onto its runtime thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime thread cannot be spawned.
    pub fn start_ledger_runtime(
        self,
        ledger_runtime_config: LedgerRuntimeConfig,
    ) -> Result<LedgerEngine<Started>, LedgerEngineError> {
        let (sender, receiver) = mpsc::unbounded_channel();

        let handle =
            ledger_runtime::spawn_new(self.runtime.ledger, receiver, ledger_runtime_config)
                .map_err(LedgerEngineErrorKind::from)?;

        Ok(LedgerEngine { runtime: Started { sender, handle } })
    }
}

impl LedgerEngine<Started> {
    #[tracing::instrument(skip_all)]
    pub async fn register_document(
        &self,
        request: RegisterDocumentRequest,
    ) -> Result<RegisterDocumentResponse, LedgerEngineError> {
        let RegisterDocumentRequestDissolved { document } = request.dissolve();

        let (msg, receiver) = {
            let (sender, receiver) = oneshot::channel();

            let msg = RegisterDocument::builder()
                .document(document)
                .at(Utc::now())
                .sender(sender)
                .build();

            (LedgerMsg::RegisterDocument(msg), receiver)
        };

        self.send_to_ledger_runtime(msg)
            .map_err(|_| LedgerEngineErrorKind::mpsc_sender("failed to send register document"))?;

        let document = receiver
            .await
            .map_err(LedgerEngineErrorKind::from)?
            .map_err(LedgerEngineErrorKind::from)?;

        Ok(RegisterDocumentResponse::builder().document(document).build())
    }

    pub async fn get_document(
        &self,
        request: GetDocumentRequest,
    ) -> Result<GetDocumentResponse, LedgerEngineError> {
        let GetDocumentRequestDissolved { document_id } = request.dissolve();

        let (msg, receiver) = {
            let (sender, receiver) = oneshot::channel();

            let msg = GetDocument::builder().document_id(document_id).sender(sender).build();

            (LedgerMsg::GetDocument(msg), receiver)
        };

        self.send_to_ledger_runtime(msg)
            .map_err(|_| LedgerEngineErrorKind::mpsc_sender("failed to send get document"))?;

        receiver
            .await
            .map(|entry| GetDocumentResponse::builder().maybe_entry(entry).build())
            .map_err(LedgerEngineErrorKind::from)
            .map_err(From::from)
    }

    pub async fn list_documents(
        &self,
        request: ListDocumentsRequest,
    ) -> Result<ListDocumentsResponse, LedgerEngineError> {
        let ListDocumentsRequestDissolved { company_id, search, status_filter } =
            request.dissolve();

        let (msg, receiver) = {
            let (sender, receiver) = oneshot::channel();

            let query = DocumentQuery::builder()
                .maybe_company_id(company_id)
                .maybe_search(search)
                .status_filter(status_filter)
                .build();

            let msg = ListDocuments::builder().query(query).sender(sender).build();

            (LedgerMsg::ListDocuments(msg), receiver)
        };

        self.send_to_ledger_runtime(msg)
            .map_err(|_| LedgerEngineErrorKind::mpsc_sender("failed to send list documents"))?;

        receiver
            .await
            .map(|entries| ListDocumentsResponse::builder().entries(entries).build())
            .map_err(LedgerEngineErrorKind::from)
            .map_err(From::from)
    }

    /// Signs a document on behalf of the signatory named in the request.
    ///
    /// The signature is stamped with the current time.
    #[tracing::instrument(skip_all)]
    pub async fn sign_document(
        &self,
        request: SignDocumentRequest,
    ) -> Result<SignDocumentResponse, LedgerEngineError> {
        let SignDocumentRequestDissolved { document_id, signatory_id } = request.dissolve();

        let (msg, receiver) = {
            let (sender, receiver) = oneshot::channel();

            let msg = SignDocument::builder()
                .document_id(document_id)
                .signatory_id(signatory_id)
                .at(Utc::now())
                .sender(sender)
                .build();

            (LedgerMsg::SignDocument(msg), receiver)
        };

        self.send_to_ledger_runtime(msg)
            .map_err(|_| LedgerEngineErrorKind::mpsc_sender("failed to send sign document"))?;

        let LedgerOutcomeDissolved { document, events } = receiver
            .await
            .map_err(LedgerEngineErrorKind::from)?
            .map_err(LedgerEngineErrorKind::from)?
            .dissolve();

        let response =
            SignDocumentResponse::builder().document(document).changed(!events.is_empty()).build();

        Ok(response)
    }

    /// Notarizes a completed document.
    ///
    /// The notarization fee is announced on the event channel, never charged here.
    #[tracing::instrument(skip_all)]
    pub async fn notarize_document(
        &self,
        request: NotarizeDocumentRequest,
    ) -> Result<NotarizeDocumentResponse, LedgerEngineError> {
        let NotarizeDocumentRequestDissolved { document_id } = request.dissolve();

        let (msg, receiver) = {
            let (sender, receiver) = oneshot::channel();

            let msg = NotarizeDocument::builder()
                .document_id(document_id)
                .at(Utc::now())
                .sender(sender)
                .build();

            (LedgerMsg::NotarizeDocument(msg), receiver)
        };

        self.send_to_ledger_runtime(msg)
            .map_err(|_| LedgerEngineErrorKind::mpsc_sender("failed to send notarize document"))?;

        let LedgerOutcomeDissolved { document, events } = receiver
            .await
            .map_err(LedgerEngineErrorKind::from)?
            .map_err(LedgerEngineErrorKind::from)?
            .dissolve();

        let response = NotarizeDocumentResponse::builder()
            .document(document)
            .changed(!events.is_empty())
            .build();

        Ok(response)
    }

    pub async fn list_awaiting_signature(
        &self,
        request: ListAwaitingSignatureRequest,
    ) -> Result<ListAwaitingSignatureResponse, LedgerEngineError> {
        let ListAwaitingSignatureRequestDissolved { signatory_id, company_id } =
            request.dissolve();

        let (msg, receiver) = {
            let (sender, receiver) = oneshot::channel();

            let msg = ListAwaitingSignature::builder()
                .signatory_id(signatory_id)
                .maybe_company_id(company_id)
                .sender(sender)
                .build();

            (LedgerMsg::ListAwaitingSignature(msg), receiver)
        };

        self.send_to_ledger_runtime(msg).map_err(|_| {
            LedgerEngineErrorKind::mpsc_sender("failed to send list awaiting signature")
        })?;

        receiver
            .await
            .map(|documents| ListAwaitingSignatureResponse::builder().documents(documents).build())
            .map_err(LedgerEngineErrorKind::from)
            .map_err(From::from)
    }

    pub async fn get_document_stats(
        &self,
        request: GetDocumentStatsRequest,
    ) -> Result<GetDocumentStatsResponse, LedgerEngineError> {
        let GetDocumentStatsRequestDissolved { company_id } = request.dissolve();

        let (msg, receiver) = {
            let (sender, receiver) = oneshot::channel();

            let msg =
                GetDocumentStats::builder().maybe_company_id(company_id).sender(sender).build();

            (LedgerMsg::GetDocumentStats(msg), receiver)
        };

        self.send_to_ledger_runtime(msg)
            .map_err(|_| LedgerEngineErrorKind::mpsc_sender("failed to send get document stats"))?;

        receiver
            .await
            .map(|stats| GetDocumentStatsResponse::builder().stats(stats).build())
            .map_err(LedgerEngineErrorKind::from)
            .map_err(From::from)
    }

    pub async fn list_actions(&self) -> Result<ListActionsResponse, LedgerEngineError> {
        let (msg, receiver) = {
            let (sender, receiver) = oneshot::channel();

            (LedgerMsg::ListActions(ListActions::builder().sender(sender).build()), receiver)
        };

        self.send_to_ledger_runtime(msg)
            .map_err(|_| LedgerEngineErrorKind::mpsc_sender("failed to send list actions"))?;

        receiver
            .await
            .map(|actions| ListActionsResponse::builder().actions(actions).build())
            .map_err(LedgerEngineErrorKind::from)
            .map_err(From::from)
    }

    /// Stops the runtime thread and takes the ledger back.
    ///
    /// Messages sent before the shutdown are processed first.
    pub fn stop_ledger_runtime(self) -> Result<LedgerEngine<Stopped>, LedgerEngineError> {
        self.send_to_ledger_runtime(LedgerMsg::Shutdown)
            .map_err(|_| LedgerEngineErrorKind::mpsc_sender("failed to send shutdown msg"))?;

        let ledger = self
            .runtime
            .handle
            .join()
            .map_err(|_| LedgerEngineErrorKind::other("ledger runtime thread misbehavior"))?;

        Ok(LedgerEngine::new(ledger))
    }

    #[allow(clippy::result_large_err)]
    fn send_to_ledger_runtime(&self, msg: LedgerMsg) -> Result<(), SendError<LedgerMsg>> {
        self.runtime.sender.send(msg)
    }
}
