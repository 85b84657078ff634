//! integration tests for secspace-docsign-engine

use secspace_docsign_domain::{
    document::{DocumentKind, DocumentStatus, FileKind, StatusFilter},
    signatory::Signatory,
};
use secspace_docsign_engine::{
    LedgerEngine, LedgerEngineErrorKind, LedgerRuntimeConfig, Started,
    request::{
        GetDocumentRequest, GetDocumentStatsRequest, ListAwaitingSignatureRequest,
        ListDocumentsRequest, NotarizeDocumentRequest, RegisterDocumentRequest,
        SignDocumentRequest,
    },
    response::{
        GetDocumentResponseDissolved, NotarizeDocumentResponseDissolved,
        RegisterDocumentResponseDissolved, SignDocumentResponseDissolved,
    },
};
use secspace_docsign_ledger::{LedgerError, LedgerEvent, SignatureLedger};
use secspace_docsign_test_utils::{
    ALEX, COMPANY_ID, SARAH, mock_actions, mock_documents, notarization_fee, ts, unsigned,
};
use tokio::sync::mpsc;

fn seeded_ledger() -> SignatureLedger {
    let mut ledger = SignatureLedger::builder()
        .catalog(mock_actions().into_iter().collect())
        .notarization_fee(notarization_fee())
        .build();

    for document in mock_documents() {
        ledger
            .register_document(document, ts(2024, 3, 15, 8, 0))
            .expect("seed documents are valid");
    }

    ledger
}

fn start_engine() -> (LedgerEngine<Started>, mpsc::UnboundedReceiver<LedgerEvent>) {
    let (event_sender, event_receiver) = mpsc::unbounded_channel();

    let config = LedgerRuntimeConfig::builder().event_sender(event_sender).build();

    let engine = LedgerEngine::new(seeded_ledger())
        .start_ledger_runtime(config)
        .expect("failed to start ledger runtime");

    (engine, event_receiver)
}

fn sign_request(document_id: &str, signatory_id: &str) -> SignDocumentRequest {
    SignDocumentRequest::builder().document_id(document_id).signatory_id(signatory_id).build()
}

fn drain(receiver: &mut mpsc::UnboundedReceiver<LedgerEvent>) -> Vec<LedgerEvent> {
    let mut events = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn signing_then_notarizing_works_through_the_engine() {
    // Arrange
    let (engine, mut events) = start_engine();

    // Act
    let SignDocumentResponseDissolved { document, changed } =
        engine.sign_document(sign_request("doc-5", ALEX)).await.expect("failed to sign").dissolve();

    // Assert
    assert!(changed);
    assert_eq!(document.status(), DocumentStatus::Completed);
    assert!(document.signatory(&ALEX.into()).is_some_and(Signatory::has_signed));

    let signed_events = drain(&mut events);
    assert_eq!(signed_events.len(), 2);
    assert!(matches!(signed_events[0], LedgerEvent::SignatureRecorded { .. }));
    assert!(matches!(signed_events[1], LedgerEvent::DocumentCompleted { .. }));

    // Act
    let NotarizeDocumentResponseDissolved { document, changed } = engine
        .notarize_document(NotarizeDocumentRequest::builder().document_id("doc-5").build())
        .await
        .expect("failed to notarize document")
        .dissolve();

    // Assert
    assert!(changed);
    assert!(document.is_notarized());
    assert_eq!(
        drain(&mut events),
        [LedgerEvent::NotarizationRequested {
            document_id: "doc-5".into(),
            company_id: COMPANY_ID.into(),
            fee: notarization_fee(),
        }]
    );

    // Act
    let again = engine
        .notarize_document(NotarizeDocumentRequest::builder().document_id("doc-5").build())
        .await
        .expect("notarizing twice is a no-op");

    // Assert
    assert!(!again.dissolve().changed);
    assert!(drain(&mut events).is_empty());

    let ledger = engine.stop_ledger_runtime().expect("failed to stop runtime").into_ledger();
    let document = ledger.get_document(&"doc-5".into()).expect("document survives shutdown");
    assert_eq!(document.status(), DocumentStatus::Notarized);
}

#[tokio::test]
async fn ledger_errors_are_surfaced_and_emit_nothing() {
    let (engine, mut events) = start_engine();

    let err = engine
        .notarize_document(NotarizeDocumentRequest::builder().document_id("doc-1").build())
        .await
        .unwrap_err();
    assert!(matches!(
        err.kind(),
        LedgerEngineErrorKind::Ledger(LedgerError::InvalidTransition {
            from: DocumentStatus::PendingSignatures,
            to: DocumentStatus::Notarized,
            ..
        })
    ));

    let err = engine.sign_document(sign_request("doc-404", ALEX)).await.unwrap_err();
    assert_eq!(err.as_ledger_error(), Some(&LedgerError::NotFound("doc-404".into())));

    let err = engine.sign_document(sign_request("doc-2", ALEX)).await.unwrap_err();
    assert!(matches!(err.as_ledger_error(), Some(LedgerError::SignatoryNotFound { .. })));

    assert!(drain(&mut events).is_empty());
}

#[tokio::test]
async fn concurrent_signatures_on_one_document_are_serialized() {
    let (engine, mut events) = start_engine();

    let sign = || engine.sign_document(sign_request("doc-1", SARAH));

    let (first, second) = tokio::join!(sign(), sign());

    let first = first.expect("failed to sign").dissolve();
    let second = second.expect("failed to sign").dissolve();

    assert!(first.changed ^ second.changed);
    assert_eq!(first.document.status(), DocumentStatus::Completed);
    assert_eq!(second.document.status(), DocumentStatus::Completed);
    assert_eq!(
        first.document.signatory(&SARAH.into()).and_then(Signatory::signed_at),
        second.document.signatory(&SARAH.into()).and_then(Signatory::signed_at),
    );

    let recorded = drain(&mut events)
        .into_iter()
        .filter(|event| matches!(event, LedgerEvent::SignatureRecorded { .. }))
        .count();
    assert_eq!(recorded, 1);
}

#[tokio::test]
async fn registered_document_is_listed_with_its_action() {
    let (engine, _events) = start_engine();

    let request = RegisterDocumentRequest::builder()
        .id("doc-6")
        .company_id(COMPANY_ID)
        .title("Share Transfer Form")
        .kind(DocumentKind::Filing)
        .file_kind(FileKind::Pdf)
        .size("320 KB")
        .signatories(vec![unsigned(ALEX, "Alex Chen"), unsigned(SARAH, "Sarah Tan")])
        .related_action_id("transfer-shares")
        .build()
        .expect("valid request");

    let RegisterDocumentResponseDissolved { document } =
        engine.register_document(request).await.expect("failed to register").dissolve();
    assert_eq!(document.status(), DocumentStatus::PendingSignatures);

    let GetDocumentResponseDissolved { entry } = engine
        .get_document(GetDocumentRequest::builder().document_id("doc-6").build())
        .await
        .expect("failed to get document")
        .dissolve();
    let entry = entry.expect("registered document is found");
    assert_eq!(entry.related_action().map(|action| action.title()), Some("Transfer Shares"));

    let pending = engine
        .list_documents(
            ListDocumentsRequest::builder().status_filter(StatusFilter::Pending).build(),
        )
        .await
        .expect("failed to list documents")
        .dissolve()
        .entries;
    assert_eq!(pending.len(), 3);

    let awaiting = engine
        .list_awaiting_signature(
            ListAwaitingSignatureRequest::builder()
                .signatory_id(ALEX)
                .company_id(COMPANY_ID)
                .build(),
        )
        .await
        .expect("failed to list awaiting documents")
        .dissolve()
        .documents;
    let ids: Vec<_> = awaiting.iter().map(|document| document.id().to_string()).collect();
    assert_eq!(ids, ["doc-5", "doc-6"]);

    let stats = engine
        .get_document_stats(GetDocumentStatsRequest::builder().company_id(COMPANY_ID).build())
        .await
        .expect("failed to get stats")
        .dissolve()
        .stats;
    assert_eq!(stats.total(), 6);
    assert_eq!(stats.pending_signatures(), 3);

    let actions = engine.list_actions().await.expect("failed to list actions").dissolve().actions;
    assert_eq!(actions.len(), 3);
}

#[tokio::test]
async fn duplicate_registration_is_rejected() {
    let (engine, _events) = start_engine();

    let request = RegisterDocumentRequest::builder()
        .id("doc-1")
        .company_id(COMPANY_ID)
        .title("Duplicate")
        .kind(DocumentKind::Other)
        .file_kind(FileKind::Docx)
        .size("1 KB")
        .build()
        .expect("valid request");

    let err = engine.register_document(request).await.unwrap_err();
    assert_eq!(err.as_ledger_error(), Some(&LedgerError::DuplicateDocument("doc-1".into())));
}

#[tokio::test]
async fn unknown_document_is_none() {
    let (engine, _events) = start_engine();

    let response = engine
        .get_document(GetDocumentRequest::builder().document_id("doc-404").build())
        .await
        .expect("lookups never fail");

    assert!(response.dissolve().entry.is_none());
}
