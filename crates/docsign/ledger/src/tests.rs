use secspace_docsign_domain::document::StatusFilter;
use secspace_docsign_test_utils::{
    ALEX, COMPANY_ID, SARAH, SECSPACE, document, mock_actions, mock_documents, notarization_fee,
    signed, ts, unsigned,
};

use super::*;

fn seeded_ledger() -> SignatureLedger {
    let mut ledger = SignatureLedger::builder()
        .catalog(mock_actions().into_iter().collect())
        .notarization_fee(notarization_fee())
        .build();

    for document in mock_documents() {
        ledger.register_document(document, ts(2024, 3, 15, 8, 0)).unwrap();
    }

    ledger
}

fn ledger_with(documents: Vec<Document<()>>) -> SignatureLedger {
    let mut ledger = SignatureLedger::builder().notarization_fee(notarization_fee()).build();

    for document in documents {
        ledger.register_document(document, ts(2024, 3, 15, 8, 0)).unwrap();
    }

    ledger
}

fn id(s: &str) -> DocumentId {
    s.into()
}

fn signatory(s: &str) -> SignatoryId {
    s.into()
}

fn rank(status: DocumentStatus) -> u8 {
    match status {
        DocumentStatus::PendingSignatures => 0,
        DocumentStatus::Completed => 1,
        DocumentStatus::Notarized => 2,
    }
}

// SCENARIOS
// ================================================================================================

#[test]
fn last_signature_completes_document() {
    let mut ledger = ledger_with(vec![document(
        "doc-a",
        vec![unsigned("a", "Alice"), signed("b", "Bob", ts(2024, 3, 1, 9, 0))],
    )]);

    let signed_at = ts(2024, 3, 16, 10, 30);
    let outcome = ledger.sign_document(&id("doc-a"), &signatory("a"), signed_at).unwrap();

    let document = outcome.document();
    assert_eq!(document.status(), DocumentStatus::Completed);
    assert_eq!(document.signatory(&signatory("a")).unwrap().signed_at(), Some(signed_at));
    assert_eq!(
        document.signatory(&signatory("b")).unwrap().signed_at(),
        Some(ts(2024, 3, 1, 9, 0))
    );
    assert_eq!(
        outcome.events(),
        [
            LedgerEvent::SignatureRecorded {
                document_id: id("doc-a"),
                signatory_id: signatory("a"),
                signed_at,
            },
            LedgerEvent::DocumentCompleted {
                document_id: id("doc-a"),
                company_id: COMPANY_ID.into(),
            },
        ]
    );
}

#[test]
fn completed_document_can_be_notarized() {
    let mut ledger = seeded_ledger();

    let outcome = ledger.notarize_document(&id("doc-4"), ts(2024, 3, 16, 11, 0)).unwrap();

    assert_eq!(outcome.document().status(), DocumentStatus::Notarized);
    assert!(outcome.document().is_notarized());
    assert_eq!(
        outcome.events(),
        [LedgerEvent::NotarizationRequested {
            document_id: id("doc-4"),
            company_id: COMPANY_ID.into(),
            fee: notarization_fee(),
        }]
    );
}

#[test]
fn notarizing_pending_document_fails_and_leaves_it_unchanged() {
    let mut ledger = ledger_with(vec![document("doc-a", vec![unsigned("a", "Alice")])]);
    let before = ledger.get_document(&id("doc-a")).unwrap();

    let err = ledger.notarize_document(&id("doc-a"), ts(2024, 3, 16, 11, 0)).unwrap_err();

    assert_eq!(
        err,
        LedgerError::InvalidTransition {
            document_id: id("doc-a"),
            from: DocumentStatus::PendingSignatures,
            to: DocumentStatus::Notarized,
        }
    );

    let after = ledger.get_document(&id("doc-a")).unwrap();
    assert!(Arc::ptr_eq(&before, &after));
    assert_eq!(after.status(), DocumentStatus::PendingSignatures);
}

#[test]
fn unknown_document_is_not_found() {
    let mut ledger = seeded_ledger();
    let missing = id("doc-404");

    assert_eq!(
        ledger.sign_document(&missing, &signatory(ALEX), ts(2024, 3, 16, 9, 0)).unwrap_err(),
        LedgerError::NotFound(missing.clone())
    );
    assert_eq!(
        ledger.notarize_document(&missing, ts(2024, 3, 16, 9, 0)).unwrap_err(),
        LedgerError::NotFound(missing)
    );
}

#[test]
fn document_without_signatories_is_completed_on_registration() {
    let ledger = ledger_with(vec![document("doc-info", vec![])]);

    let document = ledger.get_document(&id("doc-info")).unwrap();

    assert_eq!(document.status(), DocumentStatus::Completed);
    assert!(document.can_notarize());
}

// PROPERTIES
// ================================================================================================

#[test]
fn signing_twice_equals_signing_once() {
    let mut ledger = seeded_ledger();

    let first =
        ledger.sign_document(&id("doc-5"), &signatory(ALEX), ts(2024, 3, 16, 9, 0)).unwrap();
    let second =
        ledger.sign_document(&id("doc-5"), &signatory(ALEX), ts(2024, 3, 17, 9, 0)).unwrap();

    assert!(first.is_changed());
    assert!(!second.is_changed());
    assert_eq!(first.document(), second.document());
    assert_eq!(
        second.document().signatory(&signatory(ALEX)).unwrap().signed_at(),
        Some(ts(2024, 3, 16, 9, 0))
    );
}

#[test]
fn status_is_pending_iff_some_signatory_is_unsigned() {
    let ledger = seeded_ledger();

    for entry in ledger.list_documents(&DocumentQuery::default()) {
        let document = entry.document();
        let any_unsigned = document.signatories().iter().any(|s| !s.has_signed());

        assert_eq!(document.status() == DocumentStatus::PendingSignatures, any_unsigned);
    }
}

#[test]
fn status_never_regresses() {
    let mut ledger = seeded_ledger();
    let ids = ["doc-1", "doc-2", "doc-3", "doc-4", "doc-5"].map(id);
    let parties = [ALEX, SARAH, SECSPACE].map(signatory);

    let mut last = ids.clone().map(|id| rank(ledger.get_document(&id).unwrap().status()));

    for round in 0..3u32 {
        for (idx, document_id) in ids.iter().enumerate() {
            let at = ts(2024, 4, 1, 9, round);

            let _ = ledger.notarize_document(document_id, at);
            for party in &parties {
                let _ = ledger.sign_document(document_id, party, at);
            }
            let _ = ledger.notarize_document(document_id, at);

            let now = rank(ledger.get_document(document_id).unwrap().status());
            assert!(now >= last[idx], "{document_id} regressed");
            last[idx] = now;
        }
    }

    assert!(last.iter().all(|&r| r == rank(DocumentStatus::Notarized)));
}

#[test]
fn signed_at_is_immutable() {
    let mut ledger = seeded_ledger();
    let original = ts(2024, 3, 10, 14, 30);

    ledger.sign_document(&id("doc-1"), &signatory(SARAH), ts(2024, 3, 16, 9, 0)).unwrap();
    ledger.sign_document(&id("doc-1"), &signatory(ALEX), ts(2024, 3, 17, 9, 0)).unwrap();
    ledger.notarize_document(&id("doc-1"), ts(2024, 3, 18, 9, 0)).unwrap();

    let document = ledger.get_document(&id("doc-1")).unwrap();
    assert_eq!(document.signatory(&signatory(ALEX)).unwrap().signed_at(), Some(original));
    assert_eq!(
        document.signatory(&signatory(SARAH)).unwrap().signed_at(),
        Some(ts(2024, 3, 16, 9, 0))
    );
}

// COMMANDS
// ================================================================================================

#[test]
fn sign_by_party_without_entry_fails() {
    let mut ledger = seeded_ledger();

    let err = ledger
        .sign_document(&id("doc-2"), &signatory(ALEX), ts(2024, 3, 16, 9, 0))
        .unwrap_err();

    assert_eq!(
        err,
        LedgerError::SignatoryNotFound { document_id: id("doc-2"), signatory_id: signatory(ALEX) }
    );
}

#[test]
fn partial_signature_keeps_document_pending() {
    let mut ledger = ledger_with(vec![document(
        "doc-a",
        vec![unsigned("a", "Alice"), unsigned("b", "Bob")],
    )]);

    let outcome =
        ledger.sign_document(&id("doc-a"), &signatory("a"), ts(2024, 3, 16, 9, 0)).unwrap();

    assert_eq!(outcome.document().status(), DocumentStatus::PendingSignatures);
    assert_eq!(outcome.events().len(), 1);
}

#[test]
fn commands_produce_new_snapshots() {
    let mut ledger = seeded_ledger();
    let before = ledger.get_document(&id("doc-5")).unwrap();

    ledger.sign_document(&id("doc-5"), &signatory(ALEX), ts(2024, 3, 16, 9, 0)).unwrap();

    assert_eq!(before.status(), DocumentStatus::PendingSignatures);
    assert!(!before.signatory(&signatory(ALEX)).unwrap().has_signed());
    assert_eq!(
        ledger.get_document(&id("doc-5")).unwrap().status(),
        DocumentStatus::Completed
    );
}

#[test]
fn notarizing_twice_charges_once() {
    let mut ledger = seeded_ledger();

    let first = ledger.notarize_document(&id("doc-2"), ts(2024, 3, 16, 9, 0)).unwrap();
    let second = ledger.notarize_document(&id("doc-2"), ts(2024, 3, 17, 9, 0)).unwrap();

    assert_eq!(first.events().len(), 1);
    assert!(second.events().is_empty());
    assert_eq!(second.document().status(), DocumentStatus::Notarized);
}

#[test]
fn commands_touch_updated_at_only() {
    let mut ledger = seeded_ledger();

    let outcome = ledger.notarize_document(&id("doc-2"), ts(2024, 3, 16, 9, 0)).unwrap();

    let timestamps = outcome.document().aux();
    assert_eq!(timestamps.created_at(), ts(2024, 3, 15, 8, 0));
    assert_eq!(timestamps.updated_at(), ts(2024, 3, 16, 9, 0));
}

#[test]
fn register_rejects_duplicates_and_unknown_actions() {
    let mut ledger = seeded_ledger();

    let err = ledger
        .register_document(document("doc-1", vec![]), ts(2024, 3, 16, 9, 0))
        .unwrap_err();
    assert_eq!(err, LedgerError::DuplicateDocument(id("doc-1")));

    let mut bare = ledger_with(vec![]);
    let doc = mock_documents().into_iter().next().unwrap();
    let err = bare.register_document(doc, ts(2024, 3, 16, 9, 0)).unwrap_err();
    assert_eq!(err, LedgerError::UnknownAction("appoint-director".into()));
    assert!(bare.is_empty());
}

// QUERIES
// ================================================================================================

#[test]
fn list_filters_by_status() {
    let ledger = seeded_ledger();

    let ids = |filter| {
        ledger
            .list_documents(&DocumentQuery::builder().status_filter(filter).build())
            .iter()
            .map(|entry| entry.document().id().to_string())
            .collect::<Vec<_>>()
    };

    assert_eq!(ids(StatusFilter::All).len(), 5);
    assert_eq!(ids(StatusFilter::Pending), ["doc-1", "doc-5"]);
    assert_eq!(ids(StatusFilter::Completed), ["doc-2", "doc-4"]);
    assert_eq!(ids(StatusFilter::Notarized), ["doc-3"]);
}

#[test]
fn list_searches_titles_case_insensitively() {
    let ledger = seeded_ledger();

    let entries = ledger.list_documents(&DocumentQuery::builder().search("REGISTER").build());

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].document().id(), &id("doc-2"));
}

#[test]
fn list_scopes_to_company() {
    let ledger = seeded_ledger();

    let other = ledger.list_documents(&DocumentQuery::builder().company_id("c2").build());
    let own = ledger.list_documents(&DocumentQuery::builder().company_id(COMPANY_ID).build());

    assert!(other.is_empty());
    assert_eq!(own.len(), 5);
}

#[test]
fn list_resolves_related_actions() {
    let ledger = seeded_ledger();

    let entries = ledger.list_documents(&DocumentQuery::default());

    let title = |document_id: &str| {
        entries
            .iter()
            .find(|entry| entry.document().id().as_str() == document_id)
            .and_then(DocumentEntry::related_action)
            .map(|action| action.title().to_owned())
    };

    assert_eq!(title("doc-1").as_deref(), Some("Appoint New Director"));
    assert_eq!(title("doc-4").as_deref(), Some("File Annual Return"));
    assert_eq!(title("doc-3"), None);
}

#[test]
fn awaiting_lists_documents_needing_a_signature() {
    let ledger = seeded_ledger();

    let awaiting = |party: &str| {
        ledger
            .documents_awaiting(&signatory(party), None)
            .iter()
            .map(|document| document.id().to_string())
            .collect::<Vec<_>>()
    };

    assert_eq!(awaiting(ALEX), ["doc-5"]);
    assert_eq!(awaiting(SARAH), ["doc-1"]);
    assert!(awaiting(SECSPACE).is_empty());
    assert!(ledger.documents_awaiting(&signatory(ALEX), Some(&"c2".into())).is_empty());
}

#[test]
fn stats_count_documents_per_status() {
    let mut ledger = seeded_ledger();

    let stats = ledger.document_stats(Some(&COMPANY_ID.into()));
    assert_eq!(
        stats,
        DocumentStats::builder().total(5).pending_signatures(2).completed(2).notarized(1).build()
    );

    ledger.sign_document(&id("doc-5"), &signatory(ALEX), ts(2024, 3, 16, 9, 0)).unwrap();

    let stats = ledger.document_stats(None);
    assert_eq!(stats.pending_signatures(), 1);
    assert_eq!(stats.completed(), 3);
}
