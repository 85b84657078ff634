//! Consumer of ledger events.
//!
//! Payment processing lives outside this service. The consumer records every
//! notarization fee that must be charged so an external biller can pick it up from
//! the logs.

use secspace_docsign_ledger::LedgerEvent;
use tokio::sync::mpsc;

/// Drains `receiver` until every sender is dropped.
///
/// Returns the number of notarization fees observed.
pub async fn run_billing_consumer(mut receiver: mpsc::UnboundedReceiver<LedgerEvent>) -> u64 {
    let mut charged = 0;

    while let Some(event) = receiver.recv().await {
        match event {
            LedgerEvent::NotarizationRequested { document_id, company_id, fee } => {
                charged += 1;
                tracing::info!(%document_id, %company_id, %fee, "notarization fee due");
            },
            LedgerEvent::SignatureRecorded { document_id, signatory_id, signed_at } => {
                tracing::debug!(%document_id, %signatory_id, %signed_at, "signature recorded");
            },
            LedgerEvent::DocumentCompleted { document_id, company_id } => {
                tracing::debug!(%document_id, %company_id, "document completed");
            },
        }
    }

    tracing::info!(charged, "billing consumer stopped");

    charged
}

#[cfg(test)]
mod tests {
    use secspace_docsign_test_utils::{COMPANY_ID, SARAH, notarization_fee, ts};

    use super::*;

    #[tokio::test]
    async fn counts_notarization_fees_until_closed() {
        let (sender, receiver) = mpsc::unbounded_channel();

        let events = [
            LedgerEvent::SignatureRecorded {
                document_id: "doc-1".into(),
                signatory_id: SARAH.into(),
                signed_at: ts(2024, 3, 16, 9, 0),
            },
            LedgerEvent::DocumentCompleted {
                document_id: "doc-1".into(),
                company_id: COMPANY_ID.into(),
            },
            LedgerEvent::NotarizationRequested {
                document_id: "doc-1".into(),
                company_id: COMPANY_ID.into(),
                fee: notarization_fee(),
            },
        ];

        for event in events {
            sender.send(event).expect("consumer is alive");
        }
        drop(sender);

        assert_eq!(run_billing_consumer(receiver).await, 1);
    }
}
