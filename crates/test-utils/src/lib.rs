//! Test utilities for the document signature ledger.
//!
//! This crate provides fixture builders and the seeded documents and compliance actions
//! of the demo company `c1`, so tests across the workspace share one set of data.
//!
//! The seeded documents are:
//!
//! | id      | status             | signatories                    |
//! |---------|--------------------|--------------------------------|
//! | `doc-1` | Pending Signatures | `u1` signed, `u2` unsigned     |
//! | `doc-2` | Completed          | `u3` signed                    |
//! | `doc-3` | Notarized          | `u1` signed, `u2` signed       |
//! | `doc-4` | Completed          | `u1` signed                    |
//! | `doc-5` | Pending Signatures | `u1` unsigned, `u2` signed     |

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use secspace_docsign_domain::{
    action::{ActionCategory, ActionPricing, ActionStep, Complexity, ComplianceAction, Faq},
    document::{Document, DocumentKind, FileKind},
    fee::Fee,
    signatory::Signatory,
};

/// The demo company owning every seeded document.
pub const COMPANY_ID: &str = "c1";

/// Alex Chen, flagged as the current user on seeded documents.
pub const ALEX: &str = "u1";

/// Sarah Tan.
pub const SARAH: &str = "u2";

/// The secretarial firm itself.
pub const SECSPACE: &str = "u3";

// HELPERS
// ================================================================================================

/// Returns the UTC instant for the given date and time.
///
/// # Panics
///
/// Panics if the date or time is out of range.
pub fn ts(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0).unwrap()
}

/// Returns the given calendar date.
///
/// # Panics
///
/// Panics if the date is out of range.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// The flat notarization fee of the demo deployment, MYR 80.
pub fn notarization_fee() -> Fee {
    Fee::builder().amount(80).currency("MYR").build()
}

/// Builds a signatory who has not signed yet.
pub fn unsigned(id: &str, name: &str) -> Signatory {
    Signatory::builder().id(id).name(name).initials(initials(name)).build()
}

/// Builds a signatory who signed at `signed_at`.
pub fn signed(id: &str, name: &str, signed_at: DateTime<Utc>) -> Signatory {
    Signatory::builder()
        .id(id)
        .name(name)
        .initials(initials(name))
        .signed_at(signed_at)
        .build()
}

/// Builds an unregistered resolution of company `c1` with the given signatories.
///
/// # Panics
///
/// Panics if the signatories are invalid for a document.
pub fn document(id: &str, signatories: Vec<Signatory>) -> Document<()> {
    Document::builder()
        .id(id)
        .company_id(COMPANY_ID)
        .title(format!("Resolution {id}"))
        .kind(DocumentKind::Resolution)
        .file_kind(FileKind::Pdf)
        .uploaded_on(date(2024, 3, 1))
        .size("100 KB")
        .signatories(signatories)
        .aux(())
        .build()
        .unwrap()
}

fn initials(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

fn current_user(signatory: Signatory) -> Signatory {
    let signatory = signatory.dissolve();
    Signatory::builder()
        .id(signatory.id)
        .name(signatory.name)
        .initials(signatory.initials)
        .maybe_signed_at(signatory.signed_at)
        .is_current_user(true)
        .build()
}

// SEED DATA
// ================================================================================================

/// The seeded documents of company `c1`.
///
/// # Panics
///
/// Panics if the seed data is inconsistent, which would be a bug in this crate.
pub fn mock_documents() -> Vec<Document<()>> {
    let seed = |id: &str,
                title: &str,
                kind: DocumentKind,
                uploaded_on: NaiveDate,
                size: &str,
                notarized: bool,
                related_action_id: Option<&str>,
                signatories: Vec<Signatory>| {
        Document::builder()
            .id(id)
            .company_id(COMPANY_ID)
            .title(title)
            .kind(kind)
            .file_kind(FileKind::Pdf)
            .uploaded_on(uploaded_on)
            .size(size)
            .signatories(signatories)
            .notarized(notarized)
            .maybe_related_action_id(related_action_id)
            .aux(())
            .build()
            .unwrap()
    };

    vec![
        seed(
            "doc-1",
            "Board Resolution - Appointment of Director (Sarah Tan)",
            DocumentKind::Resolution,
            date(2024, 3, 10),
            "1.2 MB",
            false,
            Some("appoint-director"),
            vec![
                current_user(signed(ALEX, "Alex Chen", ts(2024, 3, 10, 14, 30))),
                unsigned(SARAH, "Sarah Tan"),
            ],
        ),
        seed(
            "doc-2",
            "Electronic Register of Directors",
            DocumentKind::Filing,
            date(2024, 1, 15),
            "450 KB",
            false,
            Some("appoint-director"),
            vec![signed(SECSPACE, "SecSpace Services", ts(2024, 1, 15, 9, 0))],
        ),
        seed(
            "doc-3",
            "Shareholders Agreement 2024",
            DocumentKind::Agreement,
            date(2024, 2, 28),
            "3.5 MB",
            true,
            None,
            vec![
                current_user(signed(ALEX, "Alex Chen", ts(2024, 3, 1, 10, 0))),
                signed(SARAH, "Sarah Tan", ts(2024, 3, 2, 16, 45)),
            ],
        ),
        seed(
            "doc-4",
            "AGM Minutes 2023",
            DocumentKind::Resolution,
            date(2023, 12, 15),
            "2.1 MB",
            false,
            Some("annual-return"),
            vec![current_user(signed(ALEX, "Alex Chen", ts(2023, 12, 16, 11, 20)))],
        ),
        seed(
            "doc-5",
            "Notice of Transfer of Shares",
            DocumentKind::Filing,
            date(2024, 3, 12),
            "890 KB",
            false,
            Some("transfer-shares"),
            vec![
                current_user(unsigned(ALEX, "Alex Chen")),
                signed(SARAH, "Sarah Tan", ts(2024, 3, 12, 9, 15)),
            ],
        ),
    ]
}

/// The compliance actions referenced by the seeded documents.
pub fn mock_actions() -> Vec<ComplianceAction> {
    vec![
        ComplianceAction::builder()
            .id("appoint-director")
            .title("Appoint New Director")
            .short_description("Add a new member to your board of directors.")
            .category(ActionCategory::Governance)
            .estimated_time("2-3 Business Days")
            .complexity(Complexity::Medium)
            .pricing(ActionPricing::builder().basic(250).build())
            .steps(vec![
                ActionStep::builder()
                    .title("Prepare Board Resolution")
                    .description(
                        "Draft a resolution for existing directors to approve the appointment.",
                    )
                    .build(),
                ActionStep::builder()
                    .title("Lodge with Registrar")
                    .description("Submit the appointment details to the company registrar.")
                    .build(),
            ])
            .faq(vec![
                Faq::builder()
                    .question("Is there a minimum age?")
                    .answer("Yes, the director must be at least 18 years old.")
                    .build(),
            ])
            .build(),
        ComplianceAction::builder()
            .id("transfer-shares")
            .title("Transfer Shares")
            .short_description("Move equity between shareholders.")
            .category(ActionCategory::Shares)
            .estimated_time("5-7 Business Days")
            .complexity(Complexity::High)
            .pricing(ActionPricing::builder().basic(300).govt_fee(200).build())
            .build(),
        ComplianceAction::builder()
            .id("annual-return")
            .title("File Annual Return")
            .short_description("Submit the yearly return to the registrar.")
            .category(ActionCategory::Compliance)
            .estimated_time("1-2 Weeks")
            .complexity(Complexity::Low)
            .pricing(ActionPricing::builder().basic(600).govt_fee(150).build())
            .build(),
    ]
}
