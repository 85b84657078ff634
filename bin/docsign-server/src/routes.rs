use axum::{Json, extract::State, http::StatusCode};
use itertools::Itertools;
use secspace_docsign_domain::{
    action::ComplianceAction,
    document::{DocumentKind, FileKind, StatusFilter},
    signatory::Signatory,
};
use secspace_docsign_engine::{
    request::{
        GetDocumentRequest, GetDocumentStatsRequest, ListAwaitingSignatureRequest,
        ListDocumentsRequest, NotarizeDocumentRequest, RegisterDocumentRequest, RequestError,
        SignDocumentRequest,
    },
    response::{
        GetDocumentResponseDissolved, GetDocumentStatsResponseDissolved,
        ListActionsResponseDissolved, ListAwaitingSignatureResponseDissolved,
        ListDocumentsResponseDissolved, NotarizeDocumentResponseDissolved,
        RegisterDocumentResponseDissolved, SignDocumentResponseDissolved,
    },
};

use crate::{
    App, AppDissolved,
    error::AppError,
    payload::{
        DocumentPayload,
        request::{
            GetDocumentDetailsRequestPayload, GetDocumentDetailsRequestPayloadDissolved,
            GetDocumentStatsRequestPayload, GetDocumentStatsRequestPayloadDissolved,
            ListActionsRequestPayload, ListAwaitingSignatureRequestPayload,
            ListAwaitingSignatureRequestPayloadDissolved, ListDocumentsRequestPayload,
            ListDocumentsRequestPayloadDissolved, NewSignatoryPayload,
            NewSignatoryPayloadDissolved, NotarizeDocumentRequestPayload,
            NotarizeDocumentRequestPayloadDissolved, RegisterDocumentRequestPayload,
            RegisterDocumentRequestPayloadDissolved, SignDocumentRequestPayload,
            SignDocumentRequestPayloadDissolved,
        },
        response::{
            GetDocumentDetailsResponsePayload, GetDocumentStatsResponsePayload,
            ListActionsResponsePayload, ListAwaitingSignatureResponsePayload,
            ListDocumentsResponsePayload, NotarizeDocumentResponsePayload,
            RegisterDocumentResponsePayload, SignDocumentResponsePayload,
        },
    },
};

#[tracing::instrument]
pub async fn health() -> StatusCode {
    StatusCode::OK
}

#[tracing::instrument(skip_all)]
pub async fn register_document(
    State(app): State<App>,
    Json(payload): Json<RegisterDocumentRequestPayload>,
) -> Result<Json<RegisterDocumentResponsePayload>, AppError> {
    let AppDissolved { engine } = app.dissolve();

    let RegisterDocumentRequestPayloadDissolved {
        id,
        company_id,
        title,
        kind,
        file_kind,
        uploaded_on,
        size,
        signatories,
        related_action_id,
    } = payload.dissolve();

    let request = {
        let kind: DocumentKind =
            kind.parse().map_err(|_| AppError::InvalidDocumentKind(kind.into()))?;

        let file_kind: FileKind =
            file_kind.parse().map_err(|_| AppError::InvalidFileKind(file_kind.into()))?;

        RegisterDocumentRequest::builder()
            .maybe_id(id)
            .company_id(company_id)
            .title(title)
            .kind(kind)
            .file_kind(file_kind)
            .maybe_uploaded_on(uploaded_on)
            .size(size)
            .signatories(signatories.into_iter().map(new_signatory).collect())
            .maybe_related_action_id(related_action_id)
            .build()
            .map_err(RequestError::from)
            .inspect_err(|e| tracing::warn!("failed to create request: {e}"))?
    };

    let RegisterDocumentResponseDissolved { document } = engine
        .register_document(request)
        .await
        .inspect_err(|e| tracing::warn!("failed to register document: {e}"))?
        .dissolve();

    tracing::info!(document_id = %document.id(), "registered document");

    let response = RegisterDocumentResponsePayload::builder()
        .document(DocumentPayload::from(&*document))
        .build();

    Ok(Json(response))
}

#[tracing::instrument(skip_all)]
pub async fn get_document_details(
    State(app): State<App>,
    Json(payload): Json<GetDocumentDetailsRequestPayload>,
) -> Result<Json<GetDocumentDetailsResponsePayload>, AppError> {
    let AppDissolved { engine } = app.dissolve();

    let GetDocumentDetailsRequestPayloadDissolved { document_id } = payload.dissolve();

    let request = GetDocumentRequest::builder().document_id(document_id).build();

    let GetDocumentResponseDissolved { entry } = engine.get_document(request).await?.dissolve();

    let entry = entry.ok_or(AppError::DocumentNotFound)?;

    let response = GetDocumentDetailsResponsePayload::builder().document((&entry).into()).build();

    Ok(Json(response))
}

#[tracing::instrument(skip_all)]
pub async fn list_documents(
    State(app): State<App>,
    Json(payload): Json<ListDocumentsRequestPayload>,
) -> Result<Json<ListDocumentsResponsePayload>, AppError> {
    let AppDissolved { engine } = app.dissolve();

    let ListDocumentsRequestPayloadDissolved { company_id, search, status_filter } =
        payload.dissolve();

    let status_filter = status_filter
        .map(|filter| {
            filter
                .parse::<StatusFilter>()
                .map_err(|_| AppError::InvalidStatusFilter(filter.into()))
        })
        .transpose()?
        .unwrap_or_default();

    let request = ListDocumentsRequest::builder()
        .maybe_company_id(company_id)
        .maybe_search(search.filter(|search| !search.is_empty()))
        .status_filter(status_filter)
        .build();

    let ListDocumentsResponseDissolved { entries } =
        engine.list_documents(request).await?.dissolve();

    let response = ListDocumentsResponsePayload::builder()
        .documents(entries.iter().map(From::from).collect())
        .build();

    Ok(Json(response))
}

#[tracing::instrument(skip_all)]
pub async fn sign_document(
    State(app): State<App>,
    Json(payload): Json<SignDocumentRequestPayload>,
) -> Result<Json<SignDocumentResponsePayload>, AppError> {
    let AppDissolved { engine } = app.dissolve();

    let SignDocumentRequestPayloadDissolved { document_id, signatory_id } = payload.dissolve();

    let request =
        SignDocumentRequest::builder().document_id(document_id).signatory_id(signatory_id).build();

    let SignDocumentResponseDissolved { document, changed } = engine
        .sign_document(request)
        .await
        .inspect_err(|e| tracing::warn!("failed to sign document: {e}"))?
        .dissolve();

    let response = SignDocumentResponsePayload::builder()
        .document(DocumentPayload::from(&*document))
        .changed(changed)
        .build();

    Ok(Json(response))
}

#[tracing::instrument(skip_all)]
pub async fn notarize_document(
    State(app): State<App>,
    Json(payload): Json<NotarizeDocumentRequestPayload>,
) -> Result<Json<NotarizeDocumentResponsePayload>, AppError> {
    let AppDissolved { engine } = app.dissolve();

    let NotarizeDocumentRequestPayloadDissolved { document_id } = payload.dissolve();

    let request = NotarizeDocumentRequest::builder().document_id(document_id).build();

    let NotarizeDocumentResponseDissolved { document, changed } = engine
        .notarize_document(request)
        .await
        .inspect_err(|e| tracing::warn!("failed to notarize document: {e}"))?
        .dissolve();

    let response = NotarizeDocumentResponsePayload::builder()
        .document(DocumentPayload::from(&*document))
        .changed(changed)
        .build();

    Ok(Json(response))
}

#[tracing::instrument(skip_all)]
pub async fn list_awaiting_signature(
    State(app): State<App>,
    Json(payload): Json<ListAwaitingSignatureRequestPayload>,
) -> Result<Json<ListAwaitingSignatureResponsePayload>, AppError> {
    let AppDissolved { engine } = app.dissolve();

    let ListAwaitingSignatureRequestPayloadDissolved { signatory_id, company_id } =
        payload.dissolve();

    let request = ListAwaitingSignatureRequest::builder()
        .signatory_id(signatory_id)
        .maybe_company_id(company_id)
        .build();

    let ListAwaitingSignatureResponseDissolved { documents } =
        engine.list_awaiting_signature(request).await?.dissolve();

    let documents =
        documents.iter().map(|document| DocumentPayload::from(&**document)).collect_vec();

    let response = ListAwaitingSignatureResponsePayload::builder().documents(documents).build();

    Ok(Json(response))
}

#[tracing::instrument(skip_all)]
pub async fn get_document_stats(
    State(app): State<App>,
    Json(payload): Json<GetDocumentStatsRequestPayload>,
) -> Result<Json<GetDocumentStatsResponsePayload>, AppError> {
    let AppDissolved { engine } = app.dissolve();

    let GetDocumentStatsRequestPayloadDissolved { company_id } = payload.dissolve();

    let request = GetDocumentStatsRequest::builder().maybe_company_id(company_id).build();

    let GetDocumentStatsResponseDissolved { stats } =
        engine.get_document_stats(request).await?.dissolve();

    let response = GetDocumentStatsResponsePayload::builder().stats(stats.into()).build();

    Ok(Json(response))
}

#[tracing::instrument(skip_all)]
pub async fn list_actions(
    State(app): State<App>,
    Json(_): Json<ListActionsRequestPayload>,
) -> Result<Json<ListActionsResponsePayload>, AppError> {
    let AppDissolved { engine } = app.dissolve();

    let ListActionsResponseDissolved { actions } = engine.list_actions().await?.dissolve();

    let actions = actions.iter().map(|action| ComplianceAction::clone(action)).collect();

    Ok(Json(ListActionsResponsePayload::builder().actions(actions).build()))
}

fn new_signatory(payload: NewSignatoryPayload) -> Signatory {
    let NewSignatoryPayloadDissolved { id, name, initials, is_current_user } = payload.dissolve();

    let initials = initials.unwrap_or_else(|| {
        name.chars()
            .find(|c| c.is_alphanumeric())
            .into_iter()
            .flat_map(char::to_uppercase)
            .collect()
    });

    Signatory::builder()
        .id(id)
        .name(name)
        .initials(initials)
        .is_current_user(is_current_user)
        .build()
}
