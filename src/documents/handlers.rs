use actix_web::{
    http::header,
    web::{self, Json},
    HttpResponse, Responder,
};
use log::{error, info};

use crate::documents::models::{FormSubmission, GenerateResponse};
use crate::documents::{excel, word, DocumentError, DocumentKind};
use crate::state::AppState;
use crate::ErrorResponse;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/generate-word").route(web::post().to(generate_registration)),
    )
    .service(web::resource("/get-created-word").route(web::get().to(get_created_registration)))
    .service(web::resource("/generate-word2").route(web::post().to(generate_articles)))
    .service(web::resource("/get-created-word2").route(web::get().to(get_created_articles)))
    .service(web::resource("/generate-excel").route(web::post().to(generate_seal_register)))
    .service(web::resource("/get-created-excel").route(web::get().to(get_created_seal_register)));
}

/// Shared generation pipeline: resolve template, derive fields, fill,
/// deliver, acknowledge. The template is resolved before any external call
/// is made.
async fn generate_and_deliver(
    kind: DocumentKind,
    form: &FormSubmission,
    data: &AppState,
    ack: &str,
) -> HttpResponse {
    info!("Generating {:?} for company '{}'", kind, form.company_name);

    let template = match data.paths.resolve_template(kind) {
        Ok(path) => path,
        Err(e) => {
            error!("Template lookup failed for {:?}: {}", kind, e);
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error(&e.to_string()));
        }
    };

    let placeholders = match data.derive_fields(form, kind).await {
        Ok(map) => map,
        Err(e) => {
            error!("Field derivation failed for {:?}: {}", kind, e);
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error(&e.to_string()));
        }
    };

    let output = data.paths.output_path(kind);
    let filled = match kind {
        DocumentKind::SealRegistration => excel::fill_seal_form(&template, &output, &placeholders),
        _ => word::fill_word_template(&template, &output, &placeholders),
    };
    if let Err(e) = filled {
        error!("Template filling failed for {:?}: {}", kind, e);
        return HttpResponse::InternalServerError()
            .json(ErrorResponse::internal_error(&e.to_string()));
    }
    info!("Saved {:?} to {}", kind, output.display());

    // Delivery is best-effort: a Slack failure never fails the request.
    if let Err(e) = data.notifier.notify(kind.notification()).await {
        error!("Slack notification failed: {}", e);
    }
    if let Err(e) = data.notifier.upload(&output, kind.title()).await {
        error!("Slack file upload failed: {}", e);
    }

    HttpResponse::Ok().json(GenerateResponse {
        message: ack.to_string(),
    })
}

fn serve_generated(kind: DocumentKind, data: &AppState) -> HttpResponse {
    info!("Serving generated {:?}", kind);
    match data.paths.read_generated(kind) {
        Ok(bytes) => HttpResponse::Ok()
            .content_type(kind.mime_type())
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", kind.output_filename()),
            ))
            .body(bytes),
        Err(e @ DocumentError::OutputNotFound(_)) => {
            error!("No generated file for {:?}: {}", kind, e);
            HttpResponse::NotFound().json(ErrorResponse::not_found(&e.to_string()))
        }
        Err(e) => {
            error!("Failed to read generated file for {:?}: {}", kind, e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error(&e.to_string()))
        }
    }
}

#[utoipa::path(
    tag = "Document Service",
    post,
    path = "/generate-word",
    request_body = FormSubmission,
    responses(
        (status = 200, description = "Registration document generated", body = GenerateResponse),
        (status = 500, description = "Template missing or a derivation call failed", body = ErrorResponse)
    )
)]
pub async fn generate_registration(
    form: Json<FormSubmission>,
    data: web::Data<AppState>,
) -> impl Responder {
    generate_and_deliver(
        DocumentKind::Registration,
        &form.into_inner(),
        &data,
        "Word file generated",
    )
    .await
}

#[utoipa::path(
    tag = "Document Service",
    get,
    path = "/get-created-word",
    responses(
        (status = 200, description = "Generated registration document",
         content_type = "application/vnd.openxmlformats-officedocument.wordprocessingml.document", body = Vec<u8>),
        (status = 404, description = "No document generated yet", body = ErrorResponse)
    )
)]
pub async fn get_created_registration(data: web::Data<AppState>) -> impl Responder {
    serve_generated(DocumentKind::Registration, &data)
}

#[utoipa::path(
    tag = "Document Service",
    post,
    path = "/generate-word2",
    request_body = FormSubmission,
    responses(
        (status = 200, description = "Articles of incorporation generated", body = GenerateResponse),
        (status = 500, description = "Template missing or a derivation call failed", body = ErrorResponse)
    )
)]
pub async fn generate_articles(
    form: Json<FormSubmission>,
    data: web::Data<AppState>,
) -> impl Responder {
    generate_and_deliver(
        DocumentKind::Articles,
        &form.into_inner(),
        &data,
        "Word2 file generated",
    )
    .await
}

#[utoipa::path(
    tag = "Document Service",
    get,
    path = "/get-created-word2",
    responses(
        (status = 200, description = "Generated articles of incorporation",
         content_type = "application/vnd.openxmlformats-officedocument.wordprocessingml.document", body = Vec<u8>),
        (status = 404, description = "No document generated yet", body = ErrorResponse)
    )
)]
pub async fn get_created_articles(data: web::Data<AppState>) -> impl Responder {
    serve_generated(DocumentKind::Articles, &data)
}

#[utoipa::path(
    tag = "Document Service",
    post,
    path = "/generate-excel",
    request_body = FormSubmission,
    responses(
        (status = 200, description = "Seal registration spreadsheet generated", body = GenerateResponse),
        (status = 500, description = "Template missing or a derivation call failed", body = ErrorResponse)
    )
)]
pub async fn generate_seal_register(
    form: Json<FormSubmission>,
    data: web::Data<AppState>,
) -> impl Responder {
    generate_and_deliver(
        DocumentKind::SealRegistration,
        &form.into_inner(),
        &data,
        "Excel file successfully generated",
    )
    .await
}

#[utoipa::path(
    tag = "Document Service",
    get,
    path = "/get-created-excel",
    responses(
        (status = 200, description = "Generated seal registration spreadsheet",
         content_type = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet", body = Vec<u8>),
        (status = 404, description = "No spreadsheet generated yet", body = ErrorResponse)
    )
)]
pub async fn get_created_seal_register(data: web::Data<AppState>) -> impl Responder {
    serve_generated(DocumentKind::SealRegistration, &data)
}
