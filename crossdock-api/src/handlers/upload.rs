use crate::dto::{FileErrorDto, FileResultDto, UploadResponse};
use crate::errors::{render_error, ApiError};
use crate::import::{import_workbooks, FileData};
use crate::storage::PgStorage;
use actix_multipart::Multipart;
use actix_web::{post, web, HttpRequest, HttpResponse};
use chrono::Utc;
use futures::StreamExt;

const MAX_UPLOAD_BYTES: usize = 32 << 20;

#[post("/upload")]
pub async fn upload(req: HttpRequest, mut payload: Multipart, storage: web::Data<PgStorage>) -> HttpResponse {
    let mut files = Vec::new();
    let mut file_errors = Vec::new();
    let mut processed = Vec::new();
    let mut received_bytes = 0usize;

    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(field) => field,
            Err(err) => return render_error(&req, &ApiError::bad_request(format!("malformed multipart payload: {err}"))),
        };

        if field.name() != "file" {
            continue;
        }

        let filename = field
            .content_disposition()
            .get_filename()
            .map(str::to_string)
            .unwrap_or_else(|| "unnamed".to_string());

        let mut content = Vec::new();
        let mut read_failed = false;
        while let Some(chunk) = field.next().await {
            match chunk {
                Ok(bytes) => {
                    received_bytes += bytes.len();
                    if received_bytes > MAX_UPLOAD_BYTES {
                        return render_error(&req, &ApiError::bad_request("upload exceeds the 32 MiB limit"));
                    }
                    content.extend_from_slice(&bytes);
                }
                Err(err) => {
                    tracing::warn!(filename = %filename, error = %err, "error reading uploaded file");
                    file_errors
                        .push(FileErrorDto { name: filename.clone(), error: format!("failed to read file: {err}") });
                    read_failed = true;
                    break;
                }
            }
        }
        if read_failed {
            continue;
        }

        processed.push(FileResultDto {
            name: filename.clone(),
            size_bytes: content.len() as i64,
            processed_at: Utc::now().to_rfc3339(),
        });
        files.push(FileData { name: filename, content });
    }

    if files.is_empty() {
        tracing::warn!("no files with key 'file' received in form");
        return HttpResponse::BadRequest().json(UploadResponse {
            success: false,
            message: "No files received or all files were invalid (expected key 'file')".to_string(),
            processed: vec![],
            errors: file_errors,
        });
    }

    match import_workbooks(storage.get_ref(), &files).await {
        Ok(()) => {
            tracing::info!(file_count = files.len(), "files imported successfully");
            HttpResponse::Ok().json(UploadResponse {
                success: true,
                message: format!("Successfully imported {} file(s)", files.len()),
                processed,
                errors: file_errors,
            })
        }
        Err(error) => render_error(&req, &error),
    }
}
