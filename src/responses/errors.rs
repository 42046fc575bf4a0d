use crate::errors::AppError;
use astra::{Body, Response, ResponseBuilder};

pub type ResultResp = Result<Response, AppError>;

/// Convert an AppError into a proper HTML response
pub fn error_to_response(err: AppError) -> Response {
    match err {
        AppError::NotFound => html_error_response(404, "Not Found"),
        AppError::DataError(msg) => html_error_response(500, &msg),
        AppError::InternalError => html_error_response(500, "Internal Server Error"),
    }
}

/// Build an HTML error page
pub fn html_error_response(status: u16, message: &str) -> Response {
    let html = format!(
        "<!DOCTYPE html>
        <html lang=\"en\">
        <head><meta charset=\"utf-8\"><title>Error {status}</title></head>
        <body>
            <h1>Error {status}</h1>
            <p>{message}</p>
        </body>
        </html>"
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(html))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error".to_string())))
}
