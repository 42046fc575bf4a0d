use crate::config::Config;
use crate::data::source::LoadedProperties;
use crate::domain::state::{BoardState, BoardView, SearchPaging};
use crate::errors::AppError;
use crate::responses::{css_response, html_response, ResultResp};
use crate::templates;
use astra::Request;
use std::collections::HashMap;
use std::sync::Arc;
use url::form_urlencoded;

/// Everything a request handler needs: the immutable dataset plus the
/// display settings resolved at startup.
#[derive(Clone)]
pub struct AppState {
    pub data: Arc<LoadedProperties>,
    pub page_size: usize,
    pub search_paging: SearchPaging,
}

impl AppState {
    pub fn new(data: LoadedProperties, config: &Config) -> Self {
        Self {
            data: Arc::new(data),
            page_size: config.page_size,
            search_paging: config.search_paging,
        }
    }
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => {
            let view = board_view(&req, state);
            html_response(templates::pages::board_page(&view))
        }

        // Table + pagination fragment, re-fetched by the search input.
        ("GET", "/board/table") => {
            let view = board_view(&req, state);
            html_response(templates::pages::board_results(&view))
        }

        ("GET", "/static/main.css") => css_response(include_str!("../static/main.css")),

        _ => Err(AppError::NotFound),
    }
}

/// Build the render snapshot for a request: one owned board state, fed the
/// `q` and `page` parameters, then collapsed into a view.
fn board_view(req: &Request, state: &AppState) -> BoardView {
    let params = parse_query(req);

    let mut board = BoardState::new(
        &state.data.records,
        state.data.fallback,
        state.page_size,
        state.search_paging,
    );
    if let Some(query) = params.get("q") {
        board.set_query(query);
    }
    if let Some(page) = params.get("page").and_then(|raw| raw.parse().ok()) {
        board.set_page(page);
    }

    board.view()
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    let raw = req.uri().query().unwrap_or("");
    form_urlencoded::parse(raw.as_bytes()).into_owned().collect()
}
