// templates/components/pagination.rs

use crate::domain::state::BoardView;
use maud::{html, Markup};
use url::form_urlencoded;

/// Page numbers shown at most; mirrors the previous/next buttons otherwise.
const MAX_PAGE_LINKS: usize = 5;

/// Previous/next/page-number controls. Hidden entirely while everything
/// fits on one page (which includes single-page search mode).
pub fn pagination_nav(view: &BoardView) -> Markup {
    if view.total_pages <= 1 {
        return html! {};
    }

    html! {
        nav class="pagination" aria-label="Pagination" {
            p class="muted" {
                "Showing " strong { (view.start_index) }
                " to " strong { (view.end_index) }
                " of " strong { (view.total_filtered) } " results"
            }
            div class="page-links" {
                @if view.current_page > 1 {
                    a class="page-link" href=(page_href(view, view.current_page - 1)) { "Previous" }
                } @else {
                    span class="page-link disabled" { "Previous" }
                }

                @for page in 1..=view.total_pages.min(MAX_PAGE_LINKS) {
                    @if page == view.current_page {
                        span class="page-link current" aria-current="page" { (page) }
                    } @else {
                        a class="page-link" href=(page_href(view, page)) { (page) }
                    }
                }

                @if view.current_page < view.total_pages {
                    a class="page-link" href=(page_href(view, view.current_page + 1)) { "Next" }
                } @else {
                    span class="page-link disabled" { "Next" }
                }
            }
        }
    }
}

/// Link to `page`, preserving the active query.
fn page_href(view: &BoardView, page: usize) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if !view.query.is_empty() {
        query.append_pair("q", &view.query);
    }
    query.append_pair("page", &page.to_string());
    format!("/?{}", query.finish())
}
