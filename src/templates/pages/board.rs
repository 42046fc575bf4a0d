// templates/pages/board.rs

use crate::domain::state::BoardView;
use crate::templates::components::{listings_table, pagination_nav, search_bar};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn board_page(view: &BoardView) -> Markup {
    desktop_layout(
        "Andheri West Properties",
        html! {
            main class="container" {
                div class="page-heading" {
                    h1 { "Andheri West Properties" }
                    p class="subtitle" { "Search and browse real estate listings in Andheri West" }

                    @if view.fallback {
                        div class="notice notice-warning" {
                            strong { "Using sample data." }
                            " Unable to load the property dataset; showing a limited built-in sample."
                        }
                    }

                    p class="muted" {
                        "Loaded " (view.total_loaded) " properties"
                        @if view.fallback { " (sample data)" }
                    }
                }

                (search_bar(view))

                div id="board-results" {
                    (board_results(view))
                }
            }
        },
    )
}

/// Table plus pagination controls. Served inside the full page and on its
/// own as the fragment the search input swaps in.
pub fn board_results(view: &BoardView) -> Markup {
    html! {
        (listings_table(view))
        (pagination_nav(view))
    }
}
