// templates/components/search_bar.rs

use crate::domain::state::BoardView;
use maud::{html, Markup};

/// Search input plus the result summary underneath it.
///
/// Works as a plain GET form; the htmx attributes only add live filtering
/// by re-fetching the table fragment as the user types.
pub fn search_bar(view: &BoardView) -> Markup {
    let searching = !view.terms.is_empty();
    let has_results = view.total_filtered > 0;

    html! {
        div class="search-panel" {
            form action="/" method="get" {
                input
                    type="search"
                    name="q"
                    value=(view.query)
                    placeholder="Search multiple terms: e.g. 'SV road, 2 bhk, gym'"
                    aria-label="Search properties"
                    hx-get="/board/table"
                    hx-trigger="input changed delay:300ms, search"
                    hx-target="#board-results"
                    hx-swap="innerHTML";
                @if searching {
                    a class="clear-link" href="/" { "Clear" }
                }
            }

            div class="search-summary" {
                @if searching {
                    span {
                        strong { (view.total_filtered) } " of "
                        strong { (view.total_loaded) } " records"
                    }
                    span class=(if has_results { "chip chip-blue" } else { "chip chip-red" }) {
                        @if has_results { "Filtered" } @else { "No matches" }
                    }
                    span class="terms" {
                        "Terms:"
                        @for term in &view.terms {
                            span class="chip chip-term" { (term) }
                        }
                    }
                } @else {
                    span { strong { (view.total_loaded) } " total records" }
                }
            }

            @if searching && !has_results {
                div class="empty-state" {
                    p { strong { "No properties found" } }
                    p class="muted" { "Try adjusting your search terms or browse all listings" }
                }
            } @else if !searching {
                p class="muted search-tips" {
                    "Use spaces or commas to search several criteria at once. Status shortcuts: "
                    code { "uc" } " = Under Construction, "
                    code { "rtmi" } " = Ready to Move In, "
                    code { "np" } " = Nearing Possession."
                }
            }
        }
    }
}
