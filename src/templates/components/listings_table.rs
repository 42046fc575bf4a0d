// templates/components/listings_table.rs

use crate::domain::property::{status_badge_class, status_label, PropertyRecord, FIELD_COLUMNS};
use crate::domain::state::BoardView;
use maud::{html, Markup};

pub fn listings_table(view: &BoardView) -> Markup {
    html! {
        div class="table-wrap" {
            table class="listings" {
                thead {
                    tr {
                        @for (_, label) in &FIELD_COLUMNS {
                            th scope="col" { (label) }
                        }
                    }
                }
                tbody {
                    @if view.rows.is_empty() {
                        tr {
                            td class="empty-row" colspan=(FIELD_COLUMNS.len()) {
                                p { "No properties found" }
                                p class="muted" { "Try adjusting your search criteria" }
                            }
                        }
                    } @else {
                        @for row in &view.rows {
                            (listing_row(row))
                        }
                    }
                }
            }
        }
    }
}

fn listing_row(row: &PropertyRecord) -> Markup {
    html! {
        tr {
            @for (key, value) in row.fields() {
                @match (key, value) {
                    ("status", Some(code)) => {
                        td {
                            span class=(status_badge_class(code)) { (status_label(code)) }
                        }
                    }
                    (_, Some(text)) => {
                        td { (text) }
                    }
                    (_, None) => {
                        td class="placeholder" { "-" }
                    }
                }
            }
        }
    }
}
