// src/tests/router_tests/board_tests.rs

use crate::errors::AppError;
use crate::router::handle;
use crate::tests::utils::{body_string, generated_state, get, sample_state};

#[test]
fn board_lists_every_sample_property() {
    let state = sample_state();

    let mut resp = handle(get("/"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Naman Habitat"));
    assert!(body.contains("Alpine Primo"));
    assert!(body.contains("72 West"));

    // Status codes render through the lookup table, not as raw codes.
    assert!(body.contains("Ready to Move In"));
    assert!(body.contains("Under Construction"));
    assert!(body.contains("New Project"));
}

#[test]
fn fallback_mode_is_called_out_on_the_page() {
    let state = sample_state();

    let mut resp = handle(get("/"), &state).unwrap();
    let body = body_string(&mut resp);

    assert!(
        body.contains("Using sample data."),
        "Fallback notice missing from board page"
    );
}

#[test]
fn search_param_filters_the_table() {
    let state = sample_state();

    let mut resp = handle(get("/?q=uc"), &state).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Alpine Primo"));
    assert!(!body.contains("Naman Habitat"));
    assert!(!body.contains("72 West"));
}

#[test]
fn search_params_are_percent_decoded() {
    let state = sample_state();

    // "jp road, 2bhk" → the only JP Road 2bhk is Naman Habitat.
    let mut resp = handle(get("/?q=jp%20road%2C%202bhk"), &state).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Naman Habitat"));
    assert!(!body.contains("Alpine Primo"));
}

#[test]
fn page_param_paginates_when_not_searching() {
    // 25 records, default page size 10.
    let state = generated_state(25);

    let mut resp = handle(get("/?page=2"), &state).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Project 11"));
    assert!(!body.contains("Project 05"));
    assert!(body.contains("Showing <strong>11</strong> to <strong>20</strong> of <strong>25</strong> results"));
}

#[test]
fn out_of_range_page_clamps_to_the_last_page() {
    let state = generated_state(25);

    let mut resp = handle(get("/?page=999999"), &state).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Project 25"));
    assert!(body.contains("Showing <strong>21</strong> to <strong>25</strong> of <strong>25</strong> results"));
}

#[test]
fn active_search_shows_all_hits_on_one_page() {
    let state = generated_state(25);

    // Every generated record matches; single-page search mode must show
    // all of them and hide the pagination controls.
    let mut resp = handle(get("/?q=project&page=3"), &state).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Project 01"));
    assert!(body.contains("Project 25"));
    assert!(!body.contains("Showing"));
}

#[test]
fn table_fragment_is_served_without_the_layout() {
    let state = sample_state();

    let mut resp = handle(get("/board/table?q=rtmi"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Naman Habitat"));
    assert!(!body.contains("<!DOCTYPE"));
}

#[test]
fn stylesheet_route_serves_css() {
    let state = sample_state();

    let resp = handle(get("/static/main.css"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/css; charset=utf-8"
    );
}

#[test]
fn unknown_routes_are_not_found() {
    let state = sample_state();

    let err = handle(get("/nope"), &state).unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}
