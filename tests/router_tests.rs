use std::path::Path;

use covid_dash_rs::Route;
use covid_dash_rs::router::render;

#[test]
fn known_paths_resolve_to_their_pages() {
    assert_eq!(Route::from_path("/apps/arxiki"), Route::Overview);
    assert_eq!(Route::from_path("/apps/pandimia"), Route::Timeline);
    assert_eq!(Route::from_path("/apps/oikonomia"), Route::Economy);
    assert_eq!(Route::from_path("/apps/koinwnia"), Route::Society);
}

#[test]
fn unknown_and_root_paths_fall_back_to_the_overview() {
    assert_eq!(Route::from_path("/unknown"), Route::Overview);
    assert_eq!(Route::from_path(""), Route::Overview);
    assert_eq!(Route::from_path("/"), Route::Overview);
}

#[test]
fn route_paths_round_trip() {
    for route in [
        Route::Overview,
        Route::Timeline,
        Route::Economy,
        Route::Society,
    ] {
        assert_eq!(Route::from_path(route.path()), route);
    }
}

#[test]
fn render_is_total_even_without_datasets() {
    // A page whose datasets are unreadable still renders its static text.
    let page = render("/apps/oikonomia", Path::new("/no/such/dir"));
    assert_eq!(page.chart_count(), 0);
    assert!(!page.blocks.is_empty());
}
