//! Tests for the routing system
//!
//! Validates route definitions, path recognition, and the navigation
//! metadata the sidebar is built from.

use strum::IntoEnumIterator;
use yew_router::Routable;

use crate::routes::MainRoute;

/// Tests route enum variants
#[test]
fn test_route_variants() {
    let home = MainRoute::Home;
    let login = MainRoute::Login;
    let detail = MainRoute::ProjectDetail {
        id: "42".to_string(),
    };

    assert!(format!("{home:?}").contains("Home"));
    assert!(format!("{login:?}").contains("Login"));
    assert!(format!("{detail:?}").contains("ProjectDetail"));
}

/// Tests route equality
#[test]
fn test_route_equality() {
    assert_eq!(MainRoute::Home, MainRoute::Home);

    let detail1 = MainRoute::ProjectDetail {
        id: "42".to_string(),
    };
    let detail2 = MainRoute::ProjectDetail {
        id: "42".to_string(),
    };
    let detail3 = MainRoute::ProjectDetail {
        id: "43".to_string(),
    };
    assert_eq!(detail1, detail2);
    assert_ne!(detail1, detail3);
}

/// Tests path rendering
#[test]
fn test_route_paths() {
    assert_eq!(MainRoute::Home.to_path(), "/");
    assert_eq!(MainRoute::Login.to_path(), "/login");
    assert_eq!(MainRoute::Register.to_path(), "/register");
    assert_eq!(MainRoute::Projects.to_path(), "/projects");
    assert_eq!(MainRoute::Settings.to_path(), "/settings");
    assert_eq!(
        MainRoute::ProjectDetail {
            id: "42".to_string()
        }
        .to_path(),
        "/projects/42"
    );
}

/// Tests path recognition
#[test]
fn test_route_recognition() {
    assert_eq!(MainRoute::recognize("/"), Some(MainRoute::Home));
    assert_eq!(MainRoute::recognize("/login"), Some(MainRoute::Login));
    assert_eq!(
        MainRoute::recognize("/projects/42"),
        Some(MainRoute::ProjectDetail {
            id: "42".to_string()
        })
    );
    assert_eq!(
        MainRoute::recognize("/no/such/page"),
        Some(MainRoute::NotFound)
    );
}

/// Tests sidebar navigation metadata
#[test]
fn test_nav_labels() {
    assert_eq!(MainRoute::Home.nav_label(), Some("Dashboard"));
    assert_eq!(MainRoute::Projects.nav_label(), Some("Projects"));
    assert_eq!(MainRoute::Settings.nav_label(), Some("Settings"));

    // Auth surfaces and error pages never show up in the sidebar.
    assert_eq!(MainRoute::Login.nav_label(), None);
    assert_eq!(MainRoute::Register.nav_label(), None);
    assert_eq!(MainRoute::NotFound.nav_label(), None);

    let labelled = MainRoute::iter()
        .filter(|route| route.nav_label().is_some())
        .count();
    assert_eq!(labelled, 3);
}
