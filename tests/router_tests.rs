mod common;

use common::default_router;
use txroute::router::{ParamId, Resolution, Router, TableKind, ViewId};

const MAIN: &str = "/main";

enum Expect {
    Render(ViewId),
    Redirect,
    NotFound,
}

fn assert_resolution(resolution: &Resolution, path: &str, expected: Expect) {
    match (resolution, expected) {
        (Resolution::Render(m), Expect::Render(view)) => {
            println!("✅ {path} → {view}");
            assert_eq!(m.view(), Some(view), "view mismatch for {path}");
            assert!(!m.is_redirect());
        }
        (Resolution::Redirect(m), Expect::Redirect) => {
            println!("✅ {path} → redirect {MAIN}");
            assert_eq!(m.redirect_target(), Some(MAIN), "redirect target for {path}");
        }
        (Resolution::NotFound, Expect::NotFound) => {
            println!("✅ {path} → no match");
        }
        (other, _) => panic!("unexpected resolution for '{path}': {other:?}"),
    }
}

fn segments(n: usize) -> String {
    (0..n).map(|i| format!("s{i}")).collect::<Vec<_>>().join("/")
}

#[test]
fn test_detail_four_segments_renders_with_params() {
    let router = default_router();
    let resolution = router.resolve_in(TableKind::TransactionDetail, "t1/1000/a1/s1");
    assert_resolution(
        &resolution,
        "t1/1000/a1/s1",
        Expect::Render(ViewId::TransactionDetailContents),
    );

    let m = resolution.route_match().unwrap();
    assert_eq!(m.get_param(ParamId::TraceId), Some("t1"));
    assert_eq!(m.get_param(ParamId::FocusTimestamp), Some("1000"));
    assert_eq!(m.get_param(ParamId::AgentId), Some("a1"));
    assert_eq!(m.get_param(ParamId::SpanId), Some("s1"));
    assert_eq!(m.get_param(ParamId::ViewType), None);
    assert_eq!(m.page, ViewId::TransactionDetailPage);
}

#[test]
fn test_detail_two_segments_redirects() {
    let router = default_router();
    assert_resolution(
        &router.resolve_in(TableKind::TransactionDetail, "t1/1000"),
        "t1/1000",
        Expect::Redirect,
    );
}

#[test]
fn test_list_three_segments_renders_empty_state() {
    let router = default_router();
    assert_resolution(
        &router.resolve_in(TableKind::TransactionList, "app1/5m/99999"),
        "app1/5m/99999",
        Expect::Render(ViewId::TransactionListEmpty),
    );
}

#[test]
fn test_empty_path_redirects_in_both_tables() {
    let router = default_router();
    for kind in [TableKind::TransactionDetail, TableKind::TransactionList] {
        assert_resolution(&router.resolve_in(kind, ""), "''", Expect::Redirect);
        assert_resolution(&router.resolve_in(kind, "/"), "/", Expect::Redirect);
    }
    assert_resolution(&router.resolve("/transactionDetail"), "/transactionDetail", Expect::Redirect);
    assert_resolution(&router.resolve("/transactionList/"), "/transactionList/", Expect::Redirect);
}

#[test]
fn test_detail_segment_counts() {
    let router = default_router();
    for n in 0..=7 {
        let path = segments(n);
        let expected = match n {
            4..=6 => Expect::Render(ViewId::TransactionDetailContents),
            0..=3 => Expect::Redirect,
            _ => Expect::NotFound,
        };
        assert_resolution(&router.resolve_in(TableKind::TransactionDetail, &path), &path, expected);
    }
}

#[test]
fn test_list_segment_counts() {
    let router = default_router();
    for n in 0..=6 {
        let path = segments(n);
        let expected = match n {
            4 | 5 => Expect::Render(ViewId::TransactionListBottomContents),
            3 => Expect::Render(ViewId::TransactionListEmpty),
            0..=2 => Expect::Redirect,
            _ => Expect::NotFound,
        };
        assert_resolution(&router.resolve_in(TableKind::TransactionList, &path), &path, expected);
    }
}

#[test]
fn test_full_detail_path_captures_all_slots() {
    let router = default_router();
    let resolution = router.resolve("/transactionDetail/t1/1000/a1/s1/callTree/q9?x=1#top");
    let m = resolution.route_match().expect("detail match");
    assert_eq!(m.view(), Some(ViewId::TransactionDetailContents));
    assert_eq!(m.get_param(ParamId::ViewType), Some("callTree"));
    assert_eq!(m.get_param(ParamId::SearchId), Some("q9"));
    assert_eq!(m.params.len(), 6);
}

#[test]
fn test_percent_encoded_application_is_decoded() {
    let router = default_router();
    let resolution = router.resolve("/transactionList/api%40SPRING_BOOT/1h/1700000000000/info");
    let m = resolution.route_match().expect("list match");
    assert_eq!(m.get_param(ParamId::Application), Some("api@SPRING_BOOT"));
    assert_eq!(m.view(), Some(ViewId::TransactionListBottomContents));
}

#[test]
fn test_unknown_mount_and_malformed_paths_not_found() {
    let router = default_router();
    assert_resolution(&router.resolve("/main"), "/main", Expect::NotFound);
    assert_resolution(&router.resolve(""), "''", Expect::NotFound);
    assert_resolution(
        &router.resolve("/transactionDetail/t1//a1/s1"),
        "/transactionDetail/t1//a1/s1",
        Expect::NotFound,
    );
    assert_resolution(
        &router.resolve("/transactionList/app%FF/5m/1"),
        "/transactionList/app%FF/5m/1",
        Expect::NotFound,
    );
}

#[test]
fn test_custom_mounts_and_landing_path() {
    let config = txroute::config::RouterConfig {
        landing_path: "/home".to_string(),
        detail: txroute::config::TableConfig {
            mount: "detail".to_string(),
        },
        ..Default::default()
    };
    let router = Router::new(&config).unwrap();

    let resolution = router.resolve("/detail/t1");
    assert_eq!(
        resolution.route_match().and_then(|m| m.redirect_target()),
        Some("/home")
    );
    assert!(router.resolve("/transactionDetail/t1/1000/a1/s1").is_not_found());
    assert_eq!(router.landing_path(), "/home");
}

#[test]
fn test_path_patterns_listing() {
    let router = default_router();
    let patterns = router.path_patterns();
    assert_eq!(patterns.len(), 13);
    assert_eq!(
        patterns[0],
        "/transactionDetail/:traceId/:focusTimestamp/:agentId/:spanId/:viewType/:searchId"
    );
    assert!(patterns.contains(&"/transactionList".to_string()));
    assert!(patterns.contains(&"/transactionList/:application/:period/:endTime".to_string()));
}
