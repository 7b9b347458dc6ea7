use super::*;
use std::borrow::Cow;

const MAIN: &str = "/main";

#[test]
fn test_root_pattern() {
    let pattern = RoutePattern::parse("").unwrap();
    assert!(pattern.is_root());
    assert_eq!(pattern.segment_count(), 0);
    assert_eq!(pattern.to_string(), "''");
}

#[test]
fn test_parameterized_pattern() {
    let pattern = RoutePattern::parse(":traceId/:focusTimestamp").unwrap();
    assert_eq!(
        pattern.param_ids().collect::<Vec<_>>(),
        vec![ParamId::TraceId, ParamId::FocusTimestamp]
    );
    assert_eq!(pattern.to_string(), ":traceId/:focusTimestamp");
}

#[test]
fn test_pattern_rejects_unknown_param() {
    let err = RoutePattern::parse(":traceId/:userId").unwrap_err();
    assert_eq!(err, UnknownParam("userId".to_string()));
}

#[test]
fn test_literal_segment_must_match_exactly() {
    let pattern = RoutePattern::parse("search/:application").unwrap();
    assert!(pattern.capture(&["search", "app1"]).is_some());
    assert!(pattern.capture(&["find", "app1"]).is_none());
    assert!(pattern.capture(&["search"]).is_none());
}

#[test]
fn test_candidate_strips_query_fragment_and_slashes() {
    let candidate = Candidate::parse("/t1/1000/?foo=bar#frag").unwrap();
    let segments: Vec<&str> = candidate.segments().iter().map(|s| &**s).collect();
    assert_eq!(segments, vec!["t1", "1000"]);
}

#[test]
fn test_candidate_decodes_segments() {
    let candidate = Candidate::parse("app%40TOMCAT/5m").unwrap();
    assert_eq!(candidate.segments()[0], Cow::Borrowed("app@TOMCAT"));
    assert!(matches!(candidate.segments()[0], Cow::Owned(_)));
}

#[test]
fn test_candidate_rejects_empty_interior_segment() {
    assert!(Candidate::parse("t1//a1").is_none());
}

#[test]
fn test_candidate_empty_path() {
    assert!(Candidate::parse("").unwrap().is_empty());
    assert!(Candidate::parse("/").unwrap().is_empty());
    assert!(Candidate::parse("?x=1").unwrap().is_empty());
}

#[test]
fn test_detail_table_shape() {
    let table = RouteTable::transaction_detail("transactionDetail", MAIN).unwrap();
    let counts: Vec<usize> = table
        .entries()
        .iter()
        .map(|e| e.pattern.segment_count())
        .collect();
    assert_eq!(counts, vec![6, 5, 4, 3, 2, 1, 0]);
    assert_eq!(table.max_segments(), 6);
    assert!(table.resolves_configuration());
    assert_eq!(table.page(), ViewId::TransactionDetailPage);
}

#[test]
fn test_list_table_shape() {
    let table = RouteTable::transaction_list("transactionList", MAIN).unwrap();
    let actions: Vec<Option<ViewId>> = table.entries().iter().map(|e| e.view()).collect();
    assert_eq!(
        actions,
        vec![
            Some(ViewId::TransactionListBottomContents),
            Some(ViewId::TransactionListBottomContents),
            Some(ViewId::TransactionListEmpty),
            None,
            None,
            None,
        ]
    );
}

#[test]
fn test_builder_rejects_duplicate_segment_count() {
    let err = RouteTable::builder("dup", ViewId::TransactionListPage)
        .landing_path(MAIN)
        .render(
            RoutePattern::params(&[ParamId::Application]),
            ViewId::TransactionListEmpty,
        )
        .redirect(RoutePattern::params(&[ParamId::Period]), MAIN)
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        TableError::DuplicateSegmentCount { count: 1, .. }
    ));
}

#[test]
fn test_builder_rejects_foreign_redirect_target() {
    let err = RouteTable::builder("bad", ViewId::TransactionListPage)
        .landing_path(MAIN)
        .redirect(RoutePattern::root(), "/elsewhere")
        .build()
        .unwrap_err();
    assert!(matches!(err, TableError::RedirectTarget { .. }));
}

#[test]
fn test_builder_rejects_partial_redirect() {
    let entry = RouteEntry {
        pattern: RoutePattern::root(),
        action: RouteAction::Redirect {
            to: MAIN.into(),
            full_match: false,
        },
    };
    let err = RouteTable::builder("partial", ViewId::TransactionListPage)
        .landing_path(MAIN)
        .entry(entry)
        .build()
        .unwrap_err();
    assert!(matches!(err, TableError::PartialRedirect { .. }));
}

#[test]
fn test_builder_rejects_empty_table() {
    let err = RouteTable::builder("empty", ViewId::TransactionListPage)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        TableError::Empty {
            table: "empty".to_string()
        }
    );
}

#[test]
fn test_match_keeps_param_order() {
    let table = RouteTable::transaction_list("transactionList", MAIN).unwrap();
    let m = table
        .match_segments(&["app1", "5m", "99999", "info", "callTree"])
        .unwrap();
    let ids: Vec<ParamId> = m.params.iter().map(|(id, _)| *id).collect();
    assert_eq!(
        ids,
        vec![
            ParamId::Application,
            ParamId::Period,
            ParamId::EndTime,
            ParamId::TransactionInfo,
            ParamId::ViewType,
        ]
    );
    assert_eq!(&*m.table, "transactionList");
}
