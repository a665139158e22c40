use waymark::{decoders, full_splat, lit, route, trailing_slash, uri, var, Decoder, Router};

#[test]
fn the_macro_and_the_constructors_agree() {
    let by_macro = Router::build([
        route(uri!(/ "home" / :int /), |id: i64| id),
        route(uri!(/ "home" / * / **), |_: String| -1),
        route(uri!(/), || 0),
    ])
    .unwrap();
    let by_hand = Router::build([
        route(
            lit("home", var(decoders::int(), trailing_slash())),
            |id: i64| id,
        ),
        route(lit("home", waymark::wildcard(full_splat())), |_: String| -1),
        route(trailing_slash(), || 0),
    ])
    .unwrap();

    for uri in ["/home/3/", "/home/3", "/home/x/anything", "/", "", "/x"] {
        assert_eq!(by_macro.dispatch(uri), by_hand.dispatch(uri), "for {uri:?}");
    }
}

#[test]
fn a_wildcard_is_a_string_variable() {
    let router = Router::build([route(uri!(/ *), |token: String| token)]).unwrap();
    assert_eq!(router.dispatch("/anything").as_deref(), Some("anything"));
    assert_eq!(router.dispatch("/anything/more"), None);
}

#[test]
fn int64_shares_its_edge_with_int() {
    // same canonical decoder, so the second route lands in the same trie
    // slot and replaces the first
    let router = Router::build([
        route(uri!(/ :int), |n: i64| format!("int {n}")),
        route(uri!(/ :int64), |n: i64| format!("int64 {n}")),
    ])
    .unwrap();
    assert_eq!(router.dispatch("/9").as_deref(), Some("int64 9"));
}

#[test]
fn int32_is_its_own_decoder() {
    let router = Router::build([route(uri!(/ :int32), |n: i32| i64::from(n))]).unwrap();
    assert_eq!(router.dispatch("/250000"), Some(250_000));
    assert_eq!(router.dispatch("/9999999999"), None);
}

#[test]
fn custom_decoder_expressions() {
    let hex = Decoder::new("hex", |token| u32::from_str_radix(token, 16).ok());
    let router = Router::build([route(uri!(/ "color" / [hex] /), |rgb: u32| rgb)]).unwrap();
    assert_eq!(router.dispatch("/color/ff8800/"), Some(0x00ff_8800));
    assert_eq!(router.dispatch("/color/chartreuse/"), None);
}

#[test]
fn the_empty_specification_is_the_bare_terminator() {
    // uri!() is End: it matches an empty token stream, which "/" does not
    // produce (the terminating slash leaves an empty token behind)
    let router = Router::build([route(uri!(), || "root")]).unwrap();
    assert_eq!(router.dispatch("/"), None);

    let slash = Router::build([route(uri!(/), || "slash")]).unwrap();
    assert_eq!(slash.dispatch("/"), Some("slash"));
    assert_eq!(slash.dispatch(""), None);
    assert_eq!(slash.dispatch("/x"), None);
}

#[test]
fn shapes_compose_past_query_pairs() {
    let router = Router::build([route(
        uri!(/ "report" / :int ? "format" = "csv" & "full"),
        |year: i64| year,
    )])
    .unwrap();
    assert_eq!(router.dispatch("/report/2024?format=csv&full"), Some(2024));
    assert_eq!(router.dispatch("/report/2024?format=csv"), None);
}
