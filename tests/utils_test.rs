use sporlapi::utils::*;

#[test]
fn test_parse_item_id() {
    assert_eq!(parse_item_id("1"), Some(1));
    assert_eq!(parse_item_id("0042"), Some(42));

    // Anything that is not a plain number matches no item
    assert_eq!(parse_item_id(""), None);
    assert_eq!(parse_item_id("abc"), None);
    assert_eq!(parse_item_id("12abc"), None);
    assert_eq!(parse_item_id("-1"), None);
    assert_eq!(parse_item_id("+1"), None);
    assert_eq!(parse_item_id("1.5"), None);
    assert_eq!(parse_item_id(" 1"), None);

    // Overflowing u64 is not an identifier either
    assert_eq!(parse_item_id("99999999999999999999999"), None);
}

#[test]
fn test_sanitize_fields_drops_id() {
    let fields = serde_json::json!({"id": 7, "title": "A"});
    let fields = sanitize_fields(fields.as_object().unwrap().clone());

    assert!(fields.get("id").is_none());
    assert_eq!(fields["title"], "A");
}

#[test]
fn test_basic_auth_header() {
    assert_eq!(
        basic_auth_header("client", "secret"),
        "Basic Y2xpZW50OnNlY3JldA=="
    );

    // Empty credentials still produce a well-formed header
    assert_eq!(basic_auth_header("", ""), "Basic Og==");
}

#[test]
fn test_encode_query() {
    let query = encode_query(&[
        ("scope", "user-read-private user-read-email"),
        ("redirect_uri", "http://localhost:888/callback"),
    ]);

    assert_eq!(
        query,
        "scope=user-read-private%20user-read-email&redirect_uri=http%3A%2F%2Flocalhost%3A888%2Fcallback"
    );
    assert!(!query.contains('+'));
}

#[test]
fn test_append_query() {
    assert_eq!(
        append_query("http://localhost:3000/playlist", "access_token=t"),
        "http://localhost:3000/playlist?access_token=t"
    );
    assert_eq!(
        append_query("http://localhost:3000/playlist?tab=1", "access_token=t"),
        "http://localhost:3000/playlist?tab=1&access_token=t"
    );
}

#[test]
fn test_random_item_fields() {
    let mut rng = rand::rng();
    let fields = random_item_fields(&mut rng);

    assert!(fields["title"].is_string());
    assert!(fields["artist"].is_string());
    assert!(fields["year"].is_u64());

    // addedAt is a YYYY-MM-DD date
    let added_at = fields["addedAt"].as_str().unwrap();
    assert!(chrono::NaiveDate::parse_from_str(added_at, "%Y-%m-%d").is_ok());

    // Generated data never claims an identifier
    assert!(fields.get("id").is_none());
}
