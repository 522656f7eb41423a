use webserv::http::request::Method;

#[test]
fn test_method_is_case_sensitive() {
    assert_eq!(Method::from("GET"), Method::GET);
    assert_eq!(Method::from("Get"), Method::Other("Get".to_string()));
}

#[test]
fn test_method_display_round_trips_token() {
    assert_eq!(Method::PATCH.to_string(), "PATCH");
    assert_eq!(Method::Other("PROPFIND".to_string()).to_string(), "PROPFIND");
}
