//! Tests for command identifier lookup and dispatch

use pretty_assertions::assert_eq;
use rstest::rstest;
use snap_parsers::{HttpdSettings, InspectKind, Parsed, ParserKind, Registry, builtins};
use snap_test_utils::context_wrap;
use snap_test_utils::fixtures::{
    DOCKER_IMAGE_INSPECT, HTTPD_MAIN_WITH_INCLUDE, IP6TABLES_SAVE, IPTABLES_SAVE,
};

#[test]
fn test_builtin_specs_sorted() {
    assert_eq!(
        builtins().list_specs(),
        [
            "docker_container_inspect",
            "docker_image_inspect",
            "httpd_conf",
            "ip6tables",
            "ip6tables_permanent",
            "iptables",
            "iptables_permanent",
        ]
    );
}

#[rstest]
#[case("httpd_conf", ParserKind::HttpdConf)]
#[case("docker_image_inspect", ParserKind::DockerInspect(InspectKind::Image))]
#[case("docker_container_inspect", ParserKind::DockerInspect(InspectKind::Container))]
#[case("iptables", ParserKind::IpTables)]
#[case("ip6tables", ParserKind::IpTables)]
#[case("iptables_permanent", ParserKind::IpTables)]
#[case("ip6tables_permanent", ParserKind::IpTables)]
fn test_builtin_lookup(#[case] spec: &str, #[case] expected: ParserKind) {
    assert!(builtins().has_parser(spec));
    assert_eq!(builtins().get_parser(spec), Some(expected));
}

#[test]
fn test_unknown_spec() {
    assert!(!builtins().has_parser("httpd_conf_d"));
    assert_eq!(builtins().get_parser("httpd_conf_d"), None);
}

#[test]
fn test_parse_dispatches_to_httpd() {
    let ctx = context_wrap(HTTPD_MAIN_WITH_INCLUDE, Some("/etc/httpd/conf/httpd.conf"));
    let parsed = builtins()
        .parse("httpd_conf", &ctx, &HttpdSettings::default())
        .unwrap();

    let conf = parsed.into_httpd_conf().unwrap();
    assert_eq!(conf.file_name(), Some("httpd.conf"));
    assert!(conf.tail().contains_directive("ServerTokens"));
}

#[test]
fn test_parse_dispatches_to_docker_image() {
    let ctx = context_wrap(DOCKER_IMAGE_INSPECT, None);
    let parsed = builtins()
        .parse("docker_image_inspect", &ctx, &HttpdSettings::default())
        .unwrap();

    assert_eq!(parsed.kind(), ParserKind::DockerInspect(InspectKind::Image));
    assert_eq!(parsed.as_docker_inspect().unwrap()["Size"], 580094174u64);
}

#[rstest]
#[case("iptables", IPTABLES_SAVE, 10)]
#[case("ip6tables_permanent", IP6TABLES_SAVE, 14)]
fn test_parse_dispatches_to_iptables(
    #[case] spec: &str,
    #[case] content: &str,
    #[case] rules: usize,
) {
    let parsed = builtins()
        .parse(spec, &context_wrap(content, None), &HttpdSettings::default())
        .unwrap();
    assert!(matches!(&parsed, Parsed::IpTables(t) if t.rules().len() == rules));
}

#[test]
fn test_settings_reach_httpd_parser() {
    let settings = HttpdSettings {
        split_directive: "Include".into(),
        split_value: "conf.modules.d/*.conf".into(),
        ..HttpdSettings::default()
    };
    let parsed = builtins()
        .parse("httpd_conf", &context_wrap(HTTPD_MAIN_WITH_INCLUDE, None), &settings)
        .unwrap();
    let conf = parsed.as_httpd_conf().unwrap();
    assert!(conf.tail().contains_directive("User"));
}

#[test]
fn test_custom_registration() {
    let mut registry = Registry::new();
    registry.register("apache2_conf", ParserKind::HttpdConf);

    assert_eq!(registry.list_specs(), ["apache2_conf"]);
    let parsed = registry
        .parse(
            "apache2_conf",
            &context_wrap("Listen 80", None),
            &HttpdSettings::default(),
        )
        .unwrap();
    assert_eq!(parsed.kind().name(), "HttpdConf");
    assert!(registry.parse("httpd_conf", &context_wrap("", None), &HttpdSettings::default()).is_none());
}

#[test]
fn test_parsed_serializes_with_parser_tag() {
    let parsed = builtins()
        .parse(
            "iptables",
            &context_wrap("*filter\n:INPUT ACCEPT [0:0]\nCOMMIT", None),
            &HttpdSettings::default(),
        )
        .unwrap();
    let value = serde_json::to_value(&parsed).unwrap();
    assert_eq!(value["parser"], "ip_tables");
    assert_eq!(value["data"]["chains"][0]["name"], "INPUT");
}
