//! End-to-end tests for the snapshot pipeline
//!
//! Files on disk -> context -> registry dispatch -> combiner -> queries.

use pretty_assertions::assert_eq;
use snap_combiners::{HttpdConfAll, SectionQuery};
use snap_context::io::read_context;
use snap_context::{ConfigStore, NormalizedPath};
use snap_parsers::{HttpdConf, HttpdSettings, Parsed, builtins};
use snap_test_utils::SnapshotTree;
use snap_test_utils::fixtures::{
    DOCKER_IMAGE_INSPECT, HTTPD_CONF_1, HTTPD_CONF_2, HTTPD_MAIN_WITH_INCLUDE,
    HTTPD_SSL_FRAGMENT, HTTPD_WELCOME_FRAGMENT, IP6TABLES_SAVE,
};

/// A captured host: main httpd config, four fragments and two dumps.
fn captured_host() -> SnapshotTree {
    let tree = SnapshotTree::new();
    tree.write("etc/httpd/conf/httpd.conf", HTTPD_MAIN_WITH_INCLUDE);
    tree.write("etc/httpd/conf.d/welcome.conf", HTTPD_WELCOME_FRAGMENT);
    tree.write("etc/httpd/conf.d/ssl.conf", HTTPD_SSL_FRAGMENT);
    tree.write("etc/httpd/conf.d/00-mpm.conf", HTTPD_CONF_1);
    tree.write("etc/httpd/conf.d/01-vhost.conf", HTTPD_CONF_2);
    tree.write("etc/sysconfig/ip6tables", IP6TABLES_SAVE);
    tree.write("insights_commands/docker_inspect_image", DOCKER_IMAGE_INSPECT);
    tree
}

fn parse_file(tree: &SnapshotTree, spec: &str, relative: &str, settings: &HttpdSettings) -> Parsed {
    let path = NormalizedPath::new(tree.root().join(relative));
    let context = read_context(&path).unwrap();
    builtins().parse(spec, &context, settings).unwrap()
}

fn httpd_docs(tree: &SnapshotTree, settings: &HttpdSettings) -> Vec<HttpdConf> {
    [
        "etc/httpd/conf.d/welcome.conf",
        "etc/httpd/conf.d/01-vhost.conf",
        "etc/httpd/conf/httpd.conf",
        "etc/httpd/conf.d/ssl.conf",
        "etc/httpd/conf.d/00-mpm.conf",
    ]
    .into_iter()
    .map(|relative| {
        parse_file(tree, "httpd_conf", relative, settings)
            .into_httpd_conf()
            .unwrap()
    })
    .collect()
}

#[test]
fn test_httpd_host_from_disk() {
    let tree = captured_host();
    let settings = HttpdSettings::default();
    let all = HttpdConfAll::with_settings(&httpd_docs(&tree, &settings), &settings);

    let order: Vec<_> = all
        .config_data()
        .iter()
        .map(|slot| slot.file_name.as_deref().unwrap())
        .collect();
    assert_eq!(
        order,
        [
            "httpd.conf",
            "00-mpm.conf",
            "01-vhost.conf",
            "ssl.conf",
            "welcome.conf",
            "httpd.conf",
        ]
    );

    let tokens: Vec<_> = all
        .get_setting_list("ServerTokens")
        .iter()
        .map(|e| e.value.as_str())
        .collect();
    assert_eq!(tokens, ["Full", "OS", "Minor", "Prod"]);
    assert_eq!(all.get_active_setting("DocumentRoot").unwrap().value, "/var/www/html");

    let prefork = SectionQuery::from(("IfModule", "prefork"));
    let active = all.get_section_active_setting("MaxClients", &prefork);
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].value, "512");
    assert!(
        active[0]
            .file_path
            .as_deref()
            .unwrap()
            .ends_with("etc/httpd/conf.d/01-vhost.conf")
    );
}

#[test]
fn test_httpd_entries_remember_origin() {
    let tree = captured_host();
    let settings = HttpdSettings::default();
    let all = HttpdConfAll::with_settings(&httpd_docs(&tree, &settings), &settings);

    let found = all.get_section_setting_list_parts("Options", &["LocationMatch", "^/+$"]);
    assert_eq!(found.len(), 1);
    let entry = &found[0].entries[0];
    assert_eq!(entry.value, "-Indexes");
    assert_eq!(entry.section.as_deref(), Some("LocationMatch"));
    assert_eq!(entry.section_name.as_deref(), Some("\"^/+$\""));
    assert_eq!(entry.file_name.as_deref(), Some("welcome.conf"));
}

#[test]
fn test_settings_file_changes_split() {
    let tree = captured_host();
    let config = tree.write(
        "snap.json",
        r#"{"httpd": {"split_directive": "Include", "split_value": "conf.modules.d/*.conf"}}"#,
    );

    #[derive(serde::Deserialize)]
    struct Settings {
        httpd: HttpdSettings,
    }
    let settings: Settings = ConfigStore::new().load(&NormalizedPath::new(config)).unwrap();
    let all = HttpdConfAll::with_settings(&httpd_docs(&tree, &settings.httpd), &settings.httpd);

    // User now sits after the fragments and is the last top-level entry
    let users: Vec<_> = all.get_setting_list("User").iter().map(|e| &e.value).collect();
    assert_eq!(users, ["apache"]);
    let last = all.config_data().last().unwrap();
    assert!(last.data.contains_directive("User"));
    assert!(!all.config_data()[0].data.contains_directive("User"));
}

#[test]
fn test_other_parsers_from_disk() {
    let tree = captured_host();
    let settings = HttpdSettings::default();

    let ip6 = parse_file(&tree, "ip6tables_permanent", "etc/sysconfig/ip6tables", &settings);
    let ip6 = ip6.as_iptables().unwrap();
    assert_eq!(ip6.rules().len(), 14);
    assert_eq!(ip6.get_chain("INPUT").len(), 6);

    let image = parse_file(
        &tree,
        "docker_image_inspect",
        "insights_commands/docker_inspect_image",
        &settings,
    );
    let image = image.as_docker_inspect().unwrap();
    assert_eq!(image["RepoTags"][0], "rhel7_imagemagick:latest");
}

#[test]
fn test_parsed_output_is_json() {
    let tree = captured_host();
    let parsed = parse_file(&tree, "httpd_conf", "etc/httpd/conf.d/00-mpm.conf", &HttpdSettings::default());

    let value = serde_json::to_value(&parsed).unwrap();
    assert_eq!(value["parser"], "httpd_conf");
    assert_eq!(value["data"]["file_name"], "00-mpm.conf");
    assert_eq!(value["data"]["data"]["sections"][0]["name"], "prefork.c");
}
