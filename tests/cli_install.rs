mod common;

use common::{SEEDED_ASSETS, TestContext};
use predicates::prelude::*;
use std::fs;

const RUNTIME_DIRS: [&str; 15] = [
    "etc/apache2/conf.d",
    "etc/ood/config/clusters.d",
    "etc/ood/config/ondemand.d",
    "run",
    "var/lib/nginx/config/puns",
    "var/lib/nginx/config/app/sys",
    "var/lib/nginx/config/app/usr",
    "var/lib/nginx/config/app/dev",
    "var/log/apache",
    "var/www/ood/public/maintenance",
    "var/www/ood/discover",
    "var/www/ood/register",
    "var/www/ood/apps/sys",
    "var/www/ood/apps/usr",
    "var/www/ood/apps/dev",
];

#[test]
fn install_provisions_runtime_tree() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::str::contains("Provisioned Open OnDemand runtime tree"));

    for dir in RUNTIME_DIRS {
        assert!(ctx.common().join(dir).is_dir(), "{} should be a directory", dir);
    }
}

#[test]
fn install_copies_bundled_assets_verbatim() {
    let ctx = TestContext::new();
    ctx.install();

    let maintenance = ctx.common().join("var/www/ood/public/maintenance/index.html");
    let missing_home = ctx.common().join("var/www/ood/public/missing_home_directory.html");
    assert_eq!(fs::read_to_string(&maintenance).unwrap(), SEEDED_ASSETS[0].1);
    assert_eq!(fs::read_to_string(&missing_home).unwrap(), SEEDED_ASSETS[1].1);

    #[cfg(unix)]
    {
        assert_eq!(ctx.mode(&maintenance), 0o644);
        assert_eq!(ctx.mode(&missing_home), 0o600);
    }
}

#[test]
fn install_generates_configuration_documents() {
    let ctx = TestContext::new();
    ctx.install();

    let portal = ctx.read_portal();
    let common = ctx.common().display().to_string();
    let snap = ctx.snap().display().to_string();
    assert_eq!(portal["logroot"].as_str(), Some(format!("{}/var/log/ood", common).as_str()));
    assert_eq!(
        portal["pun_stage_cmd"].as_str(),
        Some(format!("sudo {}/nginx_stage/sbin/nginx_stage", snap).as_str())
    );
    assert_eq!(portal["pun_max_retries"].as_u64(), Some(5));
    assert!(!portal.contains_key("port"), "unset port should be omitted");

    let raw = fs::read_to_string(ctx.portal_file()).unwrap();
    assert!(raw.contains("oidc_cookie_same_site: 'On'"), "portal file was:\n{}", raw);

    let stage = fs::read_to_string(ctx.nginx_stage_file()).unwrap();
    assert_eq!(stage.trim(), "{}");

    #[cfg(unix)]
    {
        assert_eq!(ctx.mode(&ctx.portal_file()), 0o600);
        assert_eq!(ctx.mode(&ctx.nginx_stage_file()), 0o644);
    }
}

#[test]
fn install_writes_hook_log() {
    let ctx = TestContext::new();
    ctx.install();

    let log = fs::read_to_string(ctx.common().join("hooks.log")).unwrap();
    assert!(log.contains("Executing snap `install` hook."), "log was: {}", log);
    assert!(log.contains("Generated default portal configuration."), "log was: {}", log);
}

#[test]
fn install_fails_when_tree_already_exists() {
    let ctx = TestContext::new();
    ctx.install();

    ctx.cli()
        .arg("install")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn install_fails_when_bundled_asset_is_missing() {
    let ctx = TestContext::new();
    fs::remove_file(ctx.snap().join("ood/public/maintenance/index.html")).unwrap();

    ctx.cli().arg("install").assert().failure().stderr(predicate::str::contains("Error:"));
    assert!(!ctx.portal_file().exists());
}

#[test]
fn install_requires_snap_common() {
    let ctx = TestContext::new();

    ctx.cli()
        .env_remove("SNAP_COMMON")
        .arg("install")
        .assert()
        .failure()
        .stderr(predicate::str::contains("SNAP_COMMON is not set"));
}

#[test]
fn explicit_flags_override_environment() {
    let ctx = TestContext::new();
    let other = ctx.common().join("alt");
    fs::create_dir_all(&other).unwrap();

    ctx.cli().arg("--snap-common").arg(&other).arg("install").assert().success();

    assert!(other.join("etc/ood/config/ood_portal.yaml").exists());
    assert!(!ctx.portal_file().exists());
}
