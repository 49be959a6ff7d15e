//! Builds the release task list from the platform matrix.

use std::collections::BTreeMap;

use crate::config::ReleaseConfig;
use crate::pipeline::{TaskDescriptor, Uses, INSTALL_ZIP, SETUP_CODESIGNING, SETUP_NIX};
use crate::platform::Platform;

const CERT_FILE: &str = "rwx-developer-id-application-cert.pem";
const API_KEY_FILE: &str = "rwx-apple-app-store-connect-api-key.json";

/// Builds every task for every platform of the release matrix.
///
/// Platforms are visited OS-major, and each contributes its tasks in stage
/// order (build, notarize when required, upload).
#[must_use]
pub fn build_tasks(config: &ReleaseConfig) -> Vec<TaskDescriptor> {
    Platform::matrix().flat_map(|platform| platform_tasks(config, platform)).collect()
}

/// Builds the tasks for a single platform.
#[must_use]
pub fn platform_tasks(config: &ReleaseConfig, platform: Platform) -> Vec<TaskDescriptor> {
    let mut tasks = Vec::with_capacity(3);

    let build = build_task(config, platform);
    let mut upload_after = build.key.clone();
    tasks.push(build);

    if platform.os.requires_notarization() {
        let notarize = notarize_task(config, platform);
        upload_after = notarize.key.clone();
        tasks.push(notarize);
    }

    tasks.push(upload_task(config, platform, upload_after));

    for task in &tasks {
        tracing::debug!(%platform, key = %task.key, "built task");
    }
    tasks
}

/// Key of the task that cross-compiles the binary for `platform`.
#[must_use]
pub fn build_key(config: &ReleaseConfig, platform: Platform) -> String {
    format!("build-{}-{}-{}", config.binary_name, platform.os, platform.arch.go_name())
}

/// Key of the task that signs and notarizes the binary for `platform`.
///
/// Only darwin produces this task, so the key carries the architecture alone.
#[must_use]
pub fn notarize_key(platform: Platform) -> String {
    format!("notarize-{}-binary", platform.arch.go_name())
}

/// Key of the task that uploads the binary for `platform` to the release.
#[must_use]
pub fn upload_key(platform: Platform) -> String {
    format!("upload-{}-{}-to-release", platform.os, platform.arch.go_name())
}

/// Lower-cased release asset filename for `platform`.
#[must_use]
pub fn asset_name(config: &ReleaseConfig, platform: Platform) -> String {
    format!(
        "{}-{}-{}{}",
        config.binary_name,
        platform.os,
        platform.arch.release_name(),
        platform.os.executable_suffix()
    )
    .to_lowercase()
}

/// Renders a reference to a secret resolved by the orchestrator.
fn secret_ref(name: &str) -> String {
    format!("${{{{ secrets.{name} }}}}")
}

fn script(lines: &[String]) -> String {
    let mut run = lines.join("\n");
    run.push('\n');
    run
}

fn build_task(config: &ReleaseConfig, platform: Platform) -> TaskDescriptor {
    let run = script(&[
        format!("GOOS={} \\", platform.os),
        format!("GOARCH={} \\", platform.arch.go_name()),
        "CGO_ENABLED=0 \\".to_string(),
        format!("LDFLAGS=\"-w -s -X {}={}\" \\", config.version_symbol, config.version),
        "  nix develop --command mage".to_string(),
    ]);

    TaskDescriptor {
        key: build_key(config, platform),
        uses: SETUP_NIX.into(),
        run,
        env: BTreeMap::new(),
    }
}

fn notarize_task(config: &ReleaseConfig, platform: Platform) -> TaskDescriptor {
    let binary = &config.binary_name;
    let secrets = &config.secrets;
    let run = script(&[
        format!("echo \"${}\" > {CERT_FILE}", secrets.developer_id_cert),
        format!(
            "./rcodesign sign --pem-source {CERT_FILE} --code-signature-flags runtime \"./{binary}\""
        ),
        // notarization only accepts certain container formats
        format!("zip -r {binary}.zip \"./{binary}\""),
        format!("echo \"${}\" > {API_KEY_FILE}", secrets.app_store_connect_api_key),
        format!("./rcodesign notary-submit --wait --api-key-path {API_KEY_FILE} {binary}.zip"),
    ]);

    let env = BTreeMap::from([
        ("CODESIGN_VERSION".to_string(), config.codesign_version.clone()),
        (secrets.developer_id_cert.clone(), secret_ref(&secrets.developer_id_cert)),
        (
            secrets.app_store_connect_api_key.clone(),
            secret_ref(&secrets.app_store_connect_api_key),
        ),
    ]);

    TaskDescriptor {
        key: notarize_key(platform),
        uses: Uses::Many(vec![
            SETUP_CODESIGNING.to_string(),
            INSTALL_ZIP.to_string(),
            build_key(config, platform),
        ]),
        run,
        env,
    }
}

fn upload_task(config: &ReleaseConfig, platform: Platform, after: String) -> TaskDescriptor {
    let run = script(&[
        format!("github_asset_name=\"{}\"", asset_name(config, platform)),
        format!(
            "mv \"{}{}\" \"$github_asset_name\"",
            config.binary_name,
            platform.os.executable_suffix()
        ),
        format!("gh release upload \"{}\" \"$github_asset_name\" --clobber", config.version),
    ]);

    let env =
        BTreeMap::from([("GH_TOKEN".to_string(), secret_ref(&config.secrets.release_token))]);

    TaskDescriptor { key: upload_key(platform), uses: after.into(), run, env }
}
