//! Release configuration.
//!
//! Everything the task builder interpolates into shell scripts lives here:
//! the release version (the only value read from the environment), the
//! binary name, the linker symbol that receives the version, the pinned
//! `rcodesign` version, and the names of the CI secrets the tasks reference.

use crate::error::GenerateError;
use crate::ports::environment::Environment;

/// Environment variable holding the release version.
pub const VERSION_ENV: &str = "FULL_VERSION";

const BINARY_NAME: &str = "mint";
const VERSION_SYMBOL: &str = "github.com/rwx-research/mint-cli/cmd/mint/config.Version";
const CODESIGN_VERSION: &str = "0.22.0";

/// Names of secrets in the CI secrets store.
///
/// These are emitted as `${{ secrets.NAME }}` references and resolved by the
/// orchestrator at run time, never by this generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretNames {
    /// PEM bundle of the Apple Developer ID Application certificate.
    pub developer_id_cert: String,
    /// App Store Connect API key used for notarization.
    pub app_store_connect_api_key: String,
    /// Token allowed to upload release assets.
    pub release_token: String,
}

impl Default for SecretNames {
    fn default() -> Self {
        Self {
            developer_id_cert: "RWX_APPLE_DEVELOPER_ID_APPLICATION_CERT".to_string(),
            app_store_connect_api_key: "RWX_APPLE_APP_STORE_CONNECT_API_KEY".to_string(),
            release_token: "MINT_CLI_REPO_GH_TOKEN".to_string(),
        }
    }
}

/// Inputs for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseConfig {
    /// Version embedded in the binary and used as the release tag.
    pub version: String,
    /// Name of the binary produced by the build.
    pub binary_name: String,
    /// Fully qualified Go symbol set through `-X` in the linker flags.
    pub version_symbol: String,
    /// Version of `rcodesign` the notarize tasks expect.
    pub codesign_version: String,
    /// Secret names referenced by task environments.
    pub secrets: SecretNames,
}

impl ReleaseConfig {
    /// Creates a config for `version` with the standard Mint release settings.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            binary_name: BINARY_NAME.to_string(),
            version_symbol: VERSION_SYMBOL.to_string(),
            codesign_version: CODESIGN_VERSION.to_string(),
            secrets: SecretNames::default(),
        }
    }

    /// Resolves the version and builds the config.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::MissingVersion`] when neither `version_override`
    /// nor [`VERSION_ENV`] provides a non-empty version.
    pub fn from_env(
        env: &dyn Environment,
        version_override: Option<&str>,
    ) -> Result<Self, GenerateError> {
        resolve_version(env, version_override).map(Self::new).ok_or(GenerateError::MissingVersion)
    }
}

/// Returns the release version, preferring the explicit override.
///
/// Empty or whitespace-only values count as unset.
#[must_use]
pub fn resolve_version(env: &dyn Environment, version_override: Option<&str>) -> Option<String> {
    let non_empty = |v: &str| Some(v.trim()).filter(|v| !v.is_empty()).map(str::to_string);
    version_override
        .and_then(non_empty)
        .or_else(|| env.var(VERSION_ENV).as_deref().and_then(non_empty))
}
