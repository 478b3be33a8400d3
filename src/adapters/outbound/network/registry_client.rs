use crate::ports::outbound::{DependencySource, LookupError, LookupResult};
use crate::resolution::domain::PackageName;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Default public index queried when no repository override is configured
pub const DEFAULT_REPOSITORY_URL: &str = "https://pypi.org/pypi";

/// Rate limiting: delay between successive registry requests (milliseconds).
/// Keeps a full resolution run at roughly ten requests per second.
const REQUEST_DELAY_MS: u64 = 100;

#[derive(Debug, Deserialize)]
struct RegistryPackageInfo {
    info: RegistryInfo,
}

#[derive(Debug, Deserialize)]
struct RegistryInfo {
    #[serde(default)]
    requires_dist: Option<Vec<String>>,
}

/// RegistryDependencySource adapter for a PyPI-compatible JSON API
///
/// Fetches `{repository}/{package}/json` and reduces the `requires_dist`
/// requirement strings to bare package names. Transient failures are retried
/// with a short backoff; a delay between successive calls respects the
/// registry's usage policy without the engine being aware of it.
pub struct RegistryDependencySource {
    client: reqwest::Client,
    repository_url: String,
    max_retries: u32,
    request_count: AtomicUsize,
}

impl RegistryDependencySource {
    /// Creates a new registry source against the given base URL
    pub fn new(repository_url: impl Into<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("pipgraph/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            repository_url: repository_url.into().trim_end_matches('/').to_string(),
            max_retries: 3,
            request_count: AtomicUsize::new(0),
        })
    }

    /// Fetches package information with retry on transient failures.
    /// A NotFound answer is definitive and never retried.
    async fn fetch_with_retry(
        &self,
        package: &PackageName,
    ) -> std::result::Result<RegistryPackageInfo, LookupError> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch_package(package).await {
                Ok(info) => return Ok(info),
                Err(error @ LookupError::NotFound) => return Err(error),
                Err(error) => {
                    last_error = Some(error);
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(last_error.unwrap())
    }

    async fn fetch_package(
        &self,
        package: &PackageName,
    ) -> std::result::Result<RegistryPackageInfo, LookupError> {
        // Names are already canonical, but encode anyway so a custom
        // repository URL never sees raw path characters.
        let encoded = urlencoding::encode(package.as_str());
        let url = format!("{}/{}/json", self.repository_url, encoded);

        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|e| LookupError::SourceUnavailable {
                    details: e.to_string(),
                })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound);
        }
        if !response.status().is_success() {
            return Err(LookupError::SourceUnavailable {
                details: format!("registry returned status code {}", response.status()),
            });
        }

        response
            .json::<RegistryPackageInfo>()
            .await
            .map_err(|e| LookupError::MalformedResponse {
                details: e.to_string(),
            })
    }

    /// Reduces requirement strings to names, skipping anything unparseable.
    fn extract_dependencies(info: RegistryPackageInfo) -> Vec<PackageName> {
        let mut dependencies = Vec::new();
        for requirement in info.info.requires_dist.unwrap_or_default() {
            match PackageName::parse_requirement(&requirement) {
                Ok(name) => dependencies.push(name),
                Err(e) => {
                    eprintln!(
                        "⚠️  Warning: Skipping unparseable requirement '{}': {}",
                        requirement, e
                    );
                }
            }
        }
        dependencies
    }
}

#[async_trait]
impl DependencySource for RegistryDependencySource {
    async fn direct_dependencies(&self, package: &PackageName) -> LookupResult {
        // Rate limiting: pause between successive calls, never before the first
        if self.request_count.fetch_add(1, Ordering::Relaxed) > 0 {
            tokio::time::sleep(Duration::from_millis(REQUEST_DELAY_MS)).await;
        }

        let info = self.fetch_with_retry(package).await?;
        Ok(Self::extract_dependencies(info))
    }
}
