use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use reqwest::{Client, StatusCode, header};
use snafu::ResultExt;
use tracing::debug;

use crate::{
    auth::{Credentials, TokenSigner},
    config::IngestorConfig,
    models::{
        frequency::Frequency,
        raw_report::RawReport,
        report::{FinanceReportType, ReportQuery, ReportSubType, ReportType},
        sales_report::SalesReportRow,
    },
    providers::{
        ApiSnafu, AuthSnafu, BucketOutcome, ClientBuildSnafu, ProviderError, ProviderInitError,
        ReportProvider, ReqwestSnafu, SignerSnafu, ValidationSnafu,
        app_store::{
            params::{QueryParams, VENDOR_NUMBER, finance_report_params, sales_report_params},
            response::{decode_rows, decompress},
        },
    },
};

const ACCEPT_GZIP: &str = "application/a-gzip";

pub struct AppStoreProvider {
    client: Client,
    base_url: String,
    vendor_number: String,
    sales_report_version: Option<String>,
    signer: TokenSigner,
    limiter: DefaultDirectRateLimiter,
}

impl AppStoreProvider {
    /// Creates a new App Store Connect provider.
    ///
    /// The signing key is parsed here so a bad key fails before any request
    /// is made.
    pub fn new(
        credentials: &Credentials,
        config: &IngestorConfig,
    ) -> Result<Self, ProviderInitError> {
        let signer = TokenSigner::new(credentials, config.token_ttl()).context(SignerSnafu)?;

        let client = Client::builder()
            .timeout(config.timeout())
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(30))
            .build()
            .context(ClientBuildSnafu)?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            vendor_number: credentials.vendor_number.clone(),
            sales_report_version: config.sales_report_version.clone(),
            signer,
            limiter: RateLimiter::direct(Quota::per_second(config.requests_per_second)),
        })
    }

    /// Issues one GET against `path`. `Ok(None)` means the API has no report
    /// for these parameters.
    async fn get(
        &self,
        path: &str,
        mut params: QueryParams,
    ) -> Result<Option<Vec<u8>>, ProviderError> {
        params.insert(VENDOR_NUMBER, self.vendor_number.clone());
        let url = format!("{}{}", self.base_url, path);

        self.limiter.until_ready().await;
        // taken after throttling so the token is fresh when sent
        let token = self.signer.token().context(AuthSnafu)?;
        debug!(%url, ?params, "requesting report");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .bearer_auth(token.expose())
            .header(header::ACCEPT, ACCEPT_GZIP)
            .send()
            .await
            .context(ReqwestSnafu)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!(%url, "no report for requested period");
            return Ok(None);
        }
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return ApiSnafu {
                status: status.as_u16(),
                message,
            }
            .fail();
        }

        let body = response.bytes().await.context(ReqwestSnafu)?;
        debug!(%url, bytes = body.len(), "report received");
        decompress(&body).map(Some)
    }

    /// Checks that the rows of `query` decode as [`SalesReportRow`].
    ///
    /// Only the `SALES`/`SUMMARY` report shares that column layout; every
    /// other selector pair is rejected before any request is made.
    pub fn check_query(query: &ReportQuery) -> Result<(), ProviderError> {
        match (query.report_type, query.sub_type) {
            (ReportType::Sales, ReportSubType::Summary) => Ok(()),
            (report_type, sub_type) => ValidationSnafu {
                message: format!(
                    "{report_type}/{sub_type} reports are not supported, only SALES/SUMMARY"
                ),
            }
            .fail(),
        }
    }

    /// Downloads one Sales and Trends report and decodes its rows.
    pub async fn sales_report(
        &self,
        date: NaiveDate,
        frequency: Frequency,
        query: &ReportQuery,
    ) -> Result<BucketOutcome<SalesReportRow>, ProviderError> {
        Self::check_query(query)?;
        let params = sales_report_params(
            date,
            frequency,
            query,
            self.sales_report_version.as_deref(),
        );
        match self.get("salesReports", params).await? {
            Some(payload) => Ok(BucketOutcome::Rows(decode_rows(&payload)?)),
            None => Ok(BucketOutcome::NoData),
        }
    }

    /// Downloads the finance report for the fiscal month containing `date`.
    ///
    /// The payload is returned undecoded since it ends with summary lines that
    /// do not follow the column layout.
    pub async fn finance_report(
        &self,
        date: NaiveDate,
        region_code: &str,
        report_type: FinanceReportType,
    ) -> Result<Option<RawReport>, ProviderError> {
        let params = finance_report_params(date, region_code, report_type);
        let payload = self.get("financeReports", params).await?;
        Ok(payload.as_deref().map(RawReport::from_bytes))
    }
}

#[async_trait]
impl ReportProvider for AppStoreProvider {
    type Row = SalesReportRow;

    async fn fetch_bucket(
        &self,
        date: NaiveDate,
        frequency: Frequency,
        query: &ReportQuery,
    ) -> Result<BucketOutcome<SalesReportRow>, ProviderError> {
        self.sales_report(date, frequency, query).await
    }
}
