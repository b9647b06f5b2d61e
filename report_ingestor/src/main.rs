use chrono::Local;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use report_ingestor::{
    cli::{
        Cli, Commands,
        params::{load_config, load_credentials, resolve_range, write_output},
    },
    encoding::Encodable,
    models::report::ReportQuery,
    providers::app_store::AppStoreProvider,
    requests::fetch_range,
};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let range = resolve_range(cli.date.as_deref(), Local::now().date_naive())?;
    let credentials = load_credentials(cli.credentials.as_deref(), &config)?;
    let provider = AppStoreProvider::new(&credentials, &config)?;

    match cli.command {
        Commands::Sales {
            report_type,
            sub_type,
        } => {
            let query = ReportQuery::new(report_type, sub_type);
            AppStoreProvider::check_query(&query)?;
            info!(
                start = %range.start(),
                end = %range.end(),
                frequency = %range.frequency(),
                %report_type,
                %sub_type,
                "fetching sales reports"
            );

            match fetch_range(&provider, range, &query).await {
                Ok(response) => {
                    info!(rows = response.len(), "sales reports assembled");
                    write_output(&response.to_encoding(cli.output)?, cli.out.as_deref())?;
                }
                Err(err) => {
                    error!(
                        bucket = %err.bucket,
                        rows = err.partial.len(),
                        error = %err.source,
                        "range fetch aborted, writing partial result"
                    );
                    write_output(&err.partial.to_encoding(cli.output)?, cli.out.as_deref())?;
                    return Err(err.into());
                }
            }
        }

        Commands::Finance {
            region,
            report_type,
        } => {
            let month = range.start();
            info!(%month, %region, %report_type, "fetching finance report");

            match provider.finance_report(month, &region, report_type).await? {
                Some(report) => {
                    write_output(&report.to_encoding(cli.output)?, cli.out.as_deref())?
                }
                None => warn!(%month, %region, "no finance report published for this month"),
            }
        }
    }

    Ok(())
}
