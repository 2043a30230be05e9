use anyhow::Result;
use catalog_api::Availability;
use catalog_core::{matching_endpoints, CatalogLocator, EndpointLocator, EndpointOpts, ResolveError};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

mod loader;

use loader::{load_catalog, Format};

/// Resolve a service endpoint URL from a service catalog document
#[derive(Parser, Debug)]
#[command(name = "endpoint-resolve", version)]
struct Args {
    /// Catalog document (JSON or YAML)
    #[arg(long, env = "CATALOG_FILE")]
    catalog: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Auto)]
    format: Format,

    /// Service type, e.g. compute or object-store
    #[arg(long = "type")]
    service_type: String,

    /// Service name, to pick among services sharing a type
    #[arg(long, default_value = "")]
    name: String,

    /// Region; required for services that span several regions
    #[arg(long, env = "CATALOG_REGION", default_value = "")]
    region: String,

    /// admin, public or internal (default public)
    #[arg(long, env = "CATALOG_AVAILABILITY")]
    availability: Option<Availability>,

    /// Print every matching endpoint, in catalog order
    #[arg(long)]
    all: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

impl Args {
    fn endpoint_opts(&self) -> EndpointOpts {
        EndpointOpts {
            service_type: self.service_type.clone(),
            name: self.name.clone(),
            region: self.region.clone(),
            availability: self.availability,
        }
    }
}

fn tracing_init(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Exit status for a resolution miss
fn exit_code(err: ResolveError) -> u8 {
    match err {
        ResolveError::ServiceNotFound => 3,
        ResolveError::EndpointNotFound => 4,
    }
}

fn run(args: &Args) -> Result<()> {
    let catalog = Arc::new(load_catalog(&args.catalog, args.format)?);
    let opts = args.endpoint_opts();
    debug!("Resolving {:?}", opts);

    if args.all {
        for endpoint in matching_endpoints(&catalog, &opts)? {
            println!("{}", endpoint.url);
        }
        return Ok(());
    }

    let locator = CatalogLocator::new(catalog);
    let url = locator.locate(&opts)?;
    info!("Resolved {} to {}", opts.service_type, url);
    println!("{}", url);
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    tracing_init(args.log_json);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<ResolveError>() {
            Some(miss) => {
                error!("{} ({})", miss, miss.hint());
                ExitCode::from(exit_code(*miss))
            }
            None => {
                error!("{:#}", e);
                ExitCode::FAILURE
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_to_opts() {
        let args = Args::try_parse_from([
            "endpoint-resolve",
            "--catalog",
            "catalog.json",
            "--type",
            "compute",
            "--name",
            "nova",
            "--region",
            "RegionOne",
            "--availability",
            "internal",
        ])
        .unwrap();

        let opts = args.endpoint_opts();
        assert_eq!(opts.service_type, "compute");
        assert_eq!(opts.name, "nova");
        assert_eq!(opts.region, "RegionOne");
        assert_eq!(opts.availability, Some(Availability::Internal));
        assert_eq!(args.format, Format::Auto);
    }

    #[test]
    fn test_rejects_unknown_availability() {
        let result = Args::try_parse_from([
            "endpoint-resolve",
            "--catalog",
            "catalog.json",
            "--type",
            "compute",
            "--availability",
            "private",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_exit_codes_distinct() {
        assert_eq!(exit_code(ResolveError::ServiceNotFound), 3);
        assert_eq!(exit_code(ResolveError::EndpointNotFound), 4);
    }
}
