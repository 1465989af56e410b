//! Prints one in-app product of an application.

use clap::{App, Arg};
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

use google_client::android_publisher::{InAppProductsClient, PublisherError};
use google_client::PackageName;

fn app() -> App<'static, 'static> {
    App::new("inappproducts-get")
        .about("Android Publisher in-app product lookup")
        .arg(
            Arg::with_name("access")
                .short("a")
                .long("access")
                .help("access token")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("package")
                .short("p")
                .long("package")
                .help("package name")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("product")
                .short("r")
                .long("product")
                .help("product id")
                .takes_value(true),
        )
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = fmt().with_env_filter(EnvFilter::from_default_env()).try_init() {
        eprintln!("tracing init failed: {e}");
    }

    let mut help = app();
    let matches = app().get_matches();
    let (Some(access), Some(package), Some(product)) = (
        matches.value_of("access"),
        matches.value_of("package"),
        matches.value_of("product"),
    ) else {
        let _ = help.print_help();
        println!();
        return ExitCode::FAILURE;
    };

    let package = match PackageName::new(package) {
        Ok(package) => package,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let client = InAppProductsClient::new(package, access);
    match client.get(product).await {
        Ok(product) => {
            println!("{product}");
            ExitCode::SUCCESS
        }
        Err(PublisherError::Api(error) | PublisherError::InvalidCredentials(error)) => {
            println!("{error}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
