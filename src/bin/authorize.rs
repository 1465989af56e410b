//! Prints an OAuth2 authorization URL, or exchanges an authorization code
//! for a token.

use clap::{App, Arg, ArgMatches};
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

use google_client::auth::oauth::{
    AccessType, ApprovalPrompt, AuthUrlOptions, TokenResponse, WebServerApplication,
};
use google_client::{ClientId, ClientSecret, ConfigError, RedirectUri};

const OUT_OF_BAND_REDIRECT: &str = "urn:ietf:wg:oauth:2.0:oob";

fn app() -> App<'static, 'static> {
    App::new("authorize")
        .about("Google OAuth2 web-server authorization")
        .arg(
            Arg::with_name("client")
                .short("c")
                .long("client")
                .help("client id")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("secret")
                .short("e")
                .long("secret")
                .help("client secret")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("redirect")
                .short("r")
                .long("redirect")
                .help("redirect uri")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("scopes")
                .short("s")
                .long("scopes")
                .help("grant scopes, comma separated")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("code")
                .short("o")
                .long("code")
                .help("authorization code")
                .takes_value(true),
        )
}

fn application(
    matches: &ArgMatches<'_>,
    client: &str,
    secret: &str,
) -> Result<WebServerApplication, ConfigError> {
    let redirect = matches.value_of("redirect").unwrap_or(OUT_OF_BAND_REDIRECT);
    Ok(WebServerApplication::new(
        ClientId::new(client)?,
        ClientSecret::new(secret)?,
        RedirectUri::new(redirect)?,
    ))
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = fmt().with_env_filter(EnvFilter::from_default_env()).try_init() {
        eprintln!("tracing init failed: {e}");
    }

    let mut help = app();
    let matches = app().get_matches();
    let (Some(client), Some(secret)) = (matches.value_of("client"), matches.value_of("secret"))
    else {
        let _ = help.print_help();
        println!();
        return ExitCode::FAILURE;
    };

    let mut application = match application(&matches, client, secret) {
        Ok(application) => application,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let Some(code) = matches.value_of("code").filter(|code| !code.is_empty()) else {
        let scopes: Vec<&str> = matches
            .value_of("scopes")
            .map(|scopes| scopes.split(',').filter(|s| !s.is_empty()).collect())
            .unwrap_or_default();
        let options = AuthUrlOptions::new()
            .access_type(AccessType::Offline)
            .approval_prompt(ApprovalPrompt::Force);
        println!("{}", application.create_auth_url(&scopes, &options));
        return ExitCode::SUCCESS;
    };

    match application.authorize_by_code(code).await {
        Ok(TokenResponse::Resource(token)) => {
            println!("{token}");
            ExitCode::SUCCESS
        }
        Ok(TokenResponse::Error(error)) => {
            println!("{error}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
