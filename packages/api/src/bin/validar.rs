//! Certificate validation from the terminal.
//!
//! One-shot lookup of a single cédula, or an interactive prompt loop.
//! Both contexts compose the same shared validator; neither carries its
//! own lookup logic.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use certiva::render;
use certiva::{CertificateValidator, LookupOutcome, SessionPhase, ValidationSession};

#[derive(Parser, Debug)]
#[command(author, version, about = "Valida certificados contra el registro oficial")]
struct Args {
    /// Número de cédula a validar
    #[arg(required_unless_present = "interactive")]
    cedula: Option<String>,

    /// Registry base URL override
    #[arg(long, value_name = "URL")]
    registry_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    timeout_secs: Option<u64>,

    /// Run an interactive validation prompt
    #[arg(long, short = 'i', conflicts_with = "cedula")]
    interactive: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    let mut builder = certiva::validator();
    if let Some(url) = &args.registry_url {
        builder = builder.base_url(url);
    }
    if let Some(secs) = args.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let validator = builder.build().context("invalid registry configuration")?;

    // One user action runs to completion at a time; a single-threaded
    // runtime is all the flow needs.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start runtime")?;

    if args.interactive {
        runtime.block_on(interactive(&validator))
    } else {
        let cedula = args.cedula.unwrap_or_default();
        Ok(runtime.block_on(one_shot(&validator, &cedula)))
    }
}

/// Validate once and print the outcome.
async fn one_shot(validator: &CertificateValidator, cedula: &str) -> ExitCode {
    match validator.validate(cedula).await {
        Ok(certificate) => {
            println!("{}", render::certificate_summary(&certificate));
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}", render::failure_notice(error.user_message()));
            ExitCode::FAILURE
        }
    }
}

/// Prompt loop over one validation session.
async fn interactive(validator: &CertificateValidator) -> anyhow::Result<ExitCode> {
    println!("Validación de Certificados");
    println!("Ingrese un número de cédula, o \"salir\" para terminar.");

    let stdin = io::stdin();
    let mut session = ValidationSession::new();

    loop {
        print!("cédula> ");
        io::stdout().flush().context("stdout unavailable")?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("stdin unavailable")?;
        if read == 0 {
            return Ok(ExitCode::SUCCESS);
        }

        let input = line.trim();
        if input.eq_ignore_ascii_case("salir") {
            return Ok(ExitCode::SUCCESS);
        }

        session.set_identifier(input);
        validator.run(&mut session).await;

        match session.phase() {
            SessionPhase::Result(LookupOutcome::Verified(certificate)) => {
                println!("{}", render::certificate_summary(certificate));
            }
            SessionPhase::Result(LookupOutcome::Rejected { message }) => {
                println!("{}", render::failure_notice(message));
            }
            SessionPhase::Editing | SessionPhase::Loading => {}
        }

        // Each round starts the next visitor from a clean session.
        session.reset();
    }
}
