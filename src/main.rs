use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use trace_lookup::core::validator;
use trace_lookup::utils::error::ErrorSeverity;
use trace_lookup::utils::text::is_not_available;
use trace_lookup::utils::{logger, validation::Validate};
use trace_lookup::{
    Cli, Command, Identity, LookupConfig, LookupEngine, LookupError, LookupReport, QueryKind,
};

const CHAT_HELP: &str = "\
Commands:
  /trace <phone number>     trace a phone number (e.g. /trace +919876543210)
  /vehicle <registration>   look up a vehicle (e.g. /vehicle MH01AB1234)
  /help                     show this message
  /quit                     leave the session
Plain text is checked and you are told which command fits.";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = LookupConfig::load(Some(cli.config.as_path()))
        .with_context(|| format!("loading {}", cli.config.display()))?;

    // 初始化日誌
    if config.logging.json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting trace-lookup");
    match &config.source {
        Some(path) => tracing::debug!("📄 Loaded config from {}", path.display()),
        None => tracing::warn!(
            "⚠️ Config file {} not found, using defaults",
            cli.config.display()
        ),
    }
    if cli.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let engine = LookupEngine::from_config(&config)?;
    let identity = Identity::new(cli.user_id.clone());

    let outcome = match &cli.command {
        Command::Trace { number } => {
            run_cancellable(&engine, &identity, QueryKind::Phone, number)
                .await
                .map(|report| print_report(&report, cli.json))
        }
        Command::Vehicle { registration } => engine
            .lookup_vehicle(&identity, registration)
            .map(|report| print_report(&report, cli.json)),
        Command::Detect { text } => {
            print_detection(text);
            Ok(())
        }
        Command::Chat => {
            chat(&engine, &identity, cli.json).await?;
            Ok(())
        }
    };

    if let Err(e) = outcome {
        report_error(&e);

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 2,
            ErrorSeverity::Medium | ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

/// Ctrl-C 取消進行中的查詢
async fn run_cancellable(
    engine: &LookupEngine,
    identity: &Identity,
    kind: QueryKind,
    input: &str,
) -> Result<LookupReport, LookupError> {
    let cancel = CancellationToken::new();
    let lookup = engine.lookup(identity, kind, input, &cancel);
    tokio::pin!(lookup);

    tokio::select! {
        result = &mut lookup => result,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("🛑 Interrupted, cancelling lookup");
            cancel.cancel();
            lookup.await
        }
    }
}

async fn chat(engine: &LookupEngine, identity: &Identity, json: bool) -> anyhow::Result<()> {
    println!("👋 trace-lookup interactive session. Type /help for commands.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        // 沒有查詢進行中時 Ctrl-C 直接結束
        let next = tokio::select! {
            next = lines.next_line() => next?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = next else { break };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, argument) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let kind = match command {
            "/quit" | "/exit" => break,
            "/help" | "/start" => {
                println!("{}", CHAT_HELP);
                continue;
            }
            "/trace" => QueryKind::Phone,
            "/vehicle" => QueryKind::Vehicle,
            _ if command.starts_with('/') => {
                println!("❓ Unknown command {}. Type /help for commands.", command);
                continue;
            }
            _ => {
                print_detection(line);
                continue;
            }
        };

        if argument.is_empty() {
            println!("❌ Please provide a {} after {}", kind, command);
            continue;
        }

        match run_cancellable(engine, identity, kind, argument).await {
            Ok(report) => print_report(&report, json),
            Err(e) => report_error(&e),
        }
    }

    println!("👋 Bye");
    Ok(())
}

fn print_detection(text: &str) {
    match validator::detect(text) {
        Some(QueryKind::Phone) => {
            println!("📱 Looks like a phone number. Use: trace {}", text.trim())
        }
        Some(QueryKind::Vehicle) => {
            println!("🚗 Looks like a vehicle registration. Use: vehicle {}", text.trim())
        }
        None => println!("🤔 Not a phone number or vehicle registration."),
    }
}

fn print_report(report: &LookupReport, json: bool) {
    if json {
        match serde_json::to_string_pretty(report) {
            Ok(body) => println!("{}", body),
            Err(e) => tracing::error!("❌ Failed to serialize report: {}", e),
        }
        return;
    }

    let title = match report.kind {
        QueryKind::Phone => "📱 Phone Trace",
        QueryKind::Vehicle => "🚗 Vehicle Information",
    };
    println!("{}: {}", title, report.query);
    for (label, value) in report.fields.iter() {
        if !is_not_available(value) {
            println!("  • {}: {}", label, value);
        }
    }
    println!(
        "🕒 Looked up at {}",
        report.looked_up_at.format("%Y-%m-%d %H:%M:%S")
    );
}

fn report_error(e: &LookupError) {
    tracing::error!(
        "❌ Lookup failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}
