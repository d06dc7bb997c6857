use anyhow::Context;
use clap::Parser;
use paydial::utils::logger;
use paydial::{
    filter_contacts, CliConfig, Command, JsonAddressBook, JsonFileStore, PaySession,
    PaydialError, SettingsAction, SettingsStore, SystemDialer,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting paydial");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.runtime_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    };

    let settings = SettingsStore::new(JsonFileStore::new(config.settings_file()));
    settings.load().await;

    if let Command::Settings { action } = &cli.command {
        return handle_settings(action, &settings).await;
    }

    let session = PaySession::new(
        settings,
        JsonAddressBook::new(&config.contacts_file),
        SystemDialer::new(),
        &config,
    );

    if let Err(e) = run_flow(&cli.command, &session).await {
        tracing::error!("Flow failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    Ok(())
}

async fn run_flow(
    command: &Command,
    session: &PaySession<JsonFileStore, JsonAddressBook, SystemDialer>,
) -> paydial::Result<()> {
    match command {
        Command::PayNumber { to, amount } => {
            let code = session.pay_to_number(to, amount).await?;
            println!("✅ Dialed {}", code);
        }
        Command::PayCode { code, amount } => {
            let dialed = session.pay_to_code(code, amount).await?;
            println!("✅ Dialed {}", dialed);
        }
        Command::Contacts { search } => {
            let contacts = match session.pick_contacts().await {
                Ok(contacts) => contacts,
                // An empty address book is informational, not a failure.
                Err(PaydialError::NoContacts) => {
                    println!("No contacts with phone numbers found.");
                    return Ok(());
                }
                Err(e) => return Err(e),
            };

            let contacts = match search {
                Some(query) => filter_contacts(&contacts, query),
                None => contacts,
            };
            if contacts.is_empty() {
                println!("No contacts found matching your search.");
                return Ok(());
            }

            for contact in &contacts {
                println!("{}", contact.name);
                for number in &contact.phone_numbers {
                    println!("  {}  (dials as {})", number, session.select_contact_number(number));
                }
            }
        }
        Command::Settings { .. } => unreachable!("handled before session construction"),
    }
    Ok(())
}

async fn handle_settings(
    action: &SettingsAction,
    settings: &SettingsStore<JsonFileStore>,
) -> anyhow::Result<()> {
    match action {
        SettingsAction::Show => {
            let current = settings.snapshot();
            println!("Pay to Number: {}", current.number_format);
            println!("Pay to Code:   {}", current.code_format);
        }
        SettingsAction::SetNumberFormat { format } => {
            settings
                .set_number_format(format.clone())
                .await
                .context("settings persistence task failed")?;
            println!("✅ Pay to Number format saved");
        }
        SettingsAction::SetCodeFormat { format } => {
            settings
                .set_code_format(format.clone())
                .await
                .context("settings persistence task failed")?;
            println!("✅ Pay to Code format saved");
        }
        SettingsAction::Reset => {
            let (number, code) = settings.reset_to_defaults();
            number
                .await
                .context("settings persistence task failed")?;
            code.await.context("settings persistence task failed")?;
            println!("✅ Settings reset to defaults");
        }
    }
    Ok(())
}
