use optout::{
    config::get_or_init_config, form::ConsoleSink, PreferencesClient, Result, UnsubscribeForm,
};

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // We have a different logging mechanism for production
    #[cfg(not(debug_assertions))]
    {
        optout::init_production_tracing();
    }
    #[cfg(debug_assertions)]
    {
        optout::init_dbg_tracing();
    }

    let api_config = &get_or_init_config().api_config;
    let client = PreferencesClient::new(&api_config.base_url)?;
    let form = UnsubscribeForm::new(client, ConsoleSink::stdout());
    info!("Unsubscribe endpoint: {}", api_config.base_url);

    // Every submitted line is one click of the unsubscribe button.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        println!("Email address (Ctrl-D to quit):");
        let Some(line) = lines.next_line().await? else {
            break;
        };
        form.click(line).await;
    }

    Ok(())
}
