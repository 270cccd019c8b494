use anyhow::Result;

use crate::chat::ChatWidget;
use crate::core::config::AppConfig;
use crate::portfolio::Portfolio;

pub async fn run(config: &AppConfig, portfolio: Portfolio, message: &str) -> Result<()> {
    let mut widget = ChatWidget::from_config(config, portfolio);

    match widget.submit(message).await? {
        Some(reply) => println!("{}", reply),
        None => println!("Nothing to ask"),
    }

    Ok(())
}
