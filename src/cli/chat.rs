use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::chat::ChatWidget;
use crate::core::config::AppConfig;
use crate::portfolio::Portfolio;

pub async fn run(config: &AppConfig, portfolio: Portfolio) -> Result<()> {
    let mut rl = DefaultEditor::new().expect("Editor failed");
    let mut widget = ChatWidget::from_config(config, portfolio);

    // Show the greeting the widget is seeded with
    for msg in widget.transcript().iter() {
        println!("{}", msg.text);
    }

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                if let Some(reply) = widget.submit(line.as_str()).await? {
                    println!("{}", reply);
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
