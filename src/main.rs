use env_logger::Env;
use std::io::{self, Write};
use tokeniser::Tokeniser;

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let mut stdout = io::stdout();
    write!(stdout, "Please provide your string of text: ")?;
    stdout.flush()?;

    let mut text = String::new();
    io::stdin().read_line(&mut text)?;

    let tokeniser = Tokeniser::new();
    log::info!("{tokeniser}");
    println!(
        "Here is your text, tokenised on punctuation and whitespace:\n {:?}",
        tokeniser.tokenise_on_punctuation(&text),
    );
    Ok(())
}
