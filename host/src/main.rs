//! Terminal host for the book manager front-end.
//!
//! Stands in for the browser: executes the core's HTTP requests with ureq,
//! turns typed commands into the page's user events, and prints the
//! rendered page after each one. The endpoint comes from the `API_URL`
//! environment variable (default `http://localhost:3000`, where the mock
//! server listens).
//!
//! Commands: `list`, `add <title> | <author>`, `rm <id>`, `quit`.

use std::io::{self, BufRead, Write};

use book_core::{BookApp, BookClient};

mod transport;

use transport::UreqTransport;

#[derive(Debug, PartialEq, Eq)]
enum Command {
    List,
    Add { title: String, author: String },
    Remove(u64),
    Quit,
}

/// Parse one line of user input. `add` splits title from author on the
/// first `|`, mirroring the page's two form fields.
fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    match line {
        "list" => return Ok(Command::List),
        "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }
    if let Some(rest) = line.strip_prefix("add ") {
        let (title, author) = rest
            .split_once('|')
            .ok_or_else(|| "usage: add <title> | <author>".to_string())?;
        return Ok(Command::Add {
            title: title.trim().to_string(),
            author: author.trim().to_string(),
        });
    }
    if let Some(rest) = line.strip_prefix("rm ") {
        let id = rest
            .trim()
            .parse()
            .map_err(|_| "usage: rm <id>".to_string())?;
        return Ok(Command::Remove(id));
    }
    Err(format!(
        "unknown command: {line}; try: list, add <title> | <author>, rm <id>, quit"
    ))
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt::init();

    let api_url =
        std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let mut app = BookApp::new(BookClient::new(&api_url), UreqTransport::new());

    // Page load: fetch and render before the first prompt.
    app.on_load();
    println!("{}", app.page().to_html());

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_command(line) {
            Ok(Command::Quit) => break,
            Ok(Command::List) => app.on_load(),
            Ok(Command::Add { title, author }) => {
                app.form_mut().fill(&title, &author);
                app.on_submit();
            }
            Ok(Command::Remove(id)) => app.on_remove(id),
            Err(message) => {
                eprintln!("{message}");
                continue;
            }
        }
        println!("{}", app.page().to_html());
    }

    Ok(())
}
