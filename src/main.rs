use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use rand::seq::SliceRandom;

use pythia::line_editor::{LineEditor, ReadResult};
use pythia::reply::{rules, ChooseTemplate, Responder, RngChooser};
use pythia::{tagger, ui};

/// Speaker tag shown on every responder line.
const BOT: &str = "pythia";

const GREETING: &str =
    "Hi, I'm a psychotherapist. Why don't we start by telling me your name?";

const WELCOME: &str = "How can I help you today? Feel free to tell me anything, \
these sessions are completely confidential.";

const CATCH: &str = "I'm sorry, I didn't catch that. Can you please elaborate?";

const FAREWELLS: [&str; 3] = [
    "Thank you for talking with me.",
    "Good-bye, for now.",
    "Thank you, that will be $150. Have a good day!",
];

#[derive(Parser)]
#[command(name = "pythia")]
#[command(about = "Rule-based talk-therapy chat in the terminal", long_about = None)]
#[command(version)]
struct Args {
    /// Seed for template choice; same seed and inputs give the same replies.
    #[arg(long)]
    seed: Option<u64>,

    /// Load rules from this YAML file instead of the built-in pack.
    #[arg(long, value_name = "FILE")]
    rules: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let pack_override;
    let pack = match args.rules {
        Some(ref path) => {
            pack_override = match rules::load_from_path(path) {
                Ok(pack) => pack,
                Err(e) => {
                    eprintln!(
                        "{}",
                        ui::error(&format!("cannot load {}: {}", path.display(), e))
                    );
                    exit(1);
                }
            };
            eprintln!(
                "{}",
                ui::success(&format!(
                    "loaded {} rules from {}",
                    pack_override.rules.len(),
                    path.display()
                ))
            );
            &pack_override
        }
        None => rules::pack(),
    };

    for finding in rules::lint(pack) {
        eprintln!("{}", ui::warning(&finding));
    }

    // Load the lexicon now so the first reply doesn't stall.
    tagger::ensure_ready();

    let chooser: Box<dyn ChooseTemplate> = match args.seed {
        Some(seed) => Box::new(RngChooser::seeded(seed)),
        None => Box::new(RngChooser::unseeded()),
    };
    let mut responder = Responder::with_parts(pack, tagger::builtin(), chooser);

    println!(
        "{}",
        ui::banner(
            "pythia",
            concat!("v", env!("CARGO_PKG_VERSION")),
            "a listening machine"
        )
    );
    println!();

    let mut editor = LineEditor::new();

    println!("{}", ui::bot_line(BOT, GREETING));
    let name_prompt = format!("{}My name is ", ui::user_prompt("user"));
    let name = match editor.read_line(&name_prompt) {
        ReadResult::Line(line) => {
            let name = line.trim().to_string();
            if name.is_empty() {
                "friend".to_string()
            } else {
                name
            }
        }
        ReadResult::Interrupted | ReadResult::Eof => return,
    };

    println!("{}", ui::bot_line(BOT, &format!("Hi {}. {}", name, WELCOME)));

    let prompt = ui::user_prompt(&name);
    loop {
        match editor.read_line(&prompt) {
            ReadResult::Line(line) => {
                let input = line.trim();
                if input.eq_ignore_ascii_case("quit") {
                    farewell();
                    break;
                }
                if input.is_empty() {
                    println!("{}", ui::bot_line(BOT, CATCH));
                    continue;
                }
                editor.remember(input);
                let reply = responder.respond(input);
                println!("{}", ui::bot_line(BOT, &reply));
            }
            ReadResult::Interrupted => continue,
            ReadResult::Eof => {
                farewell();
                break;
            }
        }
    }
}

fn farewell() {
    let goodbye = FAREWELLS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(FAREWELLS[0]);
    println!("{}", ui::bot_line(BOT, goodbye));
}
