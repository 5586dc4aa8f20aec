use clap::{error, Parser, ArgMatches, Command};
use log::{info, warn};
use reedline::{Reedline, Signal};

mod prompt;
use prompt::{BrowserPrompt, QuestionPrompt};

mod cmds {
    pub(crate) mod contact_cmd;
}

use contact_browser::{
    configuration as cfg,
    config::Config,
    logger,
    AddressBookBuilder,
    ArraySource,
    Authorization,
    ContactDetail,
    ContactIndex,
    ContactSource,
};

fn build_cli() -> Command {
    let mut cmd = Command::new("contacts")
        .about("Interactive contact browser")
        .no_binary_name(true)
        .subcommand_required(true)
        .subcommand(cmds::contact_cmd::list_cli())
        .subcommand(cmds::contact_cmd::sections_cli())
        .subcommand(cmds::contact_cmd::search_cli())
        .subcommand(cmds::contact_cmd::clear_cli())
        .subcommand(cmds::contact_cmd::show_cli())
        .subcommand(cmds::contact_cmd::call_cli())
        .help_template("{subcommands}");

    cmd.error(error::ErrorKind::InvalidSubcommand, "Invalid command provided");
    cmd
}

fn confirm(rl: &mut Reedline, question: &str) -> bool {
    match rl.read_line(&QuestionPrompt(question.to_string())) {
        Ok(Signal::Success(answer)) => matches!(answer.trim(), "y" | "Y" | "yes"),
        _ => false,
    }
}

fn execute_command(matches: ArgMatches, index: &mut ContactIndex, rl: &mut Reedline) {
    match matches.subcommand() {
        Some(("list", _)) => {
            if index.section_count() == 0 {
                println!("No contacts.");
                return;
            }
            print!("{}", index);
        }

        Some(("sections", _)) => {
            for (section, header) in index.section_headers().iter().enumerate() {
                println!("{:>3} [{}] {} contact(s)", section, header, index.count_in_section(section));
            }
        }

        Some(("search", m)) => {
            let keyword = m.get_many::<String>("KEYWORD")
                .map(|v| v.cloned().collect::<Vec<_>>().join(" "))
                .unwrap_or_default();

            // An empty search box means no filter at all.
            match keyword.is_empty() {
                true => index.set_filter(None),
                false => index.set_filter(Some(&keyword)),
            }
            println!("{} section(s) match {:?}", index.section_count(), keyword);
        }

        Some(("clear", _)) => {
            index.set_filter(None);
            println!("Filter cleared, {} section(s).", index.section_count());
        }

        Some(("show", m)) => {
            let section = *m.get_one::<usize>("SECTION").unwrap_or(&0);
            let row = *m.get_one::<usize>("ROW").unwrap_or(&0);

            let Some(contact) = index.contact_at(row, section) else {
                println!("Error: no contact at section {} row {}", section, row);
                return;
            };

            let detail = ContactDetail::from(contact);
            println!("{}", detail.name());
            for n in 0..detail.row_count() {
                if let Some(line) = detail.row(n) {
                    println!("  {}. {}", n, line);
                }
            }
        }

        Some(("call", m)) => {
            let section = *m.get_one::<usize>("SECTION").unwrap_or(&0);
            let row = *m.get_one::<usize>("ROW").unwrap_or(&0);
            let number = *m.get_one::<usize>("number").unwrap_or(&0);

            let Some(contact) = index.contact_at(row, section) else {
                println!("Error: no contact at section {} row {}", section, row);
                return;
            };

            let Some(request) = ContactDetail::from(contact).dial_request(number) else {
                println!("Error: {} has no phone number #{}", contact.full_name(), number);
                return;
            };

            println!("{}", request.title());
            if !confirm(rl, &request.message()) {
                println!("Cancelled.");
                return;
            }

            match request.url() {
                Ok(url) => {
                    info!("Dialing {} for {}", url, request.name());
                    println!("Dialing {} ...", url);
                },
                Err(e) => println!("Error: {e}"),
            }
        }
        _ => println!("Unknown command"),
    }
}

#[derive(Parser, Debug)]
#[command(name = "contacts")]
#[command(version = "1.0")]
#[command(about = "Browse, search and call your contacts", long_about = None)]
struct Options {
    /// The configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// The directory holding the address book
    #[arg(short, long, value_name = "PATH")]
    data_dir: Option<String>,

    /// Browse a JSON contacts file instead of the address book
    #[arg(long, value_name = "FILE")]
    contacts: Option<String>,

    /// Initial search keyword
    #[arg(short, long, value_name = "KEYWORD")]
    filter: Option<String>,
}

fn open_source(opts: &Options, cfg: &dyn Config, rl: &mut Reedline) -> Result<Box<dyn ContactSource>, String> {
    if let Some(path) = opts.contacts.as_ref() {
        let source = ArraySource::load(path).map_err(|e| e.to_string())?;
        return Ok(Box::new(source));
    }

    let path = cfg.address_book();
    let mut book = AddressBookBuilder::new(&path)
        .with_authorization(cfg.authorization())
        .with_sort_order(cfg.sort_order())
        .build()
        .map_err(|e| e.to_string())?;

    match book.authorization() {
        Authorization::NotDetermined | Authorization::Denied => {
            if confirm(rl, "Allow access to your contacts?") {
                book.set_authorization(Authorization::Authorized);
            } else {
                warn!("Access to address book {} was not granted", path);
                println!("Please give us permission to access your contacts.");
                println!("Set \"access\": \"authorized\" in the configuration file to grant it.");
            }
        },
        Authorization::Restricted => {
            println!("Unfortunately, we are not able to access your contacts.");
        },
        Authorization::Authorized => {},
    }

    Ok(Box::new(book))
}

fn main() {
    let opts = Options::parse();

    let mut b = cfg::Builder::new();
    if let Some(path) = opts.config.as_ref() {
        if let Err(e) = b.load(path) {
            eprintln!("Loading config error: {e}");
            return;
        }
    }
    if let Some(dir) = opts.data_dir.as_ref() {
        b.with_data_dir(dir);
    }

    let cfg = match b.build() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Invalid config: {e}");
            return;
        }
    };

    logger::setup(cfg.log_level(), cfg.log_file().as_deref());
    logger::revert_console_output();

    #[cfg(feature = "inspect")]
    cfg.dump();

    let mut rl = Reedline::create();
    let source = match open_source(&opts, cfg.as_ref(), &mut rl) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Opening contacts error: {e}");
            logger::teardown();
            return;
        }
    };

    let mut index = ContactIndex::new(source, opts.filter.as_deref());
    let mut cli = build_cli();

    println!("Welcome to the contact browser. Type 'help' for commands, 'exit' to quit.\n");

    loop {
        let prompt = BrowserPrompt::new(index.filter());
        let Ok(sig) = rl.read_line(&prompt) else {
            println!("\n Fatal error occurred.");
            continue;
        };
        match sig {
            Signal::Success(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }

                match input {
                    "exit" | "quit" => {
                        println!("Goodbye!");
                        break;
                    },
                    "help" => {
                        _ = cli.print_long_help();
                        continue;
                    }
                    _ => {}
                }

                let args: Vec<String> = input.split_whitespace().map(|s| s.to_string())
                    .collect();

                if args[0] == "help" && args.len() > 1 {
                    _ = match cli.find_subcommand_mut(args[1].as_str()) {
                        Some(cmd) => cmd.print_long_help(),
                        None => cli.print_long_help(),
                    };
                    continue;
                }

                let cmd = args.join(" ");
                match cli.clone().try_get_matches_from(args) {
                    Ok(matches) => execute_command(matches, &mut index, &mut rl),
                    Err(_) => {
                        println!("Error: command not found: '{}'", cmd);
                    }
                }
            }
            Signal::CtrlC | Signal::CtrlD => {
                println!("\nGoodbye!");
                break;
            }
        }
    }

    logger::teardown();
}
