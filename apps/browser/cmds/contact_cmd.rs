use clap::{arg, value_parser, Command};

pub(crate) fn list_cli() -> Command {
    Command::new("list")
        .about("List all sections and their contacts")
}

pub(crate) fn sections_cli() -> Command {
    Command::new("sections")
        .about("List section headers with the number of contacts in each")
}

pub(crate) fn search_cli() -> Command {
    Command::new("search")
        .about("Only show contacts whose name contains the keyword")
        .arg(arg!(<KEYWORD> ... "The keyword to match against contact names"))
        .arg_required_else_help(true)
}

pub(crate) fn clear_cli() -> Command {
    Command::new("clear")
        .about("Clear the search keyword")
}

pub(crate) fn show_cli() -> Command {
    Command::new("show")
        .about("Show the phone numbers of a contact")
        .arg(arg!(<SECTION> "The section index").value_parser(value_parser!(usize)))
        .arg(arg!(<ROW> "The contact index within the section").value_parser(value_parser!(usize)))
}

pub(crate) fn call_cli() -> Command {
    Command::new("call")
        .about("Call a contact")
        .arg(arg!(<SECTION> "The section index").value_parser(value_parser!(usize)))
        .arg(arg!(<ROW> "The contact index within the section").value_parser(value_parser!(usize)))
        .arg(arg!(-n --number <N> "Which of the contact's phone numbers to call")
                .required(false)
                .default_value("0")
                .value_parser(value_parser!(usize))
        )
}
