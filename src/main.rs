use clap::Parser;

use listnode::command::parse_values;
use listnode::{Command, LinkedList};

/// Builds a list from `--values` and runs each operation against it in order, printing the list
/// after every step.
#[derive(Parser, Debug)]
#[clap(about = "Play with a singly-linked list")]
struct CmdOptions {
    #[clap(
        short,
        long,
        about = "Comma separated integers the list starts with",
        default_value = "1,5,7,3,6"
    )]
    values: String,
    #[clap(long, about = "Print the list as a JSON array instead of space separated values")]
    json: bool,
    #[clap(
        about = "Operations to apply: append=V prepend=V pop-front find=V find-prev=V \
                 insert-after=A,V insert-before=A,V delete=V clear"
    )]
    operations: Vec<String>,
}

fn print_list(list: &LinkedList<i64>, json: bool) {
    if json {
        match serde_json::to_string(list) {
            Ok(dump) => println!("{}", dump),
            Err(err) => log::error!("Could not serialize list: {}", err),
        }
    } else {
        println!("[{}] (size {})", list, list.get_size());
    }
}

fn main() {
    // Default to info-level output so every operation is reported. Set RUST_LOG to override.
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let options = CmdOptions::parse();

    let values = match parse_values(&options.values) {
        Ok(values) => values,
        Err(err) => {
            log::error!("Invalid --values {:?}: {}", options.values, err);
            std::process::exit(1);
        }
    };
    let commands = match options
        .operations
        .iter()
        .map(|op| op.parse::<Command>())
        .collect::<Result<Vec<Command>, _>>()
    {
        Ok(commands) => commands,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };

    let mut list = LinkedList::from(values);
    log::info!("Built list with {} nodes", list.get_size());
    print_list(&list, options.json);

    for command in commands {
        match command.apply(&mut list) {
            Ok(outcome) => log::info!("{}", outcome),
            // The list is untouched on failure; keep going with the remaining operations.
            Err(err) => log::warn!("{:?} failed: {}", command, err),
        }
        print_list(&list, options.json);
    }
}
