/// Collection CLI
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use collection::{Collection, Result};

fn main() -> Result<()> {
    env_logger::init();

    let matches = App::new("collection")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about("Ordered key/value collection CLI")
        .arg(
            Arg::with_name("item")
                .short("i")
                .long("item")
                .value_name("KEY=VALUE")
                .help("Item to insert, applied in order")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1),
        )
        .subcommand(
            SubCommand::with_name("get")
                .about("Print the value stored under a key")
                .arg(Arg::with_name("key").required(true)),
        )
        .subcommand(
            SubCommand::with_name("has")
                .about("Print whether a key is present")
                .arg(Arg::with_name("key").required(true)),
        )
        .subcommand(SubCommand::with_name("keys").about("Print all keys in insertion order"))
        .subcommand(SubCommand::with_name("count").about("Print the number of items"))
        .subcommand(SubCommand::with_name("all").about("Print all items in insertion order"))
        .subcommand(
            SubCommand::with_name("match")
                .about("Print the items whose key matches a regular expression")
                .arg(Arg::with_name("pattern").required(true)),
        )
        .subcommand(SubCommand::with_name("upper").about("Uppercase every value and print all items"))
        .get_matches();

    let mut items = load_items(&matches)?;
    log::info!("Loaded {} items", items.count());

    match matches.subcommand() {
        ("get", Some(sub_match)) => {
            let key = required(sub_match, "key")?;
            match items.get(key) {
                None => {
                    println!("Key not found");
                    std::process::exit(1);
                }
                Some(value) => println!("{}", value),
            }
        }
        ("has", Some(sub_match)) => {
            let key = required(sub_match, "key")?;
            println!("{}", items.has(key));
        }
        ("keys", _) => {
            for key in items.keys() {
                println!("{}", key);
            }
        }
        ("count", _) => println!("{}", items.count()),
        ("all", _) => print_items(&items),
        ("match", Some(sub_match)) => {
            let pattern = required(sub_match, "pattern")?;
            let matched: Collection<String> = items.matches(pattern)?.into();
            print_items(&matched);
        }
        ("upper", _) => {
            items.each(|_, value| *value = value.to_uppercase());
            print_items(&items);
        }
        (name, _) => {
            return Err(format!("Unexpected subcommand: {}", name).into());
        }
    }

    Ok(())
}

// Build the collection from the `--item KEY=VALUE` arguments
fn load_items(matches: &ArgMatches) -> Result<Collection<String>> {
    let mut items = Collection::new();

    for item in matches.values_of("item").into_iter().flatten() {
        let mut parts = item.splitn(2, '=');
        match (parts.next(), parts.next()) {
            (Some(key), Some(value)) => {
                items.set(key, value.to_owned());
            }
            _ => return Err(format!("Expected KEY=VALUE, got {:?}", item).into()),
        }
    }

    Ok(items)
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str> {
    matches
        .value_of(name)
        .ok_or_else(|| format!("Missing argument: {}", name).into())
}

fn print_items(items: &Collection<String>) {
    for (key, value) in items {
        println!("{}={}", key, value);
    }
}
