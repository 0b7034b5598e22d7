use avl_collections::avl_tree::AvlSet;
use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

const KEYS: [u32; 4] = [10, 20, 1, 5];

fn main() -> Result<(), log::SetLoggerError> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let mut set = AvlSet::new();
    for key in KEYS.iter() {
        set.insert(*key);
        info!("inserted {}, tree height is now {}", key, set.height());
    }

    let keys = set.iter().map(|key| key.to_string()).collect::<Vec<String>>();
    println!("{}", keys.join(" "));
    Ok(())
}
