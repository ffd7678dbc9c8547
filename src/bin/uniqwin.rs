use std::path::PathBuf;

use clap::Parser;

use uniqwinlib::{find_unique, parse_hex};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// the hex file to read
    #[clap(short, long, default_value = "test_data.txt")]
    file: PathBuf,
    /// the window length
    #[clap(short = 'l', long, default_value_t = 20)]
    window_len: usize,
    /// debugging print level (1 = candidates and matches, 2 = window searches)
    #[clap(short, long, default_value_t = 0)]
    debug: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let log_level = match args.debug {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::builder()
        .format_module_path(false)
        .format_timestamp_millis()
        .filter_level(log_level)
        .init();
    println!(
        "file: {:?}, window_len: {}, debug: {}",
        args.file, args.window_len, args.debug
    );
    let input = std::fs::read_to_string(&args.file)
        .map_err(|e| anyhow::anyhow!("error reading {:?}: {}", args.file, e))?;
    let data = parse_hex(&input)?;
    log::debug!("read {} bytes from {:?}", data.len(), args.file);
    match find_unique(&data, args.window_len) {
        Some(pos) => println!(
            "unique window of length {} found at pos = {}",
            args.window_len, pos
        ),
        None => println!("no unique window of length {} found", args.window_len),
    }
    Ok(())
}
