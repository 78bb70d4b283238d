use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;
use video_id::{VideoMetadata, get_video_id};

#[derive(Parser)]
#[command(
    name = "video-id",
    about = "Extract video ids from YouTube and Vimeo links",
    long_about = "Extract the video id and service from urls, short links and iframe embeds.\n\
    Inputs are read from stdin, one per line, when none are given.\n\n\
    Examples:\n\
      video-id https://youtu.be/ABC12302                  # youtube ABC12302\n\
      video-id --json https://vimeo.com/1230897           # {\"id\":\"1230897\",\"service\":\"vimeo\"}\n\
      video-id --url 'https://www.youtube.com/embed/xyz'  # canonical watch url\n\
      cat links.txt | video-id --strict                   # fail on any miss"
)]
struct Args {
    /// Urls or embed snippets to inspect
    #[arg(help = "Urls or embed snippets (reads stdin when omitted)")]
    inputs: Vec<String>,

    /// Print one JSON object per input
    #[arg(short = 'j', long = "json", help = "Print one JSON object per input")]
    json: bool,

    /// Print the canonical watch url instead of the bare id
    #[arg(
        short = 'u',
        long = "url",
        help = "Print the canonical watch url instead of the bare id"
    )]
    url: bool,

    /// Exit with an error if any input yields no id
    #[arg(
        short = 's',
        long = "strict",
        help = "Exit with status 1 if any input yields no id"
    )]
    strict: bool,
}

fn format_line(meta: &VideoMetadata, as_url: bool) -> String {
    let service = meta.service.map_or("-".to_string(), |s| s.to_string());
    let value = if as_url {
        meta.watch_url()
    } else {
        meta.id.clone()
    };
    format!("{}\t{}", service, value.unwrap_or_else(|| "-".to_string()))
}

fn print_result(out: &mut impl Write, meta: &VideoMetadata, args: &Args) -> video_id::Result<()> {
    if args.json {
        let mut value = serde_json::to_value(meta)?;
        if args.url
            && let Some(url) = meta.watch_url()
        {
            value["url"] = url.into();
        }
        writeln!(out, "{}", serde_json::to_string(&value)?)?;
    } else {
        writeln!(out, "{}", format_line(meta, args.url))?;
    }
    Ok(())
}

fn read_lines(reader: impl BufRead) -> io::Result<Vec<String>> {
    reader
        .lines()
        .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
        .collect()
}

/// Print a result per input; `Ok(false)` when any input had no id
fn run(args: &Args, reader: impl BufRead, out: &mut impl Write) -> video_id::Result<bool> {
    let inputs = if args.inputs.is_empty() {
        read_lines(reader)?
    } else {
        args.inputs.clone()
    };

    let mut all_found = true;

    for input in &inputs {
        let meta = get_video_id(input);
        if meta.id.is_none() {
            tracing::warn!(input = input.as_str(), "no video id found");
            all_found = false;
        }
        print_result(out, &meta, args)?;
    }

    Ok(all_found)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run(&args, stdin.lock(), &mut out) {
        Ok(all_found) => {
            if args.strict && !all_found {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
