use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{bail, WrapErr};

use logictex::table::{LogicTable, Mode};
use logictex::term::RawTerm;

#[derive(Debug, Parser)]
#[command(author, version)]
#[command(about = "Truth tables for propositional logic expressions")]
struct Cli {
    /// Term as JSON, e.g. '[["A", "&", "B"], "=", ["~", "B"]]'.
    #[arg(value_name = "JSON", required_unless_present = "file")]
    term: Option<String>,

    /// Read the term from a JSON file instead.
    #[arg(short, long, value_name = "PATH", conflicts_with = "term")]
    file: Option<PathBuf>,

    /// Only show the value of the whole expression.
    #[arg(short, long)]
    simple: bool,

    /// Evaluate a single assignment, e.g. `TF` (one letter per variable).
    #[arg(short, long, value_name = "TF..")]
    assignment: Option<String>,

    /// Write the LaTeX table to `<QID>.tex` and print its `\input` line.
    #[arg(short, long, value_name = "QID")]
    qid: Option<String>,

    /// Directory for the `.tex` file.
    #[arg(long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Print a plain text table instead of LaTeX.
    #[arg(long, conflicts_with = "qid")]
    plain: bool,

    /// Log level.
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: simplelog::LevelFilter,
}

fn parse_assignment(s: &str) -> color_eyre::Result<Vec<bool>> {
    s.chars()
        .map(|c| match c {
            'T' | 't' | '1' => Ok(true),
            'F' | 'f' | '0' => Ok(false),
            _ => bail!("invalid truth value '{}' in assignment '{}'", c, s),
        })
        .collect()
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    log::debug!("args = {:?}", args);

    let json = match (&args.term, &args.file) {
        (_, Some(path)) => {
            std::fs::read_to_string(path).wrap_err_with(|| format!("failed to read {}", path.display()))?
        }
        (Some(term), None) => term.clone(),
        (None, None) => bail!("no term given"),
    };
    let raw = RawTerm::from_json(&json)?;

    let mut table = LogicTable::from_raw(&raw)?;
    if let Some(assignment) = &args.assignment {
        table = table.with_assignment(parse_assignment(assignment)?)?;
    }

    let mode = if args.simple { Mode::Simple } else { Mode::Full };

    if let Some(qid) = &args.qid {
        let input = table.write_question(&args.out_dir, qid, mode)?;
        println!("{}", input);
    } else if args.plain {
        print!("{}", table.to_plain(mode)?);
    } else {
        print!("{}", table.to_tex(mode)?);
    }

    Ok(())
}
