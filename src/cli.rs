//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "bulletins", about = "news bulletin paragraph extraction tool.")]
/// Holds every command that is callable by the `bulletins` command.
pub enum Bulletins {
    #[structopt(about = "Extract paragraph records from a bulletin archive")]
    Parse(Parse),
    #[structopt(about = "Remove noise from paragraph records")]
    Clean(Clean),
    #[structopt(about = "Lemmatize cleaned records")]
    Lemmatize(Lemmatize),
}

#[derive(Debug, StructOpt)]
/// Parse command and parameters.
///
/// ```sh
/// USAGE:
///     bulletins parse [OPTIONS] <dst>
///
/// OPTIONS:
///     -c, --config <config>     JSON configuration file
///     -r, --root <root>         archive root, holding one directory per year
///     -y, --years <years>...    comma separated years to parse
///
/// ARGS:
///     <dst>    destination of the records (JSON)
/// ```
pub struct Parse {
    #[structopt(parse(from_os_str), help = "destination of the records (JSON)")]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        short = "c",
        long = "config",
        help = "JSON configuration file"
    )]
    pub config: Option<PathBuf>,
    #[structopt(
        parse(from_os_str),
        short = "r",
        long = "root",
        help = "archive root, holding one directory per year. Overrides configured years."
    )]
    pub root: Option<PathBuf>,
    #[structopt(
        short = "y",
        long = "years",
        help = "comma separated years to parse, used with --root. Defaults to 2019,2020,2021",
        use_delimiter = true
    )]
    pub years: Vec<String>,
}

#[derive(Debug, StructOpt)]
/// Clean command and parameters.
pub struct Clean {
    #[structopt(parse(from_os_str), help = "paragraph records (JSON)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination of cleaned records (JSON)")]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        short = "c",
        long = "config",
        help = "JSON configuration file"
    )]
    pub config: Option<PathBuf>,
    #[structopt(long = "stopwords", help = "remove stopwords")]
    pub stopwords: bool,
    #[structopt(
        parse(from_os_str),
        long = "stopwords-file",
        help = "newline separated stopword list"
    )]
    pub stopwords_file: Option<PathBuf>,
    #[structopt(
        long = "min-words",
        help = "drop paragraphs with this many words or less"
    )]
    pub min_words: Option<usize>,
}

#[derive(Debug, StructOpt)]
/// Lemmatize command and parameters.
pub struct Lemmatize {
    #[structopt(parse(from_os_str), help = "cleaned (or lemmatized, with --repair) records")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination of lemmatized records (JSON)")]
    pub dst: PathBuf,
    #[structopt(
        short = "e",
        long = "endpoint",
        help = "morphological analysis service",
        default_value = "http://localhost:8090"
    )]
    pub endpoint: String,
    #[structopt(long = "repair", help = "only re-submit records that failed")]
    pub repair: bool,
}
