use clap::{CommandFactory, Parser};
use clip::api::Invocation;
use clip::config::ClipConfig;

const EXAMPLES: &str = "\
Examples:
  clip 'Hello, World!'         # Adds 'Hello, World!' to the clipboard
  clip -s 'Hello, World!'      # Adds it without echoing it back
  clip                         # Pastes the latest item
  echo 'Hello, World!' | clip  # Adds piped text
  clip -p=1                    # Pastes the item before the latest
  clip -p=-1                   # Pastes the oldest item
  clip -d=2                    # Deletes the item at index 2
  clip -d=0,3                  # Deletes the items at indexes 0 and 3
  clip -D                      # Deletes every item
  clip -l | fzf | clip -p      # Picks an item from the list and pastes it
  clip -v                      # Prints version information";

#[derive(Parser, Debug)]
#[command(
    name = "clip",
    bin_name = "clip",
    disable_version_flag = true,
    after_help = EXAMPLES
)]
#[command(about = "Clipboard history for the command line", long_about = None)]
pub struct Cli {
    /// Text to add to the clipboard. Without text, the latest item is pasted
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Do not echo the text back after adding it
    #[arg(short, long, hide = true)]
    pub silent: bool,

    /// Paste the nth item (0 is the latest, negative values count from the oldest)
    #[arg(
        short,
        long,
        value_name = "N",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "0",
        allow_negative_numbers = true
    )]
    pub paste: Option<i64>,

    /// Delete items by index; without indexes, delete the latest item
    #[arg(
        short,
        long,
        value_name = "N,...",
        num_args = 0..,
        require_equals = true,
        value_delimiter = ',',
        allow_negative_numbers = true
    )]
    pub delete: Option<Vec<i64>>,

    /// Delete all items from the clipboard
    #[arg(short = 'D', long)]
    pub delete_all: bool,

    /// List items, newest first; LIMIT and START,END are reserved
    #[arg(
        short,
        long,
        value_name = "LIMIT|START,END",
        num_args = 0..,
        require_equals = true,
        value_delimiter = ',',
        allow_negative_numbers = true
    )]
    pub list: Option<Vec<i64>>,

    /// Print version information
    #[arg(short = 'v', long)]
    pub version: bool,
}

impl Cli {
    /// The parser-independent view the interpreter works on.
    pub fn invocation(&self, config: &ClipConfig) -> Invocation {
        Invocation {
            version: self.version,
            delete_all: self.delete_all,
            delete: self.delete.clone(),
            list: self.list.clone(),
            paste: self.paste,
            silent: config.silent(self.silent),
            positionals: self.text.clone(),
        }
    }
}

/// Full help text, as printed for `--help` and after usage errors.
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}
