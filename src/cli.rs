use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "oinky-install",
    about = "Download the oinky binary for this platform into the current directory"
)]
pub struct Cli {
    /// Move the binary into /usr/local/bin (prompts for sudo when needed)
    #[arg(short, long)]
    pub global: bool,

    /// Anything else on the command line is accepted and ignored.
    #[arg(hide = true, allow_hyphen_values = true, value_name = "IGNORED")]
    pub ignored: Vec<String>,
}

impl Cli {
    /// Whether a global install was requested anywhere on the command line.
    ///
    /// Once an unrecognized token starts filling the catch-all, clap routes a
    /// later `-g`/`--global` there too, so the flag has to be fished back out
    /// of the ignored tokens.
    pub fn effective_global(&self) -> bool {
        self.global || self.ignored.iter().any(|t| t == "-g" || t == "--global")
    }
}
