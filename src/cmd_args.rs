use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile name
    /// Profile to read the API settings from. Default is 'default'.
    /// If the profile is not configured, built-in defaults are used.
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    /// Search submitted as soon as the application starts
    #[clap(short = 'q', long, help = "initial search query")]
    query: Option<String>,

    /// Page requested together with the initial query
    #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..), help = "result page for --query")]
    page: u32,

    /// Print the results for --query and exit without starting the UI
    #[clap(long, requires = "query", help = "print results and exit")]
    print: bool,

    /// Verbose logging
    #[clap(short = 'v', long, help = "enable debug logging")]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    query: Option<String>,
    page: u32,
    print: bool,
    verbose: bool,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            query: args.query,
            page: args.page,
            print: args.print,
            verbose: args.verbose,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn profile(&self) -> &String {
        &self.profile
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn print(&self) -> bool {
        self.print
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
