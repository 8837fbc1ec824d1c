//! # git-issue CLI
//!
//! Command-line interface for the git-issue tracker.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;

use git_issue::{
    commands::{self, CreateArgs, ListFilter, SearchArgs},
    issue::Status,
};

const GLOBAL_HELP: &str = "\
Repository Layout:
  .issues/open/       Open issues (one Markdown file each)
  .issues/closed/     Closed issues
  .issues/.counter    Issue ID counter
  .issues/template.md Template for new issue bodies

Configuration File (~/.config/git-issue/config):
  default_assignee    Assignee applied when --assignee is omitted
  editor              Editor command for 'gi edit'
  auto_commit         Commit every mutation without requiring --commit

Getting Started:
  gi init                        Initialize .issues in the current directory
  gi create \"Fix login bug\"      Create a new issue
  gi list                        List open issues
  gi close 001                   Close an issue

Learn more:
  gi <COMMAND> --help            Show detailed help for a command";

#[derive(Parser)]
#[command(name = "gi")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "A lightweight CLI tool for managing issues as Markdown files")]
#[command(
    long_about = "git-issue manages issues as Markdown files with YAML frontmatter inside your \
repository. Each issue gets a unique zero-padded ID and a slugified filename, and its \
status is encoded by the directory that holds it: .issues/open/ or .issues/closed/.

Everything is a plain file, so issues are grep-friendly, diffable, and travel with \
the repository — no server, no database, no external integrations."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the .issues directory structure
    #[command(
        long_about = "Initialize the .issues directory in the current directory.\n\n\
Creates the open/ and closed/ status directories, the ID counter file \
(seeded with 1), and a default template for new issue bodies. Refuses to run \
when .issues already exists.",
        after_help = "Examples:\n  \
gi init                         Initialize in current directory\n  \
cd myproject && gi init         Initialize a specific project\n\n\
Note: Run this once per repository, typically at the repository root."
    )]
    Init,

    /// Create a new issue
    #[command(
        long_about = "Create a new issue with the given title.\n\n\
Allocates the next free ID, fills the body from .issues/template.md, and \
writes the file to .issues/open/. The filename is '{id}-{slug}.md' and never \
changes afterwards, even if the title is edited.",
        after_help = "Examples:\n  \
gi create \"Fix authentication bug\"\n  \
gi create Add user profile page\n  \
gi create \"Fix bug\" --assignee john --label bug --label backend\n  \
gi create \"Release checklist\" --commit"
    )]
    Create {
        /// Title of the issue (multiple words are joined)
        #[arg(required = true)]
        title: Vec<String>,

        /// Assign the issue to a user
        #[arg(long)]
        assignee: Option<String>,

        /// Add a label (can be specified multiple times)
        #[arg(short, long)]
        label: Vec<String>,

        /// Commit the change to git
        #[arg(short, long)]
        commit: bool,
    },

    /// Show detailed information about an issue
    #[command(after_help = "Examples:\n  \
gi show 001\n  \
gi show 1                       Short IDs are zero-padded automatically")]
    Show {
        /// Issue ID
        id: String,
    },

    /// List issues
    #[command(
        long_about = "List issues with optional filtering.\n\n\
By default, only open issues are shown. Use --all to include closed issues, \
or --status to pick one status explicitly.",
        after_help = "Examples:\n  \
gi list                         List open issues\n  \
gi list --all                   List all issues\n  \
gi list --assignee john         List issues assigned to john\n  \
gi list --label bug             List issues with the 'bug' label\n  \
gi list --status closed         List closed issues"
    )]
    List {
        /// Include closed issues
        #[arg(short, long)]
        all: bool,

        /// Filter by status
        #[arg(long, value_enum)]
        status: Option<Status>,

        /// Filter by assignee
        #[arg(long)]
        assignee: Option<String>,

        /// Filter by label
        #[arg(long)]
        label: Option<String>,
    },

    /// Search issues by text
    #[command(
        long_about = "Search for issues by text in title and body.\n\n\
The search is case-insensitive and spans both open and closed issues unless \
narrowed with --status.",
        after_help = "Examples:\n  \
gi search \"Redis\"\n  \
gi search authentication --status open\n  \
gi search bug --label backend --assignee john"
    )]
    Search {
        /// Search query (multiple words are joined)
        #[arg(required = true)]
        query: Vec<String>,

        /// Filter by status
        #[arg(long, value_enum)]
        status: Option<Status>,

        /// Filter by assignee
        #[arg(long)]
        assignee: Option<String>,

        /// Filter by label
        #[arg(long)]
        label: Option<String>,
    },

    /// Edit an issue in your editor
    #[command(
        long_about = "Edit an issue by opening its file in your configured editor.\n\n\
The editor comes from the config file, then $VISUAL, then $EDITOR, falling \
back to vim. After the editor exits the file is re-validated and the \
'updated' timestamp is refreshed. A malformed edit is reported but the file \
is left as you saved it."
    )]
    Edit {
        /// Issue ID
        id: String,

        /// Commit the change to git
        #[arg(short, long)]
        commit: bool,
    },

    /// Close an issue
    #[command(
        long_about = "Close an issue by moving it from .issues/open/ to .issues/closed/.\n\n\
The filename is preserved and the 'updated' timestamp is refreshed. Closing \
an already-closed issue is an error and changes nothing."
    )]
    Close {
        /// Issue ID
        id: String,

        /// Commit the change to git
        #[arg(short, long)]
        commit: bool,
    },

    /// Reopen a closed issue
    #[command(
        long_about = "Reopen a closed issue by moving it from .issues/closed/ back to \
.issues/open/.\n\nThe filename is preserved and the 'updated' timestamp is refreshed. \
Reopening an already-open issue is an error and changes nothing."
    )]
    Open {
        /// Issue ID
        id: String,

        /// Commit the change to git
        #[arg(short, long)]
        commit: bool,
    },

    /// Open an issue in the default desktop program
    View {
        /// Issue ID
        id: String,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init(),

        Commands::Create {
            title,
            assignee,
            label,
            commit,
        } => commands::create(CreateArgs {
            title: title.join(" "),
            assignee,
            labels: label,
            commit,
        }),

        Commands::Show { id } => commands::show(&id),

        Commands::List {
            all,
            status,
            assignee,
            label,
        } => commands::list(&ListFilter {
            all,
            status,
            assignee,
            label,
        }),

        Commands::Search {
            query,
            status,
            assignee,
            label,
        } => commands::search(&SearchArgs {
            query: query.join(" "),
            status,
            assignee,
            label,
        }),

        Commands::Edit { id, commit } => commands::edit(&id, commit),

        Commands::Close { id, commit } => commands::execute_close(&id, commit),

        Commands::Open { id, commit } => commands::execute_reopen(&id, commit),

        Commands::View { id } => commands::view(&id),

        Commands::Completions { shell } => commands::completions(shell, &mut Cli::command()),
    }
}
