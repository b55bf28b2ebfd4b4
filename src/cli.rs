//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// A scaffolding companion for Angular / ng-alain projects
#[derive(Parser, Debug)]
#[command(name = "ngsmith")]
#[command(about = "Parse field settings and patch generated Angular sources", long_about = None)]
pub struct Cli {
    /// Project directory used to locate .ngsmith/config.toml
    #[arg(long, global = true, value_name = "DIR")]
    pub project: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a settings line and print its field descriptors as JSON
    Parse {
        /// Raw settings line, e.g. "Name,name;Status,status,select,Active|Inactive"
        setting: String,
    },

    /// Print the SFSchema literal for a settings line
    Schema {
        /// Raw settings line
        setting: String,
    },

    /// Print the STColumn[] literal for a settings line
    Columns {
        /// Raw settings line
        setting: String,
    },

    /// Apply a textual patch to an existing source file
    #[command(subcommand)]
    Patch(PatchCommand),

    /// Wire a confirmation dialog into an existing component
    Modal(ModalArgs),

    /// Write a commented default .ngsmith/config.toml
    Init,
}

#[derive(Subcommand, Debug)]
pub enum PatchCommand {
    /// Ensure members on the named import of a module specifier
    Import(ImportArgs),

    /// Append a parameter to the first constructor
    CtorParam(CtorParamArgs),

    /// Insert a field declaration after an empty constructor
    Field(FieldArgs),

    /// Register a component in a module's declarations array
    Declare(DeclareArgs),
}

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Target source file
    pub file: PathBuf,

    /// Module specifier of the import to extend
    #[arg(long = "from", value_name = "MODULE")]
    pub module: String,

    /// Member name(s) to ensure (repeatable)
    #[arg(long = "member", value_name = "NAME", required = true)]
    pub members: Vec<String>,

    /// Write the result back instead of printing it
    #[arg(long)]
    pub write: bool,
}

#[derive(Args, Debug)]
pub struct CtorParamArgs {
    /// Target source file
    pub file: PathBuf,

    /// Parameter declaration, e.g. "private msg: NzMessageService"
    #[arg(long, value_name = "DECL")]
    pub param: String,

    /// Write the result back instead of printing it
    #[arg(long)]
    pub write: bool,
}

#[derive(Args, Debug)]
pub struct FieldArgs {
    /// Target source file
    pub file: PathBuf,

    /// Field declaration, e.g. "url = '';"
    #[arg(long, value_name = "DECL")]
    pub field: String,

    /// Write the result back instead of printing it
    #[arg(long)]
    pub write: bool,
}

#[derive(Args, Debug)]
pub struct DeclareArgs {
    /// Target module file (e.g. src/app/user/user.module.ts)
    pub file: PathBuf,

    /// Component name in dash-case, e.g. "order-table"
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Import path for the component; defaults to
    /// ./<components_dir>/<name>/<name>.component
    #[arg(long, value_name = "PATH")]
    pub import_path: Option<String>,

    /// Write the result back instead of printing it
    #[arg(long)]
    pub write: bool,
}

#[derive(Args, Debug)]
pub struct ModalArgs {
    /// Target component file
    pub file: PathBuf,

    /// Template reference key; when given, a @ViewChild handle is wired in
    #[arg(long, value_name = "KEY")]
    pub tpl_key: Option<String>,

    /// Write the result back instead of printing it
    #[arg(long)]
    pub write: bool,
}
