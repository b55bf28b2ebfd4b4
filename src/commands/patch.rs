//! Patch commands: one read-modify-write cycle per invocation.

use ngsmith_core::prelude::*;
use ngsmith_core::{
    add_constructor_parameter, add_field_after_constructor, add_import_members, class_name,
    register_in_declarations,
};

use crate::cli::{DeclareArgs, PatchCommand};
use crate::config::Settings;
use crate::workspace::apply_patch;

/// Dispatch one of the patch subcommands.
pub fn run(command: PatchCommand, settings: &Settings) -> Result<()> {
    match command {
        PatchCommand::Import(args) => {
            let members: Vec<&str> = args.members.iter().map(String::as_str).collect();
            apply_patch(&args.file, args.write, |text| {
                add_import_members(text, &args.module, &members)
            })
        }
        PatchCommand::CtorParam(args) => apply_patch(&args.file, args.write, |text| {
            add_constructor_parameter(text, &args.param)
        }),
        PatchCommand::Field(args) => apply_patch(&args.file, args.write, |text| {
            add_field_after_constructor(text, &args.field)
        }),
        PatchCommand::Declare(args) => declare(args, settings),
    }
}

fn declare(args: DeclareArgs, settings: &Settings) -> Result<()> {
    let name = args.name.trim();
    if name.is_empty() {
        return Err(Error::invalid_name(args.name));
    }

    let class = format!("{}{}", class_name(name), settings.naming.component_suffix);
    let import_path = args.import_path.clone().unwrap_or_else(|| {
        format!(
            "./{}/{name}/{name}.component",
            settings.naming.components_dir
        )
    });
    debug!(class = %class, path = %import_path, "registering component");

    apply_patch(&args.file, args.write, |text| {
        register_in_declarations(text, &class, &import_path)
    })
}
