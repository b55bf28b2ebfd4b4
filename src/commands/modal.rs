//! Confirmation-dialog wiring.
//!
//! Ensures an existing component can open a confirmation dialog: the modal
//! service import and constructor parameter are added if absent, and when a
//! template key is given, the core-import members and a `@ViewChild` handle
//! for the named template are wired in as well.

use ngsmith_core::patch::Patched;
use ngsmith_core::prelude::*;
use ngsmith_core::{add_constructor_parameter, add_field_after_constructor, add_import_members};

use crate::cli::ModalArgs;
use crate::config::Settings;
use crate::workspace::apply_patch;

const MODAL_IMPORT: &str = "ng-zorro-antd/modal";
const MODAL_SERVICE: &str = "NzModalService";

/// Run the wiring pipeline against a component file.
pub fn run(args: ModalArgs, settings: &Settings) -> Result<()> {
    apply_patch(&args.file, args.write, |text| {
        wire_modal(text, args.tpl_key.as_deref(), &settings.patch.core_import)
    })
}

/// Apply the full wiring sequence; `applied` is true when any step edited
/// the text.
pub fn wire_modal(text: &str, tpl_key: Option<&str>, core_import: &str) -> Patched {
    let mut applied = false;
    let mut text = text.to_string();

    if let Some(key) = tpl_key {
        let step = add_import_members(&text, core_import, &["TemplateRef", "ViewChild"]);
        applied |= step.applied;

        let step = add_field_after_constructor(
            &step.text,
            &format!("@ViewChild('{key}') {key}!: TemplateRef<any>;"),
        );
        applied |= step.applied;
        text = step.text;
    }

    let step = add_import_members(&text, MODAL_IMPORT, &[MODAL_SERVICE]);
    applied |= step.applied;

    let step = add_constructor_parameter(
        &step.text,
        &format!("private nzModalService: {MODAL_SERVICE}"),
    );
    applied |= step.applied;

    Patched {
        text: step.text,
        applied,
    }
}
