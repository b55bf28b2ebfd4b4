//! End-to-end patch cycles over realistic generated sources.

use angular_smith::cli::{DeclareArgs, PatchCommand};
use angular_smith::commands::modal::wire_modal;
use angular_smith::commands::patch;
use angular_smith::config::Settings;
use angular_smith::workspace::apply_patch;

use ngsmith_core::{add_constructor_parameter, register_in_declarations};

const COMPONENT: &str = include_str!("fixtures/user-card.component.ts");
const MODULE: &str = include_str!("fixtures/user.module.ts");

#[test]
fn test_register_declaration_roundtrip() {
    let result = register_in_declarations(
        MODULE,
        "OrderTableComponent",
        "./components/order-table/order-table.component",
    );
    assert!(result.applied);

    // The new import is the very first line of the file.
    let first_line = result.text.lines().next().unwrap();
    assert_eq!(
        first_line,
        "import { OrderTableComponent } from './components/order-table/order-table.component';"
    );

    // The declarations array now carries both components.
    assert!(result
        .text
        .contains("declarations: [UserCardComponent, OrderTableComponent]"));

    // A second registration is a no-op.
    let again = register_in_declarations(
        &result.text,
        "OrderTableComponent",
        "./components/order-table/order-table.component",
    );
    assert!(!again.applied);
    assert_eq!(again.text, result.text);
}

#[test]
fn test_constructor_parameter_preserves_existing_parameters() {
    let result = add_constructor_parameter(COMPONENT, "private nzModalService: NzModalService");
    assert!(result.applied);
    assert!(result.text.contains(
        "constructor(\n  private modal: ModalHelper,\n  private msg: NzMessageService,\n  private nzModalService: NzModalService,\n)"
    ));
}

#[test]
fn test_modal_wiring_on_generated_component() {
    let result = wire_modal(COMPONENT, Some("confirmTpl"), "@angular/core");
    assert!(result.applied);

    // TemplateRef joins the existing core import; ViewChild was already there.
    assert!(result
        .text
        .contains("import { Component, OnInit, ViewChild, TemplateRef } from '@angular/core';"));
    assert!(result
        .text
        .starts_with("import { NzModalService } from 'ng-zorro-antd/modal';\n"));
    assert!(result
        .text
        .contains("@ViewChild('confirmTpl') confirmTpl!: TemplateRef<any>;"));
    assert!(result
        .text
        .contains("private nzModalService: NzModalService,\n)"));

    // Running the whole pipeline again changes nothing.
    let again = wire_modal(&result.text, Some("confirmTpl"), "@angular/core");
    assert!(!again.applied);
    assert_eq!(again.text, result.text);
}

#[test]
fn test_declare_command_writes_module_file() {
    let temp = tempfile::tempdir().unwrap();
    let module_path = temp.path().join("user.module.ts");
    std::fs::write(&module_path, MODULE).unwrap();

    let command = PatchCommand::Declare(DeclareArgs {
        file: module_path.clone(),
        name: "order-table".to_string(),
        import_path: None,
        write: true,
    });
    patch::run(command, &Settings::default()).unwrap();

    let content = std::fs::read_to_string(&module_path).unwrap();
    assert!(content.starts_with(
        "import { OrderTableComponent } from './components/order-table/order-table.component';"
    ));
    assert!(content.contains("declarations: [UserCardComponent, OrderTableComponent]"));
}

#[test]
fn test_apply_patch_skips_missing_target() {
    let temp = tempfile::tempdir().unwrap();
    let missing = temp.path().join("missing.module.ts");

    // A missing file reads as empty text; no declarations array matches, so
    // nothing is applied and no file appears.
    apply_patch(&missing, true, |text| {
        register_in_declarations(text, "FooComponent", "./foo.component")
    })
    .unwrap();

    assert!(!missing.exists());
}
