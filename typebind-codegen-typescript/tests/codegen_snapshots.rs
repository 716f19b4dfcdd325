//! Snapshot tests for TypeScript code generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::fs;

use tempfile::TempDir;
use typebind_codegen::{Generator, Layout, PreviewFile, RenderContext, testing::StaticSource};
use typebind_codegen_typescript::TypeScriptCodegen;
use typebind_ir::HostPlatform;
use typebind_schema::{OutputType, Overwrite, Registry};

fn preview(source: &StaticSource, output_type: OutputType) -> Vec<PreviewFile> {
    let host = HostPlatform::default();
    let target = TypeScriptCodegen::new();
    Generator::new(
        &target,
        source,
        &host,
        RenderContext::new(2024, output_type),
    )
    .layout(Layout::new("com."))
    .packages(vec!["com.example".to_string(), "com.example.other".to_string()])
    .markers(vec!["XmlType".to_string(), "XmlEnum".to_string()])
    .preview()
    .expect("preview failed")
    .files
}

fn get_file<'a>(files: &'a [PreviewFile], path: &str) -> &'a str {
    files
        .iter()
        .find(|f| f.path == path)
        .map(|f| f.content.as_str())
        .unwrap_or_else(|| panic!("{path} not generated"))
}

#[test]
fn test_widget_class() {
    let files = preview(&StaticSource::widgets(), OutputType::Class);
    insta::assert_snapshot!(get_file(&files, "example/Widget.ts"), @r#"
// Generated by typebind (2024). Do not edit by hand.

import { Base } from "./Base";
import { Gadget } from "./other/Gadget";

export class Widget extends Base {
  /** Serialized as `default`. */
  _default?: string;
  /** Serialized as `interface`. */
  _interface?: Gadget[];
}
"#);
}

#[test]
fn test_abstract_base_class() {
    let files = preview(&StaticSource::widgets(), OutputType::Class);
    insta::assert_snapshot!(get_file(&files, "example/Base.ts"), @r#"
// Generated by typebind (2024). Do not edit by hand.

export abstract class Base {
  href?: string;
}
"#);
}

#[test]
fn test_import_from_parent_directory() {
    let files = preview(&StaticSource::widgets(), OutputType::Class);
    insta::assert_snapshot!(get_file(&files, "example/other/Gadget.ts"), @r#"
// Generated by typebind (2024). Do not edit by hand.

import { Widget } from "../Widget";

export class Gadget {
  size?: number;
  owner?: Widget;
}
"#);
}

#[test]
fn test_interface_output() {
    let files = preview(&StaticSource::widgets(), OutputType::Interface);
    insta::assert_snapshot!(get_file(&files, "example/other/Gadget.ts"), @r#"
// Generated by typebind (2024). Do not edit by hand.

import type { Widget } from "../Widget";

export interface Gadget {
  size?: number;
  owner?: Widget;
}
"#);
}

#[test]
fn test_enum() {
    let files = preview(&StaticSource::widgets(), OutputType::Class);
    insta::assert_snapshot!(get_file(&files, "example/Color.ts"), @r#"
// Generated by typebind (2024). Do not edit by hand.

export enum Color {
  RED = "RED",
  GREEN = "GREEN",
  BLUE = "BLUE",
}
"#);
}

#[test]
fn test_barrels() {
    let files = preview(&StaticSource::widgets(), OutputType::Class);
    insta::assert_snapshot!(get_file(&files, "example/index.ts"), @r#"
// Generated by typebind (2024). Do not edit by hand.

export { Base } from "./Base";
export { Color } from "./Color";
export { Widget } from "./Widget";
export * as other from "./other";
"#);
    insta::assert_snapshot!(get_file(&files, "index.ts"), @r#"
// Generated by typebind (2024). Do not edit by hand.

export * as example from "./example";
"#);
}

const REGISTRY: &str = r#"
[[types]]
name = "com.vmware.vcloud.api.rest.schema.ResourceType"
abstract = true
markers = ["XmlType"]
fields = [
  { name = "href", type = "String" },
  { name = "link", type = "java.util.List<LinkType>" },
]

[[types]]
name = "com.vmware.vcloud.api.rest.schema.LinkType"
markers = ["XmlType"]
fields = [
  { name = "rel", type = "String" },
]

[[types]]
name = "com.vmware.vcloud.api.rest.schema.extension.HostType"
supertype = "com.vmware.vcloud.api.rest.schema.ResourceType"
markers = ["XmlType"]
fields = [
  { name = "created", type = "javax.xml.datatype.XMLGregorianCalendar" },
  { name = "cpus", type = "int" },
]
"#;

#[test]
fn test_generate_from_registry() {
    let registry = Registry::from_str_with_filename(REGISTRY, "types.toml").expect("registry");
    let host = HostPlatform::default();
    let target = TypeScriptCodegen::new();
    let temp = TempDir::new().expect("temp dir");

    let result = Generator::new(
        &target,
        &registry,
        &host,
        RenderContext::new(2024, OutputType::Class),
    )
    .packages(vec![
        "com.vmware.vcloud.api.rest.schema".to_string(),
        "com.vmware.vcloud.api.rest.schema.extension".to_string(),
    ])
    .markers(vec!["XmlType".to_string()])
    .generate(temp.path(), Overwrite::None)
    .expect("generate failed");

    assert_eq!(result.total_types(), 3);

    let host_type = fs::read_to_string(
        temp.path()
            .join("vcloud/api/rest/schema/extension/HostType.ts"),
    )
    .expect("HostType.ts");
    insta::assert_snapshot!(host_type, @r#"
// Generated by typebind (2024). Do not edit by hand.

import { ResourceType } from "../ResourceType";

export class HostType extends ResourceType {
  created?: Date;
  cpus?: number;
}
"#);

    let resource = fs::read_to_string(temp.path().join("vcloud/api/rest/schema/ResourceType.ts"))
        .expect("ResourceType.ts");
    assert!(resource.contains("import { LinkType } from \"./LinkType\";"));
    assert!(resource.contains("  link?: LinkType[];"));

    for barrel in ["index.ts", "vcloud/index.ts", "vcloud/api/rest/index.ts"] {
        assert!(temp.path().join(barrel).exists(), "{barrel} missing");
    }
}
