//! Snapshot tests for Python code generation.

use std::fs;

use tempfile::TempDir;
use typebind_codegen::{
    Error, Generator, Layout, PreviewFile, RenderContext, testing::StaticSource,
};
use typebind_codegen_python::PythonCodegen;
use typebind_ir::HostPlatform;
use typebind_schema::{OutputType, Overwrite, Registry};

fn preview(output_type: OutputType) -> Vec<PreviewFile> {
    let source = StaticSource::widgets();
    let host = HostPlatform::default();
    let target = PythonCodegen::new();
    Generator::new(
        &target,
        &source,
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
    let files = preview(OutputType::Class);
    insta::assert_snapshot!(get_file(&files, "example/widget.py"), @r#"
# Generated by typebind (2024). Do not edit by hand.

from typing import List, Optional

from .base import Base
from .other.gadget import Gadget


class Widget(Base):
    _attribute_map = {
        **Base._attribute_map,
        "_default": "default",
        "_interface": "interface",
    }

    def __init__(self, **kwargs):
        super().__init__(**kwargs)
        self._default: Optional[str] = kwargs.get("_default")
        self._interface: Optional[List[Gadget]] = kwargs.get("_interface")
"#);
}

#[test]
fn test_import_from_parent_package() {
    let files = preview(OutputType::Class);
    insta::assert_snapshot!(get_file(&files, "example/other/gadget.py"), @r#"
# Generated by typebind (2024). Do not edit by hand.

from typing import Optional

from ..widget import Widget


class Gadget:
    _attribute_map = {
        "size": "size",
        "owner": "owner",
    }

    def __init__(self, **kwargs):
        self.size: Optional[int] = kwargs.get("size")
        self.owner: Optional[Widget] = kwargs.get("owner")
"#);
}

#[test]
fn test_interface_output_still_renders_classes() {
    let classes = preview(OutputType::Class);
    let interfaces = preview(OutputType::Interface);
    assert_eq!(classes, interfaces);
}

#[test]
fn test_enum() {
    let files = preview(OutputType::Class);
    insta::assert_snapshot!(get_file(&files, "example/color.py"), @r#"
# Generated by typebind (2024). Do not edit by hand.

from enum import Enum


class Color(str, Enum):
    RED = "RED"
    GREEN = "GREEN"
    BLUE = "BLUE"
"#);
}

#[test]
fn test_init_files() {
    let files = preview(OutputType::Class);
    insta::assert_snapshot!(get_file(&files, "example/__init__.py"), @r#"
# Generated by typebind (2024). Do not edit by hand.

from .base import Base
from .color import Color
from .widget import Widget
from . import other
"#);
    insta::assert_snapshot!(get_file(&files, "__init__.py"), @r#"
# Generated by typebind (2024). Do not edit by hand.

from . import example
"#);
}

const REGISTRY: &str = r#"
[[types]]
name = "com.vmware.vcloud.api.rest.LinkType"
markers = ["XmlType"]
fields = [{ name = "href", type = "String" }]

[[types]]
name = "com.vmware.vcloud.api.rest.schema.ovf.environment.PropertyType"
markers = ["XmlType"]
fields = [
  { name = "link", type = "com.vmware.vcloud.api.rest.LinkType" },
  { name = "version", type = "com.vmware.vcloud.api.rest.schemaExt.versioning.v2.VersionInfoType" },
  { name = "lastModified", type = "javax.xml.datatype.XMLGregorianCalendar" },
]

[[types]]
name = "com.vmware.vcloud.api.rest.schemaExt.versioning.v2.VersionInfoType"
markers = ["XmlType"]
"#;

#[test]
fn test_deeply_nested_relative_imports() {
    let registry = Registry::from_str_with_filename(REGISTRY, "types.toml").expect("registry");
    let host = HostPlatform::default();
    let target = PythonCodegen::new();
    let temp = TempDir::new().expect("temp dir");

    Generator::new(
        &target,
        &registry,
        &host,
        RenderContext::new(2024, OutputType::Class),
    )
    .packages(vec![
        "com.vmware.vcloud.api.rest".to_string(),
        "com.vmware.vcloud.api.rest.schema.ovf.environment".to_string(),
        "com.vmware.vcloud.api.rest.schemaExt.versioning.v2".to_string(),
    ])
    .markers(vec!["XmlType".to_string()])
    .generate(temp.path(), Overwrite::None)
    .expect("generate failed");

    let property = fs::read_to_string(
        temp.path()
            .join("vcloud/api/rest/schema/ovf/environment/property_type.py"),
    )
    .expect("property_type.py");
    insta::assert_snapshot!(property, @r#"
# Generated by typebind (2024). Do not edit by hand.

from datetime import datetime
from typing import Optional

from ....link_type import LinkType
from ....schema_ext.versioning.v2.version_info_type import VersionInfoType


class PropertyType:
    _attribute_map = {
        "link": "link",
        "version": "version",
        "last_modified": "lastModified",
    }

    def __init__(self, **kwargs):
        self.link: Optional[LinkType] = kwargs.get("link")
        self.version: Optional[VersionInfoType] = kwargs.get("version")
        self.last_modified: Optional[datetime] = kwargs.get("last_modified")
"#);

    // Directories are snake_cased to match the import paths.
    for init in [
        "__init__.py",
        "vcloud/api/rest/__init__.py",
        "vcloud/api/rest/schema_ext/versioning/v2/__init__.py",
        "vcloud/api/rest/schema/ovf/__init__.py",
    ] {
        assert!(temp.path().join(init).exists(), "{init} missing");
    }
}

fn preview_registry(src: &str, package: &str) -> typebind_codegen::Result<Vec<PreviewFile>> {
    let registry = Registry::from_str_with_filename(src, "types.toml").expect("registry");
    let host = HostPlatform::default();
    let target = PythonCodegen::new();
    Generator::new(
        &target,
        &registry,
        &host,
        RenderContext::new(2024, OutputType::Class),
    )
    .layout(Layout::new("com."))
    .packages(vec![package.to_string()])
    .markers(vec!["XmlType".to_string()])
    .preview()
    .map(|preview| preview.files)
}

const NESTED: &str = r#"
[[types]]
name = "com.example.Outer$Inner"
markers = ["XmlType"]
fields = [{ name = "size", type = "int" }]

[[types]]
name = "com.example.Holder"
markers = ["XmlType"]
fields = [{ name = "inner", type = "Outer$Inner" }]
"#;

#[test]
fn test_nested_type_symbols_are_identifiers() {
    let files = preview_registry(NESTED, "com.example").expect("preview failed");

    insta::assert_snapshot!(get_file(&files, "example/outer__inner.py"), @r#"
# Generated by typebind (2024). Do not edit by hand.

from typing import Optional


class Outer_Inner:
    _attribute_map = {
        "size": "size",
    }

    def __init__(self, **kwargs):
        self.size: Optional[int] = kwargs.get("size")
"#);
    insta::assert_snapshot!(get_file(&files, "example/holder.py"), @r#"
# Generated by typebind (2024). Do not edit by hand.

from typing import Optional

from .outer__inner import Outer_Inner


class Holder:
    _attribute_map = {
        "inner": "inner",
    }

    def __init__(self, **kwargs):
        self.inner: Optional[Outer_Inner] = kwargs.get("inner")
"#);
    insta::assert_snapshot!(get_file(&files, "example/__init__.py"), @r#"
# Generated by typebind (2024). Do not edit by hand.

from .holder import Holder
from .outer__inner import Outer_Inner
"#);
}

const COLLIDING: &str = r#"
[[types]]
name = "com.example.ABCType"
markers = ["XmlType"]

[[types]]
name = "com.example.AbcType"
markers = ["XmlType"]
"#;

#[test]
fn test_types_sharing_a_module_file_are_rejected() {
    let err = preview_registry(COLLIDING, "com.example").unwrap_err();
    match err {
        Error::ModuleCollision {
            module,
            first,
            second,
        } => {
            assert_eq!(module, std::path::PathBuf::from("example/abc_type.py"));
            assert_eq!(first, "com.example.ABCType");
            assert_eq!(second, "com.example.AbcType");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
