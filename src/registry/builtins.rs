//! Built-in types and casts every registry starts with.

use crate::model::{TypeDef, TypeInfo, Value};
use crate::types::guid_of;
use crate::types::bad_valu;
use super::{country, TypeLib};

fn def(name: &str, info: TypeInfo) -> TypeDef {
    (name.to_owned(), info)
}

fn ctor(id: &str, doc: &str) -> TypeInfo {
    TypeInfo::new().with("ctor", id).with("doc", doc)
}

fn subof(base: &str) -> TypeInfo {
    TypeInfo::new().with("subof", base)
}

/// The built-in definitions, in load order.
pub fn definitions() -> Vec<TypeDef> {
    vec![
        def("str", ctor("str", "The base string type")),
        def("int", ctor("int", "The base integer type")),
        def("bool", ctor("bool", "A boolean type")),
        def("json", ctor("json", "A json type (stored as str)")),
        def("guid", ctor("guid", "A Globally Unique Identifier type")),
        def("sepr", ctor("sepr", "A multi-field composite type which uses separated repr values")),
        def("comp", ctor("comp", "A multi-field composite type which generates a stable guid from normalized fields")),
        def("xref", ctor("xref", "A multi-field composite type which can be used to link a known form to an unknown form")),
        def("time", ctor("time", "Timestamp in milliseconds since epoch").with("ex", "20161216084632")),
        def("syn:tag", ctor("tag", "A hierarchical tag").with("ex", "foo.bar")),

        def("syn:prop", subof("str").with("regex", r"^([\w]+:)*([\w]+|\*)$").with("lower", 1)),
        def("syn:type", subof("str").with("regex", r"^([\w]+:)*[\w]+$").with("lower", 1)),
        def("syn:glob", subof("str").with("regex", r"^([\w]+:)*[\w]+:\*$").with("lower", 1)),

        def("int:min", subof("int").with("ismin", 1)),
        def("int:max", subof("int").with("ismax", 1)),

        def("str:lwr", subof("str").with("lower", 1).with("strip", 1)),
        def("str:txt", subof("str").with("doc", "Multi-line text or text blob.")),
        def("str:hex", subof("str").with("frob_int_fmt", "%x").with("regex", r"^[0-9a-f]+$").with("lower", 1)),
    ]
}

/// Register the built-in types and casts.
pub fn load(tlib: &TypeLib) {
    tlib.load_definitions(definitions());

    tlib.add_type_cast("country:2:cc", |valu: &Value| {
        let Some(text) = valu.as_str() else {
            return Err(bad_valu("country:2:cc", valu, "expected a country name"));
        };
        let key = text.replace('.', "").to_lowercase();
        Ok(Value::from(country::country_to_iso(key.trim())))
    });

    tlib.add_type_cast("make:guid", |valu: &Value| Ok(Value::String(guid_of(valu)?)));
}
