//! End-to-end tests for each built-in type through the registry API.

use neo4j_typelib::{Error, TypeInfo, TypeLib, Value, is_guid};
use pretty_assertions::assert_eq;

fn norm(tlib: &TypeLib, name: &str, valu: impl Into<Value>) -> Value {
    tlib.type_norm(name, &valu.into(), None).unwrap().0
}

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn test_bool_text_forms() {
    let tlib = TypeLib::new();
    assert_eq!(norm(&tlib, "bool", "YES"), Value::Int(1));
    assert_eq!(norm(&tlib, "bool", "off"), Value::Int(0));
    assert!(matches!(
        tlib.type_norm("bool", &Value::from("maybe"), None),
        Err(Error::BadValue { .. })
    ));
    assert_eq!(tlib.type_repr("bool", &Value::Int(1)).unwrap(), "true");
}

#[test]
fn test_int_min_max_accumulation() {
    let tlib = TypeLib::new();
    let old = Value::Int(30);
    assert_eq!(tlib.type_norm("int:min", &Value::Int(50), Some(&old)).unwrap().0, Value::Int(30));
    assert_eq!(tlib.type_norm("int:max", &Value::Int(50), Some(&old)).unwrap().0, Value::Int(50));
    assert_eq!(tlib.type_norm("int", &Value::Int(50), Some(&old)).unwrap().0, Value::Int(50));
}

#[test]
fn test_int_parse_and_repr() {
    let tlib = TypeLib::new();
    assert_eq!(tlib.type_parse("int", "0b1010").unwrap().0, Value::Int(10));
    assert!(tlib.type_parse("int", "ten").is_err());

    tlib.add_type("int:hex", TypeInfo::new().with("subof", "int").with("fmt", "0x%x")).unwrap();
    assert_eq!(tlib.type_repr("int:hex", &Value::Int(255)).unwrap(), "0xff");
    assert_eq!(tlib.type_parse("int:hex", "0xff").unwrap().0, Value::Int(255));
}

#[test]
fn test_guid_literal_and_generated() {
    let tlib = TypeLib::new();
    let mixed = "aB".repeat(16);
    assert_eq!(norm(&tlib, "guid", mixed), Value::from("ab".repeat(16)));

    let hyphened = "0123ABCD-0123-abcd-0123-0123456789ab";
    assert_eq!(norm(&tlib, "guid", hyphened), Value::from("0123abcd0123abcd01230123456789ab"));

    let a = norm(&tlib, "guid", "*");
    let b = norm(&tlib, "guid", "*");
    assert!(is_guid(a.as_str().unwrap()));
    assert!(is_guid(b.as_str().unwrap()));
    assert_ne!(a, b);
}

#[test]
fn test_time_norm_and_repr() {
    let tlib = TypeLib::new();
    let tick = norm(&tlib, "time", "2016-12-16 08:46:32");
    assert_eq!(tick, Value::Int(1_481_877_992_000));

    let text = tlib.type_repr("time", &tick).unwrap();
    assert_eq!(text, "2016/12/16 08:46:32.000");
    assert_eq!(tlib.type_parse("time", &text).unwrap().0, tick);
    assert!(tlib.type_norm("time", &Value::from("whenever"), None).is_err());

    tlib.add_type("time:first", TypeInfo::new().with("subof", "time").with("ismin", 1)).unwrap();
    let older = Value::Int(0);
    assert_eq!(tlib.type_norm("time:first", &Value::from("2016"), Some(&older)).unwrap().0, older);
}

#[test]
fn test_tag_seen_range() {
    let tlib = TypeLib::new();
    let t1 = norm(&tlib, "time", "20200101");
    let t2 = norm(&tlib, "time", "20200102");

    for text in ["Foo.Bar@20200101-20200102", "Foo.Bar@20200102-20200101"] {
        let (tag, subs) = tlib.type_norm("syn:tag", &Value::from(text), None).unwrap();
        assert_eq!(tag, Value::from("foo.bar"));
        assert_eq!(subs.get("seen:min"), Some(&t1));
        assert_eq!(subs.get("seen:max"), Some(&t2));
    }
}

#[test]
fn test_json_canonical() {
    let tlib = TypeLib::new();
    assert_eq!(
        norm(&tlib, "json", r#"{"b": 1, "a": [true, null]}"#),
        Value::from(r#"{"a":[true,null],"b":1}"#)
    );
}

#[test]
fn test_str_subtypes_inherit_options() {
    let tlib = TypeLib::new();
    tlib.add_type("foo:enum", TypeInfo::new().with("subof", "str:lwr").with("enums", "red,green")).unwrap();

    assert_eq!(norm(&tlib, "foo:enum", "  RED "), Value::from("red"));
    assert!(tlib.type_norm("foo:enum", &Value::from("blue"), None).is_err());
}

// ============================================================================
// Multi-field types
// ============================================================================

fn inet_lib() -> TypeLib {
    let tlib = TypeLib::new();
    tlib.load_definitions(vec![
        ("inet:fqdn".to_owned(), TypeInfo::new().with("subof", "str:lwr")),
        ("inet:port".to_owned(), TypeInfo::new().with("subof", "int").with("min", 0).with("max", 65535)),
        (
            "inet:srv".to_owned(),
            TypeInfo::new().with("subof", "sepr").with("sep", ":").with("fields", "fqdn,inet:fqdn|port,inet:port"),
        ),
        (
            "inet:web:acct".to_owned(),
            TypeInfo::new()
                .with("subof", "comp")
                .with("fields", "site=inet:fqdn,user=str:lwr")
                .with("optfields", "seen=time,tag=syn:tag,port=inet:port"),
        ),
        ("inet:refs".to_owned(), TypeInfo::new().with("subof", "xref").with("source", "acct,inet:web:acct")),
    ]);
    tlib
}

#[test]
fn test_sepr_field_subprops() {
    let tlib = inet_lib();
    let (norm, subs) = tlib.type_norm("inet:srv", &Value::from("WOOT.com:0x1bb"), None).unwrap();
    assert_eq!(norm, Value::from("woot.com:443"));
    assert_eq!(subs.get("fqdn"), Some(&Value::from("woot.com")));
    assert_eq!(subs.get("port"), Some(&Value::Int(443)));
    assert!(tlib.type_norm("inet:srv", &Value::from("woot.com:99999"), None).is_err());
}

#[test]
fn test_comp_nested_subprops() {
    let tlib = inet_lib();
    let (iden, subs) = tlib
        .type_norm("inet:web:acct", &Value::from("(woot.com, Visi, tag=Hehe.Haha@2016-2017)"), None)
        .unwrap();

    assert!(is_guid(iden.as_str().unwrap()));
    assert_eq!(subs.get("site"), Some(&Value::from("woot.com")));
    assert_eq!(subs.get("user"), Some(&Value::from("visi")));
    assert_eq!(subs.get("tag"), Some(&Value::from("hehe.haha")));
    assert!(subs.contains_key("tag:seen:min"));
    assert!(subs.contains_key("tag:seen:max"));
}

#[test]
fn test_comp_optional_order_does_not_matter() {
    let tlib = inet_lib();
    let a = tlib
        .type_norm("inet:web:acct", &Value::from("(woot.com, visi, seen=\"2016\", port=80)"), None)
        .unwrap()
        .0;
    let b = tlib
        .type_norm("inet:web:acct", &Value::from("(WOOT.COM, VISI, port=0x50, seen=\"2016/01/01\")"), None)
        .unwrap()
        .0;
    let without = tlib.type_norm("inet:web:acct", &Value::from("(woot.com, visi)"), None).unwrap().0;

    assert_eq!(a, b);
    assert_ne!(a, without);
}

#[test]
fn test_comp_guid_is_stable() {
    // separate registries agree on the identifier
    let tlib = inet_lib();
    let a = tlib.type_norm("inet:web:acct", &Value::from("(woot.com, visi)"), None).unwrap().0;
    let fresh = inet_lib();
    let b = fresh
        .type_norm("inet:web:acct", &Value::from(vec![Value::from("woot.com"), Value::from("visi")]), None)
        .unwrap()
        .0;
    assert_eq!(a, b);
}

#[test]
fn test_xref_part_count() {
    let tlib = inet_lib();
    let acct = tlib.type_norm("inet:web:acct", &Value::from("(woot.com, visi)"), None).unwrap().0;

    let (iden, subs) = tlib
        .type_norm(
            "inet:refs",
            &Value::from(vec![acct.clone(), Value::from("inet:fqdn"), Value::from("VERTEX.link")]),
            None,
        )
        .unwrap();
    assert!(is_guid(iden.as_str().unwrap()));
    assert_eq!(subs.get("acct"), Some(&acct));
    assert_eq!(subs.get("xtype"), Some(&Value::from("inet:fqdn")));
    assert_eq!(subs.get("xref:inet:fqdn"), Some(&Value::from("vertex.link")));

    let two = Value::from(vec![acct.clone(), Value::from("inet:fqdn")]);
    let four = Value::from(vec![acct.clone(), Value::from("inet:fqdn"), Value::from("a"), Value::from("b")]);
    assert!(matches!(tlib.type_norm("inet:refs", &two, None), Err(Error::BadValue { .. })));
    assert!(matches!(tlib.type_norm("inet:refs", &four, None), Err(Error::BadValue { .. })));
}
