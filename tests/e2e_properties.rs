//! Property-based tests: normalization is idempotent and repr parses back.

use neo4j_typelib::types::time::{TIME_LAST, TIME_MAX, TIME_MIN};
use neo4j_typelib::{TypeInfo, TypeLib, Value};
use proptest::prelude::*;

fn renorm(tlib: &TypeLib, name: &str, valu: &Value) -> (Value, Value) {
    let norm = tlib.type_norm(name, valu, None).unwrap().0;
    let text = tlib.type_repr(name, &norm).unwrap();
    let again = tlib.type_parse(name, &text).unwrap().0;
    (norm, again)
}

proptest! {
    #[test]
    fn int_repr_parses_back(i in any::<i64>()) {
        let tlib = TypeLib::new();
        let (norm, again) = renorm(&tlib, "int", &Value::Int(i));
        prop_assert_eq!(norm, again);
    }

    #[test]
    fn hex_fmt_repr_parses_back(i in 0i64..=i64::MAX) {
        let tlib = TypeLib::new();
        tlib.add_type("int:hex", TypeInfo::new().with("subof", "int").with("fmt", "0x%x")).unwrap();
        let (norm, again) = renorm(&tlib, "int:hex", &Value::Int(i));
        prop_assert_eq!(norm, again);
    }

    #[test]
    fn str_lwr_is_idempotent(s in "[ -~]{0,32}") {
        let tlib = TypeLib::new();
        let (norm, again) = renorm(&tlib, "str:lwr", &Value::from(s));
        prop_assert_eq!(norm, again);
    }

    #[test]
    fn time_repr_parses_back(tick in prop_oneof![TIME_MIN..=TIME_LAST, Just(TIME_MAX)]) {
        let tlib = TypeLib::new();
        let (norm, again) = renorm(&tlib, "time", &Value::Int(tick));
        prop_assert_eq!(norm, again);
    }

    #[test]
    fn time_rejects_unrepresentable(tick in prop_oneof![i64::MIN..TIME_MIN, (TIME_LAST + 1)..TIME_MAX]) {
        let tlib = TypeLib::new();
        prop_assert!(tlib.type_norm("time", &Value::Int(tick), None).is_err());
    }

    #[test]
    fn sepr_repr_parses_back(host in "[a-z]{1,12}\\.[a-z]{2,4}", port in 0i64..=65535) {
        let tlib = TypeLib::new();
        tlib.add_type("inet:port", TypeInfo::new().with("subof", "int").with("min", 0).with("max", 65535)).unwrap();
        tlib.add_type(
            "inet:srv",
            TypeInfo::new().with("subof", "sepr").with("sep", ":").with("fields", "host,str:lwr|port,inet:port"),
        )
        .unwrap();

        let valu = Value::from(vec![Value::from(host.to_uppercase()), Value::Int(port)]);
        let (norm, again) = renorm(&tlib, "inet:srv", &valu);
        prop_assert_eq!(&norm, &again);
        prop_assert_eq!(norm, Value::from(format!("{host}:{port}")));
    }

    #[test]
    fn comp_ignores_optional_order(
        pairs in Just(vec![
            ("seen", Value::from("2016/01/01")),
            ("port", Value::Int(80)),
            ("tag", Value::from("foo.bar")),
            ("note", Value::from("hehe")),
        ])
        .prop_shuffle()
    ) {
        let tlib = TypeLib::new();
        tlib.add_type(
            "foo:comp",
            TypeInfo::new()
                .with("subof", "comp")
                .with("fields", "name=str:lwr")
                .with("optfields", "seen=time,port=int,tag=syn:tag,note=str"),
        )
        .unwrap();

        let sorted = [
            Value::from("visi"),
            Value::from(vec![Value::from("note"), Value::from("hehe")]),
            Value::from(vec![Value::from("port"), Value::Int(80)]),
            Value::from(vec![Value::from("seen"), Value::from("2016/01/01")]),
            Value::from(vec![Value::from("tag"), Value::from("foo.bar")]),
        ];
        let expected = tlib.type_norm("foo:comp", &Value::from(sorted.to_vec()), None).unwrap().0;

        let mut items = vec![Value::from("VISI")];
        items.extend(pairs.into_iter().map(|(k, v)| Value::from(vec![Value::from(k), v])));
        let got = tlib.type_norm("foo:comp", &Value::from(items), None).unwrap().0;

        prop_assert_eq!(got, expected);
    }
}
