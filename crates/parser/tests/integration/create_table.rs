use {
    crate::parse_one,
    def::{FieldConstraint, Path, TableInfo, ValueType},
    parser::{
        ast::{CreateTableStmt, Statement},
        lookup_type_alias, ConstraintKind, Error,
    },
};

fn field(path: Path) -> FieldConstraint {
    FieldConstraint::new(path)
}

fn typed(name: &str, value_type: ValueType) -> FieldConstraint {
    FieldConstraint {
        value_type: Some(value_type),
        ..field(Path::field(name))
    }
}

fn table(info: TableInfo) -> Statement {
    Statement::CreateTable(CreateTableStmt {
        table_name: "test".to_string(),
        if_not_exists: false,
        info,
    })
}

#[test]
fn valid_statements() {
    let cases = vec![
        (
            "basic",
            "CREATE TABLE test",
            table(TableInfo::default()),
        ),
        (
            "if not exists",
            "CREATE TABLE IF NOT EXISTS test",
            Statement::CreateTable(CreateTableStmt {
                table_name: "test".to_string(),
                if_not_exists: true,
                ..Default::default()
            }),
        ),
        (
            "with primary key",
            "CREATE TABLE test(foo INTEGER PRIMARY KEY)",
            table(TableInfo {
                primary_keys: vec![0],
                field_constraints: vec![FieldConstraint {
                    is_primary_key: true,
                    ..typed("foo", ValueType::Integer)
                }],
            }),
        ),
        (
            "with type",
            "CREATE TABLE test(foo INTEGER)",
            table(TableInfo {
                field_constraints: vec![typed("foo", ValueType::Integer)],
                ..Default::default()
            }),
        ),
        (
            "with not null",
            "CREATE TABLE test(foo NOT NULL)",
            table(TableInfo {
                field_constraints: vec![FieldConstraint {
                    is_not_null: true,
                    ..field(Path::field("foo"))
                }],
                ..Default::default()
            }),
        ),
        (
            "with type and not null",
            "CREATE TABLE test(foo INTEGER NOT NULL)",
            table(TableInfo {
                field_constraints: vec![FieldConstraint {
                    is_not_null: true,
                    ..typed("foo", ValueType::Integer)
                }],
                ..Default::default()
            }),
        ),
        (
            "with not null and primary key",
            "CREATE TABLE test(foo INTEGER NOT NULL PRIMARY KEY)",
            table(TableInfo {
                primary_keys: vec![0],
                field_constraints: vec![FieldConstraint {
                    is_primary_key: true,
                    is_not_null: true,
                    ..typed("foo", ValueType::Integer)
                }],
            }),
        ),
        (
            "with primary key and not null",
            "CREATE TABLE test(foo INTEGER PRIMARY KEY NOT NULL)",
            table(TableInfo {
                primary_keys: vec![0],
                field_constraints: vec![FieldConstraint {
                    is_primary_key: true,
                    is_not_null: true,
                    ..typed("foo", ValueType::Integer)
                }],
            }),
        ),
        (
            "with multiple constraints",
            "CREATE TABLE test(foo INTEGER PRIMARY KEY, bar INTEGER NOT NULL, baz[4][1].bat TEXT)",
            table(TableInfo {
                primary_keys: vec![0],
                field_constraints: vec![
                    FieldConstraint {
                        is_primary_key: true,
                        ..typed("foo", ValueType::Integer)
                    },
                    FieldConstraint {
                        is_not_null: true,
                        ..typed("bar", ValueType::Integer)
                    },
                    FieldConstraint {
                        value_type: Some(ValueType::Text),
                        ..field(Path::field("baz").with_index(4).with_index(1).with_field("bat"))
                    },
                ],
            }),
        ),
        (
            "with primary key on a later field",
            "CREATE TABLE test(foo INTEGER, bar TEXT PRIMARY KEY, baz)",
            table(TableInfo {
                primary_keys: vec![1],
                field_constraints: vec![
                    typed("foo", ValueType::Integer),
                    FieldConstraint {
                        is_primary_key: true,
                        ..typed("bar", ValueType::Text)
                    },
                    field(Path::field("baz")),
                ],
            }),
        ),
        (
            "with multiple primary keys using table constraint",
            "CREATE TABLE test(foo integer, bar integer, PRIMARY KEY(foo, bar))",
            table(TableInfo {
                primary_keys: vec![0, 1],
                field_constraints: vec![
                    FieldConstraint {
                        is_primary_key: true,
                        ..typed("foo", ValueType::Integer)
                    },
                    FieldConstraint {
                        is_primary_key: true,
                        ..typed("bar", ValueType::Integer)
                    },
                ],
            }),
        ),
        (
            "with table constraint in reverse order",
            "CREATE TABLE test(foo integer, bar integer, PRIMARY KEY(bar, foo))",
            table(TableInfo {
                primary_keys: vec![1, 0],
                field_constraints: vec![
                    FieldConstraint {
                        is_primary_key: true,
                        ..typed("foo", ValueType::Integer)
                    },
                    FieldConstraint {
                        is_primary_key: true,
                        ..typed("bar", ValueType::Integer)
                    },
                ],
            }),
        ),
        (
            "with all supported fixed size data types",
            "CREATE TABLE test(d double, b bool)",
            table(TableInfo {
                field_constraints: vec![typed("d", ValueType::Double), typed("b", ValueType::Bool)],
                ..Default::default()
            }),
        ),
        (
            "with all supported variable size data types",
            "CREATE TABLE test(i integer, b blob, byt bytes, t text, a array, d document)",
            table(TableInfo {
                field_constraints: vec![
                    typed("i", ValueType::Integer),
                    typed("b", ValueType::Blob),
                    typed("byt", ValueType::Blob),
                    typed("t", ValueType::Text),
                    typed("a", ValueType::Array),
                    typed("d", ValueType::Document),
                ],
                ..Default::default()
            }),
        ),
        (
            "with integer aliases types",
            "CREATE TABLE test(i int, ii int2, ei int8, m mediumint, s smallint, b bigint, t tinyint)",
            table(TableInfo {
                field_constraints: ["i", "ii", "ei", "m", "s", "b", "t"]
                    .into_iter()
                    .map(|name| typed(name, ValueType::Integer))
                    .collect(),
                ..Default::default()
            }),
        ),
        (
            "with double aliases types",
            "CREATE TABLE test(dp DOUBLE PRECISION, r real, d double)",
            table(TableInfo {
                field_constraints: ["dp", "r", "d"]
                    .into_iter()
                    .map(|name| typed(name, ValueType::Double))
                    .collect(),
                ..Default::default()
            }),
        ),
        (
            "with text aliases types",
            "CREATE TABLE test(v VARCHAR(255), c CHARACTER(64), t TEXT)",
            table(TableInfo {
                field_constraints: ["v", "c", "t"]
                    .into_iter()
                    .map(|name| typed(name, ValueType::Text))
                    .collect(),
                ..Default::default()
            }),
        ),
    ];

    for (name, sql, expected) in cases {
        assert_eq!(parse_one(sql), Ok(expected), "{name}");
    }
}

#[test]
fn duplicate_constraints() {
    for (sql, kind) in [
        ("CREATE TABLE test(foo PRIMARY KEY PRIMARY KEY)", ConstraintKind::PrimaryKey),
        ("CREATE TABLE test(foo NOT NULL NOT NULL)", ConstraintKind::NotNull),
        ("CREATE TABLE test(foo PRIMARY KEY INT NOT NULL PRIMARY KEY)", ConstraintKind::PrimaryKey),
        ("CREATE TABLE test(a, foo NOT NULL PRIMARY KEY NOT NULL)", ConstraintKind::NotNull),
    ] {
        match parse_one(sql) {
            Err(Error::DuplicateConstraint {
                path, constraint, ..
            }) => {
                assert_eq!(path, Path::field("foo"), "{sql}");
                assert_eq!(constraint, kind, "{sql}");
            }
            other => panic!("{sql}: unexpected output {other:?}"),
        }
    }
}

#[test]
fn multiple_primary_keys() {
    for sql in [
        "CREATE TABLE test(foo PRIMARY KEY, bar PRIMARY KEY)",
        "CREATE TABLE test(foo PRIMARY KEY, bar, baz INT PRIMARY KEY)",
        "CREATE TABLE test(foo, bar PRIMARY KEY, PRIMARY KEY (foo))",
    ] {
        assert_eq!(
            parse_one(sql),
            Err(Error::MultiplePrimaryKeys {
                table: "test".to_string()
            }),
            "{sql}"
        );
    }
}

#[test]
fn unknown_column_in_table_constraint() {
    let sql = "CREATE TABLE test(foo integer, bar integer, PRIMARY KEY(foo, not_exists))";

    match parse_one(sql) {
        Err(err @ Error::UnknownColumn { .. }) => {
            let span = err.span().unwrap();
            assert_eq!(&sql[span], "not_exists");
        }
        other => panic!("unexpected output {other:?}"),
    }
}

#[test]
fn invalid_type_argument() {
    let err = parse_one("CREATE TABLE test(v VARCHAR(1 IN [1, 2, 3] AND foo > 4) )").unwrap_err();

    assert!(err.is_syntax_error(), "{err:?}");
}

#[test]
fn unknown_type_keyword() {
    assert_eq!(lookup_type_alias("varchar2"), None);
    assert_eq!(lookup_type_alias("Double Precision"), Some(ValueType::Double));

    // an unknown word is not a type, and is not a constraint either
    let err = parse_one("CREATE TABLE test(foo varchar2)").unwrap_err();
    assert!(err.is_syntax_error(), "{err:?}");
}

#[test]
fn deeply_nested_type_argument() {
    for depth in [1000, 20000] {
        let sql = format!(
            "CREATE TABLE t(v VARCHAR({}1{}))",
            "(".repeat(depth),
            ")".repeat(depth)
        );

        let err = parse_one(&sql).unwrap_err();
        assert!(err.is_syntax_error(), "{err:?}");
    }

    assert!(parse_one("CREATE TABLE t(v VARCHAR(((-(255)))))").is_ok());
}

#[test]
fn unexpected_char_location() {
    let sql = "CREATE TABLE a(b !)";

    let err = parse_one(sql).unwrap_err();
    assert!(err.is_syntax_error(), "{err:?}");
    assert_eq!(err.span(), Some(17..=17));
}
