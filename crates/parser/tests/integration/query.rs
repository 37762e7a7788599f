use {
    def::{FieldConstraint, Path, TableInfo, ValueType},
    parser::{
        ast::{CreateIndexStmt, CreateTableStmt, Statement},
        parse_query, CancellationToken, Error,
    },
    std::thread,
};

#[test]
fn statements_keep_source_order() {
    let sql = "
        CREATE TABLE foo (a INT PRIMARY KEY);
        -- comments and stray semicolons are skipped
        ;;
        CREATE UNIQUE INDEX idx_a ON foo (a);
        CREATE TABLE bar;
    ";

    let query = parse_query(&CancellationToken::new(), sql).unwrap();

    assert_eq!(
        query.statements,
        vec![
            Statement::CreateTable(CreateTableStmt {
                table_name: "foo".to_string(),
                if_not_exists: false,
                info: TableInfo {
                    field_constraints: vec![FieldConstraint {
                        value_type: Some(ValueType::Integer),
                        is_primary_key: true,
                        ..FieldConstraint::new(Path::field("a"))
                    }],
                    primary_keys: vec![0],
                },
            }),
            Statement::CreateIndex(CreateIndexStmt {
                index_name: "idx_a".to_string(),
                table_name: "foo".to_string(),
                path: Path::field("a"),
                if_not_exists: false,
                unique: true,
            }),
            Statement::CreateTable(CreateTableStmt {
                table_name: "bar".to_string(),
                ..Default::default()
            }),
        ]
    );
}

#[test]
fn empty_input() {
    for sql in ["", "   ", ";", "-- nothing here"] {
        let query = parse_query(&CancellationToken::new(), sql).unwrap();
        assert!(query.statements.is_empty(), "{sql:?}");
    }
}

#[test]
fn error_discards_earlier_statements() {
    let sql = "CREATE TABLE a; CREATE INDEX i ON a (x); CREATE TABLE b(x PRIMARY KEY, y PRIMARY KEY)";

    assert_eq!(
        parse_query(&CancellationToken::new(), sql),
        Err(Error::MultiplePrimaryKeys {
            table: "b".to_string()
        })
    );
}

#[test]
fn statements_must_be_separated() {
    let err = parse_query(&CancellationToken::new(), "CREATE TABLE a CREATE TABLE b").unwrap_err();

    let span = err.span().unwrap();
    assert_eq!(span, 15..=20);
}

#[test]
fn unsupported_statement() {
    let err = parse_query(&CancellationToken::new(), "DROP TABLE foo").unwrap_err();
    assert!(err.is_syntax_error(), "{err:?}");
}

#[test]
fn cancelled_before_parsing() {
    let ctx = CancellationToken::new();
    ctx.cancel();

    assert_eq!(
        parse_query(&ctx, "CREATE TABLE foo"),
        Err(Error::Cancelled {})
    );
}

#[test]
fn cancelled_from_another_thread() {
    let sql = "CREATE TABLE t(a INT, b TEXT, PRIMARY KEY (a));".repeat(2000);
    let ctx = CancellationToken::new();

    let canceller = {
        let ctx = ctx.clone();
        thread::spawn(move || ctx.cancel())
    };

    // whenever the token flips, no partial batch is ever returned
    match parse_query(&ctx, &sql) {
        Ok(query) => assert_eq!(query.statements.len(), 2000),
        Err(err) => assert_eq!(err, Error::Cancelled {}),
    }

    canceller.join().unwrap();
    assert_eq!(parse_query(&ctx, &sql), Err(Error::Cancelled {}));
}

#[test]
fn parse_from_many_threads() {
    let ctx = CancellationToken::new();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let ctx = ctx.clone();
            thread::spawn(move || {
                let sql = format!("CREATE TABLE t{i}(a INT, PRIMARY KEY (a))");
                parse_query(&ctx, &sql)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let query = handle.join().unwrap().unwrap();
        match &query.statements[..] {
            [Statement::CreateTable(stmt)] => {
                assert_eq!(stmt.table_name, format!("t{i}"));
                assert_eq!(stmt.info.primary_keys, vec![0]);
            }
            other => panic!("unexpected statements {other:?}"),
        }
    }
}
