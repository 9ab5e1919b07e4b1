#[cfg(test)]
mod tests {
    use indoc::indoc;
    use silo::{
        ColumnSet, Dialect, Error, HiveSqlWriter, PostgresSqlWriter, SqlWriter, TableDef,
        generate_create_table, generate_insert_select,
    };

    const HIVE: HiveSqlWriter = HiveSqlWriter::new();
    const POSTGRES: PostgresSqlWriter = PostgresSqlWriter::new();

    fn init_logs() {
        let mut logger = env_logger::builder();
        logger.is_test(true);
        if std::env::var("RUST_LOG").is_err() {
            logger.filter_level(log::LevelFilter::Warn);
        }
        let _ = logger.try_init();
    }

    fn student_table() -> TableDef {
        let mut table = TableDef::new("student");
        table.schema = "xyk".into();
        table.comment = "student information".into();
        table.stored_as = "orc".into();
        table.columns = Some(ColumnSet::new(
            ["name", "gender", "age"],
            ["STRING", "BOOLEAN", "INT"],
            ["full name", "gender flag", "age in years"],
        ));
        table
    }

    #[test]
    fn dialect_parsing() {
        assert_eq!("hive".parse::<Dialect>().unwrap(), Dialect::Hive);
        assert_eq!("pg".parse::<Dialect>().unwrap(), Dialect::Postgres);
        match "mysql".parse::<Dialect>() {
            Err(Error::UnsupportedDialect(dialect)) => assert_eq!(dialect, "mysql"),
            other => panic!("expected UnsupportedDialect, got {:?}", other),
        }
    }

    #[test]
    fn dialect_as_str_round_trips() {
        for dialect in [Dialect::Hive, Dialect::Postgres] {
            assert_eq!(dialect.as_str().parse::<Dialect>().unwrap(), dialect);
        }
    }

    #[test]
    fn hive_create_table() {
        init_logs();
        let out = generate_create_table(&student_table(), "hive").unwrap();
        assert_eq!(
            out,
            indoc! {"
                CREATE TABLE IF NOT EXISTS xyk.student (
                \tname\tSTRING\tCOMMENT 'full name',
                \tgender\tBOOLEAN\tCOMMENT 'gender flag',
                \tage\tINT\tCOMMENT 'age in years'
                ) COMMENT 'student information'
                ROW FORMAT DELIMITED FIELDS TERMINATED BY '|'
                STORED AS orc
                ;"}
        );
    }

    #[test]
    fn postgres_create_table() {
        init_logs();
        let out = generate_create_table(&student_table(), "pg").unwrap();
        assert_eq!(
            out,
            indoc! {"
                CREATE TABLE IF NOT EXISTS xyk.student (
                \tname\tSTRING,
                \tgender\tBOOLEAN,
                \tage\tINT
                );
                COMMENT ON TABLE xyk.student IS 'student information';
                COMMENT ON COLUMN xyk.student.name IS 'full name';
                COMMENT ON COLUMN xyk.student.gender IS 'gender flag';
                COMMENT ON COLUMN xyk.student.age IS 'age in years';"}
        );
    }

    #[test]
    fn create_table_without_schema() {
        let mut table = student_table();
        table.schema = String::new();
        let out = generate_create_table(&table, "hive").unwrap();
        assert!(out.starts_with("CREATE TABLE IF NOT EXISTS student (\n"));
    }

    #[test]
    fn comments_with_quotes_are_escaped() {
        let mut table = student_table();
        table.comment = "the student's table".into();
        let out = generate_create_table(&table, "hive").unwrap();
        assert!(out.contains("COMMENT 'the student''s table'"));
    }

    #[test]
    fn missing_columns() {
        let mut table = student_table();
        table.columns = None;
        assert!(matches!(
            generate_create_table(&table, "hive"),
            Err(Error::MissingColumnInfo)
        ));
    }

    #[test]
    fn duplicate_column_names() {
        let mut table = student_table();
        table.columns = Some(ColumnSet::new(
            ["id", "name", "id", "name"],
            ["INT", "STRING", "INT", "STRING"],
            ["a", "b", "c", "d"],
        ));
        match generate_create_table(&table, "pg") {
            Err(Error::DuplicateColumnName { names }) => {
                assert_eq!(names, ["id", "name"]);
            }
            other => panic!("expected DuplicateColumnName, got {:?}", other),
        }
    }

    #[test]
    fn misaligned_metadata_surfaces_length_mismatch() {
        let mut table = student_table();
        table.columns = Some(ColumnSet::new(
            ["name", "gender", "age"],
            ["STRING", "BOOLEAN"],
            ["a", "b", "c"],
        ));
        match generate_create_table(&table, "hive") {
            Err(Error::LengthMismatch { left, right }) => {
                assert_eq!((left, right), (3, 2));
            }
            other => panic!("expected LengthMismatch, got {:?}", other),
        }
    }

    #[test]
    fn hive_needs_aligned_comments() {
        let mut table = student_table();
        table.columns.as_mut().unwrap().comments.pop();
        assert!(matches!(
            generate_create_table(&table, "hive"),
            Err(Error::LengthMismatch { left: 3, right: 2 })
        ));
    }

    #[test]
    fn writers_can_be_used_directly() {
        let mut out = String::new();
        HIVE.write_create_table(&mut out, &student_table()).unwrap();
        assert!(out.starts_with("CREATE TABLE IF NOT EXISTS xyk.student"));
        let mut out = String::new();
        POSTGRES
            .write_create_table(&mut out, &student_table())
            .unwrap();
        assert!(out.contains("COMMENT ON TABLE xyk.student IS 'student information';"));
    }

    #[test]
    fn postgres_insert_select() {
        let mut source = TableDef::new("student_staging");
        source.schema = "stg".into();
        let out = generate_insert_select(&student_table(), &source, "pg").unwrap();
        assert_eq!(
            out,
            indoc! {"
                INSERT INTO xyk.student (name, gender, age)
                SELECT name, gender, age
                FROM stg.student_staging;"}
        );
    }

    #[test]
    fn hive_insert_select() {
        let source = TableDef::new("student_staging");
        let out = generate_insert_select(&student_table(), &source, "hive").unwrap();
        assert_eq!(
            out,
            indoc! {"
                INSERT INTO TABLE xyk.student
                SELECT name, gender, age
                FROM student_staging;"}
        );
    }

    #[test]
    fn insert_select_checks_target_columns() {
        let mut target = student_table();
        target.columns = None;
        let source = TableDef::new("src");
        assert!(matches!(
            generate_insert_select(&target, &source, "pg"),
            Err(Error::MissingColumnInfo)
        ));
    }
}
