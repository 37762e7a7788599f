use {
    super::{
        error::{
            ConstraintKind, DuplicateConstraintSnafu, MultiplePrimaryKeysSnafu, Result,
            UnknownColumnSnafu,
        },
        Parser,
    },
    crate::lexer::Keyword,
    common::{Span, Spanned},
    def::{FieldConstraint, Path},
    snafu::prelude::*,
};

/// Primary keys declared while reading a column list, before reconciliation.
#[derive(Debug, Default)]
pub(super) struct PrimaryKeySources {
    /// Fields that carry an inline `PRIMARY KEY` clause.
    inline: Vec<usize>,
    /// Fields listed by the table-level `PRIMARY KEY (...)`, in listed order.
    table: Option<Vec<usize>>,
}

impl PrimaryKeySources {
    pub(super) fn add_inline(&mut self, index: usize) {
        self.inline.push(index);
    }

    /// Settles the key of `table`: a table-level constraint wins as long as it
    /// covers every inline key, and without one at most one inline key is allowed.
    pub(super) fn resolve(self, table: &str) -> Result<Vec<usize>> {
        match self.table {
            Some(keys) => {
                ensure!(
                    self.inline.iter().all(|i| keys.contains(i)),
                    MultiplePrimaryKeysSnafu { table }
                );
                Ok(keys)
            }
            None => {
                ensure!(self.inline.len() <= 1, MultiplePrimaryKeysSnafu { table });
                Ok(self.inline)
            }
        }
    }
}

fn ensure_not_declared(
    declared: bool,
    path: &Path,
    constraint: ConstraintKind,
    span: Span,
) -> Result<()> {
    ensure!(
        !declared,
        DuplicateConstraintSnafu {
            path: path.clone(),
            constraint,
            span,
        }
    );

    Ok(())
}

impl<'a> Parser<'a> {
    /// Reads the type and constraint clauses following the path of a column,
    /// in any order, up to the next `,` or `)`.
    pub(super) fn parse_field_constraint(&mut self, path: Path) -> Result<FieldConstraint> {
        let mut field = FieldConstraint::new(path);

        loop {
            if let Some(Spanned(value_type, span)) = self.try_parse_value_type()? {
                let declared = field.value_type.is_some();
                ensure_not_declared(declared, &field.path, ConstraintKind::Type, span)?;
                field.value_type = Some(value_type);
            } else if let Some(span) =
                self.match_keyword_sequence(&[Keyword::PRIMARY, Keyword::KEY])
            {
                let declared = field.is_primary_key;
                ensure_not_declared(declared, &field.path, ConstraintKind::PrimaryKey, span)?;
                field.is_primary_key = true;
            } else if let Some(span) = self.match_keyword_sequence(&[Keyword::NOT, Keyword::NULL])
            {
                let declared = field.is_not_null;
                ensure_not_declared(declared, &field.path, ConstraintKind::NotNull, span)?;
                field.is_not_null = true;
            } else {
                return Ok(field);
            }
        }
    }

    /// Reads the `(name, ...)` list of a table-level `PRIMARY KEY`, whose
    /// keywords were already consumed, against the fields declared so far.
    pub(super) fn parse_table_primary_key(
        &mut self,
        table: &str,
        fields: &mut [FieldConstraint],
        sources: &mut PrimaryKeySources,
    ) -> Result<()> {
        ensure!(sources.table.is_none(), MultiplePrimaryKeysSnafu { table });

        let Spanned(names, _) =
            self.parse_comma_separated_within_parentheses(Self::parse_identifier)?;

        let mut keys = Vec::with_capacity(names.len());
        for Spanned(name, span) in names {
            let index = fields
                .iter()
                .position(|field| field.path.as_field_name() == Some(name.as_str()))
                .context(UnknownColumnSnafu {
                    name: name.as_str(),
                    span: span.clone(),
                })?;

            let field = &mut fields[index];
            let declared = keys.contains(&index);
            ensure_not_declared(declared, &field.path, ConstraintKind::PrimaryKey, span)?;

            field.is_primary_key = true;
            keys.push(index);
        }

        sources.table = Some(keys);

        Ok(())
    }
}
