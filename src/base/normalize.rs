use crate::base;
use crate::base::schema::Field;

/// Builds one record from a data row. Never fails: any field that is missing
/// or unreadable takes its default.
pub fn normalize<S>(row: &[S], cols: &base::Columns) -> base::Record
where
    S: AsRef<str>,
{
    let cell = move |field| cols.get(field, row).unwrap_or_default();
    let date = match cols.get(Field::Date, row) {
        Some(s) => match base::Date::from_timestamp(s) {
            Ok(dt) => Some(dt),
            Err(e) => {
                tracing::debug!(error = %e, "leaving date empty");
                None
            }
        },
        None => None,
    };
    base::Record::new(
        date,
        cell(Field::Supplier),
        base::Category::new(
            cell(Field::Label),
            cell(Field::SubLabel),
            cell(Field::MicroLabel),
        ),
        base::Price::coerce(cell(Field::Price)),
        cell(Field::Message).to_string(),
        cols.get(Field::Link, row).map(str::to_string),
    )
}

/// Maps and normalizes every data row of `table`. Rows whose cells are all
/// blank are skipped.
pub fn normalize_table(table: &base::Table, source: base::Source) -> base::Recordlist {
    let cols = base::schema::map(
        table.header.as_slice(),
        table.rows.first().map(Vec::as_slice),
        source,
    );
    let rl = table
        .rows
        .iter()
        .filter(|row| row.iter().any(|c| !c.trim().is_empty()))
        .map(|row| normalize(row, &cols))
        .collect::<base::Recordlist>();
    tracing::debug!(?source, records = rl.len(), "normalized table");
    rl
}
