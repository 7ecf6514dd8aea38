//! Conversion of the ESG "wide" tabular JSON shape into a display table.
//!
//! The scores-full body carries column metadata in `headers[i].title` and
//! row data in `data`, aligned positionally. A body that lacks that shape
//! (notably the HTTP-200 `{error: ...}` envelope) fails conversion with
//! [`RdpError::Conversion`], which is how callers distinguish "request
//! succeeded, data unusable" from a failed request.

use std::fmt;

use serde_json::Value;

use crate::core::RdpError;

/// A column-ordered table of scalar JSON values.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Converts an ESG scores-full body into a table.
    ///
    /// # Errors
    ///
    /// - [`RdpError::InvalidInput`] when the input is JSON `null` or an
    ///   empty object.
    /// - [`RdpError::Conversion`] when `headers` or `data` is missing or
    ///   malformed, a header lacks a string `title`, or a row's length does
    ///   not match the column count.
    pub fn from_esg(body: &Value) -> Result<Self, RdpError> {
        if body.is_null() || body.as_object().is_some_and(serde_json::Map::is_empty) {
            return Err(RdpError::InvalidInput);
        }

        let headers = body
            .get("headers")
            .and_then(Value::as_array)
            .ok_or_else(|| RdpError::Conversion("missing or non-array `headers`".into()))?;

        let columns = headers
            .iter()
            .map(|h| {
                h.get("title")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .ok_or_else(|| RdpError::Conversion("header entry without a `title`".into()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let data = body
            .get("data")
            .and_then(Value::as_array)
            .ok_or_else(|| RdpError::Conversion("missing or non-array `data`".into()))?;

        let mut rows = Vec::with_capacity(data.len());
        for row in data {
            let cells = row
                .as_array()
                .ok_or_else(|| RdpError::Conversion("data row is not an array".into()))?;
            if cells.len() != columns.len() {
                return Err(RdpError::Conversion(format!(
                    "row has {} cells but there are {} columns",
                    cells.len(),
                    columns.len()
                )));
            }
            rows.push(cells.clone());
        }

        Ok(Self { columns, rows })
    }

    /// Column titles, in header order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Data rows, positionally aligned with [`columns`](Self::columns).
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Projects a subset of columns, in the requested order.
    ///
    /// # Errors
    ///
    /// Returns [`RdpError::Conversion`] if any requested title is not a
    /// column of this table.
    pub fn select(&self, titles: &[&str]) -> Result<Self, RdpError> {
        let indices = titles
            .iter()
            .map(|t| {
                self.columns
                    .iter()
                    .position(|c| c == t)
                    .ok_or_else(|| RdpError::Conversion(format!("no column titled {t:?}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
            .collect();

        Ok(Self {
            columns: titles.iter().map(|t| (*t).to_string()).collect(),
            rows,
        })
    }

    /// The first `n` rows (fewer if the table is shorter).
    #[must_use]
    pub fn head(&self, n: usize) -> Self {
        Self {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }
}

fn cell_text(v: &Value) -> String {
    match v {
        // Strings render without surrounding quotes.
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut widths: Vec<usize> = self.columns.iter().map(String::len).collect();
        let rendered: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(cell_text).collect())
            .collect();
        for row in &rendered {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.len());
            }
        }

        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                write!(f, "  ")?;
            }
            write!(f, "{col:<width$}", width = widths[i])?;
        }
        writeln!(f)?;
        for row in &rendered {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{cell:<width$}", width = widths[i])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
